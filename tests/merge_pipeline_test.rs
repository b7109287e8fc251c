// ==========================================
// 合并流水线端到端测试
// ==========================================
// 覆盖: 完整合并 / 编号连续性 / 幂等性 / 缺文件中止 / 拆步编号策略
// ==========================================

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use fitsync_dataprep::config::options::{ENTITY_FILE, INSTRUCTION_FILE, MERGED_FILE};
use fitsync_dataprep::config::{ColumnMapping, MalformedPolicy, MergeOptions};
use fitsync_dataprep::importer::ImportError;
use fitsync_dataprep::pipeline::MergePipeline;

// ==========================================
// 测试辅助函数
// ==========================================

/// 在临时目录写一个输入 CSV,返回路径
fn write_csv(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// 读回输出 CSV（剥掉 BOM）,返回含表头的行列表
fn read_csv(path: &Path) -> Vec<Vec<String>> {
    let text = std::fs::read_to_string(path).unwrap();
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes());
    reader
        .records()
        .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
        .collect()
}

fn options(dir: &TempDir, primary: PathBuf, supplement: PathBuf) -> MergeOptions {
    MergeOptions {
        primary_path: primary,
        supplement_path: supplement,
        out_dir: dir.path().to_path_buf(),
        emit_merged: false,
        malformed: MalformedPolicy::Fail,
        columns: ColumnMapping::default(),
    }
}

const PRIMARY_CSV: &str = "\
PT_IDX,PT_NAME,PT_CATEGORY,PT_WRITER,PT_HIDDEN
1,푸시업,가슴,admin,0
2,스쿼트,하체,admin,0
5,플랭크,코어,admin,1
";

const SUPPLEMENT_CSV: &str = "\
PT_IDX,PT_NAME,PT_CATEGORY,PT_IMAGE,PT_CONTENT
1,푸시업,가슴,push.png,엎드린다 | 내려간다 | 올라온다
2,런지,하체,lunge.png,한 발을 내딛는다 | 무릎을 굽힌다
3,버피,전신,burpee.png,
";

// ==========================================
// 完整合并场景
// ==========================================

#[test]
fn test_full_merge_produces_both_tables() {
    let dir = TempDir::new().unwrap();
    let primary = write_csv(dir.path(), "pt.csv", PRIMARY_CSV);
    let supplement = write_csv(dir.path(), "burnfit.csv", SUPPLEMENT_CSV);

    let report = MergePipeline::new(options(&dir, primary, supplement))
        .run()
        .unwrap();

    // 主 3 条 + 新增 런지/버피 2 条
    assert_eq!(report.primary_rows, 3);
    assert_eq!(report.supplement_rows, 3);
    assert_eq!(report.new_records, 2);
    assert_eq!(report.unified_rows, 5);
    assert_eq!(report.entity_rows, 5);
    assert!(report.violations.is_empty());

    let entities = read_csv(&dir.path().join(ENTITY_FILE));
    assert_eq!(entities[0], vec!["id", "name", "category", "description"]);
    assert_eq!(entities.len(), 1 + 5);

    // id 全局唯一且升序
    let ids: Vec<i64> = entities[1..].iter().map(|r| r[0].parse().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(ids, sorted);

    // 新记录编号从 max(5)+1 起连续分配,按副目录顺序
    assert_eq!(ids, vec![1, 2, 5, 6, 7]);
    assert_eq!(entities[4][1], "런지");
    assert_eq!(entities[5][1], "버피");

    // 每个名称恰好出现一次
    let mut names: Vec<&str> = entities[1..].iter().map(|r| r[1].as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 5);
}

#[test]
fn test_instruction_table_contents() {
    let dir = TempDir::new().unwrap();
    let primary = write_csv(dir.path(), "pt.csv", PRIMARY_CSV);
    let supplement = write_csv(dir.path(), "burnfit.csv", SUPPLEMENT_CSV);

    MergePipeline::new(options(&dir, primary, supplement))
        .run()
        .unwrap();

    let rows = read_csv(&dir.path().join(INSTRUCTION_FILE));
    assert_eq!(rows[0], vec!["exercise_id", "step_order", "description"]);

    // 푸시업 (id=1): 3 步;런지 (id=6): 2 步;버피: 无说明 → 零行
    let of = |id: &str| -> Vec<(String, String)> {
        rows[1..]
            .iter()
            .filter(|r| r[0] == id)
            .map(|r| (r[1].clone(), r[2].clone()))
            .collect()
    };

    assert_eq!(
        of("1"),
        vec![
            ("1".to_string(), "엎드린다".to_string()),
            ("2".to_string(), "내려간다".to_string()),
            ("3".to_string(), "올라온다".to_string()),
        ]
    );
    assert_eq!(of("6").len(), 2);
    assert!(of("7").is_empty());
}

#[test]
fn test_empty_segment_consumes_step_number() {
    let dir = TempDir::new().unwrap();
    let primary = write_csv(dir.path(), "pt.csv", "PT_IDX,PT_NAME,PT_CATEGORY\n1,푸시업,가슴\n");
    let supplement = write_csv(
        dir.path(),
        "burnfit.csv",
        "PT_NAME,PT_CATEGORY,PT_IMAGE,PT_CONTENT\n푸시업,가슴,p.png,A||B\n",
    );

    MergePipeline::new(options(&dir, primary, supplement))
        .run()
        .unwrap();

    let rows = read_csv(&dir.path().join(INSTRUCTION_FILE));
    // 空段占号: 编号 1 和 3
    assert_eq!(rows.len(), 1 + 2);
    assert_eq!(rows[1], vec!["1", "1", "A"]);
    assert_eq!(rows[2], vec!["1", "3", "B"]);
}

// ==========================================
// 补充语义
// ==========================================

#[test]
fn test_unmatched_primary_gets_absent_enrichment() {
    let dir = TempDir::new().unwrap();
    let primary = write_csv(
        dir.path(),
        "pt.csv",
        "PT_IDX,PT_NAME,PT_CATEGORY,PT_IMAGE\n1,푸시업,가슴,old.png\n",
    );
    let supplement = write_csv(
        dir.path(),
        "burnfit.csv",
        "PT_NAME,PT_CATEGORY,PT_IMAGE,PT_CONTENT\n런지,하체,l.png,스텝\n",
    );

    let mut opts = options(&dir, primary, supplement);
    opts.emit_merged = true;
    MergePipeline::new(opts).run().unwrap();

    let merged = read_csv(&dir.path().join(MERGED_FILE));
    // 푸시업 在副目录无匹配: image/content 为显式空值,不保留旧值
    let pushup: &Vec<String> = merged[1..].iter().find(|r| r[1] == "푸시업").unwrap();
    assert_eq!(pushup[3], "");
    assert_eq!(pushup[4], "");

    // 新记录补默认值: writer 空, hidden 0
    let lunge: &Vec<String> = merged[1..].iter().find(|r| r[1] == "런지").unwrap();
    assert_eq!(lunge[0], "2");
    assert_eq!(lunge[5], "");
    assert_eq!(lunge[6], "0");
}

#[test]
fn test_empty_primary_ids_start_at_one() {
    let dir = TempDir::new().unwrap();
    let primary = write_csv(dir.path(), "pt.csv", "PT_IDX,PT_NAME,PT_CATEGORY\n");
    let supplement = write_csv(
        dir.path(),
        "burnfit.csv",
        "PT_NAME,PT_CATEGORY,PT_IMAGE,PT_CONTENT\n런지,하체,l.png,\n플랭크,코어,p.png,\n",
    );

    let report = MergePipeline::new(options(&dir, primary, supplement))
        .run()
        .unwrap();
    assert_eq!(report.new_records, 2);

    let entities = read_csv(&dir.path().join(ENTITY_FILE));
    let ids: Vec<&str> = entities[1..].iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

// ==========================================
// 幂等性
// ==========================================

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let primary = write_csv(dir.path(), "pt.csv", PRIMARY_CSV);
    let supplement = write_csv(dir.path(), "burnfit.csv", SUPPLEMENT_CSV);
    let opts = options(&dir, primary, supplement);

    MergePipeline::new(opts.clone()).run().unwrap();
    let entities_1 = std::fs::read(dir.path().join(ENTITY_FILE)).unwrap();
    let instructions_1 = std::fs::read(dir.path().join(INSTRUCTION_FILE)).unwrap();

    MergePipeline::new(opts).run().unwrap();
    let entities_2 = std::fs::read(dir.path().join(ENTITY_FILE)).unwrap();
    let instructions_2 = std::fs::read(dir.path().join(INSTRUCTION_FILE)).unwrap();

    assert_eq!(entities_1, entities_2);
    assert_eq!(instructions_1, instructions_2);
}

// ==========================================
// 失败场景
// ==========================================

#[test]
fn test_missing_primary_aborts_without_outputs() {
    let dir = TempDir::new().unwrap();
    let supplement = write_csv(dir.path(), "burnfit.csv", SUPPLEMENT_CSV);

    let err = MergePipeline::new(options(
        &dir,
        dir.path().join("no_such.csv"),
        supplement,
    ))
    .run()
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ImportError>(),
        Some(ImportError::SourceNotFound(_))
    ));

    // 输出文件一个都不能出现
    assert!(!dir.path().join(ENTITY_FILE).exists());
    assert!(!dir.path().join(INSTRUCTION_FILE).exists());
}

#[test]
fn test_malformed_name_fail_fast_by_default() {
    let dir = TempDir::new().unwrap();
    let primary = write_csv(
        dir.path(),
        "pt.csv",
        "PT_IDX,PT_NAME,PT_CATEGORY\n1,푸시업,가슴\n2,,하체\n",
    );
    let supplement = write_csv(dir.path(), "burnfit.csv", SUPPLEMENT_CSV);

    let err = MergePipeline::new(options(&dir, primary, supplement))
        .run()
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ImportError>(),
        Some(ImportError::MalformedRecord { row: 2, .. })
    ));
    assert!(!dir.path().join(ENTITY_FILE).exists());
}

#[test]
fn test_malformed_collect_policy_reports_and_continues() {
    let dir = TempDir::new().unwrap();
    let primary = write_csv(
        dir.path(),
        "pt.csv",
        "PT_IDX,PT_NAME,PT_CATEGORY\n1,푸시업,가슴\n2,,하체\n",
    );
    let supplement = write_csv(dir.path(), "burnfit.csv", SUPPLEMENT_CSV);

    let mut opts = options(&dir, primary, supplement);
    opts.malformed = MalformedPolicy::Collect;

    let report = MergePipeline::new(opts).run().unwrap();
    assert_eq!(report.primary_rows, 1);
    assert_eq!(report.violations.len(), 1);
    assert!(dir.path().join(ENTITY_FILE).exists());
}
