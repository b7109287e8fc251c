// ==========================================
// 运动目录数据整合工具 - 合并主流程
// ==========================================
// 流程: 装载 → 校验 → 合并 → 规范化 → 导出
// 语义: 要么完整成功,要么在失败阶段中止且不留半成品输出
// ==========================================

use std::time::Instant;

use anyhow::Context;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::MergeOptions;
use crate::config::options::{ENTITY_FILE, INSTRUCTION_FILE, MERGED_FILE};
use crate::domain::MergeReport;
use crate::engine::{CatalogValidator, NormalizeEngine, ReconcileEngine};
use crate::exporter::CsvExporter;
use crate::importer::{CatalogLoader, CsvParser};

// ==========================================
// MergePipeline - 合并流水线
// ==========================================
pub struct MergePipeline {
    options: MergeOptions,
}

impl MergePipeline {
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// 执行一次完整合并
    ///
    /// 单线程单趟,全程在内存中,只在装载/导出两端做文件 I/O
    pub fn run(&self) -> anyhow::Result<MergeReport> {
        let start_time = Instant::now();
        let started_at = Utc::now();
        let run_id = Uuid::new_v4().to_string();

        info!(run_id = %run_id, "开始合并运动目录");
        let mut violations = Vec::new();

        // === 步骤 1: 装载两份目录 ===
        debug!("步骤 1: 装载目录");
        let loader = CatalogLoader::new(
            Box::new(CsvParser),
            self.options.columns.clone(),
            self.options.malformed,
        );

        let (primary, primary_violations) = loader
            .load_primary(&self.options.primary_path)
            .context("阶段失败: 主目录装载")?;
        violations.extend(primary_violations);

        let (supplement, supplement_violations) = loader
            .load_supplement(&self.options.supplement_path)
            .context("阶段失败: 副目录装载")?;
        violations.extend(supplement_violations);

        info!(
            primary_rows = primary.len(),
            supplement_rows = supplement.len(),
            "目录装载完成"
        );

        // === 步骤 2: 主目录唯一性校验 ===
        debug!("步骤 2: 主目录唯一性校验");
        let (primary, validate_violations) = CatalogValidator::new().validate_primary(primary);
        violations.extend(validate_violations);

        let primary_rows = primary.len();
        let supplement_rows = supplement.len();

        // === 步骤 3: 按名称合并 ===
        debug!("步骤 3: 按名称合并");
        let reconciler = ReconcileEngine::new();

        let image_lookup = reconciler.build_image_lookup(&supplement);
        let content_lookup = reconciler.build_content_lookup(&supplement);
        let enriched_images = primary
            .iter()
            .filter(|r| image_lookup.contains_key(&r.name))
            .count();
        let enriched_contents = primary
            .iter()
            .filter(|r| content_lookup.contains_key(&r.name))
            .count();

        let enriched = reconciler.merge_attributes(primary, &image_lookup, &content_lookup);

        let (new_supplements, reconcile_violations) =
            reconciler.find_new_records(&enriched, &supplement);
        violations.extend(reconcile_violations);

        let start_id = reconciler.next_id(&enriched);
        let mut new_records = reconciler.promote(&new_supplements);
        reconciler.assign_ids(&mut new_records, start_id);
        reconciler.fill_defaults(&mut new_records);

        let new_count = new_records.len();
        let unified = reconciler.unify(enriched, new_records);
        info!(
            new_records = new_count,
            unified_rows = unified.len(),
            start_id,
            "目录合并完成"
        );

        // === 步骤 4: 规范化拆表 ===
        debug!("步骤 4: 规范化拆表");
        let normalizer = NormalizeEngine::new();
        let entity_rows = normalizer.to_entity_rows(&unified);
        let instruction_rows = normalizer.to_instruction_rows(&unified);

        // === 步骤 5: 导出 ===
        debug!("步骤 5: 导出");
        let exporter = CsvExporter::new();
        exporter
            .export_entities(&entity_rows, &self.options.out_dir.join(ENTITY_FILE))
            .context("阶段失败: 实体表导出")?;
        exporter
            .export_instructions(
                &instruction_rows,
                &self.options.out_dir.join(INSTRUCTION_FILE),
            )
            .context("阶段失败: 步骤表导出")?;
        if self.options.emit_merged {
            exporter
                .export_merged(&unified, &self.options.out_dir.join(MERGED_FILE))
                .context("阶段失败: 统一目录导出")?;
        }

        let report = MergeReport {
            run_id,
            started_at,
            primary_rows,
            supplement_rows,
            enriched_images,
            enriched_contents,
            new_records: new_count,
            unified_rows: unified.len(),
            entity_rows: entity_rows.len(),
            instruction_rows: instruction_rows.len(),
            violations,
            elapsed_ms: start_time.elapsed().as_millis() as i64,
        };

        info!(
            run_id = %report.run_id,
            unified_rows = report.unified_rows,
            instruction_rows = report.instruction_rows,
            violations = report.violations.len(),
            elapsed_ms = report.elapsed_ms,
            "合并运行成功"
        );
        debug!(
            report_json = %serde_json::to_string(&report).unwrap_or_default(),
            "运行报告"
        );

        Ok(report)
    }
}
