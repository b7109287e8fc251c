// ==========================================
// 运动目录数据整合工具 - CSV 导出器
// ==========================================
// 编码: UTF-8 + BOM（下游电子表格工具才能正确读韩文）
// 写法: 先写同目录临时文件,成功后原子改名覆盖目标
// ==========================================

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tempfile::NamedTempFile;
use tracing::info;

use crate::config::columns::{
    ENTITY_HEADERS, INSTRUCTION_HEADERS, MERGED_HEADERS, SUPPLEMENT_HEADERS,
};
use crate::domain::{CatalogRecord, EntityRow, InstructionRow, SupplementRecord};
use crate::exporter::error::ExportResult;

/// UTF-8 字节序标记
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ==========================================
// CsvExporter - CSV 导出器
// ==========================================
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// 导出实体表 exercises.csv
    pub fn export_entities(&self, rows: &[EntityRow], path: &Path) -> ExportResult<()> {
        self.write_atomic(path, |wtr| {
            wtr.write_record(ENTITY_HEADERS)?;
            for row in rows {
                wtr.write_record(&[
                    row.id.to_string(),
                    row.name.clone(),
                    row.category.clone(),
                    row.description.clone().unwrap_or_default(),
                ])?;
            }
            Ok(())
        })?;
        info!(rows = rows.len(), path = %path.display(), "实体表导出完成");
        Ok(())
    }

    /// 导出步骤表 exercise_instructions.csv
    pub fn export_instructions(&self, rows: &[InstructionRow], path: &Path) -> ExportResult<()> {
        self.write_atomic(path, |wtr| {
            wtr.write_record(INSTRUCTION_HEADERS)?;
            for row in rows {
                wtr.write_record(&[
                    row.exercise_id.to_string(),
                    row.step_order.to_string(),
                    row.description.clone(),
                ])?;
            }
            Ok(())
        })?;
        info!(rows = rows.len(), path = %path.display(), "步骤表导出完成");
        Ok(())
    }

    /// 导出统一目录 final_merged_pt_data.csv（可选）
    pub fn export_merged(&self, records: &[CatalogRecord], path: &Path) -> ExportResult<()> {
        self.write_atomic(path, |wtr| {
            wtr.write_record(MERGED_HEADERS)?;
            for record in records {
                wtr.write_record(&[
                    record.id.to_string(),
                    record.name.clone(),
                    record.category.clone(),
                    record.image.clone().unwrap_or_default(),
                    record.content.clone().unwrap_or_default(),
                    record.writer.clone().unwrap_or_default(),
                    record.hidden.map(|h| h.to_string()).unwrap_or_default(),
                ])?;
            }
            Ok(())
        })?;
        info!(rows = records.len(), path = %path.display(), "统一目录导出完成");
        Ok(())
    }

    /// 导出采集到的补充目录（PT_IDX 为链接序号,失败链接留空洞）
    pub fn export_supplement(
        &self,
        records: &[SupplementRecord],
        path: &Path,
    ) -> ExportResult<()> {
        self.write_atomic(path, |wtr| {
            wtr.write_record(SUPPLEMENT_HEADERS)?;
            for record in records {
                wtr.write_record(&[
                    record.row_number.to_string(),
                    record.name.clone(),
                    record.category.clone(),
                    record.image.clone().unwrap_or_default(),
                    record.content.clone().unwrap_or_default(),
                ])?;
            }
            Ok(())
        })?;
        info!(rows = records.len(), path = %path.display(), "补充目录导出完成");
        Ok(())
    }

    // ==========================================
    // 原子写入
    // ==========================================

    /// 写入目标同目录的临时文件,成功后原子改名覆盖
    ///
    /// 任一步失败都只留下目标文件的旧状态（或不存在）,
    /// 临时文件随 NamedTempFile 的释放一并清理
    fn write_atomic<F>(&self, path: &Path, write_rows: F) -> ExportResult<()>
    where
        F: FnOnce(&mut csv::Writer<&mut File>) -> ExportResult<()>,
    {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.as_file_mut().write_all(UTF8_BOM)?;

        {
            let mut wtr = WriterBuilder::new().from_writer(temp.as_file_mut());
            write_rows(&mut wtr)?;
            wtr.flush()?;
        }

        temp.persist(path)?;
        Ok(())
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entity(id: i64, name: &str, category: &str) -> EntityRow {
        EntityRow {
            id,
            name: name.to_string(),
            category: category.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_export_entities_bom_and_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exercises.csv");

        CsvExporter::new()
            .export_entities(&[entity(1, "푸시업", "가슴")], &path)
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);

        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,name,category,description"));
        assert_eq!(lines.next(), Some("1,푸시업,가슴,"));
    }

    #[test]
    fn test_export_quotes_fields_containing_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("merged.csv");

        let record = CatalogRecord {
            id: 1,
            name: "푸시업".to_string(),
            category: "가슴".to_string(),
            image: Some("a.png,a.gif".to_string()),
            content: None,
            writer: None,
            hidden: Some(0),
            row_number: 1,
        };

        CsvExporter::new().export_merged(&[record], &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"a.png,a.gif\""));
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exercises.csv");
        std::fs::write(&path, "stale").unwrap();

        CsvExporter::new()
            .export_entities(&[entity(2, "스쿼트", "하체")], &path)
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.contains("스쿼트"));
    }

    #[test]
    fn test_export_leaves_no_temp_files_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exercises.csv");

        CsvExporter::new().export_entities(&[], &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("exercises.csv")]);
    }
}
