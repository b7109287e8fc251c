// ==========================================
// 运动目录数据整合工具 - 字段映射器实现
// ==========================================
// 职责: 源列名 → 逻辑字段映射 + 类型转换
// 列名集合来自配置层,核心逻辑不关心具体表头
// ==========================================

use crate::config::ColumnMapping;
use crate::domain::{CatalogRecord, SupplementRecord};
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

pub struct FieldMapper {
    columns: ColumnMapping,
}

impl FieldMapper {
    pub fn new(columns: ColumnMapping) -> Self {
        Self { columns }
    }

    // ==========================================
    // 行映射
    // ==========================================

    /// 把一行原始数据映射为主目录记录
    ///
    /// # 参数
    /// - row: 列名 → 单元格值
    /// - row_number: 源文件行号（1 起）
    ///
    /// # 错误
    /// - 主键缺失/名称缺失 → MalformedRecord
    /// - 主键不是整数 → TypeConversionError
    pub fn map_catalog_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<CatalogRecord> {
        let id = match self.get_string(row, &self.columns.id) {
            Some(raw) => self.parse_i64(&raw, "PT_IDX", row_number)?,
            None => {
                return Err(ImportError::MalformedRecord {
                    row: row_number,
                    message: "主键 PT_IDX 缺失".to_string(),
                })
            }
        };

        let name = self.require_name(row, row_number)?;

        Ok(CatalogRecord {
            id,
            name,
            category: self.get_string(row, &self.columns.category).unwrap_or_default(),
            image: self.get_string(row, &self.columns.image),
            content: self.get_string(row, &self.columns.content),
            writer: self.get_string(row, &self.columns.writer),
            hidden: match self.get_string(row, &self.columns.hidden) {
                Some(raw) => Some(self.parse_i64(&raw, "PT_HIDDEN", row_number)?),
                None => None,
            },
            row_number,
        })
    }

    /// 把一行原始数据映射为副目录记录
    ///
    /// 副目录自带的 PT_IDX 被忽略,标识符一律由合并引擎重新分配
    pub fn map_supplement_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<SupplementRecord> {
        let name = self.require_name(row, row_number)?;

        Ok(SupplementRecord {
            name,
            category: self.get_string(row, &self.columns.category).unwrap_or_default(),
            image: self.get_string(row, &self.columns.image),
            content: self.get_string(row, &self.columns.content),
            row_number,
        })
    }

    // ==========================================
    // 字段提取
    // ==========================================

    /// 名称是连接键,缺失的记录无法参与合并
    fn require_name(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<String> {
        self.get_string(row, &self.columns.name)
            .ok_or_else(|| ImportError::MalformedRecord {
                row: row_number,
                message: "名称 PT_NAME 缺失".to_string(),
            })
    }

    /// 按候选列名顺序提取字符串字段,空白视同缺失
    fn get_string(&self, row: &HashMap<String, String>, keys: &[String]) -> Option<String> {
        for key in keys {
            if let Some(v) = row.get(key) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    /// 解析整数
    fn parse_i64(&self, value: &str, field: &str, row_number: usize) -> ImportResult<i64> {
        value
            .parse::<i64>()
            .map_err(|_| ImportError::TypeConversionError {
                row: row_number,
                field: field.to_string(),
                message: format!("无法解析为整数: {}", value),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn mapper() -> FieldMapper {
        FieldMapper::new(ColumnMapping::default())
    }

    #[test]
    fn test_map_catalog_row_full() {
        let record = mapper()
            .map_catalog_row(
                &row(&[
                    ("PT_IDX", "3"),
                    ("PT_NAME", "푸시업"),
                    ("PT_CATEGORY", "가슴"),
                    ("PT_WRITER", "admin"),
                    ("PT_HIDDEN", "1"),
                ]),
                1,
            )
            .unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.name, "푸시업");
        assert_eq!(record.category, "가슴");
        assert_eq!(record.writer.as_deref(), Some("admin"));
        assert_eq!(record.hidden, Some(1));
        assert_eq!(record.image, None);
    }

    #[test]
    fn test_map_catalog_row_missing_id() {
        let result = mapper().map_catalog_row(&row(&[("PT_NAME", "푸시업")]), 5);
        assert!(matches!(
            result,
            Err(ImportError::MalformedRecord { row: 5, .. })
        ));
    }

    #[test]
    fn test_map_catalog_row_bad_id() {
        let result =
            mapper().map_catalog_row(&row(&[("PT_IDX", "abc"), ("PT_NAME", "푸시업")]), 2);
        assert!(matches!(
            result,
            Err(ImportError::TypeConversionError { row: 2, .. })
        ));
    }

    #[test]
    fn test_map_supplement_row_missing_name() {
        let result = mapper().map_supplement_row(&row(&[("PT_CATEGORY", "가슴")]), 7);
        assert!(matches!(
            result,
            Err(ImportError::MalformedRecord { row: 7, .. })
        ));
    }

    #[test]
    fn test_map_supplement_row_blank_content_is_none() {
        let record = mapper()
            .map_supplement_row(
                &row(&[("PT_NAME", "런지"), ("PT_CONTENT", "   ")]),
                1,
            )
            .unwrap();
        assert_eq!(record.content, None);
    }
}
