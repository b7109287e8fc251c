// ==========================================
// 运动目录数据整合工具 - 目录装载器
// ==========================================
// 职责: 文件 → 原始行 → 类型化记录,应用坏记录策略
// 红线: 坏记录不得静默丢弃,要么中止要么记入违规报告
// ==========================================

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use crate::config::{ColumnMapping, MalformedPolicy};
use crate::domain::{CatalogRecord, DqLevel, DqViolation, SupplementRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::loader_trait::FileParser;

// ==========================================
// CatalogLoader - 目录装载器
// ==========================================
pub struct CatalogLoader {
    parser: Box<dyn FileParser>,
    mapper: FieldMapper,
    malformed: MalformedPolicy,
}

impl CatalogLoader {
    pub fn new(
        parser: Box<dyn FileParser>,
        columns: ColumnMapping,
        malformed: MalformedPolicy,
    ) -> Self {
        Self {
            parser,
            mapper: FieldMapper::new(columns),
            malformed,
        }
    }

    /// 装载主目录
    ///
    /// 保持行序;返回有效记录与坏记录违规明细
    pub fn load_primary(
        &self,
        path: &Path,
    ) -> ImportResult<(Vec<CatalogRecord>, Vec<DqViolation>)> {
        let raw_rows = self.parser.parse_to_raw_records(path)?;
        self.map_rows(raw_rows, |mapper, row, row_number| {
            mapper.map_catalog_row(row, row_number)
        })
    }

    /// 装载副目录
    pub fn load_supplement(
        &self,
        path: &Path,
    ) -> ImportResult<(Vec<SupplementRecord>, Vec<DqViolation>)> {
        let raw_rows = self.parser.parse_to_raw_records(path)?;
        self.map_rows(raw_rows, |mapper, row, row_number| {
            mapper.map_supplement_row(row, row_number)
        })
    }

    // ==========================================
    // 行映射 + 坏记录策略
    // ==========================================

    fn map_rows<T, F>(
        &self,
        raw_rows: Vec<HashMap<String, String>>,
        map_one: F,
    ) -> ImportResult<(Vec<T>, Vec<DqViolation>)>
    where
        F: Fn(&FieldMapper, &HashMap<String, String>, usize) -> ImportResult<T>,
    {
        let mut records = Vec::with_capacity(raw_rows.len());
        let mut violations = Vec::new();

        // 行号从 1 起,表头不计
        for (idx, row) in raw_rows.iter().enumerate() {
            let row_number = idx + 1;
            match map_one(&self.mapper, row, row_number) {
                Ok(record) => records.push(record),
                Err(err @ (ImportError::MalformedRecord { .. }
                | ImportError::TypeConversionError { .. })) => match self.malformed {
                    MalformedPolicy::Fail => return Err(err),
                    MalformedPolicy::Collect => {
                        warn!(row_number, error = %err, "坏记录已跳过并记入报告");
                        violations.push(DqViolation {
                            row_number,
                            name: None,
                            level: DqLevel::Error,
                            field: "record".to_string(),
                            message: err.to_string(),
                        });
                    }
                },
                Err(err) => return Err(err),
            }
        }

        Ok((records, violations))
    }
}
