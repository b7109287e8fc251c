// ==========================================
// 运动目录数据整合工具 - 目录校验器
// ==========================================
// 职责: 主目录内部重名/重号检查
// 策略: 保留首次出现,后续重复记入违规（Conflict 级）
// ==========================================

use std::collections::HashSet;

use crate::domain::{CatalogRecord, DqLevel, DqViolation};

pub struct CatalogValidator;

impl CatalogValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验主目录的主键与名称唯一性
    ///
    /// 同名/同号的后续记录被丢弃并记录违规;
    /// 返回去重后的目录与违规明细
    pub fn validate_primary(
        &self,
        records: Vec<CatalogRecord>,
    ) -> (Vec<CatalogRecord>, Vec<DqViolation>) {
        let mut violations = Vec::new();
        let mut seen_ids = HashSet::new();
        let mut seen_names = HashSet::new();
        let mut kept = Vec::with_capacity(records.len());

        for record in records {
            // 主键重复（同目录内）
            if !seen_ids.insert(record.id) {
                violations.push(DqViolation {
                    row_number: record.row_number,
                    name: Some(record.name.clone()),
                    level: DqLevel::Conflict,
                    field: "PT_IDX".to_string(),
                    message: format!("重复主键（目录内）: {}", record.id),
                });
                continue;
            }

            // 名称重复（同目录内）
            if !seen_names.insert(record.name.clone()) {
                violations.push(DqViolation {
                    row_number: record.row_number,
                    name: Some(record.name.clone()),
                    level: DqLevel::Conflict,
                    field: "PT_NAME".to_string(),
                    message: format!("重复名称（目录内）: {}", record.name),
                });
                continue;
            }

            kept.push(record);
        }

        (kept, violations)
    }
}

impl Default for CatalogValidator {
    fn default() -> Self {
        Self::new()
    }
}
