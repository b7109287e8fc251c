// ==========================================
// 运动目录数据整合工具 - 表规范化引擎
// ==========================================
// 职责: 统一记录集 → 实体表 + 步骤表
// 输入: 按 id 升序的统一记录集
// 输出: EntityRow / InstructionRow 序列
// ==========================================

use crate::domain::{CatalogRecord, EntityRow, InstructionRow};

/// 步骤分隔符
const STEP_DELIMITER: char = '|';

// ==========================================
// NormalizeEngine - 表规范化引擎
// ==========================================
pub struct NormalizeEngine {
    // 无状态引擎,不需要注入依赖
}

impl NormalizeEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 投影实体表
    ///
    /// 每条统一记录恰好一行; description 当前无数据来源,恒为空
    pub fn to_entity_rows(&self, unified: &[CatalogRecord]) -> Vec<EntityRow> {
        unified
            .iter()
            .map(|record| EntityRow {
                id: record.id,
                name: record.name.clone(),
                category: record.category.clone(),
                description: None,
            })
            .collect()
    }

    /// 拆分步骤表
    ///
    /// content 按 '|' 分割,逐段去空白,去空白后为空的段不产生行;
    /// step_order 取分割前的段位置（1 起）: 空段占用编号,
    /// 因此 "A||B" 产生编号 1 和 3 的两行。
    /// 选择该策略是为了与既有数据的 (exercise_id, step_order) 对齐
    pub fn to_instruction_rows(&self, unified: &[CatalogRecord]) -> Vec<InstructionRow> {
        let mut rows = Vec::new();

        for record in unified {
            let content = match &record.content {
                Some(content) => content,
                None => continue, // 无说明 → 零行
            };

            for (idx, segment) in content.split(STEP_DELIMITER).enumerate() {
                let description = segment.trim();
                if description.is_empty() {
                    continue;
                }
                rows.push(InstructionRow {
                    exercise_id: record.id,
                    step_order: idx + 1,
                    description: description.to_string(),
                });
            }
        }

        rows
    }
}

impl Default for NormalizeEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, content: Option<&str>) -> CatalogRecord {
        CatalogRecord {
            id,
            name: format!("운동{}", id),
            category: "가슴".to_string(),
            image: None,
            content: content.map(|s| s.to_string()),
            writer: None,
            hidden: Some(0),
            row_number: id as usize,
        }
    }

    #[test]
    fn test_entity_rows_one_per_record() {
        let engine = NormalizeEngine::new();
        let rows = engine.to_entity_rows(&[record(1, None), record(2, Some("x"))]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].name, "운동1");
        assert_eq!(rows[0].description, None);
    }

    #[test]
    fn test_instruction_rows_basic_split() {
        let engine = NormalizeEngine::new();
        let rows = engine
            .to_instruction_rows(&[record(1, Some("Stand straight | Bend knees | Push up"))]);

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.step_order).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(rows[0].description, "Stand straight");
        assert_eq!(rows[1].description, "Bend knees");
        assert_eq!(rows[2].description, "Push up");
    }

    #[test]
    fn test_instruction_rows_empty_segment_consumes_step_number() {
        let engine = NormalizeEngine::new();
        let rows = engine.to_instruction_rows(&[record(1, Some("A||B"))]);

        // 空段占号: 两行,编号 1 和 3
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].step_order, 1);
        assert_eq!(rows[0].description, "A");
        assert_eq!(rows[1].step_order, 3);
        assert_eq!(rows[1].description, "B");
    }

    #[test]
    fn test_instruction_rows_none_content_emits_nothing() {
        let engine = NormalizeEngine::new();
        let rows = engine.to_instruction_rows(&[record(1, None)]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_instruction_rows_whitespace_only_content_emits_nothing() {
        let engine = NormalizeEngine::new();
        let rows = engine.to_instruction_rows(&[record(1, Some("  |  "))]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_instruction_rows_multiple_records() {
        let engine = NormalizeEngine::new();
        let rows =
            engine.to_instruction_rows(&[record(1, Some("a|b")), record(5, Some("c"))]);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].exercise_id, 5);
        assert_eq!(rows[2].step_order, 1);
    }
}
