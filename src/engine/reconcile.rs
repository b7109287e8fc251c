// ==========================================
// 运动目录数据整合工具 - 目录合并引擎
// ==========================================
// 职责: 按名称把副目录并入主目录,合成新记录并统一编号
// 输入: 主目录记录 + 副目录记录
// 输出: 按 id 升序的统一记录集
// ==========================================

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{CatalogRecord, DqLevel, DqViolation, SupplementRecord};

// ==========================================
// ReconcileEngine - 目录合并引擎
// ==========================================
pub struct ReconcileEngine {
    // 无状态引擎,不需要注入依赖
}

impl ReconcileEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 查找表构建
    // ==========================================

    /// 构建 名称 → 图片 查找表
    ///
    /// 副目录重名时后出现者覆盖先出现者（last-wins,覆盖语义的映射构建）
    pub fn build_image_lookup(&self, supplement: &[SupplementRecord]) -> HashMap<String, String> {
        self.build_lookup(supplement, |r| r.image.as_deref())
    }

    /// 构建 名称 → 说明 查找表（last-wins,同上）
    pub fn build_content_lookup(&self, supplement: &[SupplementRecord]) -> HashMap<String, String> {
        self.build_lookup(supplement, |r| r.content.as_deref())
    }

    fn build_lookup<F>(&self, supplement: &[SupplementRecord], value: F) -> HashMap<String, String>
    where
        F: Fn(&SupplementRecord) -> Option<&str>,
    {
        let mut lookup = HashMap::with_capacity(supplement.len());
        for record in supplement {
            if let Some(v) = value(record) {
                lookup.insert(record.name.clone(), v.to_string());
            }
        }
        lookup
    }

    // ==========================================
    // 属性补充
    // ==========================================

    /// 按名称把图片与说明并入主目录记录
    ///
    /// 语义: image/content 整列以查找结果为准,
    /// 无匹配的名称得到显式的 None（不是空串,也不是保留旧值）;
    /// 其余主目录属性一律不变
    pub fn merge_attributes(
        &self,
        mut primary: Vec<CatalogRecord>,
        image_lookup: &HashMap<String, String>,
        content_lookup: &HashMap<String, String>,
    ) -> Vec<CatalogRecord> {
        for record in &mut primary {
            record.image = image_lookup.get(&record.name).cloned();
            record.content = content_lookup.get(&record.name).cloned();
        }
        primary
    }

    // ==========================================
    // 新记录识别与合成
    // ==========================================

    /// 找出主目录中不存在的副目录记录
    ///
    /// 名称按精确字符串匹配,不做大小写/空白规范化;
    /// 副目录内部重名保留首次出现,后续记入 Warning 违规,
    /// 保证每个名称在统一集中恰好出现一次
    pub fn find_new_records(
        &self,
        primary: &[CatalogRecord],
        supplement: &[SupplementRecord],
    ) -> (Vec<SupplementRecord>, Vec<DqViolation>) {
        let primary_names: HashSet<&str> = primary.iter().map(|r| r.name.as_str()).collect();

        let mut new_records = Vec::new();
        let mut taken = HashSet::new();
        let mut violations = Vec::new();

        for record in supplement {
            if primary_names.contains(record.name.as_str()) {
                continue;
            }
            if !taken.insert(record.name.clone()) {
                violations.push(DqViolation {
                    row_number: record.row_number,
                    name: Some(record.name.clone()),
                    level: DqLevel::Warning,
                    field: "PT_NAME".to_string(),
                    message: format!("副目录重名,保留首次出现: {}", record.name),
                });
                continue;
            }
            new_records.push(record.clone());
        }

        debug!(count = new_records.len(), "识别出主目录缺失的新记录");
        (new_records, violations)
    }

    /// 下一个可用标识符
    ///
    /// 取主目录最大 id + 1;主目录为空时显式回落到 1
    pub fn next_id(&self, primary: &[CatalogRecord]) -> i64 {
        primary.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
    }

    /// 把副目录记录提升为目录记录,id 置 0 待分配
    pub fn promote(&self, new_records: &[SupplementRecord]) -> Vec<CatalogRecord> {
        new_records
            .iter()
            .map(|r| CatalogRecord {
                id: 0,
                name: r.name.clone(),
                category: r.category.clone(),
                image: r.image.clone(),
                content: r.content.clone(),
                writer: None,
                hidden: None,
                row_number: r.row_number,
            })
            .collect()
    }

    /// 按迭代顺序分配连续标识符 start_id, start_id+1, …
    pub fn assign_ids(&self, records: &mut [CatalogRecord], start_id: i64) {
        for (offset, record) in records.iter_mut().enumerate() {
            record.id = start_id + offset as i64;
        }
    }

    /// 补齐新记录的结构性必填字段: writer 置空, hidden 置 0
    pub fn fill_defaults(&self, records: &mut [CatalogRecord]) {
        for record in records {
            record.writer = None;
            record.hidden = Some(0);
        }
    }

    // ==========================================
    // 统一
    // ==========================================

    /// 拼接补充后的主目录与新记录,按 id 升序得到确定性的最终顺序
    pub fn unify(
        &self,
        enriched: Vec<CatalogRecord>,
        new_records: Vec<CatalogRecord>,
    ) -> Vec<CatalogRecord> {
        let mut unified = enriched;
        unified.extend(new_records);
        unified.sort_by_key(|r| r.id);
        unified
    }
}

impl Default for ReconcileEngine {
    fn default() -> Self {
        Self::new()
    }
}
