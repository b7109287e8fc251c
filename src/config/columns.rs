// ==========================================
// 运动目录数据整合工具 - 列名映射
// ==========================================
// 职责: 逻辑字段 → 源文件列名（含别名）映射
// 来源列名: 原始导出使用 PT_ 前缀的大写列名
// ==========================================

// ==========================================
// ColumnMapping - 源文件列名映射
// ==========================================
// 每个逻辑字段对应一组候选列名,按序尝试,取首个非空值
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub id: Vec<String>,
    pub name: Vec<String>,
    pub category: Vec<String>,
    pub image: Vec<String>,
    pub content: Vec<String>,
    pub writer: Vec<String>,
    pub hidden: Vec<String>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            id: aliases(&["PT_IDX", "id"]),
            name: aliases(&["PT_NAME", "name"]),
            category: aliases(&["PT_CATEGORY", "category"]),
            image: aliases(&["PT_IMAGE", "image"]),
            content: aliases(&["PT_CONTENT", "content"]),
            writer: aliases(&["PT_WRITER", "writer"]),
            hidden: aliases(&["PT_HIDDEN", "hidden"]),
        }
    }
}

fn aliases(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// ==========================================
// 输出表列序（固定,不含行号列）
// ==========================================

/// 实体表表头: exercises.csv
pub const ENTITY_HEADERS: [&str; 4] = ["id", "name", "category", "description"];

/// 步骤表表头: exercise_instructions.csv
pub const INSTRUCTION_HEADERS: [&str; 3] = ["exercise_id", "step_order", "description"];

/// 统一目录表头: 合并后的全量目录（可选导出）
pub const MERGED_HEADERS: [&str; 7] = [
    "PT_IDX",
    "PT_NAME",
    "PT_CATEGORY",
    "PT_IMAGE",
    "PT_CONTENT",
    "PT_WRITER",
    "PT_HIDDEN",
];

/// 补充目录表头: 采集器输出
pub const SUPPLEMENT_HEADERS: [&str; 5] = [
    "PT_IDX",
    "PT_NAME",
    "PT_CATEGORY",
    "PT_IMAGE",
    "PT_CONTENT",
];
