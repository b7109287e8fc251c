// ==========================================
// 运动目录数据整合工具 - 运动领域模型
// ==========================================
// 来源字段: PT_IDX / PT_NAME / PT_CATEGORY / PT_IMAGE / PT_CONTENT / PT_WRITER / PT_HIDDEN
// 输出表: exercises (实体表) + exercise_instructions (步骤表)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CatalogRecord - 主目录记录
// ==========================================
// 用途: 导入层写入,引擎层补充 image/content 与合并
// 对齐: 主目录 CSV 的一行（合并后即统一记录）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    // ===== 主键 =====
    pub id: i64, // 运动唯一标识（PT_IDX，允许有空洞）

    // ===== 基础信息 =====
    pub name: String,     // 运动名称（自然连接键，精确匹配）
    pub category: String, // 运动分类

    // ===== 补充字段（由副目录按名称补齐）=====
    pub image: Option<String>,   // 图片引用（可能为逗号连接的多个 URI）
    pub content: Option<String>, // 动作说明（竖线分隔的多个步骤）

    // ===== 管理字段 =====
    pub writer: Option<String>, // 录入者（新合成记录为空）
    pub hidden: Option<i64>,    // 隐藏标志（整数布尔，新合成记录为 0）

    // ===== 元信息 =====
    pub row_number: usize, // 源文件行号（1 起，诊断用，不导出）
}

// ==========================================
// SupplementRecord - 副目录记录
// ==========================================
// 用途: 名称查找表的数据源 + 新记录合成的数据源
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementRecord {
    pub name: String,            // 运动名称（连接键）
    pub category: String,        // 运动分类
    pub image: Option<String>,   // 图片引用
    pub content: Option<String>, // 动作说明

    // ===== 元信息 =====
    pub row_number: usize, // 源文件行号（1 起）
}

// ==========================================
// EntityRow - 实体表输出行
// ==========================================
// 列序: id, name, category, description
// 说明: description 当前流水线无数据来源,恒为空,预留给后续补充
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

// ==========================================
// InstructionRow - 步骤表输出行
// ==========================================
// 列序: exercise_id, step_order, description
// step_order 从 1 起,按分割前的段位置编号（空段占号）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionRow {
    pub exercise_id: i64,
    pub step_order: usize,
    pub description: String,
}
