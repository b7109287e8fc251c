// ==========================================
// 运动目录数据整合工具 - 运行报告类型
// ==========================================
// 职责: 数据质量违规明细 + 合并/采集运行汇总
// 红线: 违规必须可见,禁止静默丢弃任何记录
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// DqLevel - 数据质量违规等级
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DqLevel {
    /// 阻断级: 记录无法参与合并（如名称缺失）
    Error,
    /// 警告级: 记录被策略性跳过（如副目录重名）
    Warning,
    /// 冲突级: 与既有记录冲突（如主目录重名/重号）
    Conflict,
}

// ==========================================
// DqViolation - 数据质量违规明细
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DqViolation {
    pub row_number: usize,        // 源文件行号（1 起）
    pub name: Option<String>,     // 涉及的运动名称（可能缺失）
    pub level: DqLevel,           // 违规等级
    pub field: String,            // 涉及字段
    pub message: String,          // 违规说明
}

// ==========================================
// MergeReport - 合并运行汇总
// ==========================================
// 一次运行要么完整成功,要么在首个致命错误处中止;
// 本报告仅在成功时产生
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    /// 运行批次ID
    pub run_id: String,
    /// 运行开始时间
    pub started_at: DateTime<Utc>,

    // ===== 输入统计 =====
    pub primary_rows: usize,    // 主目录有效记录数
    pub supplement_rows: usize, // 副目录有效记录数

    // ===== 合并统计 =====
    pub enriched_images: usize,   // 按名称补到图片的主记录数
    pub enriched_contents: usize, // 按名称补到说明的主记录数
    pub new_records: usize,       // 合成的新记录数
    pub unified_rows: usize,      // 统一记录总数

    // ===== 输出统计 =====
    pub entity_rows: usize,      // 实体表行数（== unified_rows）
    pub instruction_rows: usize, // 步骤表行数

    // ===== 数据质量 =====
    pub violations: Vec<DqViolation>,

    /// 运行耗时（毫秒）
    pub elapsed_ms: i64,
}

// ==========================================
// ScrapeReport - 采集运行汇总
// ==========================================
// 逐 URL 的成功/失败分区,失败不写入输出 CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeReport {
    pub attempted: usize,            // 尝试抓取的链接数
    pub succeeded: usize,            // 成功解析的页面数
    pub failed: Vec<ScrapeFailure>,  // 失败明细
}

/// 单个链接的采集失败记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeFailure {
    pub url: String,
    pub reason: String,
}
