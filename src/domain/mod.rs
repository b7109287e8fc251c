// ==========================================
// 运动目录数据整合工具 - 领域模型层
// ==========================================
// 职责: 定义目录记录、输出行、运行报告类型
// 红线: 不含文件访问逻辑,不含合并逻辑
// ==========================================

pub mod exercise;
pub mod report;

// 重导出核心类型
pub use exercise::{CatalogRecord, EntityRow, InstructionRow, SupplementRecord};
pub use report::{DqLevel, DqViolation, MergeReport, ScrapeFailure, ScrapeReport};
