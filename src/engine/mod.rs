// ==========================================
// 运动目录数据整合工具 - 引擎层
// ==========================================
// 职责: 纯内存的合并与规范化规则
// 红线: 引擎不做 I/O, 所有丢弃必须输出违规明细
// ==========================================

pub mod normalize;
pub mod reconcile;
pub mod validate;

// 重导出核心引擎
pub use normalize::NormalizeEngine;
pub use reconcile::ReconcileEngine;
pub use validate::CatalogValidator;
