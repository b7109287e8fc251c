// ==========================================
// 运动目录数据整合工具 - 导入层
// ==========================================
// 职责: 读取两份目录 CSV,生成类型化内存表
// 流程: 解析 → 字段映射 → 坏记录策略
// ==========================================

// 模块声明
pub mod catalog_loader;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod loader_trait;

// 重导出核心类型
pub use catalog_loader::CatalogLoader;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::CsvParser;

// 重导出 Trait 接口
pub use loader_trait::FileParser;
