// ==========================================
// 运动目录数据整合工具 - 导出层
// ==========================================
// 职责: 内存表 → 定序 CSV 文件
// 红线: 失败不得留下可见的半截文件
// ==========================================

pub mod csv_writer;
pub mod error;

// 重导出核心类型
pub use csv_writer::CsvExporter;
pub use error::{ExportError, ExportResult};
