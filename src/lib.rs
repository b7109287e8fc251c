// ==========================================
// 运动目录数据整合工具 - 核心库
// ==========================================
// 技术栈: Rust + csv + tokio/reqwest
// 系统定位: 一次性批处理数据准备工具
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与报告类型
pub mod domain;

// 配置层 - 列名映射与运行选项
pub mod config;

// 导入层 - 目录装载
pub mod importer;

// 引擎层 - 合并与规范化规则
pub mod engine;

// 导出层 - CSV 输出
pub mod exporter;

// 采集层 - 补充目录抓取
pub mod scraper;

// 流水线 - 合并主流程编排
pub mod pipeline;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CatalogRecord, DqLevel, DqViolation, EntityRow, InstructionRow, MergeReport, ScrapeReport,
    SupplementRecord,
};

// 配置
pub use config::{ColumnMapping, MalformedPolicy, MergeOptions, ScrapeOptions};

// 导入
pub use importer::{CatalogLoader, CsvParser, ImportError, ImportResult};

// 引擎
pub use engine::{CatalogValidator, NormalizeEngine, ReconcileEngine};

// 导出
pub use exporter::{CsvExporter, ExportError, ExportResult};

// 采集（crate:: 前缀区分同名的 scraper 外部库）
pub use crate::scraper::{HttpFetcher, LibraryScraper, PageFetcher, ScrapeError, ScrapedExercise};

// 流水线
pub use pipeline::MergePipeline;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "运动目录数据整合工具";
