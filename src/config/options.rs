// ==========================================
// 运动目录数据整合工具 - 运行选项
// ==========================================
// 默认值复刻原始脚本的固定文件名,输出到当前目录
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::columns::ColumnMapping;

/// 主目录默认文件名
pub const DEFAULT_PRIMARY: &str = "pt0730.csv";

/// 副目录默认文件名
pub const DEFAULT_SUPPLEMENT: &str = "burnfit_exercise_sample_with_images.csv";

/// 实体表输出文件名
pub const ENTITY_FILE: &str = "exercises.csv";

/// 步骤表输出文件名
pub const INSTRUCTION_FILE: &str = "exercise_instructions.csv";

/// 统一目录输出文件名（可选导出）
pub const MERGED_FILE: &str = "final_merged_pt_data.csv";

/// 采集目标: 运动库列表页
pub const DEFAULT_LISTING_URL: &str = "https://burnfit.io/exercise_library/";

/// 采集目标: 详情页链接前缀
pub const DETAIL_LINK_PREFIX: &str = "https://burnfit.io/라이브러리/";

// ==========================================
// MalformedPolicy - 坏记录处理策略
// ==========================================
// 缺失名称/主键的记录无法参与连接与去重
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedPolicy {
    /// 快速失败（默认）: 首个坏记录即中止整次运行
    Fail,
    /// 收集跳过: 坏记录记入违规报告后跳过,运行继续
    Collect,
}

impl Default for MalformedPolicy {
    fn default() -> Self {
        MalformedPolicy::Fail
    }
}

// ==========================================
// MergeOptions - 合并流水线选项
// ==========================================
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// 主目录 CSV 路径
    pub primary_path: PathBuf,
    /// 副目录 CSV 路径
    pub supplement_path: PathBuf,
    /// 输出目录
    pub out_dir: PathBuf,
    /// 是否同时导出统一目录（final_merged_pt_data.csv）
    pub emit_merged: bool,
    /// 坏记录处理策略
    pub malformed: MalformedPolicy,
    /// 列名映射
    pub columns: ColumnMapping,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            primary_path: PathBuf::from(DEFAULT_PRIMARY),
            supplement_path: PathBuf::from(DEFAULT_SUPPLEMENT),
            out_dir: PathBuf::from("."),
            emit_merged: false,
            malformed: MalformedPolicy::default(),
            columns: ColumnMapping::default(),
        }
    }
}

// ==========================================
// ScrapeOptions - 采集器选项
// ==========================================
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// 列表页地址
    pub listing_url: String,
    /// 预渲染的列表页 HTML 文件（提供时跳过列表页抓取）
    pub listing_file: Option<PathBuf>,
    /// 输出 CSV 路径
    pub out_path: PathBuf,
    /// 并发抓取上限
    pub concurrency: usize,
    /// 单请求超时（秒）
    pub timeout_secs: u64,
    /// 单请求最大尝试次数
    pub max_attempts: u32,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            listing_file: None,
            out_path: PathBuf::from(DEFAULT_SUPPLEMENT),
            concurrency: 4,
            timeout_secs: 5,
            max_attempts: 2,
        }
    }
}
