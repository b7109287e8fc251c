// ==========================================
// 运动目录数据整合工具 - 采集模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 错误按 URL 粒度分区上报,不中止整轮采集
// ==========================================

use thiserror::Error;

/// 采集模块错误类型
#[derive(Error, Debug)]
pub enum ScrapeError {
    // ===== 请求相关错误 =====
    #[error("请求失败: {0}")]
    RequestFailed(String),

    #[error("HTTP 状态异常 ({status}): {url}")]
    HttpStatus { url: String, status: u16 },

    // ===== 页面解析错误 =====
    #[error("页面缺少字段 {field}: {url}")]
    MissingField { url: String, field: String },

    // ===== 列表页错误（致命,中止整轮采集）=====
    #[error("列表页不可用: {0}")]
    ListingUnavailable(String),

    #[error("列表文件读取失败: {0}")]
    ListingFileError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<reqwest::Error>
impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::RequestFailed(err.to_string())
    }
}

/// Result 类型别名
pub type ScrapeResult<T> = Result<T, ScrapeError>;
