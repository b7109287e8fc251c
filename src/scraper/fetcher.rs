// ==========================================
// 运动目录数据整合工具 - 页面抓取器
// ==========================================
// 职责: 单 URL 抓取,带超时与有限重试
// 接口: PageFetcher trait,测试用桩实现替换
// ==========================================

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::scraper::error::{ScrapeError, ScrapeResult};

/// 页面抓取接口
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> ScrapeResult<String>;
}

// ==========================================
// HttpFetcher - reqwest 实现
// ==========================================
pub struct HttpFetcher {
    client: reqwest::Client,
    max_attempts: u32,
}

impl HttpFetcher {
    /// 构建带单请求超时的 HTTP 抓取器
    ///
    /// # 参数
    /// - timeout_secs: 单请求超时（秒）
    /// - max_attempts: 单 URL 最大尝试次数（至少 1）
    pub fn new(timeout_secs: u64, max_attempts: u32) -> ScrapeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(format!("fitsync-dataprep/{}", crate::VERSION))
            .build()?;

        Ok(Self {
            client,
            max_attempts: max_attempts.max(1),
        })
    }

    async fn fetch_once(&self, url: &str) -> ScrapeResult<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> ScrapeResult<String> {
        let mut last_err = None;

        for attempt in 1..=self.max_attempts {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    warn!(url, attempt, error = %err, "抓取尝试失败");
                    last_err = Some(err);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| ScrapeError::RequestFailed(url.to_string())))
    }
}
