// ==========================================
// 运动目录数据整合工具 - 运动库采集器
// ==========================================
// 流程: 列表页 → 详情链接 → 并发抓取 → 成功/失败分区
// 编号: PT_IDX 取链接表中的序号（1 起）,失败链接留空洞
// ==========================================

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::domain::{ScrapeFailure, ScrapeReport, SupplementRecord};
use crate::scraper::error::{ScrapeError, ScrapeResult};
use crate::scraper::fetcher::PageFetcher;
use crate::scraper::page_parser::{self, ScrapedExercise};

// ==========================================
// LibraryScraper - 运动库采集器
// ==========================================
pub struct LibraryScraper {
    fetcher: Arc<dyn PageFetcher>,
    concurrency: usize,
}

impl LibraryScraper {
    pub fn new(fetcher: Arc<dyn PageFetcher>, concurrency: usize) -> Self {
        Self {
            fetcher,
            concurrency: concurrency.max(1),
        }
    }

    /// 从列表页 HTML 开始采集
    ///
    /// 列表页无详情链接视为列表页不可用（多为 JS 渲染的列表,
    /// 需改用预渲染的 --listing-file）
    pub async fn scrape_from_listing(
        &self,
        listing_html: &str,
        link_prefix: &str,
    ) -> ScrapeResult<(Vec<SupplementRecord>, ScrapeReport)> {
        let links = page_parser::collect_detail_links(listing_html, link_prefix)?;
        if links.is_empty() {
            return Err(ScrapeError::ListingUnavailable(
                "列表页未包含任何详情链接".to_string(),
            ));
        }
        info!(count = links.len(), "收集到详情页链接");
        Ok(self.scrape_details(&links).await)
    }

    /// 并发抓取详情页,按链接顺序编号
    pub async fn scrape_details(
        &self,
        links: &[String],
    ) -> (Vec<SupplementRecord>, ScrapeReport) {
        let results: Vec<(usize, String, ScrapeResult<ScrapedExercise>)> =
            stream::iter(links.iter().cloned().enumerate())
                .map(|(idx, url)| {
                    let fetcher = Arc::clone(&self.fetcher);
                    async move {
                        let result = fetch_and_parse(fetcher.as_ref(), &url).await;
                        (idx + 1, url, result)
                    }
                })
                .buffer_unordered(self.concurrency)
                .collect()
                .await;

        // 并发完成顺序不定,按链接序号还原确定性输出顺序
        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        for (index, url, result) in results {
            match result {
                Ok(page) => {
                    info!(index, name = %page.name, "页面采集成功");
                    succeeded.push(to_supplement(index, page));
                }
                Err(err) => {
                    warn!(index, url = %url, error = %err, "页面采集失败");
                    failed.push((
                        index,
                        ScrapeFailure {
                            url,
                            reason: err.to_string(),
                        },
                    ));
                }
            }
        }
        succeeded.sort_by_key(|r| r.row_number);
        failed.sort_by_key(|(index, _)| *index);

        let report = ScrapeReport {
            attempted: links.len(),
            succeeded: succeeded.len(),
            failed: failed.into_iter().map(|(_, f)| f).collect(),
        };
        (succeeded, report)
    }
}

/// 抓取并解析单个详情页
async fn fetch_and_parse(
    fetcher: &dyn PageFetcher,
    url: &str,
) -> ScrapeResult<ScrapedExercise> {
    let body = fetcher.fetch(url).await?;
    page_parser::parse_detail(url, &body)
}

/// 采集结果 → 副目录记录（row_number 即链接序号）
fn to_supplement(index: usize, page: ScrapedExercise) -> SupplementRecord {
    SupplementRecord {
        name: page.name,
        category: page.category,
        image: Some(page.image),
        content: page.content,
        row_number: index,
    }
}
