// ==========================================
// 运动目录数据整合工具 - 采集层
// ==========================================
// 职责: 从运动库网站生成补充目录 CSV
// 边界: 列表页的浏览器渲染由外部协作方完成,
//       本层接受直接可取的列表页或预渲染 HTML 文件
// ==========================================

pub mod error;
pub mod fetcher;
pub mod library_scraper;
pub mod page_parser;

// 重导出核心类型
pub use error::{ScrapeError, ScrapeResult};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use library_scraper::LibraryScraper;
pub use page_parser::ScrapedExercise;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::options::DETAIL_LINK_PREFIX;
use crate::config::ScrapeOptions;
use crate::domain::ScrapeReport;
use crate::exporter::CsvExporter;

/// 采集主流程: 列表页 → 详情页 → 补充目录 CSV
///
/// 输出 CSV 只含成功页面;失败明细进入返回的报告
pub async fn run(options: &ScrapeOptions) -> anyhow::Result<ScrapeReport> {
    let fetcher = Arc::new(HttpFetcher::new(options.timeout_secs, options.max_attempts)?);
    let scraper = LibraryScraper::new(fetcher.clone(), options.concurrency);

    // 列表页: 预渲染文件优先,否则直接抓取
    let listing_html = match &options.listing_file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            ScrapeError::ListingFileError(format!("{}: {}", path.display(), e))
        })?,
        None => fetcher.fetch(&options.listing_url).await?,
    };

    let (records, report) = scraper
        .scrape_from_listing(&listing_html, DETAIL_LINK_PREFIX)
        .await?;

    CsvExporter::new().export_supplement(&records, &options.out_path)?;

    info!(
        attempted = report.attempted,
        succeeded = report.succeeded,
        failed = report.failed.len(),
        path = %options.out_path.display(),
        "采集完成"
    );
    for failure in &report.failed {
        warn!(url = %failure.url, reason = %failure.reason, "采集失败明细");
    }

    Ok(report)
}
