// ==========================================
// 运动目录数据整合工具 - 命令行主入口
// ==========================================
// 子命令: merge（合并规范化） / scrape（采集补充目录）
// 默认值复刻原始脚本的固定文件名
// ==========================================

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use fitsync_dataprep::config::options::{
    DEFAULT_LISTING_URL, DEFAULT_PRIMARY, DEFAULT_SUPPLEMENT,
};
use fitsync_dataprep::config::{ColumnMapping, MalformedPolicy, MergeOptions, ScrapeOptions};
use fitsync_dataprep::{logging, pipeline::MergePipeline, scraper};

#[derive(Parser)]
#[command(name = "fitsync-dataprep", version, about = fitsync_dataprep::APP_NAME)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 合并两份目录并拆分为实体表/步骤表
    Merge(MergeArgs),
    /// 采集运动库网站,生成补充目录 CSV
    Scrape(ScrapeArgs),
}

#[derive(clap::Args)]
struct MergeArgs {
    /// 主目录 CSV 路径
    #[arg(long, default_value = DEFAULT_PRIMARY)]
    primary: PathBuf,

    /// 副目录 CSV 路径
    #[arg(long, default_value = DEFAULT_SUPPLEMENT)]
    supplement: PathBuf,

    /// 输出目录
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// 同时导出统一目录 final_merged_pt_data.csv
    #[arg(long)]
    emit_merged: bool,

    /// 坏记录记入报告并跳过（默认遇坏记录即中止）
    #[arg(long)]
    collect_malformed: bool,
}

#[derive(clap::Args)]
struct ScrapeArgs {
    /// 运动库列表页地址
    #[arg(long, default_value = DEFAULT_LISTING_URL)]
    listing_url: String,

    /// 预渲染的列表页 HTML 文件（JS 渲染的列表用浏览器另存后传入）
    #[arg(long)]
    listing_file: Option<PathBuf>,

    /// 输出 CSV 路径
    #[arg(long, default_value = DEFAULT_SUPPLEMENT)]
    out: PathBuf,

    /// 并发抓取上限
    #[arg(long, default_value_t = 4)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", fitsync_dataprep::APP_NAME);
    tracing::info!("系统版本: {}", fitsync_dataprep::VERSION);
    tracing::info!("==================================================");

    let cli = Cli::parse();

    match cli.command {
        Commands::Merge(args) => {
            let options = MergeOptions {
                primary_path: args.primary,
                supplement_path: args.supplement,
                out_dir: args.out_dir,
                emit_merged: args.emit_merged,
                malformed: if args.collect_malformed {
                    MalformedPolicy::Collect
                } else {
                    MalformedPolicy::Fail
                },
                columns: ColumnMapping::default(),
            };

            let report = MergePipeline::new(options).run()?;
            if !report.violations.is_empty() {
                tracing::warn!(count = report.violations.len(), "运行存在数据质量违规");
            }
        }
        Commands::Scrape(args) => {
            let options = ScrapeOptions {
                listing_url: args.listing_url,
                listing_file: args.listing_file,
                out_path: args.out,
                concurrency: args.concurrency,
                ..ScrapeOptions::default()
            };

            scraper::run(&options).await?;
        }
    }

    Ok(())
}
