use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use keyword_trends::api::create_router;
use keyword_trends::config::CONFIG;
use keyword_trends::search_client::{NaverBlogClient, SearchRequest};
use keyword_trends::service::KeywordService;
use keyword_trends::summary::{self, KeywordSummary};

#[derive(Parser)]
#[command(name = "keyword-trends", about = "Blog keyword trend analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the search endpoint over HTTP
    Serve {
        /// Listen address, overrides BIND_ADDR
        #[arg(long)]
        bind: Option<String>,
    },
    /// Analyze one query and print the result
    Analyze {
        query: String,
        #[arg(long, default_value_t = SearchRequest::DEFAULT_DISPLAY)]
        display: u32,
        #[arg(long, default_value_t = SearchRequest::DEFAULT_START)]
        start: u32,
        /// Fixed RNG seed, overrides DEMO_SEED
        #[arg(long)]
        seed: Option<u64>,
        /// Directory to write the JSON export into
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let source = NaverBlogClient::from_config(&CONFIG)?;

    match cli.command {
        Command::Serve { bind } => {
            let service = Arc::new(KeywordService::new(source).with_seed(CONFIG.demo_seed));
            let addr = bind.unwrap_or_else(|| CONFIG.bind_addr.clone());
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            log::info!(
                "listening on {addr} (search source configured: {})",
                service.has_source()
            );
            axum::serve(listener, create_router(service)).await?;
        }
        Command::Analyze {
            query,
            display,
            start,
            seed,
            export,
        } => {
            let service = KeywordService::new(source).with_seed(seed.or(CONFIG.demo_seed));
            let request = SearchRequest {
                query,
                display,
                start,
            };
            let result = service.analyze(&request).await;
            let stats = KeywordSummary::from_keywords(&result.keywords);

            println!(
                "{} (total {}, demo: {})",
                result.query, result.total, result.is_demo
            );
            if let Some(error) = &result.error {
                println!("search error: {error}");
            }
            println!(
                "positive {} / negative {} / neutral {} ({}% positive)",
                stats.positive, stats.negative, stats.neutral, stats.positive_ratio_percent
            );
            for k in summary::bar_chart(&result.keywords) {
                println!("{:>5}  {}", k.frequency, k.word);
            }

            if let Some(dir) = export {
                let path = summary::write_export(&dir, &result)?;
                println!("exported to {}", path.display());
            }
        }
    }
    Ok(())
}
