//! App orchestration: one pipeline pass, and the scheduled watch loop.

use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::domain::RankedOutput;
use crate::engine;
use crate::error::Result;
use crate::source::{self, JsonMarketSource, JsonNewsSource, MarketSource, NewsSource};

/// Main application struct.
pub struct App;

impl App {
    /// Run one full pipeline pass: load snapshots, analyze, persist report.
    ///
    /// Empty inputs are a normal outcome (off-hours, feed gaps); the report
    /// is still written so consumers can tell "no signal" from "no run".
    pub async fn run_once(config: &Config) -> Result<RankedOutput> {
        let news = JsonNewsSource::new(&config.pipeline.news_file);
        let market = JsonMarketSource::new(&config.pipeline.market_file);

        let articles = news.articles().await?;
        let quotes = market.quotes().await?;

        info!(
            articles = articles.len(),
            quotes = quotes.len(),
            "input snapshot loaded"
        );

        if articles.is_empty() {
            warn!("no articles in snapshot");
        }
        if quotes.is_empty() {
            warn!("no quotes in snapshot");
        }

        let weights = config.scoring.weights();
        let report = engine::analyze(&articles, &quotes, &weights);

        source::write_report(&config.pipeline.output_file, &report)?;

        info!(
            rows = report.full_list.len(),
            tickers = report.aggregated.len(),
            bullish = report.top_10_bullish.len(),
            bearish = report.top_10_bearish.len(),
            output = %config.pipeline.output_file,
            "analysis complete"
        );

        Ok(report)
    }

    /// Re-run the pipeline on a fixed interval until the task is cancelled.
    ///
    /// A failed pass is logged and the loop keeps going; the next tick gets a
    /// fresh snapshot anyway.
    pub async fn watch(config: Config) -> Result<()> {
        let period = Duration::from_secs(config.scheduler.interval_secs);
        let mut ticker = tokio::time::interval(period);

        info!(interval_secs = config.scheduler.interval_secs, "watch loop started");

        loop {
            ticker.tick().await;

            if let Err(e) = Self::run_once(&config).await {
                error!(error = %e, "pipeline pass failed");
            }
        }
    }
}
