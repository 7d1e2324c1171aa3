//! Handler for the `report` command: renders the latest analysis report.

use tabled::{Table, Tabled};

use crate::cli::output;
use crate::config::Config;
use crate::domain::TickerSummary;
use crate::error::Result;
use crate::source;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Avg Impact")]
    avg_impact: String,
    #[tabled(rename = "Trend")]
    trend: String,
    #[tabled(rename = "Articles")]
    articles: usize,
    #[tabled(rename = "Top Headline")]
    headline: String,
}

const HEADLINE_WIDTH: usize = 48;

impl From<&TickerSummary> for SummaryRow {
    fn from(summary: &TickerSummary) -> Self {
        let mut headline = summary.top_headline.clone();
        if headline.chars().count() > HEADLINE_WIDTH {
            headline = headline.chars().take(HEADLINE_WIDTH - 1).collect();
            headline.push('…');
        }

        Self {
            symbol: summary.symbol.clone(),
            avg_impact: format!("{:+.4}", summary.avg_impact),
            trend: summary.trend.to_string(),
            articles: summary.article_count,
            headline,
        }
    }
}

/// Render the latest report as bullish/bearish tables.
pub fn execute(config: &Config) -> Result<()> {
    let report = source::read_report(&config.pipeline.output_file)?;

    output::section("Analysis report");
    output::key_value("Generated", report.generated_at.to_rfc3339());
    output::key_value("Tickers", report.aggregated.len());
    output::key_value("Match rows", report.full_list.len());

    print_view("Top bullish", &report.top_10_bullish);
    print_view("Top bearish", &report.top_10_bearish);
    println!();

    Ok(())
}

fn print_view(title: &str, summaries: &[TickerSummary]) {
    output::section(title);

    if summaries.is_empty() {
        output::note("  (no signal)");
        return;
    }

    let rows: Vec<SummaryRow> = summaries.iter().map(SummaryRow::from).collect();
    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
}
