//! Integration tests for the file-backed pipeline pass.

use newsimpact::app::App;
use newsimpact::config::Config;
use newsimpact::source;

fn config_for(dir: &std::path::Path) -> Config {
    let toml = format!(
        r#"
        [pipeline]
        news_file = "{news}"
        market_file = "{market}"
        output_file = "{output}"
        "#,
        news = dir.join("news.json").display(),
        market = dir.join("market.json").display(),
        output = dir.join("analysis.json").display(),
    );
    toml::from_str(&toml).expect("build test config")
}

#[tokio::test]
async fn run_once_writes_a_ranked_report() {
    let dir = tempfile::tempdir().unwrap();

    std::fs::write(
        dir.path().join("news.json"),
        r#"[
            {
                "title": "Apple crushes earnings",
                "summary": "Record quarter.",
                "sentiment": "5 stars",
                "companies": ["AAPL", "SPY"],
                "keywords": ["earnings"],
                "timestamp": "2024-05-01T14:30:00Z"
            },
            {
                "title": "Exxon guidance cut",
                "sentiment": "1 star",
                "companies": ["XOM"]
            }
        ]"#,
    )
    .unwrap();

    std::fs::write(
        dir.path().join("market.json"),
        r#"{
            "AAPL": {"open": 100, "high": 106, "low": 99, "close": 105, "volume": 60000000},
            "XOM": {"open": 50, "high": 50.5, "low": 48.9, "close": 49, "volume": 500000}
        }"#,
    )
    .unwrap();

    let config = config_for(dir.path());
    let report = App::run_once(&config).await.unwrap();

    // SPY has no quote and silently drops out of the join.
    assert_eq!(report.full_list.len(), 2);
    assert_eq!(report.top_10_bullish[0].symbol, "AAPL");
    assert_eq!(report.top_10_bearish[0].symbol, "XOM");

    let reloaded = source::read_report(config.pipeline.output_file).unwrap();
    assert_eq!(reloaded, report);
}

#[tokio::test]
async fn run_once_with_missing_inputs_still_writes_empty_report() {
    let dir = tempfile::tempdir().unwrap();

    let config = config_for(dir.path());
    let report = App::run_once(&config).await.unwrap();

    assert!(report.is_empty());

    let reloaded = source::read_report(config.pipeline.output_file).unwrap();
    assert!(reloaded.top_10_bullish.is_empty());
    assert!(reloaded.top_10_bearish.is_empty());
    assert!(reloaded.aggregated.is_empty());
    assert!(reloaded.full_list.is_empty());
}

#[tokio::test]
async fn rerun_overwrites_the_previous_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    let first = App::run_once(&config).await.unwrap();
    assert!(first.is_empty());

    std::fs::write(
        dir.path().join("news.json"),
        r#"[{"title": "Nvidia rally", "sentiment": "5 stars", "companies": ["NVDA"]}]"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("market.json"),
        r#"{"NVDA": {"open": 900, "high": 950, "low": 899, "close": 945, "volume": 55000000}}"#,
    )
    .unwrap();

    let second = App::run_once(&config).await.unwrap();
    assert_eq!(second.full_list.len(), 1);

    let reloaded = source::read_report(config.pipeline.output_file).unwrap();
    assert_eq!(reloaded.aggregated[0].symbol, "NVDA");
    assert!(reloaded.generated_at >= first.generated_at);
}
