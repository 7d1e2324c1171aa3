//! newsimpact - correlates financial news with same-day market movement and
//! ranks a per-ticker impact signal.
//!
//! # Architecture
//!
//! The core is a pure, stateless engine; everything around it is plumbing:
//!
//! - [`domain`] - articles, quotes, scoring primitives, trend classification,
//!   and the report DTOs
//! - [`engine`] - the correlate → score → aggregate → rank pipeline,
//!   a pure function of one input snapshot
//! - [`source`] - collaborator traits for news/market data plus the JSON
//!   snapshot adapters
//! - [`tagger`] - fallback company-name → ticker tagging for untagged
//!   articles
//! - [`config`] - TOML configuration, scoring-weight validation, logging init
//! - [`error`] - error types for the crate
//! - [`app`] - orchestration: single pass and the scheduled watch loop
//! - [`cli`] - clap command definitions and report rendering
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use newsimpact::domain::{Article, ImpactWeights, Quote};
//! use newsimpact::engine;
//!
//! let articles = vec![Article {
//!     title: "Apple beats expectations".into(),
//!     sentiment_label: "5 stars".into(),
//!     tickers: vec!["AAPL".into()],
//!     ..Article::default()
//! }];
//!
//! let quotes: HashMap<String, Quote> =
//!     serde_json::from_str(r#"{"AAPL": {"open": 100, "close": 105, "volume": 60000000}}"#)
//!         .unwrap();
//!
//! let report = engine::analyze(&articles, &quotes, &ImpactWeights::default());
//! assert_eq!(report.top_10_bullish[0].symbol, "AAPL");
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod source;
pub mod tagger;
