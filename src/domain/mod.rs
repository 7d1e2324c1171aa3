//! Domain types and scoring primitives, independent of any I/O.

mod article;
mod quote;
mod report;
mod score;
mod sentiment;
mod trend;

pub use article::Article;
pub use quote::Quote;
pub use report::{MatchRow, RankedOutput, TickerSummary};
pub use score::{round4, volume_score, ImpactWeights};
pub use sentiment::sentiment_score;
pub use trend::Trend;
