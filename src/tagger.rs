//! Company-name to ticker tagging.
//!
//! A lightweight fallback for articles that arrive without pre-tagged
//! tickers: scan the text for known US company names and map them to their
//! symbols. Proper entity recognition belongs to the upstream NLP stage;
//! this table only covers the large caps the pipeline tracks.

/// Lower-case company name fragments and their tickers. Matching is
/// case-insensitive substring search. Index names map to pseudo-tickers
/// (SPY, DJI, QQQ) that carry no tradable quote and drop out at the join.
const COMPANY_TICKERS: &[(&str, &str)] = &[
    // mega-cap tech
    ("apple", "AAPL"),
    ("microsoft", "MSFT"),
    ("google", "GOOGL"),
    ("alphabet", "GOOGL"),
    ("amazon", "AMZN"),
    ("nvidia", "NVDA"),
    ("meta", "META"),
    ("facebook", "META"),
    ("tesla", "TSLA"),
    // financials
    ("jpmorgan", "JPM"),
    ("jp morgan", "JPM"),
    ("visa", "V"),
    ("bank of america", "BAC"),
    ("bofa", "BAC"),
    // healthcare / consumer
    ("unitedhealthgroup", "UNH"),
    ("united health", "UNH"),
    ("johnson & johnson", "JNJ"),
    ("j&j", "JNJ"),
    ("procter & gamble", "PG"),
    ("p&g", "PG"),
    ("eli lilly", "LLY"),
    ("merck", "MRK"),
    ("abbvie", "ABBV"),
    // energy / retail / other
    ("exxon", "XOM"),
    ("exxonmobil", "XOM"),
    ("walmart", "WMT"),
    ("home depot", "HD"),
    ("chevron", "CVX"),
    ("costco", "COST"),
    ("broadcom", "AVGO"),
    ("pepsico", "PEP"),
    ("pepsi", "PEP"),
    ("coca-cola", "KO"),
    ("coca cola", "KO"),
    ("oracle", "ORCL"),
    ("thermo fisher", "TMO"),
    ("accenture", "ACN"),
    ("salesforce", "CRM"),
    ("netflix", "NFLX"),
    ("amd", "AMD"),
    ("advanced micro", "AMD"),
    // indices (informational tags only, no price data)
    ("s&p 500", "SPY"),
    ("s&p500", "SPY"),
    ("dow jones", "DJI"),
    ("dow", "DJI"),
    ("nasdaq", "QQQ"),
    ("wall street", "SPY"),
];

/// Scan `text` for known company names and return the matched tickers,
/// deduplicated, in table order.
#[must_use]
pub fn tag_tickers(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for (name, ticker) in COMPANY_TICKERS {
        if lower.contains(name) && !found.iter().any(|t| t == ticker) {
            found.push((*ticker).to_string());
        }
    }

    found
}
