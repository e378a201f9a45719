use std::time::Duration;

pub const DEFAULT_COINS: &[&str] = &[
    "bitcoin",
    "ethereum",
    "ripple",
    "dogecoin",
    "solana",
    "cardano",
    "polkadot",
    "polygon",
];

pub const DEFAULT_USER_AGENT: &str = "CryptoDashboard/1.0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, PartialEq)]
pub struct FeedSource {
    pub url: String,
    /// Display name attached to every item from this feed
    pub source: String,
}

impl FeedSource {
    pub fn new(url: impl Into<String>, source: impl Into<String>) -> FeedSource {
        FeedSource {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Where and how to reach every upstream. The defaults are the public
/// production endpoints.
#[derive(Clone, Debug)]
pub struct SourcesConfig {
    /// CoinGecko ids requested from the markets endpoint
    pub coins: Vec<String>,

    /// Applies to each request individually
    pub timeout: Duration,
    pub user_agent: String,

    /// CoinGecko API root, without trailing slash
    pub coingecko_url: String,
    pub fear_greed_url: String,
    pub exchange_rates_url: String,
    pub defillama_url: String,

    pub news_feeds: Vec<FeedSource>,
    /// Used only when every feed came back empty
    pub news_fallback_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        SourcesConfig {
            coins: DEFAULT_COINS.iter().map(|s| s.to_string()).collect(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.into(),
            coingecko_url: "https://api.coingecko.com/api/v3".into(),
            fear_greed_url: "https://api.alternative.me/fng/".into(),
            exchange_rates_url: "https://api.exchangerate-api.com/v4/latest/USD".into(),
            defillama_url: "https://api.llama.fi/protocols".into(),
            news_feeds: vec![
                FeedSource::new("https://cointelegraph.com/rss", "CoinTelegraph"),
                FeedSource::new("https://decrypt.co/feed", "Decrypt"),
            ],
            news_fallback_url: "https://min-api.cryptocompare.com/data/v2/news/?lang=EN&sortOrder=latest".into(),
        }
    }
}
