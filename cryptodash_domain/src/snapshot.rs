use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::serde_as;

use cryptodash_ext_serde::EmptyMapIfNone;
use crate::models::{CoinMarket, GlobalMetrics, FearGreed, TrendingCoin, ExchangeRates, NewsItem, DefiProtocol};

/// Everything one refresh cycle produced.
///
/// A snapshot is always complete: a source that failed leaves its field at the
/// `Default` value (empty list, `None`, fallback rates). Snapshots are replaced
/// as a whole and never patched field by field, so a field whose source failed
/// this cycle does not keep the previous cycle's value.
#[serde_as]
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    #[serde(rename = "coingecko_data")]
    pub markets: Vec<CoinMarket>,

    #[serde_as(as = "EmptyMapIfNone")]
    pub global_metrics: Option<GlobalMetrics>,

    #[serde_as(as = "EmptyMapIfNone")]
    pub fear_greed: Option<FearGreed>,

    pub trending: Vec<TrendingCoin>,

    pub exchange_rates: ExchangeRates,

    pub news: Vec<NewsItem>,

    pub defi_protocols: Vec<DefiProtocol>,

    /// `None` until the first cycle has been published.
    #[serde_as(as = "EmptyMapIfNone")]
    pub last_update: Option<LastUpdate>,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct LastUpdate {
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_update.map(|x| x.timestamp)
    }
}
