use serde::{Deserialize, Serialize};

/// Market-wide totals. Dominance values are percentages of total market cap.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct GlobalMetrics {
    pub total_market_cap: f64,
    pub total_volume_24h: f64,
    pub bitcoin_dominance: f64,
    pub ethereum_dominance: f64,
    pub active_cryptocurrencies: u64,
    pub markets: u64,
}
