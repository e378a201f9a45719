
mod coin_market;
pub use coin_market::{CoinMarket, Sparkline};

mod global_metrics;
pub use global_metrics::GlobalMetrics;

mod fear_greed;
pub use fear_greed::FearGreed;

mod trending_coin;
pub use trending_coin::{TrendingCoin, MAX_TRENDING_COINS};

mod exchange_rates;
pub use exchange_rates::ExchangeRates;

mod news_item;
pub use news_item::{NewsItem, MAX_NEWS_ITEMS};

mod defi_protocol;
pub use defi_protocol::{DefiProtocol, MAX_DEFI_PROTOCOLS};

pub mod defaults {
    pub use super::exchange_rates::defaults::*;
    pub use super::defi_protocol::defaults::*;
}
