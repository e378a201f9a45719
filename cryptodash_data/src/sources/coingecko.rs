use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;

use cryptodash_domain::models::{CoinMarket, GlobalMetrics, TrendingCoin, MAX_TRENDING_COINS};
use crate::config::SourcesConfig;
use crate::http::{get_json, FetchError};

pub const MAX_MARKET_ROWS: usize = 100;

#[derive(Deserialize, Debug)]
pub struct GlobalResponse {
    pub data: GlobalData,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct GlobalData {
    pub active_cryptocurrencies: u64,
    pub markets: u64,
    pub total_market_cap: HashMap<String, f64>,
    pub total_volume: HashMap<String, f64>,
    pub market_cap_percentage: HashMap<String, f64>,
}

impl From<GlobalData> for GlobalMetrics {
    fn from(data: GlobalData) -> GlobalMetrics {
        let pick = |m: &HashMap<String, f64>, key: &str| m.get(key).copied().unwrap_or(0.0);
        GlobalMetrics {
            total_market_cap: pick(&data.total_market_cap, "usd"),
            total_volume_24h: pick(&data.total_volume, "usd"),
            bitcoin_dominance: pick(&data.market_cap_percentage, "btc"),
            ethereum_dominance: pick(&data.market_cap_percentage, "eth"),
            active_cryptocurrencies: data.active_cryptocurrencies,
            markets: data.markets,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct TrendingResponse {
    pub coins: Vec<TrendingEntry>,
}

#[derive(Deserialize, Debug)]
pub struct TrendingEntry {
    pub item: TrendingItem,
}

#[derive(Deserialize, Debug)]
pub struct TrendingItem {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: String,
}

impl From<TrendingItem> for TrendingCoin {
    fn from(x: TrendingItem) -> TrendingCoin {
        TrendingCoin {
            id: x.id,
            name: x.name,
            symbol: x.symbol,
            market_cap_rank: x.market_cap_rank,
            thumb: x.thumb,
        }
    }
}

/// Configured coins, ranked by market cap upstream.
pub async fn fetch_markets(http: &Client, config: &SourcesConfig) -> Result<Vec<CoinMarket>, FetchError> {
    let url = format!("{}/coins/markets", config.coingecko_url);
    let query = [
        ("vs_currency", "usd".to_string()),
        ("ids", config.coins.join(",")),
        ("order", "market_cap_desc".to_string()),
        ("per_page", MAX_MARKET_ROWS.to_string()),
        ("page", "1".to_string()),
        ("sparkline", "true".to_string()),
        ("price_change_percentage", "1h,24h,7d,30d".to_string()),
    ];

    let mut rows: Vec<CoinMarket> = get_json(http, &url, &query).await?;
    rows.truncate(MAX_MARKET_ROWS);
    Ok(rows)
}

pub async fn fetch_global_metrics(http: &Client, config: &SourcesConfig) -> Result<GlobalMetrics, FetchError> {
    let url = format!("{}/global", config.coingecko_url);
    let response: GlobalResponse = get_json(http, &url, &[]).await?;
    Ok(response.data.into())
}

pub async fn fetch_trending(http: &Client, config: &SourcesConfig) -> Result<Vec<TrendingCoin>, FetchError> {
    let url = format!("{}/search/trending", config.coingecko_url);
    let response: TrendingResponse = get_json(http, &url, &[]).await?;

    Ok(response.coins.into_iter()
        .take(MAX_TRENDING_COINS)
        .map(|x| x.item.into())
        .collect())
}
