use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of the market table, as ranked upstream.
///
/// Only the fields the dashboard reads are typed. Anything else the upstream
/// sends is kept in `extra` and written back out untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,

    #[serde(default)]
    pub image: Option<String>,

    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,

    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_30d_in_currency: Option<f64>,

    #[serde(default)]
    pub sparkline_in_7d: Option<Sparkline>,

    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Sparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BITCOIN: &str = r#"{
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
        "current_price": 67187.0,
        "market_cap": 1322844353280,
        "market_cap_rank": 1,
        "fully_diluted_valuation": 1410971539612,
        "total_volume": 26431468418,
        "high_24h": 67601,
        "low_24h": 65885,
        "price_change_percentage_24h": 1.41,
        "ath": 73738,
        "roi": null,
        "last_updated": "2024-05-01T12:00:14.352Z",
        "sparkline_in_7d": { "price": [63000.5, 64000.25] },
        "price_change_percentage_1h_in_currency": 0.12,
        "price_change_percentage_24h_in_currency": 1.41,
        "price_change_percentage_7d_in_currency": -3.2,
        "price_change_percentage_30d_in_currency": 8.9
    }"#;

    #[test]
    fn coin_market_should_parse_typed_fields() {
        let coin: CoinMarket = serde_json::from_str(BITCOIN).unwrap();

        assert_eq!(coin.id, "bitcoin");
        assert_eq!(coin.market_cap_rank, Some(1));
        assert_eq!(coin.current_price, Some(67187.0));
        assert_eq!(coin.price_change_percentage_7d_in_currency, Some(-3.2));
        assert_eq!(coin.sparkline_in_7d.as_ref().map(|s| s.price.len()), Some(2));
    }

    #[test]
    fn coin_market_should_pass_through_unknown_fields() {
        let coin: CoinMarket = serde_json::from_str(BITCOIN).unwrap();
        assert_eq!(coin.extra.get("ath"), Some(&Value::from(73738)));
        assert_eq!(coin.extra.get("roi"), Some(&Value::Null));

        let json = serde_json::to_value(&coin).unwrap();
        assert_eq!(json["fully_diluted_valuation"], Value::from(1410971539612u64));
        assert_eq!(json["symbol"], "btc");
    }

    #[test]
    fn coin_market_tolerates_null_prices() {
        let coin: CoinMarket = serde_json::from_str(r#"{
            "id": "polygon",
            "symbol": "matic",
            "name": "Polygon",
            "current_price": null,
            "market_cap": null,
            "market_cap_rank": null
        }"#).unwrap();

        assert_eq!(coin.current_price, None);
        assert_eq!(coin.sparkline_in_7d, None);
    }
}
