use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;

use cryptodash_domain::models::ExchangeRates;
use cryptodash_domain::models::defaults;
use crate::config::SourcesConfig;
use crate::http::{get_json, FetchError};

#[derive(Deserialize, Debug)]
pub struct RatesResponse {
    pub rates: HashMap<String, f64>,
}

impl From<RatesResponse> for ExchangeRates {
    /// A currency missing from the response keeps its fallback rate.
    fn from(x: RatesResponse) -> ExchangeRates {
        let rate = |code: &str, fallback: f64| x.rates.get(code).copied().unwrap_or(fallback);
        ExchangeRates {
            usd_brl: rate("BRL", defaults::USD_BRL),
            usd_eur: rate("EUR", defaults::USD_EUR),
            usd_gbp: rate("GBP", defaults::USD_GBP),
        }
    }
}

pub async fn fetch_exchange_rates(http: &Client, config: &SourcesConfig) -> Result<ExchangeRates, FetchError> {
    let response: RatesResponse = get_json(http, &config.exchange_rates_url, &[]).await?;
    Ok(response.into())
}
