use serde::{Deserialize, Serialize};

pub mod defaults {
    pub const USD_BRL: f64 = 5.0;
    pub const USD_EUR: f64 = 0.85;
    pub const USD_GBP: f64 = 0.75;
}

/// Units of each currency per US dollar.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExchangeRates {
    #[serde(rename = "USD_BRL")]
    pub usd_brl: f64,
    #[serde(rename = "USD_EUR")]
    pub usd_eur: f64,
    #[serde(rename = "USD_GBP")]
    pub usd_gbp: f64,
}

/// The fallback rates, used whenever the rate source is unavailable.
impl Default for ExchangeRates {
    fn default() -> Self {
        ExchangeRates {
            usd_brl: defaults::USD_BRL,
            usd_eur: defaults::USD_EUR,
            usd_gbp: defaults::USD_GBP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_rates_should_serialize_with_pair_keys() {
        let json = serde_json::to_string(&ExchangeRates::default()).unwrap();
        assert_eq!(json, r#"{"USD_BRL":5.0,"USD_EUR":0.85,"USD_GBP":0.75}"#);
    }
}
