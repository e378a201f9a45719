use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_with::serde_as;

use cryptodash_domain::models::FearGreed;
use cryptodash_ext_serde::NumberOrString;
use crate::config::SourcesConfig;
use crate::http::{get_json, FetchError};

#[derive(Deserialize, Debug)]
pub struct FearGreedResponse {
    #[serde(default)]
    pub data: Vec<FearGreedReading>,
}

/// alternative.me quotes every number.
#[serde_as]
#[derive(Deserialize, Debug)]
pub struct FearGreedReading {
    #[serde_as(as = "NumberOrString")]
    pub value: u8,
    pub value_classification: String,
    #[serde_as(as = "NumberOrString")]
    pub timestamp: i64,
}

impl FearGreedResponse {
    /// The newest reading comes first.
    fn into_latest(self) -> Result<FearGreed, String> {
        let reading = self.data.into_iter()
            .next()
            .ok_or_else(|| "no readings".to_string())?;

        let timestamp = Utc.timestamp_opt(reading.timestamp, 0)
            .single()
            .ok_or_else(|| format!("timestamp {} out of range", reading.timestamp))?;

        Ok(FearGreed {
            value: reading.value,
            classification: reading.value_classification,
            timestamp,
        })
    }
}

pub async fn fetch_fear_greed(http: &Client, config: &SourcesConfig) -> Result<FearGreed, FetchError> {
    let url = config.fear_greed_url.as_str();
    let response: FearGreedResponse = get_json(http, url, &[]).await?;

    response.into_latest()
        .map_err(|reason| FetchError::InvalidPayload { url: url.to_owned(), reason })
}
