use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};
use snafu::ResultExt;

use cryptodash_domain::models::{DefiProtocol, MAX_DEFI_PROTOCOLS};
use cryptodash_domain::models::defaults;
use crate::config::SourcesConfig;
use crate::http::{get_json, FetchError, DeserializationError};

/// One entry of `/protocols`. Only the listed fields are read; the upstream
/// sends dozens more per protocol.
#[serde_as]
#[derive(Deserialize, Debug)]
pub struct ProtocolEntry {
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tvl: f64,
    pub chain: Option<String>,
    pub category: Option<String>,
    pub change_1d: Option<f64>,
    pub logo: Option<String>,
}

impl From<ProtocolEntry> for DefiProtocol {
    fn from(x: ProtocolEntry) -> DefiProtocol {
        DefiProtocol {
            name: x.name,
            tvl: x.tvl,
            chain: x.chain.unwrap_or_else(|| defaults::CHAIN.to_owned()),
            category: x.category.unwrap_or_else(|| defaults::CATEGORY.to_owned()),
            change_1d: x.change_1d.unwrap_or(defaults::CHANGE_1D),
            logo: x.logo.unwrap_or_else(|| defaults::LOGO.to_owned()),
        }
    }
}

/// Keeps the upstream listing order. Only the leading entries are decoded, so
/// an odd record further down the list cannot fail the whole source.
pub fn top_protocols(listing: Vec<Value>) -> Result<Vec<DefiProtocol>, serde_json::Error> {
    listing.into_iter()
        .take(MAX_DEFI_PROTOCOLS)
        .map(|x| serde_json::from_value::<ProtocolEntry>(x).map(DefiProtocol::from))
        .collect()
}

pub async fn fetch_defi_protocols(http: &Client, config: &SourcesConfig) -> Result<Vec<DefiProtocol>, FetchError> {
    let url = config.defillama_url.as_str();
    let listing: Vec<Value> = get_json(http, url, &[]).await?;
    top_protocols(listing).context(DeserializationError { url })
}
