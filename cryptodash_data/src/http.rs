use log::debug;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use snafu::{Snafu, ResultExt, ensure};

use crate::config::SourcesConfig;

#[derive(Snafu, Debug)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum FetchError {
    #[snafu(display("Failed to build HTTP client: {}", source), context(name(ClientError)))]
    ClientError {
        source: reqwest::Error,
    },

    #[snafu(display("Failed to complete HTTP request to '{}': {}", url, source), context(name(HttpError)))]
    HttpError {
        url: String,
        source: reqwest::Error,
    },

    #[snafu(display("Got unexpected HTTP status {} from '{}'", status, url))]
    BadStatus {
        url: String,
        status: StatusCode,
    },

    #[snafu(display("Failed to deserialize response from '{}': {}", url, source), context(name(DeserializationError)))]
    DeserializationError {
        url: String,
        source: serde_json::Error,
    },

    #[snafu(display("Failed to parse feed from '{}': {}", url, source), context(name(FeedError)))]
    FeedError {
        url: String,
        source: rss::Error,
    },

    #[snafu(display("Unusable response from '{}': {}", url, reason))]
    InvalidPayload {
        url: String,
        reason: String,
    },
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::HttpError { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

/// One client for every source. The timeout bounds each request, from
/// connecting until the body has been read.
pub fn build_client(config: &SourcesConfig) -> Result<Client, FetchError> {
    ClientBuilder::new()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .context(ClientError)
}

pub async fn get_bytes(
    http: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<Vec<u8>, FetchError> {

    let request = http.get(url)
        .query(query)
        .build()
        .context(HttpError { url })?;

    debug!("GET {}", request.url());
    let response = http.execute(request).await.context(HttpError { url })?;

    let status = response.status();
    ensure!(status.is_success(), BadStatus { url, status });

    let buffer = response.bytes().await.context(HttpError { url })?;
    Ok(buffer.to_vec())
}

pub async fn get_json<Json>(
    http: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<Json, FetchError>
where
    Json: DeserializeOwned,
{
    let buffer = get_bytes(http, url, query).await?;
    serde_json::from_slice::<Json>(&buffer).context(DeserializationError { url })
}
