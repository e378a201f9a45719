pub mod config;
pub mod http;
pub mod sources;

#[cfg(test)]
mod stub;

pub use crate::config::{SourcesConfig, FeedSource};
pub use crate::http::FetchError;
pub use crate::sources::{Sources, Collected};
