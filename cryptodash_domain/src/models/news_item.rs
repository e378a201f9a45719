use serde::{Deserialize, Serialize};

pub const MAX_NEWS_ITEMS: usize = 10;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    /// Kept as the feed wrote it (RFC 2822 for RSS, ISO-8601 for the fallback API).
    pub published: String,
    pub source: String,
}
