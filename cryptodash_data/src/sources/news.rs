use std::io::Cursor;

use chrono::DateTime;
use futures::future::join_all;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use snafu::ResultExt;

use cryptodash_domain::models::{NewsItem, MAX_NEWS_ITEMS};
use crate::config::{SourcesConfig, FeedSource};
use crate::http::{get_bytes, get_json, FetchError, FeedError};

/// Entries read from a single feed before the per-feed cap applies
pub const MAX_ENTRIES_PER_FEED: usize = 10;
pub const ITEMS_PER_FEED: usize = 3;
/// Stop taking further feeds once this many items are collected
pub const MAX_FEED_ITEMS: usize = 12;

pub const FALLBACK_SOURCE: &str = "CryptoCompare";

#[derive(Clone, Debug, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub published: String,
}

/// Entries without both a title and a link are dropped.
pub fn parse_feed(buffer: &[u8]) -> Result<Vec<FeedEntry>, rss::Error> {
    let channel = rss::Channel::read_from(Cursor::new(buffer))?;

    Ok(channel.items().iter()
        .filter_map(|item| {
            let title = item.title()?;
            let link = item.link()?;
            Some(FeedEntry {
                title: title.to_owned(),
                link: link.to_owned(),
                published: item.pub_date().unwrap_or("").to_owned(),
            })
        })
        .take(MAX_ENTRIES_PER_FEED)
        .collect())
}

/// Takes up to three entries from each feed, in feed order.
pub fn merge_feeds<'a, I>(feeds: I) -> Vec<NewsItem>
where
    I: IntoIterator<Item = (&'a FeedSource, Vec<FeedEntry>)>,
{
    let mut news = Vec::new();

    for (feed, entries) in feeds {
        news.extend(entries.into_iter()
            .take(ITEMS_PER_FEED)
            .map(|x| NewsItem {
                title: x.title,
                link: x.link,
                published: x.published,
                source: feed.source.clone(),
            }));

        if news.len() >= MAX_FEED_ITEMS {
            break;
        }
    }

    news
}

#[derive(Deserialize, Debug)]
pub struct FallbackResponse {
    #[serde(rename = "Data", default)]
    pub data: Vec<FallbackArticle>,
}

#[derive(Deserialize, Debug)]
pub struct FallbackArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub published_on: i64,
    #[serde(default)]
    pub source_info: Option<FallbackSourceInfo>,
}

#[derive(Deserialize, Debug)]
pub struct FallbackSourceInfo {
    pub name: Option<String>,
}

impl From<FallbackArticle> for NewsItem {
    fn from(x: FallbackArticle) -> NewsItem {
        let published = DateTime::from_timestamp(x.published_on, 0)
            .map(|ts| ts.naive_utc().format("%Y-%m-%dT%H:%M:%S").to_string())
            .unwrap_or_default();

        NewsItem {
            title: x.title,
            link: x.url,
            published,
            source: x.source_info
                .and_then(|s| s.name)
                .unwrap_or_else(|| FALLBACK_SOURCE.to_owned()),
        }
    }
}

pub async fn fetch_feed(http: &Client, feed: &FeedSource) -> Result<Vec<FeedEntry>, FetchError> {
    let url = feed.url.as_str();
    let buffer = get_bytes(http, url, &[]).await?;
    parse_feed(&buffer).context(FeedError { url })
}

pub async fn fetch_fallback(http: &Client, config: &SourcesConfig) -> Result<Vec<NewsItem>, FetchError> {
    let response: FallbackResponse = get_json(http, &config.news_fallback_url, &[]).await?;

    Ok(response.data.into_iter()
        .take(MAX_NEWS_ITEMS)
        .map(NewsItem::from)
        .collect())
}

/// Feeds are read concurrently and fail independently; a broken feed counts
/// as an empty one. The fallback API is consulted only when no feed produced
/// anything, and its failure is the failure of the whole source.
pub async fn fetch_news(http: &Client, config: &SourcesConfig) -> Result<Vec<NewsItem>, FetchError> {
    let results = join_all(config.news_feeds.iter()
        .map(|feed| fetch_feed(http, feed)))
        .await;

    let feeds = config.news_feeds.iter()
        .zip(results)
        .map(|(feed, result)| match result {
            Ok(entries) => (feed, entries),
            Err(e) => {
                warn!("Failed to read news feed '{}': {}", feed.source, e);
                (feed, Vec::new())
            }
        });

    let mut news = merge_feeds(feeds);
    if news.is_empty() {
        debug!("No feed items; using fallback news source");
        news = fetch_fallback(http, config).await?;
    }

    news.truncate(MAX_NEWS_ITEMS);
    Ok(news)
}
