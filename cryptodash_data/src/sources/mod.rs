pub mod coingecko;
pub mod fear_greed;
pub mod exchange_rates;
pub mod news;
pub mod defillama;

use log::error;
use reqwest::Client;

use cryptodash_domain::Snapshot;
use cryptodash_domain::models::{CoinMarket, GlobalMetrics, FearGreed, TrendingCoin, ExchangeRates, NewsItem, DefiProtocol};
use crate::config::SourcesConfig;
use crate::http::{build_client, FetchError};

pub const MARKETS: &str = "markets";
pub const GLOBAL_METRICS: &str = "global_metrics";
pub const FEAR_GREED: &str = "fear_greed";
pub const TRENDING: &str = "trending";
pub const EXCHANGE_RATES: &str = "exchange_rates";
pub const NEWS: &str = "news";
pub const DEFI_PROTOCOLS: &str = "defi_protocols";

pub const ALL_SOURCES: [&str; 7] = [
    MARKETS,
    GLOBAL_METRICS,
    FEAR_GREED,
    TRENDING,
    EXCHANGE_RATES,
    NEWS,
    DEFI_PROTOCOLS,
];

/// Every upstream behind one HTTP client.
///
/// Each source has two entry points. `try_*` reports what went wrong. The
/// plain method logs the failure and returns the source's default instead,
/// so it never fails.
pub struct Sources {
    http: Client,
    config: SourcesConfig,
}

/// The result of asking every source once. `snapshot.last_update` is left for
/// the publisher to stamp.
#[derive(Debug)]
pub struct Collected {
    pub snapshot: Snapshot,
    pub failed: Vec<&'static str>,
}

impl Collected {
    pub fn is_total_outage(&self) -> bool {
        self.failed.len() == ALL_SOURCES.len()
    }
}

#[derive(Default)]
struct Failures(Vec<&'static str>);

impl Failures {
    fn settle<T: Default>(&mut self, source: &'static str, result: Result<T, FetchError>) -> T {
        match result {
            Ok(x) => x,
            Err(e) => {
                error!("Failed to fetch {}: {}", source, e);
                self.0.push(source);
                T::default()
            }
        }
    }
}

fn or_default<T: Default>(source: &'static str, result: Result<T, FetchError>) -> T {
    Failures::default().settle(source, result)
}

impl Sources {
    pub fn new(config: SourcesConfig) -> Result<Sources, FetchError> {
        let http = build_client(&config)?;
        Ok(Sources { http, config })
    }

    pub async fn try_markets(&self) -> Result<Vec<CoinMarket>, FetchError> {
        coingecko::fetch_markets(&self.http, &self.config).await
    }

    pub async fn try_global_metrics(&self) -> Result<GlobalMetrics, FetchError> {
        coingecko::fetch_global_metrics(&self.http, &self.config).await
    }

    pub async fn try_fear_greed(&self) -> Result<FearGreed, FetchError> {
        fear_greed::fetch_fear_greed(&self.http, &self.config).await
    }

    pub async fn try_trending(&self) -> Result<Vec<TrendingCoin>, FetchError> {
        coingecko::fetch_trending(&self.http, &self.config).await
    }

    pub async fn try_exchange_rates(&self) -> Result<ExchangeRates, FetchError> {
        exchange_rates::fetch_exchange_rates(&self.http, &self.config).await
    }

    pub async fn try_news(&self) -> Result<Vec<NewsItem>, FetchError> {
        news::fetch_news(&self.http, &self.config).await
    }

    pub async fn try_defi_protocols(&self) -> Result<Vec<DefiProtocol>, FetchError> {
        defillama::fetch_defi_protocols(&self.http, &self.config).await
    }

    pub async fn markets(&self) -> Vec<CoinMarket> {
        or_default(MARKETS, self.try_markets().await)
    }

    pub async fn global_metrics(&self) -> Option<GlobalMetrics> {
        or_default(GLOBAL_METRICS, self.try_global_metrics().await.map(Some))
    }

    pub async fn fear_greed(&self) -> Option<FearGreed> {
        or_default(FEAR_GREED, self.try_fear_greed().await.map(Some))
    }

    pub async fn trending(&self) -> Vec<TrendingCoin> {
        or_default(TRENDING, self.try_trending().await)
    }

    pub async fn exchange_rates(&self) -> ExchangeRates {
        or_default(EXCHANGE_RATES, self.try_exchange_rates().await)
    }

    pub async fn news(&self) -> Vec<NewsItem> {
        or_default(NEWS, self.try_news().await)
    }

    pub async fn defi_protocols(&self) -> Vec<DefiProtocol> {
        or_default(DEFI_PROTOCOLS, self.try_defi_protocols().await)
    }

    /// Queries every source concurrently. Never fails: a source that errors
    /// contributes its default and is listed in `failed`.
    pub async fn collect(&self) -> Collected {
        let (markets, global_metrics, fear_greed, trending, exchange_rates, news, defi_protocols) = futures::join!(
            self.try_markets(),
            self.try_global_metrics(),
            self.try_fear_greed(),
            self.try_trending(),
            self.try_exchange_rates(),
            self.try_news(),
            self.try_defi_protocols()
        );

        let mut failures = Failures::default();
        let snapshot = Snapshot {
            markets: failures.settle(MARKETS, markets),
            global_metrics: failures.settle(GLOBAL_METRICS, global_metrics.map(Some)),
            fear_greed: failures.settle(FEAR_GREED, fear_greed.map(Some)),
            trending: failures.settle(TRENDING, trending),
            exchange_rates: failures.settle(EXCHANGE_RATES, exchange_rates),
            news: failures.settle(NEWS, news),
            defi_protocols: failures.settle(DEFI_PROTOCOLS, defi_protocols),
            last_update: None,
        };

        Collected {
            snapshot,
            failed: failures.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{web, HttpResponse};
    use cryptodash_domain::models::defaults;
    use super::*;
    use crate::stub;

    fn unreachable() -> Sources {
        Sources::new(stub::config(stub::UNREACHABLE)).unwrap()
    }

    #[actix_web::test]
    async fn plain_fetchers_should_default_when_unreachable() {
        let sources = unreachable();

        assert!(sources.markets().await.is_empty());
        assert_eq!(sources.global_metrics().await, None);
        assert_eq!(sources.fear_greed().await, None);
        assert!(sources.trending().await.is_empty());
        assert!(sources.news().await.is_empty());
        assert!(sources.defi_protocols().await.is_empty());
    }

    #[actix_web::test]
    async fn exchange_rates_should_fall_back_exactly_when_unreachable() {
        let rates = unreachable().exchange_rates().await;

        assert_eq!(rates, ExchangeRates {
            usd_brl: 5.0,
            usd_eur: 0.85,
            usd_gbp: 0.75,
        });
        assert_eq!(rates.usd_brl, defaults::USD_BRL);
    }

    #[actix_web::test]
    async fn collect_should_report_total_outage() {
        let collected = unreachable().collect().await;

        assert!(collected.is_total_outage());
        assert_eq!(collected.failed, ALL_SOURCES.to_vec());
        assert_eq!(collected.snapshot, Snapshot::default());
    }

    fn partial_routes(cfg: &mut web::ServiceConfig) {
        cfg
            .route("/coingecko/global", web::get().to(|| async {
                HttpResponse::Ok().body(r#"{"data":{"markets":42,"active_cryptocurrencies":7}}"#)
            }))
            .route("/rates", web::get().to(|| async {
                HttpResponse::Ok().body(r#"{"rates":{"BRL":5.5,"EUR":0.9,"GBP":0.8}}"#)
            }))
            .route("/protocols", web::get().to(|| async {
                HttpResponse::Ok().body(r#"[{"name":"Aave","tvl":12.5}]"#)
            }))
            .route("/fng/", web::get().to(|| async {
                HttpResponse::Ok().body("<html>bad gateway</html>")
            }))
            .route("/coingecko/search/trending", web::get().to(|| async {
                HttpResponse::TooManyRequests().finish()
            }))
            .route("/coingecko/coins/markets", web::get().to(stub::slow));
    }

    #[actix_web::test]
    async fn collect_should_isolate_failures() {
        let base = stub::start(partial_routes);
        let config = SourcesConfig {
            timeout: std::time::Duration::from_millis(500),
            ..stub::config(&base)
        };
        let collected = Sources::new(config).unwrap().collect().await;

        assert_eq!(collected.failed, vec![MARKETS, FEAR_GREED, TRENDING, NEWS]);
        assert!(!collected.is_total_outage());

        let snapshot = collected.snapshot;
        assert!(snapshot.markets.is_empty());
        assert_eq!(snapshot.global_metrics.map(|x| x.markets), Some(42));
        assert_eq!(snapshot.fear_greed, None);
        assert_eq!(snapshot.exchange_rates.usd_brl, 5.5);
        assert_eq!(snapshot.defi_protocols[0].chain, "Multi-Chain");
        assert!(snapshot.news.is_empty());
        assert_eq!(snapshot.last_update, None);
    }
}
