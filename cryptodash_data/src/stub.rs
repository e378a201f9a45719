//! In-process upstream stand-ins for tests.

use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};

use crate::config::{SourcesConfig, FeedSource};

/// Nothing listens on port 1; connections are refused immediately.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

/// Serves `routes` on an ephemeral local port and returns the base URL.
/// Must be called from inside an actix system (`#[actix_web::test]`).
pub fn start(routes: fn(&mut web::ServiceConfig)) -> String {
    let server = HttpServer::new(move || App::new().configure(routes))
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind stub server");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

pub async fn slow() -> HttpResponse {
    actix_web::rt::time::sleep(Duration::from_secs(3)).await;
    HttpResponse::Ok().content_type("application/json").body("{}")
}

/// Every upstream mounted under `base`, using the same paths as the fixtures
/// in each source module's tests.
pub fn config(base: &str) -> SourcesConfig {
    SourcesConfig {
        timeout: Duration::from_secs(5),
        coingecko_url: format!("{}/coingecko", base),
        fear_greed_url: format!("{}/fng/", base),
        exchange_rates_url: format!("{}/rates", base),
        defillama_url: format!("{}/protocols", base),
        news_feeds: vec![
            FeedSource::new(format!("{}/feed/a", base), "Feed A"),
            FeedSource::new(format!("{}/feed/b", base), "Feed B"),
        ],
        news_fallback_url: format!("{}/news", base),
        ..SourcesConfig::default()
    }
}
