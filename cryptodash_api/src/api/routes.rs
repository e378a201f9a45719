use actix_web::{get, web, HttpResponse, Responder};
use actix_web::dev::ServiceResponse;
use actix_web::http::header::ContentType;
use actix_web::middleware::ErrorHandlerResponse;
use chrono::Utc;

use crate::api::convert::{json_ok, internal_error, not_found};
use crate::api::models::{ResponseStatus, PingResponse, ObjectOrEmpty};
use crate::store::SnapshotStore;

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

#[get("/ping")]
pub async fn ping() -> impl Responder {
    let now = Utc::now();
    json_ok(&PingResponse {
        status: ResponseStatus::Success,
        timestamp: now,
    })
}

#[get("/dashboard-data")]
pub async fn get_dashboard_data(store: web::Data<SnapshotStore>) -> impl Responder {
    json_ok(&*store.read())
}

#[get("/tickers")]
pub async fn get_tickers(store: web::Data<SnapshotStore>) -> impl Responder {
    json_ok(&store.read().markets)
}

#[get("/global-stats")]
pub async fn get_global_stats(store: web::Data<SnapshotStore>) -> impl Responder {
    let snapshot = store.read();
    json_ok(&ObjectOrEmpty(&snapshot.global_metrics))
}

#[get("/fear-greed")]
pub async fn get_fear_greed(store: web::Data<SnapshotStore>) -> impl Responder {
    let snapshot = store.read();
    json_ok(&ObjectOrEmpty(&snapshot.fear_greed))
}

#[get("/trending")]
pub async fn get_trending(store: web::Data<SnapshotStore>) -> impl Responder {
    json_ok(&store.read().trending)
}

#[get("/news")]
pub async fn get_news(store: web::Data<SnapshotStore>) -> impl Responder {
    json_ok(&store.read().news)
}

#[get("/defi")]
pub async fn get_defi(store: web::Data<SnapshotStore>) -> impl Responder {
    json_ok(&store.read().defi_protocols)
}

#[get("/exchange-rates")]
pub async fn get_exchange_rates(store: web::Data<SnapshotStore>) -> impl Responder {
    json_ok(&store.read().exchange_rates)
}

pub async fn fallback() -> impl Responder {
    not_found()
}

/// Replaces the body of any 500, whatever produced it, with the generic error.
pub fn render_internal_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, res) = res.into_parts();
    if let Some(e) = res.error() {
        error!("Internal error on {} {}: {}", req.method(), req.path(), e);
    }

    let res = ServiceResponse::new(req, internal_error()).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
