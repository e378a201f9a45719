pub mod models;
pub mod routes;
mod convert;

use actix_web::{web, Scope};
use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlers;

pub fn services() -> Scope {
    web::scope("/api")
        .service(routes::ping)
        .service(routes::get_dashboard_data)
        .service(routes::get_tickers)
        .service(routes::get_global_stats)
        .service(routes::get_fear_greed)
        .service(routes::get_trending)
        .service(routes::get_news)
        .service(routes::get_defi)
        .service(routes::get_exchange_rates)
}

/// Routes plus the JSON 404. The caller provides a `web::Data<SnapshotStore>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(routes::index)
        .service(services())
        .default_service(web::to(routes::fallback));
}

pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new()
        .handler(StatusCode::INTERNAL_SERVER_ERROR, routes::render_internal_error)
}
