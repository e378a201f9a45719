mod api;
mod config;
mod refresh;
mod store;

#[macro_use]
extern crate log;

use std::error::Error;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer, middleware};
use dotenv::dotenv;
use listenfd::ListenFd;

use cryptodash_data::Sources;
use cryptodash_util::init_logging;
use crate::refresh::RefreshService;
use crate::store::SnapshotStore;

const DEFAULT_LOG_FILTERS: &'static str =
    "actix_server=info,actix_web=info,cryptodash_api=info,cryptodash_data=info,warn";

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    init_logging(DEFAULT_LOG_FILTERS);

    let config = config::config_with_prefix("CRYPTODASH")?;

    // Enable receiving passed file descriptors
    // Launch using `systemfd --no-pid -s http::PORT -- cargo watch -x run` to leverage this
    //
    let mut listenfd = ListenFd::from_env();

    // Refresh
    let store = SnapshotStore::new();
    let sources = Sources::new(config.sources.clone())?;
    let refresh = RefreshService::new(sources, store.clone(), config.refresh_interval).spawn();

    // HTTP Server
    let data = web::Data::new(store);
    let mut server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allow_any_header();

        App::new()
            .wrap(api::error_handlers())
            .wrap(cors)
            .wrap(Logger::new(r#"%{r}a [%a] "%r" %s %b "%{Referer}i" "%{User-Agent}i" %Dms"#))
            .wrap(middleware::Compress::default())
            .app_data(data.clone())
            .configure(api::configure)
    });

    // Launch server from listenfd
    server = match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            info!("Using listenfd");
            server.listen(listener)?
        },
        None => {
            info!("Binding to {}:{}", config.host, config.port);
            server.bind((config.host.as_str(), config.port))?
        }
    };

    info!("Starting server");
    let result = server.run().await;

    info!("Server stopped; stopping refresh service");
    refresh.shutdown().await;

    result?;
    Ok(())
}
