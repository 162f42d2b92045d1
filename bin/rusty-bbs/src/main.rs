//! # Rusty BBS Binary
//!
//! The entry point that assembles the application based on compile-time features.

mod settings;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use rb_api::{configure_routes, middleware, AppState};
use rb_core::pager::Pager;
use rb_core::service::BoardService;

use crate::settings::Settings;

// Feature-gated imports
#[cfg(feature = "db-sqlite")]
use rb_db_sqlite::SqliteBoardStore;

#[cfg(not(feature = "db-sqlite"))]
compile_error!("rusty-bbs needs a storage backend; enable the `db-sqlite` feature");

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::load().context("failed to load settings")?;
    let pager = Pager::new(settings.page_size)?;

    // 1. Initialize Database Implementation
    #[cfg(feature = "db-sqlite")]
    let store = SqliteBoardStore::connect(&settings.database_url, settings.max_connections)
        .await
        .with_context(|| format!("failed to open {}", settings.database_url))?;

    // 2. Wrap in AppState (Using dynamic dispatch for the store)
    let state = web::Data::new(AppState::new(BoardService::new(Arc::new(store), pager)));

    log::info!(
        "Rusty BBS starting on http://{}:{} ({} posts per page)",
        settings.host,
        settings.port,
        pager.page_size()
    );

    let static_dir = settings.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::security_headers())
            .wrap(middleware::standard_middleware())
            .service(actix_files::Files::new("/static", &static_dir))
            .configure(configure_routes)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;

    Ok(())
}
