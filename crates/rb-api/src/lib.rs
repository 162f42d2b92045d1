//! # rb-api
//!
//! The web routing and orchestration layer for the board.

pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;

use actix_web::web;

pub use error::ApiError;
pub use handlers::AppState;

/// Configures the routes for the board.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/created.action", web::get().to(handlers::create_form))
        .route("/created_ok.action", web::post().to(handlers::create_post))
        .route("/list.action", web::get().to(handlers::list))
        .route("/article.action", web::get().to(handlers::article))
        .route("/updated.action", web::get().to(handlers::edit_form))
        .route("/updated_ok.action", web::post().to(handlers::update_post))
        .route("/deleted_ok.action", web::get().to(handlers::delete_post));
}
