//! HTTP mapping of board failures.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use rb_core::error::AppError;
use rb_ui::ErrorTemplate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::App(AppError::InvalidParameter { .. }) => StatusCode::BAD_REQUEST,
            ApiError::App(AppError::NotFound(..)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Store and template details stay in the log.
        let message = if status.is_server_error() {
            log::error!("request failed: {}", self);
            "Something went wrong. Please try again later.".to_string()
        } else {
            log::warn!("rejected request: {}", self);
            self.to_string()
        };

        let body = ErrorTemplate::new(&message)
            .render()
            .unwrap_or_else(|_| message.clone());

        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body)
    }
}
