//! # rb-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the board service.
//! Query strings are read raw so the search value is decoded exactly once.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;
use rb_core::models::NewPost;
use rb_core::query::RawQuery;
use rb_core::request::{ListRequest, PostRequest};
use rb_core::service::{BoardService, Outcome};
use rb_ui::{ArticleTemplate, CreateTemplate, EditTemplate, IndexTemplate, ListTemplate};

use crate::error::ApiError;
use crate::forms::UpdateForm;

/// State shared across all Actix-web workers.
pub struct AppState {
    pub service: BoardService,
}

impl AppState {
    pub fn new(service: BoardService) -> Self {
        Self { service }
    }
}

type HandlerResult = Result<HttpResponse, ApiError>;

fn render<T: Template>(template: T) -> HandlerResult {
    let html = template.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders the home page for "/"
pub async fn index() -> HandlerResult {
    render(IndexTemplate::default())
}

pub async fn create_form() -> HandlerResult {
    render(CreateTemplate::default())
}

/// Stores a new post and sends the client back to the first list page.
pub async fn create_post(
    data: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<NewPost>,
) -> HandlerResult {
    let client_ip = req.peer_addr().map(|a| a.ip().to_string()).unwrap_or_default();

    let location = data.service.create(form.into_inner(), client_ip).await?;
    Ok(see_other(location))
}

/// Renders one page of posts, optionally filtered by a search.
pub async fn list(data: web::Data<AppState>, req: HttpRequest) -> HandlerResult {
    let query = RawQuery::parse(req.query_string());
    let view = data.service.list(ListRequest::from_query(&query)?).await?;

    render(ListTemplate::new(&view))
}

/// Renders a single post, counting the read.
pub async fn article(data: web::Data<AppState>, req: HttpRequest) -> HandlerResult {
    let query = RawQuery::parse(req.query_string());

    match data.service.article(PostRequest::from_query(&query)?).await? {
        Outcome::View(view) => render(ArticleTemplate::new(&view)),
        Outcome::Redirect(location) => Ok(see_other(location)),
    }
}

pub async fn edit_form(data: web::Data<AppState>, req: HttpRequest) -> HandlerResult {
    let query = RawQuery::parse(req.query_string());

    match data.service.edit_form(PostRequest::from_query(&query)?).await? {
        Outcome::View(view) => render(EditTemplate::new(&view)),
        Outcome::Redirect(location) => Ok(see_other(location)),
    }
}

pub async fn update_post(data: web::Data<AppState>, form: web::Form<UpdateForm>) -> HandlerResult {
    let (update, page_num, search) = form.into_inner().into_parts()?;

    let location = data.service.update(update, page_num, search).await?;
    Ok(see_other(location))
}

pub async fn delete_post(data: web::Data<AppState>, req: HttpRequest) -> HandlerResult {
    let query = RawQuery::parse(req.query_string());

    let location = data.service.delete(PostRequest::from_query(&query)?).await?;
    Ok(see_other(location))
}
