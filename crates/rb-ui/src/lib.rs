use askama::Template;
use rb_core::query::{Search, SearchKey};
use rb_core::service::{ArticleView, EditView, ListView};

const SITE_TITLE: &str = "Rusty BBS";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
}

impl Default for IndexTemplate<'_> {
    fn default() -> Self {
        Self { title: SITE_TITLE }
    }
}

#[derive(Template)]
#[template(path = "created.html")]
pub struct CreateTemplate<'a> {
    pub title: &'a str,
}

impl Default for CreateTemplate<'_> {
    fn default() -> Self {
        Self { title: "Write - Rusty BBS" }
    }
}

/// One entry of the search key drop-down.
pub struct SearchOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

fn search_options(search: &Search) -> Vec<SearchOption> {
    SearchKey::ALL
        .into_iter()
        .map(|key| SearchOption {
            value: key.as_str(),
            label: key.label(),
            selected: key == search.key,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "list.html")]
pub struct ListTemplate<'a> {
    pub view: &'a ListView,
    pub search_options: Vec<SearchOption>,
    pub title: &'a str,
}

impl<'a> ListTemplate<'a> {
    pub fn new(view: &'a ListView) -> Self {
        Self {
            search_options: search_options(&view.search),
            view,
            title: SITE_TITLE,
        }
    }
}

#[derive(Template)]
#[template(path = "article.html")]
pub struct ArticleTemplate<'a> {
    pub view: &'a ArticleView,
    pub title: String,
}

impl<'a> ArticleTemplate<'a> {
    pub fn new(view: &'a ArticleView) -> Self {
        Self {
            title: format!("{} - {}", view.post.subject, SITE_TITLE),
            view,
        }
    }
}

#[derive(Template)]
#[template(path = "updated.html")]
pub struct EditTemplate<'a> {
    pub view: &'a EditView,
    pub title: String,
}

impl<'a> EditTemplate<'a> {
    pub fn new(view: &'a EditView) -> Self {
        Self {
            title: format!("Edit #{} - {}", view.post.num, SITE_TITLE),
            view,
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub message: &'a str,
    pub title: &'a str,
}

impl<'a> ErrorTemplate<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message, title: SITE_TITLE }
    }
}
