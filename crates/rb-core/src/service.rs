//! # Board Service
//!
//! Per-endpoint orchestration between the typed requests, the Pager, the
//! Query Composer and the Board Store. Every operation returns an immutable
//! view model or a redirect target; nothing is accumulated across calls.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};

use crate::error::Result;
use crate::models::{NewPost, Post, PostUpdate};
use crate::pager::Pager;
use crate::query::{self, Search};
use crate::request::{ListRequest, PostRequest};
use crate::traits::BoardStore;

pub const LIST_PATH: &str = "/list.action";
pub const ARTICLE_PATH: &str = "/article.action";

/// Either a page to render or a location to send the client to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<V> {
    View(V),
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub posts: Vec<Post>,
    /// Pre-rendered page navigation.
    pub page_index_list: String,
    /// Article link prefix; the view appends `&num=<n>`.
    pub article_url: String,
    pub data_count: u64,
    pub page_num: u32,
    pub total_pages: u32,
    pub search: Search,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleView {
    pub post: Post,
    /// `pageNum=..[&searchKey=..&searchValue=..]` for links back out of the article.
    pub params: String,
    pub line_count: usize,
    pub page_num: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditView {
    pub post: Post,
    pub page_num: u32,
    pub params: String,
    pub search: Search,
}

pub struct BoardService {
    store: Arc<dyn BoardStore>,
    pager: Pager,
}

impl BoardService {
    pub fn new(store: Arc<dyn BoardStore>, pager: Pager) -> Self {
        Self { store, pager }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub async fn list(&self, req: ListRequest) -> Result<ListView> {
        let data_count = self.store.count(&req.search).await?;
        let total_pages = self.pager.page_count(data_count);
        let page_num = self.pager.clamp(req.page_num.unwrap_or(1), total_pages);
        let (start, end) = self.pager.item_window(page_num);

        debug!(
            "list page {}/{} ({} posts, window {}..={})",
            page_num, total_pages, data_count, start, end
        );

        let posts = self.store.fetch_range(start, end, &req.search).await?;

        let list_url = query::build_list_url(LIST_PATH, &req.search);
        let page_index_list = self.pager.render_page_links(page_num, total_pages, &list_url);
        let article_url = query::build_article_url(ARTICLE_PATH, page_num, &req.search);

        Ok(ListView {
            posts,
            page_index_list,
            article_url,
            data_count,
            page_num,
            total_pages,
            search: req.search,
        })
    }

    /// Counts the read before looking the post up, so a post deleted in
    /// between still gets its hit recorded by the store.
    pub async fn article(&self, req: PostRequest) -> Result<Outcome<ArticleView>> {
        self.store.increment_hit_count(req.num).await?;

        let post = match self.store.fetch_by_id(req.num).await? {
            Some(post) => post,
            None => return Ok(Outcome::Redirect(list_redirect(req.page_num))),
        };

        Ok(Outcome::View(ArticleView {
            line_count: post.line_count(),
            params: query::build_query_string(req.page_num, &req.search),
            page_num: req.page_num,
            post,
        }))
    }

    pub async fn edit_form(&self, req: PostRequest) -> Result<Outcome<EditView>> {
        let post = match self.store.fetch_by_id(req.num).await? {
            Some(post) => post,
            None => return Ok(Outcome::Redirect(list_redirect(req.page_num))),
        };

        Ok(Outcome::View(EditView {
            post,
            page_num: req.page_num,
            params: query::build_query_string(req.page_num, &req.search),
            search: req.search,
        }))
    }

    /// Stores a new post numbered one past the current maximum.
    pub async fn create(&self, form: NewPost, ip_addr: String) -> Result<String> {
        let num = self.store.max_id().await? + 1;

        self.store
            .insert(Post {
                num,
                name: form.name,
                subject: form.subject,
                content: form.content,
                ip_addr,
                hit_count: 0,
                created: Utc::now(),
            })
            .await?;

        info!("created post {}", num);
        Ok(LIST_PATH.to_string())
    }

    /// Line breaks rendered as `<br/>` by the edit view are stored back as CRLF.
    pub async fn update(&self, mut update: PostUpdate, page_num: u32, search: Search) -> Result<String> {
        update.content = update.content.replace("<br/>", "\r\n");
        let num = update.num;

        self.store.update(update).await?;

        info!("updated post {}", num);
        Ok(format!("{}?{}", LIST_PATH, query::build_query_string(page_num, &search)))
    }

    pub async fn delete(&self, req: PostRequest) -> Result<String> {
        self.store.delete(req.num).await?;

        info!("deleted post {}", req.num);
        Ok(format!("{}?{}", LIST_PATH, query::build_query_string(req.page_num, &req.search)))
    }
}

fn list_redirect(page_num: u32) -> String {
    format!("{}?{}", LIST_PATH, query::build_query_string(page_num, &Search::default()))
}
