//! rusty-bbs/crates/rb-core/src/lib.rs
//!
//! The central domain logic and interface definitions for the board.

pub mod models;
pub mod traits;
pub mod error;
pub mod pager;
pub mod query;
pub mod request;
pub mod service;

// Re-exporting for easier access in other crates
pub use models::*;
pub use traits::*;
pub use error::*;
pub use pager::Pager;
pub use query::{Search, SearchKey};
pub use request::{ListRequest, PostRequest};
pub use service::{ArticleView, BoardService, EditView, ListView, Outcome};
