//! # Domain Models
//!
//! These structs represent the entries of the bulletin board.
//! Post numbers are plain integers assigned as `max + 1` on creation.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A single bulletin-board entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Immutable once created.
    pub num: i64,
    /// Author name as typed into the form.
    pub name: String,
    pub subject: String,
    /// Newline-delimited body text.
    pub content: String,
    /// Remote address of the client that created the post.
    pub ip_addr: String,
    pub hit_count: i64,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Number of lines in the body, ignoring trailing line breaks.
    pub fn line_count(&self) -> usize {
        self.content.trim_end_matches(['\r', '\n']).split('\n').count()
    }

    pub fn created_date(&self) -> String {
        self.created.format("%Y-%m-%d").to_string()
    }
}

/// Fields submitted through the create form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewPost {
    pub name: String,
    pub subject: String,
    pub content: String,
}

/// Fields submitted through the edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct PostUpdate {
    pub num: i64,
    pub name: String,
    pub subject: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with(content: &str) -> Post {
        Post {
            num: 1,
            name: "kim".into(),
            subject: "hello".into(),
            content: content.into(),
            ip_addr: "127.0.0.1".into(),
            hit_count: 0,
            created: Utc::now(),
        }
    }

    #[test]
    fn line_count_splits_on_line_breaks() {
        assert_eq!(post_with("one").line_count(), 1);
        assert_eq!(post_with("one\r\ntwo\r\nthree").line_count(), 3);
        assert_eq!(post_with("one\ntwo\n\n").line_count(), 2);
        assert_eq!(post_with("").line_count(), 1);
    }
}
