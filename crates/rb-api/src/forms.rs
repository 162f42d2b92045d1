//! Form bodies posted by the board's HTML forms.

use rb_core::error::Result;
use rb_core::models::PostUpdate;
use rb_core::query::Search;
use rb_core::request::{parse_num, parse_page_num};
use serde::Deserialize;

/// Body of the edit form. Numbers arrive as text and are parsed explicitly;
/// the search value arrives still percent-encoded from the hidden field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateForm {
    pub num: String,
    pub name: String,
    pub subject: String,
    pub content: String,
    pub page_num: Option<String>,
    pub search_key: Option<String>,
    pub search_value: Option<String>,
}

impl UpdateForm {
    pub fn into_parts(self) -> Result<(PostUpdate, u32, Search)> {
        let num = parse_num(Some(&self.num))?;
        let page_num = parse_page_num(self.page_num.as_deref())?.unwrap_or(1);
        let search = Search::from_raw(self.search_key.as_deref(), self.search_value.as_deref());

        let update = PostUpdate {
            num,
            name: self.name,
            subject: self.subject,
            content: self.content,
        };
        Ok((update, page_num, search))
    }
}
