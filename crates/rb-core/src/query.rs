//! # Query Composer
//!
//! Carries the page number and the current search between requests.
//! Only the search value is percent-encoded; keys and page numbers are
//! plain ASCII and travel as-is.

use std::fmt;
use std::str::FromStr;

use crate::pager::PAGE_PARAM;

pub const SEARCH_KEY_PARAM: &str = "searchKey";
pub const SEARCH_VALUE_PARAM: &str = "searchValue";

/// Column a search is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchKey {
    #[default]
    Subject,
    Name,
    Content,
}

impl SearchKey {
    pub const ALL: [SearchKey; 3] = [SearchKey::Subject, SearchKey::Name, SearchKey::Content];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKey::Subject => "subject",
            SearchKey::Name => "name",
            SearchKey::Content => "content",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchKey::Subject => "Subject",
            SearchKey::Name => "Author",
            SearchKey::Content => "Content",
        }
    }

    /// Parses the wire name, falling back to `subject` for anything unknown.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for SearchKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The search currently applied to the list. An empty value means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Search {
    pub key: SearchKey,
    pub value: String,
}

impl Search {
    pub fn new(key: SearchKey, value: impl Into<String>) -> Self {
        Self { key, value: value.into() }
    }

    /// Builds a search from raw, still-encoded parameters. An absent value
    /// resets the key to `subject`.
    pub fn from_raw(key: Option<&str>, value: Option<&str>) -> Self {
        match decode_search_value(value) {
            Some(value) => Self { key: SearchKey::from_param(key), value },
            None => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn encoded_value(&self) -> String {
        urlencoding::encode(&self.value).into_owned()
    }
}

/// Decodes a search value the way form submissions encode it: `+` is a
/// space, then UTF-8 percent escapes. Malformed escapes pass through.
pub fn decode_search_value(raw: Option<&str>) -> Option<String> {
    raw.map(|raw| {
        let spaced = raw.replace('+', " ");
        let bytes = urlencoding::decode_binary(spaced.as_bytes());
        String::from_utf8_lossy(&bytes).into_owned()
    })
}

/// `searchKey=<k>&searchValue=<v>`, or an empty string when there is no search.
pub fn search_params(search: &Search) -> String {
    if search.is_empty() {
        return String::new();
    }
    format!(
        "{}={}&{}={}",
        SEARCH_KEY_PARAM,
        search.key,
        SEARCH_VALUE_PARAM,
        search.encoded_value()
    )
}

/// `pageNum=<n>`, followed by the search parameters when a search is active.
pub fn build_query_string(page_num: u32, search: &Search) -> String {
    let mut query = format!("{}={}", PAGE_PARAM, page_num);
    let params = search_params(search);
    if !params.is_empty() {
        query.push('&');
        query.push_str(&params);
    }
    query
}

/// Base URL for the page links of the list. The page number is left to the
/// pager, so only the search is appended here.
pub fn build_list_url(base_path: &str, search: &Search) -> String {
    let params = search_params(search);
    if params.is_empty() {
        base_path.to_string()
    } else {
        format!("{}?{}", base_path, params)
    }
}

/// Article link prefix; the post number is appended by the view.
pub fn build_article_url(base_path: &str, page_num: u32, search: &Search) -> String {
    format!("{}?{}", base_path, build_query_string(page_num, search))
}

/// A query string split into pairs with nothing decoded.
#[derive(Debug, Clone, Default)]
pub struct RawQuery<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> RawQuery<'a> {
    pub fn parse(query: &'a str) -> Self {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .collect();
        Self { pairs }
    }

    /// First value given for `name`.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    pub fn search(&self) -> Search {
        Search::from_raw(self.get(SEARCH_KEY_PARAM), self.get(SEARCH_VALUE_PARAM))
    }
}
