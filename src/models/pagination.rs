use serde::Serialize;

use crate::{models::entry::Entry, Error, Result};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Raw query string of `GET /paginate`. Everything stays a string so that
/// malformed numbers fall back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct PaginationQuery {
    pub key_condition: Option<String>,
    pub page: Option<String>,
    pub pagesize: Option<String>,
    pub orderby: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    pub partition_key: String,
    pub page: u32, // (1-based)
    pub page_size: u32,
    pub descending: bool,
    pub search: Option<String>,
}

/// Builds the query from decoded `(name, value)` pairs. The first value of a
/// repeated parameter wins and unknown names are ignored.
impl FromIterator<(String, String)> for PaginationQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();

        for (name, value) in pairs {
            let slot = match name.as_str() {
                "key_condition" => &mut query.key_condition,
                "page" => &mut query.page,
                "pagesize" => &mut query.pagesize,
                "orderby" => &mut query.orderby,
                "search" => &mut query.search,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        query
    }
}

impl PaginationQuery {
    pub fn validate(&self) -> Result<PaginationParams> {
        let partition_key = self
            .key_condition
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingKeyCondition)?
            .to_string();

        Ok(PaginationParams {
            partition_key,
            page: positive_or(self.page.as_deref(), DEFAULT_PAGE),
            page_size: positive_or(self.pagesize.as_deref(), DEFAULT_PAGE_SIZE),
            descending: self
                .orderby
                .as_deref()
                .is_some_and(|o| o.starts_with('-')),
            search: self.search.clone().filter(|s| !s.is_empty()),
        })
    }
}

// Anything that is not a strictly positive integer gets the default. Values
// past u32::MAX saturate; the page walk stops at exhaustion long before.
fn positive_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .map_or(default, |v| u32::try_from(v).unwrap_or(u32::MAX))
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PageResponse {
    #[serde(rename = "Data")]
    pub data: Vec<Entry>,
    #[serde(rename = "Page")]
    pub page: u32,
    #[serde(rename = "Size")]
    pub size: usize,
}

impl PageResponse {
    pub fn new(data: Vec<Entry>, page: u32) -> Self {
        let size = data.len();
        Self { data, page, size }
    }
}

/// Keeps `[(page - 1) * page_size, page * page_size)` of `entries`, clamped to
/// its length. An out-of-range window is empty.
pub fn window(mut entries: Vec<Entry>, page: u32, page_size: u32) -> Vec<Entry> {
    let page = page as usize;
    let page_size = page_size as usize;

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = page.saturating_mul(page_size).min(entries.len());

    if start >= end {
        return Vec::new();
    }

    entries.truncate(end);
    entries.drain(..start);
    entries
}
