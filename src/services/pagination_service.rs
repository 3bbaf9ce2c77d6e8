use std::pin::pin;

use futures::TryStreamExt;

use crate::error::Result;
use crate::models::{
    entry::Entry,
    pagination::{window, PageResponse, PaginationParams},
};
use crate::store::{pages, EntryStore, QueryRequest};

pub struct PaginationService;

impl PaginationService {
    /// Serves page `params.page` of a partition by walking store pages from
    /// the start; a store with no random access costs one round-trip per page.
    ///
    /// The served page is lower than requested when the partition runs out
    /// first. Filtering happens after each fetch, so the final slice is
    /// taken over everything matched so far rather than the last store page.
    pub async fn paginate(
        store: &dyn EntryStore,
        params: &PaginationParams,
    ) -> Result<PageResponse> {
        let (served_page, matched) = Self::collect_pages(store, params).await?;

        let data = window(matched, served_page, params.page_size);

        Ok(PageResponse::new(data, served_page))
    }

    async fn collect_pages(
        store: &dyn EntryStore,
        params: &PaginationParams,
    ) -> Result<(u32, Vec<Entry>)> {
        let request = QueryRequest {
            partition_key: params.partition_key.clone(),
            limit: i32::try_from(params.page_size).unwrap_or(i32::MAX),
            descending: params.descending,
            exclusive_start_key: None,
        };

        let mut store_pages = pin!(pages(store, request));
        let mut matched: Vec<Entry> = Vec::new();
        let mut served_page: u32 = 0;

        while let Some(items) = store_pages.try_next().await? {
            served_page += 1;

            for item in items {
                let entry: Entry = serde_dynamo::from_item(item)?;

                match params.search.as_deref() {
                    Some(search) if !entry.matches_search(search) => {}
                    _ => matched.push(entry),
                }
            }

            if served_page >= params.page {
                break;
            }
        }

        tracing::debug!(
            partition_key = %params.partition_key,
            requested_page = params.page,
            served_page,
            matched = matched.len(),
            "pagination walk finished"
        );

        Ok((served_page, matched))
    }
}
