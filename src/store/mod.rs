mod dynamodb;
#[cfg(test)]
mod mock;

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use futures::{stream, Stream};

use crate::Result;

pub use dynamodb::DynamoStore;
#[cfg(test)]
pub use mock::MockStore;

pub type Item = HashMap<String, AttributeValue>;

/// Opaque resume point handed back by the store (`LastEvaluatedKey`).
pub type Cursor = HashMap<String, AttributeValue>;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub partition_key: String,
    pub limit: i32,
    pub descending: bool,
    pub exclusive_start_key: Option<Cursor>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryPage {
    pub items: Vec<Item>,
    pub cursor: Option<Cursor>,
}

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn query(&self, request: QueryRequest) -> Result<QueryPage>;
}

enum PageState {
    Start,
    Resume(Cursor),
    Exhausted,
}

/// Lazily walks a partition one store page at a time, following the cursor.
///
/// The stream yields at least one page and ends after the first page that
/// comes back without a cursor. Each poll costs one store round-trip.
pub fn pages<'a>(
    store: &'a dyn EntryStore,
    request: QueryRequest,
) -> impl Stream<Item = Result<Vec<Item>>> + 'a {
    stream::try_unfold(PageState::Start, move |state| {
        let mut request = request.clone();
        async move {
            request.exclusive_start_key = match state {
                PageState::Exhausted => return Ok(None),
                PageState::Start => None,
                PageState::Resume(cursor) => Some(cursor),
            };

            let page = store.query(request).await?;
            let next = match page.cursor {
                Some(cursor) => PageState::Resume(cursor),
                None => PageState::Exhausted,
            };

            Ok::<_, crate::Error>(Some((page.items, next)))
        }
    })
}
