use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use super::{Cursor, EntryStore, Item, QueryPage, QueryRequest};
use crate::{Error, Result};

/// Scripted store: answers queries from a queue and records every request.
#[derive(Default)]
pub struct MockStore {
    responses: Mutex<VecDeque<Result<QueryPage>>>,
    requests: Mutex<Vec<QueryRequest>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, sort_keys: &[&str], cursor: Option<&str>) -> Self {
        let page = QueryPage {
            items: sort_keys.iter().map(|k| Self::item("test", k)).collect(),
            cursor: cursor.map(Self::cursor),
        };
        self.with_response(Ok(page))
    }

    pub fn with_items(self, items: Vec<Item>, cursor: Option<&str>) -> Self {
        self.with_response(Ok(QueryPage {
            items,
            cursor: cursor.map(Self::cursor),
        }))
    }

    pub fn with_error(self, msg: &str) -> Self {
        self.with_response(Err(Error::StoreQuery(msg.to_string())))
    }

    fn with_response(self, response: Result<QueryPage>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<QueryRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn item(key_cond: &str, sort_key: &str) -> Item {
        HashMap::from([
            ("key_cond".to_string(), AttributeValue::S(key_cond.to_string())),
            ("sort_key".to_string(), AttributeValue::S(sort_key.to_string())),
        ])
    }

    pub fn cursor(sort_key: &str) -> Cursor {
        Self::item("test", sort_key)
    }
}

#[async_trait]
impl EntryStore for MockStore {
    async fn query(&self, request: QueryRequest) -> Result<QueryPage> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::StoreQuery("no scripted response".to_string())))
    }
}
