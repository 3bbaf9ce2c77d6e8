use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client};

use super::{EntryStore, QueryPage, QueryRequest};
use crate::{config::AppConfig, Result};

/// [EntryStore] backed by a single DynamoDB table.
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
    partition_key_attribute: String,
}

impl DynamoStore {
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        partition_key_attribute: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            partition_key_attribute: partition_key_attribute.into(),
        }
    }

    /// Loads AWS credentials and region from the environment, honouring an
    /// optional endpoint override (e.g. DynamoDB Local).
    pub async fn from_config(config: &AppConfig) -> Self {
        let sdk_config = aws_config::load_from_env().await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.dynamodb_endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(
            Client::from_conf(builder.build()),
            &config.table_name,
            &config.partition_key_attribute,
        )
    }
}

#[async_trait]
impl EntryStore for DynamoStore {
    async fn query(&self, request: QueryRequest) -> Result<QueryPage> {
        tracing::debug!(
            table = %self.table_name,
            partition_key = %request.partition_key,
            limit = request.limit,
            descending = request.descending,
            resumed = request.exclusive_start_key.is_some(),
            "dynamodb query"
        );

        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#pk = :pk")
            .expression_attribute_names("#pk", &self.partition_key_attribute)
            .expression_attribute_values(":pk", AttributeValue::S(request.partition_key))
            .limit(request.limit)
            .scan_index_forward(!request.descending)
            .set_exclusive_start_key(request.exclusive_start_key)
            .send()
            .await?;

        Ok(QueryPage {
            items: output.items.unwrap_or_default(),
            cursor: output.last_evaluated_key.filter(|key| !key.is_empty()),
        })
    }
}
