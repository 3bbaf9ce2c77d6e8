use serde::{Deserialize, Serialize};

/// One item of the table, as stored and as returned to clients.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key_cond: String,
    pub sort_key: String,
}

impl Entry {
    /// Case-insensitive substring test against the sort key.
    pub fn matches_search(&self, search: &str) -> bool {
        self.sort_key
            .to_lowercase()
            .contains(&search.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::AttributeValue;
    use std::collections::HashMap;

    fn entry(sort_key: &str) -> Entry {
        Entry {
            key_cond: "test".to_string(),
            sort_key: sort_key.to_string(),
        }
    }

    #[test]
    fn test_matches_search() {
        assert!(entry("item1").matches_search("1"));
        assert!(!entry("item2").matches_search("1"));
        assert!(entry("item1").matches_search("ITEM"));
        assert!(entry("Item-Alpha").matches_search("alpha"));
    }

    #[test]
    fn test_from_dynamo_item() {
        let item: HashMap<String, AttributeValue> = HashMap::from([
            ("key_cond".to_string(), AttributeValue::S("test".to_string())),
            ("sort_key".to_string(), AttributeValue::S("item1".to_string())),
        ]);

        let decoded: Entry = serde_dynamo::from_item(item).unwrap();
        assert_eq!(decoded, entry("item1"));
    }

    #[test]
    fn test_from_dynamo_item_missing_sort_key() {
        let item: HashMap<String, AttributeValue> = HashMap::from([(
            "key_cond".to_string(),
            AttributeValue::S("test".to_string()),
        )]);

        let decoded: Result<Entry, serde_dynamo::Error> = serde_dynamo::from_item(item);
        assert!(decoded.is_err());
    }
}
