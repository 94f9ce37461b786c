use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A purchasable bot in the storefront
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// Price in whole currency units
    pub price: i64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Optional enhancement, priced independently of items and bundles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Fixed-price package of catalog items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bundle {
    pub id: String,
    pub name: String,
    /// Flat rate charged instead of the member items' prices
    pub price: i64,
    pub member_item_ids: BTreeSet<String>,
    /// Display only; never part of a total
    #[serde(default)]
    pub savings: i64,
}

impl CatalogItem {
    pub fn new(id: &str, name: &str, price: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

impl AddOn {
    pub fn new(id: &str, name: &str, price: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

impl Bundle {
    pub fn new(id: &str, name: &str, price: i64, members: &[&str], savings: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            member_item_ids: members.iter().map(|m| m.to_string()).collect(),
            savings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_members_are_deduplicated() {
        let bundle = Bundle::new("sales-suite", "Sales Suite", 799, &["a", "b", "a"], 48);
        assert_eq!(bundle.member_item_ids.len(), 2);
        assert!(bundle.member_item_ids.contains("a"));
        assert!(!bundle.member_item_ids.contains("c"));
    }

    #[test]
    fn test_optional_fields_default_when_missing() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id":"a","name":"Bot A","price":299}"#).unwrap();
        assert_eq!(item.description, None);

        let bundle: Bundle = serde_json::from_str(
            r#"{"id":"s","name":"Suite","price":799,"member_item_ids":["a"]}"#,
        )
        .unwrap();
        assert_eq!(bundle.savings, 0);
    }
}
