use crate::product::{AddOn, Bundle, CatalogItem};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The three static storefront catalogs, all priced in one currency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalogs {
    #[serde(default = "default_currency")]
    pub currency: String,
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
    #[serde(default)]
    pub bundles: Vec<Bundle>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Catalogs {
    pub fn new(items: Vec<CatalogItem>, add_ons: Vec<AddOn>, bundles: Vec<Bundle>) -> Self {
        Self {
            currency: default_currency(),
            items,
            add_ons,
            bundles,
        }
    }

    /// Built-in AI bot storefront
    pub fn storefront() -> Self {
        Self::new(
            vec![
                CatalogItem::new("sales-assistant", "Sales Assistant Bot", 299)
                    .with_description("Answers product questions and walks visitors to checkout"),
                CatalogItem::new("customer-support", "Customer Support Bot", 249)
                    .with_description("Handles common support requests around the clock"),
                CatalogItem::new("lead-qualifier", "Lead Qualifier Bot", 299)
                    .with_description("Scores inbound leads and routes them to your team"),
                CatalogItem::new("appointment-setter", "Appointment Setter Bot", 199)
                    .with_description("Books meetings straight into your calendar"),
                CatalogItem::new("social-media", "Social Media Manager Bot", 249)
                    .with_description("Drafts and schedules posts across your channels"),
                CatalogItem::new("content-writer", "Content Writer Bot", 199)
                    .with_description("Writes newsletters, blog posts and product copy"),
            ],
            vec![
                AddOn::new("custom-branding", "Custom Branding", 50)
                    .with_description("Your logo, colors and voice on every bot"),
                AddOn::new("analytics-dashboard", "Analytics Dashboard", 79),
                AddOn::new("priority-support", "Priority Support", 99),
                AddOn::new("extra-integrations", "Extra Integrations", 149),
            ],
            vec![
                Bundle::new(
                    "sales-suite",
                    "Sales Suite",
                    799,
                    &["sales-assistant", "customer-support", "lead-qualifier"],
                    48,
                ),
                Bundle::new(
                    "growth-suite",
                    "Growth Suite",
                    599,
                    &["appointment-setter", "social-media", "content-writer"],
                    48,
                ),
                Bundle::new(
                    "complete-collection",
                    "Complete Collection",
                    1399,
                    &[
                        "sales-assistant",
                        "customer-support",
                        "lead-qualifier",
                        "appointment-setter",
                        "social-media",
                        "content-writer",
                    ],
                    95,
                ),
            ],
        )
    }

    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalogs: Catalogs = serde_json::from_str(json)?;
        catalogs.validate()?;
        Ok(catalogs)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalogs = Self::from_json_str(&json)?;

        tracing::info!(
            "Loaded catalog from {}: {} items, {} add-ons, {} bundles",
            path.display(),
            catalogs.items.len(),
            catalogs.add_ons.len(),
            catalogs.bundles.len()
        );

        Ok(catalogs)
    }

    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    pub fn bundle(&self, id: &str) -> Option<&Bundle> {
        self.bundles.iter().find(|b| b.id == id)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        find_duplicate(self.items.iter().map(|i| i.id.as_str()))
            .map_or(Ok(()), |id| Err(CatalogError::DuplicateId { kind: "item", id }))?;
        find_duplicate(self.add_ons.iter().map(|a| a.id.as_str()))
            .map_or(Ok(()), |id| Err(CatalogError::DuplicateId { kind: "add-on", id }))?;
        find_duplicate(self.bundles.iter().map(|b| b.id.as_str()))
            .map_or(Ok(()), |id| Err(CatalogError::DuplicateId { kind: "bundle", id }))?;

        let negative = self
            .items
            .iter()
            .find(|i| i.price < 0)
            .map(|i| ("item", &i.id))
            .or_else(|| self.add_ons.iter().find(|a| a.price < 0).map(|a| ("add-on", &a.id)))
            .or_else(|| {
                self.bundles
                    .iter()
                    .find(|b| b.price < 0 || b.savings < 0)
                    .map(|b| ("bundle", &b.id))
            });
        if let Some((kind, id)) = negative {
            return Err(CatalogError::InvalidPrice { kind, id: id.clone() });
        }

        // Largest possible total: every item or the priciest bundle, plus every add-on
        let items = checked_sum(self.items.iter().map(|i| i.price));
        let bundle = self.bundles.iter().map(|b| b.price).max().unwrap_or(0);
        let add_ons = checked_sum(self.add_ons.iter().map(|a| a.price));
        items
            .zip(add_ons)
            .and_then(|(items, add_ons)| items.max(bundle).checked_add(add_ons))
            .map(|_| ())
            .ok_or(CatalogError::PriceOverflow)
    }
}

fn checked_sum(mut prices: impl Iterator<Item = i64>) -> Option<i64> {
    prices.try_fold(0i64, |acc, p| acc.checked_add(p))
}

fn find_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Some(id.to_string());
        }
    }
    None
}

/// Catalog loading errors. Lookups never fail.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateId {
        kind: &'static str,
        id: String,
    },

    #[error("Negative price on {kind} {id}")]
    InvalidPrice {
        kind: &'static str,
        id: String,
    },

    #[error("Catalog prices can add up past the largest representable total")]
    PriceOverflow,
}
