use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

use crate::CoreResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutStatus {
    Open,
}

/// A hosted checkout session opened with the payment provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutIntent {
    pub id: String, // Provider's ID (e.g., cs_123)
    pub order_ref: Uuid,
    pub amount: i64,
    pub currency: String,
    pub status: CheckoutStatus,
    /// Where the visitor is sent to pay
    pub checkout_url: String,
    pub created_at: DateTime<Utc>,
}

/// External payment collaborator. Payment capture happens on the provider's side.
#[async_trait]
pub trait PaymentAdapter: Send + Sync {
    /// Open a hosted checkout for exactly `amount`
    async fn create_checkout(
        &self,
        order_ref: Uuid,
        amount: i64,
        currency: &str,
    ) -> CoreResult<CheckoutIntent>;
}
