use kingdom_catalog::Catalogs;
use kingdom_core::payment::{CheckoutIntent, CheckoutStatus, PaymentAdapter};
use kingdom_core::CoreResult;
use kingdom_shared::models::events::CheckoutRequestedEvent;
use kingdom_shared::Masked;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::calculator::{OrderPricingCalculator, Quote};
use crate::selection::SelectionState;

/// Result of handing a selection to the payment collaborator
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutOutcome {
    pub intent: CheckoutIntent,
    pub quote: Quote,
    /// Cleared selection for the visitor to continue with
    pub selection: SelectionState,
    #[serde(skip)]
    pub event: CheckoutRequestedEvent,
}

/// Hands priced selections to the external payment provider
pub struct CheckoutOrchestrator {
    adapter: Arc<dyn PaymentAdapter>,
}

impl CheckoutOrchestrator {
    pub fn new(adapter: Arc<dyn PaymentAdapter>) -> Self {
        Self { adapter }
    }

    /// Open a hosted checkout for exactly the selection's total.
    /// Nothing is stored; the order reference only ties the intent to the event.
    pub async fn submit(
        &self,
        selection: &SelectionState,
        catalogs: &Catalogs,
        customer_email: Option<Masked<String>>,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        let quote = OrderPricingCalculator::new(catalogs).quote(selection);
        if quote.total <= 0 {
            return Err(CheckoutError::EmptyOrder);
        }

        let order_ref = Uuid::new_v4();
        let intent = self
            .adapter
            .create_checkout(order_ref, quote.total, &quote.currency)
            .await
            .map_err(|e| {
                tracing::warn!("Payment provider rejected checkout {}: {}", order_ref, e);
                CheckoutError::Payment(e)
            })?;

        let event = CheckoutRequestedEvent {
            order_ref,
            intent_id: intent.id.clone(),
            customer_email,
            bundle_id: selection.selected_bundle_id.clone(),
            item_ids: selection.selected_item_ids.iter().cloned().collect(),
            add_on_ids: selection.selected_add_on_ids.iter().cloned().collect(),
            total: quote.total,
            currency: quote.currency.clone(),
            timestamp: intent.created_at.timestamp(),
        };

        tracing::info!(
            "Checkout {} opened for {} {} ({} lines)",
            intent.id,
            quote.total,
            quote.currency,
            quote.lines.len()
        );

        let mut cleared = selection.clone();
        cleared.clear();

        Ok(CheckoutOutcome {
            intent,
            quote,
            selection: cleared,
            event,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Nothing to check out: the selection totals zero")]
    EmptyOrder,

    #[error("Payment provider error: {0}")]
    Payment(#[from] kingdom_core::CoreError),
}

/// In-process stand-in for the hosted checkout form
pub struct MockPaymentAdapter {
    base_url: String,
}

impl MockPaymentAdapter {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for MockPaymentAdapter {
    fn default() -> Self {
        Self::new("https://checkout.invalid/pay")
    }
}

#[async_trait::async_trait]
impl PaymentAdapter for MockPaymentAdapter {
    async fn create_checkout(
        &self,
        order_ref: Uuid,
        amount: i64,
        currency: &str,
    ) -> CoreResult<CheckoutIntent> {
        // Order reference is encoded in the id so the mock can be traced back
        let id = format!("mock_cs_{}", order_ref.simple());
        Ok(CheckoutIntent {
            checkout_url: format!("{}/{}", self.base_url, id),
            id,
            order_ref,
            amount,
            currency: currency.to_string(),
            status: CheckoutStatus::Open,
            created_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingdom_core::CoreError;

    struct DownAdapter;

    #[async_trait::async_trait]
    impl PaymentAdapter for DownAdapter {
        async fn create_checkout(&self, _order_ref: Uuid, _amount: i64, _currency: &str) -> CoreResult<CheckoutIntent> {
            Err(CoreError::PaymentProvider("gateway timeout".to_string()))
        }
    }

    fn orchestrator() -> CheckoutOrchestrator {
        CheckoutOrchestrator::new(Arc::new(MockPaymentAdapter::default()))
    }

    #[tokio::test]
    async fn test_submit_charges_exact_total_and_clears() {
        let catalogs = Catalogs::storefront();
        let mut selection = SelectionState::new();
        selection.select_bundle("sales-suite", &catalogs);
        selection.toggle_add_on("custom-branding");

        let outcome = orchestrator()
            .submit(&selection, &catalogs, Some(Masked("visitor@example.com".to_string())))
            .await
            .unwrap();

        assert_eq!(outcome.intent.amount, 849);
        assert_eq!(outcome.intent.currency, "USD");
        assert_eq!(outcome.intent.status, CheckoutStatus::Open);
        assert_eq!(outcome.quote.total, 849);
        assert!(outcome.selection.is_empty());
        assert!(outcome.intent.checkout_url.ends_with(&outcome.intent.id));

        assert_eq!(outcome.event.order_ref, outcome.intent.order_ref);
        assert_eq!(outcome.event.bundle_id.as_deref(), Some("sales-suite"));
        assert_eq!(outcome.event.add_on_ids, vec!["custom-branding".to_string()]);
        assert_eq!(outcome.event.total, 849);
    }

    #[tokio::test]
    async fn test_empty_selection_is_refused() {
        let catalogs = Catalogs::storefront();
        let result = orchestrator().submit(&SelectionState::new(), &catalogs, None).await;
        assert!(matches!(result, Err(CheckoutError::EmptyOrder)));
    }

    #[tokio::test]
    async fn test_only_unknown_ids_is_empty() {
        let catalogs = Catalogs::storefront();
        let mut selection = SelectionState::new();
        selection.toggle_item("retired-bot");

        let result = orchestrator().submit(&selection, &catalogs, None).await;
        assert!(matches!(result, Err(CheckoutError::EmptyOrder)));
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces() {
        let catalogs = Catalogs::storefront();
        let mut selection = SelectionState::new();
        selection.toggle_item("sales-assistant");

        let result = CheckoutOrchestrator::new(Arc::new(DownAdapter))
            .submit(&selection, &catalogs, None)
            .await;

        assert!(matches!(result, Err(CheckoutError::Payment(_))));
    }
}
