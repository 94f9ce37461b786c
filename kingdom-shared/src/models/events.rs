use uuid::Uuid;

use crate::pii::Masked;

/// Emitted when a selection is handed to the payment collaborator
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct CheckoutRequestedEvent {
    pub order_ref: Uuid,
    pub intent_id: String,
    pub customer_email: Option<Masked<String>>,
    pub bundle_id: Option<String>,
    pub item_ids: Vec<String>,
    pub add_on_ids: Vec<String>,
    pub total: i64,
    pub currency: String,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_debug_hides_email() {
        let event = CheckoutRequestedEvent {
            order_ref: Uuid::new_v4(),
            intent_id: "cs_1".to_string(),
            customer_email: Some(Masked("visitor@example.com".to_string())),
            bundle_id: Some("sales-suite".to_string()),
            item_ids: vec![],
            add_on_ids: vec!["custom-branding".to_string()],
            total: 849,
            currency: "USD".to_string(),
            timestamp: 0,
        };

        let debug = format!("{:?}", event);
        assert!(!debug.contains("visitor@example.com"));

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["customer_email"], "visitor@example.com");
    }
}
