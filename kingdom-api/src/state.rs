use std::sync::Arc;
use kingdom_catalog::Catalogs;
use kingdom_core::payment::PaymentAdapter;
use kingdom_order::{CheckoutOrchestrator, MockPaymentAdapter};

use crate::app_config::Config;

#[derive(Clone)]
pub struct AppState {
    pub catalogs: Arc<Catalogs>,
    pub checkout: Arc<CheckoutOrchestrator>,
}

impl AppState {
    pub fn new(catalogs: Catalogs, adapter: Arc<dyn PaymentAdapter>) -> Self {
        Self {
            catalogs: Arc::new(catalogs),
            checkout: Arc::new(CheckoutOrchestrator::new(adapter)),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalogs = config.catalogs()?;

        let adapter: Arc<dyn PaymentAdapter> = match config.checkout.provider.as_str() {
            "mock" => Arc::new(MockPaymentAdapter::new(&config.checkout.base_url)),
            other => anyhow::bail!("Unsupported checkout provider: {}", other),
        };

        Ok(Self::new(catalogs, adapter))
    }
}
