pub mod selection;
pub mod calculator;
pub mod orchestrator;

#[cfg(test)]
mod property_tests;

pub use selection::SelectionState;
pub use calculator::{LineKind, OrderPricingCalculator, Quote, QuoteLine};
pub use orchestrator::{CheckoutError, CheckoutOrchestrator, CheckoutOutcome, MockPaymentAdapter};
