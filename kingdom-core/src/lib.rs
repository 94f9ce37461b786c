pub mod payment;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Payment provider error: {0}")]
    PaymentProvider(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
