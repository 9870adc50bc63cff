use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("Invalid coin: {0}")]
    InvalidCoin(String),
    #[error("No money inserted")]
    NoMoney,
    #[error("Product unavailable: {0}")]
    ProductUnavailable(String),
    #[error("Insufficient payment: price {price}, paid {paid}")]
    InsufficientPayment { price: u32, paid: u64 },
    #[error("Out of change: cannot return {owed}")]
    OutOfChange { owed: u64 },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Seed error: {0}")]
    Seed(#[from] serde_json::Error),
}

impl VendingError {
    /// Stable snake_case name of the failure, used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            VendingError::InvalidCoin(_) => "invalid_coin",
            VendingError::NoMoney => "no_money",
            VendingError::ProductUnavailable(_) => "product_unavailable",
            VendingError::InsufficientPayment { .. } => "insufficient_payment",
            VendingError::OutOfChange { .. } => "out_of_change",
            VendingError::InvalidArgument(_) => "invalid_argument",
            VendingError::Csv(_) => "csv",
            VendingError::Io(_) => "io",
            VendingError::Seed(_) => "seed",
        }
    }
}

pub type Result<T> = std::result::Result<T, VendingError>;
