use super::engine::{ProductRefill, VendingMachine};
use crate::domain::transaction::Sale;
use crate::error::Result;

/// One operation a caller can ask the machine to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Select { product: String, coins: Vec<String> },
    Restock(ProductRefill),
    RefillCash(Vec<(String, i64)>),
}

impl Command {
    /// Short name used when reporting the outcome.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Select { .. } => "select",
            Command::Restock(_) => "restock",
            Command::RefillCash(_) => "refill_cash",
        }
    }

    /// Product the command refers to, if any.
    pub fn product(&self) -> Option<&str> {
        match self {
            Command::Select { product, .. } => Some(product.as_str()),
            Command::Restock(refill) => Some(refill.product.name.as_str()),
            Command::RefillCash(_) => None,
        }
    }
}

impl VendingMachine {
    /// Runs a command; only a sale produces a value.
    pub fn execute(&mut self, command: Command) -> Result<Option<Sale>> {
        match command {
            Command::Select { product, coins } => self.select_product(&product, &coins).map(Some),
            Command::Restock(refill) => self.refill_products(vec![refill]).map(|_| None),
            Command::RefillCash(refills) => self.refill_cash(refills).map(|_| None),
        }
    }
}
