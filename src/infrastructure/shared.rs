use crate::application::command::Command;
use crate::application::engine::{ProductRefill, VendingMachine};
use crate::domain::cash::CashInventory;
use crate::domain::product::ProductCatalog;
use crate::domain::transaction::Sale;
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A vending machine that several tasks can drive at once.
///
/// Uses `Arc<Mutex<VendingMachine>>`; the lock is held for the whole of each
/// operation, so two sales never see the same stock or the same coins.
#[derive(Default, Clone)]
pub struct SharedMachine {
    machine: Arc<Mutex<VendingMachine>>,
}

impl SharedMachine {
    pub fn new(machine: VendingMachine) -> Self {
        Self {
            machine: Arc::new(Mutex::new(machine)),
        }
    }

    pub async fn select_product(&self, product: &str, coins: &[String]) -> Result<Sale> {
        let mut machine = self.machine.lock().await;
        machine.select_product(product, coins)
    }

    pub async fn execute(&self, command: Command) -> Result<Option<Sale>> {
        let mut machine = self.machine.lock().await;
        machine.execute(command)
    }

    pub async fn refill_products(&self, refills: Vec<ProductRefill>) -> Result<()> {
        let mut machine = self.machine.lock().await;
        machine.refill_products(refills)
    }

    pub async fn refill_cash(&self, refills: Vec<(String, i64)>) -> Result<()> {
        let mut machine = self.machine.lock().await;
        machine.refill_cash(refills)
    }

    /// Copy of the catalog as it is right now.
    pub async fn catalog(&self) -> ProductCatalog {
        self.machine.lock().await.catalog().clone()
    }

    /// Copy of the cash inventory as it is right now.
    pub async fn cash(&self) -> CashInventory {
        self.machine.lock().await.cash().clone()
    }

    /// Consumes the handle and returns the machine's final state.
    ///
    /// Clones the state when other handles are still alive.
    pub async fn into_inner(self) -> VendingMachine {
        match Arc::try_unwrap(self.machine) {
            Ok(mutex) => mutex.into_inner(),
            Err(shared) => shared.lock().await.clone(),
        }
    }
}
