use crate::domain::cash::CashInventory;
use crate::domain::change::plan_change;
use crate::domain::denomination::{Denomination, normalize_coins};
use crate::domain::product::{CatalogEntry, Product, ProductCatalog};
use crate::domain::transaction::{Sale, Transaction};
use crate::error::{Result, VendingError};
use tracing::{debug, info, warn};

/// A product refill request: the product and how many units to add.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRefill {
    pub product: Product,
    pub available: i64,
}

impl ProductRefill {
    pub fn new(product: Product, available: i64) -> Self {
        Self { product, available }
    }
}

/// The vending machine: owns the product catalog and the coins it holds.
///
/// Every operation validates its whole input before touching either
/// inventory, so a failed call leaves the machine exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct VendingMachine {
    catalog: ProductCatalog,
    cash: CashInventory,
}

impl VendingMachine {
    /// Creates a machine with an empty catalog and no coins.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventory(catalog: ProductCatalog, cash: CashInventory) -> Self {
        Self { catalog, cash }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn cash(&self) -> &CashInventory {
        &self.cash
    }

    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.catalog.get(name)
    }

    /// Total value of the coins held, in minor units.
    pub fn cash_total(&self) -> u64 {
        self.cash.total()
    }

    /// Sells one unit of `product` paid with `coins` (coin symbols).
    ///
    /// Change comes only from coins held before this sale; the inserted coins
    /// are added to the cash inventory once the sale is certain.
    pub fn select_product<S: AsRef<str>>(&mut self, product: &str, coins: &[S]) -> Result<Sale> {
        if coins.is_empty() {
            return Err(VendingError::NoMoney);
        }
        let entry = self
            .catalog
            .available(product)
            .ok_or_else(|| VendingError::ProductUnavailable(product.to_string()))?;
        let tx = Transaction::new(
            entry.product.name.clone(),
            normalize_coins(coins)?,
            entry.product.price.value(),
        );

        if tx.shortfall().is_some() {
            return Err(VendingError::InsufficientPayment {
                price: tx.price,
                paid: tx.paid(),
            });
        }

        let owed = tx.surplus();
        let change = if owed == 0 {
            Vec::new()
        } else {
            if !self.cash.has_coins() {
                return Err(VendingError::OutOfChange { owed });
            }
            plan_change(owed, &self.cash).ok_or(VendingError::OutOfChange { owed })?
        };

        self.commit(&tx, &change)?;
        debug!(
            product = %tx.product,
            paid = tx.paid(),
            change = owed,
            "Sale completed"
        );
        Ok(Sale {
            product: tx.product,
            change,
        })
    }

    fn commit(&mut self, tx: &Transaction, change: &[Denomination]) -> Result<()> {
        // Staged on a copy: cash is replaced only once the stock is taken.
        let mut cash = self.cash.clone();
        for coin in change {
            cash.debit(*coin, 1)?;
        }
        for coin in &tx.coins {
            cash.credit(*coin, 1)?;
        }
        self.catalog.take_one(&tx.product)?;
        self.cash = cash;
        Ok(())
    }

    /// Adds products to the catalog, inserting names it has not seen.
    ///
    /// Rejects an empty list, blank names, negative counts and stock levels
    /// that would overflow; nothing is applied unless every entry is valid.
    pub fn refill_products(&mut self, refills: Vec<ProductRefill>) -> Result<()> {
        if refills.is_empty() {
            return Err(VendingError::InvalidArgument(
                "No products to refill".to_string(),
            ));
        }
        let mut validated = Vec::with_capacity(refills.len());
        for refill in refills {
            if refill.product.name.trim().is_empty() {
                return Err(VendingError::InvalidArgument(
                    "Product name must not be empty".to_string(),
                ));
            }
            let count = u32::try_from(refill.available).map_err(|_| {
                VendingError::InvalidArgument(format!(
                    "Invalid refill count {} for {}",
                    refill.available, refill.product.name
                ))
            })?;
            validated.push((refill.product, count));
        }

        let mut catalog = self.catalog.clone();
        let mut applied = Vec::with_capacity(validated.len());
        for (product, count) in validated {
            if let Some(existing) = catalog.get(&product.name)
                && existing.product.price != product.price
            {
                warn!(
                    product = %product.name,
                    catalog_price = %existing.product.price,
                    refill_price = %product.price,
                    "Refill price ignored, catalog price kept"
                );
            }
            let name = product.name.clone();
            let available = catalog.restock(product, count)?;
            applied.push((name, count, available));
        }

        self.catalog = catalog;
        for (name, count, available) in applied {
            info!(product = %name, added = count, available, "Product refilled");
        }
        Ok(())
    }

    /// Adds coins to the cash inventory.
    ///
    /// Any unknown symbol fails the whole call with `InvalidCoin`; a negative
    /// count, or one that would overflow a denomination, fails it with
    /// `InvalidArgument`.
    pub fn refill_cash<I, S>(&mut self, refills: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut validated = Vec::new();
        for (symbol, count) in refills {
            let coin: Denomination = symbol.as_ref().parse()?;
            validated.push((coin, count));
        }
        if validated.is_empty() {
            return Err(VendingError::InvalidArgument(
                "No coins to refill".to_string(),
            ));
        }
        let validated = validated
            .into_iter()
            .map(|(coin, count)| {
                u32::try_from(count).map(|count| (coin, count)).map_err(|_| {
                    VendingError::InvalidArgument(format!(
                        "Invalid refill count {count} for {coin}"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut cash = self.cash.clone();
        for (coin, count) in &validated {
            cash.credit(*coin, *count)?;
        }

        self.cash = cash;
        for (coin, count) in validated {
            info!(coin = %coin, added = count, held = self.cash.count(coin), "Cash refilled");
        }
        Ok(())
    }
}
