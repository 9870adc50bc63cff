use crate::application::engine::{ProductRefill, VendingMachine};
use crate::domain::denomination::Denomination;
use crate::domain::product::{Price, Product};
use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A product line in the seed file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    pub price: Price,
    pub available: i64,
}

/// Initial machine contents, usually read from a JSON file.
///
/// ```json
/// {
///   "products": [{ "name": "Snickers", "price": "€2", "available": 10 }],
///   "cash": { "1c": 100, "€1": 20 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MachineSeed {
    #[serde(default)]
    pub products: Vec<SeedProduct>,
    /// Coin symbol to count. Unknown symbols are reported by `build`.
    #[serde(default)]
    pub cash: BTreeMap<String, i64>,
}

impl Default for MachineSeed {
    /// Two chocolate bars and a hundred of every coin.
    fn default() -> Self {
        Self {
            products: vec![
                SeedProduct {
                    name: "Snickers".to_string(),
                    price: Price::from(Denomination::TwoEuros),
                    available: 10,
                },
                SeedProduct {
                    name: "Mars Bar".to_string(),
                    price: Price::from(Denomination::OneEuro),
                    available: 5,
                },
            ],
            cash: Denomination::ALL
                .into_iter()
                .map(|coin| (coin.symbol().to_string(), 100))
                .collect(),
        }
    }
}

impl MachineSeed {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Builds a machine from the seed through the regular refill operations.
    pub fn build(self) -> Result<VendingMachine> {
        let mut machine = VendingMachine::new();
        if !self.products.is_empty() {
            machine.refill_products(
                self.products
                    .into_iter()
                    .map(|p| ProductRefill::new(Product::new(p.name, p.price), p.available))
                    .collect(),
            )?;
        }
        if !self.cash.is_empty() {
            machine.refill_cash(self.cash)?;
        }
        Ok(machine)
    }
}
