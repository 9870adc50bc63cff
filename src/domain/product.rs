use super::denomination::Denomination;
use crate::error::VendingError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A positive product price in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPrice", into = "u32")]
pub struct Price(u32);

impl Price {
    pub fn new(minor: u32) -> Result<Self, VendingError> {
        if minor > 0 {
            Ok(Self(minor))
        } else {
            Err(VendingError::InvalidArgument(
                "Price must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<Denomination> for Price {
    fn from(coin: Denomination) -> Self {
        Self(coin.value())
    }
}

impl From<Price> for u32 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts either integer minor units ("60") or a coin symbol ("€2").
impl FromStr for Price {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u32>() {
            Ok(minor) => Self::new(minor),
            Err(_) => s
                .parse::<Denomination>()
                .map(Price::from)
                .map_err(|_| VendingError::InvalidArgument(format!("Invalid price: {s}"))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Minor(u32),
    Text(String),
}

impl TryFrom<RawPrice> for Price {
    type Error = VendingError;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        match raw {
            RawPrice::Minor(minor) => Self::new(minor),
            RawPrice::Text(text) => text.parse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Price,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A product together with how many units are left in the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub product: Product,
    pub available: u32,
}

impl CatalogEntry {
    pub fn in_stock(&self) -> bool {
        self.available > 0
    }
}

/// Products keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Returns the entry only when at least one unit is left.
    pub fn available(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name).filter(|entry| entry.in_stock())
    }

    /// Adds `count` units, inserting the product when the name is new.
    ///
    /// An existing entry keeps its price. Returns the new stock level, or
    /// `InvalidArgument` (leaving the catalog untouched) when it would overflow.
    pub fn restock(&mut self, product: Product, count: u32) -> Result<u32, VendingError> {
        let held = self.entries.get(&product.name).map_or(0, |entry| entry.available);
        let available = held.checked_add(count).ok_or_else(|| {
            VendingError::InvalidArgument(format!(
                "Too many units of {}: {held} held, {count} added",
                product.name
            ))
        })?;
        self.entries
            .entry(product.name.clone())
            .or_insert_with(|| CatalogEntry {
                product,
                available: 0,
            })
            .available = available;
        Ok(available)
    }

    /// Removes one unit of a product that is in stock.
    pub fn take_one(&mut self, name: &str) -> Result<(), VendingError> {
        match self.entries.get_mut(name) {
            Some(entry) if entry.in_stock() => {
                entry.available -= 1;
                Ok(())
            }
            _ => Err(VendingError::ProductUnavailable(name.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
