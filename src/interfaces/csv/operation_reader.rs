use crate::application::command::Command;
use crate::application::engine::ProductRefill;
use crate::domain::product::{Price, Product};
use crate::error::{Result, VendingError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    Select,
    Restock,
    RefillCash,
}

/// One row of the operations file: `type, product, price, quantity, coins`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OperationRecord {
    pub r#type: OperationType,
    pub product: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<i64>,
    /// Space separated coin symbols.
    pub coins: Option<String>,
}

impl TryFrom<OperationRecord> for Command {
    type Error = VendingError;

    fn try_from(record: OperationRecord) -> Result<Self> {
        let coins: Vec<String> = record
            .coins
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        match record.r#type {
            OperationType::Select => Ok(Command::Select {
                product: required(record.product, "product")?,
                coins,
            }),
            OperationType::Restock => {
                let name = required(record.product, "product")?;
                let price: Price = required(record.price, "price")?.parse()?;
                let quantity = required(record.quantity, "quantity")?;
                Ok(Command::Restock(ProductRefill::new(
                    Product::new(name, price),
                    quantity,
                )))
            }
            OperationType::RefillCash => {
                let quantity = required(record.quantity, "quantity")?;
                Ok(Command::RefillCash(
                    coins.into_iter().map(|coin| (coin, quantity)).collect(),
                ))
            }
        }
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| VendingError::InvalidArgument(format!("Missing {field}")))
}

/// Reads operations from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and tolerating ragged rows.
pub struct OperationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OperationReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads rows and turns each into a `Command`.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize::<OperationRecord>()
            .map(|result| result.map_err(VendingError::from).and_then(Command::try_from))
    }
}
