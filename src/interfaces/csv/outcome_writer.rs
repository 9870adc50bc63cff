use crate::application::command::Command;
use crate::domain::denomination::to_major_units;
use crate::domain::transaction::{NO_CHANGE, Sale};
use crate::error::{Result, VendingError};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// One line of the outcome report.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct OutcomeRecord {
    pub r#type: &'static str,
    pub product: String,
    /// `ok` or the failure kind.
    pub status: &'static str,
    /// Space separated coin symbols, `0` when none were returned.
    pub change: String,
    /// Change in major units.
    pub change_value: Decimal,
}

impl OutcomeRecord {
    pub fn new(command: &Command, result: &Result<Option<Sale>>) -> Self {
        let (status, sale) = match result {
            Ok(sale) => ("ok", sale.as_ref()),
            Err(e) => (e.kind(), None),
        };
        let change = sale
            .map(|sale| sale.change_symbols().join(" "))
            .unwrap_or_else(|| NO_CHANGE.to_string());
        let change_value = to_major_units(sale.map_or(0, |sale| sale.change_value()));
        Self {
            r#type: command.name(),
            product: command.product().unwrap_or_default().to_string(),
            status,
            change,
            change_value,
        }
    }
}

/// Writes outcome records as CSV with a header row.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, record: &OutcomeRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(VendingError::from)
    }
}
