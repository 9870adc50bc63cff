#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use vending::application::engine::{ProductRefill, VendingMachine};
use vending::domain::denomination::Denomination;
use vending::domain::product::{Price, Product};

pub const HEADER: &str = "type, product, price, quantity, coins";

/// Writes an operations CSV with the standard header followed by `rows`.
pub fn operations_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Machine stocked like the reference catalog: snickers (€1) and mars bar (€2),
/// with `coins` of every denomination.
pub fn machine(coins: i64) -> VendingMachine {
    let mut machine = VendingMachine::new();
    machine
        .refill_products(vec![
            ProductRefill::new(
                Product::new("snickers", Price::from(Denomination::OneEuro)),
                10,
            ),
            ProductRefill::new(
                Product::new("mars bar", Price::from(Denomination::TwoEuros)),
                5,
            ),
        ])
        .unwrap();
    if coins > 0 {
        machine
            .refill_cash(Denomination::ALL.map(|coin| (coin.symbol(), coins)))
            .unwrap();
    }
    machine
}

pub fn value_of(symbols: &[String]) -> u64 {
    symbols
        .iter()
        .filter(|s| s.as_str() != "0")
        .map(|s| u64::from(s.parse::<Denomination>().unwrap().value()))
        .sum()
}
