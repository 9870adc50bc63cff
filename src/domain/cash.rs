use super::denomination::Denomination;
use crate::error::VendingError;
use std::collections::BTreeMap;

/// Coins held by the machine, per denomination.
///
/// Every denomination has an entry, possibly zero. Counts never go negative:
/// `debit` refuses to take more coins than are held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashInventory {
    coins: BTreeMap<Denomination, u32>,
}

impl Default for CashInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl CashInventory {
    /// Creates an inventory with zero coins of every denomination.
    pub fn new() -> Self {
        Self {
            coins: Denomination::ALL.into_iter().map(|coin| (coin, 0)).collect(),
        }
    }

    pub fn count(&self, coin: Denomination) -> u32 {
        self.coins.get(&coin).copied().unwrap_or(0)
    }

    /// Total value held, in minor units.
    pub fn total(&self) -> u64 {
        self.coins
            .iter()
            .map(|(coin, count)| u64::from(coin.value()) * u64::from(*count))
            .sum()
    }

    /// Whether at least one coin of any denomination is held.
    pub fn has_coins(&self) -> bool {
        self.coins.values().any(|count| *count > 0)
    }

    /// Adds coins, refusing a count the inventory cannot represent.
    pub fn credit(&mut self, coin: Denomination, count: u32) -> Result<(), VendingError> {
        let held = self.coins.entry(coin).or_insert(0);
        match held.checked_add(count) {
            Some(total) => {
                *held = total;
                Ok(())
            }
            None => Err(VendingError::InvalidArgument(format!(
                "Too many {coin} coins: {held} held, {count} added"
            ))),
        }
    }

    pub fn debit(&mut self, coin: Denomination, count: u32) -> Result<(), VendingError> {
        let held = self.coins.entry(coin).or_insert(0);
        if *held >= count {
            *held -= count;
            Ok(())
        } else {
            Err(VendingError::OutOfChange {
                owed: u64::from(coin.value()) * u64::from(count),
            })
        }
    }

    /// Whether every coin in `coins` can be paid out at once.
    pub fn covers(&self, coins: &[Denomination]) -> bool {
        tally(coins)
            .into_iter()
            .all(|(coin, needed)| u64::from(self.count(coin)) >= needed)
    }

    /// Iterates `(denomination, count)` from the largest denomination down.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.coins.iter().rev().map(|(coin, count)| (*coin, *count))
    }
}

/// Counts how many of each denomination appear in `coins`.
pub fn tally(coins: &[Denomination]) -> BTreeMap<Denomination, u64> {
    let mut counts = BTreeMap::new();
    for coin in coins {
        *counts.entry(*coin).or_insert(0) += 1;
    }
    counts
}
