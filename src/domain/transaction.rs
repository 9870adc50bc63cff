use super::denomination::Denomination;

/// Symbol reported in place of an empty change list.
pub const NO_CHANGE: &str = "0";

/// A single purchase attempt, alive only while `select_product` runs.
#[derive(Debug, PartialEq, Clone)]
pub struct Transaction {
    pub product: String,
    /// Submitted coins, in insertion order.
    pub coins: Vec<Denomination>,
    pub price: u32,
}

impl Transaction {
    pub fn new(product: impl Into<String>, coins: Vec<Denomination>, price: u32) -> Self {
        Self {
            product: product.into(),
            coins,
            price,
        }
    }

    /// Total inserted, in minor units.
    pub fn paid(&self) -> u64 {
        self.coins.iter().map(|coin| u64::from(coin.value())).sum()
    }

    /// What is still owed, or `None` once the coins cover the price.
    pub fn shortfall(&self) -> Option<u64> {
        u64::from(self.price)
            .checked_sub(self.paid())
            .filter(|owed| *owed > 0)
    }

    /// Amount to return to the customer; zero for an exact payment.
    pub fn surplus(&self) -> u64 {
        self.paid().saturating_sub(u64::from(self.price))
    }
}

/// Outcome of a successful sale.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Sale {
    pub product: String,
    /// Coins paid back, largest first. Empty when the payment was exact.
    pub change: Vec<Denomination>,
}

impl Sale {
    /// Change as coin symbols, with `["0"]` standing for "no change".
    pub fn change_symbols(&self) -> Vec<String> {
        if self.change.is_empty() {
            vec![NO_CHANGE.to_string()]
        } else {
            self.change.iter().map(|coin| coin.symbol().to_string()).collect()
        }
    }

    pub fn change_value(&self) -> u64 {
        self.change.iter().map(|coin| u64::from(coin.value())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::denomination::Denomination::*;

    #[test]
    fn test_exact_single_coin() {
        let tx = Transaction::new("Snickers", vec![OneEuro], 100);
        assert_eq!(tx.shortfall(), None);
        assert_eq!(tx.surplus(), 0);
    }

    #[test]
    fn test_exact_multi_coin_matches_single_coin_path() {
        let single = Transaction::new("Mars Bar", vec![TwoEuros], 200);
        let multi = Transaction::new("Mars Bar", vec![OneEuro, FiftyCents, FiftyCents], 200);
        assert_eq!(single.shortfall(), multi.shortfall());
        assert_eq!(single.surplus(), multi.surplus());
    }

    #[test]
    fn test_overpayment() {
        let tx = Transaction::new(
            "Mars Bar",
            vec![OneCent, OneEuro, FiftyCents, TenCents, FiftyCents],
            200,
        );
        assert_eq!(tx.paid(), 211);
        assert_eq!(tx.shortfall(), None);
        assert_eq!(tx.surplus(), 11);
    }

    #[test]
    fn test_underpayment() {
        let tx = Transaction::new("Mars Bar", vec![OneEuro], 200);
        assert_eq!(tx.shortfall(), Some(100));
        assert_eq!(tx.surplus(), 0);
    }

    #[test]
    fn test_totals_past_u32_range() {
        let count = (u32::MAX / 200 + 2) as usize;
        let tx = Transaction::new("Mars Bar", vec![TwoEuros; count], 200);
        let paid = 200 * count as u64;
        assert!(paid > u64::from(u32::MAX));
        assert_eq!(tx.paid(), paid);
        assert_eq!(tx.shortfall(), None);
        assert_eq!(tx.surplus(), paid - 200);
    }

    #[test]
    fn test_change_symbols_sentinel() {
        let sale = Sale {
            product: "Snickers".to_string(),
            change: Vec::new(),
        };
        assert_eq!(sale.change_symbols(), vec!["0"]);

        let sale = Sale {
            product: "Mars Bar".to_string(),
            change: vec![TenCents, OneCent],
        };
        assert_eq!(sale.change_symbols(), vec!["10c", "1c"]);
        assert_eq!(sale.change_value(), 11);
    }
}
