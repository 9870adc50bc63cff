use crate::error::VendingError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A coin the machine accepts, valued in minor currency units (cents).
///
/// The set is closed: the symbol <-> value mapping is fixed for the lifetime of
/// the process and every variant has exactly one canonical symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Denomination {
    OneCent,
    TwoCents,
    FiveCents,
    TenCents,
    TwentyCents,
    FiftyCents,
    OneEuro,
    TwoEuros,
}

impl Denomination {
    /// Every denomination, largest value first.
    pub const ALL: [Denomination; 8] = [
        Denomination::TwoEuros,
        Denomination::OneEuro,
        Denomination::FiftyCents,
        Denomination::TwentyCents,
        Denomination::TenCents,
        Denomination::FiveCents,
        Denomination::TwoCents,
        Denomination::OneCent,
    ];

    pub fn value(self) -> u32 {
        match self {
            Denomination::OneCent => 1,
            Denomination::TwoCents => 2,
            Denomination::FiveCents => 5,
            Denomination::TenCents => 10,
            Denomination::TwentyCents => 20,
            Denomination::FiftyCents => 50,
            Denomination::OneEuro => 100,
            Denomination::TwoEuros => 200,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Denomination::OneCent => "1c",
            Denomination::TwoCents => "2c",
            Denomination::FiveCents => "5c",
            Denomination::TenCents => "10c",
            Denomination::TwentyCents => "20c",
            Denomination::FiftyCents => "50c",
            Denomination::OneEuro => "€1",
            Denomination::TwoEuros => "€2",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Denomination {
    type Err = VendingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Denomination::ALL
            .into_iter()
            .find(|coin| coin.symbol() == s)
            .ok_or_else(|| VendingError::InvalidCoin(s.to_string()))
    }
}

impl TryFrom<u32> for Denomination {
    type Error = VendingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Denomination::ALL
            .into_iter()
            .find(|coin| coin.value() == value)
            .ok_or_else(|| VendingError::InvalidCoin(value.to_string()))
    }
}

impl TryFrom<String> for Denomination {
    type Error = VendingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Denomination> for String {
    fn from(coin: Denomination) -> Self {
        coin.symbol().to_string()
    }
}

/// Resolves submitted coin symbols to denominations, preserving order.
///
/// Fails on the first symbol outside the denomination table.
pub fn normalize_coins<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<Denomination>, VendingError> {
    symbols.iter().map(|s| s.as_ref().parse()).collect()
}

/// Converts an amount in minor units into major units (euros) with two decimals.
pub fn to_major_units(minor: u64) -> Decimal {
    Decimal::new(minor as i64, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbol_value_bijection() {
        for coin in Denomination::ALL {
            assert_eq!(coin.symbol().parse::<Denomination>().unwrap(), coin);
            assert_eq!(Denomination::try_from(coin.value()).unwrap(), coin);
        }
    }

    #[test]
    fn test_all_is_descending() {
        let values: Vec<u32> = Denomination::ALL.iter().map(|c| c.value()).collect();
        assert_eq!(values, vec![200, 100, 50, 20, 10, 5, 2, 1]);
    }

    #[test]
    fn test_normalize_preserves_order() {
        let coins = normalize_coins(&["1c", "€1", "50c"]).unwrap();
        assert_eq!(
            coins,
            vec![
                Denomination::OneCent,
                Denomination::OneEuro,
                Denomination::FiftyCents
            ]
        );
    }

    #[test]
    fn test_normalize_rejects_unknown_symbol() {
        let result = normalize_coins(&["10c", "25c"]);
        assert!(matches!(result, Err(VendingError::InvalidCoin(s)) if s == "25c"));
    }

    #[test]
    fn test_non_coin_value_rejected() {
        assert!(matches!(
            Denomination::try_from(25),
            Err(VendingError::InvalidCoin(_))
        ));
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&Denomination::OneEuro).unwrap();
        assert_eq!(json, "\"€1\"");
        let coin: Denomination = serde_json::from_str("\"20c\"").unwrap();
        assert_eq!(coin, Denomination::TwentyCents);
        assert!(serde_json::from_str::<Denomination>("\"hoogabooga\"").is_err());
    }

    #[test]
    fn test_major_units() {
        assert_eq!(to_major_units(11), dec!(0.11));
        assert_eq!(to_major_units(250), dec!(2.50));
    }
}
