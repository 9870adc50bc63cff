//! Change planning against a finite coin inventory.
//!
//! The plan starts from the ideal greedy decomposition (largest coin first,
//! unlimited supply). When the inventory cannot cover it, a bounded
//! depth-first search tries smaller coins in place of the missing ones.

use super::cash::CashInventory;
use super::denomination::Denomination;

/// Upper bound on search nodes visited before giving up.
const SEARCH_BUDGET: usize = 10_000;

/// Greedy decomposition of `amount` assuming an unlimited supply of every coin.
pub fn greedy_decomposition(amount: u64) -> Vec<Denomination> {
    let mut remaining = amount;
    let mut coins = Vec::new();
    for coin in Denomination::ALL {
        let value = u64::from(coin.value());
        while remaining >= value {
            remaining -= value;
            coins.push(coin);
        }
    }
    coins
}

/// Picks the coins to pay out `amount` from `cash`, largest first.
///
/// Returns `None` when no combination of held coins adds up to `amount`
/// (or the search budget runs out before one is found).
pub fn plan_change(amount: u64, cash: &CashInventory) -> Option<Vec<Denomination>> {
    if amount == 0 {
        return Some(Vec::new());
    }

    let ideal = greedy_decomposition(amount);
    if cash.covers(&ideal) {
        return Some(ideal);
    }

    let available: Vec<(Denomination, u32)> =
        cash.iter().filter(|(_, count)| *count > 0).collect();
    let mut search = Search::new(&available);
    if search.run(0, amount) {
        Some(search.picked)
    } else {
        None
    }
}

struct Search<'a> {
    available: &'a [(Denomination, u32)],
    picked: Vec<Denomination>,
    budget: usize,
}

impl<'a> Search<'a> {
    fn new(available: &'a [(Denomination, u32)]) -> Self {
        Self {
            available,
            picked: Vec::new(),
            budget: SEARCH_BUDGET,
        }
    }

    fn run(&mut self, index: usize, remaining: u64) -> bool {
        if remaining == 0 {
            return true;
        }
        if index == self.available.len() || self.budget == 0 {
            return false;
        }
        self.budget -= 1;

        let (coin, held) = self.available[index];
        let value = u64::from(coin.value());
        let most = u64::from(held).min(remaining / value);
        for take in (0..=most).rev() {
            let mark = self.picked.len();
            self.picked.extend(std::iter::repeat_n(coin, take as usize));
            if self.run(index + 1, remaining - take * value) {
                return true;
            }
            self.picked.truncate(mark);
            if self.budget == 0 {
                return false;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::denomination::Denomination::*;

    fn inventory(coins: &[(Denomination, u32)]) -> CashInventory {
        let mut cash = CashInventory::new();
        for (coin, count) in coins {
            cash.credit(*coin, *count).unwrap();
        }
        cash
    }

    fn sum(coins: &[Denomination]) -> u64 {
        coins.iter().map(|c| u64::from(c.value())).sum()
    }

    #[test]
    fn test_greedy_decomposition() {
        assert_eq!(greedy_decomposition(11), vec![TenCents, OneCent]);
        assert_eq!(
            greedy_decomposition(388),
            vec![
                TwoEuros,
                OneEuro,
                FiftyCents,
                TwentyCents,
                TenCents,
                FiveCents,
                TwoCents,
                OneCent
            ]
        );
        assert!(greedy_decomposition(0).is_empty());
    }

    #[test]
    fn test_plan_uses_ideal_when_held() {
        let cash = inventory(&[(TenCents, 5), (OneCent, 5)]);
        assert_eq!(plan_change(11, &cash), Some(vec![TenCents, OneCent]));
    }

    #[test]
    fn test_plan_substitutes_missing_denomination() {
        // No 10c left: 11 must be paid as 5c + 5c + 1c.
        let cash = inventory(&[(FiveCents, 3), (OneCent, 3)]);
        assert_eq!(plan_change(11, &cash), Some(vec![FiveCents, FiveCents, OneCent]));
    }

    #[test]
    fn test_plan_backtracks_over_greedy_choice() {
        // Greedy would take 50c and be left with 10 it cannot pay.
        let cash = inventory(&[(FiftyCents, 1), (TwentyCents, 3)]);
        let plan = plan_change(60, &cash).unwrap();
        assert_eq!(plan, vec![TwentyCents, TwentyCents, TwentyCents]);
    }

    #[test]
    fn test_plan_infeasible() {
        let cash = inventory(&[(TwentyCents, 10)]);
        assert_eq!(plan_change(11, &cash), None);
        assert_eq!(plan_change(5, &CashInventory::new()), None);
    }

    #[test]
    fn test_plan_never_exceeds_held_counts() {
        let cash = inventory(&[(OneEuro, 1), (FiftyCents, 2), (TenCents, 20), (OneCent, 9)]);
        for amount in 1..=400 {
            if let Some(plan) = plan_change(amount, &cash) {
                assert_eq!(sum(&plan), amount);
                assert!(cash.covers(&plan));
            }
        }
    }

    #[test]
    fn test_search_gives_up_when_budget_runs_out() {
        // Only even coins are held, so an odd amount is never reachable and the
        // search tree is far larger than the budget.
        let held: Vec<(Denomination, u32)> =
            [TwoEuros, OneEuro, FiftyCents, TwentyCents, TenCents, TwoCents]
                .into_iter()
                .map(|coin| (coin, 1_000))
                .collect();
        let cash = inventory(&held);

        let started = std::time::Instant::now();
        assert_eq!(plan_change(1999, &cash), None);
        assert!(started.elapsed() < std::time::Duration::from_secs(5));

        let available: Vec<(Denomination, u32)> = cash.iter().filter(|(_, n)| *n > 0).collect();
        let mut search = Search::new(&available);
        assert!(!search.run(0, 1999));
        assert_eq!(search.budget, 0);
        assert!(search.picked.is_empty());
    }

    #[test]
    fn test_greedy_decomposition_beyond_u32() {
        let amount = u64::from(u32::MAX) + 11;
        let ideal = greedy_decomposition(amount);
        assert_eq!(sum(&ideal), amount);
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(plan_change(0, &CashInventory::new()), Some(Vec::new()));
    }
}
