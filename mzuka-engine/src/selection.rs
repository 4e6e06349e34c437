use crate::{BetError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Highest digit on the pick grid.
pub const MAX_DIGIT: u8 = 9;

/// Outcome of a toggle on the selection grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added(u8),
    Removed(u8),
}

/// The bettor's chosen digits, in click order.
///
/// Order only matters for display; matching and payout depend on
/// membership alone. Duplicates never occur and the length never
/// exceeds the limit the caller enforces through [`Selection::toggle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    digits: Vec<u8>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Flip a digit in or out of the selection.
    ///
    /// A digit already present is removed (second click deselects). An
    /// absent digit is appended while there is room; once `limit`
    /// digits are picked the call is a no-op that reports
    /// [`BetError::SelectionFull`] so the caller can surface feedback.
    pub fn toggle(&mut self, digit: u8, limit: usize) -> Result<Toggle> {
        if digit > MAX_DIGIT {
            return Err(BetError::OutOfRange(digit));
        }

        if let Some(pos) = self.digits.iter().position(|&d| d == digit) {
            self.digits.remove(pos);
            return Ok(Toggle::Removed(digit));
        }

        if self.digits.len() >= limit {
            return Err(BetError::SelectionFull { max: limit });
        }

        self.digits.push(digit);
        Ok(Toggle::Added(digit))
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Replace the selection with `count` distinct random digits.
    ///
    /// Rejection sampling over a 10-value domain; with `count <= 10`
    /// the loop terminates after a handful of draws in expectation.
    /// Deterministic for a seeded rng.
    pub fn random_fill<R: Rng>(&mut self, rng: &mut R, count: usize) {
        debug_assert!(count <= (MAX_DIGIT as usize + 1));
        self.digits.clear();
        while self.digits.len() < count {
            let digit = rng.gen_range(0..=MAX_DIGIT);
            if !self.digits.contains(&digit) {
                self.digits.push(digit);
            }
        }
        tracing::debug!("random fill picked {:?}", self.digits);
    }

    /// Dash-joined rendering used on tickets and receipts, e.g. `4-7-2`.
    pub fn display(&self) -> String {
        self.digits
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const LIMIT: usize = 3;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut sel = Selection::new();
        assert_eq!(sel.toggle(4, LIMIT).unwrap(), Toggle::Added(4));
        assert_eq!(sel.toggle(7, LIMIT).unwrap(), Toggle::Added(7));
        assert_eq!(sel.digits(), &[4, 7]);

        assert_eq!(sel.toggle(4, LIMIT).unwrap(), Toggle::Removed(4));
        assert_eq!(sel.digits(), &[7]);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        for d in 0..=MAX_DIGIT {
            let mut sel = Selection::new();
            sel.toggle(1, LIMIT).unwrap();
            let before: std::collections::BTreeSet<u8> =
                sel.digits().iter().copied().collect();

            sel.toggle(d, LIMIT).unwrap();
            sel.toggle(d, LIMIT).unwrap();

            let after: std::collections::BTreeSet<u8> =
                sel.digits().iter().copied().collect();
            assert_eq!(after, before, "double toggle of {} must be a no-op", d);
        }
    }

    #[test]
    fn test_fourth_digit_is_rejected_without_mutation() {
        let mut sel = Selection::new();
        for d in [1, 2, 3] {
            sel.toggle(d, LIMIT).unwrap();
        }

        let err = sel.toggle(9, LIMIT).unwrap_err();
        assert_eq!(err, BetError::SelectionFull { max: 3 });
        assert_eq!(sel.digits(), &[1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_digit() {
        let mut sel = Selection::new();
        assert_eq!(sel.toggle(10, LIMIT).unwrap_err(), BetError::OutOfRange(10));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_no_duplicates_under_any_toggle_sequence() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sel = Selection::new();
        for _ in 0..1000 {
            let d = rng.gen_range(0..=MAX_DIGIT);
            let _ = sel.toggle(d, LIMIT);
            assert!(sel.len() <= LIMIT);
            let mut seen = sel.digits().to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), sel.len());
        }
    }

    #[test]
    fn test_random_fill_draws_three_distinct_digits() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut sel = Selection::new();
            sel.random_fill(&mut rng, 3);

            assert_eq!(sel.len(), 3);
            assert!(sel.digits().iter().all(|&d| d <= MAX_DIGIT));
            let mut sorted = sel.digits().to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 3);
        }
    }

    #[test]
    fn test_random_fill_is_deterministic_for_a_seed() {
        let mut a = Selection::new();
        let mut b = Selection::new();
        a.random_fill(&mut StdRng::seed_from_u64(42), 3);
        b.random_fill(&mut StdRng::seed_from_u64(42), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_clear_resets() {
        let mut sel = Selection::new();
        sel.toggle(5, LIMIT).unwrap();
        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn test_display_joins_with_dashes() {
        let mut sel = Selection::new();
        for d in [4, 7, 2] {
            sel.toggle(d, LIMIT).unwrap();
        }
        assert_eq!(sel.display(), "4-7-2");
    }
}
