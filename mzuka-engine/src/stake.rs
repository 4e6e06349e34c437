use crate::Selection;
use serde::{Deserialize, Serialize};

/// Bounds and step size for the stake field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeLimits {
    pub min: u64,
    pub max: Option<u64>,
    pub step: u64,
}

impl StakeLimits {
    /// Pull an amount back inside the allowed range.
    pub fn clamp(&self, amount: u64) -> u64 {
        let amount = amount.max(self.min);
        match self.max {
            Some(max) => amount.min(max),
            None => amount,
        }
    }

    /// Permissive parse of a user-typed stake. Anything that is not a
    /// number falls back to the minimum stake rather than erroring,
    /// matching how the stake text field behaves while being edited.
    pub fn parse(&self, raw: &str) -> u64 {
        let amount = raw.trim().parse::<u64>().unwrap_or(self.min);
        self.clamp(amount)
    }

    /// Apply an increment/decrement, clamping at the bounds. A
    /// decrement below zero lands on the minimum stake.
    pub fn adjust(&self, current: u64, delta: i64) -> u64 {
        let next = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta as u64)
        };
        self.clamp(next)
    }

    /// Whether `amount` is acceptable as-is at confirmation time.
    pub fn allows(&self, amount: u64) -> bool {
        amount >= self.min && self.max.map_or(true, |max| amount <= max)
    }
}

/// Potential win for a selection at a given stake: pure arithmetic,
/// cheap enough to recompute on every keystroke. Saturates instead of
/// overflowing, since an unbounded config accepts any stake.
pub fn quote_payout(selection: &Selection, stake: u64, multipliers: &[u64]) -> u64 {
    let multiplier = multipliers.get(selection.len()).copied().unwrap_or(0);
    stake.saturating_mul(multiplier)
}
