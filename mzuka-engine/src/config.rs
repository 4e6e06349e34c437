use serde::{Deserialize, Serialize};

/// Default minimum stake in BIF.
pub const MIN_STAKE: u64 = 230;
/// Stake increment used by the +/- controls.
pub const STAKE_STEP: u64 = 100;
/// Maximum number of digits on a ticket.
pub const MAX_SELECTION_SIZE: usize = 3;
/// Length of the confirmation PIN.
pub const PIN_LENGTH: usize = 4;
/// Minimum digits in a contact phone number (local MSISDN, no prefix).
pub const MIN_CONTACT_DIGITS: usize = 8;

/// Payout multiplier per selection size. Index = number of digits
/// picked; fewer than two digits never pays.
pub const DEFAULT_MULTIPLIERS: [u64; MAX_SELECTION_SIZE + 1] = [0, 0, 10, 300];

/// Tunable rules for one betting session.
///
/// Constructed once per engine instance; the render layer never sees
/// these knobs directly, only their effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Smallest stake a bet may carry, in BIF.
    pub min_stake: u64,
    /// Optional ceiling on the stake. `None` means unbounded.
    pub max_stake: Option<u64>,
    /// Step applied by the increment/decrement controls.
    pub stake_step: u64,
    /// Payout multiplier by selection size.
    pub multipliers: [u64; MAX_SELECTION_SIZE + 1],
    /// How many digits a ticket may hold.
    pub max_selection: usize,
    /// Required PIN length.
    pub pin_length: usize,
    /// Minimum digit count for the contact phone number.
    pub min_contact_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_stake: MIN_STAKE,
            max_stake: None,
            stake_step: STAKE_STEP,
            multipliers: DEFAULT_MULTIPLIERS,
            max_selection: MAX_SELECTION_SIZE,
            pin_length: PIN_LENGTH,
            min_contact_digits: MIN_CONTACT_DIGITS,
        }
    }
}

impl EngineConfig {
    /// Multiplier for a selection of `size` digits. Sizes beyond the
    /// table pay nothing.
    pub fn multiplier(&self, size: usize) -> u64 {
        self.multipliers.get(size).copied().unwrap_or(0)
    }

    /// Smallest selection size that actually pays out. A bet below
    /// this size is rejected at confirmation. Derived from the
    /// multiplier table so a single-tier table (300x at exactly three
    /// digits, nothing below) tightens the rule automatically.
    pub fn min_playable_size(&self) -> usize {
        self.multipliers
            .iter()
            .position(|&m| m > 0)
            .unwrap_or(self.max_selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_matches_product_rules() {
        let config = EngineConfig::default();
        assert_eq!(config.multiplier(0), 0);
        assert_eq!(config.multiplier(1), 0);
        assert_eq!(config.multiplier(2), 10);
        assert_eq!(config.multiplier(3), 300);
        assert_eq!(config.multiplier(4), 0);
        assert_eq!(config.min_playable_size(), 2);
    }

    #[test]
    fn test_single_tier_table_raises_min_playable_size() {
        let config = EngineConfig {
            multipliers: [0, 0, 0, 300],
            ..Default::default()
        };
        assert_eq!(config.min_playable_size(), 3);
    }
}
