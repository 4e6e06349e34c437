use crate::gate::{ConfirmationGate, Phase};
use crate::selection::Toggle;
use crate::{stake, BetTicket, EngineConfig, Result, Selection, StakeLimits};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One bettor's editable session: selection, stake and confirmation
/// phase behind a single facade.
///
/// Construct one per session and hand it to the render layer; there is
/// no shared state between instances, so tests and parallel sessions
/// stay independent.
#[derive(Debug, Clone)]
pub struct BetEngine {
    config: EngineConfig,
    selection: Selection,
    stake: u64,
    gate: ConfirmationGate,
}

impl BetEngine {
    pub fn new(config: EngineConfig) -> Self {
        let stake = config.min_stake;
        Self {
            config,
            selection: Selection::new(),
            stake,
            gate: ConfirmationGate::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn stake(&self) -> u64 {
        self.stake
    }

    pub fn phase(&self) -> Phase {
        self.gate.phase()
    }

    fn limits(&self) -> StakeLimits {
        StakeLimits {
            min: self.config.min_stake,
            max: self.config.max_stake,
            step: self.config.stake_step,
        }
    }

    /// Flip a digit on the pick grid. See [`Selection::toggle`].
    pub fn toggle(&mut self, digit: u8) -> Result<Toggle> {
        self.selection.toggle(digit, self.config.max_selection)
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Quick-pick a full selection from the supplied random source.
    pub fn random_fill<R: Rng>(&mut self, rng: &mut R) {
        self.selection.random_fill(rng, self.config.max_selection);
    }

    /// Set the stake directly, clamped into the configured range.
    pub fn set_stake(&mut self, amount: u64) -> u64 {
        self.stake = self.limits().clamp(amount);
        self.stake
    }

    /// Set the stake from raw text-field input; non-numeric input
    /// fail-softs to the minimum stake.
    pub fn set_stake_text(&mut self, raw: &str) -> u64 {
        self.stake = self.limits().parse(raw);
        self.stake
    }

    /// Apply the +/- stake controls.
    pub fn adjust_stake(&mut self, delta: i64) -> u64 {
        self.stake = self.limits().adjust(self.stake, delta);
        self.stake
    }

    /// Step size the render layer should wire to its +/- controls.
    pub fn stake_step(&self) -> u64 {
        self.config.stake_step
    }

    /// Potential win for the current selection and stake.
    pub fn quote(&self) -> u64 {
        stake::quote_payout(&self.selection, self.stake, &self.config.multipliers)
    }

    /// Run the confirmation gate over the current state. On success the
    /// editable state resets for the next bet and the issued ticket is
    /// handed back; the engine keeps no copy.
    pub fn confirm(
        &mut self,
        contact: &str,
        entered_pin: &str,
        expected_pin: &str,
    ) -> Result<BetTicket> {
        let ticket = self.gate.attempt_confirm(
            &self.selection,
            self.stake,
            contact,
            entered_pin,
            expected_pin,
            &self.config,
        )?;

        self.selection.clear();
        self.stake = self.config.min_stake;
        Ok(ticket)
    }

    /// Start a fresh editable ticket after a submission.
    pub fn reset(&mut self) {
        self.gate.reset();
        self.selection.clear();
        self.stake = self.config.min_stake;
    }

    /// Point-in-time view for renderers.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            numbers: self.selection.digits().to_vec(),
            stake: self.stake,
            potential_win: self.quote(),
            phase: self.gate.phase(),
        }
    }
}

impl Default for BetEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Snapshot of the session for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub numbers: Vec<u8>,
    pub stake: u64,
    pub potential_win: u64,
    pub phase: Phase,
}
