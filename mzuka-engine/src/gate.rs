use crate::{stake, BetError, BetTicket, EngineConfig, Result, Selection, StakeLimits};
use serde::{Deserialize, Serialize};

/// Lifecycle of one ticket attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Editable,
    Submitted,
}

/// Gatekeeper for the editable -> submitted transition.
///
/// Validation runs in a fixed order and stops at the first failure, so
/// the render layer always has exactly one message to show. The gate
/// holds no bet data itself; it only remembers whether a ticket has
/// already gone out.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationGate {
    phase: Phase,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Validate a finished bet and, on success, issue the ticket and
    /// move to [`Phase::Submitted`]. Further calls are rejected with
    /// [`BetError::AlreadySubmitted`] until [`ConfirmationGate::reset`].
    pub fn attempt_confirm(
        &mut self,
        selection: &Selection,
        stake_amount: u64,
        contact: &str,
        entered_pin: &str,
        expected_pin: &str,
        config: &EngineConfig,
    ) -> Result<BetTicket> {
        if self.phase == Phase::Submitted {
            return Err(BetError::AlreadySubmitted);
        }

        let min_numbers = config.min_playable_size();
        if selection.len() < min_numbers {
            return Err(BetError::InsufficientNumbers {
                min: min_numbers,
                have: selection.len(),
            });
        }

        validate_contact(contact, config.min_contact_digits)?;

        let limits = StakeLimits {
            min: config.min_stake,
            max: config.max_stake,
            step: config.stake_step,
        };
        if !limits.allows(stake_amount) {
            return Err(BetError::StakeOutOfRange {
                stake: stake_amount,
                min: config.min_stake,
                max: config.max_stake,
            });
        }

        if entered_pin.len() != config.pin_length
            || !entered_pin.chars().all(|c| c.is_ascii_digit())
        {
            return Err(BetError::InvalidPinFormat {
                expected: config.pin_length,
            });
        }

        if entered_pin != expected_pin {
            tracing::warn!("bet confirmation rejected: PIN mismatch");
            return Err(BetError::PinMismatch);
        }

        let potential_win = stake::quote_payout(selection, stake_amount, &config.multipliers);
        let ticket = BetTicket::new(
            selection.clone(),
            stake_amount,
            potential_win,
            contact.to_string(),
        );
        self.phase = Phase::Submitted;

        tracing::info!(
            "ticket {} issued: numbers {} stake {} BIF potential win {} BIF",
            ticket.id(),
            ticket.numbers().display(),
            ticket.stake(),
            ticket.potential_win()
        );

        Ok(ticket)
    }

    /// Re-arm the gate for the next ticket.
    pub fn reset(&mut self) {
        self.phase = Phase::Editable;
    }
}

fn validate_contact(contact: &str, min_digits: usize) -> Result<()> {
    let trimmed = contact.trim();
    if trimmed.is_empty() {
        return Err(BetError::InvalidContact("phone number is empty".into()));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(BetError::InvalidContact(format!(
            "'{}' contains non-digit characters",
            trimmed
        )));
    }
    if trimmed.len() < min_digits {
        return Err(BetError::InvalidContact(format!(
            "need at least {} digits",
            min_digits
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTACT: &str = "79123456";
    const PIN: &str = "1234";

    fn pick(digits: &[u8]) -> Selection {
        let mut sel = Selection::new();
        for &d in digits {
            sel.toggle(d, 3).unwrap();
        }
        sel
    }

    fn confirm(
        gate: &mut ConfirmationGate,
        selection: &Selection,
        stake: u64,
        contact: &str,
        entered: &str,
    ) -> Result<BetTicket> {
        gate.attempt_confirm(
            selection,
            stake,
            contact,
            entered,
            PIN,
            &EngineConfig::default(),
        )
    }

    #[test]
    fn test_too_few_numbers_fails_first() {
        let mut gate = ConfirmationGate::new();
        // Everything else is invalid too; the selection check must win.
        let err = confirm(&mut gate, &pick(&[5]), 0, "", "x").unwrap_err();
        assert_eq!(err, BetError::InsufficientNumbers { min: 2, have: 1 });
    }

    #[test]
    fn test_contact_checked_before_stake() {
        let mut gate = ConfirmationGate::new();
        let err = confirm(&mut gate, &pick(&[1, 2]), 0, "phone", "x").unwrap_err();
        assert!(matches!(err, BetError::InvalidContact(_)));

        let err = confirm(&mut gate, &pick(&[1, 2]), 0, "123", "x").unwrap_err();
        assert!(matches!(err, BetError::InvalidContact(_)));
    }

    #[test]
    fn test_stake_bounds_at_confirmation() {
        let mut gate = ConfirmationGate::new();
        let err = confirm(&mut gate, &pick(&[1, 2]), 229, CONTACT, PIN).unwrap_err();
        assert_eq!(
            err,
            BetError::StakeOutOfRange {
                stake: 229,
                min: 230,
                max: None
            }
        );

        let capped = EngineConfig {
            max_stake: Some(22_924),
            ..Default::default()
        };
        let err = gate
            .attempt_confirm(&pick(&[1, 2]), 30_000, CONTACT, PIN, PIN, &capped)
            .unwrap_err();
        assert!(matches!(err, BetError::StakeOutOfRange { .. }));
    }

    #[test]
    fn test_pin_format_before_pin_match() {
        let mut gate = ConfirmationGate::new();
        for bad in ["12a3", "123", "12345", ""] {
            let err = confirm(&mut gate, &pick(&[1, 2, 3]), 230, CONTACT, bad).unwrap_err();
            assert_eq!(err, BetError::InvalidPinFormat { expected: 4 });
        }
    }

    #[test]
    fn test_wrong_pin_is_a_mismatch() {
        let mut gate = ConfirmationGate::new();
        let err = confirm(&mut gate, &pick(&[1, 2, 3]), 230, CONTACT, "4321").unwrap_err();
        assert_eq!(err, BetError::PinMismatch);
    }

    #[test]
    fn test_success_issues_ticket_and_seals_the_gate() {
        let mut gate = ConfirmationGate::new();
        let selection = pick(&[1, 2, 3]);

        let ticket = confirm(&mut gate, &selection, 230, CONTACT, PIN).unwrap();
        assert_eq!(ticket.numbers(), &selection);
        assert_eq!(ticket.stake(), 230);
        assert_eq!(ticket.potential_win(), 69_000);
        assert_eq!(ticket.contact(), CONTACT);
        assert_eq!(gate.phase(), Phase::Submitted);

        let err = confirm(&mut gate, &selection, 230, CONTACT, PIN).unwrap_err();
        assert_eq!(err, BetError::AlreadySubmitted);

        gate.reset();
        assert_eq!(gate.phase(), Phase::Editable);
        confirm(&mut gate, &selection, 230, CONTACT, PIN).unwrap();
    }
}
