use thiserror::Error;

pub type Result<T> = std::result::Result<T, BetError>;

/// Everything the engine can reject. Flat on purpose: every variant is
/// recoverable by the user editing their input and retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BetError {
    /// Caller passed a digit outside the playable 0-9 grid. Contract
    /// violation rather than user input, but surfaced the same way.
    #[error("digit {0} is outside the playable range 0-9")]
    OutOfRange(u8),

    /// Soft warning: the selection already holds the maximum number of
    /// digits. The selection is left untouched.
    #[error("you can only pick {max} numbers")]
    SelectionFull { max: usize },

    #[error("pick at least {min} numbers to play, you have {have}")]
    InsufficientNumbers { min: usize, have: usize },

    #[error("invalid phone number: {0}")]
    InvalidContact(String),

    #[error("stake of {stake} BIF is outside the allowed range ({})", stake_bounds(.min, .max))]
    StakeOutOfRange {
        stake: u64,
        min: u64,
        max: Option<u64>,
    },

    #[error("PIN must be exactly {expected} digits")]
    InvalidPinFormat { expected: usize },

    #[error("incorrect PIN")]
    PinMismatch,

    #[error("this bet was already submitted, start a new one first")]
    AlreadySubmitted,
}

fn stake_bounds(min: &u64, max: &Option<u64>) -> String {
    match max {
        Some(max) => format!("{} to {} BIF", min, max),
        None => format!("minimum {} BIF", min),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stake_message_names_the_violated_bound() {
        let below = BetError::StakeOutOfRange {
            stake: 100,
            min: 230,
            max: None,
        };
        assert_eq!(
            below.to_string(),
            "stake of 100 BIF is outside the allowed range (minimum 230 BIF)"
        );

        let above = BetError::StakeOutOfRange {
            stake: 30_000,
            min: 230,
            max: Some(22_924),
        };
        assert_eq!(
            above.to_string(),
            "stake of 30000 BIF is outside the allowed range (230 to 22924 BIF)"
        );
    }
}
