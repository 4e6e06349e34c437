use crate::Selection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable record of a confirmed bet.
///
/// Only the confirmation gate creates these; once issued the engine
/// holds no reference to it and the persistence collaborator decides
/// what happens next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetTicket {
    id: Uuid,
    numbers: Selection,
    stake: u64,
    potential_win: u64,
    contact: String,
    submitted_at: DateTime<Utc>,
}

impl BetTicket {
    pub(crate) fn new(
        numbers: Selection,
        stake: u64,
        potential_win: u64,
        contact: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            numbers,
            stake,
            potential_win,
            contact,
            submitted_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn numbers(&self) -> &Selection {
        &self.numbers
    }

    pub fn stake(&self) -> u64 {
        self.stake
    }

    pub fn potential_win(&self) -> u64 {
        self.potential_win
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
