//! Bet selection engine for the TatuMzuka 3-digit lottery.
//!
//! One [`BetEngine`] instance models one bettor's session: picking up
//! to three distinct digits, entering a stake, and confirming the bet
//! with a phone number and PIN. The engine is pure and synchronous;
//! rendering, identity and persistence live with the caller.

pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod gate;
pub mod selection;
pub mod stake;
pub mod ticket;

pub use config::EngineConfig;
pub use draw::{DrawResult, DrawSchedule};
pub use engine::{BetEngine, EngineSnapshot};
pub use error::{BetError, Result};
pub use gate::{ConfirmationGate, Phase};
pub use selection::{Selection, Toggle};
pub use stake::{quote_payout, StakeLimits};
pub use ticket::BetTicket;
