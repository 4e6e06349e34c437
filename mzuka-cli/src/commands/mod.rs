mod account;
mod draw;
mod play;
mod ticket;

pub use account::register;
pub use draw::{next_draw, run_draw};
pub use play::{play, quote};
pub use ticket::list_tickets;

use anyhow::{bail, Result};
use mzuka_engine::selection::MAX_DIGIT;

/// Parse a `--numbers` argument like `4,7,2` or `4-7-2` into digits.
/// Range and duplicate enforcement is the engine's job; this only
/// gets the text into numeric form.
pub(crate) fn parse_numbers(raw: &str) -> Result<Vec<u8>> {
    let mut digits = Vec::new();
    for part in raw.split(|c| c == ',' || c == '-' || c == ' ') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.parse::<u8>() {
            Ok(d) if d <= MAX_DIGIT => digits.push(d),
            _ => bail!("'{}' is not a digit between 0 and 9", part),
        }
    }
    Ok(digits)
}

/// First eight characters of a ticket id for display. Ids come back
/// from the store, so short or hand-edited rows must not panic the
/// listing.
pub(crate) fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
