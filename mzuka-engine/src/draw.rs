use crate::selection::{Selection, MAX_DIGIT};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of digits drawn each round.
pub const DRAW_SIZE: usize = 3;

/// Fixed draw cadence: a round closes on every cycle boundary of the
/// wall clock (half past and on the hour with the default cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSchedule {
    pub cycle_minutes: i64,
}

impl Default for DrawSchedule {
    fn default() -> Self {
        Self { cycle_minutes: 30 }
    }
}

impl DrawSchedule {
    /// Time remaining until the next draw. Always positive and never
    /// longer than one full cycle. A schedule with a non-positive
    /// cycle counts against the default cadence instead of dividing
    /// by zero.
    pub fn time_to_next(&self, now: DateTime<Utc>) -> Duration {
        let cycle_minutes = if self.cycle_minutes > 0 {
            self.cycle_minutes
        } else {
            Self::default().cycle_minutes
        };
        let cycle_secs = cycle_minutes * 60;
        let into_cycle = now.timestamp().rem_euclid(cycle_secs);
        Duration::seconds(cycle_secs - into_cycle)
    }

    /// Timestamp of the next draw after `now`.
    pub fn next_draw(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + self.time_to_next(now)
    }

    /// `MM:SS` countdown string shown next to the play button.
    pub fn countdown(&self, now: DateTime<Utc>) -> String {
        let remaining = self.time_to_next(now);
        format!(
            "{:02}:{:02}",
            remaining.num_minutes(),
            remaining.num_seconds() % 60
        )
    }
}

/// Winning digits of one simulated draw.
///
/// Each digit is drawn independently, so repeats are possible; a
/// ticket digit matches when it appears anywhere in the winning set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    pub numbers: [u8; DRAW_SIZE],
    pub drawn_at: DateTime<Utc>,
}

impl DrawResult {
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        let mut numbers = [0u8; DRAW_SIZE];
        for slot in numbers.iter_mut() {
            *slot = rng.gen_range(0..=MAX_DIGIT);
        }

        let result = Self {
            numbers,
            drawn_at: Utc::now(),
        };
        tracing::info!("draw results: {}", result.display());
        result
    }

    /// How many of the selection's digits appear in the winning set.
    pub fn hits(&self, selection: &Selection) -> usize {
        selection
            .digits()
            .iter()
            .filter(|d| self.numbers.contains(d))
            .count()
    }

    pub fn display(&self) -> String {
        self.numbers
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}
