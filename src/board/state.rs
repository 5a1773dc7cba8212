//! Match state.
//!
//! The turn counter is the only match-level state the rules core tracks.

use serde::{Deserialize, Serialize};

/// A match in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    turn: u32,
}

impl Match {
    pub const MAX_TURN: u32 = u32::MAX;

    /// Creates a match starting at the given turn.
    pub fn new(turn: u32) -> Self {
        Match { turn }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Advances the counter by one and returns the new turn.
    ///
    /// The counter stops at `MAX_TURN`; scenarios starting there are
    /// rejected on load, so a live match never reaches it.
    pub fn next_turn(&mut self) -> u32 {
        self.turn = self.turn.saturating_add(1);
        self.turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_match_starts_at_zero() {
        assert_eq!(Match::default().turn(), 0);
    }

    #[test]
    fn next_turn_increments_by_one() {
        let mut m = Match::new(7);
        assert_eq!(m.next_turn(), 8);
        assert_eq!(m.next_turn(), 9);
        assert_eq!(m.turn(), 9);
    }

    #[test]
    fn next_turn_stops_at_max() {
        let mut m = Match::new(Match::MAX_TURN - 1);
        assert_eq!(m.next_turn(), Match::MAX_TURN);
        assert_eq!(m.next_turn(), Match::MAX_TURN);
    }
}
