//! Turn advancement.

use tracing::info;

use crate::board::Match;
use crate::presenter::Presenter;

/// Advances a borrowed match and notifies the presenter.
pub struct MatchHandler<'a, P: Presenter + ?Sized> {
    game_match: &'a mut Match,
    presenter: &'a mut P,
}

impl<'a, P: Presenter + ?Sized> MatchHandler<'a, P> {
    pub fn new(game_match: &'a mut Match, presenter: &'a mut P) -> Self {
        MatchHandler {
            game_match,
            presenter,
        }
    }

    /// Increments the turn counter and notifies the new value. Returns it.
    pub fn next_turn(&mut self) -> u32 {
        let turn = self.game_match.next_turn();
        info!(turn, "turn advanced");
        self.presenter.notify_turn(turn);
        turn
    }
}
