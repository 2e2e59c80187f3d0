//! Sequence-traversal state threaded through navigation transitions.
//!
//! `RedirectState` travels opaquely through the host UI's navigation state
//! bag (camelCase JSON), so every transition hands out a fresh snapshot
//! instead of mutating the one the previous screen still holds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RedirectState {
    pub from_game_redirect: bool,
    /// Category tag for the playlist, e.g. "ADHD".
    pub game_class: Option<String>,
    /// Insertion order is play order.
    pub game_sequence: Vec<String>,
    /// Set semantics over an insertion-ordered list; a game id appears at
    /// most once.
    pub completed_games: Vec<String>,
    pub current_game_index: usize,
}

impl RedirectState {
    pub fn new(game_class: impl Into<String>, game_sequence: Vec<String>) -> Self {
        Self {
            from_game_redirect: true,
            game_class: Some(game_class.into()),
            game_sequence,
            completed_games: Vec::new(),
            current_game_index: 0,
        }
    }

    /// The id of the game the traversal currently points at.
    pub fn current_game(&self) -> Option<&str> {
        self.game_sequence
            .get(self.current_game_index)
            .map(String::as_str)
    }

    /// Copy-on-transition: returns a snapshot with `game_id` added to
    /// `completed_games`. Idempotent, membership is checked first.
    pub fn with_completed(&self, game_id: &str) -> Self {
        let mut next = self.clone();
        if !next.completed_games.iter().any(|id| id == game_id) {
            next.completed_games.push(game_id.to_string());
        }
        next
    }

    /// Copy-on-transition: returns a snapshot pointing at `index`. The
    /// index never moves backwards across a playlist traversal.
    pub fn advanced_to(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.current_game_index = next.current_game_index.max(index);
        next
    }
}
