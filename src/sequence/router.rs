//! Forward-only traversal of a multi-game playlist.
//!
//! The router is constructed per screen from the incoming navigation
//! snapshot and answers one question: where does control go after the
//! current game. It never reorders or skips; advancement is exactly one
//! position per completion event, and the sequence terminates on the
//! profile screen once the last game is done.

use crate::models::RedirectState;
use crate::log_info;

const ENABLE_LOGS: bool = true;

/// Navigation targets the host UI knows how to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The between-games sequencing screen.
    Sequence,
    /// The terminal progress/profile screen.
    Profile,
}

/// A navigation directive: where to go and the snapshot to carry along.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub route: Route,
    pub state: RedirectState,
}

pub struct GameSequenceRouter {
    state: RedirectState,
}

impl GameSequenceRouter {
    /// Builds a router from the incoming navigation state. Screens mounted
    /// outside a redirect flow pass `None` and get a standalone router
    /// whose handlers are no-ops.
    pub fn new(state: Option<RedirectState>) -> Self {
        Self {
            state: state.unwrap_or_default(),
        }
    }

    pub fn is_in_redirect_flow(&self) -> bool {
        self.state.from_game_redirect
    }

    pub fn game_class(&self) -> Option<&str> {
        self.state.game_class.as_deref()
    }

    pub fn state(&self) -> &RedirectState {
        &self.state
    }

    /// True exactly when the current game is the final playlist entry.
    pub fn is_last_game(&self) -> bool {
        self.is_in_redirect_flow()
            && self.state.current_game_index + 1 >= self.state.game_sequence.len()
    }

    /// The id of the game after the current one, for display only.
    pub fn next_game_name(&self) -> Option<&str> {
        self.state
            .game_sequence
            .get(self.state.current_game_index + 1)
            .map(String::as_str)
    }

    /// Marks the current game completed and hands control back to the
    /// sequencing screen. Re-sequencing is the sequencing screen's job;
    /// this does not advance the index.
    pub fn handle_game_complete(&self) -> Option<Navigation> {
        if !self.is_in_redirect_flow() {
            return None;
        }

        let next_state = match self.state.current_game() {
            Some(game_id) => self.state.with_completed(game_id),
            None => self.state.clone(),
        };

        Some(Navigation {
            route: Route::Sequence,
            state: next_state,
        })
    }

    /// Marks the current game completed and advances by one position:
    /// in bounds → the sequencing screen with the index already pointing
    /// at the next game; out of bounds → the terminal profile screen.
    pub fn handle_go_to_next_game(&self) -> Option<Navigation> {
        if !self.is_in_redirect_flow() {
            return None;
        }

        let completed = match self.state.current_game() {
            Some(game_id) => self.state.with_completed(game_id),
            None => self.state.clone(),
        };

        let next_index = self.state.current_game_index + 1;
        if next_index < self.state.game_sequence.len() {
            // The receiving screen reads the index straight from the
            // snapshot instead of recomputing it from completed_games.
            Some(Navigation {
                route: Route::Sequence,
                state: completed.advanced_to(next_index),
            })
        } else {
            log_info!(
                "Playlist finished ({} games); routing to profile",
                self.state.game_sequence.len()
            );
            Some(Navigation {
                route: Route::Profile,
                state: completed,
            })
        }
    }
}
