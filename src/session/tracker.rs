//! Per-screen game-session lifecycle.
//!
//! One `SessionTracker` is owned by one mounted game screen. It moves
//! between exactly two states: idle and active. `start_session` arms the
//! tracker with a wall-clock start plus a monotonic anchor; `end_session`
//! computes the elapsed duration, assembles the record and submits it to
//! the backend collaborator.

use std::{sync::Arc, time::Instant};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    backend::{SessionBackend, UserProvider},
    models::{GameSession, StoredSession},
    session::profiles,
};
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone)]
struct ActiveSession {
    started_at: DateTime<Utc>,
    /// Monotonic anchor; wall-clock adjustments must not skew durations.
    anchor: Instant,
    client_ref: String,
}

pub struct SessionTracker<B: SessionBackend> {
    backend: B,
    users: Arc<dyn UserProvider>,
    game_id: String,
    active: Option<ActiveSession>,
}

impl<B: SessionBackend> SessionTracker<B> {
    pub fn new(backend: B, users: Arc<dyn UserProvider>, game_id: impl Into<String>) -> Self {
        Self {
            backend,
            users,
            game_id: game_id.into(),
            active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Arms the tracker with the current time. Starting while a session is
    /// already active abandons the unfinished one; the discarded start is
    /// logged, never submitted.
    pub fn start_session(&mut self) {
        if let Some(discarded) = self.active.take() {
            log_warn!(
                "Abandoning unfinished session for game '{}' started at {} (ref {})",
                self.game_id,
                discarded.started_at.to_rfc3339(),
                discarded.client_ref
            );
        }

        self.active = Some(ActiveSession {
            started_at: Utc::now(),
            anchor: Instant::now(),
            client_ref: Uuid::new_v4().to_string(),
        });
    }

    /// Finalizes the active session and submits it.
    ///
    /// Missing preconditions (no active session, no resolved user) warn
    /// locally and return `Ok(None)` without touching the backend or the
    /// tracker state. Once a submission is attempted the tracker returns
    /// to idle whether or not the backend accepted the record; backend
    /// failures propagate as `Err` and retrying is the caller's call.
    pub async fn end_session(
        &mut self,
        success: bool,
        points: u32,
        raw_data: Value,
    ) -> Result<Option<StoredSession>> {
        if self.active.is_none() {
            log_warn!(
                "end_session called for game '{}' with no active session; ignoring",
                self.game_id
            );
            return Ok(None);
        }

        let Some(user) = self.users.current_user() else {
            log_warn!(
                "end_session called for game '{}' with no resolved user; ignoring",
                self.game_id
            );
            return Ok(None);
        };

        // Preconditions hold; the session leaves the active state now,
        // regardless of how the submission goes.
        let active = match self.active.take() {
            Some(active) => active,
            None => return Ok(None),
        };

        let duration_seconds = active.anchor.elapsed().as_secs();
        let record = GameSession {
            user_id: user.id,
            game_id: self.game_id.clone(),
            started_at: active.started_at,
            success,
            points,
            duration_seconds,
            raw_data,
            client_ref: active.client_ref,
        };

        let stored = self.backend.create_session(&record).await?;
        log_info!(
            "Submitted session {} for game '{}' ({points} pts, {duration_seconds}s)",
            stored.id,
            self.game_id
        );
        Ok(Some(stored))
    }

    /// Fallback finalizer for games without real telemetry: draws a
    /// synthetic result profile for `game_name` and defers to
    /// [`end_session`](Self::end_session).
    pub async fn end_session_with_profile(
        &mut self,
        game_name: &str,
    ) -> Result<Option<StoredSession>> {
        let result = profiles::synthetic_result(game_name);
        self.end_session(result.success, result.points, result.raw_data)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::anyhow;
    use serde_json::json;

    use super::*;
    use crate::backend::StaticUser;
    use crate::models::User;

    #[derive(Default)]
    struct RecordingBackend {
        submitted: Mutex<Vec<GameSession>>,
        fail: bool,
    }

    impl SessionBackend for &RecordingBackend {
        async fn create_session(&self, session: &GameSession) -> Result<StoredSession> {
            self.submitted.lock().unwrap().push(session.clone());
            if self.fail {
                return Err(anyhow!("backend unavailable"));
            }
            let now = Utc::now();
            Ok(StoredSession {
                id: "stored-1".to_string(),
                user_id: session.user_id.clone(),
                game_id: session.game_id.clone(),
                started_at: session.started_at,
                success: session.success,
                points: session.points,
                duration_seconds: session.duration_seconds,
                raw_data: session.raw_data.clone(),
                created_at: now,
                updated_at: now,
            })
        }
    }

    fn user_provider() -> Arc<dyn UserProvider> {
        Arc::new(StaticUser(Some(User::new("child-1"))))
    }

    #[tokio::test]
    async fn end_without_start_submits_nothing() {
        let backend = RecordingBackend::default();
        let mut tracker = SessionTracker::new(&backend, user_provider(), "letter-sound");

        let stored = tracker.end_session(true, 3, json!({})).await.unwrap();

        assert!(stored.is_none());
        assert!(backend.submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn end_without_user_submits_nothing_and_stays_active() {
        let backend = RecordingBackend::default();
        let users: Arc<dyn UserProvider> = Arc::new(StaticUser(None));
        let mut tracker = SessionTracker::new(&backend, users, "letter-sound");

        tracker.start_session();
        let stored = tracker.end_session(true, 3, json!({})).await.unwrap();

        assert!(stored.is_none());
        assert!(backend.submitted.lock().unwrap().is_empty());
        assert!(tracker.is_active());
    }

    #[tokio::test]
    async fn duration_is_floored_wall_clock_delta() {
        let backend = RecordingBackend::default();
        let mut tracker = SessionTracker::new(&backend, user_provider(), "letter-sound");

        tracker.start_session();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let stored = tracker
            .end_session(true, 4, json!({ "totalRounds": 7 }))
            .await
            .unwrap()
            .expect("record stored");

        // Sub-second play-throughs floor to zero whole seconds.
        assert_eq!(stored.duration_seconds, 0);
        let submitted = backend.submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].user_id, "child-1");
        assert_eq!(submitted[0].game_id, "letter-sound");
        assert!(!tracker.is_active());
    }

    #[tokio::test]
    async fn backend_failure_propagates_and_tracker_goes_idle() {
        let backend = RecordingBackend {
            fail: true,
            ..Default::default()
        };
        let mut tracker = SessionTracker::new(&backend, user_provider(), "memory-match");

        tracker.start_session();
        let result = tracker.end_session(false, 0, json!({})).await;

        assert!(result.is_err());
        assert!(!tracker.is_active());
    }

    #[tokio::test]
    async fn restart_abandons_the_unfinished_session() {
        let backend = RecordingBackend::default();
        let mut tracker = SessionTracker::new(&backend, user_provider(), "face-mimic");

        tracker.start_session();
        tracker.start_session();
        let stored = tracker.end_session(true, 2, json!({})).await.unwrap();

        // Only the second start reaches the backend.
        assert!(stored.is_some());
        assert_eq!(backend.submitted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn profile_finalizer_submits_bounded_points() {
        let backend = RecordingBackend::default();
        let mut tracker = SessionTracker::new(&backend, user_provider(), "letter-sound");

        tracker.start_session();
        let stored = tracker
            .end_session_with_profile("letter-sound")
            .await
            .unwrap()
            .expect("record stored");

        assert!((1..=7).contains(&stored.points));
        assert_eq!(stored.raw_data["totalRounds"], 7);
    }
}
