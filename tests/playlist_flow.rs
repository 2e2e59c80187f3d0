//! End-to-end walk of a three-game playlist: preload the splash assets,
//! play each game through the tracker, advance with the router, finish on
//! the profile screen.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use serde_json::json;

use miniplay_core::{
    backend::StaticUser, AssetLoader, AssetRef, AssetRegistry, GameSequenceRouter, GameSession,
    Navigation, PreloadCoordinator, PreloadProgress, PriorityTier, RedirectState, Route,
    ScreenGate, SessionBackend, SessionTracker, StoredSession, User, UserProvider,
};

#[derive(Default)]
struct InMemoryBackend {
    sessions: Mutex<Vec<GameSession>>,
}

impl SessionBackend for &InMemoryBackend {
    async fn create_session(&self, session: &GameSession) -> Result<StoredSession> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.push(session.clone());
        let now = Utc::now();
        Ok(StoredSession {
            id: format!("session-{}", sessions.len()),
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

struct InstantLoader {
    loaded: Arc<Mutex<Vec<String>>>,
}

impl AssetLoader for InstantLoader {
    async fn load(&self, asset: &AssetRef) -> Result<()> {
        self.loaded.lock().unwrap().push(asset.url.clone());
        Ok(())
    }

    fn is_loaded(&self, asset: &AssetRef) -> bool {
        self.loaded.lock().unwrap().contains(&asset.url)
    }
}

fn users() -> Arc<dyn UserProvider> {
    Arc::new(StaticUser(Some(User::new("child-42"))))
}

#[tokio::test]
async fn full_playlist_reaches_the_profile_screen() {
    let backend = InMemoryBackend::default();
    let playlist = RedirectState::new(
        "ADHD",
        vec![
            "letter-sound".to_string(),
            "face-mimic".to_string(),
            "memory-match".to_string(),
        ],
    );

    let mut state = playlist;
    let mut terminal = None;
    for _turn in 0..3 {
        let router = GameSequenceRouter::new(Some(state.clone()));
        let game_id = router.state().current_game().expect("game in range").to_string();

        let mut tracker = SessionTracker::new(&backend, users(), game_id);
        tracker.start_session();
        tracker
            .end_session(true, 3, json!({ "round": 1 }))
            .await
            .unwrap()
            .expect("record stored");

        let Navigation { route, state: next } =
            router.handle_go_to_next_game().expect("in redirect flow");
        match route {
            Route::Sequence => state = next,
            Route::Profile => {
                terminal = Some(next);
                break;
            }
        }
    }

    let terminal = terminal.expect("playlist must terminate on the profile screen");
    assert_eq!(
        terminal.completed_games,
        vec![
            "letter-sound".to_string(),
            "face-mimic".to_string(),
            "memory-match".to_string(),
        ]
    );

    let submitted = backend.sessions.lock().unwrap();
    assert_eq!(submitted.len(), 3);
    assert_eq!(submitted[0].game_id, "letter-sound");
    assert_eq!(submitted[2].game_id, "memory-match");
    assert!(submitted.iter().all(|session| session.user_id == "child-42"));
}

#[tokio::test]
async fn splash_gate_opens_after_priority_preload() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let loader = InstantLoader {
        loaded: Arc::clone(&order),
    };
    let coordinator = PreloadCoordinator::new(loader, AssetRegistry::builtin());
    let gate = ScreenGate::new(Duration::ZERO);

    assert!(!gate.should_reveal(coordinator.progress_all()));

    coordinator.preload_with_priority().await;

    let progress: PreloadProgress = coordinator.progress_all();
    assert_eq!(progress.percentage, 100);
    assert!(gate.should_reveal(progress));

    // Every high-tier splash asset settles before any low-tier one starts.
    let order = order.lock().unwrap();
    let high: Vec<_> = coordinator
        .registry()
        .tier(PriorityTier::High)
        .into_iter()
        .map(|asset| asset.url)
        .collect();
    let first_low = order
        .iter()
        .position(|url| {
            coordinator
                .registry()
                .tier(PriorityTier::Low)
                .iter()
                .any(|asset| &asset.url == url)
        })
        .expect("low tier loaded");
    for url in &high {
        assert!(order.iter().position(|loaded| loaded == url).unwrap() < first_low);
    }
}
