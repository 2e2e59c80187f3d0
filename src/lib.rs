//! Core client logic for the miniplay kids' app: per-game session
//! tracking, playlist sequencing and asset preloading. Everything visual
//! (screens, cards, the 3D world) lives in the host UI; this crate only
//! answers what to submit, where to navigate and when the first screen may
//! reveal.

pub mod backend;
pub mod models;
pub mod preload;
pub mod sequence;
pub mod session;
pub mod settings;
pub mod utils;

pub use backend::{CredentialProvider, HttpSessionBackend, SessionBackend, UserProvider};
pub use models::{AssetRef, GameSession, PreloadProgress, PriorityTier, RedirectState, StoredSession, User};
pub use preload::{AssetLoader, AssetRegistry, HttpAssetLoader, PreloadCoordinator, ScreenGate};
pub use sequence::{GameSequenceRouter, Navigation, Route};
pub use session::SessionTracker;
pub use settings::{CoreSettings, SettingsStore};
