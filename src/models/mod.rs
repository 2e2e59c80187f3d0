pub mod preload;
pub mod redirect;
pub mod session;

pub use preload::{AssetRef, PreloadProgress, PriorityTier};
pub use redirect::RedirectState;
pub use session::{GameSession, StoredSession, User};
