pub mod coordinator;
pub mod loader;
pub mod registry;

pub use coordinator::{PreloadCoordinator, ScreenGate};
pub use loader::{AssetLoader, HttpAssetLoader};
pub use registry::AssetRegistry;
