//! Fixed asset manifest, partitioned into three priority tiers.
//!
//! High tier is everything the first screen needs, medium covers the game
//! select flow, low is the decorative long tail. The coordinator does not
//! discover assets at runtime; this list is the whole universe.

use crate::models::{AssetRef, PriorityTier};

pub struct AssetRegistry {
    assets: Vec<AssetRef>,
}

impl AssetRegistry {
    pub fn new(assets: Vec<AssetRef>) -> Self {
        Self { assets }
    }

    /// The app's built-in manifest.
    pub fn builtin() -> Self {
        use PriorityTier::{High, Low, Medium};

        let assets = vec![
            // Splash and onboarding
            AssetRef::new("/assets/images/splash/logo.png", High),
            AssetRef::new("/assets/images/splash/background.png", High),
            AssetRef::new("/assets/images/onboarding/mascot.png", High),
            AssetRef::new("/assets/images/onboarding/mic-prompt.png", High),
            // Game select and cards
            AssetRef::new("/assets/images/games/letter-sound-card.png", Medium),
            AssetRef::new("/assets/images/games/face-mimic-card.png", Medium),
            AssetRef::new("/assets/images/games/memory-match-card.png", Medium),
            AssetRef::new("/assets/images/games/attention-track-card.png", Medium),
            AssetRef::new("/assets/images/profile/report-header.png", Medium),
            // Decorative world
            AssetRef::new("/assets/images/world/sky.png", Low),
            AssetRef::new("/assets/images/world/hills.png", Low),
            AssetRef::new("/assets/images/world/clouds.png", Low),
            AssetRef::new("/assets/images/world/trees.png", Low),
        ];

        Self::new(assets)
    }

    pub fn all(&self) -> &[AssetRef] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn tier(&self, tier: PriorityTier) -> Vec<AssetRef> {
        self.assets
            .iter()
            .filter(|asset| asset.tier == tier)
            .cloned()
            .collect()
    }
}
