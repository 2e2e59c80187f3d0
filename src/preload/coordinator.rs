//! Eager asset preloading with a tiered barrier.
//!
//! `preload_images` is a fan-out/fan-in join: every asset in the batch is
//! fired concurrently and the call resolves once all of them settle. A
//! failed load settles too; the aggregate never fails. Tier ordering is
//! strict: high settles fully before medium starts, medium before low.
//! Nothing here supports cancellation; unmounting a screen just drops the
//! resolved results.

use std::time::{Duration, Instant};

use futures::future::join_all;

use crate::models::{AssetRef, PreloadProgress, PriorityTier};
use crate::preload::{loader::AssetLoader, registry::AssetRegistry};
use crate::log_warn;

const ENABLE_LOGS: bool = true;

pub struct PreloadCoordinator<L: AssetLoader> {
    loader: L,
    registry: AssetRegistry,
}

impl<L: AssetLoader> PreloadCoordinator<L> {
    pub fn new(loader: L, registry: AssetRegistry) -> Self {
        Self { loader, registry }
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Loads a batch concurrently and resolves when every load settles.
    /// Individual failures are logged and swallowed so one broken image
    /// never wedges the barrier.
    pub async fn preload_images(&self, list: &[AssetRef]) {
        join_all(list.iter().map(|asset| self.load_one(asset))).await;
    }

    /// Walks the three tiers strictly in priority order, concurrently
    /// within each tier.
    pub async fn preload_with_priority(&self) {
        for tier in [PriorityTier::High, PriorityTier::Medium, PriorityTier::Low] {
            let batch = self.registry.tier(tier);
            self.preload_images(&batch).await;
        }
    }

    /// Synchronous point-in-time sample over `list`. Each asset is
    /// classified by asking the loader for its current ready state, never
    /// from remembered callback results, so the answer can lag an
    /// in-flight load by one poll.
    pub fn progress(&self, list: &[AssetRef]) -> PreloadProgress {
        let loaded = list
            .iter()
            .filter(|asset| self.loader.is_loaded(asset))
            .count();
        PreloadProgress::sample(loaded, list.len())
    }

    /// Progress over the whole registry.
    pub fn progress_all(&self) -> PreloadProgress {
        self.progress(self.registry.all())
    }

    async fn load_one(&self, asset: &AssetRef) {
        if let Err(err) = self.loader.load(asset).await {
            log_warn!("Preload failed for {} (continuing): {err:#}", asset.url);
        }
    }
}

/// Gate in front of the first content screen: reveal only when the assets
/// are complete AND a minimum display floor has elapsed, so a fast network
/// does not flash the splash away.
pub struct ScreenGate {
    shown_at: Instant,
    min_display: Duration,
}

impl ScreenGate {
    pub fn new(min_display: Duration) -> Self {
        Self {
            shown_at: Instant::now(),
            min_display,
        }
    }

    pub fn should_reveal(&self, progress: PreloadProgress) -> bool {
        progress.is_complete && self.shown_at.elapsed() >= self.min_display
    }
}
