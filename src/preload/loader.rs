//! Asset loading seam.
//!
//! The coordinator never remembers past load callbacks; progress sampling
//! asks the loader for each asset's current ready state instead. That keeps
//! the loader the single source of truth for what is actually decoded.

use std::{
    collections::HashSet,
    sync::RwLock,
    time::Duration,
};

use anyhow::{Context, Result};

use crate::models::AssetRef;

#[allow(async_fn_in_trait)]
pub trait AssetLoader {
    /// Fetches and decodes one asset. Errors are the caller's to absorb.
    async fn load(&self, asset: &AssetRef) -> Result<()>;

    /// Point-in-time ready check, answered from current loader state.
    fn is_loaded(&self, asset: &AssetRef) -> bool;
}

/// Fetches assets over HTTP and remembers which URLs are resident.
pub struct HttpAssetLoader {
    client: reqwest::Client,
    resident: RwLock<HashSet<String>>,
}

impl HttpAssetLoader {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build asset HTTP client")?;

        Ok(Self {
            client,
            resident: RwLock::new(HashSet::new()),
        })
    }
}

impl AssetLoader for HttpAssetLoader {
    async fn load(&self, asset: &AssetRef) -> Result<()> {
        let response = self
            .client
            .get(&asset.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch asset {}", asset.url))?
            .error_for_status()
            .with_context(|| format!("Asset fetch rejected for {}", asset.url))?;

        // Pull the full body so the bytes are warm in the HTTP cache layer.
        response
            .bytes()
            .await
            .with_context(|| format!("Failed to read asset body for {}", asset.url))?;

        let mut resident = match self.resident.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        resident.insert(asset.url.clone());
        Ok(())
    }

    fn is_loaded(&self, asset: &AssetRef) -> bool {
        let resident = match self.resident.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        resident.contains(&asset.url)
    }
}
