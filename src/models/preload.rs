//! Preload data models: asset references, priority tiers and the sampled
//! aggregate progress.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::High => "high",
            PriorityTier::Medium => "medium",
            PriorityTier::Low => "low",
        }
    }
}

/// A registered image asset. The registry is fixed at compile time; assets
/// are never discovered dynamically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AssetRef {
    pub url: String,
    pub tier: PriorityTier,
}

impl AssetRef {
    pub fn new(url: impl Into<String>, tier: PriorityTier) -> Self {
        Self {
            url: url.into(),
            tier,
        }
    }
}

/// Point-in-time sample of the preload phase. Once every registered asset
/// has settled this stays complete; there is no reverse transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreloadProgress {
    pub loaded: usize,
    pub total: usize,
    pub percentage: u8,
    pub is_complete: bool,
}

impl PreloadProgress {
    pub fn sample(loaded: usize, total: usize) -> Self {
        // An empty registry counts as already loaded; guards the division.
        // 100 is reserved for completion, so a nearly-done large batch
        // (say 199 of 200) reads 99 instead of rounding up early.
        let percentage = if total == 0 || loaded == total {
            100
        } else {
            (((loaded as f64 / total as f64) * 100.0).round() as u8).min(99)
        };

        Self {
            loaded,
            total,
            percentage,
            is_complete: loaded == total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_nearest() {
        let progress = PreloadProgress::sample(1, 3);
        assert_eq!(progress.percentage, 33);
        assert!(!progress.is_complete);

        let progress = PreloadProgress::sample(2, 3);
        assert_eq!(progress.percentage, 67);
    }

    #[test]
    fn full_percentage_only_at_completion() {
        assert_eq!(PreloadProgress::sample(5, 5).percentage, 100);
        assert!(PreloadProgress::sample(5, 5).is_complete);
        assert!(PreloadProgress::sample(4, 5).percentage < 100);
    }

    #[test]
    fn nearly_complete_large_batch_never_reads_one_hundred() {
        // 199/200 would round up; 100 stays reserved for completion.
        let progress = PreloadProgress::sample(199, 200);
        assert_eq!(progress.percentage, 99);
        assert!(!progress.is_complete);

        let progress = PreloadProgress::sample(999, 1000);
        assert_eq!(progress.percentage, 99);
        assert!(!progress.is_complete);
    }

    #[test]
    fn empty_registry_does_not_divide_by_zero() {
        let progress = PreloadProgress::sample(0, 0);
        assert_eq!(progress.percentage, 100);
        assert!(progress.is_complete);
    }
}
