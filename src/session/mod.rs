pub mod profiles;
pub mod tracker;

pub use tracker::SessionTracker;
