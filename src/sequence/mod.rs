pub mod router;

pub use router::{GameSequenceRouter, Navigation, Route};
