pub mod context;

pub use context::{use_location, LocationContext, LocationProvider};
