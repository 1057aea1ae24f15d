// Shared models and the insight math - the brain of the operation
pub mod config;
pub mod error;
pub mod format;
pub mod insights;
pub mod languages;
pub mod models;

pub use config::Config;
pub use error::Error;
pub use insights::{ForkRatio, Totals};
pub use models::{License, Profile, Repository};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
