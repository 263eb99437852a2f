pub mod errors;
pub mod types;

pub use errors::{ConfigError, FellahError};
pub use types::{Crop, Language, Region};

pub type Result<T> = std::result::Result<T, FellahError>;
