pub mod error;
pub mod format;
pub mod types;

#[cfg(feature = "charter")]
pub mod charter;

#[cfg(feature = "portfolio")]
pub mod portfolio;

#[cfg(feature = "pipeline")]
pub mod pipeline;

#[cfg(feature = "heat")]
pub mod heat;

#[cfg(feature = "infrastructure")]
pub mod infrastructure;

pub use error::CharterError;
pub use types::*;

/// Standard result type for all fallible charter-intel operations
pub type CharterResult<T> = Result<T, CharterError>;
