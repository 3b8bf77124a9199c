//! Command modules for the UI boundary
//!
//! - `translator`: routing, Braille detection, language catalog

pub mod translator;

use crate::shared::error::AppError;

/// Result type alias for UI commands
pub type CommandResult<T> = Result<T, AppError>;
