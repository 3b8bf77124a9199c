//! Core logic, free of any UI concerns
//!
//! - `braille`: the English <-> Braille codec
//! - `context`: Braille-dominance detection
//! - `features`: translator routing and text ingestion

pub mod braille;
pub mod context;
pub mod features;
