//! Content sniffing used to auto-select the input language
//!
//! One binary heuristic: is the text dominated by Braille cells?

pub mod detection;

pub use detection::{braille_ratio, is_braille_dominant, BRAILLE_RANGE};
