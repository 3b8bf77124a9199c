//! English <-> Braille transliteration codec
//!
//! A closed lookup table between lowercase Latin letters/punctuation and
//! 6-dot Braille cells (U+2800..U+283F). Characters outside the table pass
//! through untouched in both directions, so both operations are total.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::shared::error::{AppError, AppResult};

/// Forward table: source symbol -> Braille cell.
///
/// Space and newline map to themselves so line layout survives a round trip.
pub const ENGLISH_TO_BRAILLE: &[(char, char)] = &[
    ('a', '\u{2801}'), ('b', '\u{2803}'), ('c', '\u{2809}'), ('d', '\u{2819}'), ('e', '\u{2811}'),
    ('f', '\u{280B}'), ('g', '\u{281B}'), ('h', '\u{2813}'), ('i', '\u{280A}'), ('j', '\u{281A}'),
    ('k', '\u{2805}'), ('l', '\u{2807}'), ('m', '\u{280D}'), ('n', '\u{281D}'), ('o', '\u{2815}'),
    ('p', '\u{280F}'), ('q', '\u{281F}'), ('r', '\u{2817}'), ('s', '\u{280E}'), ('t', '\u{281E}'),
    ('u', '\u{2825}'), ('v', '\u{2827}'), ('w', '\u{283A}'), ('x', '\u{282D}'), ('y', '\u{283D}'),
    ('z', '\u{2835}'),
    (' ', ' '),
    (',', '\u{2802}'),
    (';', '\u{2806}'),
    (':', '\u{2812}'),
    ('.', '\u{2832}'),
    ('!', '\u{2816}'),
    ('?', '\u{2826}'),
    ('-', '\u{2824}'),
    ('\'', '\u{2804}'),
    ('"', '\u{2814}'),
    ('\n', '\n'),
];

static STANDARD_MAP: OnceLock<CharacterMap> = OnceLock::new();

/// Bidirectional character table with a derived inverse.
#[derive(Debug, Clone)]
pub struct CharacterMap {
    forward: HashMap<char, char>,
    inverse: HashMap<char, char>,
}

impl CharacterMap {
    /// Build a map from `(source, cell)` pairs, deriving the inverse.
    ///
    /// Fails if a source symbol is listed twice or two symbols share a cell,
    /// since the inverse would no longer be a true inverse.
    pub fn from_pairs(pairs: &[(char, char)]) -> AppResult<Self> {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut inverse = HashMap::with_capacity(pairs.len());

        for &(source, cell) in pairs {
            if forward.insert(source, cell).is_some() {
                return Err(AppError::Config(format!(
                    "Braille table lists {:?} more than once",
                    source
                )));
            }
            if let Some(previous) = inverse.insert(cell, source) {
                return Err(AppError::Config(format!(
                    "Braille cell U+{:04X} is assigned to both {:?} and {:?}",
                    cell as u32, previous, source
                )));
            }
        }

        Ok(Self { forward, inverse })
    }

    /// The process-wide table, built and validated on first use.
    pub fn standard() -> &'static CharacterMap {
        STANDARD_MAP.get_or_init(|| {
            CharacterMap::from_pairs(ENGLISH_TO_BRAILLE).expect("valid Braille table")
        })
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn cell_for(&self, symbol: char) -> Option<char> {
        self.forward.get(&symbol).copied()
    }

    pub fn symbol_for(&self, cell: char) -> Option<char> {
        self.inverse.get(&cell).copied()
    }

    /// Lowercase, then substitute every mapped character with its cell.
    pub fn encode(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() * 3);
        for ch in text.chars() {
            let folded = fold_case(ch);
            result.push(self.cell_for(folded).unwrap_or(folded));
        }
        result
    }

    /// Substitute every known cell with its Latin symbol.
    pub fn decode(&self, text: &str) -> String {
        text.chars()
            .map(|ch| self.symbol_for(ch).unwrap_or(ch))
            .collect()
    }
}

/// Lowercase one character, keeping it as is when lowercasing would expand it
/// (e.g. 'İ'), so the transform stays one character in, one character out.
fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

pub fn encode(text: &str) -> String {
    CharacterMap::standard().encode(text)
}

pub fn decode(text: &str) -> String {
    CharacterMap::standard().decode(text)
}
