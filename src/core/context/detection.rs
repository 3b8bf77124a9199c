use std::ops::RangeInclusive;

/// Full Braille Patterns block, including 8-dot cells
pub const BRAILLE_RANGE: RangeInclusive<char> = '\u{2800}'..='\u{28FF}';

/// Share of Braille cells (in percent) that must be strictly exceeded
pub const DOMINANCE_THRESHOLD_PERCENT: usize = 70;

fn count_braille(text: &str) -> (usize, usize) {
    text.chars().fold((0, 0), |(braille, total), c| {
        (braille + usize::from(BRAILLE_RANGE.contains(&c)), total + 1)
    })
}

/// Fraction of characters that fall in the Braille Patterns block.
///
/// Returns 0.0 for empty text.
pub fn braille_ratio(text: &str) -> f64 {
    let (braille, total) = count_braille(text);
    if total == 0 {
        return 0.0;
    }
    braille as f64 / total as f64
}

/// True iff more than 70% of the characters are Braille cells.
///
/// Exactly 70% is not enough. Empty text is never Braille.
pub fn is_braille_dominant(text: &str) -> bool {
    let (braille, total) = count_braille(text);
    if total == 0 {
        return false;
    }
    // Integer form of `braille / total > 0.70`
    braille * 100 > total * DOMINANCE_THRESHOLD_PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed(braille: usize, latin: usize) -> String {
        let mut s = "\u{2801}".repeat(braille);
        s.push_str(&"a".repeat(latin));
        s
    }

    #[test]
    fn test_empty_is_not_braille() {
        assert!(!is_braille_dominant(""));
        assert_eq!(braille_ratio(""), 0.0);
    }

    #[test]
    fn test_exactly_seventy_percent_is_not_dominant() {
        assert!(!is_braille_dominant(&mixed(70, 30)));
        assert!(!is_braille_dominant(&mixed(7, 3)));
    }

    #[test]
    fn test_seventy_one_percent_is_dominant() {
        assert!(is_braille_dominant(&mixed(71, 29)));
    }

    #[test]
    fn test_pure_braille() {
        assert!(is_braille_dominant("\u{2809}\u{2801}\u{2803}"));
        assert!(is_braille_dominant("\u{28FF}"));
    }

    #[test]
    fn test_stray_cells_in_latin_text() {
        assert!(!is_braille_dominant("hello \u{2801} world"));
    }

    #[test]
    fn test_ratio_counts_scalar_values() {
        let ratio = braille_ratio("\u{2801}\u{2801}ab");
        assert!((ratio - 0.5).abs() < f64::EPSILON);
    }
}
