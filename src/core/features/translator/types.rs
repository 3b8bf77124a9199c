use std::fmt;

use isolang::Language;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use unicode_segmentation::UnicodeSegmentation;

use crate::shared::error::{AppError, AppResult};

pub const BRAILLE: &str = "braille";
pub const ENGLISH: &str = "en";
pub const AUTO: &str = "auto";

/// Maximum number of characters accepted for one translation
pub const MAX_INPUT_CHARS: usize = 5000;

/// Opaque language identifier as selected in the UI.
///
/// `"braille"` is reserved for transliteration mode. Everything else is passed
/// to the remote service verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(String);

impl LanguageId {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_string())
    }

    pub fn braille() -> Self {
        Self(BRAILLE.to_string())
    }

    pub fn english() -> Self {
        Self(ENGLISH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_braille(&self) -> bool {
        self.0.eq_ignore_ascii_case(BRAILLE)
    }

    pub fn is_english(&self) -> bool {
        self.0.eq_ignore_ascii_case(ENGLISH)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageId {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Check that a code is selectable: the Braille sentinel, `auto`, or an
/// ISO 639-1/639-3 code with an optional region suffix (`zh-CN`).
pub fn validate_language(code: &str) -> AppResult<LanguageId> {
    let code = code.trim();
    if code.eq_ignore_ascii_case(BRAILLE) || code.eq_ignore_ascii_case(AUTO) {
        return Ok(LanguageId::new(code.to_ascii_lowercase()));
    }

    let primary = code.split('-').next().unwrap_or_default().to_ascii_lowercase();
    let known = Language::from_639_1(&primary)
        .or_else(|| Language::from_639_3(&primary))
        .is_some();

    if known {
        Ok(LanguageId::new(code))
    } else {
        Err(AppError::Validation(format!("Unknown language code: {}", code)))
    }
}

/// The input-side and output-side selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: LanguageId,
    pub target: LanguageId,
}

impl LanguagePair {
    pub fn new(source: impl Into<LanguageId>, target: impl Into<LanguageId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Choosing Braille on one side puts English on the other.
    pub fn select_source(&mut self, code: impl Into<LanguageId>) {
        self.source = code.into();
        if self.source.is_braille() {
            self.target = LanguageId::english();
        }
    }

    pub fn select_target(&mut self, code: impl Into<LanguageId>) {
        self.target = code.into();
        if self.target.is_braille() {
            self.source = LanguageId::english();
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    /// Braille-looking input always reads as Braille and targets English.
    pub fn force_braille_to_english(&mut self) {
        self.source = LanguageId::braille();
        self.target = LanguageId::english();
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new(ENGLISH, BRAILLE)
    }
}

/// Cut `text` to at most `max_chars` characters without splitting a grapheme.
pub fn cap_chars(text: &str, max_chars: usize) -> &str {
    let mut used = 0;
    let mut end = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let width = grapheme.chars().count();
        if used + width > max_chars {
            return &text[..end];
        }
        used += width;
        end = offset + grapheme.len();
    }
    text
}

/// One remote translation job. Built fresh per call, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest {
    text: String,
    source: LanguageId,
    target: LanguageId,
}

impl TranslationRequest {
    pub fn new(text: &str, source: LanguageId, target: LanguageId) -> Self {
        let capped = cap_chars(text, MAX_INPUT_CHARS);
        if capped.len() < text.len() {
            tracing::debug!(
                "[Translator] Request text capped at {} characters",
                MAX_INPUT_CHARS
            );
        }
        Self {
            text: capped.to_string(),
            source,
            target,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> &LanguageId {
        &self.source
    }

    pub fn target(&self) -> &LanguageId {
        &self.target
    }
}

/// Branch chosen for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings.ts")]
pub enum Route {
    /// Braille -> English, local
    LocalDecode,
    /// English -> Braille, local
    LocalEncode,
    /// Braille -> Braille
    Passthrough,
    /// Natural language -> natural language via the remote service
    RemoteDelegate,
    /// Braille -> X: decode locally, then English -> X remotely
    PivotDecode,
    /// X -> Braille: X -> English remotely, then encode locally
    PivotEncode,
}

impl Route {
    pub fn is_local(self) -> bool {
        matches!(self, Route::LocalDecode | Route::LocalEncode | Route::Passthrough)
    }
}

/// Routing decision made before any work is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub route: Route,
    pub languages: LanguagePair,
    pub overridden: bool,
}

/// Result of one routing invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteOutcome {
    pub output: String,
    pub route: Route,
    /// Effective selection after any auto-override
    pub languages: LanguagePair,
    pub overridden: bool,
}
