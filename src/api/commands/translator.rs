//! Translator command module
//!
//! DTO-level entry points used by the front end and the CLI.

use crate::api::commands::CommandResult;
use crate::core::context::{braille_ratio, is_braille_dominant};
use crate::core::features::translator::languages::{supported_languages, LanguageOption};
use crate::core::features::translator::session::{Applied, TranslationSession};
use crate::core::features::translator::types::{validate_language, LanguagePair};
use crate::shared::types::{DetectBrailleResponse, TranslateRequest, TranslateResponse};

/// Route one input through the session.
///
/// `Ok(None)` means a newer request superseded this one and its result must
/// not be shown.
pub async fn translate_text(
    session: &TranslationSession,
    request: TranslateRequest,
) -> CommandResult<Option<TranslateResponse>> {
    let selection = LanguagePair {
        source: validate_language(&request.source_lang)?,
        target: validate_language(&request.target_lang)?,
    };

    let applied = session.submit(&request.text, &selection).await?;

    Ok(applied.map(|Applied { generation, outcome }| {
        if outcome.route.is_local() {
            tracing::debug!("[Translator] Served {:?} locally", outcome.route);
        }
        TranslateResponse {
            translated: outcome.output,
            source_lang: outcome.languages.source.to_string(),
            target_lang: outcome.languages.target.to_string(),
            route: outcome.route,
            auto_detected: outcome.overridden,
            generation,
        }
    }))
}

/// Predicate the UI calls when auto-selecting the input dropdown
pub fn detect_braille(text: &str) -> DetectBrailleResponse {
    DetectBrailleResponse {
        is_braille: is_braille_dominant(text),
        ratio: braille_ratio(text),
    }
}

pub fn list_languages() -> Vec<LanguageOption> {
    supported_languages()
}
