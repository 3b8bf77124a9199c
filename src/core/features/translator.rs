//! Translator feature
//!
//! Routes input text either through the local Braille codec or to the remote
//! translation service, depending on the selected languages and on whether the
//! text itself looks like Braille.

pub mod languages;
pub mod service;
pub mod session;
pub mod types;

use crate::core::braille;
use crate::core::context::is_braille_dominant;
use crate::shared::error::AppResult;
use service::TranslationBackend;
use types::{LanguageId, LanguagePair, Route, RouteOutcome, RoutePlan, TranslationRequest};

/// Decide how to handle `text` for the declared selection.
///
/// Braille-dominant input with a non-Braille source is re-read as Braille and
/// always targets English, whatever target was declared.
pub fn plan_route(text: &str, declared: &LanguagePair) -> RoutePlan {
    let mut languages = declared.clone();
    let overridden = !languages.source.is_braille() && is_braille_dominant(text);
    if overridden {
        tracing::info!(
            "[Router] Braille input detected, overriding {} -> {} with braille -> en",
            declared.source,
            declared.target
        );
        languages.force_braille_to_english();
    }

    let source = &languages.source;
    let target = &languages.target;
    let route = match (source.is_braille(), target.is_braille()) {
        (true, false) if target.is_english() => Route::LocalDecode,
        (false, true) if source.is_english() => Route::LocalEncode,
        (true, true) => Route::Passthrough,
        (true, false) => Route::PivotDecode,
        (false, true) => Route::PivotEncode,
        (false, false) => Route::RemoteDelegate,
    };

    RoutePlan {
        route,
        languages,
        overridden,
    }
}

/// Route one piece of text and produce its output.
///
/// Local branches never fail. Remote branches short-circuit to an empty
/// output for blank text and otherwise make exactly one backend call.
pub async fn resolve_and_translate(
    text: &str,
    declared_source: &LanguageId,
    declared_target: &LanguageId,
    backend: &dyn TranslationBackend,
) -> AppResult<RouteOutcome> {
    let declared = LanguagePair {
        source: declared_source.clone(),
        target: declared_target.clone(),
    };
    let plan = plan_route(text, &declared);
    tracing::debug!("[Router] {:?} for {} -> {}", plan.route, plan.languages.source, plan.languages.target);

    let languages = &plan.languages;
    let output = match plan.route {
        Route::LocalDecode => braille::decode(text),
        Route::LocalEncode => braille::encode(text),
        Route::Passthrough => text.to_string(),
        Route::RemoteDelegate => {
            remote(text, languages.source.clone(), languages.target.clone(), backend).await?
        }
        Route::PivotDecode => {
            let english = braille::decode(text);
            remote(&english, LanguageId::english(), languages.target.clone(), backend).await?
        }
        Route::PivotEncode => {
            let english = remote(text, languages.source.clone(), LanguageId::english(), backend).await?;
            braille::encode(&english)
        }
    };

    Ok(RouteOutcome {
        output,
        route: plan.route,
        languages: plan.languages,
        overridden: plan.overridden,
    })
}

async fn remote(
    text: &str,
    source: LanguageId,
    target: LanguageId,
    backend: &dyn TranslationBackend,
) -> AppResult<String> {
    if text.trim().is_empty() {
        return Ok(String::new());
    }
    let request = TranslationRequest::new(text, source, target);
    backend.translate(&request).await
}
