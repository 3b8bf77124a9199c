//! Braille translator
//!
//! Translates text between natural languages and transliterates between
//! English and 6-dot Braille. Braille-looking input is detected and routed to
//! the local decoder automatically; everything else goes to a remote
//! translation service.

pub mod api;
pub mod core;
pub mod shared;

use std::sync::Arc;

use crate::core::features::translator::service::GoogleTranslateService;
use crate::core::features::translator::session::TranslationSession;
use crate::shared::emit::EventBus;
use crate::shared::error::AppResult;
use crate::shared::settings::AppSettings;

pub use crate::core::braille::{decode, encode, CharacterMap};
pub use crate::core::context::is_braille_dominant;
pub use crate::core::features::translator::resolve_and_translate;
pub use crate::core::features::translator::types::{LanguageId, LanguagePair, Route, RouteOutcome};

/// Wire a session to the Google backend configured in `settings`.
pub fn build_session(settings: &AppSettings, events: EventBus) -> AppResult<TranslationSession> {
    let backend = GoogleTranslateService::new(&settings.translation)?;
    tracing::debug!("[Session] Remote endpoint: {}", settings.translation.endpoint);
    Ok(TranslationSession::new(Arc::new(backend), events))
}
