use serde::{Serialize, Deserialize};
use super::settings::AppSettings;
use crate::core::features::translator::types::LanguagePair;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
pub enum AppEvent {
    /// Auto-detection changed the dropdowns; the UI must reflect the new pair
    #[serde(rename = "selection://changed")]
    SelectionChanged(LanguagePair),

    #[serde(rename = "translation://completed")]
    TranslationCompleted { generation: u64, output: String },

    #[serde(rename = "translation://failed")]
    TranslationFailed { generation: u64, message: String },

    #[serde(rename = "settings://updated")]
    SettingsUpdated(AppSettings),
}
