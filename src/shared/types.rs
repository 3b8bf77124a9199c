use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::features::translator::types::Route;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TranslateResponse {
    pub translated: String,
    /// Effective selection; differs from the request after auto-detection
    pub source_lang: String,
    pub target_lang: String,
    pub route: Route,
    pub auto_detected: bool,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct DetectBrailleResponse {
    pub is_braille: bool,
    pub ratio: f64,
}
