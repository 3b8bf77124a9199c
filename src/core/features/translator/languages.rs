use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Entry shown in the language dropdowns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
    pub native: String,
}

// (code, English name, native name)
const LANGUAGES: &[(&str, &str, &str)] = &[
    ("en", "English", "English"),
    ("braille", "Braille", "⠃⠗⠁⠊⠇⠇⠑"),
    ("zh", "Chinese", "中文"),
    ("es", "Spanish", "Español"),
    ("fr", "French", "Français"),
    ("de", "German", "Deutsch"),
    ("ar", "Arabic", "العربية"),
    ("pt", "Portuguese", "Português"),
    ("ru", "Russian", "Русский"),
    ("ja", "Japanese", "日本語"),
    ("hi", "Hindi", "हिन्दी"),
    ("it", "Italian", "Italiano"),
    ("nl", "Dutch", "Nederlands"),
    ("pl", "Polish", "Polski"),
    ("tr", "Turkish", "Türkçe"),
    ("hy", "Armenian", "Հայերեն"),
    ("fa", "Persian", "فارسی"),
    ("vi", "Vietnamese", "Tiếng Việt"),
    ("id", "Indonesian", "Bahasa Indonesia"),
    ("ko", "Korean", "한국어"),
    ("bn", "Bengali", "বাংলা"),
    ("ur", "Urdu", "اردو"),
    ("th", "Thai", "ไทย"),
    ("sv", "Swedish", "Svenska"),
    ("da", "Danish", "Dansk"),
    ("fi", "Finnish", "Suomi"),
    ("hu", "Hungarian", "Magyar"),
];

/// All selectable languages, in dropdown order
pub fn supported_languages() -> Vec<LanguageOption> {
    LANGUAGES
        .iter()
        .map(|(code, name, native)| LanguageOption {
            code: code.to_string(),
            name: name.to_string(),
            native: native.to_string(),
        })
        .collect()
}

pub fn find_language(code: &str) -> Option<LanguageOption> {
    supported_languages()
        .into_iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code.trim()))
}
