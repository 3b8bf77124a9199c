use serde::{Deserialize, Serialize};
use tokio::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use crate::core::features::translator::types::{BRAILLE, ENGLISH, MAX_INPUT_CHARS};
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::AppEvent;
use crate::shared::emit::{emit_event, EventBus};

/// Overrides `translation.endpoint` when set
pub const ENDPOINT_ENV: &str = "BRAILLE_TRANSLATOR_ENDPOINT";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub translation: TranslationSettings,
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    pub endpoint: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub default_source_lang: String,
    pub default_target_lang: String,
    pub max_input_chars: usize,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_source_lang: ENGLISH.to_string(),
            default_target_lang: BRAILLE.to_string(),
            max_input_chars: MAX_INPUT_CHARS,
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "braille-translator", "braille-translator")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    /// Load from the platform config directory, creating defaults on first run
    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        let mut settings = Self::load_from(&path).await?;
        settings.apply_env();
        Ok(settings)
    }

    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path).await?;
            tracing::info!("[Settings] Wrote defaults to {}", path.display());
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await
            .map_err(|e| AppError::Config(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings: {}", e)))?;

        // The remote call is always bounded, whatever the file says
        if settings.preferences.max_input_chars == 0
            || settings.preferences.max_input_chars > MAX_INPUT_CHARS
        {
            return Err(AppError::Config(format!(
                "max_input_chars must be between 1 and {}",
                MAX_INPUT_CHARS
            )));
        }
        Ok(settings)
    }

    fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                tracing::debug!("[Settings] Endpoint overridden by {}", ENDPOINT_ENV);
                self.translation.endpoint = endpoint.trim().to_string();
            }
        }
    }

    /// Internal helper to write settings without emission
    async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await
                .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).await
            .map_err(|e| AppError::Config(format!("Failed to write settings file: {}", e)))
    }

    /// Save settings and emit update event
    pub async fn save(&self, path: &Path, events: &EventBus) -> AppResult<()> {
        self.save_to(path).await?;
        emit_event(events, AppEvent::SettingsUpdated(self.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings::load_from(&path).await.unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        let mut settings = AppSettings::default();
        settings.preferences.default_target_lang = "fr".to_string();
        settings.save(&path, &bus).await.unwrap();

        let reloaded = AppSettings::load_from(&path).await.unwrap();
        assert_eq!(reloaded.preferences.default_target_lang, "fr");
        assert!(matches!(rx.recv().await.unwrap(), AppEvent::SettingsUpdated(_)));
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, r#"{"preferences": {"default_source_lang": "de"}}"#)
            .await
            .unwrap();

        let settings = AppSettings::load_from(&path).await.unwrap();
        assert_eq!(settings.preferences.default_source_lang, "de");
        assert_eq!(settings.preferences.max_input_chars, MAX_INPUT_CHARS);
        assert_eq!(settings.translation, TranslationSettings::default());
    }

    #[tokio::test]
    async fn test_oversized_cap_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, r#"{"preferences": {"max_input_chars": 9000}}"#)
            .await
            .unwrap();

        let result = AppSettings::load_from(&path).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_garbage_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, "not json").await.unwrap();
        assert!(matches!(AppSettings::load_from(&path).await, Err(AppError::Config(_))));
    }
}
