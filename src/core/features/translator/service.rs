use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::types::TranslationRequest;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::TranslationSettings;

/// Remote translation collaborator.
///
/// One attempt per call: no retry, no timeout. Failures surface as
/// `AppError::RemoteCallFailed`.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> AppResult<String>;
}

/// Unofficial Google Translate endpoint (`translate_a/single`, client=gtx).
pub struct GoogleTranslateService {
    http: Client,
    endpoint: String,
}

impl GoogleTranslateService {
    pub fn new(settings: &TranslationSettings) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
        })
    }

    pub fn request_url(&self, req: &TranslationRequest) -> String {
        format!(
            "{}?client=gtx&sl={}&tl={}&dt=t&q={}",
            self.endpoint,
            urlencoding::encode(req.source().as_str()),
            urlencoding::encode(req.target().as_str()),
            urlencoding::encode(req.text())
        )
    }
}

#[async_trait]
impl TranslationBackend for GoogleTranslateService {
    async fn translate(&self, req: &TranslationRequest) -> AppResult<String> {
        tracing::debug!(
            "[Translator] Remote call {} -> {} ({} chars)",
            req.source(),
            req.target(),
            req.text().chars().count()
        );

        let res = self
            .http
            .get(self.request_url(req))
            .send()
            .await
            .map_err(|e| AppError::RemoteCallFailed(format!("Translation API request failed: {}", e)))?;

        if !res.status().is_success() {
            tracing::warn!("[Translator] Translation API returned error: {}", res.status());
            return Err(AppError::RemoteCallFailed(format!(
                "Translation API error: {}",
                res.status()
            )));
        }

        let raw_json: Value = res.json().await.map_err(|e| {
            AppError::RemoteCallFailed(format!("Failed to parse translation API response: {}", e))
        })?;

        join_segments(&raw_json)
    }
}

/// Concatenate `json[0][i][0]` for every segment, in order.
///
/// The body looks like `[[["Hola ", "Hello ", ...], ["mundo", "world", ...]], ...]`.
pub fn join_segments(raw_json: &Value) -> AppResult<String> {
    let sentences = raw_json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| {
            AppError::RemoteCallFailed("Invalid response format from translation API".to_string())
        })?;

    let mut result = String::new();
    for sentence in sentences {
        if let Some(segment) = sentence.get(0).and_then(|v| v.as_str()) {
            result.push_str(segment);
        }
    }
    Ok(result)
}
