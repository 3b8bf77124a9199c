//! Per-UI translation session
//!
//! Every input event submits a fresh routing call. Older calls are not
//! cancelled; instead each call carries a generation number and only the
//! newest one is allowed to publish its result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::resolve_and_translate;
use super::service::TranslationBackend;
use super::types::{LanguagePair, RouteOutcome};
use crate::shared::emit::{emit_event, EventBus};
use crate::shared::error::AppResult;
use crate::shared::events::AppEvent;

/// A result that was still the latest when it completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub generation: u64,
    pub outcome: RouteOutcome,
}

pub struct TranslationSession {
    backend: Arc<dyn TranslationBackend>,
    generation: AtomicU64,
    events: EventBus,
}

impl TranslationSession {
    pub fn new(backend: Arc<dyn TranslationBackend>, events: EventBus) -> Self {
        Self {
            backend,
            generation: AtomicU64::new(0),
            events,
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Generation of the most recent submission (0 before the first one)
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current_generation() == generation
    }

    /// Route `text` and publish the result if no newer submission arrived
    /// meanwhile.
    ///
    /// Returns `Ok(None)` when the result was superseded. Errors of superseded
    /// calls are swallowed the same way.
    pub async fn submit(&self, text: &str, selection: &LanguagePair) -> AppResult<Option<Applied>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let result =
            resolve_and_translate(text, &selection.source, &selection.target, self.backend.as_ref()).await;

        if !self.is_current(generation) {
            tracing::debug!(
                "[Session] Dropping stale result #{} (latest is #{})",
                generation,
                self.current_generation()
            );
            return Ok(None);
        }

        match result {
            Ok(outcome) => {
                if outcome.overridden {
                    emit_event(&self.events, AppEvent::SelectionChanged(outcome.languages.clone()));
                }
                emit_event(
                    &self.events,
                    AppEvent::TranslationCompleted {
                        generation,
                        output: outcome.output.clone(),
                    },
                );
                Ok(Some(Applied { generation, outcome }))
            }
            Err(e) => {
                tracing::error!("[Session] Translation #{} failed: {}", generation, e);
                emit_event(
                    &self.events,
                    AppEvent::TranslationFailed {
                        generation,
                        message: e.to_string(),
                    },
                );
                Err(e)
            }
        }
    }
}

/// Swap button: exchange both the selections and the two text areas.
pub fn swap_sides(selection: &mut LanguagePair, input: &mut String, output: &mut String) {
    selection.swap();
    std::mem::swap(input, output);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::braille;
    use crate::core::features::translator::test_support::FakeBackend;
    use crate::shared::error::AppError;

    fn session_with(backend: FakeBackend) -> TranslationSession {
        TranslationSession::new(Arc::new(backend), EventBus::new())
    }

    #[tokio::test]
    async fn test_submit_publishes_completion() {
        let session = session_with(FakeBackend::default());
        let mut rx = session.events().subscribe();

        let applied = session
            .submit("cab", &LanguagePair::new("en", "braille"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(applied.generation, 1);
        assert_eq!(applied.outcome.output, braille::encode("cab"));

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            AppEvent::TranslationCompleted {
                generation: 1,
                output: braille::encode("cab"),
            }
        );
    }

    #[tokio::test]
    async fn test_override_emits_selection_change() {
        let session = session_with(FakeBackend::default());
        let mut rx = session.events().subscribe();

        session
            .submit(&braille::encode("hi"), &LanguagePair::new("en", "fr"))
            .await
            .unwrap();

        let first = rx.recv().await.unwrap();
        assert_eq!(first, AppEvent::SelectionChanged(LanguagePair::new("braille", "en")));
    }

    #[tokio::test]
    async fn test_stale_result_is_dropped() {
        let backend = FakeBackend {
            slow_delay: Some(Duration::from_millis(150)),
            ..FakeBackend::default()
        };
        let session = session_with(backend);
        let pair = LanguagePair::new("en", "fr");

        let (older, newer) = tokio::join!(session.submit("slow request", &pair), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            session.submit("fast request", &pair).await
        });

        assert_eq!(older.unwrap(), None);
        let newer = newer.unwrap().unwrap();
        assert_eq!(newer.generation, 2);
        assert_eq!(newer.outcome.output, "[fr] fast request");
        assert_eq!(session.current_generation(), 2);
    }

    #[tokio::test]
    async fn test_failure_is_reported_and_published() {
        let session = session_with(FakeBackend::failing());
        let mut rx = session.events().subscribe();

        let result = session.submit("hello", &LanguagePair::new("en", "de")).await;
        assert!(matches!(result, Err(AppError::RemoteCallFailed(_))));
        assert!(matches!(
            rx.recv().await.unwrap(),
            AppEvent::TranslationFailed { generation: 1, .. }
        ));
    }

    #[test]
    fn test_swap_sides() {
        let mut pair = LanguagePair::new("en", "braille");
        let mut input = "cab".to_string();
        let mut output = braille::encode("cab");
        swap_sides(&mut pair, &mut input, &mut output);
        assert_eq!(pair, LanguagePair::new("braille", "en"));
        assert_eq!(input, braille::encode("cab"));
        assert_eq!(output, "cab");
    }
}
