use tokio::sync::broadcast;
use super::events::AppEvent;

const EVENT_CAPACITY: usize = 64;

/// Fan-out channel between the core and whatever UI is listening
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit an application event to all subscribers
///
/// Having nobody listening is not an error; the event is just dropped.
pub fn emit_event(bus: &EventBus, event: AppEvent) {
    if let Err(e) = bus.sender.send(event) {
        tracing::debug!("[Events] No subscriber for {:?}", e.0);
    }
}
