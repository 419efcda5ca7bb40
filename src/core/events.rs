//! Internal event bus for mutations and navigation intents
//!
//! The core never renders anything itself; it tells the routing and
//! rendering collaborators what happened through a `tokio::sync::broadcast`
//! channel. Mutations publish record events, views publish navigation
//! intents, and whoever is listening reacts.

use crate::core::auth::Route;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use uuid::Uuid;

/// Events emitted when a collection store mutates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RecordEvent {
    /// A record was created
    Created { resource: String, id: Uuid },
    /// A record was replaced wholesale
    Updated { resource: String, id: Uuid },
    /// A record was removed
    Deleted { resource: String, id: Uuid },
}

impl RecordEvent {
    /// The id this event relates to
    pub fn id(&self) -> Uuid {
        match self {
            RecordEvent::Created { id, .. }
            | RecordEvent::Updated { id, .. }
            | RecordEvent::Deleted { id, .. } => *id,
        }
    }

    /// The resource name this event relates to
    pub fn resource(&self) -> &str {
        match self {
            RecordEvent::Created { resource, .. }
            | RecordEvent::Updated { resource, .. }
            | RecordEvent::Deleted { resource, .. } => resource,
        }
    }
}

/// Top-level event handed to collaborators
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UiEvent {
    /// A collection store mutated
    Record(RecordEvent),
    /// The core asks the routing collaborator to navigate
    Navigate(Route),
}

/// Envelope wrapping an event with its identity and timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub event: UiEvent,
}

impl EventEnvelope {
    fn new(event: UiEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus.
///
/// Cheap to clone and shareable across tasks. Publishing is non-blocking
/// and never fails: with no subscribers the event is simply dropped, and a
/// lagging subscriber gets `Lagged` on its next `recv()`.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a bus with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers
    pub fn publish(&self, event: UiEvent) {
        let _ = self.sender.send(EventEnvelope::new(event));
    }

    /// Subscribe to events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Stream adapter over [`subscribe`](EventBus::subscribe)
    pub fn stream(&self) -> BroadcastStream<EventEnvelope> {
        BroadcastStream::new(self.subscribe())
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_published_events() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();

        let id = Uuid::new_v4();
        bus.publish(UiEvent::Record(RecordEvent::Created {
            resource: "product".to_string(),
            id,
        }));

        let envelope = rx.recv().await.expect("event delivered");
        match envelope.event {
            UiEvent::Record(event) => {
                assert_eq!(event.id(), id);
                assert_eq!(event.resource(), "product");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_fine() {
        let bus = EventBus::new(8);
        assert_eq!(bus.subscriber_count(), 0);
        bus.publish(UiEvent::Navigate(Route::Login));
    }

    #[tokio::test]
    async fn test_stream_adapter() {
        use tokio_stream::StreamExt;

        let bus = EventBus::new(8);
        let mut stream = bus.stream();
        bus.publish(UiEvent::Navigate(Route::Products));

        let envelope = stream.next().await.expect("item").expect("not lagged");
        assert_eq!(envelope.event, UiEvent::Navigate(Route::Products));
    }
}
