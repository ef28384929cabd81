//! Event publisher adapters.

use ip_registry_sdk::RegistryEvent;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::domain::ports::EventPublisher;

/// Keeps every published event in memory.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: Mutex<Vec<RegistryEvent>>,
}

impl InMemoryEventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Published events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.lock().clone()
    }
}

impl EventPublisher<RegistryEvent> for InMemoryEventLog {
    fn publish(&self, event: &RegistryEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Writes each event as a structured log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventPublisher;

impl EventPublisher<RegistryEvent> for TracingEventPublisher {
    fn publish(&self, event: &RegistryEvent) {
        match event {
            RegistryEvent::ArtworkTransferred {
                id,
                hash,
                new_owner,
            } => info!(
                target: "ip_registry::events",
                event = event.name(),
                id,
                hash = %hash,
                new_owner = %new_owner,
                "registry event"
            ),
            RegistryEvent::ArtworkRegistered { id, hash }
            | RegistryEvent::ArtworkUpdated { id, hash } => info!(
                target: "ip_registry::events",
                event = event.name(),
                id,
                hash = %hash,
                "registry event"
            ),
        }
    }
}

/// Fans events out to in-process subscribers.
///
/// Publishing never blocks; slow subscribers observe `Lagged` on receive.
#[derive(Debug, Clone)]
pub struct BroadcastEventPublisher {
    tx: broadcast::Sender<RegistryEvent>,
}

impl BroadcastEventPublisher {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.tx.subscribe()
    }
}

impl EventPublisher<RegistryEvent> for BroadcastEventPublisher {
    fn publish(&self, event: &RegistryEvent) {
        if self.tx.send(event.clone()).is_err() {
            debug!(event = event.name(), "No subscribers for registry event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ip_registry_sdk::Principal;
    use tracing_test::traced_test;

    fn registered(id: u64) -> RegistryEvent {
        RegistryEvent::ArtworkRegistered {
            id,
            hash: "a".repeat(64),
        }
    }

    #[test]
    fn test_event_log_records_in_order() {
        let log = InMemoryEventLog::new();
        log.publish(&registered(0));
        log.publish(&RegistryEvent::ArtworkUpdated {
            id: 0,
            hash: "a".repeat(64),
        });

        let events = log.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name(), "artwork-registered");
        assert_eq!(events[1].name(), "artwork-updated");
    }

    #[traced_test]
    #[test]
    fn test_tracing_publisher_logs_event_fields() {
        TracingEventPublisher.publish(&RegistryEvent::ArtworkTransferred {
            id: 4,
            hash: "b".repeat(64),
            new_owner: Principal::from("ST2RECIPIENT"),
        });

        assert!(logs_contain("artwork-transferred"));
        assert!(logs_contain("ST2RECIPIENT"));
    }

    #[tokio::test]
    async fn test_broadcast_reaches_every_subscriber() {
        let publisher = BroadcastEventPublisher::new(8);
        let mut first = publisher.subscribe();
        let mut second = publisher.subscribe();

        publisher.publish(&registered(1));

        assert_eq!(first.recv().await.unwrap(), registered(1));
        assert_eq!(second.recv().await.unwrap(), registered(1));
    }

    #[test]
    fn test_broadcast_without_subscribers_is_silent() {
        let publisher = BroadcastEventPublisher::new(0);
        publisher.publish(&registered(0));
        let mut late = publisher.subscribe();
        assert!(late.try_recv().is_err());
    }
}
