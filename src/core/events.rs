// Publish/subscribe event channel
//
// Simulation code publishes state changes here; read-only consumers (the HUD,
// the sound hooks in the binary) each hold a `Subscription` and drain it on
// their own schedule. Nothing downstream ever writes back into the simulation.

use std::sync::{Arc, Mutex};

/// Receiving end of an event channel
#[derive(Debug)]
pub struct Subscription<E> {
    queue: Arc<Mutex<Vec<E>>>,
}

impl<E> Subscription<E> {
    /// Take every event published since the last drain
    pub fn drain(&self) -> Vec<E> {
        self.queue
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }

    /// Number of events waiting
    pub fn pending(&self) -> usize {
        self.queue.lock().map(|events| events.len()).unwrap_or(0)
    }
}

/// Fan-out channel: every published event is delivered to every subscriber
#[derive(Debug)]
pub struct EventChannel<E> {
    subscribers: Vec<Arc<Mutex<Vec<E>>>>,
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventChannel<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a new consumer; it only sees events published after this call
    pub fn subscribe(&mut self) -> Subscription<E> {
        let queue = Arc::new(Mutex::new(Vec::with_capacity(32)));
        self.subscribers.push(Arc::clone(&queue));
        Subscription { queue }
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E: Clone> EventChannel<E> {
    /// Deliver an event to all subscribers
    pub fn publish(&mut self, event: E) {
        // Subscriptions that were dropped only hold the channel's reference
        self.subscribers.retain(|queue| Arc::strong_count(queue) > 1);

        for queue in &self.subscribers {
            if let Ok(mut events) = queue.lock() {
                events.push(event.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subscriber_receives_event() {
        let mut channel = EventChannel::new();
        let a = channel.subscribe();
        let b = channel.subscribe();

        channel.publish(7u32);

        assert_eq!(a.drain(), vec![7]);
        assert_eq!(b.drain(), vec![7]);
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut channel = EventChannel::new();
        let sub = channel.subscribe();
        channel.publish("hit");
        channel.publish("die");

        assert_eq!(sub.pending(), 2);
        assert_eq!(sub.drain(), vec!["hit", "die"]);
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn test_late_subscriber_misses_earlier_events() {
        let mut channel = EventChannel::new();
        channel.publish(1u8);
        let sub = channel.subscribe();
        channel.publish(2u8);
        assert_eq!(sub.drain(), vec![2]);
    }

    #[test]
    fn test_dropped_subscription_is_pruned() {
        let mut channel = EventChannel::new();
        let kept = channel.subscribe();
        {
            let _gone = channel.subscribe();
        }
        channel.publish(1u8);
        assert_eq!(channel.subscriber_count(), 1);
        assert_eq!(kept.drain(), vec![1]);
    }
}
