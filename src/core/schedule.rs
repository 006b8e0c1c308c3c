// Per-entity scheduled events
//
// Delayed effects (end of a stun window, end of a dash) are queued here with
// the id of the entity that owns them. Every simulation step advances the
// clock and hands back the events whose delay has elapsed, each exactly once.

/// A single pending event
#[derive(Debug, Clone)]
struct ScheduledEvent<K, E> {
    owner: K,
    remaining: f32,
    event: E,
}

/// Scheduled-event list keyed by owning entity
#[derive(Debug)]
pub struct Scheduler<K, E> {
    pending: Vec<ScheduledEvent<K, E>>,
}

impl<K, E> Default for Scheduler<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E> Scheduler<K, E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(16),
        }
    }

    /// Queue `event` to fire after `delay` seconds of simulated time
    pub fn schedule(&mut self, owner: K, delay: f32, event: E) {
        self.pending.push(ScheduledEvent {
            owner,
            remaining: delay.max(0.0),
            event,
        });
    }

    /// Advance the clock and return every event that came due, in the order
    /// they were scheduled
    pub fn advance(&mut self, dt: f32) -> Vec<(K, E)> {
        let mut due = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for mut entry in self.pending.drain(..) {
            entry.remaining -= dt;
            if entry.remaining <= 0.0 {
                due.push((entry.owner, entry.event));
            } else {
                still_pending.push(entry);
            }
        }

        self.pending = still_pending;
        due
    }

    /// Number of events still waiting to fire
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<K: PartialEq, E> Scheduler<K, E> {
    /// Cancel every event owned by `owner` (entity destroyed)
    pub fn cancel_owner(&mut self, owner: &K) -> usize {
        let before = self.pending.len();
        self.pending.retain(|entry| entry.owner != *owner);
        before - self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tick {
        Short,
        Long,
    }

    #[test]
    fn test_event_fires_once_after_delay() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(1u32, 0.5, Tick::Short);

        assert!(scheduler.advance(0.25).is_empty());
        assert_eq!(scheduler.advance(0.25), vec![(1, Tick::Short)]);
        assert!(scheduler.advance(1.0).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_events_come_due_independently() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(1u32, 0.6, Tick::Long);
        scheduler.schedule(2u32, 0.1, Tick::Short);

        assert_eq!(scheduler.advance(0.2), vec![(2, Tick::Short)]);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.advance(0.5), vec![(1, Tick::Long)]);
    }

    #[test]
    fn test_cancel_owner_removes_only_that_owner() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(1u32, 0.5, Tick::Short);
        scheduler.schedule(1u32, 0.9, Tick::Long);
        scheduler.schedule(2u32, 0.5, Tick::Short);

        assert_eq!(scheduler.cancel_owner(&1), 2);
        assert_eq!(scheduler.advance(1.0), vec![(2, Tick::Short)]);
    }

    #[test]
    fn test_negative_delay_fires_next_advance() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0u32, -1.0, Tick::Short);
        assert_eq!(scheduler.advance(0.0).len(), 1);
    }
}
