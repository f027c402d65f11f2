//! Core → presentation notifications.
//!
//! The engine never calls into the presentation layer. It pushes events into
//! a queue that the embedding loop drains after every command or tick and
//! renders however it likes.

use serde::{Deserialize, Serialize};

use crate::core::CellId;

/// A notification from the engine to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A flip was accepted and its animation started.
    FlipRequested { cell: CellId },

    /// A card finished flipping (animated or forced) and now shows
    /// `face_up`.
    FlipCompleted { cell: CellId, face_up: bool },

    /// Counters changed; redraw the score display.
    CountersUpdated {
        total_pairs: u32,
        found_pairs: u32,
        turn_count: u32,
    },

    /// All pairs were found. Emitted exactly once per game.
    GameCompleted { turn_count: u32, elapsed_secs: f32 },
}

/// FIFO queue of pending events.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::FlipRequested {
            cell: CellId::new(0),
        });
        queue.push(GameEvent::FlipCompleted {
            cell: CellId::new(0),
            face_up: true,
        });

        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_events_keep_order() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::FlipRequested {
            cell: CellId::new(3),
        });
        queue.push(GameEvent::CountersUpdated {
            total_pairs: 2,
            found_pairs: 1,
            turn_count: 4,
        });

        let drained = queue.drain();
        assert_eq!(
            drained[0],
            GameEvent::FlipRequested {
                cell: CellId::new(3)
            }
        );
        assert!(matches!(drained[1], GameEvent::CountersUpdated { .. }));
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::GameCompleted {
            turn_count: 7,
            elapsed_secs: 12.5,
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
