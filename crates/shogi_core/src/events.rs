//! Move notifications for listeners outside the rules engine.

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::board::Board;
use crate::types::{GameOutcome, Move, Player};

/// Sent once per successful `RulesEngine::make_move`.
#[derive(Debug, Clone)]
pub struct MoveEvent {
    pub mv: Move,
    pub mover: Player,
    /// Board after the move.
    pub board: Board,
    /// Outcome after the move.
    pub outcome: GameOutcome,
}

/// Fan-out of `MoveEvent`s to any number of channel subscribers.
#[derive(Debug, Default, Clone)]
pub struct EventBus {
    senders: Vec<Sender<MoveEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<MoveEvent> {
        let (tx, rx) = unbounded();
        self.senders.push(tx);
        rx
    }

    /// Delivers `event` to every live subscriber and forgets the ones whose
    /// receiver is gone.
    pub fn publish(&mut self, event: MoveEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
