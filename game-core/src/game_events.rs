use game_types::{PlayerId, RejectReason, Round};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PlayerAdded {
        player_id: PlayerId,
        name: String,
    },
    PlayerRemoved {
        player_id: PlayerId,
    },
    GameStarted {
        player_count: usize,
    },
    RoundStarted {
        number: u32,
    },
    EntryAdjusted {
        player_id: PlayerId,
        bid: u32,
        actual_tricks: u32,
    },
    RoundCommitted {
        round: Round,
    },
    GameReset,
    ActionRejected {
        action: &'static str,
        reason: RejectReason,
    },
}

impl GameEvent {
    pub fn is_rejection(&self) -> bool {
        matches!(self, GameEvent::ActionRejected { .. })
    }
}

/// Event handler trait for processing game events
pub trait GameEventHandler {
    fn handle_event(&mut self, event: GameEvent);
}

/// Synchronous fan-out of game events to every registered handler
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TestHandler {
        events: Rc<RefCell<Vec<GameEvent>>>,
    }

    impl GameEventHandler for TestHandler {
        fn handle_event(&mut self, event: GameEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn test_event_bus_fans_out_to_every_handler() {
        let mut bus = GameEventBus::new();
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        bus.add_handler(Box::new(TestHandler { events: first.clone() }));
        bus.add_handler(Box::new(TestHandler { events: second.clone() }));

        bus.publish(GameEvent::RoundStarted { number: 1 });
        bus.publish(GameEvent::GameReset);

        assert_eq!(first.borrow().len(), 2);
        assert_eq!(*first.borrow(), *second.borrow());
        assert_eq!(first.borrow()[0], GameEvent::RoundStarted { number: 1 });
    }

    #[test]
    fn test_publish_without_handlers_is_fine() {
        let mut bus = GameEventBus::default();
        bus.publish(GameEvent::GameReset);
    }

    #[test]
    fn test_is_rejection() {
        let rejected = GameEvent::ActionRejected {
            action: "start_game",
            reason: RejectReason::NotEnoughPlayers { required: 2, present: 1 },
        };
        assert!(rejected.is_rejection());
        assert!(!GameEvent::GameReset.is_rejection());
    }
}
