//! Sprite Event Bus
//!
//! The engine raises two kinds of object events that scripts care about:
//! activation (a box hit from below, a door used) and touch (a collision with
//! another object). Handlers are registered per `(sprite, kind)` pair and run in
//! registration order when the host delivers a matching [`SpriteEvent`].
//!
//! Handlers get the host plus the event payload and nothing else; the bus itself
//! cannot be re-entered from inside a handler, so registration happens up front
//! during level setup.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::host::{Host, SpriteId};

/// The host-triggered event hooks scripts can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The object was activated (e.g. a box hit from below).
    Activate,
    /// Another object collided with this one.
    Touch,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Activate => write!(f, "activate"),
            EventKind::Touch => write!(f, "touch"),
        }
    }
}

/// One delivered event. `other` is the colliding object for touch events and
/// `None` for activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteEvent {
    pub kind: EventKind,
    pub sprite: SpriteId,
    pub other: Option<SpriteId>,
}

impl SpriteEvent {
    pub fn activate(sprite: SpriteId) -> Self {
        Self { kind: EventKind::Activate, sprite, other: None }
    }

    pub fn touch(sprite: SpriteId, other: SpriteId) -> Self {
        Self { kind: EventKind::Touch, sprite, other: Some(other) }
    }
}

/// Callback attached to a `(sprite, kind)` pair.
pub type EventHandler = Box<dyn FnMut(&mut dyn Host, &SpriteEvent)>;

/// Ordered handler lists keyed by sprite and event kind.
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<(SpriteId, EventKind), Vec<EventHandler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler for `(sprite, kind)`; earlier registrations run first.
    pub fn register<F>(&mut self, sprite: SpriteId, kind: EventKind, handler: F)
    where
        F: FnMut(&mut dyn Host, &SpriteEvent) + 'static,
    {
        debug!("registering {kind} handler for sprite {sprite}");
        self.handlers.entry((sprite, kind)).or_default().push(Box::new(handler));
    }

    /// Shorthand for [`register`](Self::register) with [`EventKind::Activate`].
    pub fn on_activate<F>(&mut self, sprite: SpriteId, handler: F)
    where
        F: FnMut(&mut dyn Host, &SpriteEvent) + 'static,
    {
        self.register(sprite, EventKind::Activate, handler);
    }

    /// Shorthand for [`register`](Self::register) with [`EventKind::Touch`].
    pub fn on_touch<F>(&mut self, sprite: SpriteId, handler: F)
    where
        F: FnMut(&mut dyn Host, &SpriteEvent) + 'static,
    {
        self.register(sprite, EventKind::Touch, handler);
    }

    pub fn handler_count(&self, sprite: SpriteId, kind: EventKind) -> usize {
        self.handlers.get(&(sprite, kind)).map_or(0, Vec::len)
    }

    /// Run every handler registered for the event's `(sprite, kind)` key.
    ///
    /// Returns how many handlers ran; a key with no registrations is a no-op.
    pub fn dispatch(&mut self, host: &mut dyn Host, event: &SpriteEvent) -> usize {
        let Some(handlers) = self.handlers.get_mut(&(event.sprite, event.kind)) else {
            return 0;
        };
        debug!("dispatching {} for sprite {} to {} handler(s)", event.kind, event.sprite, handlers.len());
        for handler in handlers.iter_mut() {
            handler(host, event);
        }
        handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::mock::MockHost;

    #[test]
    fn dispatch_without_handlers_is_noop() {
        let mut host = MockHost::new();
        let mut bus = EventBus::new();
        let ran = bus.dispatch(&mut host, &SpriteEvent::activate(SpriteId(9)));
        assert_eq!(ran, 0);
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let mut host = MockHost::new();
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let seen = Rc::clone(&seen);
            bus.on_activate(SpriteId(3), move |_, _| seen.borrow_mut().push(label));
        }

        let ran = bus.dispatch(&mut host, &SpriteEvent::activate(SpriteId(3)));
        assert_eq!(ran, 3);
        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn handlers_are_keyed_by_sprite_and_kind() {
        let mut host = MockHost::new();
        let mut bus = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&hits);
        bus.on_activate(SpriteId(3), move |_, _| *counter.borrow_mut() += 1);

        bus.dispatch(&mut host, &SpriteEvent::touch(SpriteId(3), SpriteId(0)));
        bus.dispatch(&mut host, &SpriteEvent::activate(SpriteId(4)));
        assert_eq!(*hits.borrow(), 0);

        bus.dispatch(&mut host, &SpriteEvent::activate(SpriteId(3)));
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn touch_event_carries_other_object() {
        let mut host = MockHost::new();
        let mut bus = EventBus::new();
        let toucher = Rc::new(RefCell::new(None));

        let toucher_slot = Rc::clone(&toucher);
        bus.on_touch(SpriteId(5), move |_, evt| {
            *toucher_slot.borrow_mut() = evt.other;
        });

        bus.dispatch(&mut host, &SpriteEvent::touch(SpriteId(5), SpriteId(12)));
        assert_eq!(*toucher.borrow(), Some(SpriteId(12)));
    }

    #[test]
    fn handlers_can_call_into_the_host() {
        let mut host = MockHost::new();
        let id = host.create_sprite("ground/underground/pow/blue.png").unwrap();
        let mut bus = EventBus::new();

        bus.on_activate(id, move |host, evt| {
            host.play_sound("stomp_4.ogg");
            let _ = host.show(evt.sprite);
        });

        bus.dispatch(&mut host, &SpriteEvent::activate(id));
        assert_eq!(host.sounds, vec!["stomp_4.ogg"]);
        assert!(host.object(id).visible);
    }
}
