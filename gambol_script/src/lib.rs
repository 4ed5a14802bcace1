#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

//! Level-scripting helpers for the Gambol platformer engine.
//!
//! The engine exposes its level objects to scripts through the [`Host`] trait;
//! everything in this crate composes those host calls into the conveniences
//! level designers actually reach for: parked sprites that can be re-enabled,
//! exit doors, climbing-plant boxes, stompable pow switches, message boxes, and
//! one-call sprite spawns. A per-level [`Runtime`] carries the event handlers,
//! repeating timers, and save/load hooks the helpers register.

// Core modules
pub mod enable;
pub mod event;
pub mod host;
pub mod runtime;
pub mod storage;
pub mod timer;

// Designer-facing helpers
pub mod climbing_box;
pub mod exit_door;
pub mod immediate_sprite;
pub mod message;
pub mod switch;

#[cfg(test)]
pub(crate) mod mock;

// Re-exports for convenience
pub use climbing_box::{ClimbingBox, ClimbingBoxConfig};
pub use enable::{Enableable, PARK_POS};
pub use event::{EventBus, EventKind, SpriteEvent};
pub use exit_door::ExitDoor;
pub use host::{Host, HostError, Massivity, Point, Rect, SpriteId};
pub use immediate_sprite::{ImmediateSpriteConfig, spawn_immediate};
pub use message::Message;
pub use runtime::Runtime;
pub use storage::{SaveHooks, SaveStore};
pub use switch::{Switch, SwitchColor, SwitchConfig};
pub use timer::{TimerId, TimerOutcome, TimerTrigger, Timers};
