//! Level Runtime
//!
//! One [`Runtime`] per loaded level holds everything the level's scripts
//! register: event handlers, repeating timers, and save/load hooks. The host
//! embedding creates it at level load, feeds it events and clock ticks while the
//! level runs, and drops it wholesale at unload. There is no global script state
//! anywhere else.

use log::info;

use crate::event::{EventBus, SpriteEvent};
use crate::host::Host;
use crate::storage::{SaveHooks, SaveStore};
use crate::timer::Timers;

/// Per-level registration object and pump.
#[derive(Default)]
pub struct Runtime {
    pub events: EventBus,
    pub hooks: SaveHooks,
    pub timers: Timers,
}

impl Runtime {
    pub fn new() -> Self {
        info!("fresh script runtime created");
        Self::default()
    }

    /// Deliver a host-raised object event to the handlers registered for it.
    pub fn deliver(&mut self, host: &mut dyn Host, event: &SpriteEvent) -> usize {
        self.events.dispatch(host, event)
    }

    /// Pump timers due at `now_ms` (milliseconds since level start).
    pub fn tick(&mut self, host: &mut dyn Host, now_ms: u64) -> usize {
        self.timers.tick(host, now_ms)
    }

    /// Collect script state into `store` while the engine writes a save file.
    pub fn save(&mut self, store: &mut SaveStore) {
        self.hooks.run_save(store);
    }

    /// Re-apply script state after the engine restores a save file.
    pub fn load(&mut self, host: &mut dyn Host, store: &SaveStore) {
        self.hooks.run_load(host, store);
    }
}
