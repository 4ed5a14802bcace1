//! Off-screen parking for sprites.
//!
//! The engine has no notion of a temporarily-removed level object, so helpers
//! fake one: park the sprite far outside the visible level and remember where it
//! belongs. [`Enableable`] wraps a [`SpriteId`] with that memory instead of
//! patching behavior onto the engine's sprite type itself.

use log::debug;

use crate::host::{Host, HostError, Massivity, Point, SpriteId};

/// Where disabled sprites wait, safely outside any playable level area.
pub const PARK_POS: Point = Point::new(-100.0, 100.0);

/// A sprite handle that can be parked off-screen and later restored.
#[derive(Debug, Clone)]
pub struct Enableable {
    sprite: SpriteId,
    parked_from: Option<Point>,
}

impl Enableable {
    pub fn new(sprite: SpriteId) -> Self {
        Self { sprite, parked_from: None }
    }

    pub fn sprite(&self) -> SpriteId {
        self.sprite
    }

    /// Whether the sprite is currently parked.
    pub fn is_disabled(&self) -> bool {
        self.parked_from.is_some()
    }

    /// Park the sprite at [`PARK_POS`], remembering its start position.
    pub fn disable(&mut self, host: &mut dyn Host) -> Result<(), HostError> {
        self.parked_from = Some(host.start_pos(self.sprite)?);
        debug!("parking sprite {} at ({}, {})", self.sprite, PARK_POS.x, PARK_POS.y);
        host.warp(self.sprite, PARK_POS)
    }

    /// Bring the sprite back to its remembered start position, optionally
    /// changing its massivity in the same step.
    ///
    /// Without a prior [`disable`](Self::disable) there is nothing to restore,
    /// so only the massivity override (if any) is applied.
    pub fn enable(&mut self, host: &mut dyn Host, massivity: Option<Massivity>) -> Result<(), HostError> {
        if let Some(pos) = self.parked_from.take() {
            debug!("restoring sprite {} to ({}, {})", self.sprite, pos.x, pos.y);
            host.set_start_pos(self.sprite, pos)?;
        }
        if let Some(massivity) = massivity {
            host.set_massivity(self.sprite, massivity)?;
        }
        Ok(())
    }
}
