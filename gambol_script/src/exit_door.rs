//! Exit Doors
//!
//! A decorative wooden door with a working level exit tucked into its doorway.
//! The door sprite is passive scenery; the exit object does the actual work.

use crate::host::{Host, HostError, Massivity, Point, SpriteId};

pub const DOOR_IMAGE: &str = "game/level/door_wood_1.png";

/// Where the exit's activation spot sits relative to the door's top-left corner.
pub const EXIT_OFFSET: Point = Point::new(25.0, 60.0);

/// A placed door plus its level exit.
#[derive(Debug, Clone, Copy)]
pub struct ExitDoor {
    door: SpriteId,
    exit: SpriteId,
}

impl ExitDoor {
    /// Spawn and show the door sprite and its level exit at `at`.
    pub fn place(host: &mut dyn Host, at: Point) -> Result<Self, HostError> {
        let door = host.create_sprite(DOOR_IMAGE)?;
        host.set_massivity(door, Massivity::Passive)?;
        host.set_start_pos(door, at)?;
        host.show(door)?;

        let exit = host.create_level_exit()?;
        host.set_start_pos(exit, Point::new(at.x + EXIT_OFFSET.x, at.y + EXIT_OFFSET.y))?;
        host.show(exit)?;

        Ok(Self { door, exit })
    }

    pub fn door(&self) -> SpriteId {
        self.door
    }

    pub fn level_exit(&self) -> SpriteId {
        self.exit
    }
}
