//! Message Boxes
//!
//! A reusable text box that stays parked off-screen until a script shows it to
//! the player. Activation is modal: the engine blocks gameplay until the player
//! dismisses the box, then the box goes back to its parking spot.

use crate::enable::PARK_POS;
use crate::host::{Host, HostError, Massivity, Point, SpriteId};

/// How far above the player's position the box appears.
pub const PLAYER_OFFSET_Y: f32 = 50.0;

/// A parked, reusable message box.
#[derive(Debug, Clone, Copy)]
pub struct Message {
    text_box: SpriteId,
}

impl Message {
    /// Create the text box, make it passive, and park it hidden.
    pub fn new(host: &mut dyn Host, text: &str) -> Result<Self, HostError> {
        let text_box = host.create_text_box(text)?;
        host.set_massivity(text_box, Massivity::Passive)?;
        host.hide(text_box)?;
        Ok(Self { text_box })
    }

    pub fn text_box(&self) -> SpriteId {
        self.text_box
    }

    /// Replace the box text for the next activation.
    pub fn set_text(&self, host: &mut dyn Host, text: &str) -> Result<(), HostError> {
        host.set_text(self.text_box, text)
    }

    /// Show the box just above the player, modally, then re-park it.
    pub fn activate(&self, host: &mut dyn Host) -> Result<(), HostError> {
        let player = host.player_pos();
        host.set_start_pos(self.text_box, Point::new(player.x, player.y - PLAYER_OFFSET_Y))?;
        host.activate_text_box(self.text_box)?;
        host.set_massivity(self.text_box, Massivity::Passive)?;
        host.warp(self.text_box, PARK_POS)?;
        Ok(())
    }
}
