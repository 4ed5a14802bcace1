//! Immediate Sprites
//!
//! Level scripts often just want a sprite that exists, right there, right now.
//! [`spawn_immediate`] collapses the spawn/place/classify/show dance into one
//! call.

use crate::host::{Host, HostError, Massivity, Point, SpriteId};

/// Placement options for [`spawn_immediate`]. The position is required; the
/// massivity defaults to [`Massivity::Massive`] and can be overridden by field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImmediateSpriteConfig {
    pub position: Point,
    pub massivity: Massivity,
}

impl ImmediateSpriteConfig {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            massivity: Massivity::Massive,
        }
    }
}

/// Spawn a sprite that is placed, classified, and visible in one step.
pub fn spawn_immediate(
    host: &mut dyn Host,
    image: &str,
    config: ImmediateSpriteConfig,
) -> Result<SpriteId, HostError> {
    let id = host.create_sprite(image)?;
    host.set_start_pos(id, config.position)?;
    host.set_massivity(id, config.massivity)?;
    host.show(id)?;
    Ok(id)
}
