//! Host Engine Seam
//!
//! Everything the scripting helpers know about the native engine goes through the
//! [`Host`] trait: spawning level objects, moving and showing them, collision
//! classification, and a handful of player queries. The engine side implements it
//! once; helpers and tests only ever hold a `&mut dyn Host`.
//!
//! Coordinates follow the engine convention: the origin is the top-left corner of
//! the level and +y points down, so a falling object has a positive y velocity.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable UID the engine assigns to every level object.
///
/// Used both to address host calls and as the key for per-object save-file state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position in level coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An object's bounding rectangle in level coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Collision classification of a sprite.
///
/// Opaque to this layer beyond being set and read; the engine owns what each
/// variant actually means for collision resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Massivity {
    /// Solid from every side.
    #[default]
    Massive,
    /// No collision at all.
    Passive,
    /// Solid from above only (platforms).
    HalfMassive,
    /// Drawn in front, no collision.
    FrontPassive,
    /// The player can climb it.
    Climbable,
}

/// Failure reported by the engine for a host call.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("unknown sprite id {0}")]
    UnknownSprite(SpriteId),
    #[error("engine error: {0}")]
    Backend(String),
}

/// The native engine as seen by the scripting helpers.
///
/// Spawning hands back the engine-assigned [`SpriteId`]; every other call takes
/// one. `set_start_pos` establishes where an object belongs (and moves it there),
/// while `warp` moves only the current position, leaving the start position
/// untouched. The pair is what makes off-screen parking reversible.
pub trait Host {
    /// Create a sprite from an image path (relative to the pixmaps directory).
    /// The new sprite starts hidden at the origin.
    fn create_sprite(&mut self, image: &str) -> Result<SpriteId, HostError>;
    /// Create an invisible level-exit object.
    fn create_level_exit(&mut self) -> Result<SpriteId, HostError>;
    /// Create a text box holding `text`. Starts hidden.
    fn create_text_box(&mut self, text: &str) -> Result<SpriteId, HostError>;

    fn show(&mut self, id: SpriteId) -> Result<(), HostError>;
    fn hide(&mut self, id: SpriteId) -> Result<(), HostError>;

    /// Set the object's start position and move it there.
    fn set_start_pos(&mut self, id: SpriteId, pos: Point) -> Result<(), HostError>;
    /// The object's current start position.
    fn start_pos(&self, id: SpriteId) -> Result<Point, HostError>;
    /// Move the object's current position without touching its start position.
    fn warp(&mut self, id: SpriteId, to: Point) -> Result<(), HostError>;
    /// Current bounding rectangle.
    fn rect(&self, id: SpriteId) -> Result<Rect, HostError>;

    fn set_massivity(&mut self, id: SpriteId, massivity: Massivity) -> Result<(), HostError>;
    fn massivity(&self, id: SpriteId) -> Result<Massivity, HostError>;

    /// Swap the sprite's image.
    fn set_image(&mut self, id: SpriteId, image: &str) -> Result<(), HostError>;
    /// Replace a text box's text.
    fn set_text(&mut self, id: SpriteId, text: &str) -> Result<(), HostError>;
    /// Display a text box modally until the player dismisses it.
    fn activate_text_box(&mut self, id: SpriteId) -> Result<(), HostError>;

    /// Whether `id` is the player object.
    fn is_player(&self, id: SpriteId) -> bool;
    /// The player's current position.
    fn player_pos(&self) -> Point;
    /// Current velocity of an object (`+y` is downward).
    fn velocity(&self, id: SpriteId) -> Result<Point, HostError>;

    /// Play a sound effect by file name. Missing sounds are the engine's problem;
    /// playback failures are not reported back to scripts.
    fn play_sound(&mut self, name: &str);
}
