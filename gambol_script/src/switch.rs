//! Pow Switches
//!
//! A colored switch block the player stomps to trigger something: the classic
//! use is making a row of bonus blocks appear. The switch arms once, swaps to
//! its pressed image, and runs whatever action the level script bound to it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::event::EventBus;
use crate::host::{Host, HostError, Massivity, Point, SpriteId};

/// Available switch block colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SwitchColor {
    #[default]
    Blue,
    Red,
    Green,
}

impl fmt::Display for SwitchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchColor::Blue => write!(f, "blue"),
            SwitchColor::Red => write!(f, "red"),
            SwitchColor::Green => write!(f, "green"),
        }
    }
}

/// Construction options for [`Switch::create`].
///
/// With `sprite` set the switch adopts an existing level object (placed by the
/// editor) instead of spawning one; `position` then optionally moves it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchConfig {
    pub color: SwitchColor,
    pub position: Option<Point>,
    pub sprite: Option<SpriteId>,
}

/// Action run when the switch is stomped.
pub type SwitchAction = Box<dyn FnMut(&mut dyn Host)>;

struct SwitchState {
    sprite: SpriteId,
    color: SwitchColor,
    activated: bool,
    action: Option<SwitchAction>,
}

/// A one-shot stompable switch.
#[derive(Clone)]
pub struct Switch {
    state: Rc<RefCell<SwitchState>>,
}

impl Switch {
    /// Build the switch and register its touch handler on `events`.
    ///
    /// The handler fires when the player lands on the switch while falling;
    /// touches by other objects, a rising player, or a second stomp are ignored.
    pub fn create(host: &mut dyn Host, events: &mut EventBus, config: SwitchConfig) -> Result<Self, HostError> {
        let sprite = match config.sprite {
            Some(id) => {
                if let Some(pos) = config.position {
                    host.set_start_pos(id, pos)?;
                }
                id
            },
            None => {
                let id = host.create_sprite(&format!("ground/underground/pow/{}.png", config.color))?;
                host.set_massivity(id, Massivity::Massive)?;
                host.set_start_pos(id, config.position.unwrap_or_default())?;
                host.show(id)?;
                id
            },
        };

        let state = Rc::new(RefCell::new(SwitchState {
            sprite,
            color: config.color,
            activated: false,
            action: None,
        }));

        let on_touch = Rc::clone(&state);
        events.on_touch(sprite, move |host, evt| {
            if on_touch.borrow().activated {
                return;
            }
            let Some(other) = evt.other else {
                return;
            };
            if !host.is_player(other) {
                return;
            }
            // only a stomp counts: the player must be moving downward
            if !host.velocity(other).is_ok_and(|v| v.y > 0.0) {
                return;
            }

            let (sprite, color, mut action) = {
                let mut state = on_touch.borrow_mut();
                state.activated = true;
                (state.sprite, state.color, state.action.take())
            };
            let pressed = format!("ground/underground/pow/{color}_active.png");
            if let Err(err) = host.set_image(sprite, &pressed) {
                warn!("pow switch {sprite}: image swap failed: {err}");
            }
            info!("pow switch {sprite} ({color}) activated");
            match action.as_mut() {
                Some(run) => run(host),
                None => debug!("pow switch {sprite} activated with no action bound"),
            }
        });

        Ok(Self { state })
    }

    /// Bind (or replace) the action run on activation.
    pub fn on_activate<F>(&self, action: F)
    where
        F: FnMut(&mut dyn Host) + 'static,
    {
        let mut state = self.state.borrow_mut();
        if state.activated {
            debug!("pow switch {}: binding action after activation has no effect", state.sprite);
        }
        state.action = Some(Box::new(action));
    }

    pub fn sprite(&self) -> SpriteId {
        self.state.borrow().sprite
    }

    pub fn color(&self) -> SwitchColor {
        self.state.borrow().color
    }

    pub fn activated(&self) -> bool {
        self.state.borrow().activated
    }
}
