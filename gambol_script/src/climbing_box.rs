//! Climbing Boxes
//!
//! A box that grows a climbable plant out of its top when the player hits it
//! from below. The plant tiles are spawned and stacked at level load, then
//! parked off-screen; activation reveals them bottom-to-top, one tile every
//! 250 ms, with the passive head tile last. Whether the plant has sprouted is
//! persisted through the save-file hooks so a reloaded level skips the growth
//! animation and shows the finished plant.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use serde_json::json;

use crate::enable::Enableable;
use crate::host::{Host, HostError, Massivity, Point, SpriteId};
use crate::runtime::Runtime;
use crate::timer::{TimerOutcome, TimerTrigger};

pub const DEFAULT_MIDDLE_IMAGE: &str = "ground/green_1/kplant.png";
pub const DEFAULT_TOP_IMAGE: &str = "ground/green_1/kplant_head.png";
pub const REVEAL_SOUND: &str = "stomp_4.ogg";
pub const REVEAL_INTERVAL_MS: u64 = 250;

const SAVE_ROOT: &str = "_ssl";
const SAVE_FEATURE: &str = "climbingboxes";

/// Construction options for [`ClimbingBox::build`]. The tile count is
/// required; the tile images default to the green kplant set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimbingBoxConfig {
    pub count: u32,
    pub middle_image: String,
    pub top_image: String,
}

impl ClimbingBoxConfig {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            middle_image: DEFAULT_MIDDLE_IMAGE.to_string(),
            top_image: DEFAULT_TOP_IMAGE.to_string(),
        }
    }
}

struct BoxState {
    box_id: SpriteId,
    /// Plant tiles bottom-to-top; the passive head tile is last.
    tiles: Vec<Enableable>,
    next_reveal: usize,
    activated: bool,
}

/// A box with a hidden climbing plant stacked above it.
#[derive(Clone)]
pub struct ClimbingBox {
    state: Rc<RefCell<BoxState>>,
}

impl ClimbingBox {
    /// Spawn the plant tiles above `box_id` and park them off-screen.
    ///
    /// Each tile is horizontally centred on the box; middles are climbable,
    /// the head is passive scenery.
    pub fn build(host: &mut dyn Host, box_id: SpriteId, config: &ClimbingBoxConfig) -> Result<Self, HostError> {
        let bounds = host.rect(box_id)?;
        let mut tiles = Vec::with_capacity(config.count as usize + 1);
        let mut stack_top = bounds.y;

        for _ in 0..config.count {
            let id = host.create_sprite(&config.middle_image)?;
            let tile = host.rect(id)?;
            stack_top -= tile.h;
            host.set_massivity(id, Massivity::Climbable)?;
            host.set_start_pos(id, Point::new(bounds.x + (bounds.w - tile.w) / 2.0, stack_top))?;
            host.show(id)?;
            tiles.push(Enableable::new(id));
        }

        let head = host.create_sprite(&config.top_image)?;
        let tile = host.rect(head)?;
        stack_top -= tile.h;
        host.set_massivity(head, Massivity::Passive)?;
        host.set_start_pos(head, Point::new(bounds.x + (bounds.w - tile.w) / 2.0, stack_top))?;
        host.show(head)?;
        tiles.push(Enableable::new(head));

        let mut state = BoxState {
            box_id,
            tiles,
            next_reveal: 0,
            activated: false,
        };
        for tile in &mut state.tiles {
            tile.disable(host)?;
        }
        info!("built climbing box {box_id} with {} plant tile(s)", state.tiles.len());

        Ok(Self {
            state: Rc::new(RefCell::new(state)),
        })
    }

    /// Wire the box into a level runtime: the activation handler, the reveal
    /// timer, and the save/load hooks.
    ///
    /// The reveal timer is registered dormant and armed from the activation
    /// handler through its trigger, so its first run comes one interval after
    /// the box is hit and a never-hit box costs the pump nothing.
    pub fn attach(&self, runtime: &mut Runtime) {
        let box_id = self.state.borrow().box_id;
        let sprout = TimerTrigger::new();

        let on_hit = Rc::clone(&self.state);
        let starter = sprout.clone();
        runtime.events.on_activate(box_id, move |host, _| {
            let mut state = on_hit.borrow_mut();
            if state.activated {
                debug!("climbing box {box_id} hit again; plant already growing");
                return;
            }
            state.activated = true;
            info!("climbing box {box_id} activated; growing plant");
            host.play_sound(REVEAL_SOUND);
            starter.fire();
        });

        let ticker = Rc::clone(&self.state);
        runtime.timers.every_when(&sprout, REVEAL_INTERVAL_MS, move |host| {
            let mut state = ticker.borrow_mut();
            if state.next_reveal >= state.tiles.len() {
                return TimerOutcome::Stop;
            }
            let idx = state.next_reveal;
            state.next_reveal += 1;
            let done = state.next_reveal >= state.tiles.len();
            let tile = &mut state.tiles[idx];
            debug!("climbing box {box_id}: revealing tile {} ({})", idx, tile.sprite());
            if let Err(err) = tile.enable(host, None) {
                warn!("climbing box {box_id}: reveal of sprite {} failed: {err}", tile.sprite());
            }
            if done { TimerOutcome::Stop } else { TimerOutcome::Continue }
        });

        let saver = Rc::clone(&self.state);
        runtime.hooks.on_save(move |store| {
            let state = saver.borrow();
            store.set_path(&[SAVE_ROOT, SAVE_FEATURE, &state.box_id.to_string()], json!(state.activated));
        });

        let loader = Rc::clone(&self.state);
        runtime.hooks.on_load(move |host, store| {
            let mut state = loader.borrow_mut();
            if !store.bool_at(&[SAVE_ROOT, SAVE_FEATURE, &state.box_id.to_string()]) {
                return;
            }
            info!("climbing box {box_id}: restoring sprouted plant from save");
            state.activated = true;
            // no regrow animation after a load; the plant is just there
            while state.next_reveal < state.tiles.len() {
                let idx = state.next_reveal;
                state.next_reveal += 1;
                let tile = &mut state.tiles[idx];
                if let Err(err) = tile.enable(host, None) {
                    warn!("climbing box {box_id}: restore of sprite {} failed: {err}", tile.sprite());
                }
            }
        });
    }

    /// Reveal the whole plant at once, outside the usual activation flow.
    /// The box counts as sprouted afterwards, saves included.
    pub fn show_plant(&self, host: &mut dyn Host) -> Result<(), HostError> {
        let mut state = self.state.borrow_mut();
        state.next_reveal = state.tiles.len();
        for tile in &mut state.tiles {
            tile.enable(host, None)?;
        }
        state.activated = true;
        Ok(())
    }

    /// Park the whole plant again and clear the sprouted flag.
    pub fn hide_plant(&self, host: &mut dyn Host) -> Result<(), HostError> {
        let mut state = self.state.borrow_mut();
        state.next_reveal = 0;
        for tile in &mut state.tiles {
            tile.disable(host)?;
        }
        state.activated = false;
        Ok(())
    }

    pub fn box_id(&self) -> SpriteId {
        self.state.borrow().box_id
    }

    pub fn tiles(&self) -> Vec<SpriteId> {
        self.state.borrow().tiles.iter().map(Enableable::sprite).collect()
    }

    pub fn activated(&self) -> bool {
        self.state.borrow().activated
    }

    pub fn revealed_count(&self) -> usize {
        self.state.borrow().next_reveal
    }
}
