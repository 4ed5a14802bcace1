//! Scriptable in-memory [`Host`] used by the unit tests.
//!
//! Spawns are handed ids in allocation order starting at 1; id 0 is the player.
//! Every mutating call is appended to `calls` in a readable one-line form so
//! tests can assert on ordering as well as final state.

use std::collections::HashMap;

use crate::host::{Host, HostError, Massivity, Point, Rect, SpriteId};

pub const PLAYER_ID: SpriteId = SpriteId(0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockKind {
    Player,
    Sprite,
    LevelExit,
    TextBox,
}

#[derive(Debug, Clone)]
pub struct MockObject {
    pub kind: MockKind,
    pub image: Option<String>,
    pub text: Option<String>,
    pub visible: bool,
    pub start: Point,
    pub pos: Point,
    pub size: (f32, f32),
    pub vel: Point,
    pub massivity: Massivity,
}

impl MockObject {
    fn new(kind: MockKind) -> Self {
        Self {
            kind,
            image: None,
            text: None,
            visible: false,
            start: Point::default(),
            pos: Point::default(),
            size: (40.0, 40.0),
            vel: Point::default(),
            massivity: Massivity::default(),
        }
    }
}

#[derive(Debug)]
pub struct MockHost {
    next_id: u32,
    pub objects: HashMap<SpriteId, MockObject>,
    pub calls: Vec<String>,
    pub sounds: Vec<String>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    pub fn new() -> Self {
        let mut objects = HashMap::new();
        objects.insert(PLAYER_ID, MockObject::new(MockKind::Player));
        Self {
            next_id: 1,
            objects,
            calls: Vec::new(),
            sounds: Vec::new(),
        }
    }

    fn alloc(&mut self, kind: MockKind) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, MockObject::new(kind));
        id
    }

    fn get(&self, id: SpriteId) -> Result<&MockObject, HostError> {
        self.objects.get(&id).ok_or(HostError::UnknownSprite(id))
    }

    fn get_mut(&mut self, id: SpriteId) -> Result<&mut MockObject, HostError> {
        self.objects.get_mut(&id).ok_or(HostError::UnknownSprite(id))
    }

    /// Panicking accessor for assertions.
    pub fn object(&self, id: SpriteId) -> &MockObject {
        &self.objects[&id]
    }

    pub fn set_player(&mut self, pos: Point, vel: Point) {
        let player = self.objects.get_mut(&PLAYER_ID).unwrap();
        player.pos = pos;
        player.vel = vel;
    }
}

impl Host for MockHost {
    fn create_sprite(&mut self, image: &str) -> Result<SpriteId, HostError> {
        let id = self.alloc(MockKind::Sprite);
        self.objects.get_mut(&id).unwrap().image = Some(image.to_string());
        self.calls.push(format!("create_sprite {id} {image}"));
        Ok(id)
    }

    fn create_level_exit(&mut self) -> Result<SpriteId, HostError> {
        let id = self.alloc(MockKind::LevelExit);
        self.calls.push(format!("create_level_exit {id}"));
        Ok(id)
    }

    fn create_text_box(&mut self, text: &str) -> Result<SpriteId, HostError> {
        let id = self.alloc(MockKind::TextBox);
        self.objects.get_mut(&id).unwrap().text = Some(text.to_string());
        self.calls.push(format!("create_text_box {id}"));
        Ok(id)
    }

    fn show(&mut self, id: SpriteId) -> Result<(), HostError> {
        self.calls.push(format!("show {id}"));
        self.get_mut(id)?.visible = true;
        Ok(())
    }

    fn hide(&mut self, id: SpriteId) -> Result<(), HostError> {
        self.calls.push(format!("hide {id}"));
        self.get_mut(id)?.visible = false;
        Ok(())
    }

    fn set_start_pos(&mut self, id: SpriteId, pos: Point) -> Result<(), HostError> {
        self.calls.push(format!("set_start_pos {id} ({}, {})", pos.x, pos.y));
        let obj = self.get_mut(id)?;
        obj.start = pos;
        obj.pos = pos;
        Ok(())
    }

    fn start_pos(&self, id: SpriteId) -> Result<Point, HostError> {
        Ok(self.get(id)?.start)
    }

    fn warp(&mut self, id: SpriteId, to: Point) -> Result<(), HostError> {
        self.calls.push(format!("warp {id} ({}, {})", to.x, to.y));
        self.get_mut(id)?.pos = to;
        Ok(())
    }

    fn rect(&self, id: SpriteId) -> Result<Rect, HostError> {
        let obj = self.get(id)?;
        Ok(Rect {
            x: obj.pos.x,
            y: obj.pos.y,
            w: obj.size.0,
            h: obj.size.1,
        })
    }

    fn set_massivity(&mut self, id: SpriteId, massivity: Massivity) -> Result<(), HostError> {
        self.calls.push(format!("set_massivity {id} {massivity:?}"));
        self.get_mut(id)?.massivity = massivity;
        Ok(())
    }

    fn massivity(&self, id: SpriteId) -> Result<Massivity, HostError> {
        Ok(self.get(id)?.massivity)
    }

    fn set_image(&mut self, id: SpriteId, image: &str) -> Result<(), HostError> {
        self.calls.push(format!("set_image {id} {image}"));
        self.get_mut(id)?.image = Some(image.to_string());
        Ok(())
    }

    fn set_text(&mut self, id: SpriteId, text: &str) -> Result<(), HostError> {
        self.calls.push(format!("set_text {id}"));
        self.get_mut(id)?.text = Some(text.to_string());
        Ok(())
    }

    fn activate_text_box(&mut self, id: SpriteId) -> Result<(), HostError> {
        self.calls.push(format!("activate_text_box {id}"));
        self.get(id)?;
        Ok(())
    }

    fn is_player(&self, id: SpriteId) -> bool {
        self.objects.get(&id).is_some_and(|o| o.kind == MockKind::Player)
    }

    fn player_pos(&self) -> Point {
        self.objects[&PLAYER_ID].pos
    }

    fn velocity(&self, id: SpriteId) -> Result<Point, HostError> {
        Ok(self.get(id)?.vel)
    }

    fn play_sound(&mut self, name: &str) {
        self.calls.push(format!("play_sound {name}"));
        self.sounds.push(name.to_string());
    }
}
