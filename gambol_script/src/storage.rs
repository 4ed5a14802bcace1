//! Save-File Store and Hooks
//!
//! The engine owns the save-file format; scripts get one nested JSON object per
//! level to stash whatever little state they need (an activation flag, a counter)
//! keyed by path, conventionally `["_ssl", "<feature>", "<uid>"]`. [`SaveHooks`]
//! holds the callbacks the engine runs while writing or restoring a save file.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::host::Host;

/// Nested string-keyed mapping persisted inside the host's save file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveStore {
    root: Map<String, Value>,
}

impl SaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Write `value` at a key path, creating intermediate objects as needed.
    /// A non-object intermediate already sitting on the path is overwritten.
    pub fn set_path(&mut self, path: &[&str], value: Value) {
        let Some((leaf, parents)) = path.split_last() else {
            return;
        };
        let mut cursor = &mut self.root;
        for seg in parents {
            let slot = cursor
                .entry((*seg).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            cursor = slot.as_object_mut().expect("slot was just made an object");
        }
        cursor.insert((*leaf).to_string(), value);
    }

    /// Read the value at a key path, if the whole path exists.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (leaf, parents) = path.split_last()?;
        let mut cursor = &self.root;
        for seg in parents {
            cursor = cursor.get(*seg)?.as_object()?;
        }
        cursor.get(*leaf)
    }

    /// Boolean read with a `false` default for missing or non-boolean values.
    pub fn bool_at(&self, path: &[&str]) -> bool {
        self.get_path(path).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Hand the store over to the engine's save-file machinery.
    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    /// Rebuild a store from a save-file value. Anything but a JSON object means
    /// a damaged or foreign save entry; scripts then start from an empty store.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            other => {
                warn!("script save data is not an object (found {other}); starting empty");
                Self::default()
            },
        }
    }
}

/// Callback run while the engine writes a save file.
pub type SaveHook = Box<dyn FnMut(&mut SaveStore)>;
/// Callback run after the engine restores a save file.
pub type LoadHook = Box<dyn FnMut(&mut dyn Host, &SaveStore)>;

/// Ordered save/load callbacks for one level.
#[derive(Default)]
pub struct SaveHooks {
    save: Vec<SaveHook>,
    load: Vec<LoadHook>,
}

impl SaveHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook that contributes state to the save store.
    pub fn on_save<F>(&mut self, hook: F)
    where
        F: FnMut(&mut SaveStore) + 'static,
    {
        self.save.push(Box::new(hook));
    }

    /// Register a hook that re-applies saved state after a load.
    pub fn on_load<F>(&mut self, hook: F)
    where
        F: FnMut(&mut dyn Host, &SaveStore) + 'static,
    {
        self.load.push(Box::new(hook));
    }

    pub fn save_hook_count(&self) -> usize {
        self.save.len()
    }

    pub fn load_hook_count(&self) -> usize {
        self.load.len()
    }

    /// Run all save hooks in registration order.
    pub fn run_save(&mut self, store: &mut SaveStore) {
        debug!("running {} save hook(s)", self.save.len());
        for hook in &mut self.save {
            hook(store);
        }
    }

    /// Run all load hooks in registration order.
    pub fn run_load(&mut self, host: &mut dyn Host, store: &SaveStore) {
        debug!("running {} load hook(s)", self.load.len());
        for hook in &mut self.load {
            hook(host, store);
        }
    }
}
