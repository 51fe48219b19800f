//! Save and restore of the selection state

use crate::error::Result;
use crate::state::SelectionState;
use rustc_hash::FxHashMap;

pub const TEXT_KEY: &str = "text";
pub const FONT_KEY: &str = "font";
pub const WEIGHT_KEY: &str = "weight";
/// Stored as a JSON boolean string
pub const ITALIC_KEY: &str = "italic";

/// Message shown once a save has gone through
pub const SAVE_CONFIRMATION: &str = "Changes saved!";

/// String key/value storage that outlives the page
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Blocking acknowledgement to the user
pub trait Notifier {
    fn notify(&self, message: &str) -> Result<()>;
}

/// In-memory key/value store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flattened copy of [`SelectionState`] as read from storage.
///
/// `None` means the key was absent and the in-memory default stays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub text: Option<String>,
    pub font: Option<String>,
    pub weight: Option<String>,
    pub italic: Option<bool>,
}

impl Snapshot {
    /// Snapshot every field of `state`
    pub fn capture(state: &SelectionState) -> Self {
        Self {
            text: Some(state.text.clone()),
            font: Some(state.selected_font.clone()),
            weight: Some(state.selected_weight.clone()),
            italic: Some(state.is_italic),
        }
    }

    /// Write the present fields under their fixed keys
    pub fn write<K: KeyValueStore>(&self, store: &mut K) -> Result<()> {
        if let Some(text) = &self.text {
            store.set(TEXT_KEY, text)?;
        }
        if let Some(font) = &self.font {
            store.set(FONT_KEY, font)?;
        }
        if let Some(weight) = &self.weight {
            store.set(WEIGHT_KEY, weight)?;
        }
        if let Some(italic) = self.italic {
            store.set(ITALIC_KEY, &serde_json::to_string(&italic)?)?;
        }
        Ok(())
    }

    /// Read the four keys.
    ///
    /// Empty strings count as absent. An italic value that is not a JSON
    /// boolean is logged and treated as absent.
    pub fn read<K: KeyValueStore>(store: &K) -> Result<Self> {
        let non_empty = |key: &str| -> Result<Option<String>> {
            Ok(store.get(key)?.filter(|value| !value.is_empty()))
        };

        let italic = match store.get(ITALIC_KEY)? {
            Some(raw) => match serde_json::from_str::<bool>(&raw) {
                Ok(flag) => Some(flag),
                Err(err) => {
                    log::warn!("ignoring stored italic flag {:?}: {}", raw, err);
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            text: non_empty(TEXT_KEY)?,
            font: non_empty(FONT_KEY)?,
            weight: non_empty(WEIGHT_KEY)?,
            italic,
        })
    }

    /// Overwrite the fields of `state` that this snapshot holds
    pub fn restore_into(self, state: &mut SelectionState) {
        if let Some(text) = self.text {
            state.text = text;
        }
        if let Some(font) = self.font {
            state.selected_font = font;
        }
        if let Some(weight) = self.weight {
            state.selected_weight = weight;
        }
        if let Some(italic) = self.italic {
            state.is_italic = italic;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved_state() -> SelectionState {
        let mut state = SelectionState::new("Arial", "bold");
        state.set_text("hello");
        state.toggle_italic();
        state
    }

    #[test]
    fn test_write_uses_fixed_keys() {
        let mut store = MemoryStore::new();
        Snapshot::capture(&saved_state()).write(&mut store).unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(store.get("text").unwrap().as_deref(), Some("hello"));
        assert_eq!(store.get("font").unwrap().as_deref(), Some("Arial"));
        assert_eq!(store.get("weight").unwrap().as_deref(), Some("bold"));
        assert_eq!(store.get("italic").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::new();
        Snapshot::capture(&saved_state()).write(&mut store).unwrap();

        let mut restored = SelectionState::default();
        Snapshot::read(&store).unwrap().restore_into(&mut restored);
        assert_eq!(restored, saved_state());
    }

    #[test]
    fn test_absent_keys_keep_defaults() {
        let mut store = MemoryStore::new();
        store.set(WEIGHT_KEY, "300").unwrap();

        let mut state = SelectionState::default();
        Snapshot::read(&store).unwrap().restore_into(&mut state);
        assert_eq!(state.selected_font, "Arial");
        assert_eq!(state.selected_weight, "300");
        assert!(!state.is_italic);
    }

    #[test]
    fn test_stored_false_is_not_absent() {
        let mut store = MemoryStore::new();
        store.set(ITALIC_KEY, "false").unwrap();

        let snapshot = Snapshot::read(&store).unwrap();
        assert_eq!(snapshot.italic, Some(false));

        let mut state = SelectionState::default();
        state.is_italic = true;
        snapshot.restore_into(&mut state);
        assert!(!state.is_italic);
    }

    #[test]
    fn test_malformed_italic_is_ignored() {
        let mut store = MemoryStore::new();
        store.set(ITALIC_KEY, "yes").unwrap();
        store.set(FONT_KEY, "Lato").unwrap();

        let snapshot = Snapshot::read(&store).unwrap();
        assert_eq!(snapshot.italic, None);
        assert_eq!(snapshot.font.as_deref(), Some("Lato"));
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let mut store = MemoryStore::new();
        store.set(FONT_KEY, "").unwrap();
        store.set(TEXT_KEY, "").unwrap();

        let snapshot = Snapshot::read(&store).unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }
}
