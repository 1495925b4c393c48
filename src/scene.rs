//! Scene table: authored rows of slot values

use crate::error::InvalidScene;

/// Maximum number of scenes, bounded by the 7-bit MIDI note number
pub const MAX_SCENES: usize = 128;

/// Scene index that is conventionally authored as blackout
pub const BLACKOUT_SCENE: usize = 0;

/// One scene: a value for every slot, in slot order
pub type SceneRow<const K: usize> = [u8; K];

/// Immutable set of authored scenes.
///
/// The row width is part of the type, so every row has exactly `K` values.
#[derive(Debug, Clone, Copy)]
pub struct SceneTable<'a, const K: usize> {
    rows: &'a [SceneRow<K>],
}

impl<'a, const K: usize> SceneTable<'a, K> {
    pub const fn new(rows: &'a [SceneRow<K>]) -> Self {
        Self { rows }
    }

    /// Number of authored scenes
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for `index`, or [`InvalidScene`] if it was never authored
    pub fn row_for_scene(&self, index: usize) -> Result<&'a SceneRow<K>, InvalidScene> {
        self.rows.get(index).ok_or(InvalidScene {
            index,
            scene_count: self.rows.len(),
        })
    }
}
