//! Frame resolver: expands a scene row into a channel-addressed frame

use crate::error::{AuthoringError, InvalidScene};
use crate::frame::Frame;
use crate::log::log;
use crate::scene::{BLACKOUT_SCENE, MAX_SCENES, SceneRow, SceneTable};
use crate::slot::SlotTable;

/// What to do with a scene index that was never authored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidScenePolicy {
    /// Return [`InvalidScene`] and let the caller keep its current output
    #[default]
    Reject,
    /// Resolve the blackout scene (scene 0) instead
    Blackout,
}

/// Configuration for the scene resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolverConfig {
    pub invalid_scene: InvalidScenePolicy,
}

/// Scatter `row` onto the channels of `slots`.
///
/// Slot `i` writes `row[i]` to the channel of slot `i`. When two slots share
/// a channel, the later slot wins and the frame keeps a single entry for it.
pub fn resolve_row<const K: usize>(slots: &SlotTable<K>, row: &SceneRow<K>) -> Frame<K> {
    let mut frame = Frame::new();
    for (channel, value) in slots.iter().zip(row.iter()) {
        frame.set(channel, *value);
    }
    frame
}

/// Check authored tables once, before any scene is resolved
pub fn validate<const K: usize>(
    slots: &SlotTable<K>,
    scenes: &SceneTable<'_, K>,
) -> Result<(), AuthoringError> {
    if scenes.is_empty() {
        return Err(AuthoringError::NoScenes);
    }
    if scenes.len() > MAX_SCENES {
        return Err(AuthoringError::TooManyScenes {
            count: scenes.len(),
        });
    }
    if let Some((slot, channel)) = slots.find_out_of_range() {
        return Err(AuthoringError::ChannelOutOfRange { slot, channel });
    }
    if let Some((first_slot, second_slot, channel)) = slots.find_duplicate() {
        return Err(AuthoringError::DuplicateChannel {
            first_slot,
            second_slot,
            channel,
        });
    }
    Ok(())
}

/// Validated pair of slot and scene tables
///
/// Both tables are borrowed read-only, so a resolver can be shared freely
/// between readers.
#[derive(Debug, Clone, Copy)]
pub struct SceneResolver<'a, const K: usize> {
    slots: &'a SlotTable<K>,
    scenes: SceneTable<'a, K>,
    policy: InvalidScenePolicy,
}

impl<'a, const K: usize> SceneResolver<'a, K> {
    /// Create a resolver, failing fast on inconsistent tables
    pub fn new(
        slots: &'a SlotTable<K>,
        scenes: SceneTable<'a, K>,
        config: &ResolverConfig,
    ) -> Result<Self, AuthoringError> {
        if let Err(error) = validate(slots, &scenes) {
            log!("[SceneResolver.new] rejecting tables: {}", error);
            return Err(error);
        }
        Ok(Self {
            slots,
            scenes,
            policy: config.invalid_scene,
        })
    }

    /// Scene that `index` resolves to under the configured policy.
    ///
    /// With [`InvalidScenePolicy::Blackout`] an unknown index maps to
    /// scene 0; with [`InvalidScenePolicy::Reject`] it is returned as an
    /// error.
    pub fn effective_scene(&self, index: usize) -> Result<usize, InvalidScene> {
        if index < self.scenes.len() {
            return Ok(index);
        }
        let error = InvalidScene {
            index,
            scene_count: self.scenes.len(),
        };
        match self.policy {
            InvalidScenePolicy::Reject => {
                log!("[SceneResolver.effective_scene] {}", error);
                Err(error)
            }
            InvalidScenePolicy::Blackout => {
                log!("[SceneResolver.effective_scene] {}, using blackout", error);
                Ok(BLACKOUT_SCENE)
            }
        }
    }

    /// Resolve the scene at `index`
    pub fn resolve(&self, index: usize) -> Result<Frame<K>, InvalidScene> {
        self.resolve_scene(index).map(|(_, frame)| frame)
    }

    /// Resolve the scene at `index`, also returning the scene actually used
    pub fn resolve_scene(&self, index: usize) -> Result<(usize, Frame<K>), InvalidScene> {
        let scene = self.effective_scene(index)?;
        let row = self.scenes.row_for_scene(scene)?;
        Ok((scene, resolve_row(self.slots, row)))
    }

    /// Resolve a row that is not part of the scene table
    pub fn resolve_row(&self, row: &SceneRow<K>) -> Frame<K> {
        resolve_row(self.slots, row)
    }

    pub const fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}
