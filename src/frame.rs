//! Resolved output frame

use heapless::LinearMap;

use crate::dmx::{Channel, Universe};

/// Channel-addressed output of one resolved scene.
///
/// Holds one entry per distinct channel of the slot table, in the order the
/// channels first appear in it. `K` bounds the number of entries, so a frame
/// never allocates.
#[derive(Debug, Clone)]
pub struct Frame<const K: usize> {
    entries: LinearMap<Channel, u8, K>,
}

impl<const K: usize> Frame<K> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: LinearMap::new(),
        }
    }

    /// Set `channel` to `value`, replacing an earlier value for it
    pub(crate) fn set(&mut self, channel: Channel, value: u8) {
        if self.entries.insert(channel, value).is_err() {
            unreachable!("frame holds at most one entry per slot");
        }
    }

    pub fn get(&self, channel: Channel) -> Option<u8> {
        self.entries.get(&channel).copied()
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.entries.contains_key(&channel)
    }

    /// Number of distinct channels in the frame
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, u8)> + '_ {
        self.entries.iter().map(|(channel, value)| (*channel, *value))
    }

    /// Write the frame into a universe buffer.
    ///
    /// Channels not named by the frame keep their current value, so fixed
    /// header channels survive.
    pub fn apply(&self, universe: &mut Universe) {
        for (channel, value) in self.iter() {
            if let Some(cell) = universe.get_mut(channel.index()) {
                *cell = value;
            }
        }
    }
}

impl<const K: usize> PartialEq for Frame<K> {
    /// Frames are equal when they hold the same entries in the same order
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<const K: usize> Eq for Frame<K> {}
