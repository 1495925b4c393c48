//! Slot table: logical slot position to physical DMX channel

use crate::dmx::Channel;

/// Fixed correspondence between logical slots and DMX channels.
///
/// `K` is the number of controlled channels and is shared with every
/// [`SceneRow`](crate::scene::SceneRow) resolved against this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTable<const K: usize> {
    channels: [Channel; K],
}

impl<const K: usize> SlotTable<K> {
    pub const fn new(channels: [Channel; K]) -> Self {
        Self { channels }
    }

    /// Build a table from raw channel numbers
    pub const fn from_raw(raw: [u16; K]) -> Self {
        let mut channels = [Channel::from_raw(0); K];
        let mut slot = 0;
        while slot < K {
            channels[slot] = Channel::from_raw(raw[slot]);
            slot += 1;
        }
        Self { channels }
    }

    /// Channel controlled by `slot`.
    ///
    /// Slot count is fixed by authored data, so an out-of-range slot is a
    /// programming error and panics.
    pub const fn channel_for_slot(&self, slot: usize) -> Channel {
        assert!(slot < K, "slot index out of range");
        self.channels[slot]
    }

    pub fn get(&self, slot: usize) -> Option<Channel> {
        self.channels.get(slot).copied()
    }

    pub const fn len(&self) -> usize {
        K
    }

    pub const fn is_empty(&self) -> bool {
        K == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        self.channels.iter().copied()
    }

    /// Find the first pair of slots assigned to the same channel
    ///
    /// Returns `(first_slot, second_slot, channel)`
    pub fn find_duplicate(&self) -> Option<(usize, usize, Channel)> {
        for (second, channel) in self.channels.iter().enumerate() {
            if let Some(first) = self.channels[..second].iter().position(|c| c == channel) {
                return Some((first, second, *channel));
            }
        }
        None
    }

    /// Find the first slot whose channel lies outside the DMX universe
    pub fn find_out_of_range(&self) -> Option<(usize, Channel)> {
        self.channels
            .iter()
            .enumerate()
            .find(|(_, channel)| !channel.is_valid())
            .map(|(slot, channel)| (slot, *channel))
    }

    /// Return a copy of the table with `slot` remapped to `channel`
    pub const fn with_channel(mut self, slot: usize, channel: Channel) -> Self {
        assert!(slot < K, "slot index out of range");
        self.channels[slot] = channel;
        self
    }
}
