//! Error types

use core::fmt;

use crate::dmx::Channel;

/// Scene index outside the authored scene table.
///
/// This is the only error reachable at run time: it is caused by upstream
/// input, not by authored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidScene {
    /// Requested scene index
    pub index: usize,
    /// Number of authored scenes
    pub scene_count: usize,
}

impl fmt::Display for InvalidScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scene {} is out of range (table holds {} scenes)",
            self.index, self.scene_count
        )
    }
}

impl core::error::Error for InvalidScene {}

/// Inconsistency in authored tables, detected once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthoringError {
    /// The scene table has no rows
    NoScenes,
    /// More scenes than a MIDI note number can select
    TooManyScenes { count: usize },
    /// Slot mapped to a channel outside the DMX universe
    ChannelOutOfRange { slot: usize, channel: Channel },
    /// Two slots alias the same physical channel
    DuplicateChannel {
        first_slot: usize,
        second_slot: usize,
        channel: Channel,
    },
}

impl fmt::Display for AuthoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoScenes => f.write_str("scene table is empty"),
            Self::TooManyScenes { count } => write!(
                f,
                "scene table holds {} scenes, at most {} are addressable",
                count,
                crate::scene::MAX_SCENES
            ),
            Self::ChannelOutOfRange { slot, channel } => {
                write!(f, "slot {} is mapped to {}, outside the universe", slot, channel)
            }
            Self::DuplicateChannel {
                first_slot,
                second_slot,
                channel,
            } => write!(
                f,
                "slots {} and {} are both mapped to {}",
                first_slot, second_slot, channel
            ),
        }
    }
}

impl core::error::Error for AuthoringError {}
