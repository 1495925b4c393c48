//! DMX addressing primitives

/// Number of one-byte channels in a DMX universe
pub const DMX_UNIVERSE_SIZE: usize = 512;

/// Full output buffer of a single DMX universe
pub type Universe = [u8; DMX_UNIVERSE_SIZE];

/// Physical control point on the DMX bus (0..=511)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(u16);

impl Channel {
    /// Create a channel, returning `None` if it lies outside the universe
    #[allow(clippy::cast_lossless)]
    pub const fn new(raw: u16) -> Option<Self> {
        if (raw as usize) < DMX_UNIVERSE_SIZE {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Create a channel without checking the universe bounds.
    ///
    /// Authored tables use this in `const` context; the resolver rejects
    /// out-of-range channels when it is constructed.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Offset of the channel in a [`Universe`] buffer
    #[allow(clippy::cast_lossless)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_valid(self) -> bool {
        self.index() < DMX_UNIVERSE_SIZE
    }
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ch{}", self.0)
    }
}
