//! Named-slot abstraction
//!
//! Tables are authored one fixture at a time instead of as flat positional
//! arrays. Each fixture kind occupies a fixed run of consecutive slots:
//!
//! - [`FixtureKind::Dimmer`]: level
//! - [`FixtureKind::Rgb`]: red, green, blue
//! - [`FixtureKind::DimmableRgb`]: brightness, red, green, blue
//!
//! The slot table and every scene row are flattened from the same patch, so a
//! column can never drift away from the slot it belongs to.
//!
//! The flatteners are `const fn`. They check that `K` equals the summed slot
//! count of the patch, and that every look has the kind of the fixture at its
//! position. Evaluated in a `const` or `static` initializer, a violation is a
//! compile error.

use crate::color::{BLACK, Rgb};
use crate::dmx::Channel;
use crate::scene::SceneRow;
use crate::slot::SlotTable;

/// Largest number of slots a single fixture occupies
pub const MAX_SLOTS_PER_FIXTURE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FixtureKind {
    /// Single intensity channel
    Dimmer,
    /// Red, green and blue channels without a master dimmer
    Rgb,
    /// Master dimmer followed by red, green and blue
    DimmableRgb,
}

impl FixtureKind {
    pub const fn slot_count(self) -> usize {
        match self {
            Self::Dimmer => 1,
            Self::Rgb => 3,
            Self::DimmableRgb => 4,
        }
    }

    const fn same_as(self, other: Self) -> bool {
        self as u8 == other as u8
    }
}

/// Channels wired to one fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixturePatch {
    Dimmer(Channel),
    Rgb {
        red: Channel,
        green: Channel,
        blue: Channel,
    },
    DimmableRgb {
        brightness: Channel,
        red: Channel,
        green: Channel,
        blue: Channel,
    },
}

impl FixturePatch {
    pub const fn dimmer(channel: u16) -> Self {
        Self::Dimmer(Channel::from_raw(channel))
    }

    /// RGB fixture with R, G, B on consecutive channels starting at `red`
    pub const fn rgb(red: u16) -> Self {
        Self::rgb_with_channels(red, red + 1, red + 2)
    }

    /// RGB fixture whose color channels are not in R, G, B order
    pub const fn rgb_with_channels(red: u16, green: u16, blue: u16) -> Self {
        Self::Rgb {
            red: Channel::from_raw(red),
            green: Channel::from_raw(green),
            blue: Channel::from_raw(blue),
        }
    }

    /// Dimmable RGB fixture with brightness, R, G, B on consecutive channels
    pub const fn dimmable_rgb(brightness: u16) -> Self {
        Self::dimmable_rgb_with_channels(
            brightness,
            brightness + 1,
            brightness + 2,
            brightness + 3,
        )
    }

    pub const fn dimmable_rgb_with_channels(
        brightness: u16,
        red: u16,
        green: u16,
        blue: u16,
    ) -> Self {
        Self::DimmableRgb {
            brightness: Channel::from_raw(brightness),
            red: Channel::from_raw(red),
            green: Channel::from_raw(green),
            blue: Channel::from_raw(blue),
        }
    }

    pub const fn kind(&self) -> FixtureKind {
        match self {
            Self::Dimmer(_) => FixtureKind::Dimmer,
            Self::Rgb { .. } => FixtureKind::Rgb,
            Self::DimmableRgb { .. } => FixtureKind::DimmableRgb,
        }
    }

    /// Look that turns this fixture off
    pub const fn off(&self) -> FixtureLook {
        match self.kind() {
            FixtureKind::Dimmer => FixtureLook::Dimmer(0),
            FixtureKind::Rgb => FixtureLook::Rgb(BLACK),
            FixtureKind::DimmableRgb => FixtureLook::dimmable_rgb(0, BLACK),
        }
    }

    /// Channels in slot order; only the first `kind().slot_count()` are used
    const fn slots(&self) -> [Channel; MAX_SLOTS_PER_FIXTURE] {
        let unused = Channel::from_raw(0);
        match *self {
            Self::Dimmer(channel) => [channel, unused, unused, unused],
            Self::Rgb { red, green, blue } => [red, green, blue, unused],
            Self::DimmableRgb {
                brightness,
                red,
                green,
                blue,
            } => [brightness, red, green, blue],
        }
    }
}

/// Authored state of one fixture within a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureLook {
    Dimmer(u8),
    Rgb(Rgb),
    DimmableRgb { brightness: u8, color: Rgb },
}

impl FixtureLook {
    pub const fn dimmer(level: u8) -> Self {
        Self::Dimmer(level)
    }

    pub const fn rgb(color: Rgb) -> Self {
        Self::Rgb(color)
    }

    pub const fn dimmable_rgb(brightness: u8, color: Rgb) -> Self {
        Self::DimmableRgb { brightness, color }
    }

    pub const fn kind(&self) -> FixtureKind {
        match self {
            Self::Dimmer(_) => FixtureKind::Dimmer,
            Self::Rgb(_) => FixtureKind::Rgb,
            Self::DimmableRgb { .. } => FixtureKind::DimmableRgb,
        }
    }

    const fn values(&self) -> [u8; MAX_SLOTS_PER_FIXTURE] {
        match *self {
            Self::Dimmer(level) => [level, 0, 0, 0],
            Self::Rgb(color) => [color.r, color.g, color.b, 0],
            Self::DimmableRgb { brightness, color } => [brightness, color.r, color.g, color.b],
        }
    }
}

/// Total number of slots occupied by `fixtures`
pub const fn slot_count<const F: usize>(fixtures: &[FixturePatch; F]) -> usize {
    let mut count = 0;
    let mut fixture = 0;
    while fixture < F {
        count += fixtures[fixture].kind().slot_count();
        fixture += 1;
    }
    count
}

/// Flatten fixture patches into a slot table
pub const fn patch_slots<const F: usize, const K: usize>(
    fixtures: &[FixturePatch; F],
) -> SlotTable<K> {
    assert!(
        K == slot_count(fixtures),
        "slot count must equal the slots occupied by the patch"
    );
    let mut channels = [Channel::from_raw(0); K];
    let mut cursor = 0;
    let mut fixture = 0;
    while fixture < F {
        let slots = fixtures[fixture].slots();
        let mut offset = 0;
        while offset < fixtures[fixture].kind().slot_count() {
            channels[cursor] = slots[offset];
            cursor += 1;
            offset += 1;
        }
        fixture += 1;
    }
    SlotTable::new(channels)
}

/// Flatten one look per patched fixture into a scene row matching
/// [`patch_slots`]
pub const fn look_row<const F: usize, const K: usize>(
    fixtures: &[FixturePatch; F],
    looks: &[FixtureLook; F],
) -> SceneRow<K> {
    assert!(
        K == slot_count(fixtures),
        "scene width must equal the slots occupied by the patch"
    );
    let mut row = [0; K];
    let mut cursor = 0;
    let mut fixture = 0;
    while fixture < F {
        let kind = fixtures[fixture].kind();
        assert!(
            looks[fixture].kind().same_as(kind),
            "look kind must match the fixture patched at its position"
        );
        let values = looks[fixture].values();
        let mut offset = 0;
        while offset < kind.slot_count() {
            row[cursor] = values[offset];
            cursor += 1;
            offset += 1;
        }
        fixture += 1;
    }
    row
}

/// Scene row with every fixture of the patch turned off
pub const fn off_row<const F: usize, const K: usize>(
    fixtures: &[FixturePatch; F],
) -> SceneRow<K> {
    let mut looks = [FixtureLook::Dimmer(0); F];
    let mut fixture = 0;
    while fixture < F {
        looks[fixture] = fixtures[fixture].off();
        fixture += 1;
    }
    look_row(fixtures, &looks)
}
