//! Named colors and brightness levels used to author scenes

use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BRIGHTNESS_OFF: u8 = 0;
pub const BRIGHTNESS_LOW: u8 = 64;
pub const BRIGHTNESS_MEDIUM: u8 = 128;
pub const BRIGHTNESS_HIGH: u8 = 192;
pub const BRIGHTNESS_FULL: u8 = 255;

pub const BLACK: Rgb = rgb_from_u32(0x00_00_00);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FF_FF);
pub const RED: Rgb = rgb_from_u32(0xFF_00_00);
pub const GREEN: Rgb = rgb_from_u32(0x00_FF_00);
pub const BLUE: Rgb = rgb_from_u32(0x00_00_FF);
pub const ORANGE: Rgb = rgb_from_u32(0xFF_80_00);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_FF_00);
pub const CYAN: Rgb = rgb_from_u32(0x00_FF_FF);
pub const MAGENTA: Rgb = rgb_from_u32(0xFF_00_FF);
pub const PURPLE: Rgb = rgb_from_u32(0x80_00_FF);

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
