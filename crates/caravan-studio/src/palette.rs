//! Colours used by the scene, as straight `0xRRGGBB` values.

use caravan_engine::paint::Color;

pub const SAND: u32 = 0xF4A460;
pub const MOUNTAIN: u32 = 0x8B4513;
pub const MOUNTAIN_EDGE: u32 = 0x654321;
pub const ASPHALT: u32 = 0x2F2F2F;
pub const STEM: u32 = 0x228B22;
pub const LEAF: u32 = 0x32CD32;

pub const WHITE: u32 = 0xFFFFFF;
pub const BLACK: u32 = 0x000000;
pub const GRAY: u32 = 0x808080;
pub const RED: u32 = 0xFF0000;
pub const BLUE: u32 = 0x0000FF;
pub const GREEN: u32 = 0x008000;
pub const DARK_GREEN: u32 = 0x006400;
pub const ORANGE: u32 = 0xFFA500;
pub const PURPLE: u32 = 0x800080;
pub const YELLOW: u32 = 0xFFFF00;
pub const LIGHT_BLUE: u32 = 0xADD8E6;

/// Opaque colour from `0xRRGGBB`.
#[inline]
pub fn rgb(hex: u32) -> Color {
    Color::from_srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
}

/// `0xRRGGBB` with straight alpha.
#[inline]
pub fn rgba(hex: u32, alpha: f32) -> Color {
    rgb(hex).with_alpha(alpha)
}
