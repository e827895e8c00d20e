//! 16-entry gradient palettes sampled with linear blending

use crate::color::{Rgb, blend_colors, rgb_from_u32};

/// Sixteen evenly spaced color stops
pub type Palette16 = [Rgb; 16];

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

// Black -> red -> yellow -> white
#[allow(clippy::unreadable_literal)]
pub const HEAT_PALETTE: Palette16 = hex_palette![
    0x000000, 0x330000, 0x660000, 0x990000, 0xCC0000, 0xFF0000, 0xFF3300, 0xFF6600, 0xFF9900,
    0xFFCC00, 0xFFFF00, 0xFFFF33, 0xFFFF66, 0xFFFF99, 0xFFFFCC, 0xFFFFFF,
];

/// Sample a palette at `index` (0-255), blending between neighbouring stops
///
/// The upper nibble selects the stop, the lower nibble the blend towards the
/// next one. The last stop blends back into the first, so callers wanting a
/// non-wrapping ramp should keep `index` at or below 240.
pub fn color_from_palette(palette: &Palette16, index: u8) -> Rgb {
    let hi = usize::from(index >> 4);
    let lo = index & 0x0F;
    let entry = palette[hi];
    if lo == 0 {
        return entry;
    }
    let next = palette[(hi + 1) % palette.len()];
    blend_colors(entry, next, lo << 4)
}

/// Map a heat value (0-255) to a fire color
pub fn heat_color(heat: u8) -> Rgb {
    color_from_palette(&HEAT_PALETTE, crate::math8::scale8(heat, 240))
}
