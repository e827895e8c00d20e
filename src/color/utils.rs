pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::{blend8, scale8},
};

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Convert an HSV triple straight to RGB
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

/// Fill every pixel with the same color
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Scale all channels of a color by the same factor
#[inline]
pub fn scale_rgb(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Dim pixels toward black; `amount` 255 is fully black, 0 leaves them untouched.
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    if amount == 0 {
        return;
    }
    let keep = 255 - amount;
    for led in leds {
        *led = scale_rgb(*led, keep);
    }
}

/// Fill with a hue ramp starting at `initial_hue`, advancing `delta_hue` per pixel
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8, sat: u8, val: u8) {
    let mut hue = initial_hue;
    for led in leds {
        *led = hsv(hue, sat, val);
        hue = hue.wrapping_add(delta_hue);
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
