mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use palette::{HEAT_PALETTE, Palette16, color_from_palette, heat_color};
pub use utils::{
    BLACK, blend_colors, fade_to_black_by, fill_rainbow, fill_solid, hsv, hsv2rgb, rgb_from_u32,
    scale_rgb,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;
