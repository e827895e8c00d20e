//! Full-spectrum gradient across the strip with a rotating start hue

use super::{Effect, RenderContext};
use crate::color::{Rgb, fill_rainbow};

/// Saturation used for the rainbow, slightly below full for softer colors
const RAINBOW_SATURATION: u8 = 240;

#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowEffect;

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let state = ctx.state;
        let base_hue = state.ease_time(ctx.time_ms(), 255) as u8;
        let delta_hue = (255 / leds.len()) as u8;

        fill_rainbow(leds, base_hue, delta_hue, RAINBOW_SATURATION, state.value);
    }
}
