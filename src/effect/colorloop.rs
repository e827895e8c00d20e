//! Solid color whose hue walks around the wheel

use super::{Effect, RenderContext};
use crate::color::{Rgb, fill_solid, hsv};

#[derive(Debug, Clone, Copy, Default)]
pub struct ColorloopEffect;

impl Effect for ColorloopEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        let state = ctx.state;
        let hue = state.ease_time(ctx.time_ms(), 255) as u8;

        fill_solid(leds, hsv(hue, state.saturation, state.value));
    }
}
