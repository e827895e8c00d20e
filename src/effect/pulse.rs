//! Breathing effect: the state color fading toward black and back

use super::{Effect, RenderContext};
use crate::color::{Rgb, fade_to_black_by, fill_solid, hsv};

#[derive(Debug, Clone, Copy, Default)]
pub struct PulseEffect;

impl Effect for PulseEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        let state = ctx.state;
        let fade = state.ease_time(ctx.time_ms(), 255) as u8;

        fill_solid(leds, hsv(state.hue, state.saturation, state.value));
        fade_to_black_by(leds, fade);
    }
}
