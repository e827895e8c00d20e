//! Scanner: one lit pixel sweeping back and forth

use super::{Effect, RenderContext};
use crate::color::{BLACK, Rgb, hsv};

#[derive(Debug, Clone, Copy, Default)]
pub struct KnightRiderEffect;

impl Effect for KnightRiderEffect {
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let state = ctx.state;
        let last = u32::try_from(leds.len() - 1).unwrap_or(u32::MAX);
        let position = state.ease_time(ctx.time_ms(), last) as usize;
        let lit = hsv(state.hue, state.saturation, state.value);

        for (i, led) in leds.iter_mut().enumerate() {
            *led = if i == position { lit } else { BLACK };
        }
    }
}
