//! Solid fills: the strip fully dark, or fully lit in the state color

use super::{Effect, RenderContext};
use crate::color::{BLACK, Rgb, fill_solid, hsv};

/// Entire strip black
#[derive(Debug, Clone, Copy, Default)]
pub struct OffEffect;

impl Effect for OffEffect {
    fn render(&mut self, _ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        fill_solid(leds, BLACK);
    }
}

/// Entire strip in the state's HSV color
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidEffect;

impl Effect for SolidEffect {
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        let state = ctx.state;
        fill_solid(leds, hsv(state.hue, state.saturation, state.value));
    }
}
