//! Fire simulation
//!
//! A one-dimensional heat field that cools, drifts upward, and is fed by
//! random sparks near the base. The field persists between frames and
//! survives mode switches.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{Effect, RenderContext};
use crate::color::{Rgb, heat_color};
use crate::math8::{qadd8, qsub8, weighted_avg3};

/// Sparks ignite within this many cells of the base
const SPARK_ZONE: u8 = 7;
/// Heat added by a spark is drawn from this range
const SPARK_HEAT_MIN: u8 = 160;
const SPARK_HEAT_MAX: u8 = 255;

#[derive(Debug, Clone)]
pub struct FireEffect<const MAX_LEDS: usize> {
    rng: SmallRng,
    heat: [u8; MAX_LEDS],
    len: usize,
}

impl<const MAX_LEDS: usize> FireEffect<MAX_LEDS> {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            heat: [0; MAX_LEDS],
            len: 0,
        }
    }

    /// Heat cells touched by the last step
    pub fn heat(&self) -> &[u8] {
        &self.heat[..self.len]
    }

    /// Advance the simulation by one step over the first `len` cells
    #[allow(clippy::cast_possible_truncation)]
    pub fn step(&mut self, len: usize, cooling: u8, sparking: u8) {
        let len = len.min(MAX_LEDS);
        self.len = len;
        if len == 0 {
            return;
        }
        let heat = &mut self.heat[..len];

        // Cool down every cell a little
        let max_cooling = ((usize::from(cooling) * 10) / len + 2).min(255) as u8;
        for cell in heat.iter_mut() {
            let amount = self.rng.gen_range(0..max_cooling);
            *cell = qsub8(*cell, amount);
        }

        // Heat from each cell drifts up and diffuses a little
        for k in (2..len).rev() {
            heat[k] = weighted_avg3(heat[k - 1], heat[k - 2]);
        }

        // Randomly ignite new sparks near the base
        if self.rng.r#gen::<u8>() < sparking {
            let y = usize::from(self.rng.gen_range(0..SPARK_ZONE)).min(len - 1);
            let spark = self.rng.gen_range(SPARK_HEAT_MIN..SPARK_HEAT_MAX);
            heat[y] = qadd8(heat[y], spark);
        }
    }
}

impl<const MAX_LEDS: usize> Effect for FireEffect<MAX_LEDS> {
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        let state = ctx.state;
        self.step(leds.len(), state.fire_cooling, state.fire_sparking);

        for (led, heat) in leds.iter_mut().zip(self.heat.iter()) {
            *led = heat_color(*heat);
        }
    }
}
