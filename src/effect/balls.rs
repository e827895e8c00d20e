//! Bouncing balls
//!
//! Each ball runs the eased triangle wave with its own phase offset and
//! speed. Balls landing on the same pixel are mixed 50/50.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{Effect, RenderContext};
use crate::color::{BLACK, Rgb, blend_colors, fill_solid, hsv};
use crate::state::MAX_BALLS;

/// Speed multipliers are `(SPEED_DENOMINATOR + k) / SPEED_DENOMINATOR`, `k < SPEED_DENOMINATOR`
const SPEED_DENOMINATOR: u64 = 50;

/// One simulated ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    /// Phase offset in milliseconds
    pub time_offset: u64,
    /// Speed numerator over [`SPEED_DENOMINATOR`]; the multiplier is in `[1.0, 2.0)`
    pub speed: u64,
    /// Fixed slice of the hue wheel
    pub hue: u8,
}

impl Ball {
    /// This ball's local clock for a given absolute time
    pub const fn local_time(&self, time_ms: u64) -> u64 {
        let scaled = time_ms
            .saturating_mul(self.speed)
            .saturating_add(SPEED_DENOMINATOR / 2)
            / SPEED_DENOMINATOR;
        scaled.saturating_add(self.time_offset)
    }

    /// Speed as a float factor, for display
    #[allow(clippy::cast_precision_loss)]
    pub fn multiplier(&self) -> f32 {
        self.speed as f32 / SPEED_DENOMINATOR as f32
    }
}

#[derive(Debug, Clone)]
pub struct BallsEffect {
    rng: SmallRng,
    balls: Option<[Ball; MAX_BALLS as usize]>,
}

impl BallsEffect {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            balls: None,
        }
    }

    /// Ball pool, seeded on the first render
    pub fn balls(&self) -> Option<&[Ball]> {
        self.balls.as_ref().map(|balls| balls.as_slice())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn seed_balls(&mut self, period_ms: u32) -> [Ball; MAX_BALLS as usize] {
        let phase_range = u64::from(period_ms) * 2;
        core::array::from_fn(|i| Ball {
            time_offset: if phase_range == 0 {
                0
            } else {
                self.rng.gen_range(0..phase_range)
            },
            speed: SPEED_DENOMINATOR + self.rng.gen_range(0..SPEED_DENOMINATOR),
            hue: ((i * 255) / MAX_BALLS as usize) as u8,
        })
    }
}

impl Effect for BallsEffect {
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        fill_solid(leds, BLACK);
        if leds.is_empty() {
            return;
        }

        let state = ctx.state;
        let balls = match self.balls {
            Some(balls) => balls,
            None => {
                let balls = self.seed_balls(state.period);
                self.balls = Some(balls);
                balls
            }
        };

        let last = u32::try_from(leds.len() - 1).unwrap_or(u32::MAX);
        let time_ms = ctx.time_ms();
        let active = usize::from(state.num_balls.min(MAX_BALLS));

        for ball in &balls[..active] {
            let position = state.ease_time(ball.local_time(time_ms), last) as usize;
            let Some(led) = leds.get_mut(position) else {
                continue;
            };
            let color = hsv(ball.hue, state.saturation, state.value);
            *led = if *led == BLACK {
                color
            } else {
                blend_colors(color, *led, 128)
            };
        }
    }
}
