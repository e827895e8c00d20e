//! One render routine per animation mode
//!
//! Stateless modes are plain unit structs; Balls and Fire carry simulation
//! state that lives as long as the [`EffectSet`] that owns them.
//! Each effect implements the `Effect` trait.

mod balls;
mod colorloop;
mod fire;
mod knight_rider;
mod pulse;
mod rainbow;
mod static_color;

use embassy_time::Instant;

pub use balls::{Ball, BallsEffect};
pub use colorloop::ColorloopEffect;
pub use fire::FireEffect;
pub use knight_rider::KnightRiderEffect;
pub use pulse::PulseEffect;
pub use rainbow::RainbowEffect;
pub use static_color::{OffEffect, SolidEffect};

use crate::color::Rgb;
use crate::state::{State, StateMode};

/// Inputs shared by every effect for one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub now: Instant,
    pub state: &'a State,
}

impl RenderContext<'_> {
    /// Milliseconds since boot
    pub fn time_ms(&self) -> u64 {
        self.now.as_millis()
    }
}

pub trait Effect {
    /// Render a single frame into the active pixels
    ///
    /// Every pixel in `leds` must be written.
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]);
}

/// Every effect the strip can show, with the stateful ones kept alive across frames
#[derive(Debug, Clone)]
pub struct EffectSet<const MAX_LEDS: usize> {
    off: OffEffect,
    solid: SolidEffect,
    pulse: PulseEffect,
    colorloop: ColorloopEffect,
    rainbow: RainbowEffect,
    balls: BallsEffect,
    knight_rider: KnightRiderEffect,
    fire: FireEffect<MAX_LEDS>,
    balls_enabled: bool,
}

impl<const MAX_LEDS: usize> EffectSet<MAX_LEDS> {
    /// Create the effect set; `seed` drives the random parts of Balls and Fire
    pub fn new(seed: u64, balls_enabled: bool) -> Self {
        Self {
            off: OffEffect,
            solid: SolidEffect,
            pulse: PulseEffect,
            colorloop: ColorloopEffect,
            rainbow: RainbowEffect,
            balls: BallsEffect::new(seed),
            knight_rider: KnightRiderEffect,
            fire: FireEffect::new(seed.rotate_left(32)),
            balls_enabled,
        }
    }

    /// Render the effect selected by `ctx.state.mode`
    pub fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        match ctx.state.mode {
            StateMode::Off => self.off.render(ctx, leds),
            StateMode::On => self.solid.render(ctx, leds),
            StateMode::Pulse => self.pulse.render(ctx, leds),
            StateMode::Colorloop => self.colorloop.render(ctx, leds),
            StateMode::Rainbow => self.rainbow.render(ctx, leds),
            StateMode::Balls if self.balls_enabled => self.balls.render(ctx, leds),
            StateMode::Balls => self.off.render(ctx, leds),
            StateMode::KnightRider => self.knight_rider.render(ctx, leds),
            StateMode::Fire => self.fire.render(ctx, leds),
        }
    }

    /// Current heat field of the fire simulation
    pub fn fire_heat(&self) -> &[u8] {
        self.fire.heat()
    }

    /// Seeded ball pool, if Balls has rendered at least once
    pub fn balls(&self) -> Option<&[Ball]> {
        self.balls.balls()
    }
}
