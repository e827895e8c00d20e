use embassy_time::Instant;

use crate::color::Rgb;
use crate::effect::{EffectSet, RenderContext};
use crate::filter::{FilterProcessor, FilterProcessorConfig};
use crate::frame::FrameBuffer;
use crate::state::State;

/// Configuration for the renderer
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Seed for the Balls and Fire randomness
    pub seed: u64,
    /// Whether Balls mode is available; when off it renders as `Off`
    pub balls_enabled: bool,
    /// Output post-processing
    pub filters: FilterProcessorConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            seed: 0x0BAD_A551,
            balls_enabled: true,
            filters: FilterProcessorConfig::default(),
        }
    }
}

/// Turns the current state into a finished frame
pub struct Renderer<const MAX_LEDS: usize> {
    effects: EffectSet<MAX_LEDS>,
    frame: FrameBuffer<MAX_LEDS>,
    filters: FilterProcessor,
}

impl<const MAX_LEDS: usize> Renderer<MAX_LEDS> {
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            effects: EffectSet::new(config.seed, config.balls_enabled),
            frame: FrameBuffer::new(MAX_LEDS),
            filters: FilterProcessor::new(&config.filters),
        }
    }

    /// Render one frame of `num_leds` pixels
    ///
    /// Every active pixel is rewritten before post-processing.
    pub fn render(&mut self, now: Instant, state: &State, num_leds: usize) -> &[Rgb] {
        self.frame.set_len(num_leds);

        let ctx = RenderContext { now, state };
        let leds = self.frame.active_mut();
        self.effects.render(&ctx, leds);
        self.filters.apply(leds);

        self.frame.active()
    }

    /// The last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        self.frame.active()
    }

    pub fn effects(&self) -> &EffectSet<MAX_LEDS> {
        &self.effects
    }
}
