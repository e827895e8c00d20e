//! Frame pacing without blocking.
//!
//! The scheduler is ticked as often as the host loop spins. It renders only
//! once a full frame budget (`1000 / fps` ms) has passed since the previous
//! frame; earlier ticks return immediately without touching the strip.

use embassy_time::{Duration, Instant};

use crate::config::{Config, DEFAULT_FPS};
use crate::renderer::{Renderer, RendererConfig};
use crate::state::State;
use crate::OutputDriver;

/// Outcome of one scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameResult {
    /// Budget not yet spent; nothing was rendered.
    Idle {
        /// Time left until the next frame is due.
        remaining: Duration,
    },
    /// A frame was rendered and written to the driver.
    Rendered,
}

/// Frame budget for a given frame rate.
pub const fn frame_budget(fps: u32) -> Duration {
    let fps = if fps == 0 { DEFAULT_FPS } else { fps };
    Duration::from_millis(1000 / fps as u64)
}

/// Throttled render loop step.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::<_, 128>::new(driver, &RendererConfig::default());
///
/// loop {
///     let now = Instant::now();
///     scheduler.tick(now, &state, &config);
///     // serve HTTP, poll the button, ...
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, const MAX_LEDS: usize> {
    output: O,
    renderer: Renderer<MAX_LEDS>,
    last_update: Option<Instant>,
}

impl<O: OutputDriver, const MAX_LEDS: usize> FrameScheduler<O, MAX_LEDS> {
    pub fn new(driver: O, config: &RendererConfig) -> Self {
        Self {
            output: driver,
            renderer: Renderer::new(config),
            last_update: None,
        }
    }

    /// Render a frame if the budget allows it.
    ///
    /// The first tick always renders. A skipped tick leaves the last-update
    /// timestamp alone, so the budget is measured from the previous frame.
    pub fn tick(&mut self, now: Instant, state: &State, config: &Config) -> FrameResult {
        let budget = frame_budget(config.fps);

        if let Some(last) = self.last_update {
            let elapsed = now.as_millis().saturating_sub(last.as_millis());
            if elapsed < budget.as_millis() {
                return FrameResult::Idle {
                    remaining: Duration::from_millis(budget.as_millis() - elapsed),
                };
            }
        }
        self.last_update = Some(now);

        let frame = self
            .renderer
            .render(now, state, usize::from(config.num_leds));
        self.output.write(frame);

        FrameResult::Rendered
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<MAX_LEDS> {
        &self.renderer
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
