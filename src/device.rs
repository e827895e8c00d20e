//! The firmware's cooperative main loop, minus the hardware.
//!
//! [`Device`] owns every long-lived object: the animation state, the loaded
//! configuration, the frame scheduler with its LED driver, the reset button
//! and the configuration store. The platform calls [`Device::poll`] on every
//! loop iteration and [`Device::handle`] for every HTTP request. Both run to
//! completion, so a state update is never observed half-applied by a render.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::button::{ButtonAction, ResetButton};
use crate::config::{BlobStore, Config, LoadOutcome};
use crate::frame_scheduler::{FrameResult, FrameScheduler};
use crate::http::{self, Context, Request, Response};
use crate::renderer::RendererConfig;
use crate::state::State;
use crate::system::{SystemQueue, SystemRequest};

/// Outcome of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevicePoll {
    /// Level for the indicator LED
    pub indicator_lit: bool,
    pub frame: FrameResult,
}

pub struct Device<'a, O: OutputDriver, S: BlobStore, const MAX_LEDS: usize> {
    state: State,
    config: Config,
    scheduler: FrameScheduler<O, MAX_LEDS>,
    button: ResetButton,
    store: S,
    load_outcome: LoadOutcome,
    system: &'a SystemQueue,
}

impl<'a, O: OutputDriver, S: BlobStore, const MAX_LEDS: usize> Device<'a, O, S, MAX_LEDS> {
    /// Load the configuration from `store` and start in the initial state.
    pub fn new(
        now: Instant,
        output: O,
        mut store: S,
        renderer: &RendererConfig,
        system: &'a SystemQueue,
    ) -> Self {
        let (config, load_outcome) = Config::load(&mut store);
        #[cfg(feature = "esp32-log")]
        if load_outcome == LoadOutcome::Stored {
            println!("[Device] loaded configuration for '{}'", config.name.as_str());
        }

        Self {
            state: State::new(),
            config,
            scheduler: FrameScheduler::new(output, renderer),
            button: ResetButton::new(now),
            store,
            load_outcome,
            system,
        }
    }

    /// One loop iteration: the button first, then the render tick.
    pub fn poll(&mut self, now: Instant, button_pressed: bool) -> DevicePoll {
        let button = self.button.poll(now, button_pressed);

        match button.action {
            ButtonAction::None => {}
            ButtonAction::CycleMode => self.state.cycle_mode(),
            ButtonAction::FactoryReset => self.factory_reset(),
        }

        let frame = self.scheduler.tick(now, &self.state, &self.config);

        DevicePoll {
            indicator_lit: button.indicator_lit,
            frame,
        }
    }

    /// Serve one HTTP request.
    pub fn handle(&mut self, now: Instant, request: &Request<'_>) -> Response {
        let ctx = Context {
            now,
            state: &mut self.state,
            config: &mut self.config,
            store: &mut self.store,
            system: self.system,
        };
        http::handle(ctx, request)
    }

    /// Wipe the stored configuration and ask the platform to restart.
    ///
    /// The in-memory configuration falls back to defaults right away so the
    /// remaining frames before the restart already use them.
    fn factory_reset(&mut self) {
        if let Err(_err) = Config::clear(&mut self.store) {
            #[cfg(feature = "esp32-log")]
            println!("[Device] factory reset failed: {}", _err);
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!("[Device] configuration wiped, restarting");

        self.config = Config::default();
        let _ = self.system.post(SystemRequest::FactoryReset);
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scheduler(&self) -> &FrameScheduler<O, MAX_LEDS> {
        &self.scheduler
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Where the configuration in use at start-up came from
    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }
}
