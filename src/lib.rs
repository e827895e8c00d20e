#![no_std]

pub mod button;
pub mod color;
pub mod config;
pub mod device;
pub mod easing;
pub mod effect;
pub mod filter;
pub mod frame;
pub mod frame_scheduler;
pub mod http;
pub mod math8;
pub mod renderer;
pub mod state;
pub mod system;

pub use button::{ButtonAction, ButtonPoll, ResetButton};
pub use config::{BlobStore, Config, ConfigError, ConfigForm, LoadOutcome, MAX_LEDS};
pub use device::{Device, DevicePoll};
pub use easing::{Easing, ease_time};
pub use effect::{Effect, EffectSet, RenderContext};
pub use filter::{FilterProcessorConfig, PowerBudget};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use http::{Method, Request, Response};
pub use renderer::{Renderer, RendererConfig};
pub use state::{State, StateMode, StateSnapshot, StateUpdate, UpdateError};
pub use system::{SystemQueue, SystemRequest};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The renderer is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
