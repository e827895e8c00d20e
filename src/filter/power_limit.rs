//! Power limiting
//!
//! Estimates strip draw with the usual WS2812 model and dims the whole
//! frame uniformly when it would exceed the supply budget.

use super::Filter;
use crate::color::{Rgb, scale_rgb};

/// Draw of one fully lit channel, in milliwatts (16/11/15 mA at 5 V)
const RED_MW: u32 = 16 * 5;
const GREEN_MW: u32 = 11 * 5;
const BLUE_MW: u32 = 15 * 5;
/// Quiescent draw of one pixel, in milliwatts
const DARK_MW: u32 = 5;

/// Supply limits for the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerBudget {
    pub volts: u8,
    pub milliamps: u32,
}

impl PowerBudget {
    #[allow(clippy::cast_lossless)]
    pub const fn milliwatts(self) -> u32 {
        self.volts as u32 * self.milliamps
    }
}

/// Estimated draw of a frame at full brightness, in milliwatts
pub fn estimate_power_mw(frame: &[Rgb]) -> u32 {
    let channels: u32 = frame
        .iter()
        .map(|pixel| {
            u32::from(pixel.r) * RED_MW + u32::from(pixel.g) * GREEN_MW + u32::from(pixel.b) * BLUE_MW
        })
        .sum();
    let len = u32::try_from(frame.len()).unwrap_or(u32::MAX);
    (channels >> 8) + DARK_MW.saturating_mul(len)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PowerLimit {
    budget: PowerBudget,
}

impl PowerLimit {
    pub(crate) const fn new(budget: PowerBudget) -> Self {
        Self { budget }
    }

    /// Brightness (0-255) that keeps the frame within budget
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn max_brightness(self, frame: &[Rgb]) -> u8 {
        let requested = estimate_power_mw(frame);
        let available = self.budget.milliwatts();
        if requested <= available {
            return 255;
        }
        ((u64::from(available) * 256) / u64::from(requested)).min(255) as u8
    }
}

impl Filter for PowerLimit {
    fn apply(&mut self, frame: &mut [Rgb]) {
        let brightness = self.max_brightness(frame);
        if brightness == 255 {
            return;
        }

        for pixel in frame.iter_mut() {
            *pixel = scale_rgb(*pixel, brightness);
        }
    }
}
