use crate::color::Rgb;

mod color_correction;
mod power_limit;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&mut self, frame: &mut [Rgb]);
}

pub(crate) use color_correction::ColorCorrection;
pub use power_limit::{PowerBudget, estimate_power_mw};
pub(crate) use power_limit::PowerLimit;

/// Factors that leave colors unchanged
pub const UNCORRECTED: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Typical correction for 5050 WS2812 strips (green and blue run hot)
pub const TYPICAL_LED_STRIP: Rgb = Rgb {
    r: 255,
    g: 176,
    b: 240,
};

#[derive(Debug, Clone)]
pub struct FilterProcessorConfig {
    /// Per-channel color correction
    pub color_correction: Rgb,
    /// Power budget, if output should be limited
    pub power: Option<PowerBudget>,
}

impl Default for FilterProcessorConfig {
    fn default() -> Self {
        Self {
            color_correction: UNCORRECTED,
            power: None,
        }
    }
}

/// Filter processor - applies post-processing to frames
///
/// Correction runs first so the power estimate sees the colors that are
/// actually sent to the strip.
#[derive(Debug)]
pub(crate) struct FilterProcessor {
    color_correction: ColorCorrection,
    power_limit: Option<PowerLimit>,
}

impl FilterProcessor {
    pub(crate) fn new(config: &FilterProcessorConfig) -> Self {
        Self {
            color_correction: ColorCorrection::new(config.color_correction),
            power_limit: config.power.map(PowerLimit::new),
        }
    }

    /// Apply all processing to a frame
    pub(crate) fn apply(&mut self, frame: &mut [Rgb]) {
        self.color_correction.apply(frame);
        if let Some(power_limit) = &mut self.power_limit {
            power_limit.apply(frame);
        }
    }
}
