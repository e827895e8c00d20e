//! Per-channel multiplicative scaling for white balance

use super::Filter;
use crate::color::Rgb;
use crate::math8::scale8;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ColorCorrection {
    /// Correction factors for each channel (0-255 = 0%-100%)
    factors: Rgb,
}

impl ColorCorrection {
    pub(crate) const fn new(factors: Rgb) -> Self {
        Self { factors }
    }

    pub(crate) const fn is_active(self) -> bool {
        self.factors.r != 255 || self.factors.g != 255 || self.factors.b != 255
    }
}

impl Filter for ColorCorrection {
    fn apply(&mut self, frame: &mut [Rgb]) {
        if !self.is_active() {
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, self.factors.r);
            pixel.g = scale8(pixel.g, self.factors.g);
            pixel.b = scale8(pixel.b, self.factors.b);
        }
    }
}
