use crate::color::{BLACK, Rgb};

/// Fixed-capacity pixel buffer with a runtime active length
///
/// Storage is always `MAX_LEDS` pixels; only the first `len` are rendered
/// and flushed. Pixels past the active length stay black.
#[derive(Debug, Clone)]
pub struct FrameBuffer<const MAX_LEDS: usize> {
    leds: [Rgb; MAX_LEDS],
    len: usize,
}

impl<const MAX_LEDS: usize> Default for FrameBuffer<MAX_LEDS> {
    fn default() -> Self {
        Self::new(MAX_LEDS)
    }
}

impl<const MAX_LEDS: usize> FrameBuffer<MAX_LEDS> {
    /// Create a black buffer with `len` active pixels (clamped to capacity)
    pub const fn new(len: usize) -> Self {
        Self {
            leds: [BLACK; MAX_LEDS],
            len: clamp_len(len, MAX_LEDS),
        }
    }

    /// Number of active pixels
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        MAX_LEDS
    }

    /// Change the active length, blanking pixels that drop out of range
    pub fn set_len(&mut self, len: usize) {
        let len = clamp_len(len, MAX_LEDS);
        if len < self.len {
            for led in &mut self.leds[len..self.len] {
                *led = BLACK;
            }
        }
        self.len = len;
    }

    /// Active pixels
    pub fn active(&self) -> &[Rgb] {
        &self.leds[..self.len]
    }

    /// Active pixels, mutable
    pub fn active_mut(&mut self) -> &mut [Rgb] {
        &mut self.leds[..self.len]
    }
}

const fn clamp_len(len: usize, max: usize) -> usize {
    if len > max { max } else { len }
}
