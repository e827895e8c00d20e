//! Physical control button.
//!
//! A short press cycles the animation mode. Holding the button walks
//! through blink bands of increasing rate on the indicator LED as a warning,
//! and after [`FACTORY_RESET_HOLD`] the configuration is wiped.
//!
//! The button stores the time it was last seen released, so the press
//! duration is recomputed on every poll, plus a latch so one hold resets
//! only once.

use embassy_time::{Duration, Instant};

/// Shortest press that counts as a click; anything shorter is bounce.
pub const CLICK_MIN: Duration = Duration::from_millis(50);
/// Presses this long or longer are not clicks.
pub const CLICK_MAX: Duration = Duration::from_millis(1000);
/// Hold time that triggers a factory reset.
pub const FACTORY_RESET_HOLD: Duration = Duration::from_millis(10_000);

/// Indicator blink half-periods by hold duration: `(from_ms, to_ms, period_ms)`.
const BLINK_BANDS: [(u64, u64, u64); 5] = [
    (0, 2_000, 500),
    (2_000, 4_000, 250),
    (4_000, 6_000, 125),
    (6_000, 8_000, 67),
    (8_000, 10_000, 30),
];

/// What the device should do after a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    None,
    /// Released after a click-length press.
    CycleMode,
    /// Held past the reset threshold.
    FactoryReset,
}

/// Result of polling the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPoll {
    pub action: ButtonAction,
    /// Level for the indicator LED.
    pub indicator_lit: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ResetButton {
    last_release: Instant,
    reset_fired: bool,
}

impl ResetButton {
    pub const fn new(now: Instant) -> Self {
        Self {
            last_release: now,
            reset_fired: false,
        }
    }

    /// Feed the current button level.
    pub fn poll(&mut self, now: Instant, pressed: bool) -> ButtonPoll {
        let held_ms = now.as_millis().saturating_sub(self.last_release.as_millis());

        if !pressed {
            self.last_release = now;
            self.reset_fired = false;
            let action = if (CLICK_MIN.as_millis()..CLICK_MAX.as_millis()).contains(&held_ms) {
                ButtonAction::CycleMode
            } else {
                ButtonAction::None
            };
            return ButtonPoll {
                action,
                indicator_lit: false,
            };
        }

        if held_ms >= FACTORY_RESET_HOLD.as_millis() {
            let action = if self.reset_fired {
                ButtonAction::None
            } else {
                self.reset_fired = true;
                ButtonAction::FactoryReset
            };
            return ButtonPoll {
                action,
                indicator_lit: false,
            };
        }

        ButtonPoll {
            action: ButtonAction::None,
            indicator_lit: indicator_level(held_ms),
        }
    }
}

/// Blink level for a hold of `held_ms`.
fn indicator_level(held_ms: u64) -> bool {
    BLINK_BANDS
        .iter()
        .find(|(from, to, _)| (*from..*to).contains(&held_ms))
        .is_some_and(|(_, _, period)| (held_ms / period) % 2 == 1)
}
