//! Easing curves and the triangle-wave time mapping used by animated modes.
//!
//! Every curve maps normalized progress `t` in `[0, 1]` onto `[0, 1]` with
//! `f(0) = 0` and `f(1) = 1`. Curves that naturally overshoot (elastic) are
//! clamped back into the unit range.

use core::f32::consts::PI;

const EASING_NAME_LINEAR: &str = "linear";
const EASING_NAME_IN_QUAD: &str = "in-quad";
const EASING_NAME_OUT_QUAD: &str = "out-quad";
const EASING_NAME_IN_OUT_QUAD: &str = "in-out-quad";
const EASING_NAME_IN_CUBIC: &str = "in-cubic";
const EASING_NAME_OUT_CUBIC: &str = "out-cubic";
const EASING_NAME_IN_OUT_CUBIC: &str = "in-out-cubic";
const EASING_NAME_IN_ELASTIC: &str = "in-elastic";
const EASING_NAME_OUT_ELASTIC: &str = "out-elastic";
const EASING_NAME_IN_OUT_ELASTIC: &str = "in-out-elastic";
const EASING_NAME_IN_BOUNCE: &str = "in-bounce";
const EASING_NAME_OUT_BOUNCE: &str = "out-bounce";
const EASING_NAME_IN_OUT_BOUNCE: &str = "in-out-bounce";
const EASING_NAME_IN_EXPO: &str = "in-expo";
const EASING_NAME_OUT_EXPO: &str = "out-expo";
const EASING_NAME_IN_OUT_EXPO: &str = "in-out-expo";
const EASING_NAME_IN_CIRC: &str = "in-circ";
const EASING_NAME_OUT_CIRC: &str = "out-circ";
const EASING_NAME_IN_OUT_CIRC: &str = "in-out-circ";

const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f32 = (2.0 * PI) / 4.5;
const BOUNCE_N1: f32 = 7.5625;
const BOUNCE_D1: f32 = 2.75;

/// Named easing curve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    InQuad,
    OutQuad,
    #[default]
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
}

/// Name table, in declaration order. The first match wins on lookup.
const EASING_NAMES: [(Easing, &str); Easing::COUNT] = [
    (Easing::Linear, EASING_NAME_LINEAR),
    (Easing::InQuad, EASING_NAME_IN_QUAD),
    (Easing::OutQuad, EASING_NAME_OUT_QUAD),
    (Easing::InOutQuad, EASING_NAME_IN_OUT_QUAD),
    (Easing::InCubic, EASING_NAME_IN_CUBIC),
    (Easing::OutCubic, EASING_NAME_OUT_CUBIC),
    (Easing::InOutCubic, EASING_NAME_IN_OUT_CUBIC),
    (Easing::InElastic, EASING_NAME_IN_ELASTIC),
    (Easing::OutElastic, EASING_NAME_OUT_ELASTIC),
    (Easing::InOutElastic, EASING_NAME_IN_OUT_ELASTIC),
    (Easing::InBounce, EASING_NAME_IN_BOUNCE),
    (Easing::OutBounce, EASING_NAME_OUT_BOUNCE),
    (Easing::InOutBounce, EASING_NAME_IN_OUT_BOUNCE),
    (Easing::InExpo, EASING_NAME_IN_EXPO),
    (Easing::OutExpo, EASING_NAME_OUT_EXPO),
    (Easing::InOutExpo, EASING_NAME_IN_OUT_EXPO),
    (Easing::InCirc, EASING_NAME_IN_CIRC),
    (Easing::OutCirc, EASING_NAME_OUT_CIRC),
    (Easing::InOutCirc, EASING_NAME_IN_OUT_CIRC),
];

impl Easing {
    /// Number of known curves
    pub const COUNT: usize = 19;

    /// All curves in table order
    pub const ALL: [Easing; Easing::COUNT] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::InElastic,
        Self::OutElastic,
        Self::InOutElastic,
        Self::InBounce,
        Self::OutBounce,
        Self::InOutBounce,
        Self::InExpo,
        Self::OutExpo,
        Self::InOutExpo,
        Self::InCirc,
        Self::OutCirc,
        Self::InOutCirc,
    ];

    pub fn as_str(self) -> &'static str {
        EASING_NAMES
            .iter()
            .find(|(easing, _)| *easing == self)
            .map(|(_, name)| *name)
            .unwrap_or(EASING_NAME_LINEAR)
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        EASING_NAMES
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(easing, _)| *easing)
    }

    /// Evaluate the curve at `t`
    ///
    /// `t` outside `[0, 1]` is clamped first; the result is always in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let value = match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => out_from_in(t, |t| t * t),
            Self::InOutQuad => in_out(t, |t| t * t),
            Self::InCubic => t * t * t,
            Self::OutCubic => out_from_in(t, |t| t * t * t),
            Self::InOutCubic => in_out(t, |t| t * t * t),
            Self::InElastic => in_elastic(t),
            Self::OutElastic => out_elastic(t),
            Self::InOutElastic => in_out_elastic(t),
            Self::InBounce => out_from_in(t, out_bounce),
            Self::OutBounce => out_bounce(t),
            Self::InOutBounce => in_out(t, |t| 1.0 - out_bounce(1.0 - t)),
            Self::InExpo => in_expo(t),
            Self::OutExpo => out_from_in(t, in_expo),
            Self::InOutExpo => in_out(t, in_expo),
            Self::InCirc => in_circ(t),
            Self::OutCirc => out_from_in(t, in_circ),
            Self::InOutCirc => in_out(t, in_circ),
        };

        value.clamp(0.0, 1.0)
    }
}

/// Mirror an "in" curve into its "out" counterpart
#[inline]
fn out_from_in(t: f32, ease_in: fn(f32) -> f32) -> f32 {
    1.0 - ease_in(1.0 - t)
}

/// Symmetric composition: "in" on the first half, "out" on the second
#[inline]
fn in_out(t: f32, ease_in: fn(f32) -> f32) -> f32 {
    if t < 0.5 {
        ease_in(t * 2.0) / 2.0
    } else {
        1.0 - ease_in((1.0 - t) * 2.0) / 2.0
    }
}

fn in_expo(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    libm::powf(2.0, 10.0 * (t - 1.0))
}

fn in_circ(t: f32) -> f32 {
    1.0 - libm::sqrtf((1.0 - t * t).max(0.0))
}

fn in_elastic(t: f32) -> f32 {
    -libm::powf(2.0, 10.0 * t - 10.0) * libm::sinf((t * 10.0 - 10.75) * ELASTIC_C4)
}

fn out_elastic(t: f32) -> f32 {
    libm::powf(2.0, -10.0 * t) * libm::sinf((t * 10.0 - 0.75) * ELASTIC_C4) + 1.0
}

fn in_out_elastic(t: f32) -> f32 {
    let s = libm::sinf((20.0 * t - 11.125) * ELASTIC_C5);
    if t < 0.5 {
        -(libm::powf(2.0, 20.0 * t - 10.0) * s) / 2.0
    } else {
        (libm::powf(2.0, -20.0 * t + 10.0) * s) / 2.0 + 1.0
    }
}

fn out_bounce(t: f32) -> f32 {
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let t = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let t = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984_375
    }
}

/// Ping-pong progress of `time_ms` within a `period_ms` cycle
///
/// Time runs up over one period and back down over the next, so the result
/// repeats every `2 * period_ms`. Returns `None` for a zero period.
#[allow(clippy::cast_precision_loss)]
pub fn triangle_progress(time_ms: u64, period_ms: u32) -> Option<f32> {
    if period_ms == 0 {
        return None;
    }

    let period = u64::from(period_ms);
    let mut ts = time_ms % (period * 2);
    if ts >= period {
        ts = 2 * period - ts;
    }

    // The reflected value can reach `period` itself, so normalize against
    // `period - 1` and let the curve clamp the small overshoot.
    let span = period.saturating_sub(1).max(1);
    Some(ts as f32 / span as f32)
}

/// Map absolute time onto an eased value in `0..=mult`
///
/// A zero period freezes the animation at 0 without evaluating the curve.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn ease_time(easing: Easing, period_ms: u32, time_ms: u64, mult: u32) -> u32 {
    let Some(progress) = triangle_progress(time_ms, period_ms) else {
        return 0;
    };

    let eased = easing.apply(progress);
    let scaled = libm::roundf(eased * mult as f32);
    (scaled.max(0.0) as u32).min(mult)
}
