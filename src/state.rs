//! Animation state and its JSON update protocol
//!
//! [`State`] is the single source of truth for what the strip shows. It is
//! only mutated through [`State::apply_update`] (partial patches guarded by an
//! optimistic revision check) and [`State::cycle_mode`].

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::easing::{Easing, ease_time};

/// Smallest accepted ball count
pub const MIN_BALLS: u8 = 1;
/// Largest accepted ball count; also the size of the ball pool
pub const MAX_BALLS: u8 = 10;

/// Capacity of an encoded state snapshot
pub const SNAPSHOT_CAPACITY: usize = 256;

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_ON: &str = "on";
const MODE_NAME_PULSE: &str = "pulse";
const MODE_NAME_COLORLOOP: &str = "colorloop";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_BALLS: &str = "balls";
const MODE_NAME_KNIGHT_RIDER: &str = "knight-rider";
const MODE_NAME_FIRE: &str = "fire";

/// Animation mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum StateMode {
    #[default]
    Off = 0,
    On = 1,
    Pulse = 2,
    Colorloop = 3,
    Rainbow = 4,
    Balls = 5,
    KnightRider = 6,
    Fire = 7,
}

const MODE_NAMES: [(StateMode, &str); StateMode::COUNT] = [
    (StateMode::Off, MODE_NAME_OFF),
    (StateMode::On, MODE_NAME_ON),
    (StateMode::Pulse, MODE_NAME_PULSE),
    (StateMode::Colorloop, MODE_NAME_COLORLOOP),
    (StateMode::Rainbow, MODE_NAME_RAINBOW),
    (StateMode::Balls, MODE_NAME_BALLS),
    (StateMode::KnightRider, MODE_NAME_KNIGHT_RIDER),
    (StateMode::Fire, MODE_NAME_FIRE),
];

impl StateMode {
    /// Number of modes
    pub const COUNT: usize = 8;

    /// Mode by position in the cycle order; anything out of range is `Off`
    pub const fn from_raw(value: u8) -> Self {
        match value {
            1 => Self::On,
            2 => Self::Pulse,
            3 => Self::Colorloop,
            4 => Self::Rainbow,
            5 => Self::Balls,
            6 => Self::KnightRider,
            7 => Self::Fire,
            _ => Self::Off,
        }
    }

    /// The mode after this one, wrapping back to `Off`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn next(self) -> Self {
        Self::from_raw(((self as u8) + 1) % (Self::COUNT as u8))
    }

    pub fn as_str(self) -> &'static str {
        MODE_NAMES
            .iter()
            .find(|(mode, _)| *mode == self)
            .map(|(_, name)| *name)
            .unwrap_or(MODE_NAME_OFF)
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        MODE_NAMES
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(mode, _)| *mode)
    }
}

/// Reasons a state update is refused. The state is left untouched in every case.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum UpdateError {
    /// Body is not a JSON object of the expected shape
    #[display("malformed state document")]
    Malformed,
    /// Unknown mode or easing name
    #[display("invalid state")]
    InvalidInput,
    /// Submitted revision does not match the current one
    #[display("outdated revision {submitted}, expected {expected}")]
    Outdated { expected: u64, submitted: u64 },
}

/// Partial state update; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateUpdate<'a> {
    pub revision: Option<u64>,
    #[serde(borrow)]
    pub mode: Option<&'a str>,
    pub hue: Option<u8>,
    pub saturation: Option<u8>,
    pub value: Option<u8>,
    #[serde(borrow)]
    pub easing: Option<&'a str>,
    /// Signed on the wire; zero or negative freezes the animation
    pub period: Option<i64>,
    #[serde(rename = "num-balls")]
    pub num_balls: Option<u8>,
    #[serde(rename = "fire-cooling")]
    pub fire_cooling: Option<u8>,
    #[serde(rename = "fire-sparking")]
    pub fire_sparking: Option<u8>,
}

/// Full encoded view of [`State`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub revision: u64,
    pub mode: &'static str,
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
    pub easing: &'static str,
    pub period: u32,
    #[serde(rename = "num-balls")]
    pub num_balls: u8,
    #[serde(rename = "fire-cooling")]
    pub fire_cooling: u8,
    #[serde(rename = "fire-sparking")]
    pub fire_sparking: u8,
}

/// Current animation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    revision: u64,
    pub mode: StateMode,
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
    pub easing: Easing,
    /// Animation period in milliseconds; zero freezes eased values at 0
    pub period: u32,
    pub num_balls: u8,
    pub fire_cooling: u8,
    pub fire_sparking: u8,
}

impl Default for State {
    fn default() -> Self {
        Self {
            revision: 0,
            mode: StateMode::Off,
            hue: 0,
            saturation: 0,
            value: 255,
            easing: Easing::InOutQuad,
            period: 5000,
            num_balls: 1,
            fire_cooling: 40,
            fire_sparking: 80,
        }
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful mutations so far
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a partial update
    ///
    /// Names are validated before the revision check, so an invalid document
    /// is reported as such even when it is also stale.
    pub fn apply_update(&mut self, update: &StateUpdate<'_>) -> Result<(), UpdateError> {
        let mode = match update.mode {
            Some(name) => StateMode::parse_from_str(name).ok_or(UpdateError::InvalidInput)?,
            None => self.mode,
        };
        let easing = match update.easing {
            Some(name) => Easing::parse_from_str(name).ok_or(UpdateError::InvalidInput)?,
            None => self.easing,
        };

        let submitted = update.revision.unwrap_or(self.revision);
        if submitted != self.revision {
            #[cfg(feature = "esp32-log")]
            println!(
                "[State] ignoring outdated revision {} when {} was expected",
                submitted, self.revision
            );
            return Err(UpdateError::Outdated {
                expected: self.revision,
                submitted,
            });
        }

        self.mode = mode;
        self.easing = easing;
        self.hue = update.hue.unwrap_or(self.hue);
        self.saturation = update.saturation.unwrap_or(self.saturation);
        self.value = update.value.unwrap_or(self.value);
        self.period = update.period.map_or(self.period, |period| {
            u32::try_from(period.max(0)).unwrap_or(u32::MAX)
        });
        self.num_balls = update
            .num_balls
            .unwrap_or(self.num_balls)
            .clamp(MIN_BALLS, MAX_BALLS);
        self.fire_cooling = update.fire_cooling.unwrap_or(self.fire_cooling);
        self.fire_sparking = update.fire_sparking.unwrap_or(self.fire_sparking);
        self.revision += 1;

        self.log_state();
        Ok(())
    }

    /// Decode a JSON document and apply it as a partial update
    pub fn apply_json(&mut self, body: &[u8]) -> Result<(), UpdateError> {
        let (update, _) = serde_json_core::from_slice::<StateUpdate<'_>>(body)
            .map_err(|_| UpdateError::Malformed)?;
        self.apply_update(&update)
    }

    /// Advance to the next mode. Always succeeds and bumps the revision.
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        self.revision += 1;
        self.log_state();
    }

    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            revision: self.revision,
            mode: self.mode.as_str(),
            hue: self.hue,
            saturation: self.saturation,
            value: self.value,
            easing: self.easing.as_str(),
            period: self.period,
            num_balls: self.num_balls,
            fire_cooling: self.fire_cooling,
            fire_sparking: self.fire_sparking,
        }
    }

    /// Encode the snapshot as compact JSON
    pub fn to_json(&self) -> Result<heapless::String<SNAPSHOT_CAPACITY>, serde_json_core::ser::Error> {
        serde_json_core::to_string(&self.to_snapshot())
    }

    /// Eased value in `0..=mult` for `time_ms` using this state's curve and period
    pub fn ease_time(&self, time_ms: u64, mult: u32) -> u32 {
        ease_time(self.easing, self.period, time_ms, mult)
    }

    fn log_state(&self) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[State] rev {} mode {} hsv {:02x}{:02x}{:02x} period {}ms balls {} cooling {} sparking {} easing {}",
            self.revision,
            self.mode.as_str(),
            self.hue,
            self.saturation,
            self.value,
            self.period,
            self.num_balls,
            self.fire_cooling,
            self.fire_sparking,
            self.easing.as_str()
        );
    }
}
