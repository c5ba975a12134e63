//! Time of day lookup tables
//!
//! The day is split into six fixed buckets. Each bucket has a target
//! brightness and color for the strip, and a pair of lux thresholds used to
//! nudge the brightness when the room is darker or brighter than expected.

use crate::color::Rgb;
use crate::math8::offset8;

/// Brightness step applied by automatic nudges and manual presses
pub const BRIGHTNESS_STEP: u8 = 50;

const SUNRISE_START: u8 = 6;
const MORNING_START: u8 = 7;
const MIDDAY_START: u8 = 10;
const GOLDEN_HOUR_START: u8 = 16;
const DUSK_START: u8 = 19;
const NIGHT_START: u8 = 20;

/// Named hour-of-day range
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeBucket {
    /// 06:00 - 07:00
    Sunrise,
    /// 07:00 - 10:00
    Morning,
    /// 10:00 - 16:00
    Midday,
    /// 16:00 - 19:00
    GoldenHour,
    /// 19:00 - 20:00
    Dusk,
    /// 20:00 - 06:00, wrapping over midnight
    Night,
}

/// Target output for a bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrightnessProfile {
    pub brightness: u8,
    pub color: Rgb,
}

/// Ambient light window for a bucket, in lux
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightThresholds {
    /// Readings below this make the strip brighter
    pub too_dark: f32,
    /// Readings above this make the strip dimmer
    pub too_bright: f32,
}

impl TimeBucket {
    pub const ALL: [Self; 6] = [
        Self::Sunrise,
        Self::Morning,
        Self::Midday,
        Self::GoldenHour,
        Self::Dusk,
        Self::Night,
    ];

    /// Find the bucket an hour belongs to
    ///
    /// Every hour maps to exactly one bucket; anything that is not in one of
    /// the daytime ranges is night, including out of range input.
    pub const fn from_hour(hour: u8) -> Self {
        match hour {
            SUNRISE_START..MORNING_START => Self::Sunrise,
            MORNING_START..MIDDAY_START => Self::Morning,
            MIDDAY_START..GOLDEN_HOUR_START => Self::Midday,
            GOLDEN_HOUR_START..DUSK_START => Self::GoldenHour,
            DUSK_START..NIGHT_START => Self::Dusk,
            _ => Self::Night,
        }
    }

    pub const fn profile(self) -> BrightnessProfile {
        match self {
            // warm orange
            Self::Sunrise => profile(100, 255, 100, 0),
            // soft white
            Self::Morning => profile(150, 255, 255, 200),
            // bright white
            Self::Midday => profile(200, 255, 255, 255),
            // golden orange
            Self::GoldenHour => profile(140, 255, 180, 50),
            // soft pinkish dim
            Self::Dusk => profile(80, 150, 100, 100),
            // dim cool blue
            Self::Night => profile(50, 50, 50, 100),
        }
    }

    pub const fn thresholds(self) -> LightThresholds {
        match self {
            Self::Sunrise => thresholds(30.0, 150.0),
            Self::Morning => thresholds(80.0, 250.0),
            Self::Midday => thresholds(100.0, 350.0),
            Self::GoldenHour => thresholds(60.0, 200.0),
            Self::Dusk => thresholds(30.0, 120.0),
            Self::Night => thresholds(10.0, 80.0),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::GoldenHour => "golden_hour",
            Self::Dusk => "dusk",
            Self::Night => "night",
        }
    }
}

const fn profile(brightness: u8, r: u8, g: u8, b: u8) -> BrightnessProfile {
    BrightnessProfile {
        brightness,
        color: Rgb { r, g, b },
    }
}

const fn thresholds(too_dark: f32, too_bright: f32) -> LightThresholds {
    LightThresholds {
        too_dark,
        too_bright,
    }
}

/// Target brightness and color for an hour of the day
pub const fn resolve_profile(hour: u8) -> BrightnessProfile {
    TimeBucket::from_hour(hour).profile()
}

/// Lux thresholds for an hour of the day
pub const fn resolve_thresholds(hour: u8) -> LightThresholds {
    TimeBucket::from_hour(hour).thresholds()
}

/// Brightness for an hour after nudging it by the ambient light reading
///
/// One fixed step up when the room is too dark, one step down when it is too
/// bright. `NaN` readings compare false both ways and leave the target as is.
pub fn compute_auto_adjustment(hour: u8, lux: f32) -> u8 {
    let target = resolve_profile(hour).brightness;
    let limits = resolve_thresholds(hour);
    let step = i16::from(BRIGHTNESS_STEP);

    let adjustment = if lux < limits.too_dark {
        step
    } else if lux > limits.too_bright {
        -step
    } else {
        0
    };

    offset8(target, adjustment)
}
