//! Time lapse demonstration
//!
//! Sweeps through a list of key hours, fading brightness and color between
//! the time-of-day profiles while a simulated clock runs on the display.
//! Useful to check the whole day of colors on real hardware in under a
//! minute.

use embassy_time::Duration;

use crate::PixelTransport;
use crate::actuator::LightActuator;
use crate::color::{Rgb, lerp_color};
use crate::display::{DisplayDriver, DisplayPresenter};
use crate::math8::lerp8;
use crate::profile::resolve_profile;
use crate::time::{ClockSource, TimeOfDay};

const MINUTES_PER_HOUR: i32 = 60;
const MINUTES_PER_DAY: i32 = 24 * MINUTES_PER_HOUR;

/// Key times of day visited by the default time lapse
pub const DEFAULT_HOURS: [u8; 10] = [5, 6, 7, 9, 12, 16, 18, 19, 21, 23];

/// Time lapse pacing
#[derive(Debug, Clone, Copy)]
pub struct TimeLapseConfig {
    /// Hours to visit, in order
    pub hours: &'static [u8],
    /// Steps per transition between two hours
    pub steps: u32,
    /// Length of one transition
    pub transition: Duration,
    /// Extra wait after reaching each hour
    pub pause: Duration,
}

impl TimeLapseConfig {
    pub const DEFAULT: Self = Self {
        hours: &DEFAULT_HOURS,
        steps: 40,
        transition: Duration::from_secs(4),
        pause: Duration::from_secs(2),
    };
}

impl Default for TimeLapseConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One step of the time lapse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLapseFrame {
    /// Simulated clock time
    pub time: TimeOfDay,
    pub brightness: u8,
    pub color: Rgb,
    /// How long to keep this frame before the next one
    pub hold: Duration,
}

impl TimeLapseFrame {
    /// Push the frame to the hardware
    ///
    /// The clock is set to the simulated time, which is then shown on the
    /// display. Errors are ignored; the next frame overwrites everything.
    pub fn show<C, D, T, const UNITS: usize>(
        &self,
        clock: &mut C,
        display: &mut D,
        actuator: &mut LightActuator<T, UNITS>,
    ) where
        C: ClockSource,
        D: DisplayDriver,
        T: PixelTransport,
    {
        let _ = clock.set_time(self.time);
        let _ = DisplayPresenter::present(display, DisplayPresenter::time(self.time));
        actuator.apply(self.brightness, self.color);
    }
}

/// Iterator over the frames of a time lapse
#[derive(Debug, Clone)]
pub struct TimeLapse {
    config: TimeLapseConfig,
    /// Index of the hour the current transition starts from
    segment: usize,
    step: u32,
}

impl TimeLapse {
    pub const fn new(config: &TimeLapseConfig) -> Self {
        let mut config = *config;
        if config.steps == 0 {
            config.steps = 1;
        }
        Self {
            config,
            segment: 0,
            step: 0,
        }
    }

    /// Total number of frames
    pub const fn frame_count(&self) -> usize {
        let segments = self.config.hours.len().saturating_sub(1);
        segments * (self.config.steps as usize + 1)
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn frame(&self, start_hour: u8, end_hour: u8) -> TimeLapseFrame {
        let steps = self.config.steps;
        let step_hold = self.config.transition / steps;

        let from = resolve_profile(start_hour);
        let to = resolve_profile(end_hour);
        let brightness = lerp8(from.brightness, to.brightness, self.step, steps);
        let color = lerp_color(from.color, to.color, self.step, steps);

        let start_minutes = i32::from(start_hour) * MINUTES_PER_HOUR;
        let span = (i32::from(end_hour) - i32::from(start_hour)) * MINUTES_PER_HOUR;
        let minutes = start_minutes + span * self.step as i32 / steps as i32;
        let time = TimeOfDay::from_minutes(minutes.rem_euclid(MINUTES_PER_DAY) as u32);

        let hold = if self.step == steps {
            step_hold + self.config.pause
        } else {
            step_hold
        };

        TimeLapseFrame {
            time,
            brightness,
            color,
            hold,
        }
    }
}

impl Iterator for TimeLapse {
    type Item = TimeLapseFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let hours = self.config.hours;
        let start_hour = *hours.get(self.segment)?;
        let end_hour = *hours.get(self.segment + 1)?;

        let frame = self.frame(start_hour, end_hour);

        if self.step >= self.config.steps {
            self.step = 0;
            self.segment += 1;
        } else {
            self.step += 1;
        }
        Some(frame)
    }
}
