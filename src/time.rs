//! Wall clock time as seen by the controller.

/// Hour and minute snapshot read from the clock once per poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midday, the time the original lamp was set to on first boot
    pub const NOON: Self = Self {
        hour: 12,
        minute: 0,
    };

    /// Create a time of day
    ///
    /// Returns `None` if the hour is not in `0..24` or the minute not in `0..60`.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Build a time of day from minutes since midnight, wrapping past 24h
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes % (24 * 60);
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Value shown on a 4-digit display, `HHMM`
    #[allow(clippy::cast_lossless)]
    pub const fn display_number(self) -> u16 {
        self.hour as u16 * 100 + self.minute as u16
    }
}

/// Real-time clock capability
pub trait ClockSource {
    type Error: core::fmt::Debug;

    /// Read the current time
    fn time(&mut self) -> Result<TimeOfDay, Self::Error>;

    /// Overwrite the clock
    fn set_time(&mut self, time: TimeOfDay) -> Result<(), Self::Error>;
}
