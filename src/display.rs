//! Segment display presentation
//!
//! In automatic mode the display shows the time as `HHMM` with the colon
//! lit. While the brightness is being adjusted by hand it shows the raw
//! brightness value with the colon off.

use crate::controller::{ControllerState, Mode};
use crate::time::TimeOfDay;

/// 4-digit segment display capability
pub trait DisplayDriver {
    type Error: core::fmt::Debug;

    fn show_number(&mut self, value: u16) -> Result<(), Self::Error>;

    fn set_colon_visible(&mut self, visible: bool) -> Result<(), Self::Error>;

    fn clear(&mut self) -> Result<(), Self::Error>;
}

/// What the display should show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayFrame {
    pub number: u16,
    pub colon: bool,
}

/// Stateless renderer for the segment display
pub struct DisplayPresenter;

impl DisplayPresenter {
    /// Pick the frame for the current controller state
    #[allow(clippy::cast_lossless)]
    pub const fn render(state: &ControllerState, time: TimeOfDay) -> DisplayFrame {
        match state.mode {
            Mode::Automatic => Self::time(time),
            Mode::ManualOverride => DisplayFrame {
                number: state.brightness as u16,
                colon: false,
            },
        }
    }

    /// Frame showing the time of day
    pub const fn time(time: TimeOfDay) -> DisplayFrame {
        DisplayFrame {
            number: time.display_number(),
            colon: true,
        }
    }

    /// Write a frame to the display
    ///
    /// Stops at the first driver error; the next poll redraws anyway.
    pub fn present<D: DisplayDriver>(driver: &mut D, frame: DisplayFrame) -> Result<(), D::Error> {
        driver.show_number(frame.number)?;
        driver.set_colon_visible(frame.colon)
    }

    pub fn clear<D: DisplayDriver>(driver: &mut D) -> Result<(), D::Error> {
        driver.clear()
    }
}
