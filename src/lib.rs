#![no_std]

pub mod actuator;
pub mod button;
pub mod color;
pub mod controller;
pub mod display;
pub mod event;
pub mod math8;
pub mod poll_loop;
pub mod profile;
pub mod sensor;
pub mod time;
pub mod time_lapse;

pub use actuator::LightActuator;
pub use button::{ButtonEvent, ButtonId, ButtonInput, ButtonTracker, Direction};
pub use controller::{BrightnessController, ControllerConfig, ControllerState, Mode};
pub use display::{DisplayDriver, DisplayFrame, DisplayPresenter};
pub use event::{ButtonEventChannel, ButtonEventReceiver, ButtonEventSender};
pub use poll_loop::{Peripherals, PollConfig, PollLoop, PollResult};
pub use profile::{
    BrightnessProfile, LightThresholds, TimeBucket, compute_auto_adjustment, resolve_profile,
    resolve_thresholds,
};
pub use sensor::LightSensor;
pub use time::{ClockSource, TimeOfDay};
pub use time_lapse::{TimeLapse, TimeLapseConfig, TimeLapseFrame};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Pixel stream transport
///
/// Implement this trait to support different strip back ends, such as a
/// local pixel server or a directly driven strip.
pub trait PixelTransport {
    type Error: core::fmt::Debug;

    /// Check that the transport is reachable at `address`
    fn connect(&mut self, address: &str) -> bool;

    /// Write colors to the LED strip
    fn write_frame(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
