//! Brightness controller
//!
//! Combines the time of day, the ambient light reading and button input
//! into the brightness and color shown on the strip. Two modes:
//!
//! - `Automatic`: brightness follows the time-of-day profile, nudged by the
//!   ambient light sensor.
//! - `ManualOverride`: entered on any button press. The brightness reflects
//!   the button input and the display shows it instead of the time. Left
//!   after one second without input, or by holding a button for three
//!   seconds, which also resets the brightness.

use embassy_time::{Duration, Instant};

#[cfg(feature = "log")]
use esp_println::println;

use crate::PixelTransport;
use crate::actuator::{DEFAULT_UNIT_COUNT, LightActuator};
use crate::button::{ButtonEvent, ButtonId, Direction, HOLD_DURATION};
use crate::color::Rgb;
use crate::math8::offset8;
use crate::profile::{BRIGHTNESS_STEP, compute_auto_adjustment, resolve_profile};

/// Controller mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Automatic,
    ManualOverride,
}

/// Configuration for the brightness controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Brightness change per button press
    pub step: u8,
    /// Brightness before the first update
    pub initial_brightness: u8,
    /// Color before the first update
    pub initial_color: Rgb,
    /// Brightness restored by a long hold
    pub reset_brightness: u8,
    /// Inactivity after which manual override ends
    pub override_timeout: Duration,
    /// Minimum hold that resets to automatic mode
    pub hold_duration: Duration,
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        step: BRIGHTNESS_STEP,
        initial_brightness: 100,
        initial_color: Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
        reset_brightness: 100,
        override_timeout: Duration::from_secs(1),
        hold_duration: HOLD_DURATION,
    };
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything the controller knows about the light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    pub brightness: u8,
    pub color: Rgb,
    pub mode: Mode,
    /// Time of the last button press, `None` before the first one
    pub last_manual_input: Option<Instant>,
}

impl ControllerState {
    pub const fn new(brightness: u8, color: Rgb) -> Self {
        Self {
            brightness,
            color,
            mode: Mode::Automatic,
            last_manual_input: None,
        }
    }
}

/// Adaptive brightness controller, the owner of [`ControllerState`]
pub struct BrightnessController<T: PixelTransport, const UNITS: usize = DEFAULT_UNIT_COUNT> {
    actuator: LightActuator<T, UNITS>,
    config: ControllerConfig,
    state: ControllerState,
}

impl<T: PixelTransport, const UNITS: usize> BrightnessController<T, UNITS> {
    /// Create a controller in automatic mode
    ///
    /// Nothing is written to the strip until the first update.
    pub const fn new(actuator: LightActuator<T, UNITS>, config: &ControllerConfig) -> Self {
        let state = ControllerState::new(config.initial_brightness, config.initial_color);
        Self::with_state(actuator, config, state)
    }

    /// Create a controller resuming from a known state
    pub const fn with_state(
        actuator: LightActuator<T, UNITS>,
        config: &ControllerConfig,
        state: ControllerState,
    ) -> Self {
        Self {
            actuator,
            config: *config,
            state,
        }
    }

    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    pub const fn mode(&self) -> Mode {
        self.state.mode
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub const fn actuator(&self) -> &LightActuator<T, UNITS> {
        &self.actuator
    }

    pub const fn actuator_mut(&mut self) -> &mut LightActuator<T, UNITS> {
        &mut self.actuator
    }

    /// Follow the time-of-day profile, nudged by the ambient light
    ///
    /// The strip is only written when the brightness or color actually
    /// changes. Does nothing during manual override. Returns whether the
    /// strip was written.
    pub fn apply_auto_tick(&mut self, hour: u8, lux: f32) -> bool {
        if self.state.mode == Mode::ManualOverride {
            return false;
        }

        let color = resolve_profile(hour).color;
        let brightness = compute_auto_adjustment(hour, lux);
        if brightness == self.state.brightness && color == self.state.color {
            return false;
        }

        #[cfg(feature = "log")]
        println!(
            "[BrightnessController.apply_auto_tick] hour {} ({}) lux {} brightness {}",
            hour,
            crate::profile::TimeBucket::from_hour(hour).as_str(),
            lux,
            brightness
        );
        self.state.brightness = brightness;
        self.state.color = color;
        self.update_light();
        true
    }

    /// Step the brightness by hand and enter manual override
    pub fn on_manual_press(&mut self, direction: Direction, now: Instant) {
        let step = i16::from(self.config.step);
        let step = match direction {
            Direction::Increase => step,
            Direction::Decrease => -step,
        };
        self.state.brightness = offset8(self.state.brightness, step);
        self.state.mode = Mode::ManualOverride;
        self.state.last_manual_input = Some(now);

        #[cfg(feature = "log")]
        println!(
            "[BrightnessController.on_manual_press] {:?} -> brightness {}",
            direction, self.state.brightness
        );
        self.update_light();
    }

    /// Reset to the default brightness and automatic mode after a long hold
    ///
    /// Holds shorter than the configured duration are ignored. Returns
    /// whether the reset happened.
    pub fn on_hold_detected(&mut self, _button: ButtonId, duration: Duration, now: Instant) -> bool {
        if duration < self.config.hold_duration {
            return false;
        }

        #[cfg(feature = "log")]
        println!(
            "[BrightnessController.on_hold_detected] {:?} held for {} ms, resetting to automatic mode",
            _button,
            duration.as_millis()
        );
        self.state.brightness = self.config.reset_brightness;
        self.state.mode = Mode::Automatic;
        self.state.last_manual_input = Some(now);
        self.update_light();
        true
    }

    /// Dispatch a button event
    pub fn handle_event(&mut self, event: ButtonEvent, now: Instant) {
        match event {
            ButtonEvent::ShortPress(button) => self.on_manual_press(button.direction(), now),
            ButtonEvent::Held(button, duration) => {
                self.on_hold_detected(button, duration, now);
            }
        }
    }

    /// Leave manual override once the input has been idle long enough
    ///
    /// Brightness and color stay as they were. Returns whether the mode
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state.mode != Mode::ManualOverride {
            return false;
        }
        let expired = match self.state.last_manual_input {
            Some(last) => now
                .checked_duration_since(last)
                .is_some_and(|idle| idle > self.config.override_timeout),
            None => true,
        };
        if expired {
            self.state.mode = Mode::Automatic;
        }
        expired
    }

    /// Turn the strip off
    pub fn shutdown(&mut self) {
        self.actuator.off();
    }

    fn update_light(&mut self) {
        self.actuator.apply(self.state.brightness, self.state.color);
    }
}
