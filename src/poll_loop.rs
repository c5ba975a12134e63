//! Fixed period polling loop.
//!
//! Portable pacing without async/await or platform specific timers: the
//! caller sleeps for the returned duration between ticks.

use embassy_time::{Duration, Instant};

#[cfg(feature = "log")]
use esp_println::println;

use crate::PixelTransport;
use crate::button::{ButtonEvent, ButtonId, ButtonInput, ButtonTracker};
use crate::controller::BrightnessController;
use crate::display::{DisplayDriver, DisplayPresenter};
use crate::event::{ButtonEventChannel, ButtonEventReceiver, ButtonEventSender};
use crate::sensor::LightSensor;
use crate::time::{ClockSource, TimeOfDay};

/// Default poll period
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(1);

/// Configuration for the polling loop
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Time between polls
    pub period: Duration,
    /// Time written to the clock on start, if any
    pub initial_time: Option<TimeOfDay>,
}

impl PollConfig {
    pub const DEFAULT: Self = Self {
        period: DEFAULT_POLL_PERIOD,
        initial_time: None,
    };
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Input and display peripherals driven by the loop
pub struct Peripherals<C, S, B, D> {
    pub clock: C,
    pub sensor: S,
    pub increase: B,
    pub decrease: B,
    pub display: D,
}

/// Result of a poll
#[derive(Debug, Clone, Copy)]
pub struct PollResult {
    /// The deadline for the next poll.
    pub next_deadline: Instant,
    /// How long to wait until the next poll (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// The lamp main loop
///
/// Each tick reads the clock and the light sensor, lets the controller
/// adapt, turns button samples into events, feeds them to the controller,
/// expires manual override and redraws the display. Peripheral errors are
/// skipped; the next tick reads everything again.
pub struct PollLoop<'a, C, S, B, D, T, const UNITS: usize, const EVENTS: usize>
where
    T: PixelTransport,
{
    peripherals: Peripherals<C, S, B, D>,
    controller: BrightnessController<T, UNITS>,
    increase: ButtonTracker,
    decrease: ButtonTracker,
    events_in: ButtonEventSender<'a, EVENTS>,
    events_out: ButtonEventReceiver<'a, EVENTS>,
    last_time: Option<TimeOfDay>,
    config: PollConfig,
    next_poll: Instant,
}

impl<'a, C, S, B, D, T, const UNITS: usize, const EVENTS: usize>
    PollLoop<'a, C, S, B, D, T, UNITS, EVENTS>
where
    C: ClockSource,
    S: LightSensor,
    B: ButtonInput,
    D: DisplayDriver,
    T: PixelTransport,
{
    pub fn new(
        peripherals: Peripherals<C, S, B, D>,
        controller: BrightnessController<T, UNITS>,
        events: &'a ButtonEventChannel<EVENTS>,
        config: &PollConfig,
    ) -> Self {
        let hold_duration = controller.config().hold_duration;
        Self {
            peripherals,
            controller,
            increase: ButtonTracker::with_hold_duration(ButtonId::Increase, hold_duration),
            decrease: ButtonTracker::with_hold_duration(ButtonId::Decrease, hold_duration),
            events_in: events.sender(),
            events_out: events.receiver(),
            last_time: None,
            config: *config,
            next_poll: Instant::from_millis(0),
        }
    }

    /// Prepare the peripherals before the first tick
    ///
    /// Writes the configured start time to the clock. Returns whether the
    /// strip transport was reachable.
    pub fn start(&mut self) -> bool {
        if let Some(time) = self.config.initial_time {
            match self.peripherals.clock.set_time(time) {
                Ok(()) => {
                    #[cfg(feature = "log")]
                    println!(
                        "[PollLoop.start] clock set to {:02}:{:02}",
                        time.hour(),
                        time.minute()
                    );
                }
                Err(_err) => {
                    #[cfg(feature = "log")]
                    println!("[PollLoop.start] WARNING: could not set clock: {:?}", _err);
                }
            }
        }

        let connected = self.controller.actuator().is_connected();
        #[cfg(feature = "log")]
        if !connected {
            println!("[PollLoop.start] WARNING: strip transport unreachable, running degraded");
        }
        connected
    }

    /// Run one poll and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> PollResult {
        // If we've fallen too far behind, reset to now instead of bursting
        let max_drift = self.config.period.as_millis() * 2;
        if now.as_millis() > self.next_poll.as_millis() + max_drift {
            self.next_poll = now;
        }

        self.poll(now);

        self.next_poll += self.config.period;

        let sleep_duration = if self.next_poll.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_poll.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        PollResult {
            next_deadline: self.next_poll,
            sleep_duration,
        }
    }

    /// Best effort cleanup: strip off, display cleared
    pub fn shutdown(&mut self) {
        #[cfg(feature = "log")]
        println!("[PollLoop.shutdown] cleaning up");
        self.controller.shutdown();
        let _ = DisplayPresenter::clear(&mut self.peripherals.display);
    }

    pub const fn controller(&self) -> &BrightnessController<T, UNITS> {
        &self.controller
    }

    pub const fn controller_mut(&mut self) -> &mut BrightnessController<T, UNITS> {
        &mut self.controller
    }

    pub const fn peripherals(&self) -> &Peripherals<C, S, B, D> {
        &self.peripherals
    }

    pub const fn peripherals_mut(&mut self) -> &mut Peripherals<C, S, B, D> {
        &mut self.peripherals
    }

    fn poll(&mut self, now: Instant) {
        let time = self.peripherals.clock.time().ok();
        if time.is_some() {
            self.last_time = time;
        }

        if let Some(time) = time {
            if let Ok(lux) = self.peripherals.sensor.lux() {
                self.controller.apply_auto_tick(time.hour(), lux);
            }
        }

        self.poll_buttons(now);
        self.process_events(now);
        self.controller.tick(now);
        self.refresh_display();
    }

    fn poll_buttons(&mut self, now: Instant) {
        let increase = self.increase.poll(&mut self.peripherals.increase, now);
        let mut decrease = self.decrease.poll(&mut self.peripherals.decrease, now);
        // Increase wins when both buttons go down in the same poll
        if matches!(increase, Some(ButtonEvent::ShortPress(_)))
            && matches!(decrease, Some(ButtonEvent::ShortPress(_)))
        {
            decrease = None;
        }
        let pressed = [increase, decrease];
        for event in pressed.into_iter().flatten() {
            if let Err(_rejected) = self.events_in.try_send(event) {
                #[cfg(feature = "log")]
                println!("[PollLoop.poll_buttons] event queue full, dropping {:?}", _rejected.0);
            }
        }
    }

    /// Drain all queued events into the controller
    fn process_events(&mut self, now: Instant) {
        while let Ok(event) = self.events_out.try_receive() {
            self.controller.handle_event(event, now);
        }
    }

    fn refresh_display(&mut self) {
        let Some(time) = self.last_time else {
            return;
        };
        let frame = DisplayPresenter::render(self.controller.state(), time);
        let _ = DisplayPresenter::present(&mut self.peripherals.display, frame);
    }
}
