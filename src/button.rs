//! Button input and press/hold detection
//!
//! Buttons are sampled once per poll. [`ButtonTracker`] turns the raw
//! pressed/released level into discrete [`ButtonEvent`]s without blocking:
//! a press is reported on the released -> pressed edge, and a hold is
//! reported once the same press has lasted long enough.

use embassy_time::{Duration, Instant};

/// How long a button has to stay down to count as a hold
pub const HOLD_DURATION: Duration = Duration::from_secs(3);

/// The two buttons on the lamp
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonId {
    /// Green cap, makes the strip brighter
    Increase,
    /// Yellow cap, makes the strip dimmer
    Decrease,
}

/// Manual brightness direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl ButtonId {
    pub const fn direction(self) -> Direction {
        match self {
            Self::Increase => Direction::Increase,
            Self::Decrease => Direction::Decrease,
        }
    }
}

/// Discrete event produced by button polling, consumed once by the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    ShortPress(ButtonId),
    Held(ButtonId, Duration),
}

/// Debounced push button capability
pub trait ButtonInput {
    /// Whether the button is currently held down
    fn is_pressed(&mut self) -> bool;
}

/// Edge and hold detector for a single button
#[derive(Debug, Clone)]
pub struct ButtonTracker {
    id: ButtonId,
    hold_duration: Duration,
    /// Start of the current press, `None` while released
    pressed_since: Option<Instant>,
    /// Whether the current press already produced a hold event
    hold_reported: bool,
}

impl ButtonTracker {
    pub const fn new(id: ButtonId) -> Self {
        Self::with_hold_duration(id, HOLD_DURATION)
    }

    pub const fn with_hold_duration(id: ButtonId, hold_duration: Duration) -> Self {
        Self {
            id,
            hold_duration,
            pressed_since: None,
            hold_reported: false,
        }
    }

    pub const fn id(&self) -> ButtonId {
        self.id
    }

    /// Whether the last sample saw the button down
    pub const fn is_down(&self) -> bool {
        self.pressed_since.is_some()
    }

    /// Feed one sample of the button level
    ///
    /// Returns at most one event per sample.
    pub fn update(&mut self, pressed: bool, now: Instant) -> Option<ButtonEvent> {
        if !pressed {
            self.pressed_since = None;
            self.hold_reported = false;
            return None;
        }

        let Some(since) = self.pressed_since else {
            self.pressed_since = Some(now);
            return Some(ButtonEvent::ShortPress(self.id));
        };

        if self.hold_reported {
            return None;
        }
        let held_for = now.checked_duration_since(since)?;
        if held_for < self.hold_duration {
            return None;
        }
        self.hold_reported = true;
        Some(ButtonEvent::Held(self.id, held_for))
    }

    /// Sample a button and feed the level into the tracker
    pub fn poll<B: ButtonInput>(&mut self, button: &mut B, now: Instant) -> Option<ButtonEvent> {
        let pressed = button.is_pressed();
        self.update(pressed, now)
    }
}
