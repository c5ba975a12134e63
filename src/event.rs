//! Bounded queue of button events.
//!
//! Button polling pushes [`ButtonEvent`]s and the poll loop drains them into
//! the controller once per tick, so the controller never runs from inside a
//! button callback. Built on `critical-section` and `heapless::Deque`, so an
//! interrupt handler may produce into it as well.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::button::ButtonEvent;

/// Default number of pending events
pub const DEFAULT_EVENT_QUEUE_SIZE: usize = 8;

/// Error returned when the queue is full, carrying the rejected event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when the queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded queue of button events shared by producers and the poll loop.
pub struct ButtonEventChannel<const SIZE: usize = DEFAULT_EVENT_QUEUE_SIZE> {
    inner: Mutex<RefCell<Deque<ButtonEvent, SIZE>>>,
}

impl<const SIZE: usize> ButtonEventChannel<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> ButtonEventSender<'_, SIZE> {
        ButtonEventSender { channel: self }
    }

    pub const fn receiver(&self) -> ButtonEventReceiver<'_, SIZE> {
        ButtonEventReceiver { channel: self }
    }

    /// Queue an event.
    ///
    /// Returns `Err(TrySendError(event))` if the queue is full.
    pub fn try_send(&self, event: ButtonEvent) -> Result<(), TrySendError<ButtonEvent>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(TrySendError)
        })
    }

    /// Take the oldest pending event.
    pub fn try_receive(&self) -> Result<ButtonEvent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for ButtonEventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for a [`ButtonEventChannel`].
#[derive(Clone, Copy)]
pub struct ButtonEventSender<'a, const SIZE: usize> {
    channel: &'a ButtonEventChannel<SIZE>,
}

impl<const SIZE: usize> ButtonEventSender<'_, SIZE> {
    pub fn try_send(&self, event: ButtonEvent) -> Result<(), TrySendError<ButtonEvent>> {
        self.channel.try_send(event)
    }
}

/// Consumer handle for a [`ButtonEventChannel`].
#[derive(Clone, Copy)]
pub struct ButtonEventReceiver<'a, const SIZE: usize> {
    channel: &'a ButtonEventChannel<SIZE>,
}

impl<const SIZE: usize> ButtonEventReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<ButtonEvent, TryReceiveError> {
        self.channel.try_receive()
    }
}
