//! LED strip output
//!
//! Fills every unit of the strip with one color dimmed to the requested
//! brightness. Writes are fire-and-forget: a lost frame is corrected by the
//! next one.

#[cfg(feature = "log")]
use esp_println::println;

use crate::PixelTransport;
use crate::color::{BLACK, Rgb, dim_color};

/// Number of units on the original strip
pub const DEFAULT_UNIT_COUNT: usize = 240;

/// Address of a pixel server running on the same board
pub const DEFAULT_TRANSPORT_ADDRESS: &str = "localhost:7890";

/// Drives the strip through a [`PixelTransport`]
pub struct LightActuator<T: PixelTransport, const UNITS: usize = DEFAULT_UNIT_COUNT> {
    transport: T,
    connected: bool,
    frame: [Rgb; UNITS],
}

impl<T: PixelTransport, const UNITS: usize> LightActuator<T, UNITS> {
    /// Wrap a transport without connecting it
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            connected: false,
            frame: [BLACK; UNITS],
        }
    }

    /// Wrap a transport and try to reach it
    ///
    /// An unreachable transport is only reported; the actuator is usable
    /// either way and keeps writing in case the server shows up later.
    pub fn connect(transport: T, address: &str) -> Self {
        let mut actuator = Self::new(transport);
        actuator.connected = actuator.transport.connect(address);
        #[cfg(feature = "log")]
        if !actuator.connected {
            println!("[LightActuator.connect] WARNING: could not connect to {}", address);
        }
        actuator
    }

    /// Whether the transport was reachable at initialization
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Show `color` at `brightness` on every unit
    pub fn apply(&mut self, brightness: u8, color: Rgb) {
        let dimmed = dim_color(color, brightness);
        #[cfg(feature = "log")]
        println!(
            "[LightActuator.apply] brightness {} color ({}, {}, {})",
            brightness, color.r, color.g, color.b
        );
        self.fill(dimmed);
    }

    /// Turn every unit off
    pub fn off(&mut self) {
        self.fill(BLACK);
    }

    /// The last frame sent to the transport
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    fn fill(&mut self, color: Rgb) {
        self.frame.fill(color);
        if let Err(_err) = self.transport.write_frame(&self.frame) {
            #[cfg(feature = "log")]
            println!("[LightActuator.fill] frame dropped: {:?}", _err);
        }
    }
}
