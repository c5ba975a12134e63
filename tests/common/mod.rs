#![allow(dead_code)]

use light_therapy::{
    ButtonInput, ClockSource, DisplayDriver, LightSensor, PixelTransport, Rgb, TimeOfDay,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unreachable;

/// Transport that remembers what was written
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub reachable: bool,
    pub failing: bool,
    pub address: Option<String>,
    pub writes: usize,
    pub last_frame: Vec<Rgb>,
}

impl RecordingTransport {
    pub fn reachable() -> Self {
        Self {
            reachable: true,
            ..Self::default()
        }
    }
}

impl PixelTransport for RecordingTransport {
    type Error = Unreachable;

    fn connect(&mut self, address: &str) -> bool {
        self.address = Some(address.to_owned());
        self.reachable
    }

    fn write_frame(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.writes += 1;
        if self.failing {
            return Err(Unreachable);
        }
        self.last_frame = colors.to_vec();
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeClock {
    pub time: TimeOfDay,
    pub failing: bool,
    pub set_calls: usize,
}

impl FakeClock {
    pub fn at(hour: u8, minute: u8) -> Self {
        Self {
            time: TimeOfDay::new(hour, minute).unwrap(),
            failing: false,
            set_calls: 0,
        }
    }
}

impl ClockSource for FakeClock {
    type Error = Unreachable;

    fn time(&mut self) -> Result<TimeOfDay, Self::Error> {
        if self.failing {
            return Err(Unreachable);
        }
        Ok(self.time)
    }

    fn set_time(&mut self, time: TimeOfDay) -> Result<(), Self::Error> {
        if self.failing {
            return Err(Unreachable);
        }
        self.set_calls += 1;
        self.time = time;
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeSensor {
    pub lux: f32,
    pub failing: bool,
}

impl FakeSensor {
    pub fn reading(lux: f32) -> Self {
        Self {
            lux,
            failing: false,
        }
    }
}

impl LightSensor for FakeSensor {
    type Error = Unreachable;

    fn lux(&mut self) -> Result<f32, Self::Error> {
        if self.failing {
            return Err(Unreachable);
        }
        Ok(self.lux)
    }
}

#[derive(Debug, Default)]
pub struct FakeButton {
    pub pressed: bool,
}

impl ButtonInput for FakeButton {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

#[derive(Debug, Default)]
pub struct FakeDisplay {
    pub number: Option<u16>,
    pub colon: bool,
    pub clears: usize,
    pub failing: bool,
}

impl DisplayDriver for FakeDisplay {
    type Error = Unreachable;

    fn show_number(&mut self, value: u16) -> Result<(), Self::Error> {
        if self.failing {
            return Err(Unreachable);
        }
        self.number = Some(value);
        Ok(())
    }

    fn set_colon_visible(&mut self, visible: bool) -> Result<(), Self::Error> {
        if self.failing {
            return Err(Unreachable);
        }
        self.colon = visible;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        if self.failing {
            return Err(Unreachable);
        }
        self.number = None;
        self.colon = false;
        self.clears += 1;
        Ok(())
    }
}
