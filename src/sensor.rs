/// Ambient light sensor capability
pub trait LightSensor {
    type Error: core::fmt::Debug;

    /// Read the ambient illuminance in lux
    fn lux(&mut self) -> Result<f32, Self::Error>;
}
