/// Scale an 8-bit channel by a brightness level (0-255 = 0.0-1.0)
///
/// Truncating integer division, so `255` keeps the channel intact and `0`
/// turns it off.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn scale_channel(value: u8, brightness: u8) -> u8 {
    ((value as u16 * brightness as u16) / 255) as u8
}

/// Offset an 8-bit value by a signed step, clamping to `0..=255`
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
pub const fn offset8(value: u8, step: i16) -> u8 {
    let shifted = value as i16 + step;
    if shifted < 0 {
        0
    } else if shifted > 255 {
        255
    } else {
        shifted as u8
    }
}

/// Linear interpolation from `a` to `b` at `step` out of `steps`
///
/// Truncates the exact value; both endpoints are exact. `step` is clamped
/// to `steps`, zero steps yields `b`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn lerp8(a: u8, b: u8, step: u32, steps: u32) -> u8 {
    if steps == 0 || step >= steps {
        return b;
    }
    let a = a as u64;
    let b = b as u64;
    let step = step as u64;
    let steps = steps as u64;
    ((a * (steps - step) + b * step) / steps) as u8
}
