use smart_leds::RGB8;

use crate::math8::{lerp8, scale_channel};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Interpolate two RGB colors channel by channel
///
/// # Arguments
/// * `a` - Start color
/// * `b` - End color
/// * `step` - Position in the transition (0 = all a, `steps` = all b)
/// * `steps` - Number of steps in the transition
#[inline]
pub const fn lerp_color(a: Rgb, b: Rgb, step: u32, steps: u32) -> Rgb {
    Rgb {
        r: lerp8(a.r, b.r, step, steps),
        g: lerp8(a.g, b.g, step, steps),
        b: lerp8(a.b, b.b, step, steps),
    }
}

/// Dim a color to the given brightness, channel by channel
#[inline]
pub const fn dim_color(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale_channel(color.r, brightness),
        g: scale_channel(color.g, brightness),
        b: scale_channel(color.b, brightness),
    }
}
