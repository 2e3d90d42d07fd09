use crate::color::Rgb;

/// Color wheel over a 0-255 hue circle.
///
/// Three 85-wide segments, each a linear ramp between two channels:
/// red→green, green→blue, blue→red.
pub const fn wheel(position: u8) -> Rgb {
    match position {
        0..=84 => {
            let step = position * 3;
            Rgb {
                r: 255 - step,
                g: step,
                b: 0,
            }
        }
        85..=169 => {
            let step = (position - 85) * 3;
            Rgb {
                r: 0,
                g: 255 - step,
                b: step,
            }
        }
        _ => {
            let step = (position - 170) * 3;
            Rgb {
                r: step,
                g: 0,
                b: 255 - step,
            }
        }
    }
}
