//! Named colors on the 0.0-255.0 scale used by the buffers.
//!
//! Hue/saturation conversions are left to callers; anything that produces
//! an RGB triple can be stored.

use crate::types::Color;

/// All channels off. Default target for fades.
pub const OFF: Color = Color::new(0.0, 0.0, 0.0);

/// Full-power white. Default color for `set_pixel` and `set_all`.
pub const WHITE: Color = Color::new(255.0, 255.0, 255.0);

pub const RED: Color = Color::new(255.0, 0.0, 0.0);
pub const GREEN: Color = Color::new(0.0, 255.0, 0.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 255.0);
