//! Fading pixels toward a target color.
//!
//! A fade moves each component a fraction `p` of the way from its current
//! value to the target: `new = old + p * (target - old)`. Nothing is clamped,
//! so repeated fades approach the target asymptotically.
//!
//! The proportion is read leniently. Magnitudes below 1 are fractions and
//! anything else is a percentage, so `0.05` and `5` mean the same thing.
//! A negative proportion counts from the target instead of the start:
//! `-0.05` behaves exactly like `0.95`.

use crate::frame::FrameBuffer;
use crate::types::{ChainError, Color, PixelRef};

/// Default fade step, 10% toward the target per call.
pub const DEFAULT_FADE: f32 = 0.1;

/// Turns a caller-supplied proportion into the interpolation fraction.
fn effective_fraction(proportion: f32) -> f32 {
    let p = if proportion.abs() < 1.0 {
        proportion
    } else {
        proportion / 100.0
    };
    if p < 0.0 { 1.0 + p } else { p }
}

#[inline]
fn lerp(from: Color, to: Color, p: f32) -> Color {
    Color::new(
        from.red + p * (to.red - from.red),
        from.green + p * (to.green - from.green),
        from.blue + p * (to.blue - from.blue),
    )
}

impl FrameBuffer {
    /// Fades one pixel toward `target`.
    pub fn fade_pixel(
        &mut self,
        pixel: impl Into<PixelRef>,
        proportion: f32,
        target: Color,
        buffer: usize,
    ) -> Result<(), ChainError> {
        let pos = self.resolve(pixel)?;
        let colors = self.get_mut(buffer)?;
        colors[pos] = lerp(colors[pos], target, effective_fraction(proportion));
        Ok(())
    }

    /// Fades every pixel of a buffer toward `target` in one pass.
    pub fn fade_all(
        &mut self,
        proportion: f32,
        target: Color,
        buffer: usize,
    ) -> Result<(), ChainError> {
        let colors = self.get_mut(buffer)?;
        let p = effective_fraction(proportion);
        for color in colors.iter_mut() {
            *color = lerp(*color, target, p);
        }
        Ok(())
    }
}
