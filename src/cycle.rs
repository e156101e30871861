//! Sequential rotation without drift.

use crate::frame::FrameBuffer;
use crate::types::ChainError;

/// Steps a pattern around the grid one column per call without drift.
///
/// Repeated single-column rotations let short rows run ahead of wide ones.
/// The cycle keeps the original pattern in a spare buffer and, for the n-th
/// step, restores it into the working buffer and rotates it by n in one go.
///
/// ```
/// use pixel_grid::{FrameBuffer, GridMapper, RotationCycle, RED};
///
/// let mapper = GridMapper::new(&[6, 12]).unwrap();
/// let mut frame = FrameBuffer::new(mapper, 2).unwrap();
/// frame.set_pixel((1, 0), RED, 0).unwrap();
///
/// let mut cycle = RotationCycle::new(0, 1);
/// cycle.prime(&mut frame).unwrap();
/// for _ in 0..3 {
///     cycle.advance(&mut frame).unwrap();
///     // send buffer 0
/// }
/// assert_eq!(frame.get_pixel((1, 3), 0).unwrap(), RED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotationCycle {
    working: usize,
    spare: usize,
    step: isize,
}

impl RotationCycle {
    /// Creates a cycle that displays from `working` and keeps the pattern in `spare`.
    pub const fn new(working: usize, spare: usize) -> Self {
        Self {
            working,
            spare,
            step: 0,
        }
    }

    /// Saves the working buffer's current pattern and restarts from step zero.
    pub fn prime(&mut self, frame: &mut FrameBuffer) -> Result<(), ChainError> {
        frame.copy_buffer(self.working, self.spare)?;
        self.step = 0;
        Ok(())
    }

    /// Renders the next step into the working buffer.
    ///
    /// Returns the rotation applied, reduced modulo the grid width.
    pub fn advance(&mut self, frame: &mut FrameBuffer) -> Result<isize, ChainError> {
        let cols = frame.mapper().cols() as isize;
        let step = (self.step + 1).rem_euclid(cols);
        frame.copy_buffer(self.spare, self.working)?;
        frame.rotate(step, self.working)?;
        self.step = step;
        Ok(step)
    }

    /// Rotation applied by the most recent `advance`.
    pub fn step(&self) -> isize {
        self.step
    }
}
