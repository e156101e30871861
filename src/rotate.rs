//! Rotating the grid pattern around its circumference.
//!
//! Rotation works in grid columns, not chain positions. Each row is read out
//! as `cols` colors through the grid-to-chain table, rotated, and the chain
//! is rebuilt from the first grid cell recorded for every pixel.
//!
//! Rows narrower than the grid repeat pixels across columns, so a one-column
//! shift can round a short row's pixels a whole step forward. Calling
//! `rotate(1)` n times therefore lets short rows run ahead of wide ones.
//! For sequential steps keep a pristine copy and rotate it by `n` in a single
//! call instead (see [`RotationCycle`](crate::RotationCycle)).

use crate::frame::FrameBuffer;
use crate::types::ChainError;

impl FrameBuffer {
    /// Rotates a buffer's pattern by `steps` grid columns.
    ///
    /// Positive steps move colors toward higher columns: after the call,
    /// column `c` shows what column `c - steps` showed before (wrapping
    /// around the row). Steps are reduced modulo the grid width, so a full
    /// turn is a no-op on a single-row chain.
    ///
    /// # Errors
    /// * `InvalidBuffer` - Buffer index out of range
    pub fn rotate(&mut self, steps: isize, buffer: usize) -> Result<(), ChainError> {
        let (mapper, colors, grid) = self.parts_mut(buffer)?;
        let cols = mapper.cols();
        let shift = steps.rem_euclid(cols as isize) as usize;

        grid.clear();
        for row in 0..mapper.rows() {
            let start = grid.len();
            grid.extend(mapper.row_positions(row).iter().map(|&pos| colors[pos]));
            grid[start..].rotate_right(shift);
        }

        for (color, cell) in colors.iter_mut().zip(mapper.primary_cells()) {
            *color = grid[cell.row * cols + cell.col];
        }
        Ok(())
    }
}
