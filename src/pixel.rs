//! Reading and writing single pixels by chain position or grid cell.

use crate::frame::FrameBuffer;
use crate::types::{ChainError, Color, PixelRef};

impl FrameBuffer {
    /// Resolves a pixel reference to a chain position.
    ///
    /// Grid cells go through the mapper; chain positions are range-checked.
    ///
    /// # Errors
    /// * `InvalidIndex` - Position past the end of the chain or cell outside the grid
    pub fn resolve(&self, pixel: impl Into<PixelRef>) -> Result<usize, ChainError> {
        let pixel = pixel.into();
        let pos = match pixel {
            PixelRef::Chain(pos) if pos < self.pixel_count() => Some(pos),
            PixelRef::Chain(_) => None,
            PixelRef::Grid(cell) => self.mapper().grid_to_chain(cell.row, cell.col),
        };
        pos.ok_or(ChainError::InvalidIndex(pixel))
    }

    /// Writes one pixel.
    pub fn set_pixel(
        &mut self,
        pixel: impl Into<PixelRef>,
        color: Color,
        buffer: usize,
    ) -> Result<(), ChainError> {
        let pos = self.resolve(pixel)?;
        self.get_mut(buffer)?[pos] = color;
        Ok(())
    }

    /// Reads one pixel.
    pub fn get_pixel(
        &self,
        pixel: impl Into<PixelRef>,
        buffer: usize,
    ) -> Result<Color, ChainError> {
        let pos = self.resolve(pixel)?;
        Ok(self.get(buffer)?[pos])
    }

    /// Copies the color of one pixel onto another within the same buffer.
    ///
    /// Both references are resolved before anything is written, so a bad
    /// destination leaves the buffer untouched. Copying a pixel onto itself is a no-op.
    pub fn copy_pixel(
        &mut self,
        from: impl Into<PixelRef>,
        to: impl Into<PixelRef>,
        buffer: usize,
    ) -> Result<(), ChainError> {
        let source = self.resolve(from)?;
        let dest = self.resolve(to)?;
        let colors = self.get_mut(buffer)?;
        colors[dest] = colors[source];
        Ok(())
    }
}
