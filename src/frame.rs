//! Color buffers over the pixel chain.
//!
//! Provides [`FrameBuffer`], which owns a fixed number of equally sized
//! buffers that all share one [`GridMapper`]. Pixel access, fading and
//! rotation are implemented on top of it in their own modules.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::colors::OFF;
use crate::mapping::GridMapper;
use crate::types::{ChainError, Color};

/// A fixed set of color buffers, each indexed by chain position.
///
/// Buffers are referenced by index. Their length is the mapper's pixel count
/// and never changes; only their contents do. All buffers start switched off.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    mapper: GridMapper,
    buffer_count: usize,
    /// All buffers back to back, `buffer_count * pixel_count` colors.
    colors: Vec<Color>,
    /// Grid-shaped working area reused by `rotate`.
    scratch: Vec<Color>,
}

impl FrameBuffer {
    /// Creates `buffer_count` buffers over the chain described by `mapper`.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - `buffer_count` is zero
    pub fn new(mapper: GridMapper, buffer_count: usize) -> Result<Self, ChainError> {
        if buffer_count == 0 {
            return Err(ChainError::InvalidConfiguration);
        }

        let colors = vec![OFF; buffer_count * mapper.pixel_count()];
        Ok(Self {
            mapper,
            buffer_count,
            colors,
            scratch: Vec::new(),
        })
    }

    /// Creates a frame buffer with a single buffer.
    pub fn with_default_buffers(mapper: GridMapper) -> Self {
        let colors = vec![OFF; mapper.pixel_count()];
        Self {
            mapper,
            buffer_count: 1,
            colors,
            scratch: Vec::new(),
        }
    }

    /// The mapping shared by all buffers.
    #[inline]
    pub fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    /// Number of buffers.
    #[inline]
    pub fn buffer_count(&self) -> usize {
        self.buffer_count
    }

    /// Number of pixels in each buffer.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.mapper.pixel_count()
    }

    /// Read-only view of one buffer.
    pub fn get(&self, buffer: usize) -> Result<&[Color], ChainError> {
        let range = self.buffer_range(buffer)?;
        Ok(&self.colors[range])
    }

    /// Mutable view of one buffer.
    pub fn get_mut(&mut self, buffer: usize) -> Result<&mut [Color], ChainError> {
        let range = self.buffer_range(buffer)?;
        Ok(&mut self.colors[range])
    }

    /// Overwrites the whole of buffer `to` with the contents of buffer `from`.
    ///
    /// The copy is by value: later changes to either buffer leave the other untouched.
    pub fn copy_buffer(&mut self, from: usize, to: usize) -> Result<(), ChainError> {
        let source = self.buffer_range(from)?;
        let dest = self.buffer_range(to)?;
        if from != to {
            self.colors.copy_within(source, dest.start);
        }
        Ok(())
    }

    /// Sets every pixel of a buffer to the same color.
    pub fn set_all(&mut self, color: Color, buffer: usize) -> Result<(), ChainError> {
        self.get_mut(buffer)?.fill(color);
        Ok(())
    }

    /// Validates a buffer index and returns its slot in the backing storage.
    pub(crate) fn buffer_range(&self, buffer: usize) -> Result<Range<usize>, ChainError> {
        if buffer >= self.buffer_count {
            return Err(ChainError::InvalidBuffer {
                index: buffer,
                count: self.buffer_count,
            });
        }
        let len = self.mapper.pixel_count();
        Ok(buffer * len..(buffer + 1) * len)
    }

    /// Splits borrows so a buffer can be rewritten while the mapper is read.
    pub(crate) fn parts_mut(
        &mut self,
        buffer: usize,
    ) -> Result<(&GridMapper, &mut [Color], &mut Vec<Color>), ChainError> {
        let range = self.buffer_range(buffer)?;
        Ok((&self.mapper, &mut self.colors[range], &mut self.scratch))
    }
}
