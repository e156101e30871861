//! Core types shared by the mapper, the buffers and the pixel operations.

use palette::Srgb;

/// A pixel color on the 0.0-255.0 scale.
///
/// Components are not clamped while stored; out-of-range values only get
/// squeezed into a byte when a frame is serialized.
pub type Color = Srgb<f32>;

/// A cell of the logical grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridPos {
    /// Row index, `0..rows`.
    pub row: usize,

    /// Column index, `0..cols` where `cols` is the widest row's pixel count.
    pub col: usize,
}

impl GridPos {
    /// Creates a grid position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A reference to one pixel, either by its place on the chain or by grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelRef {
    /// Position along the serial chain.
    Chain(usize),

    /// Grid cell, resolved through the mapper's grid-to-chain table.
    Grid(GridPos),
}

impl From<usize> for PixelRef {
    fn from(pos: usize) -> Self {
        PixelRef::Chain(pos)
    }
}

impl From<(usize, usize)> for PixelRef {
    fn from((row, col): (usize, usize)) -> Self {
        PixelRef::Grid(GridPos::new(row, col))
    }
}

impl From<GridPos> for PixelRef {
    fn from(pos: GridPos) -> Self {
        PixelRef::Grid(pos)
    }
}

/// Errors reported by mapper and buffer operations.
///
/// Every operation validates its arguments before touching buffer contents,
/// so an `Err` always means nothing was modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChainError {
    /// Row-count list was empty or held a zero, or the buffer count was zero.
    InvalidConfiguration,

    /// Buffer index out of range.
    InvalidBuffer {
        /// Requested buffer index.
        index: usize,
        /// Number of buffers available.
        count: usize,
    },

    /// Chain position or grid cell out of range.
    InvalidIndex(PixelRef),
}

impl core::fmt::Display for ChainError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChainError::InvalidConfiguration => {
                write!(
                    f,
                    "invalid configuration: need at least one row, one pixel per row and one buffer"
                )
            }
            ChainError::InvalidBuffer { index, count } => {
                write!(f, "buffer {} out of range ({} buffers)", index, count)
            }
            ChainError::InvalidIndex(PixelRef::Chain(pos)) => {
                write!(f, "chain position {} out of range", pos)
            }
            ChainError::InvalidIndex(PixelRef::Grid(pos)) => {
                write!(f, "grid cell ({}, {}) out of range", pos.row, pos.col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChainError {}
