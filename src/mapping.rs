//! Bidirectional mapping between chain positions and grid cells.
//!
//! The chain is laid out as consecutive rows that may hold different pixel
//! counts. The grid is as wide as the widest row; every narrower row spreads
//! its pixels proportionally over those columns, so a short row shows the
//! same pixel in several neighbouring cells.

use alloc::vec;
use alloc::vec::Vec;

use crate::types::{ChainError, GridPos};

/// Grid-to-chain and chain-to-grid tables, built once from the row counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMapper {
    row_counts: Vec<usize>,
    cols: usize,
    pixel_count: usize,
    /// Row-major, `rows * cols` entries.
    grid_to_chain: Vec<usize>,
    /// For each chain position, every cell that addresses it, in row-major order.
    chain_to_grid: Vec<Vec<GridPos>>,
}

impl GridMapper {
    /// Builds the mapping for rows of the given pixel counts, first row first.
    ///
    /// Column `c` of row `r` maps to pixel
    /// `round(c / cols * row_counts[r]) mod row_counts[r]` within that row,
    /// evaluated in 28-digit decimal arithmetic with halves rounded to even.
    /// The quotient is rounded before the multiply, so near-ties such as
    /// column 1 of a 3-pixel row in a 6-wide grid round up.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - No rows, a row with zero pixels, or a grid
    ///   too wide for 128-bit intermediates
    pub fn new(row_counts: &[usize]) -> Result<Self, ChainError> {
        if row_counts.is_empty() || row_counts.contains(&0) {
            return Err(ChainError::InvalidConfiguration);
        }

        let cols = row_counts.iter().copied().max().unwrap_or(0);
        let pixel_count: usize = row_counts.iter().sum();

        let mut grid_to_chain = Vec::with_capacity(row_counts.len() * cols);
        let mut chain_to_grid = vec![Vec::new(); pixel_count];

        let mut row_start = 0;
        for (row, &count) in row_counts.iter().enumerate() {
            for col in 0..cols {
                let pixel = column_pixel(col, cols, count)
                    .ok_or(ChainError::InvalidConfiguration)?;
                let pos = row_start + pixel % count;
                grid_to_chain.push(pos);
                chain_to_grid[pos].push(GridPos::new(row, col));
            }
            row_start += count;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "grid mapped: {} rows x {} cols over {} pixels",
            row_counts.len(),
            cols,
            pixel_count
        );

        Ok(Self {
            row_counts: row_counts.to_vec(),
            cols,
            pixel_count,
            grid_to_chain,
            chain_to_grid,
        })
    }

    /// Builds the mapping for a plain strip: one row of `pixels` pixels.
    pub fn single_row(pixels: usize) -> Result<Self, ChainError> {
        Self::new(&[pixels])
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.row_counts.len()
    }

    /// Grid width, the pixel count of the widest row.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of pixels on the chain.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Pixel count of each row, as given at construction.
    #[inline]
    pub fn row_counts(&self) -> &[usize] {
        &self.row_counts
    }

    /// Returns the chain position addressed by a grid cell, or `None` if the
    /// cell lies outside the grid.
    #[inline]
    pub fn grid_to_chain(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows() || col >= self.cols {
            return None;
        }
        Some(self.grid_to_chain[row * self.cols + col])
    }

    /// Returns every grid cell that addresses a chain position, or `None` if
    /// the position is past the end of the chain. Never empty for valid positions.
    #[inline]
    pub fn chain_to_grid(&self, pos: usize) -> Option<&[GridPos]> {
        self.chain_to_grid.get(pos).map(Vec::as_slice)
    }

    /// The chain positions of one row in column order (`cols` entries).
    pub(crate) fn row_positions(&self, row: usize) -> &[usize] {
        &self.grid_to_chain[row * self.cols..(row + 1) * self.cols]
    }

    /// The first cell recorded for each chain position, in chain order.
    pub(crate) fn primary_cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        // Non-empty per position: each row's first column maps to the row's first
        // pixel and consecutive columns never skip a pixel.
        self.chain_to_grid.iter().map(|cells| cells[0])
    }
}

/// Significant digits kept by each decimal step of the column mapping.
const PRECISION: u32 = 28;

/// Rounded `col / cols * count`, as a 28-digit half-even decimal context computes it.
///
/// The quotient is rounded to 28 significant digits before the multiply and
/// the product is rounded again, so some exact ties land a hair above or below
/// one half. Grid layouts are defined by this arithmetic, not by the exact
/// rational. `None` if an intermediate overflows `u128`.
fn column_pixel(col: usize, cols: usize, count: usize) -> Option<usize> {
    if col == 0 {
        return Some(0);
    }
    let (col, cols, count) = (col as u128, cols as u128, count as u128);

    // Scale the dividend until the quotient carries PRECISION digits.
    let min_coefficient = 10u128.pow(PRECISION - 1);
    let mut scale = 0;
    let mut dividend = col;
    while dividend / cols < min_coefficient {
        dividend = dividend.checked_mul(10)?;
        scale += 1;
    }
    let quotient = round_half_even(dividend, cols);

    let mut product = quotient.checked_mul(count)?;
    let digits = product.ilog10() + 1;
    if digits > PRECISION {
        let dropped = digits - PRECISION;
        product = round_half_even(product, 10u128.checked_pow(dropped)?);
        if dropped >= scale {
            let whole = product.checked_mul(10u128.checked_pow(dropped - scale)?)?;
            return usize::try_from(whole).ok();
        }
        scale -= dropped;
    }

    usize::try_from(round_half_even(product, 10u128.checked_pow(scale)?)).ok()
}

/// Integer `num / den` rounded to nearest, exact halves to even.
fn round_half_even(num: u128, den: u128) -> u128 {
    let quotient = num / den;
    let twice_rem = 2 * (num % den);
    if twice_rem > den || (twice_rem == den && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
