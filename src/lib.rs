#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`GridMapper`**: Bidirectional mapping between chain positions and (row, column) grid cells
//! - **`FrameBuffer`**: A fixed number of color buffers over the chain, sharing one mapper
//! - **`PixelRef`**: Addresses a pixel either by chain position or by grid cell
//! - **`LedChain`**: A frame buffer bound to a `Transport` that clocks frames out to the hardware
//! - **`Transport`**: Trait to implement for your output hardware (SPI, a test recorder, ...)
//! - **`RotationCycle`**: Drift-free sequential rotation using a pristine spare buffer
//!
//! Colors are stored as `Srgb<f32>` on the 0.0-255.0 scale and are never clamped while
//! they live in a buffer. Floats keep low-intensity fades moving smoothly: a pixel at 3.0
//! fading by 10% per frame still shows 1 after ten frames instead of dropping to 0 after
//! three. Components are truncated to `u8` only when a frame is serialized.

extern crate alloc;

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod blend;
pub mod colors;
pub mod cycle;
pub mod frame;
pub mod mapping;
pub mod pixel;
pub mod rotate;
#[cfg(feature = "spi")]
pub mod spi;
pub mod transport;
pub mod types;

pub use blend::DEFAULT_FADE;
pub use colors::{BLUE, GREEN, OFF, RED, WHITE};
pub use cycle::RotationCycle;
pub use frame::FrameBuffer;
pub use mapping::GridMapper;
#[cfg(feature = "spi")]
pub use spi::SpiTransport;
pub use transport::{LedChain, Transport, UpdateError};
pub use types::{ChainError, Color, GridPos, PixelRef};
