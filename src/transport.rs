//! Sending buffers to the pixel hardware.
//!
//! Provides the [`Transport`] trait for the byte sink that clocks a frame out
//! to the chain, and [`LedChain`], which binds a [`FrameBuffer`] to one.
//!
//! Serial pixel chips such as the WS2801 latch a frame after roughly 500µs
//! without clock activity. Nothing here enforces that gap; callers must
//! leave at least that long between calls to [`LedChain::update`].

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use crate::frame::FrameBuffer;
use crate::types::{ChainError, Color};

/// Trait for abstracting the byte transport to the pixel chain.
///
/// Implement this for your output hardware (SPI bus, bit-banged GPIO, a
/// recorder in tests). A frame is `3 * pixel_count` bytes, ordered
/// R, G, B for each pixel in chain order.
pub trait Transport {
    /// Error reported by the underlying hardware.
    type Error;

    /// Writes one complete frame.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Errors that can occur while sending a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateError<E> {
    /// The buffer index was invalid; nothing was written.
    Chain(ChainError),

    /// The transport rejected the frame.
    Transport(E),
}

impl<E> From<ChainError> for UpdateError<E> {
    fn from(err: ChainError) -> Self {
        UpdateError::Chain(err)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for UpdateError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UpdateError::Chain(err) => write!(f, "{}", err),
            UpdateError::Transport(err) => write!(f, "transport error: {:?}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for UpdateError<E> {}

/// Truncates each component toward zero into a byte.
///
/// Out-of-range values saturate: above 255 becomes 255, negatives and NaN become 0.
#[inline]
fn color_bytes(color: Color) -> [u8; 3] {
    [color.red as u8, color.green as u8, color.blue as u8]
}

impl FrameBuffer {
    /// The wire encoding of a buffer: R, G, B bytes per pixel in chain order.
    pub fn wire_bytes(&self, buffer: usize) -> Result<impl Iterator<Item = u8> + '_, ChainError> {
        Ok(self.get(buffer)?.iter().flat_map(|&color| color_bytes(color)))
    }
}

/// A frame buffer bound to the transport that displays it.
///
/// Dereferences to its [`FrameBuffer`], so all pixel, fade and rotate
/// operations are available directly on the chain.
pub struct LedChain<T: Transport> {
    frame: FrameBuffer,
    transport: T,
    wire: Vec<u8>,
}

impl<T: Transport> LedChain<T> {
    /// Binds a frame buffer to a transport. Nothing is sent until `update`.
    pub fn new(frame: FrameBuffer, transport: T) -> Self {
        let wire = Vec::with_capacity(frame.pixel_count() * 3);
        Self {
            frame,
            transport,
            wire,
        }
    }

    /// Serializes a buffer and writes it to the transport.
    ///
    /// # Errors
    /// * `Chain(InvalidBuffer)` - Buffer index out of range, nothing sent
    /// * `Transport(e)` - The transport failed
    pub fn update(&mut self, buffer: usize) -> Result<(), UpdateError<T::Error>> {
        self.wire.clear();
        self.wire.extend(self.frame.wire_bytes(buffer)?);

        #[cfg(feature = "defmt")]
        defmt::trace!("sending buffer {} ({} bytes)", buffer, self.wire.len());

        self.transport.write(&self.wire).map_err(UpdateError::Transport)
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Releases the transport, dropping the buffers.
    pub fn release(self) -> T {
        self.transport
    }
}

impl<T: Transport> Deref for LedChain<T> {
    type Target = FrameBuffer;

    fn deref(&self) -> &FrameBuffer {
        &self.frame
    }
}

impl<T: Transport> DerefMut for LedChain<T> {
    fn deref_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }
}
