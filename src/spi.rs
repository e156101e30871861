//! [`Transport`] over an `embedded-hal` SPI bus.
//!
//! WS2801-style chips clock data on SCK and latch after the line idles, so a
//! plain write followed by a flush is a complete frame. Bus setup (clock
//! speed, chip select) stays with the HAL.

use embedded_hal::spi::SpiBus;

use crate::transport::Transport;

/// Sends frames over an SPI bus.
pub struct SpiTransport<B> {
    bus: B,
}

impl<B: SpiBus> SpiTransport<B> {
    /// Wraps a configured SPI bus.
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Returns the bus.
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: SpiBus> Transport for SpiTransport<B> {
    type Error = B::Error;

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(bytes)?;
        self.bus.flush()
    }
}
