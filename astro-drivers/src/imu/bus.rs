//! embedded-hal I2C adapter
//!
//! Lets any blocking `embedded_hal::i2c::I2c` implementation (the chip
//! HALs all provide one) stand in for the astro-hal bus trait.

use astro_hal::i2c::I2cBus;
use embedded_hal::i2c::I2c;

/// Blocking embedded-hal I2C bus
pub struct BlockingI2c<T>(pub T);

impl<T: I2c> I2cBus for BlockingI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.0.write_read(address, write_data, read_buf)
    }
}
