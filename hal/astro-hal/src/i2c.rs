//! I2C bus for register-mapped sensors
//!
//! The IMU is the only I2C device on the robot. It is driven with single
//! register writes and burst register reads, so that is all the bus
//! offers.

/// Blocking I2C master, addressed by 7-bit device address
pub trait I2cBus {
    type Error;

    /// Write `data` in one transaction; `data[0]` is the register, the rest its value
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Send the register pointer in `write_data`, then fill `read_buf` from it
    ///
    /// Uses a repeated start so the sensor's auto-increment covers a whole
    /// sample (six accelerometer bytes) in one go.
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

/// Bus clock the IMU is run at
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// 400 kHz fast mode
    pub const FAST: Self = Self { frequency: 400_000 };
}
