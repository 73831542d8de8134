//! MPU-6050 accelerometer tilt
//!
//! Lean only needs the direction of gravity, so the driver reads the
//! accelerometer and leaves the gyro off. The on-chip low-pass filter
//! smooths out drive vibration.
//!
//! Axes: X forward, Y left, Z up with the board mounted flat. Pitch is
//! positive nose up, roll positive left side up.

use astro_hal::i2c::I2cBus;
use astro_hal::imu::{Attitude, Orientation};
use micromath::F32Ext;

const REG_CONFIG: u8 = 0x1A;
const REG_ACCEL_CONFIG: u8 = 0x1C;
const REG_ACCEL_XOUT_H: u8 = 0x3B;
const REG_PWR_MGMT_1: u8 = 0x6B;
const REG_WHO_AM_I: u8 = 0x75;

const WHO_AM_I_VALUE: u8 = 0x68;

/// Wake up, clock from the X gyro PLL
const PWR_CLOCK_PLL_X: u8 = 0x01;
/// Digital low-pass filter at about 21 Hz
const DLPF_21HZ: u8 = 0x04;
/// +/- 2 g full scale
const ACCEL_FS_2G: u8 = 0x00;

const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// IMU errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuError<E> {
    /// Bus transaction failed
    Bus(E),
    /// WHO_AM_I did not match
    UnknownDevice(u8),
}

impl<E> From<E> for ImuError<E> {
    fn from(e: E) -> Self {
        ImuError::Bus(e)
    }
}

/// MPU-6050 on an I2C bus
pub struct Mpu6050<B> {
    bus: B,
    address: u8,
}

impl<B: I2cBus> Mpu6050<B> {
    pub fn new(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Check the device ID and configure the accelerometer
    pub fn init(&mut self) -> Result<(), ImuError<B::Error>> {
        let mut id = [0u8; 1];
        self.bus.write_read(self.address, &[REG_WHO_AM_I], &mut id)?;
        if id[0] != WHO_AM_I_VALUE {
            return Err(ImuError::UnknownDevice(id[0]));
        }

        self.bus.write(self.address, &[REG_PWR_MGMT_1, PWR_CLOCK_PLL_X])?;
        self.bus.write(self.address, &[REG_CONFIG, DLPF_21HZ])?;
        self.bus.write(self.address, &[REG_ACCEL_CONFIG, ACCEL_FS_2G])?;

        #[cfg(feature = "defmt")]
        defmt::info!("mpu6050: ready at {=u8:#x}", self.address);

        Ok(())
    }

    /// Raw accelerometer counts (x, y, z)
    pub fn read_accel(&mut self) -> Result<[i16; 3], ImuError<B::Error>> {
        let mut buf = [0u8; 6];
        self.bus
            .write_read(self.address, &[REG_ACCEL_XOUT_H], &mut buf)?;
        Ok([
            i16::from_be_bytes([buf[0], buf[1]]),
            i16::from_be_bytes([buf[2], buf[3]]),
            i16::from_be_bytes([buf[4], buf[5]]),
        ])
    }
}

impl<B: I2cBus> Orientation for Mpu6050<B> {
    type Error = ImuError<B::Error>;

    fn read_attitude(&mut self) -> Result<Attitude, Self::Error> {
        let [x, y, z] = self.read_accel()?;
        Ok(tilt(x as f32, y as f32, z as f32))
    }
}

/// Pitch and roll in degrees from a gravity vector
pub fn tilt(x: f32, y: f32, z: f32) -> Attitude {
    let pitch = F32Ext::atan2(x, F32Ext::sqrt(y * y + z * z));
    let roll = F32Ext::atan2(y, z);
    Attitude {
        pitch: pitch * RAD_TO_DEG,
        roll: roll * RAD_TO_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Register-file mock of the sensor
    struct MockBus {
        regs: [u8; 0x80],
        writes: std::vec::Vec<(u8, u8)>,
        fail: bool,
    }

    impl MockBus {
        fn new() -> Self {
            let mut regs = [0u8; 0x80];
            regs[REG_WHO_AM_I as usize] = WHO_AM_I_VALUE;
            Self {
                regs,
                writes: std::vec::Vec::new(),
                fail: false,
            }
        }

        fn set_accel(&mut self, x: i16, y: i16, z: i16) {
            let base = REG_ACCEL_XOUT_H as usize;
            for (i, v) in [x, y, z].into_iter().enumerate() {
                let [hi, lo] = v.to_be_bytes();
                self.regs[base + 2 * i] = hi;
                self.regs[base + 2 * i + 1] = lo;
            }
        }
    }

    impl I2cBus for MockBus {
        type Error = ();

        fn write(&mut self, _address: u8, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.writes.push((data[0], data[1]));
            self.regs[data[0] as usize] = data[1];
            Ok(())
        }

        fn write_read(&mut self, _address: u8, write: &[u8], read: &mut [u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            let start = write[0] as usize;
            read.copy_from_slice(&self.regs[start..start + read.len()]);
            Ok(())
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.5
    }

    #[test]
    fn test_init_configures_device() {
        let mut imu = Mpu6050::new(MockBus::new(), 0x68);
        assert_eq!(imu.init(), Ok(()));
        assert!(imu.bus.writes.contains(&(REG_PWR_MGMT_1, PWR_CLOCK_PLL_X)));
        assert!(imu.bus.writes.contains(&(REG_CONFIG, DLPF_21HZ)));
    }

    #[test]
    fn test_init_rejects_unknown_device() {
        let mut bus = MockBus::new();
        bus.regs[REG_WHO_AM_I as usize] = 0x12;
        let mut imu = Mpu6050::new(bus, 0x68);
        assert_eq!(imu.init(), Err(ImuError::UnknownDevice(0x12)));
    }

    #[test]
    fn test_bus_error() {
        let mut bus = MockBus::new();
        bus.fail = true;
        let mut imu = Mpu6050::new(bus, 0x68);
        assert_eq!(imu.read_attitude(), Err(ImuError::Bus(())));
    }

    #[test]
    fn test_level() {
        let mut bus = MockBus::new();
        bus.set_accel(0, 0, 16384);
        let mut imu = Mpu6050::new(bus, 0x68);
        let attitude = imu.read_attitude().unwrap();
        assert!(close(attitude.pitch, 0.0));
        assert!(close(attitude.roll, 0.0));
    }

    #[test]
    fn test_tilt_angles() {
        // 30 degrees nose up: x = sin 30, z = cos 30
        let attitude = tilt(0.5, 0.0, 0.866);
        assert!(close(attitude.pitch, 30.0));

        // 10 degrees nose down
        let attitude = tilt(-0.1736, 0.0, 0.9848);
        assert!(close(attitude.pitch, -10.0));

        // 20 degrees left side up
        let attitude = tilt(0.0, 0.342, 0.9397);
        assert!(close(attitude.roll, 20.0));
    }
}
