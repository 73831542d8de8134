//! Peripheral adapters
//!
//! Implements the astro-hal traits for the RP2040 peripherals the climber
//! is wired to, and names the concrete driver types the tasks work with.

use core::cell::RefCell;

use defmt::*;
use embassy_rp::adc::{self, Adc, Blocking as AdcBlocking, Channel};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm, PwmOutput};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal::pwm::SetDutyCycle;
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use astro_core::traits::LimitSensor;
use astro_drivers::imu::{BlockingI2c, Mpu6050};
use astro_drivers::motor::{MotorPair, PwmMotor};
use astro_drivers::sensor::AnalogFloorSensor;
use astro_drivers::{ClimberSubsystem, TankDrive};
use astro_hal::pwm::SERVO_FRAME_US;
use astro_hal::{AnalogInput, PwmChannel};

/// ADC reference voltage
const ADC_VREF: f32 = 3.3;

/// 12-bit ADC full scale
const ADC_FULL_SCALE: f32 = 4096.0;

/// PWM slice divider: 125 MHz system clock down to 1 MHz (1 count per us)
const PWM_DIVIDER: u8 = 125;

pub type ServoPin = PwmOutput<'static>;
pub type Motor = PwmMotor<ServoOutput<ServoPin>>;
pub type FloorInput = AnalogFloorSensor<AdcInput>;
pub type Imu = Mpu6050<BlockingI2c<I2c<'static, I2C0, i2c::Blocking>>>;
pub type RobotClimber =
    ClimberSubsystem<Motor, IrqLimitSwitch, FloorInput, MotorPair<Motor, Motor>, Imu>;
pub type RobotDrive = TankDrive<Motor, Motor>;

/// ADC shared by both floor sensors
pub type SharedAdc = Mutex<CriticalSectionRawMutex, RefCell<Adc<'static, AdcBlocking>>>;

/// PWM slice configuration for 50 Hz motor controller frames, outputs at neutral
pub fn servo_pwm_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.divider = PWM_DIVIDER.into();
    config.top = (SERVO_FRAME_US - 1) as u16;
    config.compare_a = 0;
    config.compare_b = 0;
    config
}

/// Split a slice configured with `servo_pwm_config` into its two outputs
///
/// None if the slice was not created with both A and B pins.
pub fn servo_pair(pwm: Pwm<'static>) -> Option<(ServoOutput<ServoPin>, ServoOutput<ServoPin>)> {
    match pwm.split() {
        (Some(a), Some(b)) => Some((ServoOutput::new(a), ServoOutput::new(b))),
        _ => None,
    }
}

/// Motor controller signal on a duty-cycle output whose period is one servo frame
pub struct ServoOutput<O> {
    output: O,
    width_us: u16,
}

impl<O: SetDutyCycle> ServoOutput<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            width_us: 0,
        }
    }
}

impl<O: SetDutyCycle> PwmChannel for ServoOutput<O> {
    fn set_pulse_width_us(&mut self, width_us: u16) {
        let max = self.output.max_duty_cycle() as u32;
        let duty = (width_us as u32 * max / SERVO_FRAME_US).min(max) as u16;
        match self.output.set_duty_cycle(duty) {
            Ok(()) => self.width_us = width_us,
            Err(_) => warn!("pwm: failed to set duty {}", duty),
        }
    }

    fn pulse_width_us(&self) -> u16 {
        self.width_us
    }
}

/// One ADC channel read through the shared converter
pub struct AdcInput {
    adc: &'static SharedAdc,
    channel: Channel<'static>,
}

impl AdcInput {
    pub fn new(adc: &'static SharedAdc, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for AdcInput {
    type Error = adc::Error;

    fn read_voltage(&mut self) -> Result<f32, adc::Error> {
        let channel = &mut self.channel;
        let raw = self.adc.lock(|adc| adc.borrow_mut().blocking_read(channel))?;
        Ok(raw as f32 * ADC_VREF / ADC_FULL_SCALE)
    }
}

/// Limit switch level and trip count, written from an edge interrupt task
pub struct SwitchState {
    level: AtomicBool,
    count: AtomicU32,
}

impl SwitchState {
    pub const fn new() -> Self {
        Self {
            level: AtomicBool::new(false),
            count: AtomicU32::new(0),
        }
    }

    /// Set the power-on level without counting it
    pub fn prime(&self, tripped: bool) {
        self.level.store(tripped, Ordering::Release);
    }

    /// Record a level seen after an edge
    pub fn record(&self, tripped: bool) {
        let was = self.level.swap(tripped, Ordering::AcqRel);
        if tripped && !was {
            self.count.fetch_add(1, Ordering::AcqRel);
        }
    }
}

/// Limit switch counted by an edge task
///
/// Trips shorter than a control tick are still counted, which the polled
/// switch would miss.
#[derive(Clone, Copy)]
pub struct IrqLimitSwitch {
    state: &'static SwitchState,
}

impl IrqLimitSwitch {
    pub fn new(state: &'static SwitchState) -> Self {
        Self { state }
    }
}

impl LimitSensor for IrqLimitSwitch {
    fn read(&self) -> bool {
        self.state.level.load(Ordering::Acquire)
    }

    fn trip_count(&self) -> u32 {
        self.state.count.load(Ordering::Acquire)
    }
}
