//! Astro - Climber Firmware
//!
//! Firmware binary for the RP2040 controller on the Astro robot. Wires the
//! climber, drive train and IMU to their peripherals and spawns the tick,
//! climb, limit switch and start button tasks.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{Config as I2cBusConfig, I2c};
use embassy_rp::pwm::Pwm;
use embassy_sync::blocking_mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use astro_core::config::{PinConfig, RobotHwConfig};
use astro_core::traits::LegId;
use astro_drivers::imu::{BlockingI2c, Mpu6050};
use astro_drivers::motor::{MotorPair, PwmMotor};
use astro_drivers::sensor::AnalogFloorSensor;
use astro_drivers::{ClimberSubsystem, DriveConfig, LeanEstimator, Leg, TankDrive};
use astro_hal::i2c::I2cConfig;

use crate::hw::{
    servo_pair, servo_pwm_config, AdcInput, IrqLimitSwitch, RobotClimber, RobotDrive, SharedAdc,
    SwitchState,
};

mod channels;
mod hw;
mod tasks;

static ADC: StaticCell<SharedAdc> = StaticCell::new();

static FRONT_EXTENDED: SwitchState = SwitchState::new();
static FRONT_RETRACTED: SwitchState = SwitchState::new();
static BACK_EXTENDED: SwitchState = SwitchState::new();
static BACK_RETRACTED: SwitchState = SwitchState::new();

fn robot_config() -> RobotHwConfig {
    if cfg!(feature = "practice") {
        RobotHwConfig::practice()
    } else {
        RobotHwConfig::competition()
    }
}

fn pull(pin: &PinConfig) -> Pull {
    if pin.pull_up {
        Pull::Up
    } else {
        Pull::None
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Astro firmware starting...");

    let p = embassy_rp::init(Default::default());
    let config = robot_config();
    info!("Hardware map: {}", config);

    // Pin numbers below follow RobotHwConfig::default(); polarity, inversion
    // and thresholds come from `config`.

    // Leg and climb wheel motor controllers (slice 7: legs, slice 0: wheels)
    let legs = servo_pair(Pwm::new_output_ab(
        p.PWM_SLICE7,
        p.PIN_14,
        p.PIN_15,
        servo_pwm_config(),
    ));
    let wheels = servo_pair(Pwm::new_output_ab(
        p.PWM_SLICE0,
        p.PIN_16,
        p.PIN_17,
        servo_pwm_config(),
    ));

    // Drive motor controllers (slice 5); TankDrive applies the inversion
    let sides = servo_pair(Pwm::new_output_ab(
        p.PWM_SLICE5,
        p.PIN_10,
        p.PIN_11,
        servo_pwm_config(),
    ));
    let (
        Some((front_servo, back_servo)),
        Some((leader_servo, follower_servo)),
        Some((left_servo, right_servo)),
    ) = (legs, wheels, sides)
    else {
        error!("PWM outputs unavailable, motors left unpowered");
        return;
    };
    let drive: RobotDrive = TankDrive::new(
        PwmMotor::new(left_servo, false),
        PwmMotor::new(right_servo, false),
        DriveConfig::from(&config.drive),
    );
    info!("Drive initialized");

    // Floor sensors share the ADC
    let adc = ADC.init(Mutex::new(RefCell::new(Adc::new_blocking(
        p.ADC,
        AdcConfig::default(),
    ))));
    let front_floor = AnalogFloorSensor::new(
        AdcInput::new(adc, Channel::new_pin(p.PIN_26, Pull::None)),
        config.floor_threshold,
    );
    let back_floor = AnalogFloorSensor::new(
        AdcInput::new(adc, Channel::new_pin(p.PIN_27, Pull::None)),
        config.floor_threshold,
    );

    // Limit switches, counted by the edge tasks
    let front = &config.front_leg;
    let back = &config.back_leg;
    let front_extended = Input::new(p.PIN_7, pull(&front.extended));
    let front_retracted = Input::new(p.PIN_8, pull(&front.retracted));
    let back_extended = Input::new(p.PIN_9, pull(&back.extended));
    let back_retracted = Input::new(p.PIN_6, pull(&back.retracted));

    // IMU
    let mut i2c_config = I2cBusConfig::default();
    i2c_config.frequency = I2cConfig::FAST.frequency;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let mut imu = Mpu6050::new(BlockingI2c(i2c), config.imu.address);
    match imu.init() {
        Ok(()) => info!("IMU initialized at {=u8:#x}", config.imu.address),
        Err(_) => warn!("IMU init failed, lean will read stale"),
    }

    let climber: RobotClimber = ClimberSubsystem::new(
        Leg::new(
            LegId::Front,
            PwmMotor::new(front_servo, front.motor.inverted),
            IrqLimitSwitch::new(&FRONT_EXTENDED),
            IrqLimitSwitch::new(&FRONT_RETRACTED),
            front_floor,
        ),
        Leg::new(
            LegId::Back,
            PwmMotor::new(back_servo, back.motor.inverted),
            IrqLimitSwitch::new(&BACK_EXTENDED),
            IrqLimitSwitch::new(&BACK_RETRACTED),
            back_floor,
        ),
        MotorPair::new(
            PwmMotor::new(leader_servo, config.wheel_leader.inverted),
            PwmMotor::new(follower_servo, config.wheel_follower.inverted),
        ),
        LeanEstimator::from_config(imu, &config.imu),
    );
    info!("Climber initialized");

    let button = Input::new(p.PIN_2, pull(&config.start_button));

    spawner
        .spawn(tasks::limit_task(
            "front extended",
            front_extended,
            front.extended.inverted,
            &FRONT_EXTENDED,
        ))
        .unwrap();
    spawner
        .spawn(tasks::limit_task(
            "front retracted",
            front_retracted,
            front.retracted.inverted,
            &FRONT_RETRACTED,
        ))
        .unwrap();
    spawner
        .spawn(tasks::limit_task(
            "back extended",
            back_extended,
            back.extended.inverted,
            &BACK_EXTENDED,
        ))
        .unwrap();
    spawner
        .spawn(tasks::limit_task(
            "back retracted",
            back_retracted,
            back.retracted.inverted,
            &BACK_RETRACTED,
        ))
        .unwrap();
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::climb_task(climber, drive)).unwrap();
    spawner
        .spawn(tasks::button_task(button, config.start_button.inverted))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
