//! Climber subsystem
//!
//! Owns both legs, the climb wheels and the lean estimator. `periodic` runs
//! at the top of every control tick, before the climb sequence: every
//! sensor is sampled exactly once, so all decisions in a tick see the same
//! readings.

use astro_core::config::KEY_DEBUG;
use astro_core::traits::{
    clamp_power, Climber, FloorSensor, KeyValueStore, LeanSource, LegActuator, LimitSensor,
    PowerOutput,
};
use astro_hal::imu::Orientation;

use crate::lean::LeanEstimator;
use crate::leg::Leg;

/// Telemetry is published every this many ticks
pub const TELEMETRY_PERIOD: u32 = 10;

/// Telemetry key for the commanded climb wheel output
///
/// Kept apart from the wheel power tunable, which the drive steps read back.
pub const KEY_WHEEL_OUTPUT: &str = "Climb Wheel Output";

pub struct ClimberSubsystem<M, L, F, W, I> {
    front: Leg<M, L, F>,
    back: Leg<M, L, F>,
    wheels: W,
    lean: LeanEstimator<I>,
    ticks: u32,
}

impl<M, L, F, W, I> ClimberSubsystem<M, L, F, W, I>
where
    M: PowerOutput,
    L: LimitSensor,
    F: FloorSensor,
    W: PowerOutput,
    I: Orientation,
{
    pub fn new(front: Leg<M, L, F>, back: Leg<M, L, F>, wheels: W, lean: LeanEstimator<I>) -> Self {
        let mut climber = Self {
            front,
            back,
            wheels,
            lean,
            ticks: 0,
        };
        climber.stop_all();
        climber
    }

    /// Sample all sensors, then publish telemetry every `TELEMETRY_PERIOD` ticks
    pub fn periodic<S: KeyValueStore>(&mut self, store: &mut S) {
        self.front.update();
        self.back.update();
        self.lean.update();

        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % TELEMETRY_PERIOD == 0 {
            self.publish(store);
        }
    }

    /// Write the climber state to the store
    pub fn publish<S: KeyValueStore>(&self, store: &mut S) {
        let debug = store.boolean_or(KEY_DEBUG, false);
        self.front.publish(store, debug);
        self.back.publish(store, debug);
        let _ = store.put_number("Lean", self.lean.lean());
        let _ = store.put_number(KEY_WHEEL_OUTPUT, self.wheels.power());
        let _ = store.put_boolean("IMU Stale", self.lean.is_stale());
    }

    /// Take the current attitude as level (once per session)
    pub fn zero_lean(&mut self) {
        self.lean.zero();

        #[cfg(feature = "defmt")]
        defmt::info!("climber: lean zeroed at {}", self.lean.raw());
    }

    pub fn lean_estimator(&self) -> &LeanEstimator<I> {
        &self.lean
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

impl<M, L, F, W, I> Climber for ClimberSubsystem<M, L, F, W, I>
where
    M: PowerOutput,
    L: LimitSensor,
    F: FloorSensor,
    W: PowerOutput,
    I: Orientation,
{
    type Leg = Leg<M, L, F>;

    fn front_leg(&self) -> &Self::Leg {
        &self.front
    }

    fn front_leg_mut(&mut self) -> &mut Self::Leg {
        &mut self.front
    }

    fn back_leg(&self) -> &Self::Leg {
        &self.back
    }

    fn back_leg_mut(&mut self) -> &mut Self::Leg {
        &mut self.back
    }

    fn set_wheel_power(&mut self, power: f32) {
        self.wheels.set_power(clamp_power(power));
    }

    fn wheel_power(&self) -> f32 {
        self.wheels.power()
    }

    fn lean(&self) -> f32 {
        self.lean.lean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lean::tests::MockImu;
    use crate::leg::tests::{mock_leg, MockFloor, MockMotor, MockSwitch};
    use crate::store::Dashboard;
    use astro_core::config::{ClimbConfig, LeanAxis, KEY_WHEEL_POWER};
    use astro_core::traits::LegId;
    use astro_hal::imu::Attitude;

    type TestClimber = ClimberSubsystem<MockMotor, MockSwitch, MockFloor, MockMotor, MockImu>;

    fn climber() -> TestClimber {
        ClimberSubsystem::new(
            mock_leg(LegId::Front),
            mock_leg(LegId::Back),
            MockMotor::default(),
            LeanEstimator::new(MockImu::level(), LeanAxis::Pitch, false),
        )
    }

    #[test]
    fn test_stop_all() {
        let mut climber = climber();
        climber.front_leg_mut().set_motor_power(0.9);
        climber.back_leg_mut().set_motor_power(-0.9);
        climber.set_wheel_power(0.75);

        climber.stop_all();
        assert_eq!(climber.front_leg().motor_power(), 0.0);
        assert_eq!(climber.back_leg().motor_power(), 0.0);
        assert_eq!(climber.wheel_power(), 0.0);
    }

    #[test]
    fn test_periodic_samples_sensors() {
        let mut climber = climber();
        let mut store: Dashboard = Dashboard::new();
        climber.periodic(&mut store);

        climber.front.floor_sensor_mut().volts = 2.2;
        climber.back.switches_mut().1.level = true;
        assert!(!climber.front_leg().is_over_floor());

        climber.periodic(&mut store);
        assert!(climber.front_leg().is_over_floor());
        assert_eq!(climber.back_leg().retracted_count(), 1);
    }

    #[test]
    fn test_telemetry_every_tenth_tick() {
        let mut climber = climber();
        let mut store: Dashboard = Dashboard::new();

        for _ in 0..TELEMETRY_PERIOD - 1 {
            climber.periodic(&mut store);
        }
        assert_eq!(store.get_number("Lean"), None);

        climber.periodic(&mut store);
        assert_eq!(store.get_number("Lean"), Some(0.0));
        assert_eq!(store.get_boolean("Front Extended"), Some(false));
        assert_eq!(store.get_boolean("Back Over Floor"), Some(false));
        // Debug off by default
        assert_eq!(store.get_number("Front Floor Volts"), None);
    }

    #[test]
    fn test_debug_telemetry() {
        let mut climber = climber();
        let mut store: Dashboard = Dashboard::new();
        store.put_boolean(KEY_DEBUG, true).unwrap();
        climber.front.floor_sensor_mut().volts = 0.8;
        climber.periodic(&mut store);

        climber.publish(&mut store);
        assert_eq!(store.get_number("Front Floor Volts"), Some(0.8));
        assert_eq!(store.get_number("Back Floor Volts"), Some(0.0));
    }

    #[test]
    fn test_zero_lean() {
        let mut climber = climber();
        let mut store: Dashboard = Dashboard::new();
        climber.lean.imu_mut().attitude = Some(Attitude {
            pitch: 1.0,
            roll: 0.0,
        });
        climber.periodic(&mut store);
        assert_eq!(climber.lean(), 1.0);

        climber.zero_lean();
        assert_eq!(climber.lean(), 0.0);
    }

    #[test]
    fn test_telemetry_leaves_tunables_alone() {
        let mut climber = climber();
        let mut store: Dashboard = Dashboard::new();
        let defaults = ClimbConfig::load(&mut store);

        // Wheels idle while telemetry is published
        for _ in 0..3 * TELEMETRY_PERIOD {
            climber.periodic(&mut store);
        }
        assert_eq!(store.get_number(KEY_WHEEL_OUTPUT), Some(0.0));
        assert_eq!(store.get_number(KEY_WHEEL_POWER), Some(0.75));

        let config = ClimbConfig::load(&mut store);
        assert_eq!(config, defaults);
        assert_eq!(config.wheel_power, 0.75);
    }

    #[test]
    fn test_wheel_output_published() {
        let mut climber = climber();
        let mut store: Dashboard = Dashboard::new();
        climber.set_wheel_power(0.5);
        for _ in 0..TELEMETRY_PERIOD {
            climber.periodic(&mut store);
        }
        assert_eq!(store.get_number(KEY_WHEEL_OUTPUT), Some(0.5));
        assert_eq!(store.get_number(KEY_WHEEL_POWER), None);
    }
}
