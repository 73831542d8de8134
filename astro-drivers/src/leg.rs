//! Leg driver
//!
//! Bundles the lift motor, the two end-of-travel switches and the floor
//! sensor of one leg. Sensors are sampled once per tick in `update`; every
//! accessor after that reads the cached sample.

use core::fmt::Write;

use heapless::String;

use astro_core::traits::{FloorSensor, KeyValueStore, LegActuator, LegId, LimitSensor, PowerOutput};

use crate::store::MAX_KEY_LEN;

/// One climber leg
pub struct Leg<M, L, F> {
    id: LegId,
    motor: M,
    extended: L,
    retracted: L,
    floor: F,
}

impl<M, L, F> Leg<M, L, F>
where
    M: PowerOutput,
    L: LimitSensor,
    F: FloorSensor,
{
    pub fn new(id: LegId, motor: M, extended: L, retracted: L, floor: F) -> Self {
        Self {
            id,
            motor,
            extended,
            retracted,
            floor,
        }
    }

    pub fn floor_voltage(&self) -> f32 {
        self.floor.voltage()
    }

    pub fn motor(&self) -> &M {
        &self.motor
    }

    /// Extended and retracted switches
    pub fn switches_mut(&mut self) -> (&mut L, &mut L) {
        (&mut self.extended, &mut self.retracted)
    }

    pub fn floor_sensor_mut(&mut self) -> &mut F {
        &mut self.floor
    }

    /// Publish the leg state; floor voltage only with `debug`
    pub fn publish<S: KeyValueStore>(&self, store: &mut S, debug: bool) {
        let name = self.id.name();
        let results = [
            store.put_boolean(&key(name, "Extended"), self.is_extended()),
            store.put_number(&key(name, "Extended Count"), self.extended_count() as f32),
            store.put_boolean(&key(name, "Retracted"), self.is_retracted()),
            store.put_number(&key(name, "Retracted Count"), self.retracted_count() as f32),
            store.put_boolean(&key(name, "Over Floor"), self.is_over_floor()),
            store.put_number(&key(name, "Power"), self.motor_power()),
        ];

        if let Some(Err(_e)) = results.into_iter().find(Result::is_err) {
            #[cfg(feature = "defmt")]
            defmt::warn!("leg {}: telemetry dropped: {}", self.id, _e);
        }

        if debug {
            let _ = store.put_number(&key(name, "Floor Volts"), self.floor.voltage());
        }
    }
}

impl<M, L, F> LegActuator for Leg<M, L, F>
where
    M: PowerOutput,
    L: LimitSensor,
    F: FloorSensor,
{
    fn id(&self) -> LegId {
        self.id
    }

    fn set_motor_power(&mut self, power: f32) {
        self.motor.set_power(power);
    }

    fn motor_power(&self) -> f32 {
        self.motor.power()
    }

    fn update(&mut self) {
        self.extended.sample();
        self.retracted.sample();
        self.floor.sample();
    }

    fn is_extended(&self) -> bool {
        self.extended.read()
    }

    fn extended_count(&self) -> u32 {
        self.extended.trip_count()
    }

    fn is_retracted(&self) -> bool {
        self.retracted.read()
    }

    fn retracted_count(&self) -> u32 {
        self.retracted.trip_count()
    }

    fn is_over_floor(&self) -> bool {
        self.floor.is_over_floor()
    }
}

/// Telemetry key "<prefix> <suffix>", truncated if it does not fit
pub(crate) fn key(prefix: &str, suffix: &str) -> String<MAX_KEY_LEN> {
    let mut out = String::new();
    let _ = write!(out, "{} {}", prefix, suffix);
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::store::Dashboard;
    use astro_core::sensor::TripCounter;
    use astro_core::traits::clamp_power;

    #[derive(Debug, Default)]
    pub(crate) struct MockMotor {
        pub power: f32,
        pub brake: bool,
    }

    impl PowerOutput for MockMotor {
        fn set_power(&mut self, power: f32) {
            self.power = clamp_power(power);
        }

        fn power(&self) -> f32 {
            self.power
        }

        fn set_brake_mode(&mut self, enable: bool) {
            self.brake = enable;
        }
    }

    /// Switch whose next level is set by the test and latched by `sample`
    #[derive(Debug, Default)]
    pub(crate) struct MockSwitch {
        pub level: bool,
        pub counter: TripCounter,
    }

    impl LimitSensor for MockSwitch {
        fn read(&self) -> bool {
            self.counter.read()
        }

        fn trip_count(&self) -> u32 {
            self.counter.trip_count()
        }

        fn sample(&mut self) {
            self.counter.update(self.level);
        }
    }

    #[derive(Debug, Default)]
    pub(crate) struct MockFloor {
        pub volts: f32,
        pub over: bool,
    }

    impl FloorSensor for MockFloor {
        fn sample(&mut self) {
            self.over = self.volts > 1.5;
        }

        fn is_over_floor(&self) -> bool {
            self.over
        }

        fn voltage(&self) -> f32 {
            self.volts
        }
    }

    pub(crate) type MockLeg = Leg<MockMotor, MockSwitch, MockFloor>;

    pub(crate) fn mock_leg(id: LegId) -> MockLeg {
        Leg::new(
            id,
            MockMotor::default(),
            MockSwitch::default(),
            MockSwitch::default(),
            MockFloor::default(),
        )
    }

    #[test]
    fn test_motor_power_clamped() {
        let mut leg = mock_leg(LegId::Front);
        leg.set_motor_power(1.7);
        assert_eq!(leg.motor_power(), 1.0);
        leg.stop();
        assert_eq!(leg.motor_power(), 0.0);
    }

    #[test]
    fn test_sensors_latched_on_update() {
        let mut leg = mock_leg(LegId::Back);
        leg.update();

        leg.extended.level = true;
        leg.floor.volts = 2.0;
        assert!(!leg.is_extended());
        assert!(!leg.is_over_floor());

        leg.update();
        assert!(leg.is_extended());
        assert_eq!(leg.extended_count(), 1);
        assert!(leg.is_over_floor());

        leg.extended.level = false;
        leg.update();
        assert!(!leg.is_extended());
        assert!(leg.has_extended(0));
        assert!(!leg.has_retracted(0));
    }

    #[test]
    fn test_publish() {
        let mut leg = mock_leg(LegId::Front);
        leg.floor.volts = 1.25;
        leg.update();
        leg.set_motor_power(0.5);

        let mut store: Dashboard = Dashboard::new();
        leg.publish(&mut store, false);
        assert_eq!(store.get_boolean("Front Extended"), Some(false));
        assert_eq!(store.get_number("Front Retracted Count"), Some(0.0));
        assert_eq!(store.get_boolean("Front Over Floor"), Some(false));
        assert_eq!(store.get_number("Front Power"), Some(0.5));
        assert_eq!(store.get_number("Front Floor Volts"), None);

        leg.publish(&mut store, true);
        assert_eq!(store.get_number("Front Floor Volts"), Some(1.25));
    }

    #[test]
    fn test_key() {
        assert_eq!(key("Back", "Over Floor").as_str(), "Back Over Floor");
    }
}
