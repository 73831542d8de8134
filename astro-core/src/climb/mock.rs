//! Test doubles for the climb traits

use crate::sensor::TripCounter;
use crate::traits::{
    clamp_power, Climber, DriveTrain, KeyValueStore, LegActuator, LegId, LimitSensor, StoreError,
};

#[derive(Debug)]
pub struct MockLeg {
    pub id: LegId,
    pub power: f32,
    pub writes: u32,
    pub extended: TripCounter,
    pub retracted: TripCounter,
    pub over_floor: bool,
}

impl MockLeg {
    pub fn new(id: LegId) -> Self {
        let mut extended = TripCounter::new();
        let mut retracted = TripCounter::new();
        extended.update(false);
        retracted.update(false);
        Self {
            id,
            power: 0.0,
            writes: 0,
            extended,
            retracted,
            over_floor: false,
        }
    }

    /// Trip and release the extended switch between two ticks
    pub fn pulse_extended(&mut self) {
        self.extended.update(true);
        self.extended.update(false);
    }

    /// Trip and release the retracted switch between two ticks
    pub fn pulse_retracted(&mut self) {
        self.retracted.update(true);
        self.retracted.update(false);
    }

    pub fn set_over_floor(&mut self, over: bool) {
        self.over_floor = over;
    }
}

impl LegActuator for MockLeg {
    fn id(&self) -> LegId {
        self.id
    }

    fn set_motor_power(&mut self, power: f32) {
        self.power = clamp_power(power);
        self.writes += 1;
    }

    fn motor_power(&self) -> f32 {
        self.power
    }

    fn update(&mut self) {}

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
        self.over_floor
    }
}

#[derive(Debug)]
pub struct MockClimber {
    pub front: MockLeg,
    pub back: MockLeg,
    pub wheel: f32,
    pub lean: f32,
}

impl Default for MockClimber {
    fn default() -> Self {
        Self {
            front: MockLeg::new(LegId::Front),
            back: MockLeg::new(LegId::Back),
            wheel: 0.0,
            lean: 0.0,
        }
    }
}

impl Climber for MockClimber {
    type Leg = MockLeg;

    fn front_leg(&self) -> &MockLeg {
        &self.front
    }

    fn front_leg_mut(&mut self) -> &mut MockLeg {
        &mut self.front
    }

    fn back_leg(&self) -> &MockLeg {
        &self.back
    }

    fn back_leg_mut(&mut self) -> &mut MockLeg {
        &mut self.back
    }

    fn set_wheel_power(&mut self, power: f32) {
        self.wheel = clamp_power(power);
    }

    fn wheel_power(&self) -> f32 {
        self.wheel
    }

    fn lean(&self) -> f32 {
        self.lean
    }
}

#[derive(Debug, Default)]
pub struct MockDrive {
    pub left: f32,
    pub right: f32,
    pub stops: u32,
}

impl DriveTrain for MockDrive {
    fn set_power(&mut self, left: f32, right: f32) {
        self.left = left;
        self.right = right;
    }

    fn stop(&mut self) {
        self.stops += 1;
        self.set_power(0.0, 0.0);
    }
}

#[derive(Debug, Default)]
pub struct MockStore {
    pub numbers: Vec<(String, f32)>,
    pub booleans: Vec<(String, bool)>,
}

impl KeyValueStore for MockStore {
    fn get_number(&self, key: &str) -> Option<f32> {
        self.numbers.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    fn put_number(&mut self, key: &str, value: f32) -> Result<(), StoreError> {
        match self.numbers.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.numbers.push((key.to_string(), value)),
        }
        Ok(())
    }

    fn get_boolean(&self, key: &str) -> Option<bool> {
        self.booleans.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    fn put_boolean(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        match self.booleans.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.booleans.push((key.to_string(), value)),
        }
        Ok(())
    }
}
