//! Floor proximity sensors
//!
//! Three ways to get "over floor" out of an IR proximity sensor:
//!
//! - [`AnalogFloorSensor`]: ADC reading compared in software
//! - [`ComparatorFloorSensor`]: window comparator output (hardware or
//!   [`HysteresisTrigger`])
//! - [`HysteresisTrigger`]: software window comparator over an ADC input
//!
//! A failed conversion reads as "not over floor": the retract steps then
//! abort instead of pulling a leg up off the edge.

use astro_core::sensor::{FloorDetector, FloorThreshold, FLOOR_LOWER_V, FLOOR_UPPER_V};
use astro_core::traits::FloorSensor;
use astro_hal::analog::{AnalogInput, AnalogTrigger};

/// Floor sensor thresholded in software
pub struct AnalogFloorSensor<A> {
    input: A,
    detector: FloorDetector,
    voltage: f32,
}

impl<A: AnalogInput> AnalogFloorSensor<A> {
    pub fn new(input: A, threshold: FloorThreshold) -> Self {
        Self {
            input,
            detector: FloorDetector::new(threshold),
            voltage: 0.0,
        }
    }
}

impl<A: AnalogInput> FloorSensor for AnalogFloorSensor<A> {
    fn sample(&mut self) {
        match self.input.read_voltage() {
            Ok(voltage) => {
                self.voltage = voltage;
                self.detector.update(voltage);
            }
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("floor: ADC read failed");
                self.voltage = 0.0;
                self.detector.clear();
            }
        }
    }

    fn is_over_floor(&self) -> bool {
        self.detector.is_over_floor()
    }

    fn voltage(&self) -> f32 {
        self.voltage
    }
}

/// Floor sensor read through a window comparator
pub struct ComparatorFloorSensor<T> {
    trigger: T,
    over: bool,
    voltage: f32,
}

impl<T: AnalogTrigger> ComparatorFloorSensor<T> {
    /// Wrap a trigger and program it for the 1.0 V / 2.0 V floor window
    pub fn new(mut trigger: T) -> Self {
        trigger.set_limits_voltage(FLOOR_LOWER_V, FLOOR_UPPER_V);
        Self {
            trigger,
            over: false,
            voltage: 0.0,
        }
    }
}

impl<T: AnalogTrigger> FloorSensor for ComparatorFloorSensor<T> {
    fn sample(&mut self) {
        self.over = self.trigger.trigger_state();
        // Voltage is telemetry only
        self.voltage = self.trigger.read_voltage().unwrap_or(0.0);
    }

    fn is_over_floor(&self) -> bool {
        self.over
    }

    fn voltage(&self) -> f32 {
        self.voltage
    }
}

/// Software window comparator
///
/// Each `trigger_state` call takes a fresh conversion; a failed conversion
/// releases the trigger.
pub struct HysteresisTrigger<A> {
    input: A,
    detector: FloorDetector,
}

impl<A: AnalogInput> HysteresisTrigger<A> {
    pub fn new(input: A) -> Self {
        Self {
            input,
            detector: FloorDetector::new(FloorThreshold::COMPARATOR),
        }
    }
}

impl<A: AnalogInput> AnalogInput for HysteresisTrigger<A> {
    type Error = A::Error;

    fn read_voltage(&mut self) -> Result<f32, Self::Error> {
        self.input.read_voltage()
    }
}

impl<A: AnalogInput> AnalogTrigger for HysteresisTrigger<A> {
    fn set_limits_voltage(&mut self, lower: f32, upper: f32) {
        self.detector = FloorDetector::new(FloorThreshold::Hysteresis { lower, upper });
    }

    fn trigger_state(&mut self) -> bool {
        match self.input.read_voltage() {
            Ok(voltage) => self.detector.update(voltage),
            Err(_) => {
                self.detector.clear();
                false
            }
        }
    }
}
