//! Polled limit switch
//!
//! Samples a digital input once per control tick and counts rising edges in
//! software. A trip shorter than one tick is missed; boards that can count
//! edges in an interrupt or a counter peripheral should implement
//! `LimitSensor` directly instead.

use astro_core::sensor::TripCounter;
use astro_core::traits::LimitSensor;
use astro_hal::gpio::{ActiveInput, InputPin};

/// Limit switch on a plain digital input
pub struct PolledLimitSwitch<P> {
    input: ActiveInput<P>,
    counter: TripCounter,
}

impl<P: InputPin> PolledLimitSwitch<P> {
    /// Create a switch; `active_low` for switches wired to ground
    pub fn new(pin: P, active_low: bool) -> Self {
        let mut switch = Self {
            input: ActiveInput::new(pin, active_low),
            counter: TripCounter::new(),
        };
        // Establish the power-on level so it is not counted as a trip
        switch.sample();
        switch
    }
}

impl<P: InputPin> LimitSensor for PolledLimitSwitch<P> {
    fn read(&self) -> bool {
        self.counter.read()
    }

    fn trip_count(&self) -> u32 {
        self.counter.trip_count()
    }

    fn sample(&mut self) {
        self.counter.update(self.input.is_active());
    }
}
