//! Limit switch and floor sensor traits

/// Binary limit sensor with a lifetime trip counter
///
/// The counter increments once per rising edge (not tripped → tripped) and
/// never decreases. Comparing it to a snapshot taken earlier answers "did
/// the actuator reach this limit since then", even if it has since moved
/// back off the sensor.
pub trait LimitSensor {
    /// Current raw state (true = tripped)
    fn read(&self) -> bool;

    /// Number of rising edges seen since power-on
    fn trip_count(&self) -> u32;

    /// Check if the sensor has tripped since `snapshot` was taken
    ///
    /// True when the sensor is tripped now, or when the trip count moved
    /// away from the snapshot value.
    fn has_tripped_since(&self, snapshot: u32) -> bool {
        self.read() || self.trip_count() != snapshot
    }

    /// Sample the hardware (called once per control tick)
    ///
    /// Sensors whose count is maintained elsewhere (interrupts, hardware
    /// counters) leave this as a no-op.
    fn sample(&mut self) {}
}

/// Floor presence sensor
pub trait FloorSensor {
    /// Sample the hardware (called once per control tick)
    fn sample(&mut self);

    /// True when the sensor sees the floor below it
    fn is_over_floor(&self) -> bool;

    /// Last measured sensor voltage (for debug telemetry)
    fn voltage(&self) -> f32;
}
