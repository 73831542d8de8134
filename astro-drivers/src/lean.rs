//! Lean estimator
//!
//! Turns IMU attitude into the climb's lean value: one axis picked by the
//! hardware map, sign fixed so forward lean reads negative, zeroed once per
//! operating session.

use astro_core::config::{ImuHwConfig, LeanAxis};
use astro_core::traits::LeanSource;
use astro_hal::imu::{Attitude, Orientation};

/// Consecutive failed reads after which the lean is reported unknown
pub const MAX_MISSED_READS: u8 = 5;

pub struct LeanEstimator<I> {
    imu: I,
    axis: LeanAxis,
    inverted: bool,
    raw: f32,
    zero: f32,
    missed: u8,
}

impl<I: Orientation> LeanEstimator<I> {
    pub fn new(imu: I, axis: LeanAxis, inverted: bool) -> Self {
        Self {
            imu,
            axis,
            inverted,
            raw: 0.0,
            zero: 0.0,
            missed: 0,
        }
    }

    pub fn from_config(imu: I, config: &ImuHwConfig) -> Self {
        Self::new(imu, config.lean_axis, config.invert_lean)
    }

    /// Read the IMU (called once per control tick)
    ///
    /// A failed read keeps the previous value.
    pub fn update(&mut self) {
        match self.imu.read_attitude() {
            Ok(attitude) => {
                self.raw = self.axis_value(&attitude);
                self.missed = 0;
            }
            Err(_) => {
                self.missed = self.missed.saturating_add(1);
                if self.missed == MAX_MISSED_READS {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("lean: IMU not responding");
                }
            }
        }
    }

    /// Take the current reading as level
    ///
    /// Done once per session, before any climb.
    pub fn zero(&mut self) {
        self.zero = self.raw;
    }

    pub fn imu_mut(&mut self) -> &mut I {
        &mut self.imu
    }

    /// Lean without the zero offset applied
    pub fn raw(&self) -> f32 {
        self.raw
    }

    /// True when the IMU has not answered for a while
    pub fn is_stale(&self) -> bool {
        self.missed >= MAX_MISSED_READS
    }

    fn axis_value(&self, attitude: &Attitude) -> f32 {
        let value = match self.axis {
            LeanAxis::Pitch => attitude.pitch,
            LeanAxis::Roll => attitude.roll,
        };
        if self.inverted {
            -value
        } else {
            value
        }
    }
}

impl<I: Orientation> LeanSource for LeanEstimator<I> {
    fn lean(&self) -> f32 {
        self.raw - self.zero
    }
}
