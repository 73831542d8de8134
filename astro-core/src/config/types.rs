//! Climb tunables
//!
//! Every value has a store key and a compiled default. Missing keys are
//! written back with their default so they show up on the dashboard for
//! tuning.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::KeyValueStore;

/// Store key for the leg extend power
pub const KEY_EXTEND_POWER: &str = "Climb Extend Power";
/// Store key for the leg retract power (stored as a positive magnitude)
pub const KEY_RETRACT_POWER: &str = "Climb Retract Power";
/// Store key for the climb wheel power
pub const KEY_WHEEL_POWER: &str = "Climb Wheel Power";
/// Store key for the maximum lean while extending
pub const KEY_MAX_LEAN_UP: &str = "Climb Max Lean Up";
/// Store key for the maximum lean while retracting
pub const KEY_MAX_LEAN_DOWN: &str = "Climb Max Lean Down";
/// Store key for the debug telemetry switch
pub const KEY_DEBUG: &str = "Climb Debug";

/// Climb tunables
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClimbConfig {
    /// Leg power while extending (positive)
    pub extend_speed: f32,
    /// Leg power while retracting (negative)
    pub retract_speed: f32,
    /// Climb wheel power while driving onto the step
    pub wheel_power: f32,
    /// Lean (degrees) at which the leading leg stops while extending
    pub max_lean_up: f32,
    /// Lean (degrees) tolerated around the held lean while retracting
    pub max_lean_down: f32,
    /// Publish per-leg floor voltages
    pub debug: bool,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            extend_speed: 0.9,
            retract_speed: -0.9,
            wheel_power: 0.75,
            max_lean_up: 2.0,
            max_lean_down: 4.0,
            debug: false,
        }
    }
}

impl ClimbConfig {
    /// Read the tunables from `store`, writing back any missing key
    pub fn load<S: KeyValueStore>(store: &mut S) -> Self {
        let defaults = Self::default();

        Self {
            extend_speed: load_number(store, KEY_EXTEND_POWER, defaults.extend_speed),
            retract_speed: -load_number(store, KEY_RETRACT_POWER, -defaults.retract_speed),
            wheel_power: load_number(store, KEY_WHEEL_POWER, defaults.wheel_power),
            max_lean_up: load_number(store, KEY_MAX_LEAN_UP, defaults.max_lean_up),
            max_lean_down: load_number(store, KEY_MAX_LEAN_DOWN, defaults.max_lean_down),
            debug: load_boolean(store, KEY_DEBUG, defaults.debug),
        }
    }
}

fn load_number<S: KeyValueStore>(store: &mut S, key: &str, default: f32) -> f32 {
    if let Some(value) = store.get_number(key) {
        return value;
    }

    if let Err(_e) = store.put_number(key, default) {
        #[cfg(feature = "defmt")]
        defmt::warn!("config: could not write back {}: {}", key, _e);
    }
    default
}

fn load_boolean<S: KeyValueStore>(store: &mut S, key: &str, default: bool) -> bool {
    if let Some(value) = store.get_boolean(key) {
        return value;
    }

    if let Err(_e) = store.put_boolean(key, default) {
        #[cfg(feature = "defmt")]
        defmt::warn!("config: could not write back {}: {}", key, _e);
    }
    default
}
