//! Floor presence thresholding
//!
//! The floor sensors are analog IR proximity sensors: voltage rises as the
//! floor gets closer. A leg is "over the floor" once the voltage crosses a
//! fixed threshold.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Software threshold used when there is no comparator
pub const FLOOR_THRESHOLD_V: f32 = 1.5;

/// Comparator release level
pub const FLOOR_LOWER_V: f32 = 1.0;

/// Comparator trip level
pub const FLOOR_UPPER_V: f32 = 2.0;

/// How a voltage is turned into "over floor"
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FloorThreshold {
    /// Over floor while voltage > threshold
    Single(f32),
    /// Trip above `upper`, release below `lower`, hold in between
    Hysteresis { lower: f32, upper: f32 },
}

impl FloorThreshold {
    /// Plain comparison at 1.5 V
    pub const SOFTWARE: Self = FloorThreshold::Single(FLOOR_THRESHOLD_V);

    /// Comparator window 1.0 V / 2.0 V
    pub const COMPARATOR: Self = FloorThreshold::Hysteresis {
        lower: FLOOR_LOWER_V,
        upper: FLOOR_UPPER_V,
    };
}

impl Default for FloorThreshold {
    fn default() -> Self {
        Self::SOFTWARE
    }
}

/// Stateful floor detector
#[derive(Debug, Clone)]
pub struct FloorDetector {
    threshold: FloorThreshold,
    over: bool,
}

impl FloorDetector {
    pub const fn new(threshold: FloorThreshold) -> Self {
        Self {
            threshold,
            over: false,
        }
    }

    /// Feed a voltage sample, returning the new state
    ///
    /// A non-finite voltage reads as not over floor.
    pub fn update(&mut self, voltage: f32) -> bool {
        if !voltage.is_finite() {
            self.over = false;
            return false;
        }

        self.over = match self.threshold {
            FloorThreshold::Single(threshold) => voltage > threshold,
            FloorThreshold::Hysteresis { lower, upper } => {
                if voltage > upper {
                    true
                } else if voltage < lower {
                    false
                } else {
                    self.over
                }
            }
        };
        self.over
    }

    /// Force the state to "not over floor" (e.g. after a read error)
    pub fn clear(&mut self) {
        self.over = false;
    }

    pub fn is_over_floor(&self) -> bool {
        self.over
    }

    pub fn threshold(&self) -> FloorThreshold {
        self.threshold
    }
}

impl Default for FloorDetector {
    fn default() -> Self {
        Self::new(FloorThreshold::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_threshold() {
        let mut detector = FloorDetector::new(FloorThreshold::SOFTWARE);
        assert!(!detector.update(0.4));
        assert!(!detector.update(1.5));
        assert!(detector.update(1.51));
        assert!(!detector.update(1.2));
    }

    #[test]
    fn test_hysteresis_holds_inside_window() {
        let mut detector = FloorDetector::new(FloorThreshold::COMPARATOR);
        assert!(!detector.update(1.8));
        assert!(detector.update(2.2));
        // Inside the window: stays over
        assert!(detector.update(1.2));
        assert!(detector.update(1.0));
        assert!(!detector.update(0.9));
        // Inside the window again: stays clear
        assert!(!detector.update(1.9));
    }

    #[test]
    fn test_non_finite_is_not_over() {
        let mut detector = FloorDetector::new(FloorThreshold::COMPARATOR);
        assert!(detector.update(3.0));
        assert!(!detector.update(f32::NAN));
        assert!(!detector.is_over_floor());
    }

    #[test]
    fn test_clear() {
        let mut detector = FloorDetector::default();
        detector.update(2.5);
        detector.clear();
        assert!(!detector.is_over_floor());
    }
}
