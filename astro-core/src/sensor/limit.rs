//! Rising-edge trip counter for limit switches
//!
//! Limit switches on the legs are sampled once per control tick. A leg
//! moving fast can hit the switch and bounce back off before the climb
//! logic looks at it again, so the sensor keeps a count of rising edges in
//! addition to the current level.

use crate::traits::LimitSensor;

/// Software trip counter fed with sampled switch levels
#[derive(Debug, Clone, Default)]
pub struct TripCounter {
    /// Last sampled level, None until the first sample
    level: Option<bool>,
    /// Rising edges seen
    count: u32,
}

impl TripCounter {
    /// Create a counter with no samples yet
    pub const fn new() -> Self {
        Self {
            level: None,
            count: 0,
        }
    }

    /// Feed the current switch level
    ///
    /// The first sample only establishes the level: a switch that is
    /// already tripped at power-on does not count as a trip. The count
    /// wraps after 2^32 edges; snapshots are compared for inequality so
    /// the wrap is still detected as a change.
    pub fn update(&mut self, tripped: bool) {
        if self.level == Some(false) && tripped {
            self.count = self.count.wrapping_add(1);
        }
        self.level = Some(tripped);
    }
}

impl LimitSensor for TripCounter {
    fn read(&self) -> bool {
        self.level.unwrap_or(false)
    }

    fn trip_count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_counts_rising_edges_only() {
        let mut counter = TripCounter::new();
        counter.update(false);
        assert_eq!(counter.trip_count(), 0);

        counter.update(true);
        assert_eq!(counter.trip_count(), 1);

        // Held high: no new edge
        counter.update(true);
        counter.update(true);
        assert_eq!(counter.trip_count(), 1);

        // Falling edge: no change
        counter.update(false);
        assert_eq!(counter.trip_count(), 1);

        counter.update(true);
        assert_eq!(counter.trip_count(), 2);
    }

    #[test]
    fn test_tripped_at_power_on_not_counted() {
        let mut counter = TripCounter::new();
        assert!(!counter.read());
        counter.update(true);
        assert!(counter.read());
        assert_eq!(counter.trip_count(), 0);
    }

    #[test]
    fn test_has_tripped_since_survives_release() {
        let mut counter = TripCounter::new();
        counter.update(false);
        let snapshot = counter.trip_count();
        assert!(!counter.has_tripped_since(snapshot));

        // Switch trips and is released between two looks
        counter.update(true);
        counter.update(false);

        assert!(!counter.read());
        assert!(counter.has_tripped_since(snapshot));
    }

    #[test]
    fn test_has_tripped_since_while_held() {
        let mut counter = TripCounter::new();
        counter.update(true);
        let snapshot = counter.trip_count();
        // Already sitting on the switch: counts as tripped
        assert!(counter.has_tripped_since(snapshot));
    }

    proptest! {
        #[test]
        fn prop_count_matches_rising_edges(reads in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut counter = TripCounter::new();
            let mut expected = 0u32;
            let mut previous: Option<bool> = None;

            for &level in &reads {
                let before = counter.trip_count();
                counter.update(level);

                if previous == Some(false) && level {
                    expected += 1;
                    prop_assert_eq!(counter.trip_count(), before + 1);
                } else {
                    prop_assert_eq!(counter.trip_count(), before);
                }
                previous = Some(level);
            }

            prop_assert_eq!(counter.trip_count(), expected);
        }

        #[test]
        fn prop_tripped_since_stays_true(
            prefix in proptest::collection::vec(any::<bool>(), 1..50),
            suffix in proptest::collection::vec(any::<bool>(), 0..50),
        ) {
            let mut counter = TripCounter::new();
            for &level in &prefix {
                counter.update(level);
            }
            let snapshot = counter.trip_count();

            // Force a rising edge after the snapshot
            counter.update(false);
            counter.update(true);
            prop_assert!(counter.has_tripped_since(snapshot));

            for &level in &suffix {
                counter.update(level);
                prop_assert!(counter.has_tripped_since(snapshot));
            }
        }
    }
}
