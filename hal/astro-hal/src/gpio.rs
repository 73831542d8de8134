//! GPIO pin abstractions

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Reads take `&self` so a sensor can be sampled
/// from a shared reference.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Input pin with optional active-low inversion
///
/// Limit switches are commonly wired normally-closed to ground, so the
/// logical "tripped" state is a low pin. This wrapper hides that from the
/// sensor code.
#[derive(Debug)]
pub struct ActiveInput<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> ActiveInput<P> {
    /// Wrap a pin; `active_low` for switches that pull the pin to ground
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Logical state of the input (true = active)
    pub fn is_active(&self) -> bool {
        self.pin.is_high() != self.active_low
    }
}

impl<P: InputPin> InputPin for ActiveInput<P> {
    fn is_high(&self) -> bool {
        self.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPin(bool);

    impl InputPin for FixedPin {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_active_high() {
        assert!(ActiveInput::new(FixedPin(true), false).is_active());
        assert!(!ActiveInput::new(FixedPin(false), false).is_active());
    }

    #[test]
    fn test_active_low() {
        assert!(!ActiveInput::new(FixedPin(true), true).is_active());
        assert!(ActiveInput::new(FixedPin(false), true).is_active());
        assert!(ActiveInput::new(FixedPin(false), true).is_high());
    }
}
