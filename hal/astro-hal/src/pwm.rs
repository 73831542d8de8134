//! PWM output abstractions
//!
//! Motor controllers on the climber take a hobby-servo style signal: a
//! pulse repeated at a fixed frame rate whose width encodes the command.

/// Standard frame period for motor controller signals (50 Hz)
pub const SERVO_FRAME_US: u32 = 20_000;

/// PWM channel driving one motor controller input
pub trait PwmChannel {
    /// Set the high time of each frame in microseconds
    fn set_pulse_width_us(&mut self, width_us: u16);

    /// Get the currently configured pulse width in microseconds
    fn pulse_width_us(&self) -> u16;

    /// Disable the output (no pulses)
    ///
    /// Most motor controllers treat a missing signal as neutral.
    fn disable(&mut self) {
        self.set_pulse_width_us(0);
    }
}

/// Pulse width limits for a motor controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseRange {
    /// Pulse width for full reverse
    pub min_us: u16,
    /// Pulse width for neutral
    pub neutral_us: u16,
    /// Pulse width for full forward
    pub max_us: u16,
}

impl Default for PulseRange {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl PulseRange {
    /// Standard 1.0 / 1.5 / 2.0 ms controller range
    pub const STANDARD: Self = Self {
        min_us: 1000,
        neutral_us: 1500,
        max_us: 2000,
    };

    /// Convert a power level in [-1, +1] to a pulse width
    ///
    /// Values outside the range are clamped.
    pub fn pulse_for(&self, power: f32) -> u16 {
        let power = if power.is_finite() {
            power.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        let span = if power >= 0.0 {
            (self.max_us - self.neutral_us) as f32
        } else {
            (self.neutral_us - self.min_us) as f32
        };
        let offset = (power * span) as i32;
        (self.neutral_us as i32 + offset) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_range() {
        let range = PulseRange::STANDARD;
        assert_eq!(range.pulse_for(0.0), 1500);
        assert_eq!(range.pulse_for(1.0), 2000);
        assert_eq!(range.pulse_for(-1.0), 1000);
        assert_eq!(range.pulse_for(0.5), 1750);
    }

    #[test]
    fn test_out_of_range_clamped() {
        let range = PulseRange::STANDARD;
        assert_eq!(range.pulse_for(3.0), 2000);
        assert_eq!(range.pulse_for(-3.0), 1000);
        assert_eq!(range.pulse_for(f32::NAN), 1500);
    }
}
