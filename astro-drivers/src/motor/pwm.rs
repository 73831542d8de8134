//! PWM motor controller output
//!
//! Hobby-style motor controllers read a 50 Hz pulse: 1.0 ms full reverse,
//! 1.5 ms neutral, 2.0 ms full forward. Brake/coast is a jumper on most of
//! these controllers, so the brake flag is only recorded.

use astro_core::traits::{clamp_power, PowerOutput};
use astro_hal::pwm::{PulseRange, PwmChannel};

/// One motor controller on a PWM channel
pub struct PwmMotor<P> {
    channel: P,
    range: PulseRange,
    inverted: bool,
    brake: bool,
    power: f32,
}

impl<P: PwmChannel> PwmMotor<P> {
    /// Create a motor with the standard pulse range, outputting neutral
    pub fn new(channel: P, inverted: bool) -> Self {
        Self::with_range(channel, PulseRange::STANDARD, inverted)
    }

    pub fn with_range(channel: P, range: PulseRange, inverted: bool) -> Self {
        let mut motor = Self {
            channel,
            range,
            inverted,
            brake: false,
            power: 0.0,
        };
        motor.set_power(0.0);
        motor
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn brake_mode(&self) -> bool {
        self.brake
    }

    /// Stop sending pulses (controller falls back to neutral)
    pub fn disable(&mut self) {
        self.power = 0.0;
        self.channel.disable();
    }

    pub fn channel(&self) -> &P {
        &self.channel
    }
}

impl<P: PwmChannel> PowerOutput for PwmMotor<P> {
    fn set_power(&mut self, power: f32) {
        self.power = clamp_power(power);
        let output = if self.inverted { -self.power } else { self.power };
        self.channel.set_pulse_width_us(self.range.pulse_for(output));
    }

    fn power(&self) -> f32 {
        self.power
    }

    fn set_brake_mode(&mut self, enable: bool) {
        self.brake = enable;
    }
}
