//! Analog input abstractions
//!
//! The floor proximity sensors produce a voltage that rises as the floor
//! gets closer. Boards either sample that voltage with an ADC or feed it to
//! a comparator that provides a debounced digital state.

/// Analog input channel
pub trait AnalogInput {
    /// Error type for conversions
    type Error;

    /// Read the input voltage in volts
    ///
    /// Takes `&mut self` because ADC conversions typically require
    /// mutable access to the converter.
    fn read_voltage(&mut self) -> Result<f32, Self::Error>;
}

/// Analog trigger (window comparator) on top of an analog input
///
/// The trigger output goes high when the voltage rises above the upper
/// limit and only goes low again once it drops below the lower limit.
pub trait AnalogTrigger: AnalogInput {
    /// Configure the trigger window in volts
    fn set_limits_voltage(&mut self, lower: f32, upper: f32);

    /// Current trigger output
    fn trigger_state(&mut self) -> bool;
}
