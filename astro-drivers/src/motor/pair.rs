//! Leader/follower motor pair
//!
//! The climb wheels are two motors that always turn together. The follower
//! copies every command sent to the leader; each side handles its own
//! inversion.

use astro_core::traits::{clamp_power, PowerOutput};

/// Two motors driven as one
pub struct MotorPair<L, F> {
    leader: L,
    follower: F,
}

impl<L: PowerOutput, F: PowerOutput> MotorPair<L, F> {
    pub fn new(leader: L, follower: F) -> Self {
        let mut pair = Self { leader, follower };
        pair.set_power(0.0);
        pair
    }

    pub fn leader(&self) -> &L {
        &self.leader
    }

    pub fn follower(&self) -> &F {
        &self.follower
    }
}

impl<L: PowerOutput, F: PowerOutput> PowerOutput for MotorPair<L, F> {
    fn set_power(&mut self, power: f32) {
        let power = clamp_power(power);
        self.leader.set_power(power);
        self.follower.set_power(power);
    }

    fn power(&self) -> f32 {
        self.leader.power()
    }

    fn set_brake_mode(&mut self, enable: bool) {
        self.leader.set_brake_mode(enable);
        self.follower.set_brake_mode(enable);
    }
}
