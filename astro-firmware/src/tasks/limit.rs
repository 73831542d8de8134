//! Limit switch edge tasks
//!
//! One task per switch waits on pin edges and updates the switch state the
//! climber reads. Contact bounce may count a trip more than once, which is
//! harmless: the climb only asks whether the count moved.

use defmt::*;
use embassy_rp::gpio::Input;

use crate::hw::SwitchState;

#[embassy_executor::task(pool_size = 4)]
pub async fn limit_task(
    name: &'static str,
    mut input: Input<'static>,
    active_low: bool,
    state: &'static SwitchState,
) {
    let tripped = |input: &Input<'static>| input.is_high() != active_low;

    state.prime(tripped(&input));
    debug!("limit: {} watching, tripped={}", name, tripped(&input));

    loop {
        input.wait_for_any_edge().await;
        state.record(tripped(&input));
    }
}
