//! Start button
//!
//! A short press starts the climb, or cancels it when one is running. A
//! press held for `ZERO_HOLD_MS` while idle re-zeroes the lean instead.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::Timer;
use portable_atomic::Ordering;

use astro_core::climb::ClimbAction;

use crate::channels::{ClimbCommand, CLIMB_ACTIVE, CLIMB_CMD};

/// Contact settle time
const DEBOUNCE_MS: u64 = 20;

/// Hold time that turns a press into a lean re-zero
const ZERO_HOLD_MS: u64 = 1_000;

#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>, active_low: bool) {
    info!("Button task started");

    loop {
        wait_pressed(&mut button, active_low).await;
        Timer::after_millis(DEBOUNCE_MS).await;
        if !is_pressed(&button, active_low) {
            continue;
        }

        if CLIMB_ACTIVE.load(Ordering::Acquire) {
            info!("button: cancel");
            CLIMB_CMD.signal(ClimbCommand::Cancel);
            wait_released(&mut button, active_low).await;
            continue;
        }

        let command = match select(
            wait_released(&mut button, active_low),
            Timer::after_millis(ZERO_HOLD_MS),
        )
        .await
        {
            Either::First(()) => ClimbCommand::Start(ClimbAction::ClimbUp),
            Either::Second(()) => ClimbCommand::ZeroLean,
        };
        info!("button: {}", command);
        CLIMB_CMD.signal(command);

        wait_released(&mut button, active_low).await;
        Timer::after_millis(DEBOUNCE_MS).await;
    }
}

fn is_pressed(button: &Input<'static>, active_low: bool) -> bool {
    button.is_high() != active_low
}

async fn wait_pressed(button: &mut Input<'static>, active_low: bool) {
    if active_low {
        button.wait_for_low().await
    } else {
        button.wait_for_high().await
    }
}

async fn wait_released(button: &mut Input<'static>, active_low: bool) {
    if active_low {
        button.wait_for_high().await
    } else {
        button.wait_for_low().await
    }
}
