//! Climb task
//!
//! Owns the climber, the drive train and the dashboard. Every tick it
//! samples the sensors, then ticks the climb sequence. Operator commands
//! arrive between ticks and act on the last sampled readings.

use defmt::*;
use embassy_futures::select::{select, Either};
use portable_atomic::Ordering;

use astro_core::climb::{ClimbAction, ClimbSequence};
use astro_core::state::SequenceState;
use astro_drivers::Dashboard;

use crate::channels::{ClimbCommand, CLIMB_ACTIVE, CLIMB_CMD};
use crate::hw::{RobotClimber, RobotDrive};
use crate::tasks::tick::TICK_SIGNAL;

/// Dashboard dump period over the debug link
const DUMP_INTERVAL_MS: u32 = 1_000;

#[embassy_executor::task]
pub async fn climb_task(mut climber: RobotClimber, mut drive: RobotDrive) {
    info!("Climb task started");
    for action in ClimbAction::ALL {
        info!("climb: action \"{}\" available", action.name());
    }

    let mut store: Dashboard = Dashboard::new();
    let mut sequence = ClimbSequence::climb_up();
    let mut last_dump_ms = 0u32;

    // Robot sits level at power-on: first reading becomes the lean zero
    TICK_SIGNAL.wait().await;
    climber.periodic(&mut store);
    climber.zero_lean();

    loop {
        match select(TICK_SIGNAL.wait(), CLIMB_CMD.wait()).await {
            Either::First(now_ms) => {
                climber.periodic(&mut store);
                let state = sequence.tick(&mut climber, &mut drive, &mut store);
                CLIMB_ACTIVE.store(state.is_running(), Ordering::Release);

                if now_ms.wrapping_sub(last_dump_ms) >= DUMP_INTERVAL_MS {
                    last_dump_ms = now_ms;
                    dump(&store);
                }
            }
            Either::Second(command) => {
                handle_command(command, &mut sequence, &mut climber, &mut drive, &mut store);
                CLIMB_ACTIVE.store(sequence.state().is_running(), Ordering::Release);
            }
        }
    }
}

fn handle_command(
    command: ClimbCommand,
    sequence: &mut ClimbSequence,
    climber: &mut RobotClimber,
    drive: &mut RobotDrive,
    store: &mut Dashboard,
) {
    match command {
        ClimbCommand::Start(action) => {
            if sequence.state().is_running() {
                warn!("climb: {} already running", sequence.action().name());
                return;
            }
            if sequence.action() != action {
                *sequence = ClimbSequence::new(action, true);
            }
            let state = sequence.start(&*climber, drive, store);
            if state == SequenceState::Finished {
                warn!("climb: {} has no steps", action.name());
            }
        }
        ClimbCommand::Cancel => sequence.cancel(),
        ClimbCommand::ZeroLean => {
            if sequence.state().is_running() {
                warn!("climb: not re-zeroing lean mid-climb");
            } else {
                climber.zero_lean();
            }
        }
    }
}

fn dump(store: &Dashboard) {
    for (key, value) in store.iter() {
        debug!("{}: {}", key, value);
    }
}
