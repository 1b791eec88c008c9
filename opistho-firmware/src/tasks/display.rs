//! Display task
//!
//! Consumes the per-tick snapshot and forwards the view model to the
//! status display. The physical renderer is a separate collaborator; on
//! this board the screen content goes out over defmt.

use defmt::*;

use opistho_core::view::{screen_for, ScreenModel};

use crate::channels::SNAPSHOT;

/// Display task, driven by the snapshot signal
#[embassy_executor::task]
pub async fn display_task() {
    info!("Display task started");

    let mut last_screen: Option<ScreenModel> = None;
    loop {
        let snapshot = SNAPSHOT.wait().await;
        let screen = screen_for(&snapshot);

        // One log line per content change, not per tick
        if last_screen == Some(screen) {
            continue;
        }
        last_screen = Some(screen);

        match screen {
            ScreenModel::Normal {
                temperature_c,
                humidity_pct,
            } => {
                info!(
                    "ECU STATUS temp={}C hum={}% mode=NORMAL",
                    temperature_c.unwrap_or(0.0),
                    humidity_pct.unwrap_or(0.0),
                );
            }
            ScreenModel::ReverseAssist {
                distance_cm,
                status,
                temperature_c,
                humidity_pct,
            } => {
                info!(
                    "REVERSE ASSIST {}cm status={=str} temp={}C hum={}%",
                    distance_cm,
                    status.label(),
                    temperature_c.unwrap_or(0.0),
                    humidity_pct.unwrap_or(0.0),
                );
            }
        }
    }
}
