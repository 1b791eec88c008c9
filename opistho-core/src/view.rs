//! Display view model
//!
//! Maps a state snapshot to the content of the status screen. Rendering
//! and layout belong to the display collaborator; this module only decides
//! *what* is shown, which is ECU logic (mode selection, range banding).

use crate::led::{FAST_DISTANCE_CM, NEAR_DISTANCE_CM};
use crate::state::StateSnapshot;

/// Outer edge of the "NEAR" band, in centimeters
pub const NEAR_VISIBLE_CM: u16 = 100;

/// Range classification shown while reverse assist is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeStatus {
    /// Obstacle within the fast-blink band (or no echo)
    Danger,
    /// Obstacle within the caution band
    Caution,
    /// Obstacle visible but not yet in a warning band
    Near,
    /// Nothing within range
    Safe,
}

impl RangeStatus {
    /// Classify a distance reading
    ///
    /// The no-echo sentinel (0) lands in `Danger`: with reverse assist
    /// active, "no reading" must not display as safe.
    pub fn for_distance(distance_cm: u16) -> Self {
        if distance_cm <= FAST_DISTANCE_CM {
            RangeStatus::Danger
        } else if distance_cm <= NEAR_DISTANCE_CM {
            RangeStatus::Caution
        } else if distance_cm <= NEAR_VISIBLE_CM {
            RangeStatus::Near
        } else {
            RangeStatus::Safe
        }
    }

    /// Status word shown on the display
    pub fn label(&self) -> &'static str {
        match self {
            RangeStatus::Danger => "DANGER",
            RangeStatus::Caution => "CAUTION",
            RangeStatus::Near => "NEAR",
            RangeStatus::Safe => "SAFE",
        }
    }
}

/// Screen content for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenModel {
    /// Reverse assist inactive: ambient status page
    Normal {
        temperature_c: Option<f32>,
        humidity_pct: Option<f32>,
    },
    /// Reverse assist active: distance page
    ReverseAssist {
        distance_cm: u16,
        status: RangeStatus,
        temperature_c: Option<f32>,
        humidity_pct: Option<f32>,
    },
}

/// Select and populate the screen for the current snapshot
pub fn screen_for(snapshot: &StateSnapshot) -> ScreenModel {
    let temperature_c = snapshot.ambient.map(|a| a.temperature_c);
    let humidity_pct = snapshot.ambient.map(|a| a.humidity_pct);

    if snapshot.sensors_enabled {
        ScreenModel::ReverseAssist {
            distance_cm: snapshot.distance_cm,
            status: RangeStatus::for_distance(snapshot.distance_cm),
            temperature_c,
            humidity_pct,
        }
    } else {
        ScreenModel::Normal {
            temperature_c,
            humidity_pct,
        }
    }
}
