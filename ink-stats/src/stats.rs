//! Year-to-date activity totals.

use crate::units::meters_to_miles;
use serde::{Deserialize, Serialize};

/// One activity's totals as Strava reports them (distance in metres).
#[derive(Debug, Default, PartialEq, Clone, Copy, Deserialize)]
pub struct StravaTotals {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub distance: f64,
}

/// The subset of Strava's `athletes/{id}/stats` response used for the card.
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
pub struct AthleteStats {
    pub ytd_run_totals: StravaTotals,
    pub ytd_ride_totals: StravaTotals,
    pub ytd_swim_totals: StravaTotals,
}

/// Activity count and distance in whole miles.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct ActivityTotals {
    pub count: u32,
    pub distance: u32,
}

impl From<StravaTotals> for ActivityTotals {
    fn from(totals: StravaTotals) -> Self {
        ActivityTotals {
            count: totals.count,
            distance: meters_to_miles(totals.distance),
        }
    }
}

/// Trimmed-down YTD totals shown on the dashboard and the card.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct YtdStats {
    pub year: i32,
    pub run: ActivityTotals,
    pub ride: ActivityTotals,
    pub swim: ActivityTotals,
}

/// The three activities in display order.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Activity {
    Run,
    Ride,
    Swim,
}

impl Activity {
    pub const ALL: [Activity; 3] = [Activity::Run, Activity::Ride, Activity::Swim];

    /// Column heading, e.g. "Runs".
    pub fn label(self) -> &'static str {
        match self {
            Activity::Run => "Runs",
            Activity::Ride => "Rides",
            Activity::Swim => "Swims",
        }
    }
}

impl YtdStats {
    pub fn from_athlete_stats(stats: &AthleteStats, year: i32) -> Self {
        YtdStats {
            year,
            run: stats.ytd_run_totals.into(),
            ride: stats.ytd_ride_totals.into(),
            swim: stats.ytd_swim_totals.into(),
        }
    }

    pub fn totals(&self, activity: Activity) -> ActivityTotals {
        match activity {
            Activity::Run => self.run,
            Activity::Ride => self.ride,
            Activity::Swim => self.swim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS_RESPONSE: &str = r#"{
        "biggest_ride_distance": 112000.0,
        "recent_run_totals": {"count": 3, "distance": 15000.0},
        "ytd_run_totals": {"count": 112, "distance": 1046000.4, "moving_time": 301000, "elevation_gain": 4200},
        "ytd_ride_totals": {"count": 41, "distance": 2012000.0, "moving_time": 250000, "elevation_gain": 9100},
        "ytd_swim_totals": {"count": 0, "distance": 0.0, "moving_time": 0, "elevation_gain": 0}
    }"#;

    #[test]
    fn test_from_athlete_stats() {
        let raw: AthleteStats = serde_json::from_str(STATS_RESPONSE).unwrap();
        let stats = YtdStats::from_athlete_stats(&raw, 2024);
        assert_eq!(stats.year, 2024);
        assert_eq!(stats.run, ActivityTotals { count: 112, distance: 650 });
        assert_eq!(stats.ride, ActivityTotals { count: 41, distance: 1250 });
        assert_eq!(stats.swim, ActivityTotals::default());
    }

    #[test]
    fn test_wire_shape() {
        let stats = YtdStats {
            year: 2024,
            run: ActivityTotals { count: 2, distance: 10 },
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["year"], 2024);
        assert_eq!(json["run"]["count"], 2);
        assert_eq!(json["run"]["distance"], 10);
        assert_eq!(json["swim"]["distance"], 0);
    }

    #[test]
    fn test_activity_order() {
        let labels: Vec<&str> = Activity::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["Runs", "Rides", "Swims"]);
    }
}
