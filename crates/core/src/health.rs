//! Wardrobe health: garments left unworn during the season they are meant for.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::domain::{Garment, Season};

/// Days without wear after which an in-season garment counts as stale.
pub const DEFAULT_STALE_AFTER_DAYS: i64 = 30;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaleGarment<'a> {
    pub garment: &'a Garment,
    pub days_since_worn: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthDetector {
    stale_after_days: i64,
}

impl Default for HealthDetector {
    fn default() -> Self {
        Self { stale_after_days: DEFAULT_STALE_AFTER_DAYS }
    }
}

impl HealthDetector {
    pub fn new(stale_after_days: i64) -> Self {
        Self { stale_after_days }
    }

    pub fn stale_after_days(&self) -> i64 {
        self.stale_after_days
    }

    pub fn check_now<'a>(&self, garments: &'a [Garment], season: Season) -> Vec<StaleGarment<'a>> {
        self.check(garments, season, Local::now().date_naive())
    }

    /// Garments suitable for `season` that have gone unworn for strictly more
    /// than the threshold, in wardrobe order.
    pub fn check<'a>(
        &self,
        garments: &'a [Garment],
        season: Season,
        today: NaiveDate,
    ) -> Vec<StaleGarment<'a>> {
        let stale: Vec<StaleGarment<'a>> = garments
            .iter()
            .filter(|garment| garment.seasons().contains(&season))
            .map(|garment| StaleGarment { garment, days_since_worn: garment.days_since_worn(today) })
            .filter(|entry| entry.days_since_worn > self.stale_after_days)
            .collect();

        debug!(
            event_name = "health.checked",
            season = %season,
            wardrobe_size = garments.len(),
            stale_count = stale.len(),
            threshold_days = self.stale_after_days,
            "wardrobe health checked"
        );

        stale
    }
}
