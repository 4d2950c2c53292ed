//! Ability band classification from self-ratings, corrected by role and
//! minutes. Self-assessment starts the band; actual usage moves it.

use serde::{Deserialize, Serialize};

use crate::profile::models::{PlayerProfile, SeasonRecord, SeasonRole};
use crate::scoring::league::LeagueTier;
use crate::scoring::tables::DivisionTable;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AbilityBand {
    Low,
    Medium,
    High,
}

impl AbilityBand {
    pub fn label(&self) -> &'static str {
        match self {
            AbilityBand::Low => "low",
            AbilityBand::Medium => "medium",
            AbilityBand::High => "high",
        }
    }

    fn up(self) -> AbilityBand {
        match self {
            AbilityBand::Low => AbilityBand::Medium,
            _ => AbilityBand::High,
        }
    }

    fn down(self) -> AbilityBand {
        match self {
            AbilityBand::High => AbilityBand::Medium,
            _ => AbilityBand::Low,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityOutcome {
    pub band: AbilityBand,
    pub start_band: AbilityBand,
    /// True when top-shelf self-ratings come out of a league that cannot
    /// verify them. "Elite" in a local league is not elite nationally.
    pub verification_risk: bool,
}

/// Majority threshold over the six rating categories.
const MAJORITY: usize = 4;

pub fn classify_ability_band(profile: &PlayerProfile, tier: LeagueTier) -> AbilityOutcome {
    let ratings = profile.athletic.ratings();
    let top = ratings.iter().filter(|(_, r)| r.is_top_band()).count();
    let bottom = ratings.iter().filter(|(_, r)| r.is_bottom_band()).count();

    let start_band = if top >= MAJORITY {
        AbilityBand::High
    } else if bottom >= MAJORITY {
        AbilityBand::Low
    } else {
        AbilityBand::Medium
    };

    let verification_risk = start_band == AbilityBand::High
        && matches!(tier, LeagueTier::Low | LeagueTier::Mid);

    let mut band = start_band;
    if let Some(season) = profile.latest_season() {
        if season.main_role == SeasonRole::KeyStarter && season.minutes_played_percent >= 70 {
            band = band.up();
        } else if season.main_role == SeasonRole::Bench || season.minutes_played_percent <= 30 {
            band = band.down();
        }
    }

    AbilityOutcome {
        band,
        start_band,
        verification_risk,
    }
}

/// Extra per-division tweak for usage (on top of the band shift above).
/// A locked-in starter gets a D1/D2 push; a deep-bench player gets cut down,
/// unless the bench is in an elite league, where a D1-sized penalty still
/// leaves D2/D3 nearly intact: an MLS NEXT bench player is often a D2 starter.
pub fn role_minutes_adjustment(
    season: Option<&SeasonRecord>,
    tier: LeagueTier,
) -> (DivisionTable, String) {
    let Some(season) = season else {
        return (DivisionTable::ZERO, String::new());
    };

    let minutes = season.minutes_played_percent;
    if season.main_role == SeasonRole::KeyStarter && minutes >= 80 {
        return (
            DivisionTable::new(5.0, 5.0, 0.0, 0.0, 0.0),
            format!("key starter with {minutes}% of minutes"),
        );
    }

    if season.main_role == SeasonRole::Bench && minutes <= 20 {
        return if tier == LeagueTier::Elite {
            (
                DivisionTable::new(-20.0, -5.0, -5.0, 0.0, 0.0),
                format!("bench role ({minutes}% of minutes) in an elite league"),
            )
        } else {
            (
                DivisionTable::new(-10.0, -10.0, -10.0, -10.0, -10.0),
                format!("bench role with only {minutes}% of minutes"),
            )
        };
    }

    (DivisionTable::ZERO, String::new())
}
