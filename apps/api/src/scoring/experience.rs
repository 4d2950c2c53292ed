//! Maturity and market-dynamics adjustments.
//!
//! College soccer is 18-24 year olds competing together, so adult-level and
//! international experience outweigh almost any youth credential. Gender
//! drives both the recruiting calendar (women commit earlier) and position
//! scarcity (goalkeepers, above all in the women's game).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::profile::models::{ExperienceLevel, Gender, Position};
use crate::scoring::tables::DivisionTable;

/// Age above which coaches project a "college body" onto the player.
pub const COLLEGE_BODY_AGE_YEARS: f64 = 18.5;

pub fn age_years(date_of_birth: NaiveDate, as_of: NaiveDate) -> f64 {
    (as_of - date_of_birth).num_days() as f64 / 365.25
}

pub fn maturity_adjustment(date_of_birth: NaiveDate, as_of: NaiveDate) -> (DivisionTable, String) {
    let age = age_years(date_of_birth, as_of);
    if age > COLLEGE_BODY_AGE_YEARS {
        (
            DivisionTable::new(5.0, 5.0, 0.0, 5.0, 0.0),
            format!("age {age:.1}: college-ready physically"),
        )
    } else {
        (DivisionTable::ZERO, String::new())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience tiers and breadth
// ────────────────────────────────────────────────────────────────────────────

/// Tier 1 is a pro academy reserve side; tier 2 semi-pro or an international
/// U19 academy; tier 3 adult amateur league. Youth club and high school
/// varsity are the baseline and earn nothing here.
fn experience_tier(level: ExperienceLevel) -> Option<u8> {
    match level {
        ExperienceLevel::ProAcademyReserve => Some(1),
        ExperienceLevel::SemiPro | ExperienceLevel::InternationalAcademyU19 => Some(2),
        ExperienceLevel::AdultAmateurLeague => Some(3),
        ExperienceLevel::YouthClubOnly | ExperienceLevel::HighSchoolVarsity => None,
    }
}

/// The highest applicable tier wins; lower tiers do not stack on top of it.
/// Returns the level that earned the bonus so callers can name it.
pub fn experience_tier_bonus(
    experience: &[ExperienceLevel],
) -> (DivisionTable, Option<ExperienceLevel>) {
    let mut best: Option<(u8, ExperienceLevel)> = None;
    for &level in experience {
        if let Some(tier) = experience_tier(level) {
            if best.map_or(true, |(t, _)| tier < t) {
                best = Some((tier, level));
            }
        }
    }

    match best {
        Some((1, level)) => (DivisionTable::new(15.0, 15.0, 5.0, 10.0, 5.0), Some(level)),
        Some((2, level)) => (DivisionTable::new(12.0, 12.0, 5.0, 8.0, 5.0), Some(level)),
        Some((_, level)) => (DivisionTable::new(5.0, 8.0, 3.0, 8.0, 5.0), Some(level)),
        None => (DivisionTable::ZERO, None),
    }
}

/// Breadth across distinct tier 1-3 environments. A player who competed in
/// UPSL and trained at a Bundesliga U19 has proven adaptability; the larger
/// bracket applies, not both.
pub fn breadth_bonus(experience: &[ExperienceLevel]) -> (DivisionTable, usize) {
    const COUNTABLE: [ExperienceLevel; 4] = [
        ExperienceLevel::AdultAmateurLeague,
        ExperienceLevel::SemiPro,
        ExperienceLevel::InternationalAcademyU19,
        ExperienceLevel::ProAcademyReserve,
    ];
    let distinct = COUNTABLE
        .iter()
        .filter(|l| experience.contains(l))
        .count();

    let table = match distinct {
        0 | 1 => DivisionTable::ZERO,
        2 => DivisionTable::new(5.0, 5.0, 0.0, 3.0, 0.0),
        _ => DivisionTable::new(8.0, 8.0, 5.0, 5.0, 0.0),
    };
    (table, distinct)
}

/// True when the list carries tier 1 or 2 experience. Drives the tactical
/// readiness bonus and the maturity sentence in the summary.
pub fn has_advanced_experience(experience: &[ExperienceLevel]) -> bool {
    experience
        .iter()
        .any(|&l| matches!(experience_tier(l), Some(1) | Some(2)))
}

// ────────────────────────────────────────────────────────────────────────────
// Recruiting timeline
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimelineWindow {
    /// Inside the window where coaches for this gender actively commit.
    Peak,
    /// Graduation imminent; every week without outreach costs options.
    Closing,
    /// Years out. No penalty, but the profile should be built now.
    Early,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineOutcome {
    pub adjustment: DivisionTable,
    pub window: TimelineWindow,
    pub years_to_grad: i32,
}

/// Women's coaches evaluate and commit earlier than men's: the female peak
/// window is 2-3 years out, the male one 0-2. A grad year already in the
/// past is treated as graduating now.
pub fn timeline_outcome(gender: Gender, grad_year: i32, as_of: NaiveDate) -> TimelineOutcome {
    let years = (grad_year - as_of.year()).max(0);

    let (adjustment, window) = match gender {
        Gender::Female => {
            if years <= 1 {
                (DivisionTable::new(-5.0, -5.0, 0.0, 0.0, 0.0), TimelineWindow::Closing)
            } else if years <= 3 {
                (DivisionTable::new(5.0, 5.0, 0.0, 0.0, 0.0), TimelineWindow::Peak)
            } else {
                (DivisionTable::ZERO, TimelineWindow::Early)
            }
        }
        Gender::Male => {
            if years <= 2 {
                (DivisionTable::new(5.0, 5.0, 0.0, 0.0, 0.0), TimelineWindow::Peak)
            } else {
                (DivisionTable::ZERO, TimelineWindow::Neutral)
            }
        }
    };

    TimelineOutcome {
        adjustment,
        window,
        years_to_grad: years,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Position scarcity
// ────────────────────────────────────────────────────────────────────────────

/// Goalkeeper is the hardest position to recruit, especially in the women's
/// game; defensive spine positions follow. Attacking markets are saturated
/// and get nothing.
pub fn position_scarcity_adjustment(gender: Gender, position: Position) -> (DivisionTable, String) {
    match (position, gender) {
        (Position::GK, Gender::Female) => (
            DivisionTable::new(8.0, 5.0, 0.0, 0.0, 0.0),
            "female goalkeeper: the #1 recruiting need in the women's game".to_string(),
        ),
        (Position::GK, Gender::Male) => (
            DivisionTable::new(3.0, 3.0, 0.0, 0.0, 0.0),
            "goalkeeper: moderate scarcity".to_string(),
        ),
        (Position::CB | Position::DM, Gender::Female) => (
            DivisionTable::new(3.0, 3.0, 0.0, 0.0, 0.0),
            format!("{}: defensive positions in high demand", position.label()),
        ),
        _ => (DivisionTable::ZERO, String::new()),
    }
}
