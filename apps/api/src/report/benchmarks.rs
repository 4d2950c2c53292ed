//! Benchmark rows: how the player's profile measures against standard
//! divisional thresholds in three categories. Academics carries a market
//! access percentage instead of per-division lines.

use serde::{Deserialize, Serialize};

use crate::profile::models::PlayerProfile;
use crate::scoring::ability::AbilityBand;
use crate::scoring::academics;
use crate::scoring::league::LeagueTier;
use crate::scoring::tables::DivisionTable;

const PHYSICAL_THRESHOLDS: DivisionTable = DivisionTable::new(90.0, 80.0, 70.0, 80.0, 60.0);
const RESUME_THRESHOLDS: DivisionTable = DivisionTable::new(90.0, 80.0, 70.0, 80.0, 50.0);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BenchmarkCategory {
    Physical,
    #[serde(rename = "Soccer Resume")]
    SoccerResume,
    Academics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub category: BenchmarkCategory,
    pub user_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d1_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d2_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d3_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naia_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juco_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_access: Option<f64>,
    pub feedback: String,
}

fn divisional_row(
    category: BenchmarkCategory,
    user_score: f64,
    thresholds: DivisionTable,
    feedback: String,
) -> BenchmarkRow {
    BenchmarkRow {
        category,
        user_score,
        d1_score: Some(thresholds.d1),
        d2_score: Some(thresholds.d2),
        d3_score: Some(thresholds.d3),
        naia_score: Some(thresholds.naia),
        juco_score: Some(thresholds.juco),
        market_access: None,
        feedback,
    }
}

/// Feedback against the standard lines. A score at or above 90 must say it
/// clears every division, not just D1.
fn divisional_feedback(user_score: f64, juco_line: f64) -> String {
    if user_score >= 90.0 {
        "Well within all top collegiate benchmarks and suited for all divisions.".to_string()
    } else if user_score >= 80.0 {
        "Meets D2 and NAIA standards; D1 programs will want verified numbers above this line."
            .to_string()
    } else if user_score >= 70.0 {
        "Meets D3 standards; the gap to D1 and D2 benchmarks is real.".to_string()
    } else if user_score >= juco_line {
        "Meets the JUCO line; that route can close the gap to four-year benchmarks.".to_string()
    } else {
        "Below standard college benchmarks today; lean on growth curve and live evaluation."
            .to_string()
    }
}

pub fn build_benchmarks(
    profile: &PlayerProfile,
    ability: AbilityBand,
    tier: LeagueTier,
) -> Vec<BenchmarkRow> {
    let physical_score = match ability {
        AbilityBand::High => 92.0,
        AbilityBand::Medium => 75.0,
        AbilityBand::Low => 60.0,
    };
    let resume_score = match tier {
        LeagueTier::Elite => 95.0,
        LeagueTier::High => 80.0,
        LeagueTier::Mid => 65.0,
        LeagueTier::Low => 45.0,
    };
    let access = academics::market_access_percent(profile.academics.gpa);

    vec![
        divisional_row(
            BenchmarkCategory::Physical,
            physical_score,
            PHYSICAL_THRESHOLDS,
            divisional_feedback(physical_score, PHYSICAL_THRESHOLDS.juco),
        ),
        divisional_row(
            BenchmarkCategory::SoccerResume,
            resume_score,
            RESUME_THRESHOLDS,
            divisional_feedback(resume_score, RESUME_THRESHOLDS.juco),
        ),
        BenchmarkRow {
            category: BenchmarkCategory::Academics,
            user_score: access,
            d1_score: None,
            d2_score: None,
            d3_score: None,
            naia_score: None,
            juco_score: None,
            market_access: Some(access),
            feedback: format!(
                "Your GPA qualifies you for {access:.0}% of US college programs, though it \
                 may limit access to highly selective institutions."
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::*;
    use chrono::NaiveDate;

    fn profile_with_gpa(gpa: Option<f64>) -> PlayerProfile {
        PlayerProfile {
            first_name: "Dana".to_string(),
            last_name: "Whitfield".to_string(),
            email: None,
            gender: Gender::Female,
            date_of_birth: NaiveDate::from_ymd_opt(2008, 7, 2).unwrap(),
            citizenship: None,
            height_cm: None,
            dominant_foot: None,
            position: Position::CB,
            secondary_positions: vec![],
            grad_year: 2027,
            state: None,
            experience: vec![],
            seasons: vec![],
            academics: AcademicProfile {
                gpa,
                test_score: None,
            },
            athletic: AthleticSelfAssessment {
                speed: AthleticRating::Average,
                strength: AthleticRating::Average,
                endurance: AthleticRating::Average,
                work_rate: AthleticRating::Average,
                technical: AthleticRating::Average,
                tactical: AthleticRating::Average,
            },
            events: vec![],
            video: VideoStatus::None,
            coaches_contacted: 0,
            responses_received: 0,
            offers_received: 0,
        }
    }

    #[test]
    fn test_three_rows_in_fixed_order() {
        let rows = build_benchmarks(
            &profile_with_gpa(Some(3.0)),
            AbilityBand::Medium,
            LeagueTier::Mid,
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, BenchmarkCategory::Physical);
        assert_eq!(rows[1].category, BenchmarkCategory::SoccerResume);
        assert_eq!(rows[2].category, BenchmarkCategory::Academics);
    }

    #[test]
    fn test_high_scores_claim_every_division() {
        let rows = build_benchmarks(
            &profile_with_gpa(Some(4.0)),
            AbilityBand::High,
            LeagueTier::Elite,
        );
        assert_eq!(rows[0].user_score, 92.0);
        assert!(rows[0].feedback.contains("suited for all divisions"));
        assert_eq!(rows[1].user_score, 95.0);
        assert!(rows[1].feedback.contains("all divisions"));
    }

    #[test]
    fn test_academics_row_carries_market_access_only() {
        let rows = build_benchmarks(
            &profile_with_gpa(Some(3.0)),
            AbilityBand::Medium,
            LeagueTier::Mid,
        );
        let academics = &rows[2];
        assert_eq!(academics.user_score, 65.0);
        assert_eq!(academics.market_access, Some(65.0));
        assert!(academics.d1_score.is_none());
        assert!(academics.feedback.contains("65% of US college programs"));
    }

    #[test]
    fn test_divisional_thresholds_differ_only_at_juco() {
        let rows = build_benchmarks(
            &profile_with_gpa(None),
            AbilityBand::Low,
            LeagueTier::Low,
        );
        assert_eq!(rows[0].juco_score, Some(60.0));
        assert_eq!(rows[1].juco_score, Some(50.0));
        assert_eq!(rows[0].d1_score, rows[1].d1_score);
    }

    #[test]
    fn test_low_band_feedback_points_at_juco_route() {
        let rows = build_benchmarks(
            &profile_with_gpa(None),
            AbilityBand::Low,
            LeagueTier::Low,
        );
        // physical 60 sits exactly on the JUCO line; resume 45 sits under it
        assert!(rows[0].feedback.contains("JUCO"));
        assert!(rows[1].feedback.contains("Below standard"));
    }

    #[test]
    fn test_missing_gpa_gives_zero_access() {
        let rows = build_benchmarks(
            &profile_with_gpa(None),
            AbilityBand::Medium,
            LeagueTier::Mid,
        );
        assert_eq!(rows[2].user_score, 0.0);
        assert!(rows[2].feedback.contains("0% of US college programs"));
    }
}
