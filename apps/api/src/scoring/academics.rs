//! Academic band classification and the GPA-to-market-access curve.
//!
//! A missing GPA is a Problem, not a neutral: NCAA eligibility cannot be
//! assessed without one, and coaches will not chase a transcript.

use serde::{Deserialize, Serialize};

use crate::profile::models::AcademicProfile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AcademicBand {
    High,
    Solid,
    Risky,
    Problem,
}

impl AcademicBand {
    pub fn label(&self) -> &'static str {
        match self {
            AcademicBand::High => "high",
            AcademicBand::Solid => "solid",
            AcademicBand::Risky => "risky",
            AcademicBand::Problem => "problem",
        }
    }
}

/// NCAA Eligibility Center minimum core GPA. Below this the player cannot
/// receive an NCAA scholarship regardless of ability.
pub const NCAA_MINIMUM_GPA: f64 = 2.3;

pub fn classify_academic_band(academics: &AcademicProfile) -> AcademicBand {
    match academics.gpa {
        Some(gpa) if gpa >= 3.7 => AcademicBand::High,
        Some(gpa) if gpa >= 3.0 => AcademicBand::Solid,
        Some(gpa) if gpa >= NCAA_MINIMUM_GPA => AcademicBand::Risky,
        _ => AcademicBand::Problem,
    }
}

/// Anchor points mapping unweighted GPA to the share of US college programs
/// whose admissions bar it clears. Linear between anchors; the cliff below
/// 2.5 is the combined loss of D3 and selective-admission schools.
const GPA_ACCESS_CURVE: &[(f64, f64)] = &[
    (2.3, 0.0),
    (2.5, 20.0),
    (3.0, 65.0),
    (3.5, 85.0),
    (4.0, 100.0),
];

/// Market access percentage for a GPA. Weighted GPAs above 4.0 cap at 100;
/// below the NCAA minimum (or missing) the answer is zero.
pub fn market_access_percent(gpa: Option<f64>) -> f64 {
    let Some(gpa) = gpa else {
        return 0.0;
    };

    let (floor, _) = GPA_ACCESS_CURVE[0];
    if gpa < floor {
        return 0.0;
    }
    let (ceiling, max_access) = GPA_ACCESS_CURVE[GPA_ACCESS_CURVE.len() - 1];
    if gpa >= ceiling {
        return max_access;
    }

    for window in GPA_ACCESS_CURVE.windows(2) {
        let (x0, y0) = window[0];
        let (x1, y1) = window[1];
        if gpa <= x1 {
            return y0 + (gpa - x0) / (x1 - x0) * (y1 - y0);
        }
    }

    max_access
}

#[cfg(test)]
mod tests {
    use super::*;

    fn academics(gpa: Option<f64>) -> AcademicProfile {
        AcademicProfile {
            gpa,
            test_score: None,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(classify_academic_band(&academics(Some(3.7))), AcademicBand::High);
        assert_eq!(classify_academic_band(&academics(Some(3.69))), AcademicBand::Solid);
        assert_eq!(classify_academic_band(&academics(Some(3.0))), AcademicBand::Solid);
        assert_eq!(classify_academic_band(&academics(Some(2.99))), AcademicBand::Risky);
        assert_eq!(classify_academic_band(&academics(Some(2.3))), AcademicBand::Risky);
        assert_eq!(classify_academic_band(&academics(Some(2.29))), AcademicBand::Problem);
    }

    #[test]
    fn test_missing_gpa_is_a_problem() {
        assert_eq!(classify_academic_band(&academics(None)), AcademicBand::Problem);
    }

    #[test]
    fn test_market_access_anchor_points() {
        assert_close(market_access_percent(Some(4.0)), 100.0);
        assert_close(market_access_percent(Some(3.5)), 85.0);
        assert_close(market_access_percent(Some(3.0)), 65.0);
        assert_close(market_access_percent(Some(2.5)), 20.0);
        assert_close(market_access_percent(Some(2.3)), 0.0);
    }

    #[test]
    fn test_market_access_interpolates_between_anchors() {
        // 3.2 sits 40% of the way from 3.0 (65) to 3.5 (85)
        assert_close(market_access_percent(Some(3.2)), 73.0);
        assert_close(market_access_percent(Some(2.65)), 33.5);
        assert_close(market_access_percent(Some(3.75)), 92.5);
    }

    #[test]
    fn test_weighted_gpa_caps_at_100() {
        assert_close(market_access_percent(Some(4.4)), 100.0);
    }

    #[test]
    fn test_below_ncaa_minimum_is_zero() {
        assert_close(market_access_percent(Some(2.1)), 0.0);
        assert_close(market_access_percent(Some(1.0)), 0.0);
    }

    #[test]
    fn test_missing_gpa_has_zero_access() {
        assert_close(market_access_percent(None), 0.0);
    }

    #[test]
    fn test_curve_is_monotonic() {
        let mut previous = -1.0;
        let mut gpa = 2.0;
        while gpa <= 4.2 {
            let access = market_access_percent(Some(gpa));
            assert!(access >= previous, "curve dipped at GPA {gpa}");
            previous = access;
            gpa += 0.05;
        }
    }
}
