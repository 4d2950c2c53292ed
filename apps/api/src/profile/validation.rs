use serde::{Deserialize, Serialize};

use crate::profile::models::PlayerProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileValidation {
    pub passed: bool,
    pub issues: Vec<String>,
}

const MAX_NAME_CHARS: usize = 100;
const MAX_EMAIL_CHARS: usize = 254;
const GRAD_YEAR_MIN: i32 = 2020;
const GRAD_YEAR_MAX: i32 = 2035;
const SEASON_YEAR_MIN: i32 = 1990;
/// Upper bound on the serialized profile. Anything larger is either a bug in
/// the intake form or an attempt to stuff free text into the assessment.
const MAX_PROFILE_BYTES: usize = 10_000;

/// Field-level checks on a submitted profile.
///
/// Enum fields (gender, position, ratings, leagues) are already enforced by
/// deserialization; this covers the constraints the type system cannot.
pub fn validate_profile(profile: &PlayerProfile) -> ProfileValidation {
    let mut issues = Vec::new();

    if profile.first_name.trim().is_empty() || profile.first_name.len() > MAX_NAME_CHARS {
        issues.push(format!(
            "first_name must be 1-{MAX_NAME_CHARS} characters"
        ));
    }
    if profile.last_name.trim().is_empty() || profile.last_name.len() > MAX_NAME_CHARS {
        issues.push(format!("last_name must be 1-{MAX_NAME_CHARS} characters"));
    }

    if let Some(email) = &profile.email {
        if !email.contains('@') || email.len() > MAX_EMAIL_CHARS {
            issues.push("email is not a valid address".to_string());
        }
    }

    if profile.grad_year < GRAD_YEAR_MIN || profile.grad_year > GRAD_YEAR_MAX {
        issues.push(format!(
            "grad_year must be between {GRAD_YEAR_MIN} and {GRAD_YEAR_MAX}"
        ));
    }

    if let Some(gpa) = profile.academics.gpa {
        if !(0.0..=5.0).contains(&gpa) {
            issues.push("academics.gpa must be between 0.0 and 5.0".to_string());
        }
    }

    for (i, season) in profile.seasons.iter().enumerate() {
        if season.minutes_played_percent > 100 {
            issues.push(format!(
                "seasons[{i}].minutes_played_percent must be at most 100"
            ));
        }
        if season.year < SEASON_YEAR_MIN || season.year > GRAD_YEAR_MAX {
            issues.push(format!(
                "seasons[{i}].year must be between {SEASON_YEAR_MIN} and {GRAD_YEAR_MAX}"
            ));
        }
        if season.team_name.trim().is_empty() {
            issues.push(format!("seasons[{i}].team_name must not be empty"));
        }
    }

    if profile.responses_received > profile.coaches_contacted {
        issues.push("responses_received cannot exceed coaches_contacted".to_string());
    }

    if let Ok(serialized) = serde_json::to_string(profile) {
        if serialized.len() > MAX_PROFILE_BYTES {
            issues.push(format!(
                "profile exceeds the {MAX_PROFILE_BYTES}-byte limit"
            ));
        }
    }

    ProfileValidation {
        passed: issues.is_empty(),
        issues,
    }
}
