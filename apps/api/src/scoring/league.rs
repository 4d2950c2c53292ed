//! League tier classification — where does this player actually compete?
//!
//! Only the latest season counts; a strong league two years ago is history.
//! Multiple leagues in that season resolve to the highest tier.

use serde::{Deserialize, Serialize};

use crate::profile::models::{Gender, PlayerProfile, SeasonRecord, YouthLeague};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeagueTier {
    Elite,
    High,
    Mid,
    Low,
}

impl LeagueTier {
    pub fn label(&self) -> &'static str {
        match self {
            LeagueTier::Elite => "elite",
            LeagueTier::High => "high",
            LeagueTier::Mid => "mid",
            LeagueTier::Low => "low",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            LeagueTier::Elite => 3,
            LeagueTier::High => 2,
            LeagueTier::Mid => 1,
            LeagueTier::Low => 0,
        }
    }
}

/// Tier plus a human-readable source ("ECNL (2025)") for notes and narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierOutcome {
    pub tier: LeagueTier,
    pub source: String,
}

/// Free-text league names that plausibly describe a top academy. Anything
/// else under 'Other' stays unverifiable and classifies Low.
const ACADEMY_KEYWORDS: &[&str] = &["academy", "academie"];

pub fn classify_league_tier(profile: &PlayerProfile) -> TierOutcome {
    let Some(season) = profile.latest_season() else {
        return TierOutcome {
            tier: LeagueTier::Low,
            source: "no competitive seasons on record".to_string(),
        };
    };

    if season.leagues.is_empty() {
        return other_league_outcome(season);
    }

    let mut best: Option<(LeagueTier, YouthLeague)> = None;
    for &league in &season.leagues {
        let tier = tier_for_league(profile.gender, league, season);
        if best.map_or(true, |(t, _)| tier.rank() > t.rank()) {
            best = Some((tier, league));
        }
    }

    // best is always Some here; leagues is non-empty
    let Some((tier, league)) = best else {
        return other_league_outcome(season);
    };

    if league == YouthLeague::Other {
        return other_league_outcome(season);
    }

    let source = match (league, profile.gender) {
        (YouthLeague::MlsNext, Gender::Female) | (YouthLeague::GirlsAcademy, Gender::Male) => {
            format!(
                "{} ({}, no pathway for this gender)",
                league.label(),
                season.year
            )
        }
        _ => format!("{} ({})", league.label(), season.year),
    };

    TierOutcome { tier, source }
}

fn tier_for_league(gender: Gender, league: YouthLeague, season: &SeasonRecord) -> LeagueTier {
    match (league, gender) {
        (YouthLeague::Ecnl, _) => LeagueTier::Elite,
        (YouthLeague::MlsNext, Gender::Male) => LeagueTier::Elite,
        (YouthLeague::GirlsAcademy, Gender::Female) => LeagueTier::Elite,
        // A league with no pathway for the player's gender is an unverifiable
        // claim; same midpoint fallback as an academy-sounding 'Other'.
        (YouthLeague::MlsNext, Gender::Female) => LeagueTier::Mid,
        (YouthLeague::GirlsAcademy, Gender::Male) => LeagueTier::Mid,
        (YouthLeague::EcnlRegionalLeague, _) => LeagueTier::High,
        (YouthLeague::UsysNationalLeague, _) => LeagueTier::High,
        (YouthLeague::EliteLocal, _) => LeagueTier::Mid,
        (YouthLeague::HighSchool, _) => LeagueTier::Low,
        (YouthLeague::Other, _) => other_league_tier(season),
    }
}

fn other_league_tier(season: &SeasonRecord) -> LeagueTier {
    let candidates = [season.other_league_name.as_deref(), Some(&*season.team_name)];
    for name in candidates.into_iter().flatten() {
        let lower = name.to_lowercase();
        if ACADEMY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            return LeagueTier::Mid;
        }
    }
    LeagueTier::Low
}

fn other_league_outcome(season: &SeasonRecord) -> TierOutcome {
    let tier = other_league_tier(season);
    let name = season
        .other_league_name
        .as_deref()
        .unwrap_or(&season.team_name);
    let qualifier = match tier {
        LeagueTier::Mid => "unverified academy",
        _ => "unverified league",
    };
    TierOutcome {
        tier,
        source: format!("{} ({}, {})", name, qualifier, season.year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::*;
    use chrono::NaiveDate;

    fn make_profile(gender: Gender, seasons: Vec<SeasonRecord>) -> PlayerProfile {
        PlayerProfile {
            first_name: "Sam".to_string(),
            last_name: "Okafor".to_string(),
            email: None,
            gender,
            date_of_birth: NaiveDate::from_ymd_opt(2008, 1, 20).unwrap(),
            citizenship: None,
            height_cm: None,
            dominant_foot: None,
            position: Position::WING,
            secondary_positions: vec![],
            grad_year: 2026,
            state: None,
            experience: vec![],
            seasons,
            academics: AcademicProfile {
                gpa: Some(3.2),
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

    fn make_season(year: i32, leagues: Vec<YouthLeague>) -> SeasonRecord {
        SeasonRecord {
            year,
            team_name: "Riverside SC".to_string(),
            leagues,
            other_league_name: None,
            minutes_played_percent: 60,
            main_role: SeasonRole::Rotation,
            goals: 0,
            assists: 0,
            honors: vec![],
        }
    }

    #[test]
    fn test_mls_next_is_elite_for_boys() {
        let profile = make_profile(
            Gender::Male,
            vec![make_season(2025, vec![YouthLeague::MlsNext])],
        );
        assert_eq!(classify_league_tier(&profile).tier, LeagueTier::Elite);
    }

    #[test]
    fn test_girls_academy_is_elite_for_girls() {
        let profile = make_profile(
            Gender::Female,
            vec![make_season(2025, vec![YouthLeague::GirlsAcademy])],
        );
        assert_eq!(classify_league_tier(&profile).tier, LeagueTier::Elite);
    }

    #[test]
    fn test_ecnl_is_elite_for_both_genders() {
        for gender in [Gender::Male, Gender::Female] {
            let profile = make_profile(gender, vec![make_season(2025, vec![YouthLeague::Ecnl])]);
            assert_eq!(classify_league_tier(&profile).tier, LeagueTier::Elite);
        }
    }

    #[test]
    fn test_cross_gender_league_claim_classifies_mid() {
        let profile = make_profile(
            Gender::Female,
            vec![make_season(2025, vec![YouthLeague::MlsNext])],
        );
        let outcome = classify_league_tier(&profile);
        assert_eq!(outcome.tier, LeagueTier::Mid);
        assert!(outcome.source.contains("no pathway"));
    }

    #[test]
    fn test_regional_leagues_are_high() {
        for league in [
            YouthLeague::EcnlRegionalLeague,
            YouthLeague::UsysNationalLeague,
        ] {
            let profile = make_profile(Gender::Male, vec![make_season(2025, vec![league])]);
            assert_eq!(classify_league_tier(&profile).tier, LeagueTier::High);
        }
    }

    #[test]
    fn test_high_school_only_is_low() {
        let profile = make_profile(
            Gender::Male,
            vec![make_season(2025, vec![YouthLeague::HighSchool])],
        );
        assert_eq!(classify_league_tier(&profile).tier, LeagueTier::Low);
    }

    #[test]
    fn test_multiple_leagues_pick_highest_tier() {
        let profile = make_profile(
            Gender::Female,
            vec![make_season(
                2025,
                vec![YouthLeague::HighSchool, YouthLeague::Ecnl],
            )],
        );
        let outcome = classify_league_tier(&profile);
        assert_eq!(outcome.tier, LeagueTier::Elite);
        assert!(outcome.source.contains("ECNL"));
    }

    #[test]
    fn test_only_latest_season_counts() {
        let profile = make_profile(
            Gender::Male,
            vec![
                make_season(2024, vec![YouthLeague::Ecnl]),
                make_season(2025, vec![YouthLeague::HighSchool]),
            ],
        );
        assert_eq!(classify_league_tier(&profile).tier, LeagueTier::Low);
    }

    #[test]
    fn test_other_with_academy_name_is_mid() {
        let mut season = make_season(2025, vec![YouthLeague::Other]);
        season.other_league_name = Some("Bayside Development Academy".to_string());
        let profile = make_profile(Gender::Male, vec![season]);
        let outcome = classify_league_tier(&profile);
        assert_eq!(outcome.tier, LeagueTier::Mid);
        assert!(outcome.source.contains("unverified academy"));
    }

    #[test]
    fn test_other_academy_detected_from_team_name() {
        let mut season = make_season(2025, vec![YouthLeague::Other]);
        season.team_name = "FC Metro Academy U18".to_string();
        let profile = make_profile(Gender::Male, vec![season]);
        assert_eq!(classify_league_tier(&profile).tier, LeagueTier::Mid);
    }

    #[test]
    fn test_other_unknown_name_is_low() {
        let mut season = make_season(2025, vec![YouthLeague::Other]);
        season.other_league_name = Some("Sunday Premier Division".to_string());
        let profile = make_profile(Gender::Male, vec![season]);
        assert_eq!(classify_league_tier(&profile).tier, LeagueTier::Low);
    }

    #[test]
    fn test_no_seasons_is_low() {
        let profile = make_profile(Gender::Male, vec![]);
        let outcome = classify_league_tier(&profile);
        assert_eq!(outcome.tier, LeagueTier::Low);
        assert!(outcome.source.contains("no competitive seasons"));
    }

    #[test]
    fn test_empty_league_list_falls_back_to_team_name() {
        let mut season = make_season(2025, vec![]);
        season.team_name = "Lakeshore Academy".to_string();
        let profile = make_profile(Gender::Male, vec![season]);
        assert_eq!(classify_league_tier(&profile).tier, LeagueTier::Mid);
    }
}
