//! The scoring pipeline.
//!
//! Order is fixed: classify (league tier, ability band, academic band) →
//! base table → additive adjustments → clamp to the on-paper score →
//! market multipliers → final visibility. Every step that moves a number
//! writes a factor entry, so a report can show exactly how each percentage
//! was produced.
//!
//! `score_profile` is deterministic: identical profile and `as_of` date give
//! identical output. It never reads the clock, environment, or network.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::models::{PlayerProfile, VideoStatus};
use crate::scoring::ability::{self, AbilityOutcome};
use crate::scoring::academics::{self, AcademicBand};
use crate::scoring::experience::{self, TimelineOutcome, TimelineWindow};
use crate::scoring::league::{self, TierOutcome};
use crate::scoring::market::{self, OutreachOutcome};
use crate::scoring::tables::{self, Division, DivisionTable};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One applied factor for one division: what moved the number, and to where.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorContribution {
    pub label: String,
    pub detail: String,
    pub before: f64,
    pub after: f64,
}

/// Presentation bands for a visibility percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityBand {
    VeryLow,
    Low,
    Medium,
    High,
}

impl ProbabilityBand {
    pub fn from_percent(percent: f64) -> Self {
        if percent < 25.0 {
            ProbabilityBand::VeryLow
        } else if percent < 50.0 {
            ProbabilityBand::Low
        } else if percent < 75.0 {
            ProbabilityBand::Medium
        } else {
            ProbabilityBand::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProbabilityBand::VeryLow => "very low",
            ProbabilityBand::Low => "low",
            ProbabilityBand::Medium => "medium",
            ProbabilityBand::High => "high",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionScore {
    pub level: Division,
    /// Score after all additive adjustments, before market multipliers.
    pub on_paper_fit: f64,
    /// What coaches can actually see today: on-paper × video × outreach.
    pub visibility_percent: f64,
    pub probability: ProbabilityBand,
    pub notes: String,
    pub breakdown: Vec<FactorContribution>,
}

/// Full engine output: five division scores plus every classification the
/// report builders need downstream.
#[derive(Debug, Clone)]
pub struct VisibilityAssessment {
    pub scores: Vec<DivisionScore>,
    pub primary_level: Division,
    pub league: TierOutcome,
    pub ability: AbilityOutcome,
    pub academic_band: AcademicBand,
    pub outreach: OutreachOutcome,
    pub timeline: TimelineOutcome,
    pub as_of: NaiveDate,
}

impl VisibilityAssessment {
    /// Current visibility for one division.
    pub fn visibility(&self, division: Division) -> f64 {
        self.scores
            .iter()
            .find(|s| s.level == division)
            .map(|s| s.visibility_percent)
            .unwrap_or(0.0)
    }

    pub fn on_paper(&self, division: Division) -> f64 {
        self.scores
            .iter()
            .find(|s| s.level == division)
            .map(|s| s.on_paper_fit)
            .unwrap_or(0.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Working tally
// ────────────────────────────────────────────────────────────────────────────

/// Five running scores plus a factor ledger per division.
struct Tally {
    values: DivisionTable,
    ledgers: Vec<Vec<FactorContribution>>,
}

impl Tally {
    fn new(base: DivisionTable, detail: &str) -> Self {
        let mut ledgers = Vec::with_capacity(Division::ALL.len());
        for division in Division::ALL {
            ledgers.push(vec![FactorContribution {
                label: "League baseline".to_string(),
                detail: detail.to_string(),
                before: 0.0,
                after: base.get(division),
            }]);
        }
        Tally {
            values: base,
            ledgers,
        }
    }

    /// Adds a per-division adjustment, recording an entry wherever the
    /// delta is non-zero.
    fn apply(&mut self, label: &str, detail: &str, adjustment: DivisionTable) {
        if adjustment.is_zero() {
            return;
        }
        for (i, division) in Division::ALL.iter().enumerate() {
            let delta = adjustment.get(*division);
            if delta == 0.0 {
                continue;
            }
            let before = self.values.get(*division);
            let after = before + delta;
            *self.values.get_mut(*division) = after;
            self.ledgers[i].push(FactorContribution {
                label: label.to_string(),
                detail: detail.to_string(),
                before,
                after,
            });
        }
    }

    /// Multiplies every division by a factor (market multipliers).
    fn scale(&mut self, label: &str, detail: &str, factor: f64) {
        if factor == 1.0 {
            return;
        }
        for (i, division) in Division::ALL.iter().enumerate() {
            let before = self.values.get(*division);
            let after = before * factor;
            *self.values.get_mut(*division) = after;
            self.ledgers[i].push(FactorContribution {
                label: label.to_string(),
                detail: detail.to_string(),
                before,
                after,
            });
        }
    }

    /// Clamps every division into 0..=100, recording only where it bit.
    fn clamp(&mut self, label: &str) {
        for (i, division) in Division::ALL.iter().enumerate() {
            let before = self.values.get(*division);
            let after = before.clamp(0.0, 100.0);
            if after != before {
                *self.values.get_mut(*division) = after;
                self.ledgers[i].push(FactorContribution {
                    label: label.to_string(),
                    detail: "score limited to the 0-100 range".to_string(),
                    before,
                    after,
                });
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub fn score_profile(profile: &PlayerProfile, as_of: NaiveDate) -> VisibilityAssessment {
    let league = league::classify_league_tier(profile);
    let ability = ability::classify_ability_band(profile, league.tier);
    let academic_band = academics::classify_academic_band(&profile.academics);
    let outreach = market::classify_outreach(
        profile.coaches_contacted,
        profile.responses_received,
        profile.offers_received,
    );
    let timeline = experience::timeline_outcome(profile.gender, profile.grad_year, as_of);

    let base = tables::base_visibility(profile.gender, league.tier);
    let mut tally = Tally::new(
        base,
        &format!("{} tier, {}", league.tier.label(), league.source),
    );

    tally.apply(
        "Ability band",
        &format!("{} ability", ability.band.label()),
        tables::ability_adjustment(ability.band),
    );

    let gpa_detail = match profile.academics.gpa {
        Some(gpa) => format!("{} academics (GPA {gpa:.1})", academic_band.label()),
        None => "no GPA on record".to_string(),
    };
    tally.apply(
        "Academics",
        &gpa_detail,
        tables::academic_adjustment(academic_band),
    );

    let (role_adj, role_detail) =
        ability::role_minutes_adjustment(profile.latest_season(), league.tier);
    tally.apply("Role and minutes", &role_detail, role_adj);

    let (maturity_adj, maturity_detail) =
        experience::maturity_adjustment(profile.date_of_birth, as_of);
    tally.apply("Maturity", &maturity_detail, maturity_adj);

    let (exp_adj, exp_source) = experience::experience_tier_bonus(&profile.experience);
    let exp_detail = exp_source.map(|l| l.label().to_string()).unwrap_or_default();
    tally.apply("Experience", &exp_detail, exp_adj);

    let (breadth_adj, breadth_count) = experience::breadth_bonus(&profile.experience);
    tally.apply(
        "Experience breadth",
        &format!("{breadth_count} distinct adult or pro environments"),
        breadth_adj,
    );

    tally.apply(
        "Recruiting timeline",
        &timeline_detail(&timeline),
        timeline.adjustment,
    );

    let (scarcity_adj, scarcity_detail) =
        experience::position_scarcity_adjustment(profile.gender, profile.position);
    tally.apply("Position scarcity", &scarcity_detail, scarcity_adj);

    tally.clamp("On-paper cap");
    let on_paper = tally.values;

    tally.scale("Video", video_detail(profile.video), market::video_multiplier(profile.video));
    tally.scale(
        "Outreach",
        &format!(
            "{} ({} contacted, {:.0}% reply rate)",
            outreach.tag.label(),
            profile.coaches_contacted,
            outreach.reply_rate_percent
        ),
        outreach.multiplier,
    );
    tally.clamp("Final cap");

    let mut scores = Vec::with_capacity(Division::ALL.len());
    for (i, division) in Division::ALL.iter().enumerate() {
        let visibility = tally.values.get(*division).round();
        let probability = ProbabilityBand::from_percent(visibility);
        let notes = compose_notes(probability, &tally.ledgers[i]);
        scores.push(DivisionScore {
            level: *division,
            on_paper_fit: on_paper.get(*division),
            visibility_percent: visibility,
            probability,
            notes,
            breakdown: std::mem::take(&mut tally.ledgers[i]),
        });
    }

    let mut primary_level = Division::D1;
    let mut best = f64::MIN;
    for score in &scores {
        // strict comparison: ties resolve to the higher-profile division
        if score.visibility_percent > best {
            best = score.visibility_percent;
            primary_level = score.level;
        }
    }

    debug!(
        "scored {}: tier={}, ability={}, academics={}, outreach={}, primary={}",
        profile.full_name(),
        league.tier.label(),
        ability.band.label(),
        academic_band.label(),
        outreach.tag.label(),
        primary_level.label()
    );

    VisibilityAssessment {
        scores,
        primary_level,
        league,
        ability,
        academic_band,
        outreach,
        timeline,
        as_of,
    }
}

fn timeline_detail(timeline: &TimelineOutcome) -> String {
    let years = timeline.years_to_grad;
    match timeline.window {
        TimelineWindow::Peak => format!("peak recruiting window ({years} year(s) to graduation)"),
        TimelineWindow::Closing => format!("window closing ({years} year(s) to graduation)"),
        TimelineWindow::Early => format!("early: {years} years to graduation"),
        TimelineWindow::Neutral => "standard timeline".to_string(),
    }
}

fn video_detail(video: VideoStatus) -> &'static str {
    match video {
        VideoStatus::EditedHighlightReel => "edited highlight reel",
        VideoStatus::RawGameFootage => "raw game footage only",
        VideoStatus::None => "no video at all",
    }
}

/// One-line explanation per division: the odds, plus the single biggest
/// positive and negative factor from the ledger.
fn compose_notes(probability: ProbabilityBand, ledger: &[FactorContribution]) -> String {
    let mut note = match probability {
        ProbabilityBand::VeryLow => "Not a realistic target today.".to_string(),
        ProbabilityBand::Low => "A stretch today.".to_string(),
        ProbabilityBand::Medium => "In reach with the right execution.".to_string(),
        ProbabilityBand::High => "A strong, realistic target.".to_string(),
    };

    let mut best: Option<(&FactorContribution, f64)> = None;
    let mut worst: Option<(&FactorContribution, f64)> = None;
    for entry in ledger.iter().skip(1) {
        let delta = entry.after - entry.before;
        if delta > 0.0 && best.map_or(true, |(_, d)| delta > d) {
            best = Some((entry, delta));
        }
        if delta < 0.0 && worst.map_or(true, |(_, d)| delta < d) {
            worst = Some((entry, delta));
        }
    }

    if let Some((entry, _)) = best {
        note.push_str(&format!(" Biggest lift: {}.", entry.label.to_lowercase()));
    }
    if let Some((entry, _)) = worst {
        note.push_str(&format!(" Biggest drag: {}.", entry.label.to_lowercase()));
    }
    note
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::*;
    use crate::scoring::ability::AbilityBand;
    use crate::scoring::league::LeagueTier;
    use crate::scoring::market::OutreachTag;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Male ECNL key starter, solid academics, edited reel, healthy outreach.
    fn elite_boy_starter() -> PlayerProfile {
        PlayerProfile {
            first_name: "Jordan".to_string(),
            last_name: "Reyes".to_string(),
            email: Some("jordan@example.com".to_string()),
            gender: Gender::Male,
            date_of_birth: date(2008, 3, 14),
            citizenship: Some("USA".to_string()),
            height_cm: Some(180),
            dominant_foot: Some(Foot::Right),
            position: Position::CM,
            secondary_positions: vec![Position::DM],
            grad_year: 2026,
            state: Some("TX".to_string()),
            experience: vec![ExperienceLevel::YouthClubOnly],
            seasons: vec![SeasonRecord {
                year: 2025,
                team_name: "Dallas Texans".to_string(),
                leagues: vec![YouthLeague::Ecnl],
                other_league_name: None,
                minutes_played_percent: 85,
                main_role: SeasonRole::KeyStarter,
                goals: 6,
                assists: 9,
                honors: vec!["Conference Best XI".to_string()],
            }],
            academics: AcademicProfile {
                gpa: Some(3.4),
                test_score: None,
            },
            athletic: AthleticSelfAssessment {
                speed: AthleticRating::AboveAverage,
                strength: AthleticRating::Average,
                endurance: AthleticRating::AboveAverage,
                work_rate: AthleticRating::TopTenPercent,
                technical: AthleticRating::AboveAverage,
                tactical: AthleticRating::AboveAverage,
            },
            events: vec![ExposureEvent {
                name: "ECNL Texas Showcase".to_string(),
                event_type: EventType::Showcase,
                colleges_noted: vec!["SMU".to_string()],
            }],
            video: VideoStatus::EditedHighlightReel,
            coaches_contacted: 18,
            responses_received: 2,
            offers_received: 0,
        }
    }

    /// Female high-school rotation player: no GPA, no video, zero outreach.
    fn invisible_hs_girl() -> PlayerProfile {
        PlayerProfile {
            first_name: "Maya".to_string(),
            last_name: "Linden".to_string(),
            email: None,
            gender: Gender::Female,
            date_of_birth: date(2009, 9, 10),
            citizenship: None,
            height_cm: None,
            dominant_foot: None,
            position: Position::WING,
            secondary_positions: vec![],
            grad_year: 2027,
            state: Some("OH".to_string()),
            experience: vec![],
            seasons: vec![SeasonRecord {
                year: 2026,
                team_name: "Westfield High".to_string(),
                leagues: vec![YouthLeague::HighSchool],
                other_league_name: None,
                minutes_played_percent: 55,
                main_role: SeasonRole::Rotation,
                goals: 3,
                assists: 1,
                honors: vec![],
            }],
            academics: AcademicProfile {
                gpa: None,
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
    fn test_elite_boy_starter_full_pipeline() {
        // base 75/85/60/85/95, ability High +15/+10/+5/+10/+5,
        // solid academics +5 D3 / -5 JUCO, starter tweak +5 D1/D2,
        // peak timeline +5 D1/D2, then D2 clamps from 105 to 100.
        let assessment = score_profile(&elite_boy_starter(), date(2026, 4, 1));

        assert_eq!(assessment.league.tier, LeagueTier::Elite);
        assert_eq!(assessment.ability.band, AbilityBand::High);
        assert_eq!(assessment.academic_band, AcademicBand::Solid);
        assert_eq!(assessment.outreach.tag, OutreachTag::OnTrack);

        assert_eq!(assessment.on_paper(Division::D1), 100.0);
        assert_eq!(assessment.on_paper(Division::D2), 100.0);
        assert_eq!(assessment.on_paper(Division::D3), 70.0);
        assert_eq!(assessment.on_paper(Division::Naia), 95.0);
        assert_eq!(assessment.on_paper(Division::Juco), 95.0);

        // both multipliers are 1.0, so visibility equals on-paper
        for division in Division::ALL {
            assert_eq!(
                assessment.visibility(division),
                assessment.on_paper(division)
            );
        }

        // D1 and D2 tie at 100; the higher-profile division wins
        assert_eq!(assessment.primary_level, Division::D1);

        let d2 = &assessment.scores[1];
        assert!(d2.breakdown.iter().any(|f| f.label == "On-paper cap"));
    }

    #[test]
    fn test_invisible_hs_girl_full_pipeline() {
        // base 8/25/52/52/65, ability Low -20/-15/-10/-5/0,
        // missing GPA -25/-20/-40/0/+20, closing window -5 D1/D2,
        // clamp floors D1/D2 at 0, then x0.6 video and x0.7 outreach.
        let assessment = score_profile(&invisible_hs_girl(), date(2026, 8, 15));

        assert_eq!(assessment.league.tier, LeagueTier::Low);
        assert_eq!(assessment.ability.band, AbilityBand::Low);
        assert_eq!(assessment.academic_band, AcademicBand::Problem);
        assert_eq!(assessment.outreach.tag, OutreachTag::Invisible);
        assert_eq!(assessment.timeline.window, TimelineWindow::Closing);

        assert_eq!(assessment.on_paper(Division::D1), 0.0);
        assert_eq!(assessment.on_paper(Division::D2), 0.0);
        assert_eq!(assessment.on_paper(Division::D3), 2.0);
        assert_eq!(assessment.on_paper(Division::Naia), 47.0);
        assert_eq!(assessment.on_paper(Division::Juco), 85.0);

        assert_eq!(assessment.visibility(Division::D1), 0.0);
        assert_eq!(assessment.visibility(Division::D2), 0.0);
        assert_eq!(assessment.visibility(Division::D3), 1.0);
        assert_eq!(assessment.visibility(Division::Naia), 20.0);
        assert_eq!(assessment.visibility(Division::Juco), 36.0);

        assert_eq!(assessment.primary_level, Division::Juco);

        // the floor clamp must be visible in the D1 ledger
        let d1 = &assessment.scores[0];
        assert!(d1.breakdown.iter().any(|f| f.label == "On-paper cap"));
    }

    #[test]
    fn test_multipliers_never_raise_a_score() {
        for profile in [elite_boy_starter(), invisible_hs_girl()] {
            let assessment = score_profile(&profile, date(2026, 8, 15));
            for score in &assessment.scores {
                assert!(
                    score.visibility_percent <= score.on_paper_fit,
                    "{:?} rose through multipliers",
                    score.level
                );
            }
        }
    }

    #[test]
    fn test_all_scores_bounded_and_ordered() {
        let assessment = score_profile(&invisible_hs_girl(), date(2026, 8, 15));
        assert_eq!(assessment.scores.len(), 5);
        for (score, division) in assessment.scores.iter().zip(Division::ALL) {
            assert_eq!(score.level, division);
            assert!((0.0..=100.0).contains(&score.visibility_percent));
            assert!((0.0..=100.0).contains(&score.on_paper_fit));
        }
    }

    #[test]
    fn test_determinism_same_input_same_output() {
        let profile = elite_boy_starter();
        let a = score_profile(&profile, date(2026, 4, 1));
        let b = score_profile(&profile, date(2026, 4, 1));
        for division in Division::ALL {
            assert_eq!(a.visibility(division), b.visibility(division));
        }
        assert_eq!(a.primary_level, b.primary_level);
    }

    #[test]
    fn test_as_of_date_changes_timeline_effects() {
        let profile = elite_boy_starter();
        // two years earlier, grad_year - year = 2 is still the male peak window,
        // but the age bonus can never apply at 16
        let early = score_profile(&profile, date(2024, 4, 1));
        assert_eq!(early.timeline.window, TimelineWindow::Peak);
        let late = score_profile(&profile, date(2027, 4, 1));
        // age 19.1 by now: maturity bonus appears in the D1 ledger
        assert!(late.scores[0]
            .breakdown
            .iter()
            .any(|f| f.label == "Maturity"));
    }

    #[test]
    fn test_probability_band_thresholds() {
        assert_eq!(ProbabilityBand::from_percent(24.9), ProbabilityBand::VeryLow);
        assert_eq!(ProbabilityBand::from_percent(25.0), ProbabilityBand::Low);
        assert_eq!(ProbabilityBand::from_percent(49.9), ProbabilityBand::Low);
        assert_eq!(ProbabilityBand::from_percent(50.0), ProbabilityBand::Medium);
        assert_eq!(ProbabilityBand::from_percent(74.9), ProbabilityBand::Medium);
        assert_eq!(ProbabilityBand::from_percent(75.0), ProbabilityBand::High);
    }

    #[test]
    fn test_notes_name_the_biggest_drag() {
        let assessment = score_profile(&invisible_hs_girl(), date(2026, 8, 15));
        let juco = &assessment.scores[4];
        // JUCO's biggest lift is the +20 academic absorption; biggest drag is video
        assert!(juco.notes.contains("Biggest drag"), "notes: {}", juco.notes);
    }

    #[test]
    fn test_baseline_entry_opens_every_ledger() {
        let assessment = score_profile(&elite_boy_starter(), date(2026, 4, 1));
        for score in &assessment.scores {
            let first = &score.breakdown[0];
            assert_eq!(first.label, "League baseline");
            assert_eq!(first.before, 0.0);
        }
    }
}
