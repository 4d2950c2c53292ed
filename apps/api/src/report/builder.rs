//! Report assembly: everything the API returns for one scored profile.
//!
//! `build_report` is deterministic and fills the narrative fields with
//! template prose. A configured LLM backend may replace that prose
//! afterwards, never the numbers.

use serde::{Deserialize, Serialize};

use crate::profile::models::{Gender, PlayerProfile, Position, SeasonRole, VideoStatus};
use crate::report::action_plan::{self, ActionItem};
use crate::report::benchmarks::{self, BenchmarkRow};
use crate::report::funnel::{self, FunnelAnalysis};
use crate::report::narrative::{self, Narrative};
use crate::report::readiness::{self, ReadinessScore};
use crate::report::risks::{self, RiskFlag};
use crate::scoring::ability::AbilityBand;
use crate::scoring::academics::AcademicBand;
use crate::scoring::engine::{DivisionScore, VisibilityAssessment};
use crate::scoring::experience::{self, TimelineWindow};
use crate::scoring::league::LeagueTier;
use crate::scoring::market::OutreachTag;
use crate::scoring::tables::Division;

const MIN_STRENGTHS: usize = 3;
const MAX_STRENGTHS: usize = 5;

/// How the engine classified the player, surfaced for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub league_tier: LeagueTier,
    pub league_source: String,
    pub ability_band: AbilityBand,
    pub verification_risk: bool,
    pub academic_band: AcademicBand,
    pub outreach_tag: OutreachTag,
    pub timeline_window: TimelineWindow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub visibility_scores: Vec<DivisionScore>,
    pub primary_level: Division,
    pub classification: ClassificationSummary,
    pub readiness: ReadinessScore,
    pub key_strengths: Vec<String>,
    pub key_risks: Vec<RiskFlag>,
    pub action_plan: Vec<ActionItem>,
    pub funnel: FunnelAnalysis,
    pub benchmarks: Vec<BenchmarkRow>,
    pub plain_language_summary: String,
    pub coach_short_evaluation: String,
    pub narrator_backend: String,
}

impl AnalysisReport {
    pub fn set_narrative(&mut self, narrative: Narrative) {
        self.plain_language_summary = narrative.plain_language_summary;
        self.coach_short_evaluation = narrative.coach_short_evaluation;
        self.narrator_backend = narrative.narrator_backend;
    }
}

pub fn build_report(profile: &PlayerProfile, assessment: &VisibilityAssessment) -> AnalysisReport {
    let classification = ClassificationSummary {
        league_tier: assessment.league.tier,
        league_source: assessment.league.source.clone(),
        ability_band: assessment.ability.band,
        verification_risk: assessment.ability.verification_risk,
        academic_band: assessment.academic_band,
        outreach_tag: assessment.outreach.tag,
        timeline_window: assessment.timeline.window,
    };

    let mut report = AnalysisReport {
        visibility_scores: assessment.scores.clone(),
        primary_level: assessment.primary_level,
        readiness: readiness::compute_readiness(
            profile,
            assessment.ability.band,
            assessment.academic_band,
            assessment.outreach.tag,
        ),
        key_strengths: derive_strengths(profile, assessment),
        key_risks: risks::derive_risks(profile, assessment),
        action_plan: action_plan::build_action_plan(profile, assessment),
        funnel: funnel::analyze_funnel(profile, assessment),
        benchmarks: benchmarks::build_benchmarks(
            profile,
            assessment.ability.band,
            assessment.league.tier,
        ),
        classification,
        plain_language_summary: String::new(),
        coach_short_evaluation: String::new(),
        narrator_backend: String::new(),
    };

    let narrative = narrative::compose_template(profile, &report);
    report.set_narrative(narrative);
    report
}

/// 3-5 genuinely positive, concrete facts about the profile. Weak profiles
/// still get a floor of generic but true statements.
pub fn derive_strengths(profile: &PlayerProfile, assessment: &VisibilityAssessment) -> Vec<String> {
    let mut strengths = Vec::new();

    match assessment.league.tier {
        LeagueTier::Elite | LeagueTier::High => strengths.push(format!(
            "Competing in {}, a circuit college staffs scout directly.",
            assessment.league.source
        )),
        _ => {}
    }

    if assessment.ability.band == AbilityBand::High {
        let top = profile
            .athletic
            .ratings()
            .iter()
            .filter(|(_, r)| r.is_top_band())
            .count();
        strengths.push(format!(
            "Self-rated in the top athletic band in {top} of six categories."
        ));
    }

    match assessment.academic_band {
        AcademicBand::High => {
            if let Some(gpa) = profile.academics.gpa {
                strengths.push(format!(
                    "A {gpa:.1} GPA that opens every academic door, including selective D3s."
                ));
            }
        }
        AcademicBand::Solid => {
            strengths.push("An NCAA-eligible GPA with room at most programs.".to_string())
        }
        _ => {}
    }

    if let Some(season) = profile.latest_season() {
        if season.main_role == SeasonRole::KeyStarter && season.minutes_played_percent >= 70 {
            strengths.push(format!(
                "A trusted starter playing {}% of available minutes.",
                season.minutes_played_percent
            ));
        }
        if let Some(honor) = season.honors.first() {
            strengths.push(format!("Honors on record: {honor}."));
        }
    }

    if let (_, Some(level)) = experience::experience_tier_bonus(&profile.experience) {
        strengths.push(format!(
            "Proven against adult competition: {} experience.",
            level.label()
        ));
    }

    if profile.offers_received > 0 {
        let noun = if profile.offers_received == 1 {
            "offer"
        } else {
            "offers"
        };
        strengths.push(format!(
            "Concrete market proof: {} {noun} already on the table.",
            profile.offers_received
        ));
    }

    if profile.video == VideoStatus::EditedHighlightReel {
        strengths.push("A recruiting-ready edited highlight reel already in hand.".to_string());
    }

    if assessment.outreach.tag == OutreachTag::OnTrack && profile.coaches_contacted > 0 {
        strengths.push(format!(
            "An outreach process already getting replies ({:.0}% reply rate).",
            assessment.outreach.reply_rate_percent
        ));
    }

    if profile.position == Position::GK && profile.gender == Gender::Female {
        strengths.push(
            "Goalkeeper scarcity: the #1 recruiting need in the women's game.".to_string(),
        );
    }

    if profile.events.len() >= 2 {
        strengths.push(format!(
            "Already on the showcase circuit with {} events logged.",
            profile.events.len()
        ));
    }

    let fallbacks = [
        format!("Clear positional identity as a {}.", profile.position.label()),
        format!(
            "A defined {} graduation target programs can plan a class around.",
            profile.grad_year
        ),
        "A complete, scoreable profile coaches can evaluate without follow-up questions."
            .to_string(),
    ];
    for fallback in fallbacks {
        if strengths.len() >= MIN_STRENGTHS {
            break;
        }
        strengths.push(fallback);
    }

    strengths.truncate(MAX_STRENGTHS);
    strengths
}
