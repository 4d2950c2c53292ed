//! Narrative generation, pluggable behind the `Narrator` trait.
//!
//! Default: `TemplateNarrator` (pure Rust, deterministic, fully testable).
//! Optional: `GeminiNarrator` (prose via Gemini; the report's numbers stay
//! authoritative, the model only rewrites the words).
//!
//! `AppState` holds an `Arc<dyn Narrator>`, swapped at startup via config.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm::{prompts, GeminiClient};
use crate::profile::models::{Gender, PlayerProfile, Position, VideoStatus};
use crate::report::builder::AnalysisReport;
use crate::scoring::experience;
use crate::scoring::experience::TimelineWindow;
use crate::scoring::league::LeagueTier;
use crate::scoring::tables::{self, Division};

// ────────────────────────────────────────────────────────────────────────────
// Output data model (shared across narrator backends)
// ────────────────────────────────────────────────────────────────────────────

/// The two prose fields of a report plus which backend wrote them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Narrative {
    pub plain_language_summary: String,
    pub coach_short_evaluation: String,
    pub narrator_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The narrator trait. Implement this to swap prose backends without
/// touching the endpoint, handler, or caller code.
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn narrate(
        &self,
        profile: &PlayerProfile,
        report: &AnalysisReport,
    ) -> Result<Narrative, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateNarrator — deterministic default
// ────────────────────────────────────────────────────────────────────────────

pub struct TemplateNarrator;

#[async_trait]
impl Narrator for TemplateNarrator {
    async fn narrate(
        &self,
        profile: &PlayerProfile,
        report: &AnalysisReport,
    ) -> Result<Narrative, AppError> {
        Ok(compose_template(profile, report))
    }
}

/// Deterministic prose from the computed report. Sentences reference
/// gender-specific market dynamics, the strongest division, proven adult
/// experience, the top risk, and timeline urgency, in that order.
pub fn compose_template(profile: &PlayerProfile, report: &AnalysisReport) -> Narrative {
    let primary = report.primary_level;
    let primary_score = report.visibility_scores.iter().find(|s| s.level == primary);
    let visibility = primary_score.map(|s| s.visibility_percent).unwrap_or(0.0);
    let on_paper = primary_score.map(|s| s.on_paper_fit).unwrap_or(0.0);

    let mut sentences: Vec<String> = Vec::new();

    if profile.gender == Gender::Female && profile.position == Position::GK {
        sentences.push(
            "Quality goalkeepers are the #1 recruiting need in women's college soccer, \
             and your position alone opens doors that field players do not have."
                .to_string(),
        );
    } else {
        let d1_programs = tables::program_count(profile.gender, Division::D1);
        match (profile.gender, report.classification.league_tier) {
            (Gender::Female, LeagueTier::Elite) => sentences.push(format!(
                "The women's D1 landscape offers {d1_programs}+ programs, and with {} \
                 on your resume you have realistic paths at multiple levels.",
                report.classification.league_source
            )),
            (Gender::Male, LeagueTier::Elite) => sentences.push(format!(
                "Men's D1 is highly competitive with only about {d1_programs} programs; \
                 {} puts you in the conversation, but video and outreach decide whether \
                 you stand out.",
                report.classification.league_source
            )),
            (Gender::Female, _) => sentences.push(format!(
                "Women's college soccer spans {d1_programs} D1 programs plus hundreds \
                 more across D2, D3, NAIA and JUCO, and league level decides who \
                 actually gets watched."
            )),
            (Gender::Male, _) => sentences.push(format!(
                "Men's college soccer has roughly {d1_programs} D1 programs and far \
                 more roster demand below that line, and league level decides who \
                 actually gets watched."
            )),
        }
    }

    if report.classification.league_tier == LeagueTier::Elite {
        sentences.push(format!(
            "Funding also runs deeper now: 2025-26 roster rules allow up to {} \
             scholarships per D1 program.",
            tables::D1_SCHOLARSHIP_LIMIT
        ));
    }

    if on_paper - visibility >= 10.0 {
        sentences.push(format!(
            "Today your strongest market is {} at {visibility:.0}% visibility, down \
             from {on_paper:.0}% on paper because of execution gaps.",
            primary.label()
        ));
    } else {
        sentences.push(format!(
            "Today your strongest market is {} at {visibility:.0}% visibility.",
            primary.label()
        ));
    }

    if let (_, Some(level)) = experience::experience_tier_bonus(&profile.experience) {
        sentences.push(format!(
            "Playing {} significantly increases recruitability due to proven maturity.",
            level.label()
        ));
    }

    if let Some(risk) = report.key_risks.first() {
        sentences.push(format!("The biggest fix: {}", risk.message));
    }

    match report.classification.timeline_window {
        TimelineWindow::Closing => sentences.push(
            "Your recruiting window is closing; roster spots for your class are being \
             filled right now."
                .to_string(),
        ),
        TimelineWindow::Early => sentences.push(
            "You are early in the cycle; build the profile now so your peak window \
             starts with material."
                .to_string(),
        ),
        TimelineWindow::Peak => sentences.push(
            "You are in your peak recruiting window, and responsiveness this year \
             decides your options."
                .to_string(),
        ),
        TimelineWindow::Neutral => {}
    }

    let coach_short_evaluation = format!(
        "Honest read: {} league level, {} ability, {} academics, {}; best current \
         odds are {} at {visibility:.0}%.",
        report.classification.league_tier.label(),
        report.classification.ability_band.label(),
        report.classification.academic_band.label(),
        video_phrase(profile.video),
        primary.label()
    );

    Narrative {
        plain_language_summary: sentences.join(" "),
        coach_short_evaluation,
        narrator_backend: "template".to_string(),
    }
}

fn video_phrase(video: VideoStatus) -> &'static str {
    match video {
        VideoStatus::EditedHighlightReel => "an edited reel ready to send",
        VideoStatus::RawGameFootage => "raw footage that still needs cutting",
        VideoStatus::None => "no film for coaches to watch",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiNarrator — LLM prose backend
// ────────────────────────────────────────────────────────────────────────────

/// Narrative via Gemini. Falls back to nothing on its own: callers keep the
/// template prose when this backend errors.
pub struct GeminiNarrator(pub GeminiClient);

#[derive(Debug, Deserialize)]
struct NarrativeResponse {
    plain_language_summary: String,
    coach_short_evaluation: String,
}

#[async_trait]
impl Narrator for GeminiNarrator {
    async fn narrate(
        &self,
        profile: &PlayerProfile,
        report: &AnalysisReport,
    ) -> Result<Narrative, AppError> {
        let profile_json =
            serde_json::to_string_pretty(profile).map_err(|e| AppError::Llm(e.to_string()))?;
        let report_json =
            serde_json::to_string_pretty(report).map_err(|e| AppError::Llm(e.to_string()))?;
        let prompt = prompts::narrative_prompt(&profile_json, &report_json);

        let response: NarrativeResponse = self
            .0
            .call_json(&prompt, prompts::NARRATIVE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;

        if response.plain_language_summary.trim().is_empty()
            || response.coach_short_evaluation.trim().is_empty()
        {
            return Err(AppError::Llm(
                "narrative backend returned empty fields".to_string(),
            ));
        }

        Ok(Narrative {
            plain_language_summary: response.plain_language_summary,
            coach_short_evaluation: response.coach_short_evaluation,
            narrator_backend: "gemini".to_string(),
        })
    }
}
