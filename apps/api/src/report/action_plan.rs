//! Next-step planning. The first item always attacks the biggest execution
//! gap: missing video, unedited video, or broken outreach, in that order.
//! Plans stay aligned with the level where the player actually has odds.

use serde::{Deserialize, Serialize};

use crate::profile::models::{PlayerProfile, SeasonRole, VideoStatus};
use crate::scoring::academics::{AcademicBand, NCAA_MINIMUM_GPA};
use crate::scoring::engine::VisibilityAssessment;
use crate::scoring::experience::TimelineWindow;
use crate::scoring::market::OutreachTag;
use crate::scoring::tables::Division;

pub const MAX_ACTION_ITEMS: usize = 5;

/// Never point a plan at a division where the player's visibility is
/// under this line.
const MIN_TARGET_VISIBILITY_PERCENT: f64 = 15.0;

const LOW_MINUTES_PERCENT: u32 = 30;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Timeframe {
    #[serde(rename = "Next_30_Days")]
    Next30Days,
    #[serde(rename = "Next_90_Days")]
    Next90Days,
    #[serde(rename = "Next_12_Months")]
    Next12Months,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Impact {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    pub timeframe: Timeframe,
    pub description: String,
    pub impact: Impact,
}

fn item(timeframe: Timeframe, impact: Impact, description: impl Into<String>) -> ActionItem {
    ActionItem {
        timeframe,
        description: description.into(),
        impact,
    }
}

/// Division name to use in plan text, or "college" when even the best
/// level is out of realistic range.
fn target_label(primary: Division, visibility: f64) -> String {
    if visibility >= MIN_TARGET_VISIBILITY_PERCENT {
        primary.label().to_string()
    } else {
        "college".to_string()
    }
}

pub fn build_action_plan(
    profile: &PlayerProfile,
    assessment: &VisibilityAssessment,
) -> Vec<ActionItem> {
    let target = target_label(
        assessment.primary_level,
        assessment.visibility(assessment.primary_level),
    );
    let mut plan = Vec::new();

    // the gate item comes first, always
    match profile.video {
        VideoStatus::None => plan.push(item(
            Timeframe::Next30Days,
            Impact::High,
            "Film and cut a 3-5 minute highlight reel. Open with your five best \
             clips, put your jersey number and position on the title card.",
        )),
        VideoStatus::RawGameFootage => plan.push(item(
            Timeframe::Next30Days,
            Impact::High,
            "Edit your raw footage into a professional 3-5 minute reel. Lead with \
             the four best moments; no montage music needed.",
        )),
        VideoStatus::EditedHighlightReel => {
            if assessment.outreach.tag != OutreachTag::OnTrack {
                plan.push(item(
                    Timeframe::Next30Days,
                    Impact::High,
                    format!(
                        "Rebuild your outreach: ten personally addressed emails to {target} \
                         coaches with position, grad year and reel link in the subject line."
                    ),
                ));
            } else {
                plan.push(item(
                    Timeframe::Next90Days,
                    Impact::Medium,
                    "Keep the reel current: swap in this season's best clips so \
                     coaches see the player they would actually get.",
                ));
            }
        }
    }

    if profile.coaches_contacted == 0 && profile.video != VideoStatus::EditedHighlightReel {
        plan.push(item(
            Timeframe::Next30Days,
            Impact::High,
            format!(
                "Send your first ten emails to {target} programs within driving \
                 distance. Include your schedule and transcript."
            ),
        ));
    }

    match assessment.outreach.tag {
        OutreachTag::TalentGap => plan.push(item(
            Timeframe::Next90Days,
            Impact::Medium,
            "Follow up every coach conversation within 48 hours and ask directly \
             where you sit on their recruiting board.",
        )),
        OutreachTag::Spamming => {
            if profile.video != VideoStatus::EditedHighlightReel {
                plan.push(item(
                    Timeframe::Next30Days,
                    Impact::Medium,
                    "Cut your outreach list to programs that actually fit your level \
                     and rewrite the subject lines: position, grad year, reel link.",
                ));
            }
        }
        OutreachTag::OnTrack => plan.push(item(
            Timeframe::Next90Days,
            Impact::Medium,
            format!(
                "Add ten more {target} programs to your list and track every reply \
                 in a sheet. Momentum dies when follow-ups slip."
            ),
        )),
        OutreachTag::Invisible => {}
    }

    match assessment.academic_band {
        AcademicBand::Problem => plan.push(item(
            Timeframe::Next30Days,
            Impact::High,
            format!(
                "Meet your counselor about NCAA eligibility this week. You need a \
                 concrete plan to clear the {NCAA_MINIMUM_GPA} core GPA floor."
            ),
        )),
        AcademicBand::Risky => plan.push(item(
            Timeframe::Next90Days,
            Impact::Medium,
            "Push your GPA above 3.0 this term. Every tenth of a point reopens \
             programs that currently filter you out.",
        )),
        _ => {}
    }

    if profile.events.is_empty() {
        plan.push(item(
            Timeframe::Next90Days,
            Impact::Medium,
            format!(
                "Register for one showcase or ID camp where {target} coaches will \
                 be on the sideline, and email them your schedule beforehand."
            ),
        ));
    }

    match assessment.timeline.window {
        TimelineWindow::Closing => plan.push(item(
            Timeframe::Next30Days,
            Impact::High,
            "Your window is closing. Prioritize programs still filling this class; \
             late cycles move in weeks, not months.",
        )),
        TimelineWindow::Early => plan.push(item(
            Timeframe::Next12Months,
            Impact::Low,
            "Build the file now: film every match and keep a season log so your \
             peak recruiting year starts with material, not excuses.",
        )),
        _ => {}
    }

    if let Some(season) = profile.latest_season() {
        if season.main_role == SeasonRole::Bench
            || (season.main_role != SeasonRole::Injured
                && season.minutes_played_percent <= LOW_MINUTES_PERCENT)
        {
            plan.push(item(
                Timeframe::Next12Months,
                Impact::Medium,
                "Win a bigger role or find a roster where you start. Coaches \
                 recruit players who play.",
            ));
        }
    }

    plan.truncate(MAX_ACTION_ITEMS);
    plan
}
