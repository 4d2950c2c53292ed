//! Risk flags: the 2-4 constraints currently costing the player visibility.
//! Every profile gets at least two. Messages explain the consequence, not
//! just the symptom.

use serde::{Deserialize, Serialize};

use crate::profile::models::{PlayerProfile, SeasonRole, VideoStatus};
use crate::scoring::academics::{AcademicBand, NCAA_MINIMUM_GPA};
use crate::scoring::engine::VisibilityAssessment;
use crate::scoring::league::LeagueTier;
use crate::scoring::market::OutreachTag;

pub const MIN_RISKS: usize = 2;
pub const MAX_RISKS: usize = 4;

/// Low playing time at or under this share of minutes is flagged.
const LOW_MINUTES_PERCENT: u32 = 30;

/// Outreach volume under this count is flagged as too thin.
const THIN_OUTREACH_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskCategory {
    League,
    Minutes,
    Academics,
    Events,
    Location,
    Media,
    Communication,
    Verification,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFlag {
    pub category: RiskCategory,
    pub message: String,
    pub severity: Severity,
}

fn flag(category: RiskCategory, severity: Severity, message: impl Into<String>) -> RiskFlag {
    RiskFlag {
        category,
        message: message.into(),
        severity,
    }
}

pub fn derive_risks(profile: &PlayerProfile, assessment: &VisibilityAssessment) -> Vec<RiskFlag> {
    let mut risks = Vec::new();

    match profile.video {
        VideoStatus::None => risks.push(flag(
            RiskCategory::Media,
            Severity::High,
            "No highlight video. Coaches cannot evaluate what they cannot watch, \
             and most will never reply to a profile without film.",
        )),
        VideoStatus::RawGameFootage => risks.push(flag(
            RiskCategory::Media,
            Severity::Medium,
            "Raw footage only. Coaches rarely sit through full games; an edited \
             3-5 minute reel is the standard they expect.",
        )),
        VideoStatus::EditedHighlightReel => {}
    }

    match assessment.academic_band {
        AcademicBand::Problem => {
            let message = match profile.academics.gpa {
                Some(gpa) => format!(
                    "A {gpa:.1} GPA is below the NCAA {NCAA_MINIMUM_GPA} floor. Until that \
                     is fixed, NCAA programs cannot recruit you at all."
                ),
                None => "No GPA on record. Coaches assume the worst about missing \
                         academics, and NCAA eligibility cannot be established."
                    .to_string(),
            };
            risks.push(flag(RiskCategory::Academics, Severity::High, message));
        }
        AcademicBand::Risky => {
            if let Some(gpa) = profile.academics.gpa {
                risks.push(flag(
                    RiskCategory::Academics,
                    Severity::Medium,
                    format!(
                        "A {gpa:.1} GPA keeps you NCAA-eligible but functionally removes \
                         selective programs from your list, cutting your realistic market."
                    ),
                ));
            }
        }
        AcademicBand::Solid => {
            if let Some(gpa) = profile.academics.gpa {
                risks.push(flag(
                    RiskCategory::Academics,
                    Severity::Medium,
                    format!(
                        "A {gpa:.1} GPA is solid but not high enough for the most selective \
                         academic programs, which trims the top of your market."
                    ),
                ));
            }
        }
        AcademicBand::High => {}
    }

    match assessment.league.tier {
        LeagueTier::Low => risks.push(flag(
            RiskCategory::League,
            Severity::High,
            "Your current league sits below the circuits college staffs scout. \
             Without showcases or a platform move, coaches will simply never see you.",
        )),
        LeagueTier::Mid => risks.push(flag(
            RiskCategory::League,
            Severity::Medium,
            "Coaches scout your league occasionally, not systematically. Showcases \
             and direct outreach have to do the work your league cannot.",
        )),
        LeagueTier::High | LeagueTier::Elite => {}
    }

    if assessment.ability.verification_risk {
        risks.push(flag(
            RiskCategory::Verification,
            Severity::Medium,
            "Elite self-ratings with no elite league on record. Coaches will \
             discount those numbers until video proves them.",
        ));
    }

    if let Some(season) = profile.latest_season() {
        if season.main_role == SeasonRole::Injured {
            risks.push(flag(
                RiskCategory::Minutes,
                Severity::Medium,
                "An injury season needs framing. Coaches will ask about your return \
                 timeline and current fitness before anything else.",
            ));
        } else if season.main_role == SeasonRole::Bench
            || season.minutes_played_percent <= LOW_MINUTES_PERCENT
        {
            risks.push(flag(
                RiskCategory::Minutes,
                Severity::Medium,
                format!(
                    "Playing {}% of minutes reads as a red flag. Coaches recruit \
                     players their own coach trusts in big moments.",
                    season.minutes_played_percent
                ),
            ));
        }
    }

    if profile.coaches_contacted == 0 {
        risks.push(flag(
            RiskCategory::Communication,
            Severity::High,
            "Zero coach contacts. Nobody is evaluating you, whatever the talent \
             level; recruiting does not start until you do.",
        ));
    } else {
        match assessment.outreach.tag {
            OutreachTag::Spamming => risks.push(flag(
                RiskCategory::Communication,
                Severity::Medium,
                format!(
                    "{} emails with a {:.0}% reply rate. Your targeting or messaging \
                     is off, and coaches talk to each other about spam.",
                    profile.coaches_contacted, assessment.outreach.reply_rate_percent
                ),
            )),
            OutreachTag::TalentGap => risks.push(flag(
                RiskCategory::Communication,
                Severity::Medium,
                "Coaches reply but offers are not landing. The conversation stage \
                 is where your process stalls, and that usually means level fit.",
            )),
            _ => {
                if profile.coaches_contacted < THIN_OUTREACH_THRESHOLD {
                    risks.push(flag(
                        RiskCategory::Communication,
                        Severity::Low,
                        format!(
                            "Only {} programs contacted. Most committed recruits \
                             reached out to 20 or more before finding traction.",
                            profile.coaches_contacted
                        ),
                    ));
                }
            }
        }
    }

    if profile.events.is_empty() {
        risks.push(flag(
            RiskCategory::Events,
            Severity::Low,
            "No showcases or ID camps on record. In-person evaluation windows are \
             missing from your profile entirely.",
        ));
    }

    if profile.state.is_none() {
        risks.push(flag(
            RiskCategory::Location,
            Severity::Low,
            "No home state on record. Coaches filter searches by region first, so \
             an unplaceable profile gets skipped.",
        ));
    }

    // worst first; stable sort preserves rule order within a severity
    risks.sort_by(|a, b| b.severity.cmp(&a.severity));
    risks.truncate(MAX_RISKS);

    pad_to_minimum(&mut risks);
    risks
}

/// No player is perfect: if fewer than two risks fired, fill with
/// optimization areas in categories not already used.
fn pad_to_minimum(risks: &mut Vec<RiskFlag>) {
    let fallbacks = [
        flag(
            RiskCategory::Events,
            Severity::Low,
            "Add at least one showcase or ID camp this cycle. Coaches anchor on \
             players they have watched live.",
        ),
        flag(
            RiskCategory::Communication,
            Severity::Low,
            "Keep outreach personal and specific. Generic blasts read as spam at \
             every level.",
        ),
        flag(
            RiskCategory::Media,
            Severity::Low,
            "Keep your footage current. Clips older than a season read as stale.",
        ),
    ];
    for fallback in fallbacks {
        if risks.len() >= MIN_RISKS {
            break;
        }
        if risks.iter().all(|r| r.category != fallback.category) {
            risks.push(fallback);
        }
    }
}
