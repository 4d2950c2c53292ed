//! Recruiting funnel: which stage the player's process has reached and the
//! single bottleneck holding conversion back.

use serde::{Deserialize, Serialize};

use crate::profile::models::{PlayerProfile, VideoStatus};
use crate::scoring::academics::AcademicBand;
use crate::scoring::engine::VisibilityAssessment;
use crate::scoring::league::LeagueTier;
use crate::scoring::market::{OutreachTag, TALENT_GAP_REPLIES};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FunnelStage {
    Invisible,
    Outreach,
    Conversation,
    Evaluation,
    Closing,
}

impl FunnelStage {
    pub fn label(&self) -> &'static str {
        match self {
            FunnelStage::Invisible => "Invisible",
            FunnelStage::Outreach => "Outreach",
            FunnelStage::Conversation => "Conversation",
            FunnelStage::Evaluation => "Evaluation",
            FunnelStage::Closing => "Closing",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelAnalysis {
    pub stage: FunnelStage,
    pub conversion_rate: String,
    pub bottleneck: String,
    pub advice: String,
}

fn stage_for(profile: &PlayerProfile) -> FunnelStage {
    if profile.offers_received > 0 {
        FunnelStage::Closing
    } else if profile.responses_received >= TALENT_GAP_REPLIES {
        FunnelStage::Evaluation
    } else if profile.responses_received > 0 {
        FunnelStage::Conversation
    } else if profile.coaches_contacted > 0 {
        FunnelStage::Outreach
    } else {
        FunnelStage::Invisible
    }
}

pub fn analyze_funnel(profile: &PlayerProfile, assessment: &VisibilityAssessment) -> FunnelAnalysis {
    let stage = stage_for(profile);
    let conversion_rate = format!("{:.0}% Reply Rate", assessment.outreach.reply_rate_percent);

    let (bottleneck, advice) = if profile.video == VideoStatus::None {
        (
            "No Video".to_string(),
            "Nothing else moves until coaches can watch you. Get a reel up this month.".to_string(),
        )
    } else if assessment.academic_band == AcademicBand::Problem {
        (
            "Low GPA".to_string(),
            "Clear the NCAA 2.3 floor first; eligibility gates everything else.".to_string(),
        )
    } else if profile.coaches_contacted == 0 {
        (
            "No Outreach".to_string(),
            "Start with ten personally addressed emails; coaches do not find players, players find coaches.".to_string(),
        )
    } else if assessment.outreach.tag == OutreachTag::Spamming {
        (
            "Spamming".to_string(),
            "Cut the list to programs that fit and personalize every email.".to_string(),
        )
    } else if assessment.outreach.tag == OutreachTag::TalentGap {
        (
            "Talent Gap".to_string(),
            "Replies without offers means level fit. Push the divisions where your odds are real.".to_string(),
        )
    } else if assessment.league.tier == LeagueTier::Low {
        (
            "League Visibility".to_string(),
            "Your league is off the scouting map; showcases have to carry your exposure.".to_string(),
        )
    } else {
        (
            "On Track".to_string(),
            "Keep the cadence: follow up within 48 hours and keep film current.".to_string(),
        )
    };

    FunnelAnalysis {
        stage,
        conversion_rate,
        bottleneck,
        advice,
    }
}
