//! Market execution multipliers. Talent does not get recruited; marketed
//! talent does. Video and outreach scale the on-paper score down to what
//! coaches can actually see today.

use serde::{Deserialize, Serialize};

use crate::profile::models::VideoStatus;

/// An edited reel is table stakes; raw footage asks a coach to do the
/// player's editing; no video means the player effectively does not exist.
pub fn video_multiplier(video: VideoStatus) -> f64 {
    match video {
        VideoStatus::EditedHighlightReel => 1.0,
        VideoStatus::RawGameFootage => 0.8,
        VideoStatus::None => 0.6,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutreachTag {
    /// Zero coaches contacted. Nobody is coming to find them.
    Invisible,
    /// High volume, almost no replies: untargeted mass emails.
    Spamming,
    /// Plenty of conversations, zero offers: the product is not closing.
    TalentGap,
    OnTrack,
}

impl OutreachTag {
    pub fn label(&self) -> &'static str {
        match self {
            OutreachTag::Invisible => "invisible",
            OutreachTag::Spamming => "spamming",
            OutreachTag::TalentGap => "talent gap",
            OutreachTag::OnTrack => "on track",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutreachOutcome {
    pub tag: OutreachTag,
    pub multiplier: f64,
    pub reply_rate_percent: f64,
}

const SPAM_VOLUME_THRESHOLD: u32 = 20;
const SPAM_REPLY_RATE_PERCENT: f64 = 5.0;

/// Replies without a single offer at this volume marks the talent-gap tag.
/// The funnel reads the same line as its Evaluation-stage threshold.
pub const TALENT_GAP_REPLIES: u32 = 5;

pub fn classify_outreach(contacted: u32, responses: u32, offers: u32) -> OutreachOutcome {
    let reply_rate_percent = if contacted == 0 {
        0.0
    } else {
        responses as f64 / contacted as f64 * 100.0
    };

    let (tag, multiplier) = if contacted == 0 {
        (OutreachTag::Invisible, 0.7)
    } else if contacted >= SPAM_VOLUME_THRESHOLD && reply_rate_percent < SPAM_REPLY_RATE_PERCENT {
        (OutreachTag::Spamming, 0.8)
    } else if responses >= TALENT_GAP_REPLIES && offers == 0 {
        (OutreachTag::TalentGap, 0.9)
    } else {
        (OutreachTag::OnTrack, 1.0)
    };

    OutreachOutcome {
        tag,
        multiplier,
        reply_rate_percent,
    }
}
