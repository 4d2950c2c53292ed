//! Readiness dials: five 0-100 numbers summarizing how ready the player is
//! on each axis. These are presentation values derived from the classified
//! bands; they never feed back into visibility.

use serde::{Deserialize, Serialize};

use crate::profile::models::{AthleticRating, PlayerProfile, VideoStatus};
use crate::scoring::ability::AbilityBand;
use crate::scoring::academics::AcademicBand;
use crate::scoring::experience;
use crate::scoring::market::OutreachTag;

/// Extra tactical credit when adult or professional environments back the
/// self-rating up.
const ADVANCED_EXPERIENCE_TACTICAL_BONUS: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessScore {
    pub athletic: f64,
    pub technical: f64,
    pub tactical: f64,
    pub academic: f64,
    pub market: f64,
}

/// 0-100 value for a single self-rating.
fn rating_points(rating: AthleticRating) -> f64 {
    match rating {
        AthleticRating::BelowAverage => 40.0,
        AthleticRating::Average => 55.0,
        AthleticRating::AboveAverage => 70.0,
        AthleticRating::TopTenPercent => 85.0,
        AthleticRating::Elite => 95.0,
    }
}

pub fn video_health(video: VideoStatus) -> f64 {
    match video {
        VideoStatus::EditedHighlightReel => 100.0,
        VideoStatus::RawGameFootage => 80.0,
        VideoStatus::None => 60.0,
    }
}

pub fn outreach_health(tag: OutreachTag) -> f64 {
    match tag {
        OutreachTag::Invisible => 70.0,
        OutreachTag::Spamming => 80.0,
        OutreachTag::TalentGap => 90.0,
        OutreachTag::OnTrack => 100.0,
    }
}

pub fn compute_readiness(
    profile: &PlayerProfile,
    ability: AbilityBand,
    academic_band: AcademicBand,
    outreach: OutreachTag,
) -> ReadinessScore {
    let athletic = match ability {
        AbilityBand::Low => 40.0,
        AbilityBand::Medium => 75.0,
        AbilityBand::High => 95.0,
    };
    let academic = match academic_band {
        AcademicBand::Problem => 40.0,
        AcademicBand::Risky => 65.0,
        AcademicBand::Solid => 80.0,
        AcademicBand::High => 95.0,
    };
    let technical = (rating_points(profile.athletic.technical)
        + rating_points(profile.athletic.tactical))
        / 2.0;
    let mut tactical = rating_points(profile.athletic.tactical);
    if experience::has_advanced_experience(&profile.experience) {
        tactical = (tactical + ADVANCED_EXPERIENCE_TACTICAL_BONUS).min(100.0);
    }
    let market = (video_health(profile.video) + outreach_health(outreach)) / 2.0;

    ReadinessScore {
        athletic,
        technical,
        tactical,
        academic,
        market,
    }
}
