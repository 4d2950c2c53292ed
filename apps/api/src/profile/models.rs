#![allow(dead_code)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Core vocabulary enums
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Position {
    GK,
    CB,
    FB,
    WB,
    DM,
    CM,
    AM,
    WING,
    #[serde(rename = "9")]
    Nine,
    Utility,
}

impl Position {
    pub fn label(&self) -> &'static str {
        match self {
            Position::GK => "goalkeeper",
            Position::CB => "center back",
            Position::FB => "full back",
            Position::WB => "wing back",
            Position::DM => "defensive midfielder",
            Position::CM => "central midfielder",
            Position::AM => "attacking midfielder",
            Position::WING => "winger",
            Position::Nine => "striker",
            Position::Utility => "utility player",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Foot {
    Right,
    Left,
    Both,
}

/// League names as they appear on the intake form. `Other` carries a free-text
/// name in `SeasonRecord::other_league_name`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum YouthLeague {
    #[serde(rename = "MLS_NEXT")]
    MlsNext,
    #[serde(rename = "ECNL")]
    Ecnl,
    #[serde(rename = "Girls_Academy")]
    GirlsAcademy,
    #[serde(rename = "USYS_National_League")]
    UsysNationalLeague,
    #[serde(rename = "ECNL_RL")]
    EcnlRegionalLeague,
    #[serde(rename = "High_School")]
    HighSchool,
    #[serde(rename = "Elite_Local")]
    EliteLocal,
    Other,
}

impl YouthLeague {
    pub fn label(&self) -> &'static str {
        match self {
            YouthLeague::MlsNext => "MLS NEXT",
            YouthLeague::Ecnl => "ECNL",
            YouthLeague::GirlsAcademy => "Girls Academy",
            YouthLeague::UsysNationalLeague => "USYS National League",
            YouthLeague::EcnlRegionalLeague => "ECNL Regional League",
            YouthLeague::HighSchool => "high school",
            YouthLeague::EliteLocal => "state premier league",
            YouthLeague::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeasonRole {
    #[serde(rename = "Key_Starter")]
    KeyStarter,
    Rotation,
    Bench,
    Injured,
}

/// Self-assessment scale used for all six athletic categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum AthleticRating {
    #[serde(rename = "Below_Average")]
    BelowAverage,
    Average,
    #[serde(rename = "Above_Average")]
    AboveAverage,
    #[serde(rename = "Top_10_Percent")]
    TopTenPercent,
    Elite,
}

impl AthleticRating {
    pub fn label(&self) -> &'static str {
        match self {
            AthleticRating::BelowAverage => "below average",
            AthleticRating::Average => "average",
            AthleticRating::AboveAverage => "above average",
            AthleticRating::TopTenPercent => "top 10%",
            AthleticRating::Elite => "elite",
        }
    }

    /// Top of the scale: the ratings that claim national-level ability.
    pub fn is_top_band(&self) -> bool {
        matches!(self, AthleticRating::TopTenPercent | AthleticRating::Elite)
    }

    /// Bottom of the scale: ratings that describe an ordinary player.
    pub fn is_bottom_band(&self) -> bool {
        matches!(self, AthleticRating::BelowAverage | AthleticRating::Average)
    }
}

/// Competitive environments beyond youth club soccer. Select-all-that-apply:
/// a player can hold several at once (UPSL summers plus an academy loan).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    #[serde(rename = "Youth_Club_Only")]
    YouthClubOnly,
    #[serde(rename = "High_School_Varsity")]
    HighSchoolVarsity,
    #[serde(rename = "Adult_Amateur_League")]
    AdultAmateurLeague,
    #[serde(rename = "Semi_Pro_UPSL_NPSL_WPSL")]
    SemiPro,
    #[serde(rename = "International_Academy_U19")]
    InternationalAcademyU19,
    #[serde(rename = "Pro_Academy_Reserve")]
    ProAcademyReserve,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::YouthClubOnly => "youth club",
            ExperienceLevel::HighSchoolVarsity => "high school varsity",
            ExperienceLevel::AdultAmateurLeague => "adult amateur league",
            ExperienceLevel::SemiPro => "semi-pro (UPSL/NPSL/WPSL)",
            ExperienceLevel::InternationalAcademyU19 => "international academy U19",
            ExperienceLevel::ProAcademyReserve => "pro academy reserve",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VideoStatus {
    #[serde(rename = "Edited_Highlight_Reel")]
    EditedHighlightReel,
    #[serde(rename = "Raw_Game_Footage")]
    RawGameFootage,
    None,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventType {
    Showcase,
    #[serde(rename = "ID_Camp")]
    IdCamp,
    #[serde(rename = "ODP")]
    Odp,
    #[serde(rename = "HS_Playoffs")]
    HsPlayoffs,
    Other,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub year: i32,
    pub team_name: String,
    #[serde(default)]
    pub leagues: Vec<YouthLeague>,
    pub other_league_name: Option<String>,
    pub minutes_played_percent: u32,
    pub main_role: SeasonRole,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub honors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicProfile {
    /// Unweighted GPA on a 4.0 scale. Missing is treated as a problem, not
    /// as neutral: NCAA eligibility cannot be assessed without it.
    pub gpa: Option<f64>,
    pub test_score: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AthleticSelfAssessment {
    pub speed: AthleticRating,
    pub strength: AthleticRating,
    pub endurance: AthleticRating,
    pub work_rate: AthleticRating,
    pub technical: AthleticRating,
    pub tactical: AthleticRating,
}

impl AthleticSelfAssessment {
    /// All six categories with their display labels, in form order.
    pub fn ratings(&self) -> [(&'static str, AthleticRating); 6] {
        [
            ("speed", self.speed),
            ("strength", self.strength),
            ("endurance", self.endurance),
            ("work rate", self.work_rate),
            ("technical", self.technical),
            ("tactical", self.tactical),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposureEvent {
    pub name: String,
    pub event_type: EventType,
    #[serde(default)]
    pub colleges_noted: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// The full profile
// ────────────────────────────────────────────────────────────────────────────

/// Everything the intake form collects about one player. This is the sole
/// input to the scoring engine; nothing else about the player is consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub citizenship: Option<String>,
    pub height_cm: Option<u32>,
    pub dominant_foot: Option<Foot>,
    pub position: Position,
    #[serde(default)]
    pub secondary_positions: Vec<Position>,
    pub grad_year: i32,
    pub state: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceLevel>,
    #[serde(default)]
    pub seasons: Vec<SeasonRecord>,
    pub academics: AcademicProfile,
    pub athletic: AthleticSelfAssessment,
    #[serde(default)]
    pub events: Vec<ExposureEvent>,
    pub video: VideoStatus,
    pub coaches_contacted: u32,
    pub responses_received: u32,
    pub offers_received: u32,
}

impl PlayerProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The most recent season on the resume, by year. Scoring reads league,
    /// role and minutes from here only.
    pub fn latest_season(&self) -> Option<&SeasonRecord> {
        self.seasons.iter().max_by_key(|s| s.year)
    }
}
