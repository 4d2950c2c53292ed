//! Point tables for the visibility model.
//!
//! The tables here ARE the model: every percentage in a report traces back to
//! this file plus the player's own data. Change a number here and the
//! table-driven tests across the scoring modules will tell you what moved.

use serde::{Deserialize, Serialize};

use crate::profile::models::Gender;
use crate::scoring::ability::AbilityBand;
use crate::scoring::academics::AcademicBand;
use crate::scoring::league::LeagueTier;

// ────────────────────────────────────────────────────────────────────────────
// Divisions
// ────────────────────────────────────────────────────────────────────────────

/// The five college levels, in display order (highest profile first).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Division {
    D1,
    D2,
    D3,
    #[serde(rename = "NAIA")]
    Naia,
    #[serde(rename = "JUCO")]
    Juco,
}

impl Division {
    pub const ALL: [Division; 5] = [
        Division::D1,
        Division::D2,
        Division::D3,
        Division::Naia,
        Division::Juco,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Division::D1 => "D1",
            Division::D2 => "D2",
            Division::D3 => "D3",
            Division::Naia => "NAIA",
            Division::Juco => "JUCO",
        }
    }
}

/// One value per division. Used for base scores, adjustments, and thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DivisionTable {
    pub d1: f64,
    pub d2: f64,
    pub d3: f64,
    pub naia: f64,
    pub juco: f64,
}

impl DivisionTable {
    pub const ZERO: DivisionTable = DivisionTable::new(0.0, 0.0, 0.0, 0.0, 0.0);

    pub const fn new(d1: f64, d2: f64, d3: f64, naia: f64, juco: f64) -> Self {
        DivisionTable {
            d1,
            d2,
            d3,
            naia,
            juco,
        }
    }

    pub fn get(&self, division: Division) -> f64 {
        match division {
            Division::D1 => self.d1,
            Division::D2 => self.d2,
            Division::D3 => self.d3,
            Division::Naia => self.naia,
            Division::Juco => self.juco,
        }
    }

    pub fn get_mut(&mut self, division: Division) -> &mut f64 {
        match division {
            Division::D1 => &mut self.d1,
            Division::D2 => &mut self.d2,
            Division::D3 => &mut self.d3,
            Division::Naia => &mut self.naia,
            Division::Juco => &mut self.juco,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == DivisionTable::ZERO
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Base visibility by gender and league tier
// ────────────────────────────────────────────────────────────────────────────

/// Baseline "ability to make a roster" before any adjustment. Girls score
/// higher at every level because women's soccer has more programs per player
/// (the counts in `program_count` are already priced into these rows).
pub fn base_visibility(gender: Gender, tier: LeagueTier) -> DivisionTable {
    match (gender, tier) {
        (Gender::Male, LeagueTier::Elite) => DivisionTable::new(75.0, 85.0, 60.0, 85.0, 95.0),
        (Gender::Male, LeagueTier::High) => DivisionTable::new(35.0, 60.0, 65.0, 70.0, 80.0),
        (Gender::Male, LeagueTier::Mid) => DivisionTable::new(15.0, 35.0, 60.0, 55.0, 65.0),
        (Gender::Male, LeagueTier::Low) => DivisionTable::new(5.0, 20.0, 40.0, 45.0, 60.0),
        (Gender::Female, LeagueTier::Elite) => DivisionTable::new(88.0, 93.0, 68.0, 88.0, 97.0),
        (Gender::Female, LeagueTier::High) => DivisionTable::new(48.0, 68.0, 73.0, 78.0, 88.0),
        (Gender::Female, LeagueTier::Mid) => DivisionTable::new(20.0, 40.0, 68.0, 60.0, 70.0),
        (Gender::Female, LeagueTier::Low) => DivisionTable::new(8.0, 25.0, 52.0, 52.0, 65.0),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ability and academic adjustments
// ────────────────────────────────────────────────────────────────────────────

/// Cascading competency: a player qualified for D1/D2 is automatically
/// qualified for NAIA/JUCO, so the lower levels never go negative here.
pub fn ability_adjustment(band: AbilityBand) -> DivisionTable {
    match band {
        AbilityBand::High => DivisionTable::new(15.0, 10.0, 5.0, 10.0, 5.0),
        AbilityBand::Medium => DivisionTable::ZERO,
        AbilityBand::Low => DivisionTable::new(-20.0, -15.0, -10.0, -5.0, 0.0),
    }
}

/// D3 is heavily academic: even elite athletes drop hard with a low GPA,
/// while JUCO absorbs academic problems (that is its role in the pipeline).
pub fn academic_adjustment(band: AcademicBand) -> DivisionTable {
    match band {
        AcademicBand::High => DivisionTable::new(5.0, 5.0, 15.0, 0.0, -5.0),
        AcademicBand::Solid => DivisionTable::new(0.0, 0.0, 5.0, 0.0, -5.0),
        AcademicBand::Risky => DivisionTable::new(-10.0, -5.0, -20.0, 5.0, 5.0),
        AcademicBand::Problem => DivisionTable::new(-25.0, -20.0, -40.0, 0.0, 20.0),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Market facts used by narratives and benchmarks
// ────────────────────────────────────────────────────────────────────────────

/// Approximate program counts per division (2025-26). The women's advantage
/// at every level is why the female base rows are higher.
pub fn program_count(gender: Gender, division: Division) -> u32 {
    match (gender, division) {
        (Gender::Female, Division::D1) => 335,
        (Gender::Male, Division::D1) => 205,
        (Gender::Female, Division::D2) => 265,
        (Gender::Male, Division::D2) => 210,
        (Gender::Female, Division::D3) => 441,
        (Gender::Male, Division::D3) => 420,
        (Gender::Female, Division::Naia) => 230,
        (Gender::Male, Division::Naia) => 200,
        (Gender::Female, Division::Juco) => 160,
        (Gender::Male, Division::Juco) => 120,
    }
}

/// 2025-26 roster-limit rules: up to 28 D1 scholarships for both genders.
/// The old 14 / 9.9 split no longer applies.
pub const D1_SCHOLARSHIP_LIMIT: u32 = 28;
