use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One stored scoring run. `profile` holds the submitted intake form as-is
/// and `report` the full generated analysis; the flat columns are the
/// classification and score headlines, denormalized so list queries never
/// unpack the JSON.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub position: String,
    pub grad_year: i32,
    pub league_tier: String,
    pub ability_band: String,
    pub academic_band: String,
    pub primary_level: String,
    pub visibility_d1: f64,
    pub visibility_d2: f64,
    pub visibility_d3: f64,
    pub visibility_naia: f64,
    pub visibility_juco: f64,
    pub profile: Value,
    pub report: Value,
    pub created_at: DateTime<Utc>,
}

/// List-endpoint projection: headline numbers without the JSON payloads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentSummaryRow {
    pub id: Uuid,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub grad_year: i32,
    pub primary_level: String,
    pub visibility_d1: f64,
    pub visibility_d2: f64,
    pub visibility_d3: f64,
    pub visibility_naia: f64,
    pub visibility_juco: f64,
    pub created_at: DateTime<Utc>,
}
