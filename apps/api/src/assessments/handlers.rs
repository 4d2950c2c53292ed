use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::assessments::storage::insert_assessment;
use crate::errors::AppError;
use crate::models::assessment::{AssessmentRow, AssessmentSummaryRow};
use crate::profile::models::PlayerProfile;
use crate::profile::validation::validate_profile;
use crate::report::builder::{build_report, AnalysisReport};
use crate::scoring::engine::{score_profile, VisibilityAssessment};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub profile: PlayerProfile,
    /// Date the scoring runs against. Defaults to today; pass it explicitly
    /// to make the response reproducible.
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub as_of: NaiveDate,
    pub report: AnalysisReport,
}

#[derive(Debug, Serialize)]
pub struct AssessmentCreatedResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub as_of: NaiveDate,
    pub report: AnalysisReport,
}

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// POST /api/v1/assessments/score
///
/// Stateless scoring: runs the full pipeline and returns the report without
/// storing anything. Same input and `as_of` always produce the same output.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let as_of = resolve_as_of(req.as_of);
    let (_, report) = assess(&state, &req.profile, as_of).await?;
    Ok(Json(AssessmentResponse { as_of, report }))
}

/// POST /api/v1/assessments
///
/// Scores the profile and stores the run.
pub async fn handle_create_assessment(
    State(state): State<AppState>,
    Json(req): Json<AssessmentRequest>,
) -> Result<(StatusCode, Json<AssessmentCreatedResponse>), AppError> {
    let as_of = resolve_as_of(req.as_of);
    let (assessment, report) = assess(&state, &req.profile, as_of).await?;
    let row = insert_assessment(&state.db, &req.profile, &assessment, &report).await?;
    Ok((
        StatusCode::CREATED,
        Json(AssessmentCreatedResponse {
            id: row.id,
            created_at: row.created_at,
            as_of,
            report,
        }),
    ))
}

/// GET /api/v1/assessments/:id
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentRow>, AppError> {
    let row: Option<AssessmentRow> = sqlx::query_as("SELECT * FROM assessments WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Assessment {id} not found")))
}

/// GET /api/v1/assessments?email=
///
/// All stored runs for one email, newest first.
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<Vec<AssessmentSummaryRow>>, AppError> {
    let rows: Vec<AssessmentSummaryRow> = sqlx::query_as(
        r#"
        SELECT id, email, first_name, last_name, grad_year, primary_level,
               visibility_d1, visibility_d2, visibility_d3, visibility_naia, visibility_juco,
               created_at
        FROM assessments
        WHERE email = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(&params.email)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

fn resolve_as_of(requested: Option<NaiveDate>) -> NaiveDate {
    requested.unwrap_or_else(|| Utc::now().date_naive())
}

/// Validate, score, build the report, then let the narrative backend rewrite
/// the prose. A narrative failure is not fatal: the template prose filled in
/// by `build_report` stays.
async fn assess(
    state: &AppState,
    profile: &PlayerProfile,
    as_of: NaiveDate,
) -> Result<(VisibilityAssessment, AnalysisReport), AppError> {
    let validation = validate_profile(profile);
    if !validation.passed {
        return Err(AppError::Validation(validation.issues.join("; ")));
    }

    let assessment = score_profile(profile, as_of);
    let mut report = build_report(profile, &assessment);

    let narrative = state.narrator.narrate(profile, &report).await;
    match narrative {
        Ok(narrative) => report.set_narrative(narrative),
        Err(e) => warn!("Narrative backend failed, keeping template prose: {e}"),
    }

    Ok((assessment, report))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::{Gender, Position, SeasonRole, VideoStatus, YouthLeague};

    const PAYLOAD: &str = r#"{
        "profile": {
            "first_name": "Maya",
            "last_name": "Okafor",
            "email": "maya@example.com",
            "gender": "Female",
            "date_of_birth": "2008-11-02",
            "height_cm": 170,
            "dominant_foot": "Right",
            "position": "GK",
            "grad_year": 2027,
            "state": "NC",
            "experience": ["Youth_Club_Only", "High_School_Varsity"],
            "seasons": [
                {
                    "year": 2026,
                    "team_name": "NC Courage Academy",
                    "leagues": ["ECNL"],
                    "other_league_name": null,
                    "minutes_played_percent": 80,
                    "main_role": "Key_Starter",
                    "goals": 0,
                    "assists": 1,
                    "honors": ["All-Conference"]
                }
            ],
            "academics": { "gpa": 3.6, "test_score": "1200 SAT" },
            "athletic": {
                "speed": "Above_Average",
                "strength": "Average",
                "endurance": "Above_Average",
                "work_rate": "Top_10_Percent",
                "technical": "Above_Average",
                "tactical": "Above_Average"
            },
            "events": [
                { "name": "ECNL Phoenix Showcase", "event_type": "Showcase", "colleges_noted": ["UNCW"] }
            ],
            "video": "Edited_Highlight_Reel",
            "coaches_contacted": 12,
            "responses_received": 3,
            "offers_received": 0
        },
        "as_of": "2026-08-15"
    }"#;

    #[test]
    fn test_full_intake_payload_parses() {
        let req: AssessmentRequest = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(req.profile.full_name(), "Maya Okafor");
        assert_eq!(req.profile.gender, Gender::Female);
        assert_eq!(req.profile.position, Position::GK);
        assert_eq!(req.as_of, NaiveDate::from_ymd_opt(2026, 8, 15));

        let season = req.profile.latest_season().unwrap();
        assert_eq!(season.leagues, vec![YouthLeague::Ecnl]);
        assert_eq!(season.main_role, SeasonRole::KeyStarter);
        assert_eq!(req.profile.video, VideoStatus::EditedHighlightReel);
    }

    #[test]
    fn test_parsed_payload_passes_validation_and_scores() {
        let req: AssessmentRequest = serde_json::from_str(PAYLOAD).unwrap();
        let validation = validate_profile(&req.profile);
        assert!(validation.passed, "unexpected issues: {:?}", validation.issues);

        let as_of = req.as_of.unwrap();
        let assessment = score_profile(&req.profile, as_of);
        let report = build_report(&req.profile, &assessment);
        assert_eq!(report.primary_level, assessment.primary_level);
        assert!(!report.plain_language_summary.is_empty());
    }

    #[test]
    fn test_as_of_is_optional() {
        let mut value: serde_json::Value = serde_json::from_str(PAYLOAD).unwrap();
        value.as_object_mut().unwrap().remove("as_of");
        let req: AssessmentRequest = serde_json::from_value(value).unwrap();
        assert!(req.as_of.is_none());
    }

    #[test]
    fn test_unknown_league_name_is_rejected() {
        let tampered = PAYLOAD.replace("\"ECNL\"", "\"NPL\"");
        let result: Result<AssessmentRequest, _> = serde_json::from_str(&tampered);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_carries_resolved_date() {
        let req: AssessmentRequest = serde_json::from_str(PAYLOAD).unwrap();
        let as_of = req.as_of.unwrap();
        let assessment = score_profile(&req.profile, as_of);
        let report = build_report(&req.profile, &assessment);

        let response = AssessmentResponse { as_of, report };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["as_of"], "2026-08-15");
        assert!(json["report"]["visibility_scores"].is_array());
    }
}
