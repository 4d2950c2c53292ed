use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::models::assessment::AssessmentRow;
use crate::profile::models::PlayerProfile;
use crate::report::builder::AnalysisReport;
use crate::scoring::engine::VisibilityAssessment;
use crate::scoring::tables::Division;

/// Stores one completed scoring run.
///
/// Append-only: re-scoring the same player inserts a new row rather than
/// updating the old one, so earlier runs stay readable by id.
pub async fn insert_assessment(
    pool: &PgPool,
    profile: &PlayerProfile,
    assessment: &VisibilityAssessment,
    report: &AnalysisReport,
) -> Result<AssessmentRow> {
    let profile_json = serde_json::to_value(profile)?;
    let report_json = serde_json::to_value(report)?;

    let row: AssessmentRow = sqlx::query_as(
        r#"
        INSERT INTO assessments
            (email, first_name, last_name, gender, position, grad_year,
             league_tier, ability_band, academic_band, primary_level,
             visibility_d1, visibility_d2, visibility_d3, visibility_naia, visibility_juco,
             profile, report)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
        RETURNING *
        "#,
    )
    .bind(&profile.email)
    .bind(&profile.first_name)
    .bind(&profile.last_name)
    .bind(profile.gender.label())
    .bind(profile.position.label())
    .bind(profile.grad_year)
    .bind(assessment.league.tier.label())
    .bind(assessment.ability.band.label())
    .bind(assessment.academic_band.label())
    .bind(assessment.primary_level.label())
    .bind(assessment.visibility(Division::D1))
    .bind(assessment.visibility(Division::D2))
    .bind(assessment.visibility(Division::D3))
    .bind(assessment.visibility(Division::Naia))
    .bind(assessment.visibility(Division::Juco))
    .bind(&profile_json)
    .bind(&report_json)
    .fetch_one(pool)
    .await?;

    info!(
        "Stored assessment {} for {} (primary level {})",
        row.id,
        profile.full_name(),
        row.primary_level
    );

    Ok(row)
}
