use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates a PostgreSQL connection pool and ensures the schema exists.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");

    migrate(&pool).await?;
    Ok(pool)
}

/// Idempotent schema setup, run at every startup.
///
/// The assessments table is append-only: one row per scoring run, never
/// updated. Re-scoring the same player inserts a new row, so the history of
/// a player's profile over a recruiting cycle is queryable by email.
async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS assessments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email TEXT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            gender TEXT NOT NULL,
            position TEXT NOT NULL,
            grad_year INTEGER NOT NULL,
            league_tier TEXT NOT NULL,
            ability_band TEXT NOT NULL,
            academic_band TEXT NOT NULL,
            primary_level TEXT NOT NULL,
            visibility_d1 DOUBLE PRECISION NOT NULL,
            visibility_d2 DOUBLE PRECISION NOT NULL,
            visibility_d3 DOUBLE PRECISION NOT NULL,
            visibility_naia DOUBLE PRECISION NOT NULL,
            visibility_juco DOUBLE PRECISION NOT NULL,
            profile JSONB NOT NULL,
            report JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_assessments_email ON assessments (email, created_at DESC)",
    )
    .execute(pool)
    .await?;

    info!("Database schema ready");
    Ok(())
}
