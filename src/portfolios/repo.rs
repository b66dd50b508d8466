use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::{CreatePortfolioRequest, UpdatePortfolioRequest};

/// Investment calculator parameters nested inside a portfolio.
/// Stored as a JSONB document, camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorParams {
    pub money_to_invest: Option<f64>,
    pub monthly_investment: Option<f64>,
    pub risk_level: Option<String>,
    pub investment_years: Option<i32>,
}

/// One stock allocation line. Only the ticker is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAllocation {
    pub ticker: String,
    pub number: Option<f64>,
    pub base_price: Option<f64>,
    pub percentage: Option<f64>,
}

/// Portfolio record. Every row is owned by exactly one user and all
/// lookups below filter by that owner in the same statement.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub goals: String,
    pub industries: String,
    pub risks: String,
    pub preferences: Option<String>,
    pub calculator: Option<Json<CalculatorParams>>,
    pub stocks: Json<Vec<StockAllocation>>,
    pub created_at: OffsetDateTime,
}

const PORTFOLIO_COLUMNS: &str =
    "id, user_id, title, goals, industries, risks, preferences, calculator, stocks, created_at";

pub async fn create(
    db: &PgPool,
    user_id: Uuid,
    p: CreatePortfolioRequest,
) -> anyhow::Result<Portfolio> {
    let row = sqlx::query_as::<_, Portfolio>(&format!(
        r#"
        INSERT INTO portfolios (user_id, title, goals, industries, risks, preferences, calculator, stocks)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {PORTFOLIO_COLUMNS}
        "#,
    ))
    .bind(user_id)
    .bind(p.title)
    .bind(p.goals)
    .bind(p.industries)
    .bind(p.risks)
    .bind(p.preferences)
    .bind(p.calculator.map(Json))
    .bind(Json(p.stocks))
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn find_by_id(
    db: &PgPool,
    user_id: Uuid,
    portfolio_id: Uuid,
) -> anyhow::Result<Option<Portfolio>> {
    let row = sqlx::query_as::<_, Portfolio>(&format!(
        r#"
        SELECT {PORTFOLIO_COLUMNS}
        FROM portfolios
        WHERE id = $1 AND user_id = $2
        "#,
    ))
    .bind(portfolio_id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Portfolio>> {
    let rows = sqlx::query_as::<_, Portfolio>(&format!(
        r#"
        SELECT {PORTFOLIO_COLUMNS}
        FROM portfolios
        WHERE user_id = $1
        "#,
    ))
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Applies only the provided fields; ownership is checked inside the
/// same UPDATE so a non-owned row is indistinguishable from a missing
/// one. Returns None when nothing matched.
pub async fn update(
    db: &PgPool,
    user_id: Uuid,
    portfolio_id: Uuid,
    u: UpdatePortfolioRequest,
) -> anyhow::Result<Option<Portfolio>> {
    let row = sqlx::query_as::<_, Portfolio>(&format!(
        r#"
        UPDATE portfolios
        SET title       = COALESCE($3, title),
            goals       = COALESCE($4, goals),
            industries  = COALESCE($5, industries),
            risks       = COALESCE($6, risks),
            preferences = COALESCE($7, preferences),
            calculator  = COALESCE($8, calculator),
            stocks      = COALESCE($9, stocks)
        WHERE id = $1 AND user_id = $2
        RETURNING {PORTFOLIO_COLUMNS}
        "#,
    ))
    .bind(portfolio_id)
    .bind(user_id)
    .bind(u.title)
    .bind(u.goals)
    .bind(u.industries)
    .bind(u.risks)
    .bind(u.preferences)
    .bind(u.calculator.map(Json))
    .bind(u.stocks.map(Json))
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Returns true if a row owned by the caller was deleted.
pub async fn delete(db: &PgPool, user_id: Uuid, portfolio_id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM portfolios
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(portfolio_id)
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
