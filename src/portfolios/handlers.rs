use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    portfolios::{
        dto::{
            CreatePortfolioRequest, CreatedPortfolioResponse, DeletedPortfolioResponse,
            PortfolioListResponse, PortfolioResponse, UpdatePortfolioRequest,
            UpdatedPortfolioResponse,
        },
        repo,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/portfolio", post(create_portfolio))
        .route(
            "/portfolio/:id",
            get(get_portfolio)
                .patch(update_portfolio)
                .delete(delete_portfolio),
        )
        .route("/portfolios", get(list_portfolios))
}

fn validate_required(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[instrument(skip(state, payload))]
pub async fn create_portfolio(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreatePortfolioRequest>,
) -> Result<(StatusCode, Json<CreatedPortfolioResponse>), ApiError> {
    validate_required("title", &payload.title)?;
    validate_required("goals", &payload.goals)?;
    validate_required("industries", &payload.industries)?;
    validate_required("risks", &payload.risks)?;

    let portfolio = repo::create(&state.db, user_id, payload).await?;

    info!(user_id = %user_id, portfolio_id = %portfolio.id, "portfolio created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedPortfolioResponse {
            message: "Portfolio saved successfully".into(),
            portfolio_id: portfolio.id,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_portfolio(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PortfolioResponse>, ApiError> {
    let portfolio = repo::find_by_id(&state.db, user_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Portfolio not found".into()))?;

    Ok(Json(PortfolioResponse { portfolio }))
}

#[instrument(skip(state))]
pub async fn list_portfolios(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PortfolioListResponse>, ApiError> {
    let portfolios = repo::list_by_user(&state.db, user_id).await?;
    Ok(Json(PortfolioListResponse { portfolios }))
}

#[instrument(skip(state, payload))]
pub async fn update_portfolio(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePortfolioRequest>,
) -> Result<Json<UpdatedPortfolioResponse>, ApiError> {
    let portfolio = repo::update(&state.db, user_id, id, payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("Portfolio not found".into()))?;

    info!(user_id = %user_id, portfolio_id = %portfolio.id, "portfolio updated");
    Ok(Json(UpdatedPortfolioResponse {
        message: "Portfolio updated successfully".into(),
        portfolio,
    }))
}

#[instrument(skip(state))]
pub async fn delete_portfolio(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedPortfolioResponse>, ApiError> {
    if !repo::delete(&state.db, user_id, id).await? {
        return Err(ApiError::NotFound("Portfolio not found".into()));
    }

    info!(user_id = %user_id, portfolio_id = %id, "portfolio deleted");
    Ok(Json(DeletedPortfolioResponse {
        message: "Portfolio deleted successfully".into(),
    }))
}
