use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::YearCount;
use crate::state::AppState;
use crate::wall::{build_wall, Wall};

async fn wall_for_year(state: &AppState, year: i32) -> Result<Wall, AppError> {
    let ads = state.ads.list_for_year(year).await?;
    let mut rng = state.shuffle.rng();
    let wall = build_wall(year, &ads, &mut rng);
    tracing::debug!(
        "Wall {year}: {} sidebar, {} grid, {} dropped, {} excluded",
        wall.sidebar.len(),
        wall.grid.len(),
        wall.dropped_mediums,
        wall.excluded
    );
    Ok(wall)
}

/// GET /api/v1/wall
pub async fn handle_current_wall(State(state): State<AppState>) -> Result<Json<Wall>, AppError> {
    let year = state.config.default_year;
    Ok(Json(wall_for_year(&state, year).await?))
}

/// GET /api/v1/wall/:year
pub async fn handle_year_wall(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<Wall>, AppError> {
    Ok(Json(wall_for_year(&state, year).await?))
}

/// GET /api/v1/years
pub async fn handle_years(State(state): State<AppState>) -> Result<Json<Vec<YearCount>>, AppError> {
    Ok(Json(state.ads.year_counts().await?))
}
