//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    CategoriesResponse, FeaturedQuery, FeaturedResponse, HealthResponse, LocationDto,
    LocationListResponse, LocationsQuery, StatesResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{LocationFilter, LocationId, PageRequest, DEFAULT_PAGE_SIZE};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Treat blank query parameters as absent filters.
///
/// The frontend sends `?state=&category=` for unselected dropdowns.
fn normalize_param(param: Option<String>) -> Option<String> {
    param
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and database is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Locations
// =============================================================================

/// GET /api/locations
///
/// List locations with optional filters and server-side pagination.
pub async fn list_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationsQuery>,
) -> HandlerResult<LocationListResponse> {
    let filter = LocationFilter {
        state: normalize_param(query.state),
        category: normalize_param(query.category),
        query: normalize_param(query.q),
    };
    let page = PageRequest::new(
        query.page.unwrap_or(1),
        query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    );

    let result = db_services::list_locations(state.repository.as_ref(), &filter, page).await?;

    Ok(Json(result.into()))
}

/// GET /api/locations/featured
///
/// Select featured locations for the landing page.
pub async fn featured_locations(
    State(state): State<AppState>,
    Query(query): Query<FeaturedQuery>,
) -> HandlerResult<FeaturedResponse> {
    let locations =
        db_services::featured_locations(state.repository.as_ref(), query.count).await?;

    Ok(Json(FeaturedResponse {
        items: locations.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/locations/{location_id}
///
/// Retrieve a single location by ID.
pub async fn get_location(
    State(state): State<AppState>,
    Path(location_id): Path<i64>,
) -> HandlerResult<LocationDto> {
    let location =
        db_services::get_location(state.repository.as_ref(), LocationId::new(location_id)).await?;

    Ok(Json(location.into()))
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /api/states
///
/// List distinct states for filter dropdowns.
pub async fn list_states(State(state): State<AppState>) -> HandlerResult<StatesResponse> {
    let states = db_services::list_states(state.repository.as_ref()).await?;

    Ok(Json(StatesResponse { states }))
}

/// GET /api/categories
///
/// List distinct categories for filter dropdowns.
pub async fn list_categories(State(state): State<AppState>) -> HandlerResult<CategoriesResponse> {
    let categories = db_services::list_categories(state.repository.as_ref()).await?;

    Ok(Json(CategoriesResponse { categories }))
}
