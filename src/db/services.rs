//! High-level database service layer.
//!
//! This module provides repository-agnostic database operations that work
//! with any implementation of the repository traits. These functions carry
//! the business rules that must be consistent regardless of the storage
//! backend. Above all, pagination bounds are validated BEFORE any query
//! runs so that an invalid request never touches the store and no partial
//! result is ever produced.
//!
//! # Usage
//!
//! ```no_run
//! use safar::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let page = services::list_locations(
//!         &repo,
//!         &Default::default(),
//!         Default::default(),
//!     )
//!     .await?;
//!     println!("Found {} locations", page.total);
//!
//!     Ok(())
//! }
//! ```

use log::debug;

use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::api::{
    Location, LocationFilter, LocationId, LocationPage, PageRequest, DEFAULT_FEATURED_COUNT,
    MAX_FEATURED_COUNT,
};

// ==================== Health & Connection ====================

/// Check if the database connection is healthy.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Location Operations ====================

/// List locations matching a filter, as one bounded page.
///
/// Validates the page request first; `page < 1` or a page size outside the
/// allowed range is rejected with `ValidationError` and no query is
/// executed. Filtering by a state or category that matches no records is
/// not an error: the result is an empty page with `total = 0`.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `filter` - Equality filters on state/category plus optional text query
/// * `page` - 1-based page number and page size
///
/// # Returns
/// * `Ok(LocationPage)` - Ordered slice plus pre-pagination total
/// * `Err(RepositoryError::ValidationError)` - If pagination bounds are invalid
/// * `Err` - If the underlying query fails
pub async fn list_locations<R: FullRepository + ?Sized>(
    repo: &R,
    filter: &LocationFilter,
    page: PageRequest,
) -> RepositoryResult<LocationPage> {
    page.validate()
        .map_err(|msg| RepositoryError::validation(msg).with_operation("list_locations"))?;

    debug!(
        "Service layer: listing locations (state={:?}, category={:?}, query={:?}, page={}, page_size={})",
        filter.state, filter.category, filter.query, page.page, page.page_size,
    );

    repo.list_locations(filter, page).await
}

/// Retrieve a single location by ID.
///
/// # Returns
/// * `Ok(Location)` - The record
/// * `Err(RepositoryError::NotFound)` - If the location doesn't exist
pub async fn get_location<R: FullRepository + ?Sized>(
    repo: &R,
    location_id: LocationId,
) -> RepositoryResult<Location> {
    repo.get_location(location_id).await
}

// ==================== Catalog Operations ====================

/// List distinct non-empty states, ascending.
pub async fn list_states<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<String>> {
    repo.list_states().await
}

/// List distinct non-empty categories, ascending.
pub async fn list_categories<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<String>> {
    repo.list_categories().await
}

/// Select featured locations for the landing page.
///
/// `count` defaults to [`DEFAULT_FEATURED_COUNT`] and must stay within
/// `[1, MAX_FEATURED_COUNT]`; out-of-range values are rejected before any
/// query runs. All returned records carry a non-empty `image_url`.
pub async fn featured_locations<R: FullRepository + ?Sized>(
    repo: &R,
    count: Option<u32>,
) -> RepositoryResult<Vec<Location>> {
    let count = count.unwrap_or(DEFAULT_FEATURED_COUNT);
    if count < 1 || count > MAX_FEATURED_COUNT {
        return Err(RepositoryError::validation(format!(
            "count must be within [1, {}], got {}",
            MAX_FEATURED_COUNT, count
        ))
        .with_operation("featured_locations"));
    }

    debug!("Service layer: selecting {} featured locations", count);

    repo.featured_locations(count).await
}
