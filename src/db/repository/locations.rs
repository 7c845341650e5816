//! Core location repository trait for listing and lookup.
//!
//! This trait defines the fundamental read operations for location records.
//! The service is read-only: records are created and maintained by an
//! out-of-scope administrative process.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Location, LocationFilter, LocationId, LocationPage, PageRequest};

/// Repository trait for core location read operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
///
/// # Ordering
/// Listings are ordered by ascending `id` so that offset pagination is
/// deterministic and stable across pages under a static dataset. The
/// standard offset-pagination caveat applies: the no-duplicates/no-gaps
/// guarantee does not hold across concurrent inserts.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the database connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Location Operations ====================

    /// List locations matching a filter, as one bounded page.
    ///
    /// Implementations apply the filter, order by ascending id, count the
    /// total number of matches, and return the requested slice. Callers
    /// are expected to validate `page` before invoking this method; the
    /// service layer does so.
    ///
    /// # Arguments
    /// * `filter` - Equality filters on state/category plus optional text query
    /// * `page` - Validated 1-based page number and page size
    ///
    /// # Returns
    /// * `Ok(LocationPage)` - The slice plus the pre-pagination total.
    ///   An empty page is a valid result for filters matching nothing.
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_locations(
        &self,
        filter: &LocationFilter,
        page: PageRequest,
    ) -> RepositoryResult<LocationPage>;

    /// Retrieve a single location by ID.
    ///
    /// # Arguments
    /// * `location_id` - The ID of the location to retrieve
    ///
    /// # Returns
    /// * `Ok(Location)` - The record
    /// * `Err(RepositoryError::NotFound)` - If the location doesn't exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_location(&self, location_id: LocationId) -> RepositoryResult<Location>;
}
