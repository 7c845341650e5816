//! Catalog repository trait for classification keys and featured selection.
//!
//! These queries feed the frontend's filter dropdowns and landing page.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::Location;

/// Repository trait for catalog queries.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List distinct non-empty `state` values, ascending.
    async fn list_states(&self) -> RepositoryResult<Vec<String>>;

    /// List distinct non-empty `category` values, ascending.
    async fn list_categories(&self) -> RepositoryResult<Vec<String>>;

    /// Select up to `count` locations that carry a non-empty `image_url`,
    /// for the landing page.
    ///
    /// Selection order is backend-defined: the Postgres backend randomizes,
    /// the local backend is deterministic. Callers must bound `count`
    /// before invoking this method; the service layer does so.
    async fn featured_locations(&self, count: u32) -> RepositoryResult<Vec<Location>>;
}
