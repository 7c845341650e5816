//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory, providing fast, deterministic, and isolated execution.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::api::{Location, LocationFilter, LocationId, LocationPage, PageRequest};
use crate::db::repository::{
    CatalogRepository, LocationRepository, RepositoryError, RepositoryResult,
};

/// In-memory local repository.
///
/// Locations are kept in a `BTreeMap` keyed by id, so iteration order is
/// already the ascending-id listing order. The repository counts executed
/// queries, which lets tests assert that rejected requests never reach the
/// store.
///
/// # Example
/// ```
/// use safar::api::{Location, LocationId};
/// use safar::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// let id = repo.insert_location_impl(Location {
///     id: LocationId::new(0), // overwritten on insert
///     name: "Jaisalmer Fort".to_string(),
///     state: "Rajasthan".to_string(),
///     category: "heritage".to_string(),
///     description: "Living fort in the Thar desert".to_string(),
///     image_url: String::new(),
/// });
/// assert_eq!(id.value(), 1);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    locations: BTreeMap<i64, Location>,

    // ID counter
    next_location_id: i64,

    // Connection health
    is_healthy: bool,

    // Number of read operations that reached the store
    query_count: u64,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            locations: BTreeMap::new(),
            next_location_id: 1,
            is_healthy: true,
            query_count: 0,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Add a location to the repository.
    ///
    /// This is a helper method for seeding data; it is not part of the
    /// repository traits because the service is read-only. The location is
    /// assigned the next sequential ID, overwriting any ID on the input.
    ///
    /// # Returns
    /// The ID assigned to the location
    pub fn insert_location_impl(&self, mut location: Location) -> LocationId {
        let mut data = self.data.write().unwrap();
        let location_id = LocationId::new(data.next_location_id);
        data.next_location_id += 1;

        location.id = location_id;
        data.locations.insert(location_id.value(), location);

        location_id
    }

    /// Seed several locations at once, returning their assigned IDs.
    pub fn insert_locations_impl(
        &self,
        locations: impl IntoIterator<Item = Location>,
    ) -> Vec<LocationId> {
        locations
            .into_iter()
            .map(|location| self.insert_location_impl(location))
            .collect()
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of locations stored.
    pub fn location_count(&self) -> usize {
        self.data.read().unwrap().locations.len()
    }

    /// Number of read operations that reached the store.
    ///
    /// Validation happens in the service layer before any repository call,
    /// so tests can assert this stays unchanged for rejected requests.
    pub fn query_count(&self) -> u64 {
        self.data.read().unwrap().query_count
    }

    /// Check if a location exists.
    pub fn has_location(&self, location_id: LocationId) -> bool {
        self.data
            .read()
            .unwrap()
            .locations
            .contains_key(&location_id.value())
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection("Database is not healthy"));
        }
        Ok(())
    }

    fn record_query(&self) {
        let mut data = self.data.write().unwrap();
        data.query_count += 1;
    }

    /// Distinct non-empty values of one classification column, ascending.
    fn distinct_values(&self, select: for<'a> fn(&'a Location) -> &'a str) -> Vec<String> {
        let data = self.data.read().unwrap();
        let mut values: Vec<String> = data
            .locations
            .values()
            .map(select)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn list_locations(
        &self,
        filter: &LocationFilter,
        page: PageRequest,
    ) -> RepositoryResult<LocationPage> {
        self.check_health()?;
        self.record_query();

        let data = self.data.read().unwrap();

        // BTreeMap iteration is ascending by id, the listing order.
        let matching: Vec<&Location> = data
            .locations
            .values()
            .filter(|location| filter.matches(location))
            .collect();

        let total = matching.len() as u64;
        let items: Vec<Location> = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(LocationPage {
            items,
            total,
            page: page.page,
            page_size: page.page_size,
        })
    }

    async fn get_location(&self, location_id: LocationId) -> RepositoryResult<Location> {
        self.check_health()?;
        self.record_query();

        let data = self.data.read().unwrap();
        data.locations
            .get(&location_id.value())
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found(format!("Location {} not found", location_id))
            })
    }
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn list_states(&self) -> RepositoryResult<Vec<String>> {
        self.check_health()?;
        self.record_query();
        Ok(self.distinct_values(|location| &location.state))
    }

    async fn list_categories(&self) -> RepositoryResult<Vec<String>> {
        self.check_health()?;
        self.record_query();
        Ok(self.distinct_values(|location| &location.category))
    }

    async fn featured_locations(&self, count: u32) -> RepositoryResult<Vec<Location>> {
        self.check_health()?;
        self.record_query();

        // Deterministic selection: first N image-carrying records in id
        // order. Randomization is a store concern (ORDER BY RANDOM() in
        // Postgres); stable output here keeps tests reproducible.
        let data = self.data.read().unwrap();
        Ok(data
            .locations
            .values()
            .filter(|location| location.has_image())
            .take(count as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: &str, state: &str, category: &str, image_url: &str) -> Location {
        Location {
            id: LocationId::new(0),
            name: name.to_string(),
            state: state.to_string(),
            category: category.to_string(),
            description: format!("{} in {}", name, state),
            image_url: image_url.to_string(),
        }
    }

    fn seeded_repo() -> LocalRepository {
        let repo = LocalRepository::new();
        repo.insert_locations_impl([
            location("Amber Fort", "Rajasthan", "heritage", "https://img/amber.jpg"),
            location("Jaisalmer Fort", "Rajasthan", "heritage", ""),
            location("Baga Beach", "Goa", "beach", "https://img/baga.jpg"),
            location("Periyar", "Kerala", "nature", "https://img/periyar.jpg"),
            location("Kashi Vishwanath", "Uttar Pradesh", "religious", ""),
        ]);
        repo
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = seeded_repo();
        assert_eq!(repo.location_count(), 5);
        assert!(repo.has_location(LocationId::new(1)));
        assert!(repo.has_location(LocationId::new(5)));
        assert!(!repo.has_location(LocationId::new(6)));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = seeded_repo();
        let page = repo
            .list_locations(&LocationFilter::all(), PageRequest::new(1, 100))
            .await
            .unwrap();
        let ids: Vec<i64> = page.items.iter().map(|l| l.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(page.total, 5);
    }

    #[tokio::test]
    async fn test_filter_by_state() {
        let repo = seeded_repo();
        let filter = LocationFilter {
            state: Some("Rajasthan".to_string()),
            ..Default::default()
        };
        let page = repo
            .list_locations(&filter, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|l| l.state == "Rajasthan"));
    }

    #[tokio::test]
    async fn test_unknown_category_matches_nothing() {
        let repo = seeded_repo();
        let filter = LocationFilter {
            category: Some("volcano".to_string()),
            ..Default::default()
        };
        let page = repo
            .list_locations(&filter, PageRequest::default())
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_pagination_slices() {
        let repo = seeded_repo();
        let page = repo
            .list_locations(&LocationFilter::all(), PageRequest::new(2, 2))
            .await
            .unwrap();
        let ids: Vec<i64> = page.items.iter().map(|l| l.id.value()).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages(), 3);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let repo = seeded_repo();
        let page = repo
            .list_locations(&LocationFilter::all(), PageRequest::new(4, 2))
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
    }

    #[tokio::test]
    async fn test_get_location() {
        let repo = seeded_repo();
        let loc = repo.get_location(LocationId::new(3)).await.unwrap();
        assert_eq!(loc.name, "Baga Beach");

        let missing = repo.get_location(LocationId::new(99)).await;
        assert!(matches!(
            missing,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_distinct_states_sorted() {
        let repo = seeded_repo();
        let states = repo.list_states().await.unwrap();
        assert_eq!(states, vec!["Goa", "Kerala", "Rajasthan", "Uttar Pradesh"]);
    }

    #[tokio::test]
    async fn test_distinct_categories_sorted() {
        let repo = seeded_repo();
        let categories = repo.list_categories().await.unwrap();
        assert_eq!(categories, vec!["beach", "heritage", "nature", "religious"]);
    }

    #[tokio::test]
    async fn test_featured_requires_image() {
        let repo = seeded_repo();
        let featured = repo.featured_locations(10).await.unwrap();
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(Location::has_image));
    }

    #[tokio::test]
    async fn test_unhealthy_repo_errors() {
        let repo = seeded_repo();
        repo.set_healthy(false);
        assert!(!repo.health_check().await.unwrap());

        let result = repo
            .list_locations(&LocationFilter::all(), PageRequest::default())
            .await;
        assert!(matches!(
            result,
            Err(RepositoryError::ConnectionError { .. })
        ));
    }

    #[tokio::test]
    async fn test_clear_preserves_health() {
        let repo = seeded_repo();
        repo.set_healthy(false);
        repo.clear();
        assert_eq!(repo.location_count(), 0);
        assert!(!repo.health_check().await.unwrap());
    }
}
