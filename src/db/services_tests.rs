//! Unit tests for the service layer.
//!
//! These run against the in-memory local repository and focus on the rules
//! the service layer owns: pagination bounds, featured count bounds, and
//! the guarantee that rejected requests never reach the store.

use super::repositories::LocalRepository;
use super::repository::RepositoryError;
use super::services;
use crate::api::{
    Location, LocationFilter, LocationId, PageRequest, DEFAULT_FEATURED_COUNT, KNOWN_CATEGORIES,
    MAX_PAGE_SIZE,
};

fn location(name: &str, state: &str, category: &str) -> Location {
    Location {
        id: LocationId::new(0),
        name: name.to_string(),
        state: state.to_string(),
        category: category.to_string(),
        description: String::new(),
        image_url: format!("https://img.example/{}.jpg", name.to_lowercase()),
    }
}

fn seeded_repo() -> LocalRepository {
    let repo = LocalRepository::new();
    repo.insert_locations_impl([
        location("Hawa Mahal", "Rajasthan", "heritage"),
        location("City Palace", "Rajasthan", "heritage"),
        location("Calangute", "Goa", "beach"),
    ]);
    repo
}

#[tokio::test]
async fn list_rejects_page_zero_without_querying() {
    let repo = seeded_repo();
    let before = repo.query_count();

    let result =
        services::list_locations(&repo, &LocationFilter::all(), PageRequest::new(0, 10)).await;

    assert!(matches!(result, Err(RepositoryError::ValidationError { .. })));
    assert_eq!(repo.query_count(), before);
}

#[tokio::test]
async fn list_rejects_oversized_page_size_without_querying() {
    let repo = seeded_repo();
    let before = repo.query_count();

    let result = services::list_locations(
        &repo,
        &LocationFilter::all(),
        PageRequest::new(1, MAX_PAGE_SIZE + 1),
    )
    .await;

    assert!(matches!(result, Err(RepositoryError::ValidationError { .. })));
    assert_eq!(repo.query_count(), before);
}

#[tokio::test]
async fn list_rejects_page_size_zero() {
    let repo = seeded_repo();
    let result =
        services::list_locations(&repo, &LocationFilter::all(), PageRequest::new(1, 0)).await;
    assert!(matches!(result, Err(RepositoryError::ValidationError { .. })));
}

#[tokio::test]
async fn list_returns_filtered_page() {
    let repo = seeded_repo();
    let filter = LocationFilter {
        state: Some("Rajasthan".to_string()),
        ..Default::default()
    };

    let page = services::list_locations(&repo, &filter, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);
}

#[tokio::test]
async fn unknown_category_yields_empty_page_not_error() {
    let repo = seeded_repo();
    let filter = LocationFilter {
        category: Some("glacier".to_string()),
        ..Default::default()
    };

    let page = services::list_locations(&repo, &filter, PageRequest::default())
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn get_location_passes_through_not_found() {
    let repo = seeded_repo();
    let result = services::get_location(&repo, LocationId::new(42)).await;
    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
}

#[tokio::test]
async fn featured_defaults_and_bounds() {
    let repo = seeded_repo();

    let featured = services::featured_locations(&repo, None).await.unwrap();
    assert!(featured.len() <= DEFAULT_FEATURED_COUNT as usize);

    let before = repo.query_count();
    let zero = services::featured_locations(&repo, Some(0)).await;
    assert!(matches!(zero, Err(RepositoryError::ValidationError { .. })));

    let oversized = services::featured_locations(&repo, Some(1000)).await;
    assert!(matches!(
        oversized,
        Err(RepositoryError::ValidationError { .. })
    ));
    assert_eq!(repo.query_count(), before);
}

#[tokio::test]
async fn catalog_queries_pass_through() {
    let repo = seeded_repo();
    assert_eq!(
        services::list_states(&repo).await.unwrap(),
        vec!["Goa", "Rajasthan"]
    );
    assert_eq!(
        services::list_categories(&repo).await.unwrap(),
        vec!["beach", "heritage"]
    );
}

#[tokio::test]
async fn every_known_category_filters_cleanly() {
    let repo = seeded_repo();

    for category in KNOWN_CATEGORIES {
        let filter = LocationFilter {
            category: Some(category.to_string()),
            ..Default::default()
        };
        let page = services::list_locations(&repo, &filter, PageRequest::default())
            .await
            .unwrap();
        assert!(page.items.iter().all(|l| l.category == category));
    }
}

#[tokio::test]
async fn health_check_reflects_store_state() {
    let repo = seeded_repo();
    assert!(services::health_check(&repo).await.unwrap());
    repo.set_healthy(false);
    assert!(!services::health_check(&repo).await.unwrap());
}
