//! Expanded tests for LocalRepository.
//!
//! These tests cover concurrent access patterns, edge cases, and error
//! conditions for the in-memory local repository implementation.

use std::sync::Arc;

use safar::api::{Location, LocationFilter, LocationId, PageRequest};
use safar::db::repositories::LocalRepository;
use safar::db::repository::{CatalogRepository, LocationRepository, RepositoryError};

fn create_test_location(index: usize) -> Location {
    let (state, category) = match index % 3 {
        0 => ("Rajasthan", "heritage"),
        1 => ("Goa", "beach"),
        _ => ("Kerala", "nature"),
    };
    Location {
        id: LocationId::new(0),
        name: format!("Location {}", index),
        state: state.to_string(),
        category: category.to_string(),
        description: format!("Test location number {}", index),
        image_url: if index % 2 == 0 {
            format!("https://img.example/{}.jpg", index)
        } else {
            String::new()
        },
    }
}

fn seed(repo: &LocalRepository, count: usize) {
    repo.insert_locations_impl((0..count).map(create_test_location));
}

#[tokio::test]
async fn test_empty_repository_lists_nothing() {
    let repo = LocalRepository::new();
    let page = repo
        .list_locations(&LocationFilter::all(), PageRequest::default())
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages(), 0);
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let repo = LocalRepository::new();
    let ids = repo.insert_locations_impl((0..10).map(create_test_location));
    let values: Vec<i64> = ids.iter().map(LocationId::value).collect();
    assert_eq!(values, (1..=10).collect::<Vec<i64>>());
    assert_eq!(repo.location_count(), 10);
}

#[tokio::test]
async fn test_insert_overwrites_caller_provided_id() {
    let repo = LocalRepository::new();
    let mut location = create_test_location(0);
    location.id = LocationId::new(999);
    let assigned = repo.insert_location_impl(location);
    assert_eq!(assigned.value(), 1);
    assert!(!repo.has_location(LocationId::new(999)));
}

#[tokio::test]
async fn test_full_sweep_has_no_duplicates_or_gaps() {
    let repo = LocalRepository::new();
    seed(&repo, 23);

    let page_size = 5u32;
    let mut collected = Vec::new();
    let mut page_number = 1u32;
    loop {
        let page = repo
            .list_locations(&LocationFilter::all(), PageRequest::new(page_number, page_size))
            .await
            .unwrap();
        if page.items.is_empty() {
            break;
        }
        assert!(page.items.len() <= page_size as usize);
        collected.extend(page.items.iter().map(|l| l.id.value()));
        page_number += 1;
    }

    assert_eq!(collected, (1..=23).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_last_page_is_partial() {
    let repo = LocalRepository::new();
    seed(&repo, 7);

    let page = repo
        .list_locations(&LocationFilter::all(), PageRequest::new(2, 5))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 7);
    assert_eq!(page.total_pages(), 2);
}

#[tokio::test]
async fn test_combined_state_and_category_filter() {
    let repo = LocalRepository::new();
    seed(&repo, 12);

    let filter = LocationFilter {
        state: Some("Goa".to_string()),
        category: Some("beach".to_string()),
        query: None,
    };
    let page = repo
        .list_locations(&filter, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total, 4);
    assert!(page
        .items
        .iter()
        .all(|l| l.state == "Goa" && l.category == "beach"));

    // Same state, contradictory category
    let contradictory = LocationFilter {
        state: Some("Goa".to_string()),
        category: Some("heritage".to_string()),
        query: None,
    };
    let empty = repo
        .list_locations(&contradictory, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(empty.total, 0);
}

#[tokio::test]
async fn test_text_query_filter() {
    let repo = LocalRepository::new();
    seed(&repo, 12);

    let filter = LocationFilter {
        query: Some("number 11".to_string()),
        ..Default::default()
    };
    let page = repo
        .list_locations(&filter, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Location 11");
}

#[tokio::test]
async fn test_query_count_tracks_reads() {
    let repo = LocalRepository::new();
    seed(&repo, 3);
    assert_eq!(repo.query_count(), 0);

    let _ = repo
        .list_locations(&LocationFilter::all(), PageRequest::default())
        .await
        .unwrap();
    let _ = repo.get_location(LocationId::new(1)).await.unwrap();
    let _ = repo.list_states().await.unwrap();
    assert_eq!(repo.query_count(), 3);
}

#[tokio::test]
async fn test_featured_is_bounded_and_image_only() {
    let repo = LocalRepository::new();
    seed(&repo, 10);

    let featured = repo.featured_locations(3).await.unwrap();
    assert_eq!(featured.len(), 3);
    assert!(featured.iter().all(Location::has_image));

    // More requested than available image-carrying records
    let all_featured = repo.featured_locations(24).await.unwrap();
    assert_eq!(all_featured.len(), 5);
}

#[tokio::test]
async fn test_concurrent_readers_see_consistent_data() {
    let repo = Arc::new(LocalRepository::new());
    seed(&repo, 50);

    let mut handles = Vec::new();
    for task in 0..8 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let page_number = (task % 5) + 1;
            let page = repo
                .list_locations(&LocationFilter::all(), PageRequest::new(page_number, 10))
                .await
                .unwrap();
            assert_eq!(page.total, 50);
            assert_eq!(page.items.len(), 10);
            let first_id = page.items[0].id.value();
            assert_eq!(first_id, ((page_number as i64) - 1) * 10 + 1);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_unhealthy_blocks_all_reads() {
    let repo = LocalRepository::new();
    seed(&repo, 2);
    repo.set_healthy(false);

    assert!(matches!(
        repo.list_locations(&LocationFilter::all(), PageRequest::default())
            .await,
        Err(RepositoryError::ConnectionError { .. })
    ));
    assert!(matches!(
        repo.get_location(LocationId::new(1)).await,
        Err(RepositoryError::ConnectionError { .. })
    ));
    assert!(matches!(
        repo.list_categories().await,
        Err(RepositoryError::ConnectionError { .. })
    ));
    assert!(matches!(
        repo.featured_locations(6).await,
        Err(RepositoryError::ConnectionError { .. })
    ));

    repo.set_healthy(true);
    assert!(repo.health_check().await.unwrap());
    assert!(repo.get_location(LocationId::new(1)).await.is_ok());
}

#[tokio::test]
async fn test_clear_resets_ids() {
    let repo = LocalRepository::new();
    seed(&repo, 3);
    repo.clear();
    assert_eq!(repo.location_count(), 0);

    let id = repo.insert_location_impl(create_test_location(0));
    assert_eq!(id.value(), 1);
}
