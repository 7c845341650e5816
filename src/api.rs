//! Public API surface for the Safar backend.
//!
//! This file consolidates the typed records and query contracts used by the
//! service layer, the repository implementations, and the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Default number of items per page when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound for `page_size`; requests above this are rejected.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default number of featured locations returned for the landing page.
pub const DEFAULT_FEATURED_COUNT: u32 = 6;

/// Upper bound for the featured location count.
pub const MAX_FEATURED_COUNT: u32 = 24;

/// Well-known category tags.
///
/// Categories are advisory classification keys, not foreign keys: filtering
/// by a value outside this list is valid and simply matches nothing.
pub const KNOWN_CATEGORIES: [&str; 5] = ["heritage", "nature", "religious", "beach", "other"];

/// Location identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub i64);

impl LocationId {
    pub fn new(value: i64) -> Self {
        LocationId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LocationId> for i64 {
    fn from(id: LocationId) -> Self {
        id.0
    }
}

/// A tourist location record.
///
/// Read-only from this service's perspective. `image_url` is an opaque
/// reference to an externally hosted image; it is never fetched or
/// validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique, immutable identifier
    pub id: LocationId,
    /// Display name
    pub name: String,
    /// Grouping key, e.g. "Rajasthan"
    pub state: String,
    /// Classification tag, e.g. "heritage"
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Externally hosted image reference, passed through unchanged
    pub image_url: String,
}

impl Location {
    /// Whether this record carries a usable image reference.
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

/// Equality filters narrowing a location listing.
///
/// `state` and `category` are exact-match classification filters; `query`
/// is a case-insensitive substring match over name and description. Empty
/// strings are treated as absent filters by the HTTP layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub state: Option<String>,
    pub category: Option<String>,
    pub query: Option<String>,
}

impl LocationFilter {
    /// Filter matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_none() && self.category.is_none() && self.query.is_none()
    }

    /// Whether a location satisfies this filter.
    ///
    /// This is the reference semantics for all backends; SQL backends
    /// translate it to WHERE clauses.
    pub fn matches(&self, location: &Location) -> bool {
        if let Some(ref state) = self.state {
            if &location.state != state {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if &location.category != category {
                return false;
            }
        }
        if let Some(ref query) = self.query {
            let needle = query.to_lowercase();
            let in_name = location.name.to_lowercase().contains(&needle);
            let in_description = location.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }
        true
    }
}

/// A bounded slice request over an ordered result set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Items per page, within `[1, MAX_PAGE_SIZE]`
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Validate pagination bounds.
    ///
    /// Callers must reject invalid requests before running any query so
    /// that no partial result is ever produced.
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err(format!("page must be >= 1, got {}", self.page));
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(format!(
                "pageSize must be within [1, {}], got {}",
                MAX_PAGE_SIZE, self.page_size
            ));
        }
        Ok(())
    }

    /// Number of records to skip. Only meaningful for a validated request.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.page_size as i64
    }

    /// Maximum number of records to return.
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

/// One page of an ordered, filtered location listing.
///
/// `total` counts all matching records before pagination so callers can
/// compute the page count. An empty `items` is a valid result, not an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPage {
    pub items: Vec<Location>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl LocationPage {
    /// Total number of pages for this filter at this page size.
    pub fn total_pages(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            self.total.div_ceil(self.page_size as u64) as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_location() -> Location {
        Location {
            id: LocationId::new(1),
            name: "Taj Mahal".to_string(),
            state: "Uttar Pradesh".to_string(),
            category: "heritage".to_string(),
            description: "Ivory-white marble mausoleum in Agra".to_string(),
            image_url: "https://example.org/taj.jpg".to_string(),
        }
    }

    #[test]
    fn test_location_id_roundtrip() {
        let id = LocationId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_location_id_equality() {
        let id1 = LocationId::new(100);
        let id2 = LocationId::new(100);
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_page_request_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_page_request_rejects_page_zero() {
        let request = PageRequest::new(0, 10);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_page_request_rejects_page_size_zero() {
        let request = PageRequest::new(1, 0);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_page_request_rejects_oversized_page() {
        let request = PageRequest::new(1, MAX_PAGE_SIZE + 1);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_page_request_accepts_bounds() {
        assert!(PageRequest::new(1, 1).validate().is_ok());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE).validate().is_ok());
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(1, 20).offset(), 0);
        assert_eq!(PageRequest::new(2, 20).offset(), 20);
        assert_eq!(PageRequest::new(3, 7).offset(), 14);
    }

    #[test]
    fn test_filter_matches_state_and_category() {
        let location = sample_location();

        let filter = LocationFilter {
            state: Some("Uttar Pradesh".to_string()),
            category: Some("heritage".to_string()),
            query: None,
        };
        assert!(filter.matches(&location));

        let wrong_state = LocationFilter {
            state: Some("Goa".to_string()),
            ..Default::default()
        };
        assert!(!wrong_state.matches(&location));
    }

    #[test]
    fn test_filter_state_match_is_exact() {
        let location = sample_location();
        let filter = LocationFilter {
            state: Some("uttar pradesh".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&location));
    }

    #[test]
    fn test_filter_query_is_case_insensitive() {
        let location = sample_location();

        let by_name = LocationFilter {
            query: Some("taj".to_string()),
            ..Default::default()
        };
        assert!(by_name.matches(&location));

        let by_description = LocationFilter {
            query: Some("MARBLE".to_string()),
            ..Default::default()
        };
        assert!(by_description.matches(&location));

        let no_match = LocationFilter {
            query: Some("fort".to_string()),
            ..Default::default()
        };
        assert!(!no_match.matches(&location));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(LocationFilter::all().is_empty());
        assert!(LocationFilter::all().matches(&sample_location()));
    }

    #[test]
    fn test_total_pages() {
        let page = LocationPage {
            items: vec![],
            total: 41,
            page: 1,
            page_size: 20,
        };
        assert_eq!(page.total_pages(), 3);

        let empty = LocationPage {
            items: vec![],
            total: 0,
            page: 1,
            page_size: 20,
        };
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn test_has_image() {
        let mut location = sample_location();
        assert!(location.has_image());
        location.image_url.clear();
        assert!(!location.has_image());
    }
}
