//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Query parameter and response field names follow the frontend's
//! camelCase convention (`pageSize`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::api::{Location, LocationPage};

/// Deserialize an optional scalar, treating a blank value as absent.
///
/// Frontends submit unset form inputs as empty strings (`?page=&pageSize=`),
/// which must fall back to defaults rather than fail numeric parsing.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Location record as serialized in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDto {
    /// Location ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Grouping key
    pub state: String,
    /// Classification tag
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Externally hosted image reference
    pub image_url: String,
}

impl From<Location> for LocationDto {
    fn from(location: Location) -> Self {
        Self {
            id: location.id.value(),
            name: location.name,
            state: location.state,
            category: location.category,
            description: location.description,
            image_url: location.image_url,
        }
    }
}

/// Query parameters for the location listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationsQuery {
    /// Equality filter on state
    #[serde(default)]
    pub state: Option<String>,
    /// Equality filter on category
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive text search over name and description
    #[serde(default)]
    pub q: Option<String>,
    /// 1-based page number (default: 1)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<u32>,
    /// Items per page (default: 20, max: 100)
    #[serde(
        default,
        rename = "pageSize",
        deserialize_with = "empty_string_as_none"
    )]
    pub page_size: Option<u32>,
}

/// Paginated location listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationListResponse {
    /// One page of matching locations, ordered by id
    pub items: Vec<LocationDto>,
    /// Total matching records before pagination
    pub total: u64,
    /// Echoed page number
    pub page: u32,
    /// Echoed page size
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl From<LocationPage> for LocationListResponse {
    fn from(page: LocationPage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
            page: page.page,
            page_size: page.page_size,
        }
    }
}

/// Query parameters for the featured locations endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeaturedQuery {
    /// Number of locations to return (default: 6, max: 24)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub count: Option<u32>,
}

/// Featured locations response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedResponse {
    pub items: Vec<LocationDto>,
}

/// Distinct states response, for filter dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatesResponse {
    pub states: Vec<String>,
}

/// Distinct categories response, for filter dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
