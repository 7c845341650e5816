use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::locations;
use crate::api::{Location, LocationId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)] // created_at is used only for database operations
pub struct LocationRow {
    pub location_id: i64,
    pub name: String,
    pub state: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: LocationId::new(row.location_id),
            name: row.name,
            state: row.state,
            category: row.category,
            description: row.description,
            image_url: row.image_url,
        }
    }
}
