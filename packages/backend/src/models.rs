//! Database rows and their projections to the shared wire types.
//!
//! Rows derive [`sqlx::FromRow`] and stay private to this crate; handlers
//! project them into the [`types`] shapes before serializing, the same way
//! the web tier projects its credential rows into client-safe structs.

use chrono::NaiveDate;
use sqlx::FromRow;
use types::{parse_amenities_text, Availability, Host, HostWithAvailabilities, User};

/// Full user profile row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            image: row.image,
        }
    }
}

/// Full host row from the `hosts` table. `amenities` holds the raw column
/// text; it is normalized when the row is projected.
#[derive(Debug, Clone, FromRow)]
pub struct HostRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub location: String,
    pub image: Option<String>,
    pub amenities: Option<String>,
}

impl HostRow {
    /// Project into the wire shape, attaching availability records.
    pub fn into_host(self, availabilities: Vec<Availability>) -> HostWithAvailabilities {
        let amenities = parse_amenities_text(self.amenities.as_deref());
        HostWithAvailabilities {
            host: Host {
                id: self.id,
                user_id: self.user_id,
                name: self.name,
                location: self.location,
                image: self.image,
            },
            amenities,
            availabilities,
        }
    }
}

/// Availability row from the `availabilities` table.
#[derive(Debug, Clone, FromRow)]
pub struct AvailabilityRow {
    pub id: String,
    pub host_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<AvailabilityRow> for Availability {
    fn from(row: AvailabilityRow) -> Self {
        Availability {
            id: row.id,
            host_id: row.host_id,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}
