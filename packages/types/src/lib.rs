pub mod amenities;
pub mod models;

pub use amenities::{parse_amenities, parse_amenities_text};
pub use models::{Availability, Host, HostDraft, HostWithAvailabilities, User};
