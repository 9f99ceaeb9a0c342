//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod host_card;
pub use host_card::HostCard;

mod amenity_badges;
pub use amenity_badges::AmenityBadges;

mod availability_list;
pub use availability_list::AvailabilityList;

mod host_form;
pub use host_form::HostForm;
