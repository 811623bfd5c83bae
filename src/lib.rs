//! Transfer Match - mutual transfer matching for government teachers
//!
//! This library provides the matching algorithm that pairs teachers seeking
//! transfers: perfect matches on mutual district preference, nearby matches
//! on distance to home.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchFilters, distance::haversine_distance, districts::get_district_coordinates};
pub use models::{Coordinates, MatchResult, MatchType, Profile, NewProfile, ProfileUpdate};
pub use services::{InMemoryStore, ProfileRepository, StoreError};
