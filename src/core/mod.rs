// Core algorithm exports
pub mod distance;
pub mod districts;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use distance::{haversine_distance, distance_between};
pub use districts::{get_district_coordinates, known_districts, district_key};
pub use filters::MatchFilters;
pub use matcher::{Matcher, is_perfect_match, nearby_distance};
pub use scoring::{nearby_score, PERFECT_SCORE};
