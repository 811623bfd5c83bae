// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinates, MatchResult, MatchType, NewProfile, Profile, ProfileUpdate};
pub use requests::{CreateProfileRequest, MatchQuery, UpdateProfileRequest};
pub use responses::{DistrictsResponse, ErrorResponse, HealthResponse, MatchEntry, MatchesResponse};
