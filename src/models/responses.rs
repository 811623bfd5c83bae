use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, MatchType, Profile};

/// One entry of the matches response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    pub profile: Profile,
    pub match_type: MatchType,
    pub distance: f64,
    pub score: u8,
}

impl From<MatchResult<'_>> for MatchEntry {
    fn from(result: MatchResult<'_>) -> Self {
        Self {
            profile: result.profile.clone(),
            match_type: result.match_type,
            distance: result.distance,
            score: result.score,
        }
    }
}

/// Response for the matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchEntry>,
    pub total: usize,
}

/// Response listing known district keys
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictsResponse {
    pub districts: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub profiles: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
