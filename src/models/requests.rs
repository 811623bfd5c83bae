use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{Coordinates, MatchType, NewProfile, ProfileUpdate};

/// Request to create a teacher profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_pairs"))]
pub struct CreateProfileRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[validate(length(min = 1))]
    pub grade_level: String,

    #[validate(length(min = 1))]
    pub current_district: String,
    #[serde(default)]
    pub current_school: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub current_latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub current_longitude: Option<f64>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub school_latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub school_longitude: Option<f64>,

    #[validate(length(min = 1))]
    pub home_district: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub home_latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub home_longitude: Option<f64>,

    #[serde(default)]
    pub preferred_districts: Vec<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub preferred_latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub preferred_longitude: Option<f64>,

    #[validate(range(min = 0.0))]
    pub max_distance: Option<f64>,
}

impl CreateProfileRequest {
    /// Convert into store input, filling the distance limit when absent
    pub fn into_new_profile(self, default_max_distance: f64) -> NewProfile {
        NewProfile {
            name: self.name,
            subject: self.subject,
            is_active: self.is_active.unwrap_or(true),
            grade_level: self.grade_level,
            current_district: self.current_district,
            current_school: self.current_school,
            current_location: Coordinates::from_parts(self.current_latitude, self.current_longitude),
            school_location: Coordinates::from_parts(self.school_latitude, self.school_longitude),
            home_district: self.home_district,
            home_location: Coordinates::from_parts(self.home_latitude, self.home_longitude),
            preferred_districts: self.preferred_districts,
            preferred_location: Coordinates::from_parts(
                self.preferred_latitude,
                self.preferred_longitude,
            ),
            max_distance: self.max_distance.unwrap_or(default_max_distance),
        }
    }
}

fn validate_create_pairs(req: &CreateProfileRequest) -> Result<(), ValidationError> {
    check_pairs(&[
        (req.current_latitude, req.current_longitude),
        (req.school_latitude, req.school_longitude),
        (req.home_latitude, req.home_longitude),
        (req.preferred_latitude, req.preferred_longitude),
    ])
}

/// Partial update of a teacher profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_pairs"))]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub subject: Option<String>,
    pub is_active: Option<bool>,
    #[validate(length(min = 1))]
    pub grade_level: Option<String>,

    #[validate(length(min = 1))]
    pub current_district: Option<String>,
    pub current_school: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub current_latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub current_longitude: Option<f64>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub school_latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub school_longitude: Option<f64>,

    #[validate(length(min = 1))]
    pub home_district: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub home_latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub home_longitude: Option<f64>,

    pub preferred_districts: Option<Vec<String>>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub preferred_latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub preferred_longitude: Option<f64>,

    #[validate(range(min = 0.0))]
    pub max_distance: Option<f64>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            name: req.name,
            subject: req.subject,
            is_active: req.is_active,
            grade_level: req.grade_level,
            current_district: req.current_district,
            current_school: req.current_school,
            current_location: Coordinates::from_parts(req.current_latitude, req.current_longitude),
            school_location: Coordinates::from_parts(req.school_latitude, req.school_longitude),
            home_district: req.home_district,
            home_location: Coordinates::from_parts(req.home_latitude, req.home_longitude),
            preferred_districts: req.preferred_districts,
            preferred_location: Coordinates::from_parts(
                req.preferred_latitude,
                req.preferred_longitude,
            ),
            max_distance: req.max_distance,
        }
    }
}

fn validate_update_pairs(req: &UpdateProfileRequest) -> Result<(), ValidationError> {
    check_pairs(&[
        (req.current_latitude, req.current_longitude),
        (req.school_latitude, req.school_longitude),
        (req.home_latitude, req.home_longitude),
        (req.preferred_latitude, req.preferred_longitude),
    ])
}

// A latitude without its longitude (or the reverse) would be silently dropped.
fn check_pairs(pairs: &[(Option<f64>, Option<f64>)]) -> Result<(), ValidationError> {
    if pairs.iter().any(|(lat, lon)| lat.is_some() != lon.is_some()) {
        return Err(ValidationError::new("incomplete_coordinates"));
    }
    Ok(())
}

/// Query parameters for the matches endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchQuery {
    #[serde(rename = "type")]
    pub match_type: Option<MatchType>,
    pub max_distance: Option<f64>,
    pub subject: Option<String>,
}
