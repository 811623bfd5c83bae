use serde::{Deserialize, Serialize};

use crate::core::districts::get_district_coordinates;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Build a pair only when both halves are present
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self { latitude, longitude }),
            _ => None,
        }
    }
}

/// Teacher profile with posting, home and transfer preference data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub grade_level: String,

    pub current_district: String,
    #[serde(default)]
    pub current_school: Option<String>,
    #[serde(default)]
    pub current_latitude: Option<f64>,
    #[serde(default)]
    pub current_longitude: Option<f64>,
    #[serde(default)]
    pub school_latitude: Option<f64>,
    #[serde(default)]
    pub school_longitude: Option<f64>,

    pub home_district: String,
    #[serde(default)]
    pub home_latitude: Option<f64>,
    #[serde(default)]
    pub home_longitude: Option<f64>,

    #[serde(default)]
    pub preferred_districts: Vec<String>,
    #[serde(default)]
    pub preferred_latitude: Option<f64>,
    #[serde(default)]
    pub preferred_longitude: Option<f64>,

    /// Maximum acceptable transfer distance in kilometers
    pub max_distance: f64,

    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_true() -> bool { true }

impl Profile {
    /// Where the teacher is posted: current coordinates, then the current district
    pub fn current_coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.current_latitude, self.current_longitude)
            .or_else(|| get_district_coordinates(&self.current_district))
    }

    /// Where the teacher works: school coordinates, then current coordinates,
    /// then the current district
    pub fn workplace_coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.school_latitude, self.school_longitude)
            .or_else(|| self.current_coordinates())
    }

    /// Where the teacher wants to be: home coordinates, then the preferred
    /// location, then the home district
    pub fn home_coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.home_latitude, self.home_longitude)
            .or_else(|| Coordinates::from_parts(self.preferred_latitude, self.preferred_longitude))
            .or_else(|| get_district_coordinates(&self.home_district))
    }

    /// Exact membership test against the stored preferred districts
    pub fn prefers(&self, district: &str) -> bool {
        self.preferred_districts.iter().any(|d| d == district)
    }
}

/// Match classification, ordered so that `Perfect` sorts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Perfect,
    Nearby,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Perfect => write!(f, "perfect"),
            MatchType::Nearby => write!(f, "nearby"),
        }
    }
}

/// A candidate that qualified for the subject, borrowed from the roster
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    pub profile: &'a Profile,
    pub match_type: MatchType,
    /// Kilometers, never negative
    pub distance: f64,
    /// 0 to 100
    pub score: u8,
}

/// Data needed to create a profile; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub name: String,
    pub subject: Option<String>,
    pub is_active: bool,
    pub grade_level: String,
    pub current_district: String,
    pub current_school: Option<String>,
    pub current_location: Option<Coordinates>,
    pub school_location: Option<Coordinates>,
    pub home_district: String,
    pub home_location: Option<Coordinates>,
    pub preferred_districts: Vec<String>,
    pub preferred_location: Option<Coordinates>,
    pub max_distance: f64,
}

impl NewProfile {
    pub(crate) fn into_profile(
        self,
        id: u64,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Profile {
        let (current_latitude, current_longitude) = split(self.current_location);
        let (school_latitude, school_longitude) = split(self.school_location);
        let (home_latitude, home_longitude) = split(self.home_location);
        let (preferred_latitude, preferred_longitude) = split(self.preferred_location);

        Profile {
            id,
            name: self.name,
            subject: self.subject,
            is_active: self.is_active,
            grade_level: self.grade_level,
            current_district: self.current_district,
            current_school: self.current_school,
            current_latitude,
            current_longitude,
            school_latitude,
            school_longitude,
            home_district: self.home_district,
            home_latitude,
            home_longitude,
            preferred_districts: self.preferred_districts,
            preferred_latitude,
            preferred_longitude,
            max_distance: self.max_distance,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Partial profile update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub is_active: Option<bool>,
    pub grade_level: Option<String>,
    pub current_district: Option<String>,
    pub current_school: Option<String>,
    pub current_location: Option<Coordinates>,
    pub school_location: Option<Coordinates>,
    pub home_district: Option<String>,
    pub home_location: Option<Coordinates>,
    pub preferred_districts: Option<Vec<String>>,
    pub preferred_location: Option<Coordinates>,
    pub max_distance: Option<f64>,
}

impl ProfileUpdate {
    pub(crate) fn apply(self, profile: &mut Profile, now: chrono::DateTime<chrono::Utc>) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(subject) = self.subject {
            profile.subject = Some(subject);
        }
        if let Some(is_active) = self.is_active {
            profile.is_active = is_active;
        }
        if let Some(grade_level) = self.grade_level {
            profile.grade_level = grade_level;
        }
        if let Some(district) = self.current_district {
            profile.current_district = district;
        }
        if let Some(school) = self.current_school {
            profile.current_school = Some(school);
        }
        if let Some(location) = self.current_location {
            profile.current_latitude = Some(location.latitude);
            profile.current_longitude = Some(location.longitude);
        }
        if let Some(location) = self.school_location {
            profile.school_latitude = Some(location.latitude);
            profile.school_longitude = Some(location.longitude);
        }
        if let Some(district) = self.home_district {
            profile.home_district = district;
        }
        if let Some(location) = self.home_location {
            profile.home_latitude = Some(location.latitude);
            profile.home_longitude = Some(location.longitude);
        }
        if let Some(districts) = self.preferred_districts {
            profile.preferred_districts = districts;
        }
        if let Some(location) = self.preferred_location {
            profile.preferred_latitude = Some(location.latitude);
            profile.preferred_longitude = Some(location.longitude);
        }
        if let Some(max_distance) = self.max_distance {
            profile.max_distance = max_distance;
        }
        profile.updated_at = Some(now);
    }
}

fn split(location: Option<Coordinates>) -> (Option<f64>, Option<f64>) {
    match location {
        Some(c) => (Some(c.latitude), Some(c.longitude)),
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        NewProfile {
            name: "Test Teacher".to_string(),
            subject: None,
            is_active: true,
            grade_level: "primary".to_string(),
            current_district: "Patna".to_string(),
            current_school: None,
            current_location: None,
            school_location: None,
            home_district: "Gaya".to_string(),
            home_location: None,
            preferred_districts: vec!["Gaya".to_string()],
            preferred_location: None,
            max_distance: 100.0,
        }
        .into_profile(1, chrono::Utc::now())
    }

    #[test]
    fn test_coordinates_need_both_halves() {
        assert!(Coordinates::from_parts(Some(25.0), None).is_none());
        assert!(Coordinates::from_parts(None, Some(85.0)).is_none());
        assert_eq!(
            Coordinates::from_parts(Some(25.0), Some(85.0)),
            Some(Coordinates::new(25.0, 85.0))
        );
    }

    #[test]
    fn test_current_falls_back_to_district() {
        let mut p = profile();
        assert_eq!(p.current_coordinates(), get_district_coordinates("patna"));

        p.current_latitude = Some(25.6);
        p.current_longitude = Some(85.1);
        assert_eq!(p.current_coordinates(), Some(Coordinates::new(25.6, 85.1)));
    }

    #[test]
    fn test_workplace_prefers_school() {
        let mut p = profile();
        p.current_latitude = Some(25.6);
        p.current_longitude = Some(85.1);
        assert_eq!(p.workplace_coordinates(), Some(Coordinates::new(25.6, 85.1)));

        p.school_latitude = Some(25.61);
        p.school_longitude = Some(85.12);
        assert_eq!(p.workplace_coordinates(), Some(Coordinates::new(25.61, 85.12)));
    }

    #[test]
    fn test_home_chain() {
        let mut p = profile();
        assert_eq!(p.home_coordinates(), get_district_coordinates("gaya"));

        p.preferred_latitude = Some(24.9);
        p.preferred_longitude = Some(85.0);
        assert_eq!(p.home_coordinates(), Some(Coordinates::new(24.9, 85.0)));

        p.home_latitude = Some(24.8);
        p.home_longitude = Some(85.01);
        assert_eq!(p.home_coordinates(), Some(Coordinates::new(24.8, 85.01)));
    }

    #[test]
    fn test_unknown_districts_resolve_to_nothing() {
        let mut p = profile();
        p.current_district = "Atlantis".to_string();
        p.home_district = "Nowhere".to_string();
        assert!(p.current_coordinates().is_none());
        assert!(p.workplace_coordinates().is_none());
        assert!(p.home_coordinates().is_none());
    }

    #[test]
    fn test_prefers_is_exact() {
        let p = profile();
        assert!(p.prefers("Gaya"));
        assert!(!p.prefers("gaya"));
    }

    #[test]
    fn test_update_only_touches_given_fields() {
        let mut p = profile();
        let update = ProfileUpdate {
            max_distance: Some(40.0),
            home_location: Some(Coordinates::new(24.8, 85.0)),
            ..Default::default()
        };
        update.apply(&mut p, chrono::Utc::now());

        assert_eq!(p.max_distance, 40.0);
        assert_eq!(p.home_latitude, Some(24.8));
        assert_eq!(p.name, "Test Teacher");
        assert_eq!(p.grade_level, "primary");
    }

    #[test]
    fn test_match_type_order() {
        assert!(MatchType::Perfect < MatchType::Nearby);
        assert_eq!(MatchType::Nearby.to_string(), "nearby");
    }
}
