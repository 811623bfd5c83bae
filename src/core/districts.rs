//! Static coordinates for the districts of Bihar.
//!
//! Used as the last fallback when a profile carries no precise coordinates
//! for a location.

use crate::models::Coordinates;

/// District keys (lowercase, `_` for spaces) with their headquarters coordinates
const DISTRICTS: &[(&str, f64, f64)] = &[
    ("araria", 26.1325, 87.4528),
    ("arwal", 25.2536, 84.6790),
    ("aurangabad", 24.7521, 84.3742),
    ("banka", 24.8864, 86.9225),
    ("begusarai", 25.4182, 86.1272),
    ("bhagalpur", 25.2425, 86.9842),
    ("bhojpur", 25.5560, 84.6603),
    ("buxar", 25.5647, 83.9777),
    ("darbhanga", 26.1542, 85.8918),
    ("east_champaran", 26.6470, 84.9089),
    ("gaya", 24.7955, 85.0002),
    ("gopalganj", 26.4676, 84.4380),
    ("jamui", 24.9198, 86.2243),
    ("jehanabad", 25.2133, 84.9870),
    ("kaimur", 25.0429, 83.6072),
    ("katihar", 25.5385, 87.5710),
    ("khagaria", 25.5022, 86.4671),
    ("kishanganj", 26.1059, 87.9502),
    ("lakhisarai", 25.1724, 86.0947),
    ("madhepura", 25.9210, 86.7922),
    ("madhubani", 26.3483, 86.0712),
    ("munger", 25.3748, 86.4735),
    ("muzaffarpur", 26.1209, 85.3647),
    ("nalanda", 25.1982, 85.5149),
    ("nawada", 24.8867, 85.5436),
    ("patna", 25.5941, 85.1376),
    ("purnia", 25.7771, 87.4753),
    ("rohtas", 24.9480, 84.0316),
    ("saharsa", 25.8835, 86.6006),
    ("samastipur", 25.8629, 85.7810),
    ("saran", 25.7796, 84.7499),
    ("sheikhpura", 25.1398, 85.8535),
    ("sheohar", 26.5122, 85.2942),
    ("sitamarhi", 26.5952, 85.4808),
    ("siwan", 26.2196, 84.3567),
    ("supaul", 26.1234, 86.6045),
    ("vaishali", 25.6858, 85.2146),
    ("west_champaran", 26.8022, 84.5039),
];

/// Normalize a district name into its lookup key
///
/// Only case and spaces are normalized; surrounding whitespace is kept.
pub fn district_key(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Look up the fixed coordinates of a district by name
///
/// Case-insensitive; spaces and underscores are interchangeable.
/// Returns `None` for names outside the table.
pub fn get_district_coordinates(name: &str) -> Option<Coordinates> {
    let key = district_key(name);
    DISTRICTS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|&(_, lat, lon)| Coordinates::new(lat, lon))
}

/// All district keys in the table, alphabetically
pub fn known_districts() -> impl Iterator<Item = &'static str> {
    DISTRICTS.iter().map(|(k, _, _)| *k)
}
