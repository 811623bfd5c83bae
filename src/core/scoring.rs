/// Score assigned to every perfect match
pub const PERFECT_SCORE: u8 = 100;

/// Kilometers of distance that cost one point of nearby score
const KM_PER_POINT: f64 = 10.0;

/// Calculate the score (0-100) of a nearby match
///
/// Linear decay: one point per full 10 km, floored at 0.
/// score = max(0, 100 - floor(distance_km / 10))
#[inline]
pub fn nearby_score(distance_km: f64) -> u8 {
    let penalty = (distance_km / KM_PER_POINT).floor();
    (100.0 - penalty).clamp(0.0, 100.0) as u8
}
