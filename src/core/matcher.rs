use crate::models::{MatchResult, MatchType, Profile};
use crate::core::{
    distance::distance_between,
    scoring::{nearby_score, PERFECT_SCORE},
};

/// Mutual transfer test: each side prefers the other's current district and
/// both teach the same grade level
///
/// Symmetric in its arguments.
#[inline]
pub fn is_perfect_match(subject: &Profile, candidate: &Profile) -> bool {
    subject.prefers(&candidate.current_district)
        && candidate.prefers(&subject.current_district)
        && subject.grade_level == candidate.grade_level
}

/// Nearby test: a same-grade candidate working closer to the subject's home
/// than the subject currently is, within the subject's distance limit
///
/// Returns the candidate-to-home distance on success.
#[inline]
pub fn nearby_distance(subject: &Profile, candidate: &Profile) -> Option<f64> {
    if subject.grade_level != candidate.grade_level {
        return None;
    }

    let subject_home = subject.home_coordinates();
    let home_distance = distance_between(subject.current_coordinates(), subject_home);
    let candidate_to_home = distance_between(candidate.workplace_coordinates(), subject_home);

    if candidate_to_home < home_distance && candidate_to_home <= subject.max_distance {
        Some(candidate_to_home)
    } else {
        None
    }
}

/// Main matching orchestrator - classifies every candidate against one subject
///
/// # Pipeline Stages
/// 1. Exclusion of the subject itself and inactive candidates
/// 2. Perfect match test (short-circuits)
/// 3. Nearby match test
/// 4. Ranking: perfect before nearby, then ascending distance
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Find transfer matches for a teacher among a candidate roster
    ///
    /// # Arguments
    /// * `subject` - The teacher looking for a transfer
    /// * `candidates` - The complete roster; may contain the subject itself
    ///
    /// # Returns
    /// Every qualifying candidate, ranked
    pub fn find_matches<'a>(
        &self,
        subject: &Profile,
        candidates: &'a [Profile],
    ) -> Vec<MatchResult<'a>> {
        let mut matches: Vec<MatchResult<'a>> = candidates
            .iter()
            // Stage 1: never self, never inactive
            .filter(|candidate| candidate.id != subject.id && candidate.is_active)
            // Stages 2 & 3: classify
            .filter_map(|candidate| classify(subject, candidate))
            .collect();

        // Stable, so equal distances keep roster order
        matches.sort_by(|a, b| {
            a.match_type.cmp(&b.match_type).then_with(|| {
                a.distance
                    .partial_cmp(&b.distance)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });

        tracing::debug!(
            subject_id = subject.id,
            candidates = candidates.len(),
            matches = matches.len(),
            "Matching complete"
        );

        matches
    }
}

fn classify<'a>(subject: &Profile, candidate: &'a Profile) -> Option<MatchResult<'a>> {
    if is_perfect_match(subject, candidate) {
        let distance = distance_between(
            subject.current_coordinates(),
            candidate.current_coordinates(),
        );
        return Some(MatchResult {
            profile: candidate,
            match_type: MatchType::Perfect,
            distance,
            score: PERFECT_SCORE,
        });
    }

    nearby_distance(subject, candidate).map(|distance| MatchResult {
        profile: candidate,
        match_type: MatchType::Nearby,
        distance,
        score: nearby_score(distance),
    })
}
