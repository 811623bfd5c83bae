use crate::models::{MatchQuery, MatchResult, MatchType};

/// Caller-side refinements applied to a ranked match list
///
/// Filtering keeps the ranking order.
#[derive(Debug, Clone, Default)]
pub struct MatchFilters {
    pub match_type: Option<MatchType>,
    pub max_distance: Option<f64>,
    pub subject: Option<String>,
}

impl MatchFilters {
    /// Check a single result against every configured filter
    #[inline]
    pub fn accepts(&self, result: &MatchResult<'_>) -> bool {
        if let Some(match_type) = self.match_type {
            if result.match_type != match_type {
                return false;
            }
        }

        if let Some(max_distance) = self.max_distance {
            if result.distance > max_distance {
                return false;
            }
        }

        if let Some(needle) = &self.subject {
            let needle = needle.to_lowercase();
            match &result.profile.subject {
                Some(subject) if subject.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }

        true
    }

    pub fn apply<'a>(&self, results: Vec<MatchResult<'a>>) -> Vec<MatchResult<'a>> {
        results.into_iter().filter(|r| self.accepts(r)).collect()
    }
}

impl From<MatchQuery> for MatchFilters {
    fn from(query: MatchQuery) -> Self {
        Self {
            match_type: query.match_type,
            max_distance: query.max_distance,
            // An empty subject filter would match everything anyway
            subject: query.subject.filter(|s| !s.trim().is_empty()),
        }
    }
}
