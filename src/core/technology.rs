use crate::models::{TechnologyProfile, TechnologySuggestion};

/// Suitability points lost per complexity step away from a range's center
const SUITABILITY_STEP: f64 = 10.0;

/// Rank all technologies whose complexity range contains `complexity_score`
///
/// Suitability is `100 - 10 * |score - center|`, floored at 0. Technologies whose
/// range excludes the score are omitted rather than scored at zero. Ties keep the
/// catalog's declaration order.
pub fn rank_technologies(
    complexity_score: u8,
    catalog: &[TechnologyProfile],
) -> Vec<TechnologySuggestion> {
    let score = complexity_score as f64;

    let mut ranked: Vec<TechnologySuggestion> = catalog
        .iter()
        .filter(|profile| profile.complexity_range.contains(complexity_score))
        .map(|profile| {
            let distance = (score - profile.complexity_range.center()).abs();
            TechnologySuggestion {
                technology: profile.name.clone(),
                suitability_score: (100.0 - SUITABILITY_STEP * distance).max(0.0),
            }
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| {
        b.suitability_score
            .partial_cmp(&a.suitability_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}
