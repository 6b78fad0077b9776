/// Points for a supplier serving the project's region
pub const REGION_MATCH_POINTS: f64 = 50.0;

/// Points for a supplier offering a requested technology
pub const TECH_MATCH_POINTS: f64 = 50.0;

/// Rating that contributes no bonus
pub const NEUTRAL_RATING: f64 = 3.0;

pub const REASON_REGION: &str = "Region match";
pub const REASON_TECHNOLOGY: &str = "Technology expertise";

/// Calculate a supplier's match score and the reasons behind it
///
/// Scoring formula:
/// score = (
///     50 if region matches +
///     50 if technology matches +
///     (rating - 3.0) * 10          # absent rating contributes 0
/// )
///
/// The result is not bounded to [0, 100]: the rating bonus is uncapped and may be
/// negative. The score is rounded to one decimal place.
pub fn calculate_match_score(
    region_match: bool,
    tech_match: bool,
    rating: Option<f64>,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if region_match {
        score += REGION_MATCH_POINTS;
        reasons.push(REASON_REGION.to_string());
    }

    if tech_match {
        score += TECH_MATCH_POINTS;
        reasons.push(REASON_TECHNOLOGY.to_string());
    }

    score += rating_bonus(rating);

    (round_one_decimal(score), reasons)
}

/// Bonus of ten points per rating step above 3.0
#[inline]
pub fn rating_bonus(rating: Option<f64>) -> f64 {
    match rating {
        Some(r) if r.is_finite() => (r - NEUTRAL_RATING) * 10.0,
        _ => 0.0,
    }
}

#[inline]
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
