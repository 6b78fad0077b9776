use crate::core::scoring::round_one_decimal;
use crate::models::{CostEstimate, ProjectRequest};

/// Cost and pace for one project type
#[derive(Debug, Clone, Copy, PartialEq)]
struct BaseRates {
    cost_per_sqm: f64,
    months_per_1000_sqm: f64,
}

const RESIDENTIAL: BaseRates = BaseRates { cost_per_sqm: 4500.0, months_per_1000_sqm: 3.0 };

fn base_rates(project_type: &str) -> BaseRates {
    match project_type {
        "Commercial" => BaseRates { cost_per_sqm: 6000.0, months_per_1000_sqm: 4.0 },
        "Industrial" => BaseRates { cost_per_sqm: 3500.0, months_per_1000_sqm: 2.5 },
        "Mixed-Use" => BaseRates { cost_per_sqm: 5200.0, months_per_1000_sqm: 3.5 },
        _ => RESIDENTIAL,
    }
}

/// Coarse complexity band used to scale cost and time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityBand {
    Low,
    Medium,
    High,
}

impl ComplexityBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => ComplexityBand::Low,
            4..=7 => ComplexityBand::Medium,
            _ => ComplexityBand::High,
        }
    }

    /// (cost multiplier, time multiplier)
    fn multipliers(self) -> (f64, f64) {
        match self {
            ComplexityBand::Low => (0.9, 0.9),
            ComplexityBand::Medium => (1.0, 1.0),
            ComplexityBand::High => (1.3, 1.4),
        }
    }
}

/// Regional cost multiplier, Riyadh being the baseline
fn location_multiplier(location: &str) -> f64 {
    match location.trim().to_lowercase().as_str() {
        "jeddah" => 1.1,
        "dammam" => 1.05,
        "mecca" => 1.15,
        "medina" => 1.12,
        _ => 1.0,
    }
}

/// Estimate cost, duration and schedule/budget risk for a project
///
/// Risk is the mean of the relative cost overrun and relative time overrun,
/// capped at 1.
pub fn estimate_cost_and_time(project: &ProjectRequest, complexity_score: u8) -> CostEstimate {
    let rates = base_rates(&project.project_type);
    let (cost_factor, time_factor) = ComplexityBand::from_score(complexity_score).multipliers();

    let est_cost = rates.cost_per_sqm
        * project.size_sqm
        * cost_factor
        * location_multiplier(&project.location);
    let est_time = (project.size_sqm / 1000.0) * rates.months_per_1000_sqm * time_factor;

    let cost_risk = overrun_ratio(est_cost, project.budget);
    let time_risk = overrun_ratio(est_time, project.timeline_months as f64);

    CostEstimate {
        est_cost: est_cost.round(),
        est_time_months: round_one_decimal(est_time),
        risk: ((cost_risk + time_risk) / 2.0).min(1.0),
    }
}

#[inline]
fn overrun_ratio(estimate: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (estimate - target).max(0.0) / target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(project_type: &str, location: &str, size_sqm: f64, budget: f64, months: u32) -> ProjectRequest {
        let mut project = ProjectRequest::new(location, vec![]);
        project.project_type = project_type.to_string();
        project.size_sqm = size_sqm;
        project.budget = budget;
        project.timeline_months = months;
        project
    }

    #[test]
    fn test_residential_baseline() {
        let estimate = estimate_cost_and_time(&project("Residential", "Riyadh", 1000.0, 10_000_000.0, 12), 5);

        assert_eq!(estimate.est_cost, 4_500_000.0);
        assert_eq!(estimate.est_time_months, 3.0);
        assert_eq!(estimate.risk, 0.0);
    }

    #[test]
    fn test_high_complexity_in_jeddah() {
        let estimate = estimate_cost_and_time(&project("Commercial", "jeddah", 1000.0, 10_000_000.0, 12), 9);

        // 6000 * 1000 * 1.3 * 1.1
        assert_eq!(estimate.est_cost, 8_580_000.0);
        // 4 * 1.4
        assert_eq!(estimate.est_time_months, 5.6);
    }

    #[test]
    fn test_unknown_type_uses_residential() {
        let unknown = estimate_cost_and_time(&project("Stadium", "Riyadh", 2000.0, 1.0, 1), 5);
        let residential = estimate_cost_and_time(&project("Residential", "Riyadh", 2000.0, 1.0, 1), 5);
        assert_eq!(unknown, residential);
    }

    #[test]
    fn test_risk_is_capped() {
        let estimate = estimate_cost_and_time(&project("Residential", "Riyadh", 5000.0, 1000.0, 1), 10);
        assert_eq!(estimate.risk, 1.0);
    }

    #[test]
    fn test_zero_budget_has_no_cost_risk() {
        let estimate = estimate_cost_and_time(&project("Residential", "Riyadh", 1000.0, 0.0, 12), 5);
        assert_eq!(estimate.risk, 0.0);
    }

    #[test]
    fn test_complexity_bands() {
        assert_eq!(ComplexityBand::from_score(1), ComplexityBand::Low);
        assert_eq!(ComplexityBand::from_score(4), ComplexityBand::Medium);
        assert_eq!(ComplexityBand::from_score(8), ComplexityBand::High);
    }
}
