use super::domain::{LifeBreakdown, LifeEstimate, LifeInput};
use super::{non_negative, whole_dollars};

pub const MIN_YEARS_TO_REPLACE: u32 = 5;
pub const MAX_YEARS_TO_REPLACE: u32 = 20;

/// Recommended cover is reported in steps of this many dollars, rounded down.
const COVERAGE_INCREMENT: u64 = 10_000;
/// Flat premium rate per $1,000 of face amount, per month.
const MONTHLY_RATE_PER_THOUSAND: f64 = 0.15;

/// Needs-based sizing: income replacement plus debts and future obligations, net of
/// cover already in force. The premium ignores age and health.
pub fn estimate_life(input: &LifeInput) -> LifeEstimate {
    let annual_income = non_negative(input.annual_income);
    let years = input
        .years_to_replace
        .clamp(MIN_YEARS_TO_REPLACE, MAX_YEARS_TO_REPLACE);
    let existing_debts = non_negative(input.existing_debts);
    let future_costs = non_negative(input.future_costs);
    let existing_coverage = non_negative(input.existing_coverage);

    let income_replacement = annual_income * f64::from(years);
    let total_needs = income_replacement + existing_debts + future_costs;
    let uncovered = non_negative(total_needs - existing_coverage);

    let increments = (uncovered / COVERAGE_INCREMENT as f64).floor() as u64;
    let recommended_coverage = increments.saturating_mul(COVERAGE_INCREMENT);
    let estimated_monthly_premium =
        whole_dollars(recommended_coverage as f64 / 1_000.0 * MONTHLY_RATE_PER_THOUSAND);

    LifeEstimate {
        recommended_coverage,
        estimated_monthly_premium,
        breakdown: LifeBreakdown {
            income_replacement: whole_dollars(income_replacement),
            debts: whole_dollars(existing_debts),
            future_costs: whole_dollars(future_costs),
            existing_coverage: whole_dollars(existing_coverage),
        },
    }
}
