use super::brackets::HEALTH_BASE_MONTHLY;
use super::domain::{HealthEstimate, HealthInput, HealthPlanQuote};
use super::whole_dollars;

const LOW_DEDUCTIBLE: u64 = 500;
const HIGH_DEDUCTIBLE: u64 = 3_000;
/// Individual annual HSA contribution limit quoted with the high-deductible plan.
pub const HSA_CONTRIBUTION_LIMIT: u64 = 3_850;
/// High-deductible premiums as a share of the low-deductible premium.
const HIGH_DEDUCTIBLE_PREMIUM_FACTOR: f64 = 0.6;

const COST_PER_VISIT: u64 = 150;
const COST_PER_PRESCRIPTION_MONTH: u64 = 50;

/// Share of visit and prescription spend the member carries, in percent.
const LOW_DEDUCTIBLE_COST_SHARE_PCT: u64 = 20;
const HIGH_DEDUCTIBLE_COST_SHARE_PCT: u64 = 80;

pub fn estimate_health(input: &HealthInput) -> HealthEstimate {
    let base_monthly = HEALTH_BASE_MONTHLY.lookup(input.age);
    let household_monthly = base_monthly * input.family_size.premium_multiplier();

    let low_monthly = whole_dollars(household_monthly);
    let high_monthly = whole_dollars(household_monthly * HIGH_DEDUCTIBLE_PREMIUM_FACTOR);

    let annual_visit_cost = u64::from(input.expected_visits) * COST_PER_VISIT;
    let prescription_cost = u64::from(input.prescriptions) * COST_PER_PRESCRIPTION_MONTH * 12;
    let care_cost = annual_visit_cost.saturating_add(prescription_cost);

    HealthEstimate {
        low_deductible: plan_quote(
            low_monthly,
            LOW_DEDUCTIBLE,
            care_cost,
            LOW_DEDUCTIBLE_COST_SHARE_PCT,
            None,
        ),
        high_deductible: plan_quote(
            high_monthly,
            HIGH_DEDUCTIBLE,
            care_cost,
            HIGH_DEDUCTIBLE_COST_SHARE_PCT,
            Some(HSA_CONTRIBUTION_LIMIT),
        ),
    }
}

fn plan_quote(
    monthly: u64,
    deductible: u64,
    care_cost: u64,
    cost_share_pct: u64,
    hsa_contribution: Option<u64>,
) -> HealthPlanQuote {
    // visit and prescription costs are multiples of 50, so every share is whole dollars
    let member_share = care_cost.saturating_mul(cost_share_pct) / 100;
    let annual = monthly.saturating_mul(12);

    HealthPlanQuote {
        monthly,
        annual,
        deductible,
        estimated_total: annual.saturating_add(deductible).saturating_add(member_share),
        hsa_contribution,
    }
}
