use super::brackets::{MILEAGE_ADJUSTMENT, VEHICLE_AGE_ADJUSTMENT};
use super::domain::{AutoCoverage, AutoEstimate, AutoInput, AutoPlanQuote};
use super::{non_negative, whole_dollars};

const BASE_MONTHLY_RATE: f64 = 100.0;
/// Every $500 of vehicle value adds a dollar to the monthly base rate.
const VEHICLE_VALUE_PER_RATE_DOLLAR: f64 = 500.0;
const LIABILITY_ONLY_FACTOR: f64 = 0.4;

/// Vehicles worth more than this are steered toward the lower deductible.
const LOW_DEDUCTIBLE_VALUE_THRESHOLD: f64 = 20_000.0;
const LOW_DEDUCTIBLE: u64 = 500;
const STANDARD_DEDUCTIBLE: u64 = 1_000;

const FULL_COVERAGE: [AutoCoverage; 4] = [
    AutoCoverage::Liability,
    AutoCoverage::Collision,
    AutoCoverage::Comprehensive,
    AutoCoverage::UninsuredMotorist,
];

/// Linear base rate from value, age, and mileage, with the driving-record loading applied
/// to the combined figure.
pub fn estimate_auto(input: &AutoInput) -> AutoEstimate {
    let vehicle_value = non_negative(input.vehicle_value);

    let combined_base = BASE_MONTHLY_RATE
        + vehicle_value / VEHICLE_VALUE_PER_RATE_DOLLAR
        + VEHICLE_AGE_ADJUSTMENT.lookup(input.vehicle_age)
        + MILEAGE_ADJUSTMENT.lookup(input.annual_mileage);
    let loaded = combined_base * input.driving_record.risk_multiplier();

    let full_monthly = whole_dollars(loaded);
    let liability_monthly = whole_dollars(loaded * LIABILITY_ONLY_FACTOR);

    let recommended_deductible = if vehicle_value > LOW_DEDUCTIBLE_VALUE_THRESHOLD {
        LOW_DEDUCTIBLE
    } else {
        STANDARD_DEDUCTIBLE
    };

    AutoEstimate {
        full_coverage: AutoPlanQuote {
            monthly: full_monthly,
            annual: full_monthly.saturating_mul(12),
            includes: FULL_COVERAGE.to_vec(),
        },
        liability_only: AutoPlanQuote {
            monthly: liability_monthly,
            annual: liability_monthly.saturating_mul(12),
            includes: vec![AutoCoverage::LiabilityOnly],
        },
        recommended_deductible,
    }
}
