use super::brackets::YEAR_BUILT_ADJUSTMENT;
use super::domain::{HomeEstimate, HomeInput};
use super::{non_negative, whole_dollars};

/// Roughly 0.3% of the home's value per year.
const ANNUAL_RATE_OF_VALUE: f64 = 0.003;
const PERSONAL_PROPERTY_SHARE: f64 = 0.5;
pub const LIABILITY_COVERAGE: u64 = 100_000;

pub fn estimate_home(input: &HomeInput) -> HomeEstimate {
    let home_value = non_negative(input.home_value);
    let deductible = input.deductible_preference;

    let base_monthly = home_value * ANNUAL_RATE_OF_VALUE / 12.0;
    let monthly = whole_dollars(
        base_monthly
            * YEAR_BUILT_ADJUSTMENT.lookup(input.year_built)
            * deductible.premium_adjustment(),
    );

    HomeEstimate {
        monthly,
        annual: monthly.saturating_mul(12),
        dwelling_coverage: whole_dollars(home_value),
        personal_property: whole_dollars(home_value * PERSONAL_PROPERTY_SHARE),
        liability: LIABILITY_COVERAGE,
        deductible: u64::from(deductible.amount()),
    }
}
