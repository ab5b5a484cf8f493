//! Illustrative premium estimators for the four calculator categories.
//!
//! Every calculation is a pure function of its input record: no I/O, no shared state, and
//! no failure modes. Currency inputs below zero (or non-finite) are read as zero and every
//! currency output is floored at zero. Range checks on raw visitor input live in
//! [`EstimatorInput::validate`], which the HTTP and CLI surfaces call before estimating.

mod auto;
pub(crate) mod brackets;
pub mod domain;
pub mod format;
mod health;
mod home;
mod life;
pub mod request;
pub mod router;

#[cfg(test)]
mod tests;

pub use auto::estimate_auto;
pub use domain::{
    AutoCoverage, AutoEstimate, AutoInput, AutoPlanQuote, DrivingRecord, EstimatorInput,
    EstimatorResult, FamilySize, HealthEstimate, HealthInput, HealthPlanQuote, HomeDeductible,
    HomeEstimate, HomeInput, InsuranceCategory, LifeBreakdown, LifeEstimate, LifeInput,
};
pub use format::format_usd;
pub use health::{estimate_health, HSA_CONTRIBUTION_LIMIT};
pub use home::{estimate_home, LIABILITY_COVERAGE};
pub use life::{estimate_life, MAX_YEARS_TO_REPLACE, MIN_YEARS_TO_REPLACE};
pub use request::EstimateRequest;
pub use router::estimator_router;

use chrono::{Datelike, Local};
use tracing::debug;

/// Stateless front door used by the HTTP and CLI surfaces.
///
/// Holds only the calendar year used to reject construction years in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremiumEstimator {
    current_year: i32,
}

impl Default for PremiumEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PremiumEstimator {
    pub fn new() -> Self {
        Self::with_current_year(Local::now().year())
    }

    pub fn with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Compute the estimate for already-typed form values.
    pub fn estimate(&self, input: &EstimatorInput) -> EstimatorResult {
        estimate(input)
    }

    /// Validate visitor-supplied values, then estimate.
    pub fn estimate_checked(
        &self,
        input: &EstimatorInput,
    ) -> Result<EstimatorResult, EstimateError> {
        input.validate(self.current_year)?;
        Ok(estimate(input))
    }

    /// Parse a raw `category` tag plus flat field map, validate, and estimate.
    pub fn estimate_request(
        &self,
        request: EstimateRequest,
    ) -> Result<EstimatorResult, EstimateError> {
        let input = request.into_input()?;
        self.estimate_checked(&input)
    }
}

/// Dispatch to the calculator for the input's category.
pub fn estimate(input: &EstimatorInput) -> EstimatorResult {
    let result = match input {
        EstimatorInput::Life(life) => EstimatorResult::Life(estimate_life(life)),
        EstimatorInput::Health(health) => EstimatorResult::Health(estimate_health(health)),
        EstimatorInput::Auto(auto) => EstimatorResult::Auto(estimate_auto(auto)),
        EstimatorInput::Home(home) => EstimatorResult::Home(estimate_home(home)),
    };

    debug!(category = %input.category(), "computed premium estimate");
    result
}

/// Error raised when raw calculator input cannot be turned into an estimate.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("unsupported insurance category '{0}'")]
    UnsupportedCategory(String),
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("malformed estimate request: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub(crate) fn non_negative(amount: f64) -> f64 {
    // f64::max returns the other operand when one side is NaN
    amount.max(0.0)
}

/// Round to the nearest whole dollar, never below zero.
pub(crate) fn whole_dollars(amount: f64) -> u64 {
    non_negative(amount).round() as u64
}
