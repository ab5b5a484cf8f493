use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::estimator::domain::{
    AutoInput, DrivingRecord, FamilySize, HealthInput, HomeDeductible, HomeInput, LifeInput,
};
use crate::estimator::PremiumEstimator;

pub(super) const CURRENT_YEAR: i32 = 2026;

pub(super) fn estimator() -> PremiumEstimator {
    PremiumEstimator::with_current_year(CURRENT_YEAR)
}

pub(super) fn life(
    annual_income: f64,
    years_to_replace: u32,
    existing_debts: f64,
    future_costs: f64,
    existing_coverage: f64,
) -> LifeInput {
    LifeInput {
        annual_income,
        years_to_replace,
        existing_debts,
        future_costs,
        existing_coverage,
    }
}

pub(super) fn health(age: u32, family_size: FamilySize) -> HealthInput {
    HealthInput {
        age,
        family_size,
        expected_visits: 4,
        prescriptions: 2,
    }
}

pub(super) fn auto(
    vehicle_value: f64,
    vehicle_age: u32,
    annual_mileage: u32,
    driving_record: DrivingRecord,
) -> AutoInput {
    AutoInput {
        vehicle_value,
        vehicle_age,
        annual_mileage,
        driving_record,
    }
}

pub(super) fn home(home_value: f64, year_built: i32, deductible: HomeDeductible) -> HomeInput {
    HomeInput {
        home_value,
        square_footage: 1_800,
        year_built,
        deductible_preference: deductible,
    }
}

pub(super) const FAMILY_SIZES: [FamilySize; 3] =
    [FamilySize::Individual, FamilySize::Couple, FamilySize::Family];

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}
