//! Integration scenarios for the premium calculators.
//!
//! Scenarios go through the public estimator facade and HTTP router only, the way the
//! calculator pages and the CLI consume them.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use insurance_guide::estimator::{
    estimate, estimator_router, format_usd, AutoCoverage, AutoInput, DrivingRecord,
    EstimateError, EstimateRequest, EstimatorInput, EstimatorResult, FamilySize, HealthInput,
    HomeDeductible, HomeInput, LifeInput, PremiumEstimator,
};

fn estimator() -> PremiumEstimator {
    PremiumEstimator::with_current_year(2026)
}

#[test]
fn life_scenario_sizes_cover_and_premium() {
    let result = estimate(&EstimatorInput::Life(LifeInput {
        annual_income: 75_000.0,
        years_to_replace: 10,
        existing_debts: 50_000.0,
        future_costs: 100_000.0,
        existing_coverage: 0.0,
    }));

    match result {
        EstimatorResult::Life(life) => {
            assert_eq!(life.breakdown.income_replacement, 750_000);
            assert_eq!(life.recommended_coverage, 900_000);
            assert_eq!(life.estimated_monthly_premium, 135);
            assert_eq!(format_usd(life.recommended_coverage as f64), "$900,000");
        }
        other => panic!("expected life estimate, got {other:?}"),
    }
}

#[test]
fn health_scenario_quotes_both_plans() {
    let result = estimate(&EstimatorInput::Health(HealthInput {
        age: 30,
        family_size: FamilySize::Individual,
        expected_visits: 4,
        prescriptions: 2,
    }));

    match result {
        EstimatorResult::Health(health) => {
            assert_eq!(health.low_deductible.monthly, 350);
            assert_eq!(health.high_deductible.monthly, 210);
            assert_eq!(health.low_deductible.estimated_total, 5_060);
            assert_eq!(health.high_deductible.estimated_total, 6_960);
            assert_eq!(health.high_deductible.hsa_contribution, Some(3_850));
        }
        other => panic!("expected health estimate, got {other:?}"),
    }
}

#[test]
fn health_age_forty_uses_the_forties_bracket() {
    let result = estimate(&EstimatorInput::Health(HealthInput {
        age: 40,
        ..HealthInput::default()
    }));

    match result {
        EstimatorResult::Health(health) => assert_eq!(health.low_deductible.monthly, 450),
        other => panic!("expected health estimate, got {other:?}"),
    }
}

#[test]
fn auto_scenario_prices_full_and_liability_cover() {
    let result = estimate(&EstimatorInput::Auto(AutoInput {
        vehicle_value: 25_000.0,
        vehicle_age: 3,
        annual_mileage: 12_000,
        driving_record: DrivingRecord::Clean,
    }));

    match result {
        EstimatorResult::Auto(auto) => {
            assert_eq!(auto.full_coverage.monthly, 150);
            assert_eq!(auto.liability_only.monthly, 60);
            assert_eq!(auto.recommended_deductible, 500);
            assert_eq!(
                auto.full_coverage.includes,
                vec![
                    AutoCoverage::Liability,
                    AutoCoverage::Collision,
                    AutoCoverage::Comprehensive,
                    AutoCoverage::UninsuredMotorist,
                ]
            );
        }
        other => panic!("expected auto estimate, got {other:?}"),
    }
}

#[test]
fn auto_ten_year_old_vehicle_is_not_discounted() {
    let result = estimate(&EstimatorInput::Auto(AutoInput {
        vehicle_age: 10,
        ..AutoInput::default()
    }));

    match result {
        EstimatorResult::Auto(auto) => assert_eq!(auto.full_coverage.monthly, 150),
        other => panic!("expected auto estimate, got {other:?}"),
    }
}

#[test]
fn home_scenario_prices_dwelling_and_contents() {
    let result = estimate(&EstimatorInput::Home(HomeInput {
        home_value: 300_000.0,
        square_footage: 2_000,
        year_built: 2000,
        deductible_preference: HomeDeductible::Usd1000,
    }));

    match result {
        EstimatorResult::Home(home) => {
            assert_eq!(home.monthly, 75);
            assert_eq!(home.dwelling_coverage, 300_000);
            assert_eq!(home.personal_property, 150_000);
            assert_eq!(home.liability, 100_000);
            assert_eq!(home.deductible, 1_000);
        }
        other => panic!("expected home estimate, got {other:?}"),
    }
}

#[test]
fn raw_request_with_unknown_category_fails_fast() {
    let request = EstimateRequest::new("pet", serde_json::Map::new());

    let err = estimator()
        .estimate_request(request)
        .expect_err("pet is not a calculator");

    assert!(matches!(err, EstimateError::UnsupportedCategory(_)));
    assert_eq!(err.to_string(), "unsupported insurance category 'pet'");
}

#[test]
fn results_serialize_with_category_and_estimate_keys() {
    let result = estimate(&EstimatorInput::defaults(
        insurance_guide::estimator::InsuranceCategory::Home,
    ));
    let value = serde_json::to_value(&result).expect("serializes");

    assert_eq!(value["category"], "home");
    assert_eq!(value["estimate"]["monthly"], 75);

    let round_tripped: EstimatorResult = serde_json::from_value(value).expect("deserializes");
    assert_eq!(round_tripped, result);
}

#[tokio::test]
async fn router_serves_auto_estimate_from_form_fields() {
    let app = estimator_router(Arc::new(estimator()));
    let body = json!({
        "category": "auto",
        "vehicle_value": 25000,
        "vehicle_age": 3,
        "annual_mileage": 12000,
        "driving_record": "accidents"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/estimates")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let payload: Value = serde_json::from_slice(&bytes).expect("json body");

    assert_eq!(payload["category"], "auto");
    assert_eq!(payload["estimate"]["full_coverage"]["monthly"], 225);
    assert_eq!(payload["estimate"]["liability_only"]["monthly"], 90);
    assert_eq!(
        payload["estimate"]["full_coverage"]["includes"][3],
        "Uninsured Motorist"
    );
}
