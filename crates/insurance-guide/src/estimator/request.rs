use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::domain::{
    AutoInput, EstimatorInput, HealthInput, HomeInput, InsuranceCategory, LifeInput,
};
use super::life::{MAX_YEARS_TO_REPLACE, MIN_YEARS_TO_REPLACE};
use super::EstimateError;

/// Untyped calculator submission: a category tag plus the form's flat field map.
///
/// The tag is resolved before the fields are decoded so an unknown category is reported
/// as such rather than as a shape mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub category: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl EstimateRequest {
    pub fn new(category: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            category: category.into(),
            fields,
        }
    }

    pub fn into_input(self) -> Result<EstimatorInput, EstimateError> {
        EstimatorInput::from_parts(&self.category, Value::Object(self.fields))
    }
}

impl EstimatorInput {
    pub fn from_parts(category: &str, fields: Value) -> Result<Self, EstimateError> {
        let category: InsuranceCategory = category.parse()?;
        let input = match category {
            InsuranceCategory::Life => Self::Life(serde_json::from_value::<LifeInput>(fields)?),
            InsuranceCategory::Health => {
                Self::Health(serde_json::from_value::<HealthInput>(fields)?)
            }
            InsuranceCategory::Auto => Self::Auto(serde_json::from_value::<AutoInput>(fields)?),
            InsuranceCategory::Home => Self::Home(serde_json::from_value::<HomeInput>(fields)?),
        };
        Ok(input)
    }

    /// Reject values the calculator form would never submit.
    ///
    /// The estimator itself tolerates all of these; validation exists so callers see a
    /// clear error instead of a silently clamped estimate.
    pub fn validate(&self, current_year: i32) -> Result<(), EstimateError> {
        match self {
            EstimatorInput::Life(life) => {
                currency("annual_income", life.annual_income)?;
                currency("existing_debts", life.existing_debts)?;
                currency("future_costs", life.future_costs)?;
                currency("existing_coverage", life.existing_coverage)?;
                if !(MIN_YEARS_TO_REPLACE..=MAX_YEARS_TO_REPLACE).contains(&life.years_to_replace)
                {
                    return Err(EstimateError::InvalidField {
                        field: "years_to_replace",
                        reason: format!(
                            "{} is outside {MIN_YEARS_TO_REPLACE}-{MAX_YEARS_TO_REPLACE} years",
                            life.years_to_replace
                        ),
                    });
                }
            }
            EstimatorInput::Health(health) => {
                if health.age == 0 {
                    return Err(EstimateError::InvalidField {
                        field: "age",
                        reason: "must be greater than zero".to_string(),
                    });
                }
            }
            EstimatorInput::Auto(auto) => {
                currency("vehicle_value", auto.vehicle_value)?;
            }
            EstimatorInput::Home(home) => {
                currency("home_value", home.home_value)?;
                if home.year_built > current_year {
                    return Err(EstimateError::InvalidField {
                        field: "year_built",
                        reason: format!("{} is after {current_year}", home.year_built),
                    });
                }
            }
        }
        Ok(())
    }
}

fn currency(field: &'static str, amount: f64) -> Result<(), EstimateError> {
    if !amount.is_finite() {
        return Err(EstimateError::InvalidField {
            field,
            reason: "must be a finite amount".to_string(),
        });
    }
    if amount < 0.0 {
        return Err(EstimateError::InvalidField {
            field,
            reason: format!("{amount} is negative"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::domain::{DrivingRecord, FamilySize, HomeDeductible};
    use serde_json::json;

    fn request(body: Value) -> EstimateRequest {
        serde_json::from_value(body).expect("request shape")
    }

    #[test]
    fn decodes_fields_for_the_tagged_category() {
        let input = request(json!({
            "category": "auto",
            "vehicle_value": 18000,
            "vehicle_age": 12,
            "annual_mileage": 9000,
            "driving_record": "violations"
        }))
        .into_input()
        .expect("auto input");

        match input {
            EstimatorInput::Auto(auto) => {
                assert_eq!(auto.vehicle_value, 18_000.0);
                assert_eq!(auto.driving_record, DrivingRecord::Violations);
            }
            other => panic!("expected auto input, got {other:?}"),
        }
    }

    #[test]
    fn category_tag_is_case_insensitive() {
        let input = request(json!({
            "category": " Health ",
            "age": 45,
            "family_size": 4,
            "expected_visits": 2,
            "prescriptions": 0
        }))
        .into_input()
        .expect("health input");

        match input {
            EstimatorInput::Health(health) => assert_eq!(health.family_size, FamilySize::Family),
            other => panic!("expected health input, got {other:?}"),
        }
    }

    #[test]
    fn large_households_decode_as_family() {
        let input = request(json!({
            "category": "health",
            "age": 38,
            "family_size": 300,
            "expected_visits": 1,
            "prescriptions": 0
        }))
        .into_input()
        .expect("household of 300 is a family");

        match input {
            EstimatorInput::Health(health) => assert_eq!(health.family_size, FamilySize::Family),
            other => panic!("expected health input, got {other:?}"),
        }
    }

    #[test]
    fn unknown_category_fails_before_field_decoding() {
        let err = request(json!({ "category": "pet", "breed": "corgi" }))
            .into_input()
            .expect_err("pet insurance is not offered");

        match err {
            EstimateError::UnsupportedCategory(tag) => assert_eq!(tag, "pet"),
            other => panic!("expected unsupported category, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unoffered_deductible_and_empty_household() {
        let home = request(json!({
            "category": "home",
            "home_value": 200000,
            "square_footage": 1500,
            "year_built": 1990,
            "deductible_preference": 750
        }))
        .into_input();
        assert!(matches!(home, Err(EstimateError::Malformed(_))));

        let health = request(json!({
            "category": "health",
            "age": 30,
            "family_size": 0,
            "expected_visits": 1,
            "prescriptions": 1
        }))
        .into_input();
        assert!(matches!(health, Err(EstimateError::Malformed(_))));
    }

    #[test]
    fn validation_flags_out_of_domain_values() {
        let life = EstimatorInput::Life(LifeInput {
            existing_debts: -1.0,
            ..LifeInput::default()
        });
        match life.validate(2026) {
            Err(EstimateError::InvalidField { field, .. }) => assert_eq!(field, "existing_debts"),
            other => panic!("expected invalid debts, got {other:?}"),
        }

        let years = EstimatorInput::Life(LifeInput {
            years_to_replace: 25,
            ..LifeInput::default()
        });
        assert!(years.validate(2026).is_err());

        let newborn = EstimatorInput::Health(HealthInput {
            age: 0,
            ..HealthInput::default()
        });
        assert!(newborn.validate(2026).is_err());

        let future_build = EstimatorInput::Home(HomeInput {
            year_built: 2031,
            deductible_preference: HomeDeductible::Usd2500,
            ..HomeInput::default()
        });
        assert!(future_build.validate(2026).is_err());

        let infinite = EstimatorInput::Auto(AutoInput {
            vehicle_value: f64::INFINITY,
            ..AutoInput::default()
        });
        assert!(infinite.validate(2026).is_err());
    }

    #[test]
    fn default_form_values_pass_validation() {
        for category in InsuranceCategory::ALL {
            EstimatorInput::defaults(category)
                .validate(2026)
                .expect("defaults are valid");
        }
    }
}
