use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EstimateError;

/// Insurance lines that have a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceCategory {
    Life,
    Health,
    Auto,
    Home,
}

impl InsuranceCategory {
    pub const ALL: [InsuranceCategory; 4] = [
        InsuranceCategory::Life,
        InsuranceCategory::Health,
        InsuranceCategory::Auto,
        InsuranceCategory::Home,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceCategory::Life => "life",
            InsuranceCategory::Health => "health",
            InsuranceCategory::Auto => "auto",
            InsuranceCategory::Home => "home",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InsuranceCategory::Life => "Life Insurance",
            InsuranceCategory::Health => "Health Insurance",
            InsuranceCategory::Auto => "Auto Insurance",
            InsuranceCategory::Home => "Home Insurance",
        }
    }
}

impl fmt::Display for InsuranceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsuranceCategory {
    type Err = EstimateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "life" => Ok(Self::Life),
            "health" => Ok(Self::Health),
            "auto" => Ok(Self::Auto),
            "home" => Ok(Self::Home),
            _ => Err(EstimateError::UnsupportedCategory(value.to_string())),
        }
    }
}

/// Needs-based life cover inputs. Currency fields are whole or fractional dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeInput {
    pub annual_income: f64,
    pub years_to_replace: u32,
    pub existing_debts: f64,
    pub future_costs: f64,
    pub existing_coverage: f64,
}

impl Default for LifeInput {
    fn default() -> Self {
        Self {
            annual_income: 75_000.0,
            years_to_replace: 10,
            existing_debts: 50_000.0,
            future_costs: 100_000.0,
            existing_coverage: 0.0,
        }
    }
}

/// Household size bucket used to scale health premiums.
///
/// Serialized as the head count the calculator form submits: 1, 2, or 3 for any
/// household of three or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum FamilySize {
    Individual,
    Couple,
    Family,
}

impl FamilySize {
    pub fn premium_multiplier(&self) -> f64 {
        match self {
            FamilySize::Individual => 1.0,
            FamilySize::Couple => 1.8,
            FamilySize::Family => 2.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FamilySize::Individual => "Individual",
            FamilySize::Couple => "Couple",
            FamilySize::Family => "Family (3+)",
        }
    }
}

impl TryFrom<u32> for FamilySize {
    type Error = String;

    fn try_from(members: u32) -> Result<Self, Self::Error> {
        match members {
            0 => Err("family size must include at least one member".to_string()),
            1 => Ok(Self::Individual),
            2 => Ok(Self::Couple),
            _ => Ok(Self::Family),
        }
    }
}

impl From<FamilySize> for u32 {
    fn from(size: FamilySize) -> Self {
        match size {
            FamilySize::Individual => 1,
            FamilySize::Couple => 2,
            FamilySize::Family => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInput {
    pub age: u32,
    pub family_size: FamilySize,
    /// Doctor visits per year.
    pub expected_visits: u32,
    /// Prescriptions filled per month.
    pub prescriptions: u32,
}

impl Default for HealthInput {
    fn default() -> Self {
        Self {
            age: 30,
            family_size: FamilySize::Individual,
            expected_visits: 4,
            prescriptions: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivingRecord {
    Clean,
    Violations,
    Accidents,
}

impl DrivingRecord {
    /// Risk loading applied to the combined auto base rate.
    pub fn risk_multiplier(&self) -> f64 {
        match self {
            DrivingRecord::Clean => 1.0,
            DrivingRecord::Violations => 1.25,
            DrivingRecord::Accidents => 1.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DrivingRecord::Clean => "Clean Record",
            DrivingRecord::Violations => "Minor Violations",
            DrivingRecord::Accidents => "At-Fault Accidents",
        }
    }
}

impl FromStr for DrivingRecord {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "clean" => Ok(Self::Clean),
            "violations" => Ok(Self::Violations),
            "accidents" => Ok(Self::Accidents),
            other => Err(format!(
                "unknown driving record '{other}' (expected clean, violations, or accidents)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoInput {
    pub vehicle_value: f64,
    pub vehicle_age: u32,
    pub annual_mileage: u32,
    pub driving_record: DrivingRecord,
}

impl Default for AutoInput {
    fn default() -> Self {
        Self {
            vehicle_value: 25_000.0,
            vehicle_age: 3,
            annual_mileage: 12_000,
            driving_record: DrivingRecord::Clean,
        }
    }
}

/// Deductible tiers offered on the home calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum HomeDeductible {
    Usd500,
    Usd1000,
    Usd2500,
}

impl HomeDeductible {
    pub fn amount(&self) -> u32 {
        match self {
            HomeDeductible::Usd500 => 500,
            HomeDeductible::Usd1000 => 1_000,
            HomeDeductible::Usd2500 => 2_500,
        }
    }

    /// Premium scaling: a lower deductible costs more per month.
    pub fn premium_adjustment(&self) -> f64 {
        match self {
            HomeDeductible::Usd500 => 1.15,
            HomeDeductible::Usd1000 => 1.0,
            HomeDeductible::Usd2500 => 0.85,
        }
    }
}

impl TryFrom<u32> for HomeDeductible {
    type Error = String;

    fn try_from(amount: u32) -> Result<Self, Self::Error> {
        match amount {
            500 => Ok(Self::Usd500),
            1_000 => Ok(Self::Usd1000),
            2_500 => Ok(Self::Usd2500),
            other => Err(format!(
                "deductible {other} is not offered (expected 500, 1000, or 2500)"
            )),
        }
    }
}

impl From<HomeDeductible> for u32 {
    fn from(deductible: HomeDeductible) -> Self {
        deductible.amount()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeInput {
    pub home_value: f64,
    /// Collected by the form but not priced.
    pub square_footage: u32,
    pub year_built: i32,
    pub deductible_preference: HomeDeductible,
}

impl Default for HomeInput {
    fn default() -> Self {
        Self {
            home_value: 300_000.0,
            square_footage: 2_000,
            year_built: 2_000,
            deductible_preference: HomeDeductible::Usd1000,
        }
    }
}

/// Calculator form values, tagged by insurance line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum EstimatorInput {
    Life(LifeInput),
    Health(HealthInput),
    Auto(AutoInput),
    Home(HomeInput),
}

impl EstimatorInput {
    pub fn category(&self) -> InsuranceCategory {
        match self {
            EstimatorInput::Life(_) => InsuranceCategory::Life,
            EstimatorInput::Health(_) => InsuranceCategory::Health,
            EstimatorInput::Auto(_) => InsuranceCategory::Auto,
            EstimatorInput::Home(_) => InsuranceCategory::Home,
        }
    }

    /// The form values a calculator starts with before the visitor edits anything.
    pub fn defaults(category: InsuranceCategory) -> Self {
        match category {
            InsuranceCategory::Life => Self::Life(LifeInput::default()),
            InsuranceCategory::Health => Self::Health(HealthInput::default()),
            InsuranceCategory::Auto => Self::Auto(AutoInput::default()),
            InsuranceCategory::Home => Self::Home(HomeInput::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeBreakdown {
    pub income_replacement: u64,
    pub debts: u64,
    pub future_costs: u64,
    pub existing_coverage: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeEstimate {
    pub recommended_coverage: u64,
    pub estimated_monthly_premium: u64,
    pub breakdown: LifeBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPlanQuote {
    pub monthly: u64,
    pub annual: u64,
    pub deductible: u64,
    pub estimated_total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsa_contribution: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthEstimate {
    pub low_deductible: HealthPlanQuote,
    pub high_deductible: HealthPlanQuote,
}

/// Coverage components listed on an auto quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoCoverage {
    Liability,
    Collision,
    Comprehensive,
    #[serde(rename = "Uninsured Motorist")]
    UninsuredMotorist,
    #[serde(rename = "Liability Only")]
    LiabilityOnly,
}

impl AutoCoverage {
    pub fn label(&self) -> &'static str {
        match self {
            AutoCoverage::Liability => "Liability",
            AutoCoverage::Collision => "Collision",
            AutoCoverage::Comprehensive => "Comprehensive",
            AutoCoverage::UninsuredMotorist => "Uninsured Motorist",
            AutoCoverage::LiabilityOnly => "Liability Only",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoPlanQuote {
    pub monthly: u64,
    pub annual: u64,
    pub includes: Vec<AutoCoverage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoEstimate {
    pub full_coverage: AutoPlanQuote,
    pub liability_only: AutoPlanQuote,
    pub recommended_deductible: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeEstimate {
    pub monthly: u64,
    pub annual: u64,
    pub dwelling_coverage: u64,
    pub personal_property: u64,
    pub liability: u64,
    pub deductible: u64,
}

/// Estimate produced for one calculator run, tagged by insurance line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "estimate", rename_all = "snake_case")]
pub enum EstimatorResult {
    Life(LifeEstimate),
    Health(HealthEstimate),
    Auto(AutoEstimate),
    Home(HomeEstimate),
}

impl EstimatorResult {
    pub fn category(&self) -> InsuranceCategory {
        match self {
            EstimatorResult::Life(_) => InsuranceCategory::Life,
            EstimatorResult::Health(_) => InsuranceCategory::Health,
            EstimatorResult::Auto(_) => InsuranceCategory::Auto,
            EstimatorResult::Home(_) => InsuranceCategory::Home,
        }
    }
}
