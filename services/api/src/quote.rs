use crate::infra::{parse_deductible, parse_driving_record, parse_family_size};
use clap::{Args, Subcommand};
use serde::Serialize;
use insurance_guide::error::AppError;
use insurance_guide::estimator::{
    format_usd, AutoEstimate, AutoInput, DrivingRecord, EstimatorInput, EstimatorResult,
    FamilySize, HealthEstimate, HealthInput, HealthPlanQuote, HomeDeductible, HomeEstimate,
    HomeInput, LifeEstimate, LifeInput, PremiumEstimator,
};
use tracing::debug;

#[derive(Subcommand, Debug)]
pub(crate) enum EstimateCommand {
    /// Needs-based life cover and premium
    Life(LifeArgs),
    /// Low- and high-deductible health plan quotes
    Health(HealthArgs),
    /// Full-coverage and liability-only auto quotes
    Auto(AutoArgs),
    /// Homeowners premium and coverage amounts
    Home(HomeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct OutputArgs {
    /// Print the estimate as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct LifeArgs {
    /// Annual income in dollars
    #[arg(long)]
    pub(crate) annual_income: Option<f64>,
    /// Years of income to replace (5-20)
    #[arg(long)]
    pub(crate) years: Option<u32>,
    /// Existing debts such as mortgage and loans
    #[arg(long)]
    pub(crate) debts: Option<f64>,
    /// Future costs such as education
    #[arg(long)]
    pub(crate) future_costs: Option<f64>,
    /// Existing life insurance coverage
    #[arg(long)]
    pub(crate) existing_coverage: Option<f64>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct HealthArgs {
    #[arg(long)]
    pub(crate) age: Option<u32>,
    /// Household size: 1, 2, or 3 for three or more
    #[arg(long, value_parser = parse_family_size)]
    pub(crate) family_size: Option<FamilySize>,
    /// Expected doctor visits per year
    #[arg(long)]
    pub(crate) visits: Option<u32>,
    /// Prescriptions per month
    #[arg(long)]
    pub(crate) prescriptions: Option<u32>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AutoArgs {
    #[arg(long)]
    pub(crate) vehicle_value: Option<f64>,
    /// Vehicle age in years
    #[arg(long)]
    pub(crate) vehicle_age: Option<u32>,
    #[arg(long)]
    pub(crate) annual_mileage: Option<u32>,
    /// clean, violations, or accidents
    #[arg(long, value_parser = parse_driving_record)]
    pub(crate) driving_record: Option<DrivingRecord>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct HomeArgs {
    #[arg(long)]
    pub(crate) home_value: Option<f64>,
    #[arg(long)]
    pub(crate) square_footage: Option<u32>,
    #[arg(long)]
    pub(crate) year_built: Option<i32>,
    /// 500, 1000, or 2500
    #[arg(long, value_parser = parse_deductible)]
    pub(crate) deductible: Option<HomeDeductible>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

impl EstimateCommand {
    fn into_parts(self) -> (EstimatorInput, OutputArgs) {
        match self {
            EstimateCommand::Life(args) => {
                let defaults = LifeInput::default();
                let input = LifeInput {
                    annual_income: args.annual_income.unwrap_or(defaults.annual_income),
                    years_to_replace: args.years.unwrap_or(defaults.years_to_replace),
                    existing_debts: args.debts.unwrap_or(defaults.existing_debts),
                    future_costs: args.future_costs.unwrap_or(defaults.future_costs),
                    existing_coverage: args
                        .existing_coverage
                        .unwrap_or(defaults.existing_coverage),
                };
                (EstimatorInput::Life(input), args.output)
            }
            EstimateCommand::Health(args) => {
                let defaults = HealthInput::default();
                let input = HealthInput {
                    age: args.age.unwrap_or(defaults.age),
                    family_size: args.family_size.unwrap_or(defaults.family_size),
                    expected_visits: args.visits.unwrap_or(defaults.expected_visits),
                    prescriptions: args.prescriptions.unwrap_or(defaults.prescriptions),
                };
                (EstimatorInput::Health(input), args.output)
            }
            EstimateCommand::Auto(args) => {
                let defaults = AutoInput::default();
                let input = AutoInput {
                    vehicle_value: args.vehicle_value.unwrap_or(defaults.vehicle_value),
                    vehicle_age: args.vehicle_age.unwrap_or(defaults.vehicle_age),
                    annual_mileage: args.annual_mileage.unwrap_or(defaults.annual_mileage),
                    driving_record: args.driving_record.unwrap_or(defaults.driving_record),
                };
                (EstimatorInput::Auto(input), args.output)
            }
            EstimateCommand::Home(args) => {
                let defaults = HomeInput::default();
                let input = HomeInput {
                    home_value: args.home_value.unwrap_or(defaults.home_value),
                    square_footage: args.square_footage.unwrap_or(defaults.square_footage),
                    year_built: args.year_built.unwrap_or(defaults.year_built),
                    deductible_preference: args
                        .deductible
                        .unwrap_or(defaults.deductible_preference),
                };
                (EstimatorInput::Home(input), args.output)
            }
        }
    }
}

pub(crate) fn run_estimate(command: EstimateCommand) -> Result<(), AppError> {
    let (input, output) = command.into_parts();
    let estimator = PremiumEstimator::new();
    let result = estimator.estimate_checked(&input)?;
    debug!(category = %result.category(), json = output.json, "rendering estimate");

    if output.json {
        println!("{}", render_json(&result)?);
        return Ok(());
    }

    println!("{} estimate", result.category().label());
    for line in render_estimate(&result) {
        println!("{line}");
    }
    println!("Estimates are illustrative only and are not a quote of insurance.");

    Ok(())
}

pub(crate) fn render_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub(crate) fn render_estimate(result: &EstimatorResult) -> Vec<String> {
    match result {
        EstimatorResult::Life(life) => render_life(life),
        EstimatorResult::Health(health) => render_health(health),
        EstimatorResult::Auto(auto) => render_auto(auto),
        EstimatorResult::Home(home) => render_home(home),
    }
}

fn usd(amount: u64) -> String {
    format_usd(amount as f64)
}

fn render_life(life: &LifeEstimate) -> Vec<String> {
    let breakdown = &life.breakdown;
    vec![
        format!("- Recommended coverage: {}", usd(life.recommended_coverage)),
        format!(
            "- Est. monthly premium: {}",
            usd(life.estimated_monthly_premium)
        ),
        "Coverage breakdown:".to_string(),
        format!("  - Income replacement: {}", usd(breakdown.income_replacement)),
        format!("  - Debts: {}", usd(breakdown.debts)),
        format!("  - Future costs: {}", usd(breakdown.future_costs)),
        format!(
            "  - Existing coverage: {}",
            format_usd(-(breakdown.existing_coverage as f64))
        ),
    ]
}

fn render_health_plan(name: &str, plan: &HealthPlanQuote) -> String {
    let mut line = format!(
        "- {name}: {}/mo | {}/yr | deductible {} | est. annual total {}",
        usd(plan.monthly),
        usd(plan.annual),
        usd(plan.deductible),
        usd(plan.estimated_total)
    );
    if let Some(limit) = plan.hsa_contribution {
        line.push_str(&format!(" | HSA limit {}", usd(limit)));
    }
    line
}

fn render_health(health: &HealthEstimate) -> Vec<String> {
    vec![
        render_health_plan("Low-deductible plan", &health.low_deductible),
        render_health_plan("High-deductible plan", &health.high_deductible),
    ]
}

fn render_auto(auto: &AutoEstimate) -> Vec<String> {
    let mut lines = Vec::new();
    for (name, plan) in [
        ("Full coverage", &auto.full_coverage),
        ("Liability only", &auto.liability_only),
    ] {
        let includes: Vec<&str> = plan.includes.iter().map(|item| item.label()).collect();
        lines.push(format!(
            "- {name}: {}/mo | {}/yr ({})",
            usd(plan.monthly),
            usd(plan.annual),
            includes.join(", ")
        ));
    }
    lines.push(format!(
        "- Recommended deductible: {}",
        usd(auto.recommended_deductible)
    ));
    lines
}

fn render_home(home: &HomeEstimate) -> Vec<String> {
    vec![
        format!(
            "- Premium: {}/mo | {}/yr",
            usd(home.monthly),
            usd(home.annual)
        ),
        format!("- Dwelling coverage: {}", usd(home.dwelling_coverage)),
        format!("- Personal property: {}", usd(home.personal_property)),
        format!("- Liability: {}", usd(home.liability)),
        format!("- Deductible: {}", usd(home.deductible)),
    ]
}
