use insurance_guide::estimator::{DrivingRecord, FamilySize, HomeDeductible};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_family_size(raw: &str) -> Result<FamilySize, String> {
    let members = raw
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("failed to parse '{raw}' as a household size ({err})"))?;
    FamilySize::try_from(members)
}

pub(crate) fn parse_deductible(raw: &str) -> Result<HomeDeductible, String> {
    let amount = raw
        .trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse::<u32>()
        .map_err(|err| format!("failed to parse '{raw}' as a deductible ({err})"))?;
    HomeDeductible::try_from(amount)
}

pub(crate) fn parse_driving_record(raw: &str) -> Result<DrivingRecord, String> {
    raw.parse()
}
