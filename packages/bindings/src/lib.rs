use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use std::str::FromStr;

use charter_intel_core::charter::{self, CharterCategory};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Amounts cross the boundary as strings so no precision is lost to JS numbers.
fn parse_amount(amount: &str) -> NapiResult<Decimal> {
    Decimal::from_str(amount.trim()).map_err(to_napi_error)
}

fn parse_category(category: &str) -> NapiResult<CharterCategory> {
    CharterCategory::from_str(category).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Charter
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_charter_incentives(input_json: String) -> NapiResult<String> {
    let input: charter::CharterCalculationInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = charter::calculate_charter_incentives(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn assess_charter(input_json: String) -> NapiResult<String> {
    let input: charter::CharterCalculationInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = charter::assess_charter(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn is_charter_eligible(investment_mad: String, category: String) -> NapiResult<bool> {
    Ok(charter::is_charter_eligible(
        parse_amount(&investment_mad)?,
        parse_category(&category)?,
    ))
}

#[napi]
pub fn get_category_from_location(location: String) -> String {
    charter::get_category_from_location(&location).to_string()
}

#[napi]
pub fn get_minimum_threshold(category: String) -> NapiResult<String> {
    Ok(charter::get_minimum_threshold(parse_category(&category)?).to_string())
}

#[napi]
pub fn validate_charter_input(input_json: String) -> NapiResult<String> {
    let input: charter::PartialCharterInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = charter::validate_charter_input(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn format_mad(amount_mad: String) -> NapiResult<String> {
    Ok(charter_intel_core::format::format_mad(parse_amount(&amount_mad)?))
}

#[napi]
pub fn format_compact(amount: String) -> NapiResult<String> {
    Ok(charter_intel_core::format::format_compact(parse_amount(&amount)?))
}

// ---------------------------------------------------------------------------
// Datasets
// ---------------------------------------------------------------------------

#[napi]
pub fn summarize_portfolio(properties_json: String) -> NapiResult<String> {
    let properties: Vec<charter_intel_core::portfolio::holdings::PropertyRecord> =
        serde_json::from_str(&properties_json).map_err(to_napi_error)?;
    let output = charter_intel_core::portfolio::holdings::summarize_portfolio(&properties);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn summarize_pipeline(developments_json: String, filter_json: Option<String>) -> NapiResult<String> {
    use charter_intel_core::pipeline::developments;

    let devs: Vec<developments::Development> = serde_json::from_str(&developments_json).map_err(to_napi_error)?;
    developments::validate_developments(&devs).map_err(to_napi_error)?;
    let filter: developments::PipelineFilter = match filter_json {
        Some(f) => serde_json::from_str(&f).map_err(to_napi_error)?,
        None => developments::PipelineFilter::default(),
    };
    let output = developments::summarize_pipeline(&devs, &filter);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn summarize_heat(zones_json: String) -> NapiResult<String> {
    use charter_intel_core::heat::zones;

    let heat_zones: Vec<zones::HeatZone> = serde_json::from_str(&zones_json).map_err(to_napi_error)?;
    zones::validate_heat_zones(&heat_zones).map_err(to_napi_error)?;
    let output = zones::summarize_heat(&heat_zones);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn summarize_infrastructure(dataset_json: String) -> NapiResult<String> {
    use charter_intel_core::infrastructure::assets;

    let dataset: assets::InfrastructureDataset = serde_json::from_str(&dataset_json).map_err(to_napi_error)?;
    assets::validate_infrastructure(&dataset).map_err(to_napi_error)?;
    let output = assets::summarize_infrastructure(&dataset);
    serde_json::to_string(&output).map_err(to_napi_error)
}
