use clap::Args;
use serde_json::Value;

use charter_intel_core::charter::CharterSchedule;
use charter_intel_core::heat::zones::{self, HeatZone};
use charter_intel_core::infrastructure::assets::{self, InfrastructureDataset};
use charter_intel_core::pipeline::developments::{self, Development, DevelopmentStatus, PipelineFilter};
use charter_intel_core::portfolio::holdings::{self, PropertyRecord};

use crate::input;

/// Arguments for the portfolio roll-up
#[derive(Args)]
pub struct PortfolioArgs {
    /// Path to JSON array of property records
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the development pipeline
#[derive(Args)]
pub struct PipelineArgs {
    /// Path to JSON array of developments
    #[arg(long)]
    pub input: Option<String>,

    /// Only developments with this status
    #[arg(long)]
    pub status: Option<DevelopmentStatus>,

    /// Only developments in this region (exact match)
    #[arg(long)]
    pub region: Option<String>,
}

/// Arguments for the heat ranking
#[derive(Args)]
pub struct HeatArgs {
    /// Path to JSON array of heat zones
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the 2030 infrastructure roll-up
#[derive(Args)]
pub struct InfrastructureArgs {
    /// Path to JSON object with stadiums, rail_lines, water and energy layers
    #[arg(long)]
    pub input: Option<String>,
}

fn read_dataset<T: serde::de::DeserializeOwned>(
    path: Option<&str>,
    what: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        input::file::read_json(path)
    } else if let Some(data) = input::stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Err(format!("--input <file.json> or stdin required for {}", what).into())
    }
}

pub fn run_portfolio(args: PortfolioArgs, schedule: &CharterSchedule) -> Result<Value, Box<dyn std::error::Error>> {
    let properties: Vec<PropertyRecord> = read_dataset(args.input.as_deref(), "portfolio summary")?;
    tracing::debug!(count = properties.len(), "summarising portfolio");
    let summary = holdings::summarize_portfolio_with(schedule, &properties);
    Ok(serde_json::to_value(summary)?)
}

pub fn run_pipeline(args: PipelineArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let devs: Vec<Development> = read_dataset(args.input.as_deref(), "pipeline summary")?;
    developments::validate_developments(&devs)?;
    let filter = PipelineFilter {
        status: args.status,
        region: args.region,
    };
    tracing::debug!(count = devs.len(), ?filter, "summarising pipeline");
    Ok(serde_json::to_value(developments::summarize_pipeline(&devs, &filter))?)
}

pub fn run_heat(args: HeatArgs, schedule: &CharterSchedule) -> Result<Value, Box<dyn std::error::Error>> {
    let heat_zones: Vec<HeatZone> = read_dataset(args.input.as_deref(), "heat ranking")?;
    zones::validate_heat_zones(&heat_zones)?;
    tracing::debug!(count = heat_zones.len(), "ranking heat zones");
    Ok(serde_json::to_value(zones::summarize_heat_with(schedule, &heat_zones))?)
}

pub fn run_infrastructure(args: InfrastructureArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let dataset: InfrastructureDataset = read_dataset(args.input.as_deref(), "infrastructure summary")?;
    assets::validate_infrastructure(&dataset)?;
    tracing::debug!(
        stadiums = dataset.stadiums.len(),
        rail_lines = dataset.rail_lines.len(),
        "summarising infrastructure"
    );
    Ok(serde_json::to_value(assets::summarize_infrastructure(&dataset))?)
}
