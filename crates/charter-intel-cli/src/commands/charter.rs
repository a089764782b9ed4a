use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::time::Instant;

use charter_intel_core::charter::schedule::normalize_location;
use charter_intel_core::charter::{
    validate_charter_input, CharterCalculationInput, CharterCategory, CharterSchedule,
    PartialCharterInput,
};
use charter_intel_core::format::{format_compact, format_mad, format_mad_plain};
use charter_intel_core::types::with_metadata;

use crate::input;

/// Arguments for a charter incentive calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CharterArgs {
    /// Acquisition price in MAD
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Charter category (A, B or C)
    #[arg(long, conflicts_with = "location")]
    pub category: Option<CharterCategory>,

    /// City or region; resolved to a category through the zone table
    #[arg(long)]
    pub location: Option<String>,

    /// Project is a renovation of an existing property
    #[arg(long)]
    pub renovation: bool,

    /// Qualifying renovation budget in MAD
    #[arg(long)]
    pub renovation_cost: Option<Decimal>,

    /// Permanent jobs created
    #[arg(long)]
    pub jobs: Option<i64>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for an eligibility check
#[derive(Args)]
pub struct EligibilityArgs {
    /// Eligible investment in MAD
    #[arg(long)]
    pub investment: Decimal,

    /// Charter category (A, B or C)
    #[arg(long)]
    pub category: CharterCategory,
}

/// Arguments for a zone lookup
#[derive(Args)]
pub struct CategoryArgs {
    /// City or region name
    #[arg(long)]
    pub location: String,
}

/// Arguments for a threshold lookup
#[derive(Args)]
pub struct ThresholdArgs {
    /// Charter category (A, B or C)
    #[arg(long)]
    pub category: CharterCategory,
}

/// Arguments for advisory validation
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to JSON input file with a (possibly partial) calculation input
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for MAD formatting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FormatMadArgs {
    /// Amount in MAD
    #[arg(long)]
    pub amount: Decimal,

    /// Omit the currency suffix
    #[arg(long, conflicts_with = "compact")]
    pub plain: bool,

    /// Compact form (1.2M, 24K)
    #[arg(long)]
    pub compact: bool,
}

pub fn run_charter(args: CharterArgs, schedule: &CharterSchedule) -> Result<Value, Box<dyn std::error::Error>> {
    let charter_input: CharterCalculationInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(price) = args.price {
        let charter_category = match (args.category, args.location.as_deref()) {
            (Some(c), _) => c,
            (None, Some(loc)) => schedule.category_for_location(loc),
            (None, None) => return Err("--category or --location is required (or provide --input)".into()),
        };
        CharterCalculationInput {
            acquisition_price_mad: price,
            charter_category,
            is_renovation: args.renovation,
            renovation_cost_mad: args.renovation_cost.unwrap_or(Decimal::ZERO),
            employment_created: args.jobs.unwrap_or(0),
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--price is required (or provide --input / stdin)".into());
    };

    let start = Instant::now();
    let assessment = schedule.assess(&charter_input);

    let mut warnings = assessment.validation.errors.clone();
    if !assessment.eligible {
        warnings.push(format!(
            "Eligible investment {} is below the category {} minimum of {} (shortfall {})",
            format_mad(assessment.result.eligible_investment_mad),
            charter_input.charter_category,
            format_mad(assessment.minimum_threshold_mad),
            format_mad(assessment.shortfall_mad),
        ));
    }
    for w in &warnings {
        tracing::warn!("{}", w);
    }

    let output = with_metadata(
        "2026 Investment Charter cashback (Loi-cadre n° 03-22); placeholder decree values",
        &charter_input,
        warnings,
        start.elapsed().as_micros() as u64,
        assessment,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_eligibility(args: EligibilityArgs, schedule: &CharterSchedule) -> Result<Value, Box<dyn std::error::Error>> {
    let threshold = schedule.minimum_threshold(args.category);
    Ok(json!({
        "eligible": schedule.is_eligible(args.investment, args.category),
        "category": args.category,
        "investment_mad": args.investment,
        "minimum_threshold_mad": threshold,
    }))
}

pub fn run_category(args: CategoryArgs, schedule: &CharterSchedule) -> Result<Value, Box<dyn std::error::Error>> {
    let category = schedule.category_for_location(&args.location);
    Ok(json!({
        "category": category,
        "location": args.location,
        "known_zone": schedule.zones.contains_key(&normalize_location(&args.location)),
    }))
}

pub fn run_threshold(args: ThresholdArgs, schedule: &CharterSchedule) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({
        "minimum_threshold_mad": schedule.minimum_threshold(args.category),
        "category": args.category,
    }))
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let partial: PartialCharterInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for validation".into());
    };
    Ok(serde_json::to_value(validate_charter_input(&partial))?)
}

pub fn run_format_mad(args: FormatMadArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let formatted = if args.compact {
        format_compact(args.amount)
    } else if args.plain {
        format_mad_plain(args.amount)
    } else {
        format_mad(args.amount)
    };
    Ok(json!({ "formatted": formatted }))
}

pub fn run_schedule(schedule: &CharterSchedule) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(schedule)?)
}
