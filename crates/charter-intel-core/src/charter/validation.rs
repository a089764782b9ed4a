use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::CharterCalculationInput;
use super::category::CharterCategory;
use crate::types::Money;

pub const MSG_PRICE_NOT_POSITIVE: &str = "Acquisition price must be positive";
pub const MSG_CATEGORY_REQUIRED: &str = "Charter category is required";
pub const MSG_RENOVATION_COST_REQUIRED: &str = "Renovation cost required when is_renovation is true";
pub const MSG_NEGATIVE_EMPLOYMENT: &str = "Employment created cannot be negative";

/// A calculation input as submitted by a form: every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialCharterInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_price_mad: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charter_category: Option<CharterCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_renovation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renovation_cost_mad: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_created: Option<i64>,
}

impl From<&CharterCalculationInput> for PartialCharterInput {
    fn from(input: &CharterCalculationInput) -> Self {
        PartialCharterInput {
            acquisition_price_mad: Some(input.acquisition_price_mad),
            charter_category: Some(input.charter_category),
            is_renovation: Some(input.is_renovation),
            renovation_cost_mad: Some(input.renovation_cost_mad),
            employment_created: Some(input.employment_created),
        }
    }
}

impl PartialCharterInput {
    /// Resolve the optional fields to a full input, applying the zero/false
    /// defaults. `None` when price or category is missing.
    pub fn complete(&self) -> Option<CharterCalculationInput> {
        Some(CharterCalculationInput {
            acquisition_price_mad: self.acquisition_price_mad?,
            charter_category: self.charter_category?,
            is_renovation: self.is_renovation.unwrap_or(false),
            renovation_cost_mad: self.renovation_cost_mad.unwrap_or(Decimal::ZERO),
            employment_created: self.employment_created.unwrap_or(0),
        })
    }
}

/// Outcome of advisory validation. `valid` is always `errors.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check a partial input, collecting every violation rather than stopping at
/// the first. The calculator never consults this; callers decide what to do
/// with an invalid report.
pub fn validate_charter_input(input: &PartialCharterInput) -> ValidationReport {
    let mut errors = Vec::new();

    if !input.acquisition_price_mad.is_some_and(|p| p > Decimal::ZERO) {
        errors.push(MSG_PRICE_NOT_POSITIVE.to_string());
    }

    if input.charter_category.is_none() {
        errors.push(MSG_CATEGORY_REQUIRED.to_string());
    }

    // Zero counts as missing.
    let has_renovation_cost = input.renovation_cost_mad.is_some_and(|c| !c.is_zero());
    if input.is_renovation == Some(true) && !has_renovation_cost {
        errors.push(MSG_RENOVATION_COST_REQUIRED.to_string());
    }

    if input.employment_created.is_some_and(|n| n < 0) {
        errors.push(MSG_NEGATIVE_EMPLOYMENT.to_string());
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
