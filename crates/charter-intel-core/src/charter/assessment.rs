use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::{CharterCalculationInput, CharterCalculationResult};
use super::schedule::CharterSchedule;
use super::validation::{validate_charter_input, PartialCharterInput, ValidationReport};
use crate::types::Money;

/// Everything the property detail page shows for a charter block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharterAssessment {
    /// Advisory validation of the input; never blocks the calculation
    pub validation: ValidationReport,
    /// Eligible investment meets the category minimum
    pub eligible: bool,
    pub minimum_threshold_mad: Money,
    /// How far the eligible investment falls short of the minimum (0 when eligible)
    pub shortfall_mad: Money,
    pub result: CharterCalculationResult,
}

impl CharterSchedule {
    pub fn assess(&self, input: &CharterCalculationInput) -> CharterAssessment {
        let validation = validate_charter_input(&PartialCharterInput::from(input));
        let result = self.calculate(input);
        let minimum_threshold_mad = self.minimum_threshold(input.charter_category);
        let eligible = self.is_eligible(result.eligible_investment_mad, input.charter_category);
        let shortfall_mad = minimum_threshold_mad
            .saturating_sub(result.eligible_investment_mad)
            .max(Decimal::ZERO);

        CharterAssessment {
            validation,
            eligible,
            minimum_threshold_mad,
            shortfall_mad,
            result,
        }
    }
}

/// Validate, calculate and check eligibility in one pass against the
/// built-in schedule.
pub fn assess_charter(input: &CharterCalculationInput) -> CharterAssessment {
    CharterSchedule::builtin().assess(input)
}
