use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::category::CharterCategory;
use super::schedule::{normalize_location, CharterSchedule};
use crate::types::{Money, Pct};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a charter incentive calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharterCalculationInput {
    /// Acquisition price of the asset
    pub acquisition_price_mad: Money,
    /// Zone tier of the asset's location
    pub charter_category: CharterCategory,
    /// Whether the project is a renovation of an existing property
    #[serde(default)]
    pub is_renovation: bool,
    /// Qualifying renovation budget, added to the eligible investment
    #[serde(default)]
    pub renovation_cost_mad: Money,
    /// Permanent jobs created by the project
    #[serde(default)]
    pub employment_created: i64,
}

/// Breakdown of the cashback a project qualifies for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharterCalculationResult {
    /// Category base rate
    pub base_cashback_pct: Pct,
    /// Sum of renovation and employment bonuses
    pub bonus_pct: Pct,
    /// base + bonus
    pub total_cashback_pct: Pct,
    /// eligible investment * total / 100, unrounded
    pub estimated_cashback_mad: Money,
    /// acquisition price + renovation cost
    pub eligible_investment_mad: Money,
    /// Decree citation for the category
    pub decree_reference: String,
}

// ---------------------------------------------------------------------------
// Schedule-driven operations
// ---------------------------------------------------------------------------

impl CharterSchedule {
    /// Compute the incentive breakdown for `input`.
    ///
    /// Total over its domain: the caller is trusted to have validated the
    /// input, and degenerate values (zero or negative prices) simply flow
    /// through the arithmetic. Amounts beyond the `Decimal` range saturate
    /// at `Decimal::MAX` / `Decimal::MIN`.
    pub fn calculate(&self, input: &CharterCalculationInput) -> CharterCalculationResult {
        let category = input.charter_category;
        let eligible_investment_mad = input
            .acquisition_price_mad
            .saturating_add(input.renovation_cost_mad);
        let base_cashback_pct = *self.base_cashback_pct.get(category);

        let mut bonus_pct = Decimal::ZERO;

        // Flat, regardless of the size of the renovation budget.
        if input.is_renovation && input.renovation_cost_mad > Decimal::ZERO {
            bonus_pct = bonus_pct.saturating_add(self.renovation_bonus_pct);
        }

        if input.employment_created > 0 {
            let per_job = Decimal::from(input.employment_created).saturating_mul(self.employment_bonus_per_job_pct);
            bonus_pct = bonus_pct.saturating_add(per_job.min(self.employment_bonus_cap_pct));
        }

        let total_cashback_pct = base_cashback_pct.saturating_add(bonus_pct);
        let estimated_cashback_mad = eligible_investment_mad.saturating_mul(total_cashback_pct) / dec!(100);

        CharterCalculationResult {
            base_cashback_pct,
            bonus_pct,
            total_cashback_pct,
            estimated_cashback_mad,
            eligible_investment_mad,
            decree_reference: self.decree_references.get(category).clone(),
        }
    }

    /// True when `investment_mad` reaches the category's minimum (inclusive).
    pub fn is_eligible(&self, investment_mad: Money, category: CharterCategory) -> bool {
        investment_mad >= *self.min_investment_mad.get(category)
    }

    /// Zone tier for a free-text city or region name. Unknown names fall back
    /// to the schedule's default (the most conservative tier).
    pub fn category_for_location(&self, location: &str) -> CharterCategory {
        self.zones
            .get(&normalize_location(location))
            .copied()
            .unwrap_or(self.default_category)
    }

    pub fn minimum_threshold(&self, category: CharterCategory) -> Money {
        *self.min_investment_mad.get(category)
    }
}

// ---------------------------------------------------------------------------
// Public API (built-in schedule)
// ---------------------------------------------------------------------------

/// Calculate 2026 Investment Charter incentives against the built-in schedule.
pub fn calculate_charter_incentives(input: &CharterCalculationInput) -> CharterCalculationResult {
    CharterSchedule::builtin().calculate(input)
}

/// Check whether an investment meets the minimum threshold for its category.
pub fn is_charter_eligible(investment_mad: Money, category: CharterCategory) -> bool {
    CharterSchedule::builtin().is_eligible(investment_mad, category)
}

/// Charter category for a city/region name; `C` when the name is unknown.
pub fn get_category_from_location(location: &str) -> CharterCategory {
    CharterSchedule::builtin().category_for_location(location)
}

/// Minimum investment threshold for a category.
pub fn get_minimum_threshold(category: CharterCategory) -> Money {
    CharterSchedule::builtin().minimum_threshold(category)
}
