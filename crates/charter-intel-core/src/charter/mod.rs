//! 2026 Investment Charter (Loi-cadre n° 03-22) incentive calculations.
//!
//! The rate tables are placeholder values pending verification against the
//! Bulletin Officiel; they live in [`CharterSchedule`] so a corrected
//! schedule can be loaded without touching the calculator.

pub mod assessment;
pub mod calculator;
pub mod category;
pub mod schedule;
pub mod validation;

pub use assessment::{assess_charter, CharterAssessment};
pub use calculator::{
    calculate_charter_incentives, get_category_from_location, get_minimum_threshold,
    is_charter_eligible, CharterCalculationInput, CharterCalculationResult,
};
pub use category::{CategoryTable, CharterCategory};
pub use schedule::CharterSchedule;
pub use validation::{validate_charter_input, PartialCharterInput, ValidationReport};
