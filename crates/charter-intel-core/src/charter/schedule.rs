use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::{CategoryTable, CharterCategory};
use crate::error::CharterError;
use crate::types::{Money, Pct};
use crate::CharterResult;

static BUILTIN: Lazy<CharterSchedule> = Lazy::new(CharterSchedule::default);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Rate tables and zone classification driving every charter computation.
///
/// `Default` is the built-in 2026 decree schedule. All values are
/// placeholders until cross-referenced with the Bulletin Officiel, so the
/// whole table can be replaced from a JSON document; fields left out of the
/// document keep their built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharterSchedule {
    /// Base cashback percentage points per category
    pub base_cashback_pct: CategoryTable<Pct>,
    /// Minimum eligible investment per category (MAD, inclusive)
    pub min_investment_mad: CategoryTable<Money>,
    /// Flat bonus for a renovation with a positive renovation budget
    pub renovation_bonus_pct: Pct,
    /// Bonus per permanent job created
    pub employment_bonus_per_job_pct: Pct,
    /// Ceiling on the total employment bonus
    pub employment_bonus_cap_pct: Pct,
    /// Citation text shown alongside each category's result
    pub decree_references: CategoryTable<String>,
    /// Normalised city/region name to category
    pub zones: BTreeMap<String, CharterCategory>,
    /// Category for any location missing from `zones`
    pub default_category: CharterCategory,
}

impl Default for CharterSchedule {
    fn default() -> Self {
        use CharterCategory::*;

        let zones = [
            // Primary investment zones
            ("marrakech", A),
            ("casablanca", A),
            ("rabat", A),
            ("tangier", A),
            ("tanger", A),
            // Secondary investment zones
            ("essaouira", B),
            ("ouarzazate", B),
            ("agadir", B),
            ("fes", B),
            ("fez", B),
            ("meknes", B),
            ("tetouan", B),
            // Emerging zones
            ("errachidia", C),
            ("guelmim", C),
            ("laayoune", C),
            ("dakhla", C),
        ]
        .into_iter()
        .map(|(city, cat)| (city.to_string(), cat))
        .collect();

        CharterSchedule {
            base_cashback_pct: CategoryTable::new(dec!(10), dec!(15), dec!(20)),
            min_investment_mad: CategoryTable::new(dec!(5000000), dec!(2500000), dec!(1000000)),
            renovation_bonus_pct: dec!(5),
            employment_bonus_per_job_pct: dec!(0.5),
            employment_bonus_cap_pct: dec!(10),
            decree_references: CategoryTable::new(
                "Décret n° 2-22-XXX / Art. 15".to_string(),
                "Décret n° 2-22-XXX / Art. 16".to_string(),
                "Décret n° 2-22-XXX / Art. 17".to_string(),
            ),
            zones,
            default_category: C,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl CharterSchedule {
    /// The process-wide built-in schedule, initialised on first use.
    pub fn builtin() -> &'static CharterSchedule {
        &BUILTIN
    }

    /// Parse a schedule override. Zone keys are normalised and the result is
    /// validated before it is returned.
    pub fn from_json_str(json: &str) -> CharterResult<Self> {
        let raw: CharterSchedule = serde_json::from_str(json)?;
        let schedule = raw.normalized();
        schedule.validate()?;
        tracing::debug!(
            zones = schedule.zones.len(),
            default_category = %schedule.default_category,
            "loaded charter schedule"
        );
        Ok(schedule)
    }

    /// Same schedule with every zone key lowercased and trimmed.
    pub fn normalized(self) -> Self {
        let zones = self
            .zones
            .into_iter()
            .map(|(k, v)| (normalize_location(&k), v))
            .collect();
        CharterSchedule { zones, ..self }
    }

    /// Reject tables a domain expert could not have meant: negative rates or
    /// thresholds, empty citations, blank zone names.
    pub fn validate(&self) -> CharterResult<()> {
        for (cat, pct) in self.base_cashback_pct.iter() {
            if *pct < Decimal::ZERO {
                return Err(invalid(format!("base cashback for category {} is negative ({})", cat, pct)));
            }
        }
        for (cat, threshold) in self.min_investment_mad.iter() {
            if *threshold < Decimal::ZERO {
                return Err(invalid(format!(
                    "minimum investment for category {} is negative ({})",
                    cat, threshold
                )));
            }
        }
        let bonuses = [
            ("renovation_bonus_pct", self.renovation_bonus_pct),
            ("employment_bonus_per_job_pct", self.employment_bonus_per_job_pct),
            ("employment_bonus_cap_pct", self.employment_bonus_cap_pct),
        ];
        for (name, value) in bonuses {
            if value < Decimal::ZERO {
                return Err(invalid(format!("{} is negative ({})", name, value)));
            }
        }
        for (cat, reference) in self.decree_references.iter() {
            if reference.trim().is_empty() {
                return Err(invalid(format!("decree reference for category {} is empty", cat)));
            }
        }
        if self.zones.keys().any(|k| k.trim().is_empty()) {
            return Err(invalid("zone table contains a blank location".to_string()));
        }
        Ok(())
    }
}

/// Lowercase and trim a free-text location for zone lookup.
pub fn normalize_location(location: &str) -> String {
    location.trim().to_lowercase()
}

fn invalid(msg: String) -> CharterError {
    CharterError::InvalidSchedule(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_matches_default() {
        assert_eq!(CharterSchedule::builtin(), &CharterSchedule::default());
    }

    #[test]
    fn test_builtin_schedule_is_valid() {
        assert!(CharterSchedule::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_builtin_fields() {
        let schedule = CharterSchedule::from_json_str(r#"{ "renovation_bonus_pct": "7" }"#).unwrap();
        assert_eq!(schedule.renovation_bonus_pct, dec!(7));
        assert_eq!(schedule.base_cashback_pct, CharterSchedule::default().base_cashback_pct);
        assert_eq!(schedule.zones.get("rabat"), Some(&CharterCategory::A));
    }

    #[test]
    fn test_numeric_json_values_accepted() {
        let schedule =
            CharterSchedule::from_json_str(r#"{ "base_cashback_pct": { "A": 12, "B": 16.5, "C": 21 } }"#).unwrap();
        assert_eq!(*schedule.base_cashback_pct.get(CharterCategory::B), dec!(16.5));
    }

    #[test]
    fn test_zone_keys_normalised_on_load() {
        let schedule = CharterSchedule::from_json_str(r#"{ "zones": { "  Chefchaouen ": "B" } }"#).unwrap();
        assert_eq!(schedule.zones.get("chefchaouen"), Some(&CharterCategory::B));
        // A supplied zone table replaces the built-in one.
        assert!(!schedule.zones.contains_key("marrakech"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = CharterSchedule::from_json_str(r#"{ "employment_bonus_cap_pct": "-1" }"#).unwrap_err();
        assert!(matches!(err, CharterError::InvalidSchedule(_)));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = CharterSchedule::from_json_str(
            r#"{ "min_investment_mad": { "A": "-5", "B": "0", "C": "0" } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("category A"));
    }

    #[test]
    fn test_empty_decree_reference_rejected() {
        let err = CharterSchedule::from_json_str(
            r#"{ "decree_references": { "A": "x", "B": " ", "C": "y" } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("category B"));
    }

    #[test]
    fn test_blank_zone_rejected() {
        assert!(CharterSchedule::from_json_str(r#"{ "zones": { "   ": "A" } }"#).is_err());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = CharterSchedule::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CharterError::SerializationError(_)));
    }
}
