use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::charter::{CharterAssessment, CharterCalculationInput, CharterCategory, CharterSchedule};
use crate::types::{Money, Pct};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Land-title status of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LegalStatus {
    /// Registered with a land title (titre foncier)
    Titled,
    /// Title requisition filed, not yet granted
    #[serde(rename = "In-Process")]
    InProcess,
    /// Traditional ownership deed only
    Melkia,
}

/// A tracked property as listed on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requisition_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub melkia_reference: Option<String>,
    pub legal_status: LegalStatus,
    /// 0-100 confidence in the legal file
    pub legal_confidence_score: u8,
    pub city: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charter_category: Option<CharterCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_price_mad: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_value_mad: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_acquisition_cost_mad: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cashback_pct: Option<Pct>,
    pub property_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_sqm: Option<Decimal>,
}

/// Charter projection for one priced property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyProjection {
    pub property_id: String,
    pub category: CharterCategory,
    /// True when the category came from the city lookup rather than the record
    pub category_inferred: bool,
    pub assessment: CharterAssessment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub property_count: usize,
    /// Sum of estimated values; unvalued properties count as zero
    pub portfolio_value_mad: Money,
    /// Sum of net acquisition costs; missing costs count as zero
    pub total_net_cost_mad: Money,
    /// Sum of projected cashback across priced properties
    pub total_projected_cashback_mad: Money,
    pub by_legal_status: BTreeMap<LegalStatus, usize>,
    pub projections: Vec<PropertyProjection>,
    /// Properties skipped for lack of an acquisition price
    pub unpriced_ids: Vec<String>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Dashboard roll-up using the built-in charter schedule.
pub fn summarize_portfolio(properties: &[PropertyRecord]) -> PortfolioSummary {
    summarize_portfolio_with(CharterSchedule::builtin(), properties)
}

pub fn summarize_portfolio_with(schedule: &CharterSchedule, properties: &[PropertyRecord]) -> PortfolioSummary {
    let portfolio_value_mad: Money = properties
        .iter()
        .map(|p| p.estimated_value_mad.unwrap_or(Decimal::ZERO))
        .fold(Decimal::ZERO, Decimal::saturating_add);
    let total_net_cost_mad: Money = properties
        .iter()
        .map(|p| p.net_acquisition_cost_mad.unwrap_or(Decimal::ZERO))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let mut by_legal_status: BTreeMap<LegalStatus, usize> = BTreeMap::new();
    for p in properties {
        *by_legal_status.entry(p.legal_status).or_insert(0) += 1;
    }

    let mut projections = Vec::new();
    let mut unpriced_ids = Vec::new();
    for p in properties {
        let Some(price) = p.acquisition_price_mad else {
            unpriced_ids.push(p.id.clone());
            continue;
        };
        let (category, category_inferred) = match p.charter_category {
            Some(c) => (c, false),
            None => (schedule.category_for_location(&p.city), true),
        };
        let assessment = schedule.assess(&CharterCalculationInput {
            acquisition_price_mad: price,
            charter_category: category,
            is_renovation: false,
            renovation_cost_mad: Decimal::ZERO,
            employment_created: 0,
        });
        projections.push(PropertyProjection {
            property_id: p.id.clone(),
            category,
            category_inferred,
            assessment,
        });
    }

    let total_projected_cashback_mad: Money = projections
        .iter()
        .map(|p| p.assessment.result.estimated_cashback_mad)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    PortfolioSummary {
        property_count: properties.len(),
        portfolio_value_mad,
        total_net_cost_mad,
        total_projected_cashback_mad,
        by_legal_status,
        projections,
        unpriced_ids,
    }
}

/// Cashback implied by a listed rate: price * pct / 100.
pub fn potential_cashback(acquisition_price_mad: Money, cashback_pct: Pct) -> Money {
    acquisition_price_mad.saturating_mul(cashback_pct) / dec!(100)
}
