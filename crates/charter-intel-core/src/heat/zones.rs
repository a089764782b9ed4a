use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::charter::{CharterCategory, CharterSchedule};
use crate::error::CharterError;
use crate::types::{Money, Pct};
use crate::CharterResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Investment activity for one city over the trailing 30 days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatZone {
    pub id: String,
    pub region: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    /// Normalised activity score, 0-1
    pub heat: Decimal,
    pub transactions_30d: u32,
    /// Year-on-year price change, percentage points
    pub avg_price_change_pct: Pct,
    pub foreign_buyer_pct: Pct,
    pub avg_price_per_sqm: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatBand {
    Cold,
    Cool,
    Warm,
    Hot,
    Peak,
}

impl HeatBand {
    pub fn from_heat(heat: Decimal) -> Self {
        if heat < dec!(0.3) {
            HeatBand::Cold
        } else if heat < dec!(0.5) {
            HeatBand::Cool
        } else if heat < dec!(0.7) {
            HeatBand::Warm
        } else if heat < dec!(0.85) {
            HeatBand::Hot
        } else {
            HeatBand::Peak
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedHeatZone {
    /// 1-based, hottest first
    pub rank: usize,
    pub band: HeatBand,
    /// heat * 100, rounded
    pub heat_score: u32,
    pub charter_category: CharterCategory,
    pub zone: HeatZone,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatSummary {
    pub ranking: Vec<RankedHeatZone>,
    pub total_transactions_30d: u64,
    /// Transaction-weighted; zero when there were no transactions
    pub weighted_avg_price_per_sqm: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hottest_zone_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Rank zones by heat, hottest first; ties keep input order.
pub fn rank_heat_zones(zones: &[HeatZone]) -> Vec<RankedHeatZone> {
    rank_with(CharterSchedule::builtin(), zones)
}

pub fn summarize_heat(zones: &[HeatZone]) -> HeatSummary {
    summarize_heat_with(CharterSchedule::builtin(), zones)
}

pub fn summarize_heat_with(schedule: &CharterSchedule, zones: &[HeatZone]) -> HeatSummary {
    let ranking = rank_with(schedule, zones);

    let total_transactions_30d: u64 = zones.iter().map(|z| u64::from(z.transactions_30d)).sum();
    let weighted_avg_price_per_sqm = if total_transactions_30d == 0 {
        Decimal::ZERO
    } else {
        let weighted: Money = zones
            .iter()
            .map(|z| z.avg_price_per_sqm * Decimal::from(z.transactions_30d))
            .sum();
        weighted / Decimal::from(total_transactions_30d)
    };

    HeatSummary {
        hottest_zone_id: ranking.first().map(|r| r.zone.id.clone()),
        ranking,
        total_transactions_30d,
        weighted_avg_price_per_sqm,
    }
}

/// Reject zones whose heat lies outside 0-1.
pub fn validate_heat_zones(zones: &[HeatZone]) -> CharterResult<()> {
    for z in zones {
        if z.heat < Decimal::ZERO || z.heat > Decimal::ONE {
            return Err(CharterError::InvalidInput {
                field: format!("zones[{}].heat", z.id),
                reason: format!("{} is outside 0-1", z.heat),
            });
        }
    }
    Ok(())
}

fn rank_with(schedule: &CharterSchedule, zones: &[HeatZone]) -> Vec<RankedHeatZone> {
    let mut sorted: Vec<&HeatZone> = zones.iter().collect();
    sorted.sort_by(|a, b| b.heat.cmp(&a.heat));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, z)| RankedHeatZone {
            rank: i + 1,
            band: HeatBand::from_heat(z.heat),
            heat_score: heat_score(z.heat),
            charter_category: schedule.category_for_location(&z.city),
            zone: z.clone(),
        })
        .collect()
}

fn heat_score(heat: Decimal) -> u32 {
    let score = (heat * dec!(100)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    score.to_u32().unwrap_or(0)
}
