use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::CharterError;
use crate::CharterResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevelopmentStatus {
    Confirmed,
    Construction,
    Planned,
    Rumored,
}

impl fmt::Display for DevelopmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DevelopmentStatus::Confirmed => "confirmed",
            DevelopmentStatus::Construction => "construction",
            DevelopmentStatus::Planned => "planned",
            DevelopmentStatus::Rumored => "rumored",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for DevelopmentStatus {
    type Err = CharterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(DevelopmentStatus::Confirmed),
            "construction" => Ok(DevelopmentStatus::Construction),
            "planned" => Ok(DevelopmentStatus::Planned),
            "rumored" => Ok(DevelopmentStatus::Rumored),
            other => Err(CharterError::InvalidInput {
                field: "status".into(),
                reason: format!("unknown development status '{}'", other),
            }),
        }
    }
}

/// A hotel or resort project in the development pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Development {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub city: String,
    pub region: String,
    /// Room count
    pub keys: u32,
    pub status: DevelopmentStatus,
    /// Free text such as "Q1 2029"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_date: Option<String>,
    pub source: String,
    /// 0-100
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub added_at: NaiveDate,
}

/// `None` on either axis means "all".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineFilter {
    #[serde(default)]
    pub status: Option<DevelopmentStatus>,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub confirmed: usize,
    pub construction: usize,
    pub planned: usize,
    pub rumored: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Filtered, newest first
    pub developments: Vec<Development>,
    pub count: usize,
    pub total_keys: u64,
    /// Counts over the whole pipeline, independent of the filter
    pub status_counts: StatusCounts,
    /// Sorted unique regions across the whole pipeline
    pub regions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Apply status then region filters and order newest first. Developments
/// added on the same day keep their input order.
pub fn filter_developments(developments: &[Development], filter: &PipelineFilter) -> Vec<Development> {
    let mut out: Vec<Development> = developments
        .iter()
        .filter(|d| filter.status.map_or(true, |s| d.status == s))
        .filter(|d| filter.region.as_deref().map_or(true, |r| d.region == r))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.added_at.cmp(&a.added_at));
    out
}

pub fn summarize_pipeline(developments: &[Development], filter: &PipelineFilter) -> PipelineSummary {
    let filtered = filter_developments(developments, filter);
    let total_keys = filtered.iter().map(|d| u64::from(d.keys)).sum();

    let mut status_counts = StatusCounts::default();
    for d in developments {
        match d.status {
            DevelopmentStatus::Confirmed => status_counts.confirmed += 1,
            DevelopmentStatus::Construction => status_counts.construction += 1,
            DevelopmentStatus::Planned => status_counts.planned += 1,
            DevelopmentStatus::Rumored => status_counts.rumored += 1,
        }
    }

    let regions: BTreeSet<&str> = developments.iter().map(|d| d.region.as_str()).collect();

    PipelineSummary {
        count: filtered.len(),
        developments: filtered,
        total_keys,
        status_counts,
        regions: regions.into_iter().map(String::from).collect(),
    }
}

/// Reject records whose confidence lies outside 0-100.
pub fn validate_developments(developments: &[Development]) -> CharterResult<()> {
    for d in developments {
        if d.confidence > 100 {
            return Err(CharterError::InvalidInput {
                field: format!("developments[{}].confidence", d.id),
                reason: format!("{} is outside 0-100", d.confidence),
            });
        }
    }
    Ok(())
}
