use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::CharterError;
use crate::CharterResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Operational,
    Construction,
    Renovation,
    Expansion,
    Confirmed,
    Planned,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectStatus::Operational => "operational",
            ProjectStatus::Construction => "construction",
            ProjectStatus::Renovation => "renovation",
            ProjectStatus::Expansion => "expansion",
            ProjectStatus::Confirmed => "confirmed",
            ProjectStatus::Planned => "planned",
        };
        f.write_str(s)
    }
}

/// World Cup 2030 venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stadium {
    pub id: String,
    pub name: String,
    pub city: String,
    /// Seats
    pub capacity: u32,
    pub status: ProjectStatus,
    /// Expected completion year as free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

/// High-speed (LGV) rail line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailLine {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub length_km: u32,
    /// Stations in travel order
    pub stations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<String>,
}

/// Water or energy asset. Capacity is display text ("300M m³/year", "580 MW").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityAsset {
    pub id: String,
    pub name: String,
    /// desalination, dam, solar, wind, hybrid, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: String,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// The four map layers of the 2030 infrastructure view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfrastructureDataset {
    pub stadiums: Vec<Stadium>,
    pub rail_lines: Vec<RailLine>,
    pub water: Vec<UtilityAsset>,
    pub energy: Vec<UtilityAsset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerCounts {
    pub stadiums: usize,
    pub rail_lines: usize,
    pub water: usize,
    pub energy: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureSummary {
    pub layer_counts: LayerCounts,
    /// Projects per status across every layer
    pub by_status: BTreeMap<ProjectStatus, usize>,
    pub total_stadium_capacity: u64,
    pub total_rail_km: u64,
    pub operational_rail_km: u64,
    /// Utility assets per `type`, water and energy combined
    pub utilities_by_type: BTreeMap<String, usize>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub fn summarize_infrastructure(dataset: &InfrastructureDataset) -> InfrastructureSummary {
    let statuses = dataset
        .stadiums
        .iter()
        .map(|s| s.status)
        .chain(dataset.rail_lines.iter().map(|l| l.status))
        .chain(dataset.water.iter().map(|w| w.status))
        .chain(dataset.energy.iter().map(|e| e.status));

    let mut by_status: BTreeMap<ProjectStatus, usize> = BTreeMap::new();
    for status in statuses {
        *by_status.entry(status).or_insert(0) += 1;
    }

    let mut utilities_by_type: BTreeMap<String, usize> = BTreeMap::new();
    for asset in dataset.water.iter().chain(&dataset.energy) {
        *utilities_by_type.entry(asset.kind.clone()).or_insert(0) += 1;
    }

    InfrastructureSummary {
        layer_counts: LayerCounts {
            stadiums: dataset.stadiums.len(),
            rail_lines: dataset.rail_lines.len(),
            water: dataset.water.len(),
            energy: dataset.energy.len(),
        },
        by_status,
        total_stadium_capacity: dataset.stadiums.iter().map(|s| u64::from(s.capacity)).sum(),
        total_rail_km: dataset.rail_lines.iter().map(|l| u64::from(l.length_km)).sum(),
        operational_rail_km: dataset
            .rail_lines
            .iter()
            .filter(|l| l.status == ProjectStatus::Operational)
            .map(|l| u64::from(l.length_km))
            .sum(),
        utilities_by_type,
    }
}

/// A rail line needs at least two stations and a non-zero length.
pub fn validate_infrastructure(dataset: &InfrastructureDataset) -> CharterResult<()> {
    for line in &dataset.rail_lines {
        if line.length_km == 0 {
            return Err(CharterError::InvalidInput {
                field: format!("rail_lines[{}].length_km", line.id),
                reason: "must be positive".into(),
            });
        }
        if line.stations.len() < 2 {
            return Err(CharterError::InvalidInput {
                field: format!("rail_lines[{}].stations", line.id),
                reason: format!("{} station(s); a line joins at least two", line.stations.len()),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, status: ProjectStatus, km: u32) -> RailLine {
        RailLine {
            id: id.into(),
            name: format!("LGV {}", id),
            status,
            length_km: km,
            stations: vec!["Casablanca".into(), "Marrakech".into()],
            completion: None,
        }
    }

    fn utility(id: &str, kind: &str, status: ProjectStatus) -> UtilityAsset {
        UtilityAsset {
            id: id.into(),
            name: id.into(),
            kind: kind.into(),
            capacity: "100 MW".into(),
            status,
            location: None,
        }
    }

    #[test]
    fn test_empty_dataset() {
        let s = summarize_infrastructure(&InfrastructureDataset::default());
        assert_eq!(s.layer_counts, LayerCounts::default());
        assert!(s.by_status.is_empty());
        assert_eq!(s.total_rail_km, 0);
    }

    #[test]
    fn test_rail_km_split_by_status() {
        let ds = InfrastructureDataset {
            rail_lines: vec![
                line("a", ProjectStatus::Operational, 350),
                line("b", ProjectStatus::Construction, 230),
            ],
            ..Default::default()
        };
        let s = summarize_infrastructure(&ds);
        assert_eq!(s.total_rail_km, 580);
        assert_eq!(s.operational_rail_km, 350);
        assert_eq!(s.by_status[&ProjectStatus::Construction], 1);
    }

    #[test]
    fn test_utilities_grouped_by_type() {
        let ds = InfrastructureDataset {
            water: vec![utility("d1", "dam", ProjectStatus::Operational), utility("d2", "dam", ProjectStatus::Construction)],
            energy: vec![utility("s1", "solar", ProjectStatus::Operational)],
            ..Default::default()
        };
        let s = summarize_infrastructure(&ds);
        assert_eq!(s.utilities_by_type["dam"], 2);
        assert_eq!(s.utilities_by_type["solar"], 1);
        assert_eq!(s.by_status[&ProjectStatus::Operational], 2);
    }

    #[test]
    fn test_validation_rejects_single_station_line() {
        let mut l = line("a", ProjectStatus::Planned, 180);
        l.stations.truncate(1);
        let ds = InfrastructureDataset { rail_lines: vec![l], ..Default::default() };
        assert!(validate_infrastructure(&ds).is_err());

        let ds = InfrastructureDataset { rail_lines: vec![line("b", ProjectStatus::Planned, 0)], ..Default::default() };
        assert!(validate_infrastructure(&ds).is_err());
    }

    #[test]
    fn test_layer_wire_names() {
        let ds: InfrastructureDataset = serde_json::from_str(
            r#"{"energy":[{"id":"n","name":"Noor","type":"solar","capacity":"580 MW","status":"operational"}]}"#,
        )
        .unwrap();
        assert_eq!(ds.energy[0].kind, "solar");
        assert!(ds.stadiums.is_empty());
    }
}
