#![cfg(feature = "infrastructure")]

use charter_intel_core::infrastructure::assets::{
    summarize_infrastructure, validate_infrastructure, InfrastructureDataset, LayerCounts, ProjectStatus,
};
use pretty_assertions::assert_eq;

fn dataset() -> InfrastructureDataset {
    serde_json::from_str(include_str!("../../../data/infrastructure.json")).unwrap()
}

#[test]
fn test_sample_dataset_validates() {
    assert!(validate_infrastructure(&dataset()).is_ok());
}

#[test]
fn test_sample_layer_counts() {
    let s = summarize_infrastructure(&dataset());
    assert_eq!(
        s.layer_counts,
        LayerCounts {
            stadiums: 6,
            rail_lines: 3,
            water: 3,
            energy: 3,
        }
    );
}

#[test]
fn test_sample_rail_and_stadium_totals() {
    let s = summarize_infrastructure(&dataset());
    assert_eq!(s.total_rail_km, 760);
    assert_eq!(s.operational_rail_km, 350);
    assert_eq!(s.total_stadium_capacity, 419000);
}

#[test]
fn test_sample_status_counts() {
    let s = summarize_infrastructure(&dataset());
    let counts: Vec<(ProjectStatus, usize)> = s.by_status.into_iter().collect();
    assert_eq!(
        counts,
        vec![
            (ProjectStatus::Operational, 4),
            (ProjectStatus::Construction, 5),
            (ProjectStatus::Renovation, 1),
            (ProjectStatus::Expansion, 1),
            (ProjectStatus::Confirmed, 3),
            (ProjectStatus::Planned, 1),
        ]
    );
}

#[test]
fn test_sample_utilities_by_type() {
    let s = summarize_infrastructure(&dataset());
    let kinds: Vec<(&str, usize)> = s.utilities_by_type.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(
        kinds,
        vec![("dam", 2), ("desalination", 1), ("hybrid", 1), ("solar", 1), ("wind", 1)]
    );
}
