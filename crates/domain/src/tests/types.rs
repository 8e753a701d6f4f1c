// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AvailabilityStatus, PlacementType, PopulationDensity};
use std::str::FromStr;

#[test]
fn test_placement_type_round_trip() {
    let types: [PlacementType; 4] = [
        PlacementType::Leaderboard,
        PlacementType::Skyscraper,
        PlacementType::Rectangle,
        PlacementType::Sidebar,
    ];
    for placement_type in types {
        let parsed: PlacementType = PlacementType::from_str(placement_type.as_str()).unwrap();
        assert_eq!(parsed, placement_type);
    }
}

#[test]
fn test_placement_type_rejects_unknown_value() {
    assert!(PlacementType::from_str("banner").is_err());
    assert!(PlacementType::from_str("Leaderboard").is_err());
}

#[test]
fn test_availability_status_round_trip() {
    assert_eq!(
        AvailabilityStatus::from_str("available").unwrap(),
        AvailabilityStatus::Available
    );
    assert_eq!(
        AvailabilityStatus::from_str("booked").unwrap(),
        AvailabilityStatus::Booked
    );
    assert!(AvailabilityStatus::from_str("reserved").is_err());
}

#[test]
fn test_population_density_round_trip() {
    let densities: [PopulationDensity; 4] = [
        PopulationDensity::Low,
        PopulationDensity::Medium,
        PopulationDensity::High,
        PopulationDensity::VeryHigh,
    ];
    for density in densities {
        let parsed: PopulationDensity =
            PopulationDensity::from_str(density.as_str()).unwrap();
        assert_eq!(parsed, density);
    }
}

#[test]
fn test_population_density_wire_format() {
    assert_eq!(PopulationDensity::VeryHigh.as_str(), "very_high");
    let json: String = serde_json::to_string(&PopulationDensity::VeryHigh).unwrap();
    assert_eq!(json, "\"very_high\"");
}

#[test]
fn test_placement_type_display_matches_wire_format() {
    assert_eq!(PlacementType::Skyscraper.to_string(), "skyscraper");
    assert_eq!(AvailabilityStatus::Booked.to_string(), "booked");
}
