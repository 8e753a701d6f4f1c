// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adslot_domain::{AvailabilityStatus, PlacementType, PopulationDensity};

use crate::tests::helpers::create_seeded_persistence;
use crate::{
    ActiveAdData, PlacementData, PlatformSummaryData, RegionalPricingData, SqlitePersistence,
};

#[test]
fn test_list_platforms_reports_availability_counts() {
    let persistence: SqlitePersistence = create_seeded_persistence();

    let platforms: Vec<PlatformSummaryData> = persistence.list_platforms().unwrap();
    assert_eq!(platforms.len(), 4);

    let facebook: &PlatformSummaryData = platforms
        .iter()
        .find(|p| p.name == "facebook")
        .unwrap();
    assert_eq!(facebook.display_name, "Facebook");
    assert_eq!(facebook.total_placements, 4);
    // The seeded Spring Launch campaign occupies one leaderboard.
    assert_eq!(facebook.booked_placements, 1);
    assert_eq!(facebook.available_placements, 3);

    let tiktok: &PlatformSummaryData =
        platforms.iter().find(|p| p.name == "tiktok").unwrap();
    assert_eq!(tiktok.total_placements, 2);
    assert_eq!(tiktok.booked_placements, 0);
}

#[test]
fn test_platform_exists() {
    let persistence: SqlitePersistence = create_seeded_persistence();
    assert!(persistence.platform_exists("facebook").unwrap());
    assert!(!persistence.platform_exists("myspace").unwrap());
}

#[test]
fn test_list_placements_carries_booked_details() {
    let persistence: SqlitePersistence = create_seeded_persistence();

    let placements: Vec<PlacementData> = persistence.list_placements("facebook").unwrap();
    assert_eq!(placements.len(), 4);

    let booked: &PlacementData = placements
        .iter()
        .find(|p| p.availability_status == AvailabilityStatus::Booked)
        .unwrap();
    assert_eq!(booked.position_name, "top_1");
    assert_eq!(booked.placement_type, PlacementType::Leaderboard);
    assert_eq!(booked.booked_start.as_deref(), Some("2024-01-01"));
    assert_eq!(booked.booked_end.as_deref(), Some("2024-03-31"));
    assert_eq!(booked.booked_campaign.as_deref(), Some("Spring Launch"));

    let available: &PlacementData = placements
        .iter()
        .find(|p| p.position_name == "side_1")
        .unwrap();
    assert_eq!(available.availability_status, AvailabilityStatus::Available);
    assert!(available.booked_start.is_none());
    assert!(available.booked_campaign.is_none());
}

#[test]
fn test_list_placements_for_unknown_platform_is_empty() {
    let persistence: SqlitePersistence = create_seeded_persistence();
    let placements: Vec<PlacementData> = persistence.list_placements("myspace").unwrap();
    assert!(placements.is_empty());
}

#[test]
fn test_list_active_ads() {
    let persistence: SqlitePersistence = create_seeded_persistence();

    let ads: Vec<ActiveAdData> = persistence.list_active_ads("facebook").unwrap();
    assert_eq!(ads.len(), 1);

    let ad: &ActiveAdData = &ads[0];
    assert_eq!(ad.campaign_name, "Spring Launch");
    assert_eq!(ad.placement_type, PlacementType::Leaderboard);
    assert_eq!(ad.width, 728);
    assert_eq!(ad.height, 90);
    assert_eq!(ad.impressions, 45_210);
    assert_eq!(ad.clicks, 1_318);

    // Instagram has no active campaigns.
    assert!(persistence.list_active_ads("instagram").unwrap().is_empty());
}

#[test]
fn test_list_regional_pricing_unfiltered() {
    let persistence: SqlitePersistence = create_seeded_persistence();

    let regions: Vec<RegionalPricingData> =
        persistence.list_regional_pricing(None, None, None).unwrap();
    assert_eq!(regions.len(), 8);

    // Sorted by region name.
    let names: Vec<&str> = regions.iter().map(|r| r.region_name.as_str()).collect();
    let mut sorted: Vec<&str> = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_list_regional_pricing_filters_combine() {
    let persistence: SqlitePersistence = create_seeded_persistence();

    let usa: Vec<RegionalPricingData> = persistence
        .list_regional_pricing(None, Some("USA"), None)
        .unwrap();
    assert_eq!(usa.len(), 6);

    let ny: Vec<RegionalPricingData> = persistence
        .list_regional_pricing(None, Some("USA"), Some("NY"))
        .unwrap();
    assert_eq!(ny.len(), 1);
    assert_eq!(ny[0].region_name, "New York Metro");

    let none: Vec<RegionalPricingData> = persistence
        .list_regional_pricing(Some("London Metro"), Some("USA"), None)
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_get_region_by_name_is_case_insensitive() {
    let persistence: SqlitePersistence = create_seeded_persistence();

    let region: RegionalPricingData = persistence
        .get_region_by_name("new york metro")
        .unwrap()
        .unwrap();
    assert_eq!(region.region_name, "New York Metro");
    assert!((region.price_multiplier - 2.0).abs() < f64::EPSILON);
    assert_eq!(region.population_density, PopulationDensity::VeryHigh);
    assert_eq!(region.state_province.as_deref(), Some("NY"));

    assert!(persistence.get_region_by_name("Atlantis").unwrap().is_none());
}
