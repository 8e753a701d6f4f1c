// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adslot_domain::{AvailabilityStatus, BookingStatus};

use crate::tests::helpers::{create_seeded_persistence, create_test_booking, demo_advertiser_id};
use crate::{BookingData, PersistenceError, PlacementData, SqlitePersistence};

fn available_placement_id(persistence: &SqlitePersistence, platform: &str) -> i64 {
    persistence
        .list_placements(platform)
        .unwrap()
        .into_iter()
        .find(|p| p.availability_status == AvailabilityStatus::Available)
        .unwrap()
        .placement_id
}

#[test]
fn test_insert_booking_defaults_to_pending() {
    let persistence: SqlitePersistence = create_seeded_persistence();
    let advertiser_id: i64 = demo_advertiser_id(&persistence);
    let placement_id: i64 = available_placement_id(&persistence, "instagram");

    let booking: BookingData = persistence
        .insert_booking(&create_test_booking(placement_id, advertiser_id))
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.placement_id, placement_id);
    assert_eq!(booking.advertiser_id, advertiser_id);
    assert_eq!(booking.platform_name, "instagram");
    assert_eq!(booking.campaign_name, "Test Campaign");
    assert_eq!(booking.impressions, 0);
    assert_eq!(booking.clicks, 0);
    assert!((booking.monthly_price - 180.0).abs() < f64::EPSILON);
    assert!((booking.total_price - 360.0).abs() < f64::EPSILON);
}

#[test]
fn test_insert_booking_occupies_placement() {
    let persistence: SqlitePersistence = create_seeded_persistence();
    let advertiser_id: i64 = demo_advertiser_id(&persistence);
    let placement_id: i64 = available_placement_id(&persistence, "tiktok");

    persistence
        .insert_booking(&create_test_booking(placement_id, advertiser_id))
        .unwrap();

    let placement: PlacementData = persistence.get_placement(placement_id).unwrap().unwrap();
    assert_eq!(placement.availability_status, AvailabilityStatus::Booked);
    assert_eq!(placement.booked_campaign.as_deref(), Some("Test Campaign"));
}

#[test]
fn test_terminal_status_releases_placement() {
    let persistence: SqlitePersistence = create_seeded_persistence();
    let advertiser_id: i64 = demo_advertiser_id(&persistence);
    let placement_id: i64 = available_placement_id(&persistence, "tiktok");

    let booking: BookingData = persistence
        .insert_booking(&create_test_booking(placement_id, advertiser_id))
        .unwrap();

    persistence
        .update_booking_status(booking.booking_id, BookingStatus::Rejected)
        .unwrap();

    let placement: PlacementData = persistence.get_placement(placement_id).unwrap().unwrap();
    assert_eq!(placement.availability_status, AvailabilityStatus::Available);
    assert!(placement.booked_campaign.is_none());
}

#[test]
fn test_list_bookings_is_most_recent_first() {
    let persistence: SqlitePersistence = create_seeded_persistence();
    let advertiser_id: i64 = demo_advertiser_id(&persistence);

    let first_placement: i64 = available_placement_id(&persistence, "instagram");
    let first: BookingData = persistence
        .insert_booking(&create_test_booking(first_placement, advertiser_id))
        .unwrap();

    let second_placement: i64 = available_placement_id(&persistence, "tiktok");
    let second: BookingData = persistence
        .insert_booking(&create_test_booking(second_placement, advertiser_id))
        .unwrap();

    let bookings: Vec<BookingData> = persistence
        .list_bookings_by_advertiser(advertiser_id)
        .unwrap();
    // Seeded Spring Launch plus the two above.
    assert_eq!(bookings.len(), 3);
    assert_eq!(bookings[0].booking_id, second.booking_id);
    assert_eq!(bookings[1].booking_id, first.booking_id);
}

#[test]
fn test_update_booking_status_touches_row() {
    let persistence: SqlitePersistence = create_seeded_persistence();
    let advertiser_id: i64 = demo_advertiser_id(&persistence);
    let placement_id: i64 = available_placement_id(&persistence, "instagram");

    let booking: BookingData = persistence
        .insert_booking(&create_test_booking(placement_id, advertiser_id))
        .unwrap();

    persistence
        .update_booking_status(booking.booking_id, BookingStatus::Approved)
        .unwrap();

    let updated: BookingData = persistence
        .get_booking(booking.booking_id)
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, BookingStatus::Approved);
}

#[test]
fn test_update_missing_booking_is_not_found() {
    let persistence: SqlitePersistence = create_seeded_persistence();
    let result = persistence.update_booking_status(9_999, BookingStatus::Approved);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_get_missing_booking_returns_none() {
    let persistence: SqlitePersistence = create_seeded_persistence();
    assert!(persistence.get_booking(9_999).unwrap().is_none());
}
