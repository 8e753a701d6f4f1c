// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{NewBookingData, SqlitePersistence};

pub fn create_seeded_persistence() -> SqlitePersistence {
    let persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    persistence.seed_demo_data().unwrap();
    persistence
}

pub fn demo_advertiser_id(persistence: &SqlitePersistence) -> i64 {
    persistence
        .get_advertiser_by_email("demo@adslot.test")
        .unwrap()
        .unwrap()
        .advertiser_id
}

pub fn create_test_booking(placement_id: i64, advertiser_id: i64) -> NewBookingData {
    NewBookingData {
        placement_id,
        advertiser_id,
        campaign_name: String::from("Test Campaign"),
        ad_image_url: String::from("https://cdn.adslot.test/creatives/test.png"),
        ad_link_url: None,
        region: String::from("Chicago Metro"),
        postal_code: None,
        start_date: String::from("2024-05-01"),
        end_date: String::from("2024-06-30"),
        monthly_price: 180.0,
        total_price: 360.0,
    }
}
