// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use adslot_persistence::SqlitePersistence;

use crate::auth::{AuthenticatedActor, Role};
use crate::request_response::CreateBookingRequest;

pub fn create_seeded_persistence() -> SqlitePersistence {
    let persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    persistence.seed_demo_data().unwrap();
    persistence
}

pub fn demo_advertiser_actor(persistence: &SqlitePersistence) -> AuthenticatedActor {
    let advertiser = persistence
        .get_advertiser_by_email("demo@adslot.test")
        .unwrap()
        .unwrap();
    AuthenticatedActor::new(advertiser.advertiser_id, advertiser.email, Role::Advertiser)
}

pub fn demo_admin_actor(persistence: &SqlitePersistence) -> AuthenticatedActor {
    let admin = persistence
        .get_advertiser_by_email("admin@adslot.test")
        .unwrap()
        .unwrap();
    AuthenticatedActor::new(admin.advertiser_id, admin.email, Role::Admin)
}

pub fn create_booking_request(placement_id: i64) -> CreateBookingRequest {
    CreateBookingRequest {
        placement_id,
        campaign_name: String::from("Summer Push"),
        ad_image_url: String::from("https://cdn.adslot.test/creatives/summer.png"),
        ad_link_url: None,
        region: String::from("Chicago Metro"),
        postal_code: None,
        start_date: String::from("2024-05-01"),
        end_date: String::from("2024-06-30"),
    }
}
