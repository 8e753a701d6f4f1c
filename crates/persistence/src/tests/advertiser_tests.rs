// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_seeded_persistence;
use crate::{AdvertiserData, SessionData, SqlitePersistence};

#[test]
fn test_create_and_lookup_advertiser() {
    let persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    let advertiser_id: i64 = persistence
        .create_advertiser("buyer@example.com", "Buyer", "hunter2hunter2", "advertiser")
        .unwrap();

    let advertiser: AdvertiserData = persistence
        .get_advertiser_by_email("buyer@example.com")
        .unwrap()
        .unwrap();
    assert_eq!(advertiser.advertiser_id, advertiser_id);
    assert_eq!(advertiser.display_name, "Buyer");
    assert_eq!(advertiser.role, "advertiser");
    assert!(!advertiser.is_disabled);

    // The stored hash verifies against the original password.
    assert!(bcrypt::verify("hunter2hunter2", &advertiser.password_hash).unwrap());
    assert!(!bcrypt::verify("wrong-password", &advertiser.password_hash).unwrap());
}

#[test]
fn test_email_lookup_is_case_insensitive() {
    let persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_advertiser("Buyer@Example.com", "Buyer", "hunter2hunter2", "advertiser")
        .unwrap();

    let advertiser: Option<AdvertiserData> = persistence
        .get_advertiser_by_email("buyer@example.com")
        .unwrap();
    assert!(advertiser.is_some());
}

#[test]
fn test_duplicate_email_is_rejected() {
    let persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_advertiser("buyer@example.com", "Buyer", "hunter2hunter2", "advertiser")
        .unwrap();

    let result = persistence.create_advertiser(
        "BUYER@EXAMPLE.COM",
        "Other Buyer",
        "hunter2hunter2",
        "advertiser",
    );
    assert!(result.is_err());
}

#[test]
fn test_session_lifecycle() {
    let persistence: SqlitePersistence = create_seeded_persistence();
    let advertiser_id: i64 = persistence
        .get_advertiser_by_email("demo@adslot.test")
        .unwrap()
        .unwrap()
        .advertiser_id;

    persistence
        .create_session("token-abc", advertiser_id, "2099-01-01T00:00:00Z")
        .unwrap();

    let session: SessionData = persistence
        .get_session_by_token("token-abc")
        .unwrap()
        .unwrap();
    assert_eq!(session.advertiser_id, advertiser_id);
    assert_eq!(session.expires_at, "2099-01-01T00:00:00Z");

    persistence
        .update_session_activity(session.session_id)
        .unwrap();

    persistence.delete_session("token-abc").unwrap();
    assert!(
        persistence
            .get_session_by_token("token-abc")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_unknown_session_token_returns_none() {
    let persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    assert!(
        persistence
            .get_session_by_token("no-such-token")
            .unwrap()
            .is_none()
    );
}
