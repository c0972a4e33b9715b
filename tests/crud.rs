//! End-to-end CRUD tests against a live MongoDB.
//!
//! Ignored by default; run with `cargo test -- --ignored` and point the
//! `SHELTER_TEST_*` environment variables at a deployment with a user that
//! can write to a scratch database:
//!
//! ```sh
//! SHELTER_TEST_HOST=localhost SHELTER_TEST_PORT=27017 \
//! SHELTER_TEST_USER=aacuser SHELTER_TEST_PASS=secret \
//! cargo test --test crud -- --ignored
//! ```

use bson::doc;
use std::sync::Once;
use std::time::{SystemTime, UNIX_EPOCH};

use shelter_dao::{AnimalShelter, ShelterConfig};

static INIT_LOG: Once = Once::new();

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Connects to the test deployment, binding a collection name unique to this
/// call so tests do not see each other's documents.
async fn test_shelter(tag: &str) -> AnimalShelter {
    INIT_LOG.call_once(colog::init);

    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    let config = ShelterConfig {
        host: env_or("SHELTER_TEST_HOST", "localhost"),
        port: env_or("SHELTER_TEST_PORT", "27017")
            .parse()
            .expect("SHELTER_TEST_PORT must be a port number"),
        database: env_or("SHELTER_TEST_DB", "aac_test"),
        collection: format!("animals_{}_{}", tag, nonce),
        ..ShelterConfig::default()
    };
    AnimalShelter::with_config(
        &env_or("SHELTER_TEST_USER", "aacuser"),
        &env_or("SHELTER_TEST_PASS", "aacuser"),
        config,
    )
    .await
    .expect("failed to set up test connection")
}

#[tokio::test]
#[ignore]
async fn create_then_read_round_trip() {
    let shelter = test_shelter("roundtrip").await;

    let inserted = shelter
        .create(doc! { "animal_id": "A001", "name": "Rex", "animal_type": "Dog" })
        .await
        .unwrap();
    assert!(inserted);

    let documents = shelter.read(doc! { "animal_id": "A001" }).await.unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].get_str("name").unwrap(), "Rex");
    assert_eq!(documents[0].get_str("animal_type").unwrap(), "Dog");
}

#[tokio::test]
#[ignore]
async fn read_with_no_matches_is_empty() {
    let shelter = test_shelter("nomatch").await;

    let documents = shelter
        .read(doc! { "animal_id": "no-such-animal" })
        .await
        .unwrap();
    assert!(documents.is_empty());
}

#[tokio::test]
#[ignore]
async fn update_sets_field_on_all_matches() {
    let shelter = test_shelter("update").await;

    for id in ["A010", "A011"] {
        assert!(shelter
            .create(doc! { "animal_id": id, "animal_type": "Cat", "outcome_type": "Transfer" })
            .await
            .unwrap());
    }

    let outcome = shelter
        .update(
            doc! { "animal_type": "Cat" },
            doc! { "$set": { "outcome_type": "Adoption" } },
        )
        .await
        .unwrap();
    let summary = outcome.completed().expect("update should complete");
    assert!(summary.matched_count >= 2);
    assert!(summary.modified_count >= 2);

    let documents = shelter.read(doc! { "animal_type": "Cat" }).await.unwrap();
    assert_eq!(documents.len(), 2);
    for document in documents {
        assert_eq!(document.get_str("outcome_type").unwrap(), "Adoption");
    }
}

#[tokio::test]
#[ignore]
async fn delete_removes_all_matches() {
    let shelter = test_shelter("delete").await;

    for id in ["A020", "A021"] {
        assert!(shelter
            .create(doc! { "animal_id": id, "animal_type": "Bird" })
            .await
            .unwrap());
    }

    let outcome = shelter.delete(doc! { "animal_type": "Bird" }).await.unwrap();
    let summary = outcome.completed().expect("delete should complete");
    assert!(summary.deleted_count >= 2);

    let documents = shelter.read(doc! { "animal_type": "Bird" }).await.unwrap();
    assert!(documents.is_empty());
}
