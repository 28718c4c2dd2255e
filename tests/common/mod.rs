// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use nutriplan::config::Config;
use nutriplan::db::ProfileDb;
use nutriplan::services::ProfileService;
use serde::{Deserialize, Serialize};

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> ProfileDb {
    let config = Config::default();
    ProfileDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> ProfileDb {
    ProfileDb::new_mock()
}

/// Create a profile service backed by the emulator.
#[allow(dead_code)]
pub async fn test_service() -> ProfileService {
    ProfileService::new(test_db().await)
}

/// Minimal user document for the external `users` collection.
///
/// The crate under test only probes that collection for existence; seeding
/// it is the embedding application's job, so the tests do it raw.
#[derive(Serialize, Deserialize)]
struct SeedUser {
    email: String,
}

/// Raw emulator client with unauthenticated access, for seeding collections
/// the crate itself never writes.
#[allow(dead_code)]
async fn raw_emulator_client() -> firestore::FirestoreDb {
    let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
        Ok(gcloud_sdk::Token {
            token_type: "Bearer".to_string(),
            token: gcloud_sdk::SecretValue::new(
                "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                    .to_string()
                    .into(),
            ),
            expiry: chrono::Utc::now() + chrono::Duration::hours(1),
        })
    });

    firestore::FirestoreDb::with_options_token_source(
        firestore::FirestoreDbOptions::new(Config::default().gcp_project_id),
        gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
        gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
    )
    .await
    .expect("Failed to connect raw client to Firestore emulator")
}

/// Write a user document so `userId` existence checks pass.
#[allow(dead_code)]
pub async fn seed_user(user_id: &str) {
    let client = raw_emulator_client().await;
    let _: () = client
        .fluent()
        .update()
        .in_col("users")
        .document_id(user_id)
        .object(&SeedUser {
            email: format!("{}@example.com", user_id),
        })
        .execute()
        .await
        .expect("Failed to seed user document");
}
