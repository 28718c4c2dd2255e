// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Profiles (nutrition/fitness profile documents)
//! - Users (existence probes against the external `users` collection)

use crate::db::collections;
use crate::error::AppError;
use crate::models::UserProfile;
use futures_util::{stream, StreamExt};

const MAX_CONCURRENT_DB_OPS: usize = 50;

/// Firestore database client.
#[derive(Clone)]
pub struct ProfileDb {
    client: Option<firestore::FirestoreDb>,
}

impl ProfileDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
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

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Profile Operations ──────────────────────────────────────

    /// Get a profile document by its document id.
    pub async fn get_profile(&self, profile_id: &str) -> Result<Option<UserProfile>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USER_PROFILES)
            .obj()
            .one(profile_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get all profile documents for a user, newest first.
    ///
    /// The store does not enforce one profile per user; callers that assume
    /// one-to-one cardinality should take the head of the result.
    pub async fn get_profiles_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<UserProfile>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(collections::USER_PROFILES)
            .filter(move |q| q.field("userId").eq(user_id.clone()))
            .order_by([("date", firestore::FirestoreQueryDirection::Descending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a profile document. Fails if the document id already exists.
    pub async fn insert_profile(&self, profile: &UserProfile) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::USER_PROFILES)
            .document_id(&profile.id)
            .object(profile)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Replace a stored profile document (the write half of fetch-modify-write).
    pub async fn set_profile(&self, profile: &UserProfile) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USER_PROFILES)
            .document_id(&profile.id)
            .object(profile)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a profile document.
    pub async fn delete_profile(&self, profile_id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::USER_PROFILES)
            .document_id(profile_id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete all profile documents for a user.
    ///
    /// Account-deletion hook for the calling application. Uses concurrent
    /// deletes with a limit to avoid overloading Firestore.
    ///
    /// Returns the number of documents deleted.
    pub async fn delete_profiles_for_user(&self, user_id: &str) -> Result<usize, AppError> {
        let profiles = self.get_profiles_for_user(user_id).await?;
        let count = profiles.len();
        let client = self.get_client()?;

        stream::iter(profiles)
            .map(|profile| async move {
                client
                    .fluent()
                    .delete()
                    .from(collections::USER_PROFILES)
                    .document_id(&profile.id)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;

                Ok::<_, AppError>(())
            })
            .buffer_unordered(MAX_CONCURRENT_DB_OPS)
            .collect::<Vec<Result<(), AppError>>>()
            .await
            .into_iter()
            .collect::<Result<Vec<()>, AppError>>()?;

        tracing::debug!(user_id, count, "Deleted profile documents");

        Ok(count)
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Check whether a document exists in the `users` collection.
    ///
    /// The user entity is external: we store its identifier only and never
    /// deserialize, embed, or cascade to it.
    pub async fn user_exists(&self, user_id: &str) -> Result<bool, AppError> {
        let doc: Option<firestore::FirestoreDocument> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(doc.is_some())
    }
}
