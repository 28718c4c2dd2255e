// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile service - the write and read paths for profile documents.
//!
//! Validation happens here, before anything touches the store: a candidate
//! record must pass the required-field checks, and its `userId` must name an
//! existing document in the `users` collection. The store itself enforces no
//! referential integrity.

use crate::db::ProfileDb;
use crate::error::{AppError, Result};
use crate::models::{CalculatedValues, ProfileDraft, ProfilePatch, UserProfile};

/// Service for creating, reading, updating, and deleting profile documents.
#[derive(Clone)]
pub struct ProfileService {
    db: ProfileDb,
}

impl ProfileService {
    pub fn new(db: ProfileDb) -> Self {
        Self { db }
    }

    /// Create a profile from a candidate record.
    ///
    /// Validates the draft, checks that the referenced user exists, assigns a
    /// document id, materializes defaults (including `date` = now when the
    /// draft carries none), and inserts. Returns the stored document.
    pub async fn create_profile(&self, draft: ProfileDraft) -> Result<UserProfile> {
        // The existence check needs userId before full validation runs
        let user_id = draft
            .user_id
            .clone()
            .ok_or(crate::error::ValidationError::MissingField("userId"))?;

        if !self.db.user_exists(&user_id).await? {
            return Err(AppError::NotFound(format!("user {} not found", user_id)));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let profile = draft.materialize(id, chrono::Utc::now())?;

        self.db.insert_profile(&profile).await?;

        tracing::info!(
            profile_id = %profile.id,
            user_id = %profile.user_id,
            goal_type = profile.weight_goal.goal_type.as_str(),
            "Profile created"
        );

        Ok(profile)
    }

    /// Get a profile by its document id.
    pub async fn get_profile(&self, profile_id: &str) -> Result<Option<UserProfile>> {
        self.db.get_profile(profile_id).await
    }

    /// Get all profiles for a user, newest first.
    pub async fn profiles_for_user(&self, user_id: &str) -> Result<Vec<UserProfile>> {
        self.db.get_profiles_for_user(user_id).await
    }

    /// Apply a partial update to a stored profile.
    ///
    /// Fetch-modify-write: only the fields carried by the patch are replaced,
    /// everything else is preserved as stored. Returns the updated document.
    pub async fn update_profile(
        &self,
        profile_id: &str,
        patch: ProfilePatch,
    ) -> Result<UserProfile> {
        let mut profile = self
            .db
            .get_profile(profile_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("profile {} not found", profile_id)))?;

        if patch.is_empty() {
            return Ok(profile);
        }

        profile.apply(patch);
        self.db.set_profile(&profile).await?;

        tracing::debug!(profile_id = %profile.id, "Profile updated");

        Ok(profile)
    }

    /// Store externally recomputed BMR/TDEE/goal-calorie values.
    ///
    /// The computation itself lives in the calling application; this layer
    /// only persists the results.
    pub async fn record_calculated_values(
        &self,
        profile_id: &str,
        values: CalculatedValues,
    ) -> Result<UserProfile> {
        self.update_profile(
            profile_id,
            ProfilePatch {
                calculated_values: Some(values),
                ..Default::default()
            },
        )
        .await
    }

    /// Mark profile setup as completed.
    pub async fn complete_setup(&self, profile_id: &str) -> Result<UserProfile> {
        let profile = self
            .update_profile(
                profile_id,
                ProfilePatch {
                    setup_completed: Some(true),
                    ..Default::default()
                },
            )
            .await?;

        tracing::info!(profile_id = %profile.id, user_id = %profile.user_id, "Profile setup completed");

        Ok(profile)
    }

    /// Delete a profile by its document id.
    pub async fn delete_profile(&self, profile_id: &str) -> Result<()> {
        self.db.delete_profile(profile_id).await?;
        tracing::info!(profile_id, "Profile deleted");
        Ok(())
    }

    /// Delete every profile belonging to a user.
    ///
    /// Hook for the application's account-deletion flow. Returns the number
    /// of documents deleted.
    pub async fn delete_user_profiles(&self, user_id: &str) -> Result<usize> {
        let deleted = self.db.delete_profiles_for_user(user_id).await?;
        tracing::info!(user_id, deleted, "User profile deletion complete");
        Ok(deleted)
    }
}
