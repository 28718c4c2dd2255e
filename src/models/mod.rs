// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod profile;

pub use profile::{
    BasicInfo, BasicInfoDraft, CalculatedValues, DietaryPreferences, DietaryPreferencesDraft,
    GoalType, MacroDistribution, MacroDistributionDraft, NutritionGoal, NutritionGoalDraft,
    ProfileDraft, ProfilePatch, UserProfile, WeightGoal, WeightGoalDraft,
};
