// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User nutrition/fitness profile model for storage.
//!
//! The stored document shape is the contract: wire field names are camelCase
//! and defaults are materialized at write time, never at read time. Candidate
//! records arrive as [`ProfileDraft`] (every field optional) and are turned
//! into a [`UserProfile`] by [`ProfileDraft::materialize`], which rejects
//! missing required fields and fills in the documented defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default weekly weight-change rate (kg/week).
pub const DEFAULT_WEEKLY_RATE: f64 = 0.5;
/// Default macro split, in percent of daily calories.
pub const DEFAULT_PROTEIN_PCT: u8 = 30;
pub const DEFAULT_CARBS_PCT: u8 = 40;
pub const DEFAULT_FAT_PCT: u8 = 30;
/// Default diet type when the user has not picked one.
pub const DEFAULT_DIET_TYPE: &str = "standard";

// ─── Stored Document ─────────────────────────────────────────

/// Stored profile document in Firestore.
///
/// One document per profile; a user may have more than one (the store does
/// not enforce one-to-one cardinality).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Document ID (UUID v4, assigned at create time)
    pub id: String,
    /// Identifier of the owning document in the `users` collection
    pub user_id: String,
    /// Physical stats used for energy calculations elsewhere
    pub basic_info: BasicInfo,
    /// Target weight and pace
    pub weight_goal: WeightGoal,
    /// Calorie budget and macro split
    pub nutrition_goal: NutritionGoal,
    /// Diet style and food lists
    #[serde(default)]
    pub dietary_preferences: DietaryPreferences,
    /// Externally computed energy values (stored, never derived here)
    #[serde(default)]
    pub calculated_values: CalculatedValues,
    /// Whether the user finished profile setup
    #[serde(default)]
    pub setup_completed: bool,
    /// When the document was created
    pub date: DateTime<Utc>,
}

/// Physical stats section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub age: u32,
    pub gender: String,
    /// Height in cm
    pub height: f64,
    /// Current weight in kg
    pub weight: f64,
    /// Activity level label (e.g. "sedentary", "moderate", "active")
    pub activity_level: String,
}

/// Weight goal section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightGoal {
    pub goal_type: GoalType,
    /// Target weight in kg
    pub target_weight: f64,
    /// Desired weight change per week (kg)
    #[serde(default = "default_weekly_rate")]
    pub weekly_rate: f64,
}

/// Direction of the user's weight goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Lose,
    Maintain,
    Gain,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Lose => "lose",
            GoalType::Maintain => "maintain",
            GoalType::Gain => "gain",
        }
    }
}

/// Nutrition goal section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoal {
    pub daily_calories: u32,
    #[serde(default)]
    pub macro_distribution: MacroDistribution,
}

/// Percentage split of daily calories across protein/carbs/fat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroDistribution {
    #[serde(default = "default_protein_pct")]
    pub protein: u8,
    #[serde(default = "default_carbs_pct")]
    pub carbs: u8,
    #[serde(default = "default_fat_pct")]
    pub fat: u8,
}

impl Default for MacroDistribution {
    fn default() -> Self {
        Self {
            protein: DEFAULT_PROTEIN_PCT,
            carbs: DEFAULT_CARBS_PCT,
            fat: DEFAULT_FAT_PCT,
        }
    }
}

/// Dietary preferences section.
///
/// The food lists preserve insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryPreferences {
    #[serde(default = "default_diet_type")]
    pub diet_type: String,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub excluded_foods: Vec<String>,
    #[serde(default)]
    pub preferred_foods: Vec<String>,
}

impl Default for DietaryPreferences {
    fn default() -> Self {
        Self {
            diet_type: DEFAULT_DIET_TYPE.to_string(),
            allergies: Vec::new(),
            excluded_foods: Vec::new(),
            preferred_foods: Vec::new(),
        }
    }
}

/// Externally computed energy values.
///
/// All optional with no defaults: absent until the application computes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedValues {
    /// Basal Metabolic Rate (kcal/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmr: Option<f64>,
    /// Total Daily Energy Expenditure (kcal/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdee: Option<f64>,
    /// Calorie target adjusted for the weight goal (kcal/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_calories: Option<f64>,
}

fn default_weekly_rate() -> f64 {
    DEFAULT_WEEKLY_RATE
}

fn default_protein_pct() -> u8 {
    DEFAULT_PROTEIN_PCT
}

fn default_carbs_pct() -> u8 {
    DEFAULT_CARBS_PCT
}

fn default_fat_pct() -> u8 {
    DEFAULT_FAT_PCT
}

fn default_diet_type() -> String {
    DEFAULT_DIET_TYPE.to_string()
}

// ─── Candidate Records ───────────────────────────────────────

/// Candidate profile record, before validation.
///
/// Every field is optional; [`materialize`](Self::materialize) decides which
/// absences are errors and which get defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub user_id: Option<String>,
    pub basic_info: Option<BasicInfoDraft>,
    pub weight_goal: Option<WeightGoalDraft>,
    pub nutrition_goal: Option<NutritionGoalDraft>,
    pub dietary_preferences: Option<DietaryPreferencesDraft>,
    pub calculated_values: Option<CalculatedValues>,
    pub setup_completed: Option<bool>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfoDraft {
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightGoalDraft {
    pub goal_type: Option<GoalType>,
    pub target_weight: Option<f64>,
    pub weekly_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoalDraft {
    pub daily_calories: Option<u32>,
    pub macro_distribution: Option<MacroDistributionDraft>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MacroDistributionDraft {
    pub protein: Option<u8>,
    pub carbs: Option<u8>,
    pub fat: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryPreferencesDraft {
    pub diet_type: Option<String>,
    pub allergies: Option<Vec<String>>,
    pub excluded_foods: Option<Vec<String>>,
    pub preferred_foods: Option<Vec<String>>,
}

impl ProfileDraft {
    /// Decode a candidate record from JSON.
    ///
    /// Type mismatches (a string where a number is expected) and goal types
    /// outside {lose, maintain, gain} are reported as
    /// [`ValidationError::Malformed`].
    pub fn from_json(value: serde_json::Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value).map_err(|e| ValidationError::Malformed(e.to_string()))
    }

    /// Validate the draft and produce the document that will be stored.
    ///
    /// `id` is the document id assigned by the caller and `now` becomes the
    /// `date` field when the draft carries none.
    pub fn materialize(
        self,
        id: String,
        now: DateTime<Utc>,
    ) -> Result<UserProfile, ValidationError> {
        let user_id = self.user_id.ok_or(ValidationError::MissingField("userId"))?;

        let basic = self
            .basic_info
            .ok_or(ValidationError::MissingField("basicInfo"))?;
        let basic_info = BasicInfo {
            age: basic
                .age
                .ok_or(ValidationError::MissingField("basicInfo.age"))?,
            gender: basic
                .gender
                .ok_or(ValidationError::MissingField("basicInfo.gender"))?,
            height: basic
                .height
                .ok_or(ValidationError::MissingField("basicInfo.height"))?,
            weight: basic
                .weight
                .ok_or(ValidationError::MissingField("basicInfo.weight"))?,
            activity_level: basic
                .activity_level
                .ok_or(ValidationError::MissingField("basicInfo.activityLevel"))?,
        };

        let goal = self
            .weight_goal
            .ok_or(ValidationError::MissingField("weightGoal"))?;
        let weight_goal = WeightGoal {
            goal_type: goal
                .goal_type
                .ok_or(ValidationError::MissingField("weightGoal.goalType"))?,
            target_weight: goal
                .target_weight
                .ok_or(ValidationError::MissingField("weightGoal.targetWeight"))?,
            weekly_rate: goal.weekly_rate.unwrap_or(DEFAULT_WEEKLY_RATE),
        };

        let nutrition = self
            .nutrition_goal
            .ok_or(ValidationError::MissingField("nutritionGoal"))?;
        let macros = nutrition.macro_distribution.unwrap_or_default();
        let nutrition_goal = NutritionGoal {
            daily_calories: nutrition
                .daily_calories
                .ok_or(ValidationError::MissingField("nutritionGoal.dailyCalories"))?,
            macro_distribution: MacroDistribution {
                protein: macros.protein.unwrap_or(DEFAULT_PROTEIN_PCT),
                carbs: macros.carbs.unwrap_or(DEFAULT_CARBS_PCT),
                fat: macros.fat.unwrap_or(DEFAULT_FAT_PCT),
            },
        };

        let dietary_preferences = match self.dietary_preferences {
            Some(prefs) => DietaryPreferences {
                diet_type: prefs.diet_type.unwrap_or_else(default_diet_type),
                allergies: prefs.allergies.unwrap_or_default(),
                excluded_foods: prefs.excluded_foods.unwrap_or_default(),
                preferred_foods: prefs.preferred_foods.unwrap_or_default(),
            },
            None => DietaryPreferences::default(),
        };

        Ok(UserProfile {
            id,
            user_id,
            basic_info,
            weight_goal,
            nutrition_goal,
            dietary_preferences,
            calculated_values: self.calculated_values.unwrap_or_default(),
            setup_completed: self.setup_completed.unwrap_or(false),
            date: self.date.unwrap_or(now),
        })
    }
}

// ─── Partial Updates ─────────────────────────────────────────

/// Partial update for a stored profile.
///
/// Only the fields carried by the patch are replaced; absent fields are left
/// as stored and are not re-validated. The lifecycle fields (`id`, `userId`,
/// `date`) are not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub basic_info: Option<BasicInfoDraft>,
    pub weight_goal: Option<WeightGoalDraft>,
    pub nutrition_goal: Option<NutritionGoalDraft>,
    pub dietary_preferences: Option<DietaryPreferencesDraft>,
    pub calculated_values: Option<CalculatedValues>,
    pub setup_completed: Option<bool>,
}

impl ProfilePatch {
    /// Decode a patch from JSON, with the same type and enum checks as
    /// [`ProfileDraft::from_json`].
    pub fn from_json(value: serde_json::Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value).map_err(|e| ValidationError::Malformed(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.basic_info.is_none()
            && self.weight_goal.is_none()
            && self.nutrition_goal.is_none()
            && self.dietary_preferences.is_none()
            && self.calculated_values.is_none()
            && self.setup_completed.is_none()
    }
}

impl UserProfile {
    /// Apply a partial update in place, replacing only the carried fields.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(basic) = patch.basic_info {
            if let Some(age) = basic.age {
                self.basic_info.age = age;
            }
            if let Some(gender) = basic.gender {
                self.basic_info.gender = gender;
            }
            if let Some(height) = basic.height {
                self.basic_info.height = height;
            }
            if let Some(weight) = basic.weight {
                self.basic_info.weight = weight;
            }
            if let Some(level) = basic.activity_level {
                self.basic_info.activity_level = level;
            }
        }

        if let Some(goal) = patch.weight_goal {
            if let Some(goal_type) = goal.goal_type {
                self.weight_goal.goal_type = goal_type;
            }
            if let Some(target) = goal.target_weight {
                self.weight_goal.target_weight = target;
            }
            if let Some(rate) = goal.weekly_rate {
                self.weight_goal.weekly_rate = rate;
            }
        }

        if let Some(nutrition) = patch.nutrition_goal {
            if let Some(calories) = nutrition.daily_calories {
                self.nutrition_goal.daily_calories = calories;
            }
            if let Some(macros) = nutrition.macro_distribution {
                if let Some(protein) = macros.protein {
                    self.nutrition_goal.macro_distribution.protein = protein;
                }
                if let Some(carbs) = macros.carbs {
                    self.nutrition_goal.macro_distribution.carbs = carbs;
                }
                if let Some(fat) = macros.fat {
                    self.nutrition_goal.macro_distribution.fat = fat;
                }
            }
        }

        if let Some(prefs) = patch.dietary_preferences {
            if let Some(diet_type) = prefs.diet_type {
                self.dietary_preferences.diet_type = diet_type;
            }
            if let Some(allergies) = prefs.allergies {
                self.dietary_preferences.allergies = allergies;
            }
            if let Some(excluded) = prefs.excluded_foods {
                self.dietary_preferences.excluded_foods = excluded;
            }
            if let Some(preferred) = prefs.preferred_foods {
                self.dietary_preferences.preferred_foods = preferred;
            }
        }

        if let Some(values) = patch.calculated_values {
            self.calculated_values = values;
        }

        if let Some(done) = patch.setup_completed {
            self.setup_completed = done;
        }
    }
}
