// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Validation tests for candidate profile records at the JSON boundary.
//!
//! These exercise the write-path rules without a database: decoding a
//! candidate record and materializing it into a storable document.

use chrono::{TimeZone, Utc};
use nutriplan::error::ValidationError;
use nutriplan::models::{GoalType, ProfileDraft};
use serde_json::json;

fn test_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

/// Minimal candidate record, as a web client would submit it.
fn minimal_candidate() -> serde_json::Value {
    json!({
        "userId": "u1",
        "basicInfo": {
            "age": 30,
            "gender": "female",
            "height": 165,
            "weight": 60,
            "activityLevel": "moderate"
        },
        "weightGoal": { "goalType": "lose", "targetWeight": 55 },
        "nutritionGoal": { "dailyCalories": 1800 }
    })
}

#[test]
fn test_minimal_candidate_succeeds_with_defaults() {
    let draft = ProfileDraft::from_json(minimal_candidate()).unwrap();
    let profile = draft
        .materialize("p1".to_string(), test_now())
        .expect("minimal valid candidate should be accepted");

    assert_eq!(profile.user_id, "u1");
    assert_eq!(profile.basic_info.age, 30);
    assert_eq!(profile.basic_info.gender, "female");
    assert_eq!(profile.weight_goal.goal_type, GoalType::Lose);
    assert_eq!(profile.weight_goal.target_weight, 55.0);

    // Defaults materialized at write time
    assert_eq!(profile.weight_goal.weekly_rate, 0.5);
    assert_eq!(profile.nutrition_goal.macro_distribution.protein, 30);
    assert_eq!(profile.nutrition_goal.macro_distribution.carbs, 40);
    assert_eq!(profile.nutrition_goal.macro_distribution.fat, 30);
    assert_eq!(profile.dietary_preferences.diet_type, "standard");
    assert!(!profile.setup_completed);
    assert_eq!(profile.date, test_now());
    assert_eq!(profile.calculated_values.bmr, None);
    assert_eq!(profile.calculated_values.tdee, None);
    assert_eq!(profile.calculated_values.goal_calories, None);
}

#[test]
fn test_missing_required_fields_rejected() {
    // Remove one required leaf at a time and expect the write path to refuse.
    let required_paths = [
        "userId",
        "basicInfo.age",
        "basicInfo.gender",
        "basicInfo.height",
        "basicInfo.weight",
        "basicInfo.activityLevel",
        "weightGoal.goalType",
        "weightGoal.targetWeight",
        "nutritionGoal.dailyCalories",
    ];

    for path in required_paths {
        let mut candidate = minimal_candidate();
        remove_path(&mut candidate, path);

        let draft = ProfileDraft::from_json(candidate).unwrap();
        let err = draft
            .materialize("p1".to_string(), test_now())
            .expect_err("candidate missing a required field should be rejected");

        match err {
            ValidationError::MissingField(reported) => {
                assert_eq!(reported, path, "wrong field reported")
            }
            other => panic!("expected MissingField for {}, got {:?}", path, other),
        }
    }
}

#[test]
fn test_missing_required_section_rejected() {
    for section in ["basicInfo", "weightGoal", "nutritionGoal"] {
        let mut candidate = minimal_candidate();
        candidate.as_object_mut().unwrap().remove(section);

        let draft = ProfileDraft::from_json(candidate).unwrap();
        let err = draft
            .materialize("p1".to_string(), test_now())
            .expect_err("candidate missing a required section should be rejected");

        assert!(matches!(err, ValidationError::MissingField(f) if f == section));
    }
}

#[test]
fn test_goal_type_outside_enum_rejected() {
    for bad in ["bulk", "cut", "LOSE", ""] {
        let mut candidate = minimal_candidate();
        candidate["weightGoal"]["goalType"] = json!(bad);

        let err = ProfileDraft::from_json(candidate)
            .expect_err("goal type outside {lose, maintain, gain} should be rejected");
        assert!(matches!(err, ValidationError::Malformed(_)));
    }
}

#[test]
fn test_goal_type_enum_values_accepted() {
    for (value, expected) in [
        ("lose", GoalType::Lose),
        ("maintain", GoalType::Maintain),
        ("gain", GoalType::Gain),
    ] {
        let mut candidate = minimal_candidate();
        candidate["weightGoal"]["goalType"] = json!(value);

        let profile = ProfileDraft::from_json(candidate)
            .unwrap()
            .materialize("p1".to_string(), test_now())
            .unwrap();
        assert_eq!(profile.weight_goal.goal_type, expected);
    }
}

#[test]
fn test_type_mismatch_rejected() {
    // A string where a number is expected
    let mut candidate = minimal_candidate();
    candidate["basicInfo"]["age"] = json!("thirty");
    assert!(matches!(
        ProfileDraft::from_json(candidate),
        Err(ValidationError::Malformed(_))
    ));

    // A number where a string is expected
    let mut candidate = minimal_candidate();
    candidate["basicInfo"]["gender"] = json!(1);
    assert!(matches!(
        ProfileDraft::from_json(candidate),
        Err(ValidationError::Malformed(_))
    ));

    // A scalar where a sequence is expected
    let mut candidate = minimal_candidate();
    candidate["dietaryPreferences"] = json!({ "allergies": "peanuts" });
    assert!(matches!(
        ProfileDraft::from_json(candidate),
        Err(ValidationError::Malformed(_))
    ));
}

#[test]
fn test_null_required_field_rejected() {
    // Explicit null counts as absent, not as a value
    let mut candidate = minimal_candidate();
    candidate["basicInfo"]["height"] = json!(null);

    let draft = ProfileDraft::from_json(candidate).unwrap();
    let err = draft
        .materialize("p1".to_string(), test_now())
        .expect_err("null in a required field should be rejected");
    assert!(matches!(err, ValidationError::MissingField("basicInfo.height")));
}

#[test]
fn test_fully_populated_candidate_keeps_everything() {
    let candidate = json!({
        "userId": "u2",
        "basicInfo": {
            "age": 42,
            "gender": "male",
            "height": 180.5,
            "weight": 88.2,
            "activityLevel": "active"
        },
        "weightGoal": { "goalType": "gain", "targetWeight": 92.0, "weeklyRate": 0.25 },
        "nutritionGoal": {
            "dailyCalories": 3100,
            "macroDistribution": { "protein": 35, "carbs": 45, "fat": 20 }
        },
        "dietaryPreferences": {
            "dietType": "vegetarian",
            "allergies": ["peanuts", "shellfish"],
            "excludedFoods": ["liver"],
            "preferredFoods": ["tofu", "oats", "lentils"]
        },
        "calculatedValues": { "bmr": 1850.0, "tdee": 2870.0, "goalCalories": 3120.0 },
        "setupCompleted": true,
        "date": "2024-06-01T08:30:00Z"
    });

    let profile = ProfileDraft::from_json(candidate)
        .unwrap()
        .materialize("p2".to_string(), test_now())
        .unwrap();

    assert_eq!(profile.weight_goal.weekly_rate, 0.25);
    assert_eq!(profile.nutrition_goal.macro_distribution.protein, 35);
    assert_eq!(profile.dietary_preferences.diet_type, "vegetarian");
    // Sequence fields keep their insertion order
    assert_eq!(
        profile.dietary_preferences.preferred_foods,
        vec!["tofu", "oats", "lentils"]
    );
    assert_eq!(profile.calculated_values.tdee, Some(2870.0));
    assert!(profile.setup_completed);
    // Supplied date wins over the insertion timestamp
    assert_eq!(
        profile.date,
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
    );
}

/// Remove a dotted path ("section.leaf" or "leaf") from a JSON object.
fn remove_path(value: &mut serde_json::Value, path: &str) {
    match path.split_once('.') {
        Some((section, leaf)) => {
            value[section].as_object_mut().unwrap().remove(leaf);
        }
        None => {
            value.as_object_mut().unwrap().remove(path);
        }
    }
}
