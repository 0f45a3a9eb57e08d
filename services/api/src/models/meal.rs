//! Meal models and the diet metrics aggregation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Meal entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    pub created_at: DateTime<Utc>,
    /// Present in the schema but never populated by the creation flow
    pub session_id: Option<Uuid>,
}

/// Request for meal creation
#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
}

/// Request for meal update; `id`, `user_id`, and `created_at` are immutable
#[derive(Debug, Deserialize)]
pub struct UpdateMealRequest {
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
}

/// Response for the meal listing
#[derive(Serialize)]
pub struct MealsResponse {
    pub meals: Vec<Meal>,
}

/// Response for a single meal fetch
#[derive(Serialize)]
pub struct MealResponse {
    pub meal: Meal,
}

/// Aggregate diet metrics for one user's meal history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealMetrics {
    pub total_meals: usize,
    pub total_meals_on_diet: usize,
    pub total_meals_off_diet: usize,
    pub best_on_diet_sequence: usize,
}

impl MealMetrics {
    /// Compute the metrics from the per-meal diet flags, ordered by
    /// `created_at` descending.
    ///
    /// The best sequence is the longest run of consecutive on-diet meals; a
    /// single pass keeps a running streak counter that resets on every
    /// off-diet meal.
    pub fn from_diet_flags(flags: &[bool]) -> Self {
        let mut on_diet = 0;
        let mut best = 0;
        let mut current = 0;

        for &is_on_diet in flags {
            if is_on_diet {
                on_diet += 1;
                current += 1;
                if current > best {
                    best = current;
                }
            } else {
                current = 0;
            }
        }

        Self {
            total_meals: flags.len(),
            total_meals_on_diet: on_diet,
            total_meals_off_diet: flags.len() - on_diet,
            best_on_diet_sequence: best,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_over_empty_history() {
        let metrics = MealMetrics::from_diet_flags(&[]);
        assert_eq!(metrics.total_meals, 0);
        assert_eq!(metrics.total_meals_on_diet, 0);
        assert_eq!(metrics.total_meals_off_diet, 0);
        assert_eq!(metrics.best_on_diet_sequence, 0);
    }

    #[test]
    fn test_best_sequence_resets_on_off_diet_meal() {
        let metrics = MealMetrics::from_diet_flags(&[true, true, false, true]);
        assert_eq!(metrics.total_meals, 4);
        assert_eq!(metrics.total_meals_on_diet, 3);
        assert_eq!(metrics.total_meals_off_diet, 1);
        assert_eq!(metrics.best_on_diet_sequence, 2);
    }

    #[test]
    fn test_best_sequence_picks_longest_run() {
        let metrics =
            MealMetrics::from_diet_flags(&[true, false, true, true, true, false, true, true]);
        assert_eq!(metrics.best_on_diet_sequence, 3);
    }

    #[test]
    fn test_best_sequence_counts_trailing_run() {
        let metrics = MealMetrics::from_diet_flags(&[false, false, true, true]);
        assert_eq!(metrics.best_on_diet_sequence, 2);
    }

    #[test]
    fn test_all_off_diet_has_zero_sequence() {
        let metrics = MealMetrics::from_diet_flags(&[false, false, false]);
        assert_eq!(metrics.total_meals, 3);
        assert_eq!(metrics.total_meals_on_diet, 0);
        assert_eq!(metrics.total_meals_off_diet, 3);
        assert_eq!(metrics.best_on_diet_sequence, 0);
    }

    #[test]
    fn test_on_and_off_diet_counts_always_sum_to_total() {
        let patterns: [&[bool]; 4] = [
            &[],
            &[true],
            &[true, false, true, true, false],
            &[false, true, false],
        ];

        for flags in patterns {
            let metrics = MealMetrics::from_diet_flags(flags);
            assert_eq!(
                metrics.total_meals_on_diet + metrics.total_meals_off_diet,
                metrics.total_meals
            );
        }
    }

    #[test]
    fn test_metrics_serialize_with_camel_case_keys() {
        let metrics = MealMetrics::from_diet_flags(&[true, false]);
        let json = serde_json::to_value(&metrics).unwrap();

        assert_eq!(json["totalMeals"], 2);
        assert_eq!(json["totalMealsOnDiet"], 1);
        assert_eq!(json["totalMealsOffDiet"], 1);
        assert_eq!(json["bestOnDietSequence"], 1);
    }
}
