use crate::domain::recipe::{
    entities::{DietaryInfo, RawRecipeRecord},
    normalizer::{recipe_difficulty, resolve_dietary_info},
    value_objects::{DietaryPreference, RecipeFilters},
};

/// Whether a record survives the user's filters.
///
/// Every sub-predicate must hold. Missing upstream data never rejects a
/// record on its own: an absent calorie count passes the calorie limit.
pub fn matches_filters(record: &RawRecipeRecord, filters: &RecipeFilters) -> bool {
    matches_dietary(record, filters)
        && matches_time(record, filters)
        && matches_difficulty(record, filters)
        && matches_calories(record, filters)
}

pub fn preference_satisfied(preference: &DietaryPreference, info: &DietaryInfo) -> bool {
    match preference {
        DietaryPreference::Vegan => info.is_vegan,
        DietaryPreference::Vegetarian => info.is_vegetarian,
        DietaryPreference::GlutenFree => info.is_gluten_free,
        DietaryPreference::DairyFree => info.is_dairy_free,
        DietaryPreference::Keto => info.is_keto,
        DietaryPreference::Paleo => info.is_paleo,
        DietaryPreference::LowCarb => info.is_low_carb,
        DietaryPreference::None | DietaryPreference::Other(_) => true,
    }
}

/// Any one selected preference is enough.
fn matches_dietary(record: &RawRecipeRecord, filters: &RecipeFilters) -> bool {
    if filters.dietary_preferences.is_unrestricted() {
        return true;
    }

    let info = resolve_dietary_info(record);
    filters
        .dietary_preferences
        .iter()
        .any(|preference| preference_satisfied(preference, &info))
}

fn matches_time(record: &RawRecipeRecord, filters: &RecipeFilters) -> bool {
    filters
        .time_to_cook
        .max_minutes()
        .is_none_or(|max| record.ready_in_minutes() <= max)
}

fn matches_difficulty(record: &RawRecipeRecord, filters: &RecipeFilters) -> bool {
    filters.difficulty.accepts(recipe_difficulty(record))
}

fn matches_calories(record: &RawRecipeRecord, filters: &RecipeFilters) -> bool {
    match (filters.calorie_limit, record.calories()) {
        (Some(limit), Some(calories)) => calories <= f64::from(limit),
        _ => true,
    }
}
