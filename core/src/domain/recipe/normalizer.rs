//! Turns upstream recipe records into the card and detail projections.
//!
//! Difficulty and the dietary facets are derived here rather than read from
//! the upstream, which has no difficulty field and no keto, paleo or low-carb
//! flags. The derivations are heuristics; see [`resolve_dietary_info`].

use std::collections::HashMap;

use crate::domain::recipe::{
    entities::{
        DietaryInfo, Difficulty, Ingredient, IngredientSearchHit, RawIngredient, RawRecipeRecord,
        RecipeCard, RecipeDetail,
    },
    filter::matches_filters,
    value_objects::RecipeFilters,
};

pub const INGREDIENT_IMAGE_BASE_URL: &str = "https://spoonacular.com/cdn/ingredients_100x100/";

const MEDIUM_COMPLEXITY: usize = 10;
const HARD_COMPLEXITY: usize = 20;
const LOW_CARB_GRAMS: f64 = 20.0;

/// Classifies by `ingredients + steps`: below 10 is easy, below 20 medium.
pub fn classify_difficulty(ingredient_count: usize, step_count: usize) -> Difficulty {
    let complexity = ingredient_count + step_count;

    if complexity < MEDIUM_COMPLEXITY {
        Difficulty::Easy
    } else if complexity < HARD_COMPLEXITY {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

pub fn recipe_difficulty(record: &RawRecipeRecord) -> Difficulty {
    classify_difficulty(record.ingredient_count(), record.first_group_steps().len())
}

/// Derives the seven dietary facets from the upstream flags.
///
/// Vegan, vegetarian, gluten-free and dairy-free copy their flags. The rest
/// are approximations: keto is `veryHealthy && veryPopular`, paleo is
/// `whole30 || veryHealthy`, and low-carb is `lowFodmap` or under 20 g of
/// carbohydrates (false when nutrition data is missing).
pub fn resolve_dietary_info(record: &RawRecipeRecord) -> DietaryInfo {
    let low_carb_by_nutrients = record
        .carbohydrates()
        .is_some_and(|grams| grams < LOW_CARB_GRAMS);

    DietaryInfo {
        is_vegan: record.vegan,
        is_vegetarian: record.vegetarian,
        is_gluten_free: record.gluten_free,
        is_dairy_free: record.dairy_free,
        is_keto: record.very_healthy && record.very_popular,
        is_paleo: record.whole30 || record.very_healthy,
        is_low_carb: record.low_fodmap || low_carb_by_nutrients,
    }
}

pub fn ingredient_image_url(image: &str) -> String {
    format!("{INGREDIENT_IMAGE_BASE_URL}{image}")
}

pub fn to_recipe_card(record: &RawRecipeRecord, matched_ingredients: u32) -> RecipeCard {
    RecipeCard {
        id: record.id.to_string(),
        name: record.title.clone(),
        image_url: record.image.clone().unwrap_or_default(),
        matched_ingredients,
        total_ingredients: record.ingredient_count() as u32,
        time_to_cook: record.ready_in_minutes(),
        difficulty: recipe_difficulty(record),
        calories_per_serving: record.calories().unwrap_or(0.0),
    }
}

/// Builds the list view from the two upstream calls.
///
/// Match counts come from the ingredient search, joined by recipe id, because
/// the bulk detail call does not report them. Cards keep the search ranking;
/// records the search did not return are appended in bulk order.
pub fn build_recipe_cards(
    hits: &[IngredientSearchHit],
    records: &[RawRecipeRecord],
    filters: &RecipeFilters,
) -> Vec<RecipeCard> {
    let search_index: HashMap<i64, (usize, u32)> = hits
        .iter()
        .enumerate()
        .map(|(rank, hit)| (hit.id, (rank, hit.used_ingredient_count)))
        .collect();

    let mut ranked: Vec<(usize, RecipeCard)> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_filters(record, filters))
        .map(|(position, record)| {
            let (rank, matched) = search_index
                .get(&record.id)
                .copied()
                .unwrap_or((hits.len() + position, 0));
            (rank, to_recipe_card(record, matched))
        })
        .collect();

    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, card)| card).collect()
}

fn to_ingredient(index: usize, raw: &RawIngredient) -> Ingredient {
    let id = raw
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| format!("ingredient-{index}"));
    let name = raw
        .original_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(raw.name.as_str());

    Ingredient {
        id,
        name: name.to_string(),
        image_url: raw.image.as_deref().map(ingredient_image_url),
        quantity: Some(raw.amount.to_string()),
        unit: Some(raw.unit.clone()),
    }
}

/// Upstream minutes win when positive; otherwise a third of the total time
/// is prep and two thirds cooking. The split is an approximation.
fn split_minutes(record: &RawRecipeRecord) -> (u32, u32) {
    let ready = record.ready_in_minutes();
    let explicit = |minutes: Option<i64>| {
        minutes
            .filter(|m| *m > 0)
            .and_then(|m| u32::try_from(m).ok())
    };

    let prep = explicit(record.preparation_minutes).unwrap_or(ready / 3);
    let cook = explicit(record.cooking_minutes).unwrap_or(ready * 2 / 3);
    (prep, cook)
}

/// Full projection for the detail view.
///
/// Only the first instruction group is exposed. Recipes split into several
/// groups (sub-recipes) lose the later ones.
pub fn to_recipe_detail(record: &RawRecipeRecord) -> RecipeDetail {
    let (prep_time, cook_time) = split_minutes(record);

    RecipeDetail {
        id: record.id.to_string(),
        name: record.title.clone(),
        image_url: record.image.clone().unwrap_or_default(),
        time_to_cook: record.ready_in_minutes(),
        prep_time,
        cook_time,
        difficulty: recipe_difficulty(record),
        calories_per_serving: record.calories().unwrap_or(0.0),
        servings: record.servings.filter(|s| *s > 0).unwrap_or(1),
        ingredients: record
            .extended_ingredients
            .iter()
            .enumerate()
            .map(|(index, raw)| to_ingredient(index, raw))
            .collect(),
        instructions: record
            .first_group_steps()
            .iter()
            .map(|step| step.step.clone())
            .collect(),
        tags: record.dish_types.clone(),
        dietary_info: resolve_dietary_info(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::fixtures::{hit, record_with_counts, RecordBuilder};
    use crate::domain::recipe::{
        entities::{InstructionGroup, InstructionStep},
        value_objects::{DietaryPreference, DietaryPreferences},
    };

    #[test]
    fn difficulty_boundaries() {
        assert_eq!(classify_difficulty(0, 0), Difficulty::Easy);
        assert_eq!(classify_difficulty(5, 4), Difficulty::Easy);
        assert_eq!(classify_difficulty(6, 4), Difficulty::Medium);
        assert_eq!(classify_difficulty(19, 0), Difficulty::Medium);
        assert_eq!(classify_difficulty(12, 8), Difficulty::Hard);
        assert_eq!(classify_difficulty(40, 40), Difficulty::Hard);
    }

    #[test]
    fn difficulty_classes_cover_every_sum() {
        for ingredients in 0..25 {
            for steps in 0..25 {
                let expected = match ingredients + steps {
                    0..=9 => Difficulty::Easy,
                    10..=19 => Difficulty::Medium,
                    _ => Difficulty::Hard,
                };
                assert_eq!(classify_difficulty(ingredients, steps), expected);
            }
        }
    }

    #[test]
    fn difficulty_ignores_later_instruction_groups() {
        let mut record = record_with_counts(1, 5, 3);
        record.analyzed_instructions.push(InstructionGroup {
            name: "sauce".to_string(),
            steps: (0..10)
                .map(|n| InstructionStep {
                    number: n,
                    step: format!("sauce step {n}"),
                })
                .collect(),
        });
        assert_eq!(recipe_difficulty(&record), Difficulty::Easy);
    }

    #[test]
    fn low_carb_from_low_fodmap_regardless_of_carbs() {
        let record = RecordBuilder::new(1).low_fodmap().carbohydrates(80.0).build();
        assert!(resolve_dietary_info(&record).is_low_carb);
    }

    #[test]
    fn low_carb_from_carbohydrates_alone() {
        let record = RecordBuilder::new(1).carbohydrates(19.5).build();
        assert!(resolve_dietary_info(&record).is_low_carb);

        let record = RecordBuilder::new(1).carbohydrates(20.0).build();
        assert!(!resolve_dietary_info(&record).is_low_carb);
    }

    #[test]
    fn low_carb_is_false_without_nutrition() {
        let record = RecordBuilder::new(1).build();
        assert!(!resolve_dietary_info(&record).is_low_carb);
    }

    #[test]
    fn keto_and_paleo_approximations() {
        let healthy = RecordBuilder::new(1).very_healthy().build();
        let info = resolve_dietary_info(&healthy);
        assert!(!info.is_keto);
        assert!(info.is_paleo);

        let popular_and_healthy = RecordBuilder::new(2).very_healthy().very_popular().build();
        assert!(resolve_dietary_info(&popular_and_healthy).is_keto);

        let whole30 = RecordBuilder::new(3).whole30().build();
        let info = resolve_dietary_info(&whole30);
        assert!(info.is_paleo);
        assert!(!info.is_keto);
    }

    #[test]
    fn card_takes_match_count_from_search_hits() {
        let records = vec![record_with_counts(7, 4, 2), record_with_counts(8, 12, 3)];
        let hits = vec![hit(8, 5), hit(7, 2)];

        let cards = build_recipe_cards(&hits, &records, &RecipeFilters::default());

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "8");
        assert_eq!(cards[0].matched_ingredients, 5);
        assert_eq!(cards[0].total_ingredients, 12);
        assert_eq!(cards[0].difficulty, Difficulty::Medium);
        assert_eq!(cards[1].id, "7");
        assert_eq!(cards[1].matched_ingredients, 2);
        assert_eq!(cards[1].difficulty, Difficulty::Easy);
    }

    #[test]
    fn records_missing_from_search_rank_last_with_zero_matches() {
        let records = vec![record_with_counts(3, 1, 1), record_with_counts(1, 1, 1)];
        let hits = vec![hit(1, 4)];

        let cards = build_recipe_cards(&hits, &records, &RecipeFilters::default());

        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(cards[1].matched_ingredients, 0);
    }

    #[test]
    fn cards_drop_records_rejected_by_filters() {
        let records = vec![
            RecordBuilder::new(1).vegan().build(),
            RecordBuilder::new(2).vegetarian().build(),
        ];
        let hits = vec![hit(1, 1), hit(2, 1)];
        let filters = RecipeFilters {
            dietary_preferences: DietaryPreferences::from(vec![DietaryPreference::Vegan]),
            ..RecipeFilters::default()
        };

        let cards = build_recipe_cards(&hits, &records, &filters);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "1");
    }

    #[test]
    fn card_calories_default_to_zero() {
        let card = to_recipe_card(&RecordBuilder::new(1).build(), 0);
        assert_eq!(card.calories_per_serving, 0.0);
        assert_eq!(card.image_url, "");

        let card = to_recipe_card(&RecordBuilder::new(1).calories(321.0).build(), 0);
        assert_eq!(card.calories_per_serving, 321.0);
    }

    #[test]
    fn detail_splits_ready_time_when_upstream_has_none() {
        let record = RecordBuilder::new(1).ready_in(50).build();
        let detail = to_recipe_detail(&record);
        assert_eq!(detail.prep_time, 16);
        assert_eq!(detail.cook_time, 33);

        let mut record = RecordBuilder::new(2).ready_in(50).build();
        record.preparation_minutes = Some(-1);
        record.cooking_minutes = Some(0);
        let detail = to_recipe_detail(&record);
        assert_eq!((detail.prep_time, detail.cook_time), (16, 33));
    }

    #[test]
    fn detail_prefers_explicit_minutes() {
        let mut record = RecordBuilder::new(1).ready_in(50).build();
        record.preparation_minutes = Some(10);
        record.cooking_minutes = Some(40);
        let detail = to_recipe_detail(&record);
        assert_eq!((detail.prep_time, detail.cook_time), (10, 40));
    }

    #[test]
    fn detail_maps_ingredients_and_first_group_instructions() {
        let mut record = record_with_counts(9, 0, 2);
        record.extended_ingredients = vec![
            RawIngredient {
                id: Some(11297),
                name: "parsley".to_string(),
                original_name: Some("fresh parsley".to_string()),
                image: Some("parsley.jpg".to_string()),
                amount: 2.0,
                unit: "tbsp".to_string(),
            },
            RawIngredient {
                id: None,
                name: "salt".to_string(),
                original_name: None,
                image: None,
                amount: 0.5,
                unit: "tsp".to_string(),
            },
        ];
        record.analyzed_instructions.push(InstructionGroup {
            name: "garnish".to_string(),
            steps: vec![InstructionStep {
                number: 1,
                step: "ignored".to_string(),
            }],
        });
        record.dish_types = vec!["lunch".to_string()];

        let detail = to_recipe_detail(&record);

        assert_eq!(detail.ingredients[0].id, "11297");
        assert_eq!(detail.ingredients[0].name, "fresh parsley");
        assert_eq!(
            detail.ingredients[0].image_url.as_deref(),
            Some("https://spoonacular.com/cdn/ingredients_100x100/parsley.jpg")
        );
        assert_eq!(detail.ingredients[0].quantity.as_deref(), Some("2"));
        assert_eq!(detail.ingredients[1].id, "ingredient-1");
        assert_eq!(detail.ingredients[1].name, "salt");
        assert_eq!(detail.ingredients[1].image_url, None);
        assert_eq!(detail.ingredients[1].quantity.as_deref(), Some("0.5"));
        assert_eq!(detail.instructions, vec!["step 0", "step 1"]);
        assert_eq!(detail.tags, vec!["lunch"]);
        assert_eq!(detail.servings, 1);
    }
}
