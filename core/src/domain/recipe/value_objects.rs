use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Difficulty, Ingredient},
};

static TIME_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*(min|mins|minute|minutes|hour|hours)\b").expect("valid time label pattern")
});

pub const DEFAULT_SERVINGS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DietaryPreference {
    None,
    Vegan,
    Vegetarian,
    GlutenFree,
    DairyFree,
    Keto,
    Paleo,
    LowCarb,
    /// A value this version does not know. Matches every recipe.
    Other(String),
}

impl DietaryPreference {
    pub fn as_str(&self) -> &str {
        match self {
            DietaryPreference::None => "none",
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::GlutenFree => "gluten-free",
            DietaryPreference::DairyFree => "dairy-free",
            DietaryPreference::Keto => "keto",
            DietaryPreference::Paleo => "paleo",
            DietaryPreference::LowCarb => "low-carb",
            DietaryPreference::Other(value) => value.as_str(),
        }
    }
}

impl From<&str> for DietaryPreference {
    fn from(s: &str) -> Self {
        match s {
            "none" => DietaryPreference::None,
            "vegan" => DietaryPreference::Vegan,
            "vegetarian" => DietaryPreference::Vegetarian,
            "gluten-free" => DietaryPreference::GlutenFree,
            "dairy-free" => DietaryPreference::DairyFree,
            "keto" => DietaryPreference::Keto,
            "paleo" => DietaryPreference::Paleo,
            "low-carb" => DietaryPreference::LowCarb,
            other => DietaryPreference::Other(other.to_string()),
        }
    }
}

impl From<String> for DietaryPreference {
    fn from(s: String) -> Self {
        DietaryPreference::from(s.as_str())
    }
}

impl Serialize for DietaryPreference {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DietaryPreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(DietaryPreference::from)
    }
}

/// Selected dietary preferences.
///
/// Either exactly `[none]`, or one or more real preferences without `none`.
/// Insertion order is kept so that stored filters round-trip as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DietaryPreference>", into = "Vec<DietaryPreference>")]
pub struct DietaryPreferences(Vec<DietaryPreference>);

impl DietaryPreferences {
    pub fn none() -> Self {
        Self(vec![DietaryPreference::None])
    }

    pub fn is_unrestricted(&self) -> bool {
        self.0.iter().all(|p| *p == DietaryPreference::None)
    }

    pub fn contains(&self, preference: &DietaryPreference) -> bool {
        self.0.contains(preference)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DietaryPreference> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[DietaryPreference] {
        &self.0
    }

    /// Selecting `none` clears every real preference. Any other value is
    /// flipped; removing the last real preference falls back to `none`.
    pub fn toggle(&mut self, preference: DietaryPreference) {
        if preference == DietaryPreference::None {
            *self = Self::none();
            return;
        }

        self.0.retain(|p| *p != DietaryPreference::None);
        if let Some(index) = self.0.iter().position(|p| *p == preference) {
            self.0.remove(index);
        } else {
            self.0.push(preference);
        }

        if self.0.is_empty() {
            self.0.push(DietaryPreference::None);
        }
    }
}

impl Default for DietaryPreferences {
    fn default() -> Self {
        Self::none()
    }
}

impl From<Vec<DietaryPreference>> for DietaryPreferences {
    fn from(values: Vec<DietaryPreference>) -> Self {
        let mut selected: Vec<DietaryPreference> = Vec::with_capacity(values.len());
        for value in values {
            if value != DietaryPreference::None && !selected.contains(&value) {
                selected.push(value);
            }
        }

        if selected.is_empty() {
            Self::none()
        } else {
            Self(selected)
        }
    }
}

impl FromIterator<DietaryPreference> for DietaryPreferences {
    fn from_iter<T: IntoIterator<Item = DietaryPreference>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl From<DietaryPreferences> for Vec<DietaryPreference> {
    fn from(preferences: DietaryPreferences) -> Self {
        preferences.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeToCook {
    #[default]
    Any,
    FifteenMinutes,
    ThirtyMinutes,
    FortyFiveMinutes,
    OneHour,
}

impl TimeToCook {
    pub fn as_str(&self) -> &str {
        match self {
            TimeToCook::Any => "any",
            TimeToCook::FifteenMinutes => "15 min or less",
            TimeToCook::ThirtyMinutes => "30 min or less",
            TimeToCook::FortyFiveMinutes => "45 min or less",
            TimeToCook::OneHour => "1 hour or less",
        }
    }

    /// Upper bound on `readyInMinutes`, `None` for `any`.
    pub fn max_minutes(&self) -> Option<u32> {
        match self {
            TimeToCook::Any => None,
            TimeToCook::FifteenMinutes => Some(15),
            TimeToCook::ThirtyMinutes => Some(30),
            TimeToCook::FortyFiveMinutes => Some(45),
            TimeToCook::OneHour => Some(60),
        }
    }
}

/// Reads the leading quantity of a label such as "30 min or less" as minutes.
/// The unit is honoured, so "1 hour or less" is 60 rather than the bare
/// leading integer 1.
pub fn parse_time_label(label: &str) -> Result<u32, CoreError> {
    let captures = TIME_LABEL
        .captures(label)
        .ok_or_else(|| CoreError::InvalidFilter(format!("unparseable time label '{label}'")))?;

    let quantity: u32 = captures[1]
        .parse()
        .map_err(|_| CoreError::InvalidFilter(format!("unparseable time label '{label}'")))?;

    match &captures[2] {
        unit if unit.starts_with("hour") => Ok(quantity.saturating_mul(60)),
        _ => Ok(quantity),
    }
}

impl FromStr for TimeToCook {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(TimeToCook::Any);
        }

        match parse_time_label(s)? {
            15 => Ok(TimeToCook::FifteenMinutes),
            30 => Ok(TimeToCook::ThirtyMinutes),
            45 => Ok(TimeToCook::FortyFiveMinutes),
            60 => Ok(TimeToCook::OneHour),
            minutes => Err(CoreError::InvalidFilter(format!(
                "unsupported time limit of {minutes} minutes"
            ))),
        }
    }
}

impl fmt::Display for TimeToCook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TimeToCook {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TimeToCook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyFilter {
    #[default]
    Any,
    Easy,
    Medium,
    Hard,
}

impl DifficultyFilter {
    pub fn accepts(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::Any => true,
            DifficultyFilter::Easy => difficulty == Difficulty::Easy,
            DifficultyFilter::Medium => difficulty == Difficulty::Medium,
            DifficultyFilter::Hard => difficulty == Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeFilters {
    #[schema(value_type = Vec<String>, example = json!(["none"]))]
    pub dietary_preferences: DietaryPreferences,
    #[schema(value_type = String, example = "30 min or less")]
    pub time_to_cook: TimeToCook,
    pub difficulty: DifficultyFilter,
    #[serde(deserialize_with = "deserialize_servings")]
    pub servings: u32,
    pub calorie_limit: Option<u32>,
}

impl Default for RecipeFilters {
    fn default() -> Self {
        Self {
            dietary_preferences: DietaryPreferences::none(),
            time_to_cook: TimeToCook::Any,
            difficulty: DifficultyFilter::Any,
            servings: DEFAULT_SERVINGS,
            calorie_limit: None,
        }
    }
}

impl RecipeFilters {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.servings < 1 {
            return Err(CoreError::InvalidFilter(
                "servings must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn deserialize_servings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let servings = u32::deserialize(deserializer)?;
    if servings < 1 {
        return Err(serde::de::Error::custom("servings must be at least 1"));
    }
    Ok(servings)
}

#[derive(Debug, Clone)]
pub struct SearchRecipesInput {
    pub ingredients: Vec<Ingredient>,
    pub filters: RecipeFilters,
}

#[derive(Debug, Clone)]
pub struct GetRecipeInput {
    pub recipe_id: String,
}
