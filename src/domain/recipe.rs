//! Recipe entity and the list filter.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::Record;
use crate::config::RECIPE_ID_PREFIX;

/// Recipe domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    #[schema(example = "r001")]
    pub id: String,
    #[schema(example = "Lemon Tart")]
    pub name: String,
    #[schema(example = "easy")]
    pub difficulty: String,
    /// Opaque label, not a parsed duration
    #[schema(example = "30")]
    pub time: String,
    #[serde(rename = "type")]
    #[schema(example = "dessert")]
    pub kind: String,
    pub ingredients: Vec<String>,
    pub preparation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "/images/lemon-tart.jpg")]
    pub image: Option<String>,
}

impl Record for Recipe {
    const ID_PREFIX: &'static str = RECIPE_ID_PREFIX;
    const ENTITY: &'static str = "Recipe";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Recipe fields supplied at creation, before an id is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub difficulty: String,
    pub time: String,
    pub kind: String,
    pub ingredients: Vec<String>,
    pub preparation: String,
    pub image: Option<String>,
}

impl NewRecipe {
    pub fn with_id(self, id: String) -> Recipe {
        Recipe {
            id,
            name: self.name,
            difficulty: self.difficulty,
            time: self.time,
            kind: self.kind,
            ingredients: self.ingredients,
            preparation: self.preparation,
            image: self.image,
        }
    }
}

/// Optional list filters. Every value present must match (AND); absent or
/// empty values impose no constraint. A key may repeat, e.g.
/// `?ingredient=flour&ingredient=sugar` wants both ingredients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct RecipeFilter {
    /// Recipe must list this exact ingredient
    pub ingredient: Vec<String>,
    /// Exact time label
    pub time: Vec<String>,
    /// Exact recipe type
    #[serde(rename = "type")]
    pub kind: Vec<String>,
}

impl RecipeFilter {
    /// Build from raw query pairs. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "ingredient" => filter.ingredient.push(value),
                "time" => filter.time.push(value),
                "type" => filter.kind.push(value),
                _ => {}
            }
        }
        filter
    }

    pub fn is_empty(&self) -> bool {
        active(&self.ingredient).next().is_none()
            && active(&self.time).next().is_none()
            && active(&self.kind).next().is_none()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        active(&self.ingredient).all(|wanted| recipe.ingredients.iter().any(|i| i == wanted))
            && active(&self.time).all(|wanted| recipe.time == wanted)
            && active(&self.kind).all(|wanted| recipe.kind == wanted)
    }
}

fn active(values: &[String]) -> impl Iterator<Item = &str> {
    values.iter().map(String::as_str).filter(|v| !v.is_empty())
}
