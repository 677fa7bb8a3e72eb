//! Recipe database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::Recipe;
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub difficulty: String,
    pub time: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    /// JSON array of strings
    pub ingredients: Json,
    pub preparation: String,
    pub image: Option<String>,
    /// Insertion order key
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Recipe {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Recipe {
            id: model.id,
            name: model.name,
            difficulty: model.difficulty,
            time: model.time,
            kind: model.kind,
            ingredients: serde_json::from_value(model.ingredients)?,
            preparation: model.preparation,
            image: model.image,
        })
    }
}

/// Build the row for a new recipe.
pub fn active_model(recipe: Recipe, created_at: DateTimeUtc) -> ActiveModel {
    ActiveModel {
        id: Set(recipe.id),
        name: Set(recipe.name),
        difficulty: Set(recipe.difficulty),
        time: Set(recipe.time),
        kind: Set(recipe.kind),
        ingredients: Set(Json::from(recipe.ingredients)),
        preparation: Set(recipe.preparation),
        image: Set(recipe.image),
        created_at: Set(created_at),
    }
}
