use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Upper bound shared by `name` and `location`, matching the column width.
pub const TEXT_MAX_LEN: usize = 100;

/// Persisted bank row. `id` is the textual form of a v4 UUID and never changes
/// after insert.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(36))")]
    pub id: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn validate_text(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > TEXT_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("{field} must be at most {TEXT_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    validate_text("name", name)
}

pub fn validate_location(location: &str) -> Result<(), errors::ModelError> {
    validate_text("location", location)
}

/// Insert a fully formed row. The caller supplies the id.
pub async fn insert(db: &DatabaseConnection, model: Model) -> Result<Model, errors::ModelError> {
    validate_name(&model.name)?;
    validate_location(&model.location)?;
    if model.id.trim().is_empty() {
        return Err(errors::ModelError::Validation("id must not be empty".into()));
    }

    let am = ActiveModel {
        id: Set(model.id),
        name: Set(model.name),
        location: Set(model.location),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite `name` and `location` of an existing row, keeping its id.
pub async fn overwrite(
    db: &DatabaseConnection,
    existing: Model,
    name: &str,
    location: &str,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_location(location)?;

    let mut am: ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.location = Set(location.to_string());
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
