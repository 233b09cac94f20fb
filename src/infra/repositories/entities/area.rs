//! Area database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::{Area, NewArea};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "areas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Insert model with a database-generated id
    pub fn from_new(new: NewArea) -> Self {
        Self {
            id: NotSet,
            name: Set(new.name),
            description: Set(new.description),
        }
    }

    /// Full replacement of an existing row
    pub fn replace(id: i64, new: NewArea) -> Self {
        Self {
            id: Unchanged(id),
            ..Self::from_new(new)
        }
    }
}

/// Convert database model to domain entity
impl From<Model> for Area {
    fn from(model: Model) -> Self {
        Area {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}
