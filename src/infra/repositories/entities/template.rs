//! Template database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::{NewTemplate, Template};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "templates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_new(new: NewTemplate) -> Self {
        Self {
            id: NotSet,
            name: Set(new.name),
            content: Set(new.content),
        }
    }

    pub fn replace(id: i64, new: NewTemplate) -> Self {
        Self {
            id: Unchanged(id),
            ..Self::from_new(new)
        }
    }
}

impl From<Model> for Template {
    fn from(model: Model) -> Self {
        Template {
            id: model.id,
            name: model.name,
            content: model.content,
        }
    }
}
