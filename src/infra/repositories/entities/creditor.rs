//! Creditor database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::{Creditor, NewCreditor};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "creditors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub iban: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_new(new: NewCreditor) -> Self {
        Self {
            id: NotSet,
            name: Set(new.name),
            iban: Set(new.iban),
            street: Set(new.street),
            zip_code: Set(new.zip_code),
            city: Set(new.city),
        }
    }

    pub fn replace(id: i64, new: NewCreditor) -> Self {
        Self {
            id: Unchanged(id),
            ..Self::from_new(new)
        }
    }
}

impl From<Model> for Creditor {
    fn from(model: Model) -> Self {
        Creditor {
            id: model.id,
            name: model.name,
            iban: model.iban,
            street: model.street,
            zip_code: model.zip_code,
            city: model.city,
        }
    }
}
