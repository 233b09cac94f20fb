//! Donor database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::{Donor, NewDonor};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "donors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_new(new: NewDonor) -> Self {
        Self {
            id: NotSet,
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            email: Set(new.email),
            street: Set(new.street),
            zip_code: Set(new.zip_code),
            city: Set(new.city),
        }
    }

    pub fn replace(id: i64, new: NewDonor) -> Self {
        Self {
            id: Unchanged(id),
            ..Self::from_new(new)
        }
    }
}

impl From<Model> for Donor {
    fn from(model: Model) -> Self {
        Donor {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            street: model.street,
            zip_code: model.zip_code,
            city: model.city,
        }
    }
}
