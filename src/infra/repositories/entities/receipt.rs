//! Receipt database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::{NewReceipt, Receipt};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "receipts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub donor_id: i64,
    pub start_date: Date,
    pub end_date: Date,
    pub amount_cents: i64,
    pub issued_on: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::donor::Entity",
        from = "Column::DonorId",
        to = "super::donor::Column::Id",
        on_delete = "Cascade"
    )]
    Donor,
}

impl Related<super::donor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_new(new: NewReceipt) -> Self {
        Self {
            id: NotSet,
            donor_id: Set(new.donor_id),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            amount_cents: Set(new.amount_cents),
            issued_on: Set(new.issued_on),
        }
    }

    pub fn replace(id: i64, new: NewReceipt) -> Self {
        Self {
            id: Unchanged(id),
            ..Self::from_new(new)
        }
    }
}

impl From<Model> for Receipt {
    fn from(model: Model) -> Self {
        Receipt {
            id: model.id,
            donor_id: model.donor_id,
            start_date: model.start_date,
            end_date: model.end_date,
            amount_cents: model.amount_cents,
            issued_on: model.issued_on,
        }
    }
}
