//! Election database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::{Election, NewElection};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "elections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub role_id: i64,
    pub member_id: i64,
    pub start_date: Date,
    /// NULL = current holder of the role
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id",
        on_delete = "Cascade"
    )]
    Role,
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_new(new: NewElection) -> Self {
        Self {
            id: NotSet,
            role_id: Set(new.role_id),
            member_id: Set(new.member_id),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
        }
    }

    pub fn replace(id: i64, new: NewElection) -> Self {
        Self {
            id: Unchanged(id),
            ..Self::from_new(new)
        }
    }
}

impl From<Model> for Election {
    fn from(model: Model) -> Self {
        Election {
            id: model.id,
            role_id: model.role_id,
            member_id: model.member_id,
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}
