//! Member database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::{Member, NewMember};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub birthday: Option<Date>,
    pub joined_on: Option<Date>,
    /// Identity provider account id
    #[sea_orm(unique)]
    pub user_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_new(new: NewMember, user_id: Option<String>) -> Self {
        Self {
            id: NotSet,
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            email: Set(new.email),
            phone: Set(new.phone),
            street: Set(new.street),
            zip_code: Set(new.zip_code),
            city: Set(new.city),
            birthday: Set(new.birthday),
            joined_on: Set(new.joined_on),
            user_id: Set(user_id),
        }
    }
}

/// Full replacement of an existing row
impl From<Member> for ActiveModel {
    fn from(member: Member) -> Self {
        Self {
            id: Unchanged(member.id),
            first_name: Set(member.first_name),
            last_name: Set(member.last_name),
            email: Set(member.email),
            phone: Set(member.phone),
            street: Set(member.street),
            zip_code: Set(member.zip_code),
            city: Set(member.city),
            birthday: Set(member.birthday),
            joined_on: Set(member.joined_on),
            user_id: Set(member.user_id),
        }
    }
}

impl From<Model> for Member {
    fn from(model: Model) -> Self {
        Member {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            street: model.street,
            zip_code: model.zip_code,
            city: model.city,
            birthday: model.birthday,
            joined_on: model.joined_on,
            user_id: model.user_id,
        }
    }
}
