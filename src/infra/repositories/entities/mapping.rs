//! Mapping database entity for SeaORM.
//!
//! The optional reference is stored as three nullable foreign keys, at most
//! one of which is populated.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::{Mapping, NewMapping, ReferenceColumns};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mappings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub pattern: String,
    pub purpose_id: Option<i64>,
    pub area_id: Option<i64>,
    pub creditor_id: Option<i64>,
    pub donor_id: Option<i64>,
    pub member_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_new(new: NewMapping) -> Self {
        let columns = ReferenceColumns::from(new.reference);
        Self {
            id: NotSet,
            pattern: Set(new.pattern),
            purpose_id: Set(new.purpose_id),
            area_id: Set(new.area_id),
            creditor_id: Set(columns.creditor_id),
            donor_id: Set(columns.donor_id),
            member_id: Set(columns.member_id),
        }
    }

    pub fn replace(id: i64, new: NewMapping) -> Self {
        Self {
            id: Unchanged(id),
            ..Self::from_new(new)
        }
    }
}

impl TryFrom<Model> for Mapping {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let reference = ReferenceColumns {
            creditor_id: model.creditor_id,
            donor_id: model.donor_id,
            member_id: model.member_id,
        }
        .into_reference()?;

        Ok(Mapping {
            id: model.id,
            pattern: model.pattern,
            purpose_id: model.purpose_id,
            area_id: model.area_id,
            reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Reference;

    #[test]
    fn test_reference_survives_persistence() {
        for reference in [
            Some(Reference::Creditor { id: 2 }),
            Some(Reference::Donor { id: 3 }),
            Some(Reference::Member { id: 4 }),
            None,
        ] {
            let active = ActiveModel::from_new(NewMapping {
                pattern: "RENT".to_string(),
                purpose_id: Some(1),
                area_id: None,
                reference,
            });

            let model = Model {
                id: 10,
                pattern: active.pattern.unwrap(),
                purpose_id: active.purpose_id.unwrap(),
                area_id: active.area_id.unwrap(),
                creditor_id: active.creditor_id.unwrap(),
                donor_id: active.donor_id.unwrap(),
                member_id: active.member_id.unwrap(),
            };

            let mapping = Mapping::try_from(model).unwrap();
            assert_eq!(mapping.reference, reference);
            assert_eq!(mapping.purpose_id, Some(1));
            assert_eq!(mapping.pattern, "RENT");
        }
    }
}
