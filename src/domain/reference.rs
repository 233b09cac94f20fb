//! Transaction reference: the creditor, donor or member a booking is
//! attributed to.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// Tagged reference to exactly one creditor, donor or member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Reference {
    Creditor { id: i64 },
    Donor { id: i64 },
    Member { id: i64 },
}

impl Reference {
    /// Id of the referenced entity
    pub fn id(&self) -> i64 {
        match self {
            Reference::Creditor { id } | Reference::Donor { id } | Reference::Member { id } => *id,
        }
    }
}

/// Persisted form of an optional reference: one nullable column per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceColumns {
    pub creditor_id: Option<i64>,
    pub donor_id: Option<i64>,
    pub member_id: Option<i64>,
}

impl ReferenceColumns {
    /// Decode the columns back into a reference.
    ///
    /// More than one populated column is corrupt data.
    pub fn into_reference(self) -> AppResult<Option<Reference>> {
        match (self.creditor_id, self.donor_id, self.member_id) {
            (None, None, None) => Ok(None),
            (Some(id), None, None) => Ok(Some(Reference::Creditor { id })),
            (None, Some(id), None) => Ok(Some(Reference::Donor { id })),
            (None, None, Some(id)) => Ok(Some(Reference::Member { id })),
            _ => Err(AppError::internal(format!(
                "Ambiguous reference columns: {:?}",
                self
            ))),
        }
    }
}

impl From<Option<Reference>> for ReferenceColumns {
    fn from(reference: Option<Reference>) -> Self {
        match reference {
            None => Self::default(),
            Some(Reference::Creditor { id }) => Self {
                creditor_id: Some(id),
                ..Self::default()
            },
            Some(Reference::Donor { id }) => Self {
                donor_id: Some(id),
                ..Self::default()
            },
            Some(Reference::Member { id }) => Self {
                member_id: Some(id),
                ..Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_survives_the_columns() {
        for reference in [
            Reference::Creditor { id: 4 },
            Reference::Donor { id: 9 },
            Reference::Member { id: 1 },
        ] {
            let columns = ReferenceColumns::from(Some(reference));
            assert_eq!(columns.into_reference().unwrap(), Some(reference));
        }

        let columns = ReferenceColumns::from(None);
        assert_eq!(columns, ReferenceColumns::default());
        assert_eq!(columns.into_reference().unwrap(), None);
    }

    #[test]
    fn test_exactly_one_column_is_set() {
        let columns = ReferenceColumns::from(Some(Reference::Donor { id: 3 }));
        assert_eq!(columns.creditor_id, None);
        assert_eq!(columns.donor_id, Some(3));
        assert_eq!(columns.member_id, None);
    }

    #[test]
    fn test_ambiguous_columns_are_rejected() {
        let columns = ReferenceColumns {
            creditor_id: Some(1),
            donor_id: None,
            member_id: Some(2),
        };
        assert!(matches!(
            columns.into_reference(),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Reference::Creditor { id: 4 }).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "creditor", "id": 4 }));

        let parsed: Reference =
            serde_json::from_value(serde_json::json!({ "type": "member", "id": 12 })).unwrap();
        assert_eq!(parsed, Reference::Member { id: 12 });
        assert_eq!(parsed.id(), 12);
    }
}
