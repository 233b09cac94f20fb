//! Election domain entity.
//!
//! An election assigns a member to a role for a date range. The record with
//! no end date is the current holder of the role.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Election domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    #[schema(example = 1)]
    pub id: i64,
    pub role_id: i64,
    pub member_id: i64,
    pub start_date: NaiveDate,
    /// `None` while the member holds the role
    pub end_date: Option<NaiveDate>,
}

impl Election {
    /// Check if this is the current (open) election of its role
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }

    /// Whether the term may end on the given day without ending before it started.
    pub fn can_end_on(&self, on: NaiveDate) -> bool {
        self.start_date <= on
    }
}

/// Election creation / replacement data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_term"))]
pub struct NewElection {
    pub role_id: i64,
    pub member_id: i64,
    #[schema(example = "2024-03-01")]
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl NewElection {
    /// Open election starting on the given day.
    pub fn open(role_id: i64, member_id: i64, start_date: NaiveDate) -> Self {
        Self {
            role_id,
            member_id,
            start_date,
            end_date: None,
        }
    }
}

fn validate_term(election: &NewElection) -> Result<(), ValidationError> {
    match election.end_date {
        Some(end) if end < election.start_date => {
            let mut err = ValidationError::new("term");
            err.message = Some("End date must not be before start date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_term_can_end_on_its_start_date_or_later() {
        let election = Election {
            id: 1,
            role_id: 2,
            member_id: 3,
            start_date: date(2023, 1, 1),
            end_date: None,
        };
        assert!(election.is_open());

        assert!(election.can_end_on(date(2023, 1, 1)));
        assert!(election.can_end_on(date(2024, 6, 30)));
        assert!(!election.can_end_on(date(2022, 12, 31)));
    }

    #[test]
    fn test_term_must_not_end_before_start() {
        let mut new = NewElection::open(1, 1, date(2024, 1, 10));
        assert!(new.validate().is_ok());

        new.end_date = Some(date(2024, 1, 10));
        assert!(new.validate().is_ok());

        new.end_date = Some(date(2024, 1, 9));
        assert!(new.validate().is_err());
    }
}
