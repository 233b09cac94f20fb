//! Member domain entity, its self-service profile and account data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Club member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub joined_on: Option<NaiveDate>,
    /// Identity provider account id (server-managed)
    pub user_id: Option<String>,
}

impl Member {
    /// Build a member from creation data, keeping the linked account id.
    pub fn from_new(id: i64, new: NewMember, user_id: Option<String>) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            street: new.street,
            zip_code: new.zip_code,
            city: new.city,
            birthday: new.birthday,
            joined_on: new.joined_on,
            user_id,
        }
    }

    /// Self-service subset of the member record.
    pub fn profile(&self) -> Profile {
        Profile {
            email: self.email.clone(),
            phone: self.phone.clone(),
            street: self.street.clone(),
            zip_code: self.zip_code.clone(),
            city: self.city.clone(),
        }
    }

    /// Merge a profile into this member.
    ///
    /// Fields present in the profile overwrite the stored values,
    /// absent fields keep them.
    pub fn merge_profile(&mut self, profile: Profile) {
        if let Some(email) = profile.email {
            self.email = Some(email);
        }
        if let Some(phone) = profile.phone {
            self.phone = Some(phone);
        }
        if let Some(street) = profile.street {
            self.street = Some(street);
        }
        if let Some(zip_code) = profile.zip_code {
            self.zip_code = Some(zip_code);
        }
        if let Some(city) = profile.city {
            self.city = Some(city);
        }
    }

    /// Account data mirrored to the identity provider.
    ///
    /// The username is only sent when the account is created.
    pub fn account(&self, username: Option<String>) -> UserAccount {
        UserAccount {
            username,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Member creation / replacement data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    #[schema(example = "John")]
    pub first_name: String,
    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    #[schema(example = "Doe")]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub joined_on: Option<NaiveDate>,
    /// Creates an identity provider account with this username when the
    /// member has none yet
    #[validate(length(min = 1, max = 255, message = "Username must not be empty"))]
    #[schema(example = "jdoe")]
    pub username: Option<String>,
}

impl NewMember {
    /// Account data for a new identity provider account.
    pub fn account(&self) -> UserAccount {
        UserAccount {
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Self-service member data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
}

/// Account representation handed to the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Member {
        Member {
            id: 7,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: Some("old@example.com".to_string()),
            phone: Some("0123".to_string()),
            street: Some("Main St 1".to_string()),
            zip_code: Some("12345".to_string()),
            city: Some("Springfield".to_string()),
            birthday: NaiveDate::from_ymd_opt(1990, 5, 17),
            joined_on: None,
            user_id: Some("abc".to_string()),
        }
    }

    #[test]
    fn test_merge_profile_overwrites_present_fields_only() {
        let mut m = member();
        m.merge_profile(Profile {
            email: Some("new@example.com".to_string()),
            city: Some("Shelbyville".to_string()),
            ..Profile::default()
        });

        assert_eq!(m.email.as_deref(), Some("new@example.com"));
        assert_eq!(m.city.as_deref(), Some("Shelbyville"));
        assert_eq!(m.phone.as_deref(), Some("0123"));
        assert_eq!(m.street.as_deref(), Some("Main St 1"));
        assert_eq!(m.zip_code.as_deref(), Some("12345"));
        assert_eq!(m.first_name, "John");
        assert_eq!(m.user_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_profile_reflects_member() {
        let m = member();
        let profile = m.profile();
        assert_eq!(profile.email, m.email);
        assert_eq!(profile.phone, m.phone);
        assert_eq!(profile.city, m.city);
    }

    #[test]
    fn test_new_member_validation() {
        let new = NewMember {
            first_name: "".to_string(),
            last_name: "Doe".to_string(),
            email: Some("not-an-email".to_string()),
            phone: None,
            street: None,
            zip_code: None,
            city: None,
            birthday: None,
            joined_on: None,
            username: None,
        };

        let errors = new.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("email"));
    }
}
