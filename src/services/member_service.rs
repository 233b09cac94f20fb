//! Member service - Member records and their identity provider accounts.
//!
//! A member may be linked to an account at the identity provider. The
//! account is created, synchronised and deleted alongside the member row.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Member, NewMember, Profile};
use crate::errors::{AppError, AppResult, EntityKind, OptionExt};
use crate::infra::{IdentityProvider, MemberRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Member service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MemberService: Send + Sync {
    /// Get member by ID
    async fn get(&self, id: i64) -> AppResult<Member>;

    /// List all members
    async fn list(&self) -> AppResult<Vec<Member>>;

    /// Create a member, with an account when a username is given
    async fn create(&self, new: NewMember) -> AppResult<Member>;

    /// Replace all member fields and sync the linked account
    async fn update(&self, id: i64, new: NewMember) -> AppResult<Member>;

    /// Delete the linked account, then the member
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Self-service subset of a member
    async fn profile(&self, id: i64) -> AppResult<Profile>;

    /// Merge a profile into the member
    async fn update_profile(&self, id: i64, profile: Profile) -> AppResult<Member>;
}

/// Concrete implementation of MemberService.
pub struct MemberManager {
    members: Arc<dyn MemberRepository>,
    identity: Arc<dyn IdentityProvider>,
}

impl MemberManager {
    /// Create new member service instance
    pub fn new(members: Arc<dyn MemberRepository>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { members, identity }
    }

    /// Remove an account created for a write that failed afterwards.
    async fn discard_account(&self, user_id: &str) {
        if let Err(e) = self.identity.delete_user(user_id).await {
            tracing::error!(user_id = %user_id, error = %e, "Failed to remove orphaned account");
        }
    }
}

#[async_trait]
impl MemberService for MemberManager {
    async fn get(&self, id: i64) -> AppResult<Member> {
        self.members
            .find_by_id(id)
            .await?
            .ok_or_not_found(EntityKind::Member)
    }

    async fn list(&self) -> AppResult<Vec<Member>> {
        self.members.list().await
    }

    async fn create(&self, new: NewMember) -> AppResult<Member> {
        let user_id = match new.username {
            Some(_) => Some(self.identity.create_user(new.account()).await?),
            None => None,
        };

        match self.members.create(new, user_id.clone()).await {
            Ok(member) => {
                tracing::info!(
                    member_id = member.id,
                    linked = member.user_id.is_some(),
                    "Member created"
                );
                Ok(member)
            }
            Err(e) => {
                if let Some(user_id) = user_id {
                    self.discard_account(&user_id).await;
                }
                Err(e)
            }
        }
    }

    async fn update(&self, id: i64, new: NewMember) -> AppResult<Member> {
        let existing = self.get(id).await?;

        let (member, created) = match existing.user_id {
            Some(user_id) => {
                let member = Member::from_new(id, new, Some(user_id.clone()));
                self.identity
                    .update_user(&user_id, member.account(None))
                    .await?;
                (member, None)
            }
            None if new.username.is_some() => {
                let user_id = self.identity.create_user(new.account()).await?;
                (Member::from_new(id, new, Some(user_id.clone())), Some(user_id))
            }
            None => (Member::from_new(id, new, None), None),
        };

        let result = self.members.update(member).await;
        match (result, created) {
            (Ok(Some(member)), _) => Ok(member),
            (Ok(None), created) => {
                if let Some(user_id) = created {
                    self.discard_account(&user_id).await;
                }
                Err(AppError::not_found(EntityKind::Member))
            }
            (Err(e), created) => {
                if let Some(user_id) = created {
                    self.discard_account(&user_id).await;
                }
                Err(e)
            }
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let member = self.get(id).await?;

        if let Some(user_id) = &member.user_id {
            self.identity.delete_user(user_id).await?;
        }

        if self.members.delete(id).await? {
            tracing::info!(member_id = id, "Member deleted");
            Ok(())
        } else {
            Err(AppError::not_found(EntityKind::Member))
        }
    }

    async fn profile(&self, id: i64) -> AppResult<Profile> {
        Ok(self.get(id).await?.profile())
    }

    async fn update_profile(&self, id: i64, profile: Profile) -> AppResult<Member> {
        let mut member = self.get(id).await?;
        let previous_email = member.email.clone();
        member.merge_profile(profile);

        if let Some(user_id) = &member.user_id {
            if member.email != previous_email {
                self.identity
                    .update_user(user_id, member.account(None))
                    .await?;
            }
        }

        self.members
            .update(member)
            .await?
            .ok_or_not_found(EntityKind::Member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockIdentityProvider, MockMemberRepository};
    use mockall::predicate::eq;

    fn new_member(username: Option<&str>) -> NewMember {
        NewMember {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: Some("john@example.com".to_string()),
            phone: None,
            street: None,
            zip_code: None,
            city: None,
            birthday: None,
            joined_on: None,
            username: username.map(str::to_string),
        }
    }

    fn stored(id: i64, user_id: Option<&str>) -> Member {
        Member::from_new(id, new_member(None), user_id.map(str::to_string))
    }

    fn service(repo: MockMemberRepository, idp: MockIdentityProvider) -> MemberManager {
        MemberManager::new(Arc::new(repo), Arc::new(idp))
    }

    #[tokio::test]
    async fn test_create_with_username_links_account() {
        let mut idp = MockIdentityProvider::new();
        idp.expect_create_user()
            .withf(|account| account.username.as_deref() == Some("jdoe"))
            .times(1)
            .returning(|_| Ok("kc-1".to_string()));

        let mut repo = MockMemberRepository::new();
        repo.expect_create()
            .withf(|_, user_id| user_id.as_deref() == Some("kc-1"))
            .returning(|new, user_id| Ok(Member::from_new(1, new, user_id)));

        let member = service(repo, idp)
            .create(new_member(Some("jdoe")))
            .await
            .unwrap();

        assert_eq!(member.user_id.as_deref(), Some("kc-1"));
    }

    #[tokio::test]
    async fn test_create_without_username_skips_identity_provider() {
        let idp = MockIdentityProvider::new();
        let mut repo = MockMemberRepository::new();
        repo.expect_create()
            .returning(|new, user_id| Ok(Member::from_new(1, new, user_id)));

        let member = service(repo, idp).create(new_member(None)).await.unwrap();
        assert_eq!(member.user_id, None);
    }

    #[tokio::test]
    async fn test_create_removes_account_when_persisting_fails() {
        let mut idp = MockIdentityProvider::new();
        idp.expect_create_user()
            .returning(|_| Ok("kc-1".to_string()));
        idp.expect_delete_user()
            .withf(|user_id| user_id == "kc-1")
            .times(1)
            .returning(|_| Ok(()));

        let mut repo = MockMemberRepository::new();
        repo.expect_create()
            .returning(|_, _| Err(AppError::internal("insert failed")));

        let result = service(repo, idp).create(new_member(Some("jdoe"))).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_update_syncs_linked_account() {
        let mut repo = MockMemberRepository::new();
        repo.expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(stored(id, Some("kc-3")))));
        repo.expect_update()
            .withf(|member| {
                member.first_name == "Jane" && member.user_id.as_deref() == Some("kc-3")
            })
            .returning(|member| Ok(Some(member)));

        let mut idp = MockIdentityProvider::new();
        idp.expect_update_user()
            .withf(|user_id, account| {
                user_id == "kc-3" && account.first_name == "Jane" && account.username.is_none()
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut new = new_member(None);
        new.first_name = "Jane".to_string();

        let member = service(repo, idp).update(3, new).await.unwrap();
        assert_eq!(member.first_name, "Jane");
    }

    #[tokio::test]
    async fn test_update_missing_member() {
        let mut repo = MockMemberRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo, MockIdentityProvider::new())
            .update(9, new_member(None))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(EntityKind::Member))));
    }

    #[tokio::test]
    async fn test_delete_removes_account_first() {
        let mut seq = mockall::Sequence::new();

        let mut idp = MockIdentityProvider::new();
        let mut repo = MockMemberRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored(id, Some("kc-5")))));
        idp.expect_delete_user()
            .withf(|user_id| user_id == "kc-5")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        repo.expect_delete()
            .with(eq(5))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));

        tokio_test::assert_ok!(service(repo, idp).delete(5).await);
    }

    #[tokio::test]
    async fn test_update_profile_merges_and_syncs_email() {
        let mut repo = MockMemberRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored(id, Some("kc-2")))));
        repo.expect_update()
            .withf(|member| {
                member.email.as_deref() == Some("new@example.com")
                    && member.first_name == "John"
                    && member.city.as_deref() == Some("Springfield")
            })
            .returning(|member| Ok(Some(member)));

        let mut idp = MockIdentityProvider::new();
        idp.expect_update_user()
            .withf(|_, account| account.email.as_deref() == Some("new@example.com"))
            .times(1)
            .returning(|_, _| Ok(()));

        let profile = Profile {
            email: Some("new@example.com".to_string()),
            city: Some("Springfield".to_string()),
            ..Profile::default()
        };

        let member = service(repo, idp).update_profile(2, profile).await.unwrap();
        assert_eq!(member.email.as_deref(), Some("new@example.com"));
    }

    #[tokio::test]
    async fn test_update_profile_without_email_change_skips_identity_provider() {
        let mut repo = MockMemberRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored(id, Some("kc-2")))));
        repo.expect_update().returning(|member| Ok(Some(member)));

        let profile = Profile {
            phone: Some("555-0100".to_string()),
            ..Profile::default()
        };

        let member = service(repo, MockIdentityProvider::new())
            .update_profile(2, profile)
            .await
            .unwrap();
        assert_eq!(member.phone.as_deref(), Some("555-0100"));
    }
}
