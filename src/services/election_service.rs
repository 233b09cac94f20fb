//! Election service - Who holds which role, and since when.
//!
//! A role has at most one open election. Opening a new one closes the
//! previous holder's term first.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::domain::{Election, NewElection};
use crate::errors::{AppError, AppResult, EntityKind, OptionExt};
use crate::infra::{ElectionRepository, MemberRepository, RoleRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Election service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ElectionService: Send + Sync {
    /// Get election by ID
    async fn get(&self, id: i64) -> AppResult<Election>;

    /// List all elections
    async fn list(&self) -> AppResult<Vec<Election>>;

    /// Record an election; an open one closes the role's current term
    async fn create(&self, new: NewElection) -> AppResult<Election>;

    /// Replace all fields of an election
    async fn update(&self, id: i64, new: NewElection) -> AppResult<Election>;

    /// Delete an election
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Hand the role to a member starting today
    async fn elect(&self, role_id: i64, member_id: i64) -> AppResult<Election>;

    /// End the current term of a role today
    async fn finish(&self, role_id: i64) -> AppResult<()>;

    /// Current (open) election of a role
    async fn current(&self, role_id: i64) -> AppResult<Election>;

    /// All elections of a role ordered by start date
    async fn history(&self, role_id: i64) -> AppResult<Vec<Election>>;
}

/// Concrete implementation of ElectionService.
pub struct ElectionManager {
    elections: Arc<dyn ElectionRepository>,
    roles: Arc<dyn RoleRepository>,
    members: Arc<dyn MemberRepository>,
}

impl ElectionManager {
    /// Create new election service instance
    pub fn new(
        elections: Arc<dyn ElectionRepository>,
        roles: Arc<dyn RoleRepository>,
        members: Arc<dyn MemberRepository>,
    ) -> Self {
        Self {
            elections,
            roles,
            members,
        }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    async fn ensure_role(&self, role_id: i64) -> AppResult<()> {
        self.roles
            .find_by_id(role_id)
            .await?
            .ok_or_not_found(EntityKind::Role)
            .map(|_| ())
    }

    async fn ensure_member(&self, member_id: i64) -> AppResult<()> {
        self.members
            .find_by_id(member_id)
            .await?
            .ok_or_not_found(EntityKind::Member)
            .map(|_| ())
    }

    fn ensure_can_end(open: &Election, on: NaiveDate) -> AppResult<()> {
        if open.can_end_on(on) {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Election {} starts on {} and cannot end on {}",
                open.id, open.start_date, on
            )))
        }
    }

    /// Close the open terms of the role, leaving `keep` untouched.
    async fn close_terms(&self, role_id: i64, on: NaiveDate, keep: Option<i64>) -> AppResult<()> {
        if let Some(open) = self.elections.find_open_by_role(role_id).await? {
            if Some(open.id) != keep {
                Self::ensure_can_end(&open, on)?;
            }
        }
        self.close_open_terms(role_id, on, keep).await
    }

    async fn close_open_terms(
        &self,
        role_id: i64,
        on: NaiveDate,
        keep: Option<i64>,
    ) -> AppResult<()> {
        let closed = self.elections.close_open(role_id, on, keep).await?;
        if closed > 0 {
            tracing::info!(role_id, closed, end_date = %on, "Closed open elections");
        }
        Ok(())
    }
}

#[async_trait]
impl ElectionService for ElectionManager {
    async fn get(&self, id: i64) -> AppResult<Election> {
        self.elections
            .find_by_id(id)
            .await?
            .ok_or_not_found(EntityKind::Election)
    }

    async fn list(&self) -> AppResult<Vec<Election>> {
        self.elections.list().await
    }

    async fn create(&self, new: NewElection) -> AppResult<Election> {
        self.ensure_role(new.role_id).await?;
        self.ensure_member(new.member_id).await?;

        if new.end_date.is_none() {
            self.close_terms(new.role_id, new.start_date, None).await?;
        }

        self.elections.create(new).await
    }

    async fn update(&self, id: i64, new: NewElection) -> AppResult<Election> {
        self.get(id).await?;
        self.ensure_role(new.role_id).await?;
        self.ensure_member(new.member_id).await?;

        if new.end_date.is_none() {
            self.close_terms(new.role_id, new.start_date, Some(id)).await?;
        }

        self.elections
            .update(id, new)
            .await?
            .ok_or_not_found(EntityKind::Election)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if self.elections.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(EntityKind::Election))
        }
    }

    async fn elect(&self, role_id: i64, member_id: i64) -> AppResult<Election> {
        self.ensure_role(role_id).await?;
        self.ensure_member(member_id).await?;

        let today = Self::today();
        self.close_terms(role_id, today, None).await?;

        let election = self
            .elections
            .create(NewElection::open(role_id, member_id, today))
            .await?;

        tracing::info!(role_id, member_id, election_id = election.id, "Member elected");
        Ok(election)
    }

    async fn finish(&self, role_id: i64) -> AppResult<()> {
        let current = self.current(role_id).await?;
        let today = Self::today();
        Self::ensure_can_end(&current, today)?;
        self.close_open_terms(role_id, today, None).await?;

        tracing::info!(role_id, election_id = current.id, "Term finished");
        Ok(())
    }

    async fn current(&self, role_id: i64) -> AppResult<Election> {
        self.ensure_role(role_id).await?;
        self.elections
            .find_open_by_role(role_id)
            .await?
            .ok_or_not_found(EntityKind::Election)
    }

    async fn history(&self, role_id: i64) -> AppResult<Vec<Election>> {
        self.ensure_role(role_id).await?;
        self.elections.list_by_role(role_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Member, NewMember, Role};
    use crate::infra::{MockElectionRepository, MockMemberRepository, MockRoleRepository};
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn roles() -> MockRoleRepository {
        let mut repo = MockRoleRepository::new();
        repo.expect_find_by_id().returning(|id| {
            Ok(Some(Role {
                id,
                name: "chair".to_string(),
                description: None,
            }))
        });
        repo
    }

    fn members() -> MockMemberRepository {
        let mut repo = MockMemberRepository::new();
        repo.expect_find_by_id().returning(|id| {
            let new = NewMember {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: None,
                phone: None,
                street: None,
                zip_code: None,
                city: None,
                birthday: None,
                joined_on: None,
                username: None,
            };
            Ok(Some(Member::from_new(id, new, None)))
        });
        repo
    }

    fn open_term(id: i64, role_id: i64, start_date: NaiveDate) -> Election {
        Election {
            id,
            role_id,
            member_id: 1,
            start_date,
            end_date: None,
        }
    }

    fn service(elections: MockElectionRepository) -> ElectionManager {
        ElectionManager::new(Arc::new(elections), Arc::new(roles()), Arc::new(members()))
    }

    #[tokio::test]
    async fn test_elect_closes_previous_term_before_opening() {
        let today = ElectionManager::today();
        let mut seq = mockall::Sequence::new();

        let mut elections = MockElectionRepository::new();
        elections
            .expect_find_open_by_role()
            .returning(|role_id| Ok(Some(open_term(1, role_id, date(2022, 1, 1)))));
        elections
            .expect_close_open()
            .with(eq(2), eq(today), eq(None::<i64>))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(1));
        elections
            .expect_create()
            .withf(move |new| {
                new.role_id == 2
                    && new.member_id == 5
                    && new.start_date == today
                    && new.end_date.is_none()
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new| {
                Ok(Election {
                    id: 11,
                    role_id: new.role_id,
                    member_id: new.member_id,
                    start_date: new.start_date,
                    end_date: new.end_date,
                })
            });

        let election = service(elections).elect(2, 5).await.unwrap();
        assert_eq!(election.id, 11);
        assert!(election.is_open());
    }

    #[tokio::test]
    async fn test_elect_unknown_member() {
        let mut members = MockMemberRepository::new();
        members.expect_find_by_id().returning(|_| Ok(None));

        let service = ElectionManager::new(
            Arc::new(MockElectionRepository::new()),
            Arc::new(roles()),
            Arc::new(members),
        );

        let result = service.elect(2, 99).await;
        assert!(matches!(result, Err(AppError::NotFound(EntityKind::Member))));
    }

    #[tokio::test]
    async fn test_finish_without_open_election() {
        let mut elections = MockElectionRepository::new();
        elections.expect_find_open_by_role().returning(|_| Ok(None));
        elections.expect_close_open().never();

        let result = service(elections).finish(2).await;
        assert!(matches!(result, Err(AppError::NotFound(EntityKind::Election))));
    }

    #[tokio::test]
    async fn test_finish_closes_current_term_today() {
        let today = ElectionManager::today();

        let mut elections = MockElectionRepository::new();
        elections.expect_find_open_by_role().returning(|role_id| {
            Ok(Some(Election {
                id: 4,
                role_id,
                member_id: 1,
                start_date: date(2022, 1, 1),
                end_date: None,
            }))
        });
        elections
            .expect_close_open()
            .with(eq(2), eq(today), eq(None::<i64>))
            .times(1)
            .returning(|_, _, _| Ok(1));

        tokio_test::assert_ok!(service(elections).finish(2).await);
    }

    #[tokio::test]
    async fn test_create_open_election_closes_others_on_its_start_date() {
        let mut elections = MockElectionRepository::new();
        elections
            .expect_find_open_by_role()
            .returning(|role_id| Ok(Some(open_term(2, role_id, date(2023, 4, 1)))));
        elections
            .expect_close_open()
            .with(eq(3), eq(date(2024, 4, 1)), eq(None::<i64>))
            .times(1)
            .returning(|_, _, _| Ok(1));
        elections.expect_create().returning(|new| {
            Ok(Election {
                id: 8,
                role_id: new.role_id,
                member_id: new.member_id,
                start_date: new.start_date,
                end_date: new.end_date,
            })
        });

        let election = service(elections)
            .create(NewElection::open(3, 1, date(2024, 4, 1)))
            .await
            .unwrap();
        assert_eq!(election.start_date, date(2024, 4, 1));
    }

    #[tokio::test]
    async fn test_create_closed_election_leaves_current_term() {
        let mut elections = MockElectionRepository::new();
        elections.expect_close_open().never();
        elections.expect_create().returning(|new| {
            Ok(Election {
                id: 9,
                role_id: new.role_id,
                member_id: new.member_id,
                start_date: new.start_date,
                end_date: new.end_date,
            })
        });

        let new = NewElection {
            end_date: Some(date(2020, 12, 31)),
            ..NewElection::open(3, 1, date(2019, 1, 1))
        };
        tokio_test::assert_ok!(service(elections).create(new).await);
    }

    #[tokio::test]
    async fn test_update_open_election_keeps_itself_open() {
        let mut elections = MockElectionRepository::new();
        elections
            .expect_find_open_by_role()
            .returning(|role_id| Ok(Some(open_term(6, role_id, date(2024, 1, 1)))));
        elections.expect_find_by_id().returning(|id| {
            Ok(Some(Election {
                id,
                role_id: 3,
                member_id: 1,
                start_date: date(2024, 1, 1),
                end_date: None,
            }))
        });
        elections
            .expect_close_open()
            .with(eq(3), eq(date(2024, 2, 1)), eq(Some(6)))
            .times(1)
            .returning(|_, _, _| Ok(0));
        elections.expect_update().returning(|id, new| {
            Ok(Some(Election {
                id,
                role_id: new.role_id,
                member_id: new.member_id,
                start_date: new.start_date,
                end_date: new.end_date,
            }))
        });

        let election = service(elections)
            .update(6, NewElection::open(3, 1, date(2024, 2, 1)))
            .await
            .unwrap();
        assert!(election.is_open());
    }

    #[tokio::test]
    async fn test_create_open_election_before_current_term_is_rejected() {
        let mut elections = MockElectionRepository::new();
        elections
            .expect_find_open_by_role()
            .returning(|role_id| Ok(Some(open_term(2, role_id, date(2024, 6, 1)))));
        elections.expect_close_open().never();
        elections.expect_create().never();

        let result = service(elections)
            .create(NewElection::open(3, 1, date(2024, 1, 1)))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_open_election_before_other_term_is_rejected() {
        let mut elections = MockElectionRepository::new();
        elections.expect_find_by_id().returning(|id| {
            Ok(Some(Election {
                id,
                role_id: 3,
                member_id: 1,
                start_date: date(2023, 1, 1),
                end_date: Some(date(2023, 12, 31)),
            }))
        });
        elections
            .expect_find_open_by_role()
            .returning(|role_id| Ok(Some(open_term(2, role_id, date(2024, 6, 1)))));
        elections.expect_close_open().never();
        elections.expect_update().never();

        let result = service(elections)
            .update(6, NewElection::open(3, 1, date(2024, 1, 1)))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_elect_while_current_term_starts_in_future_is_rejected() {
        let upcoming = ElectionManager::today() + chrono::Days::new(30);

        let mut elections = MockElectionRepository::new();
        elections
            .expect_find_open_by_role()
            .returning(move |role_id| Ok(Some(open_term(2, role_id, upcoming))));
        elections.expect_close_open().never();
        elections.expect_create().never();

        let result = service(elections).elect(2, 5).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_finish_term_starting_in_future_is_rejected() {
        let upcoming = ElectionManager::today() + chrono::Days::new(30);

        let mut elections = MockElectionRepository::new();
        elections
            .expect_find_open_by_role()
            .returning(move |role_id| Ok(Some(open_term(2, role_id, upcoming))));
        elections.expect_close_open().never();

        let result = service(elections).finish(2).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_history_of_unknown_role() {
        let mut roles = MockRoleRepository::new();
        roles.expect_find_by_id().returning(|_| Ok(None));

        let service = ElectionManager::new(
            Arc::new(MockElectionRepository::new()),
            Arc::new(roles),
            Arc::new(members()),
        );

        let result = service.history(1).await;
        assert!(matches!(result, Err(AppError::NotFound(EntityKind::Role))));
    }
}
