//! Member repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::entities::member::{self, ActiveModel, Entity as MemberEntity};
use crate::domain::{Member, NewMember};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Member repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Member>>;

    /// List all members ordered by ID
    async fn list(&self) -> AppResult<Vec<Member>>;

    /// Insert a new member linked to an optional identity provider account
    async fn create(&self, new: NewMember, user_id: Option<String>) -> AppResult<Member>;

    /// Store all fields of an existing member; `None` if the ID is unknown
    async fn update(&self, member: Member) -> AppResult<Option<Member>>;

    /// Delete by ID; `false` if no member has this ID
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of MemberRepository
pub struct MemberStore {
    db: Arc<DatabaseConnection>,
}

impl MemberStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberRepository for MemberStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Member>> {
        let result = MemberEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Member::from))
    }

    async fn list(&self) -> AppResult<Vec<Member>> {
        let models = MemberEntity::find()
            .order_by_asc(member::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Member::from).collect())
    }

    async fn create(&self, new: NewMember, user_id: Option<String>) -> AppResult<Member> {
        let model = ActiveModel::from_new(new, user_id)
            .insert(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(Member::from(model))
    }

    async fn update(&self, member: Member) -> AppResult<Option<Member>> {
        match ActiveModel::from(member).update(self.db.as_ref()).await {
            Ok(model) => Ok(Some(Member::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = MemberEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
