//! Election repository implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use super::entities::election::{self, ActiveModel, Entity as ElectionEntity};
use crate::domain::{Election, NewElection};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Election repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ElectionRepository: Send + Sync {
    /// Find election by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Election>>;

    /// List all elections ordered by ID
    async fn list(&self) -> AppResult<Vec<Election>>;

    /// List the elections of one role ordered by start date
    async fn list_by_role(&self, role_id: i64) -> AppResult<Vec<Election>>;

    /// Find the open election (no end date) of a role
    async fn find_open_by_role(&self, role_id: i64) -> AppResult<Option<Election>>;

    /// Set `end_date = on` for every open election of the role except
    /// `keep` that started on or before `on`; returns the number of closed
    /// elections
    async fn close_open(&self, role_id: i64, on: NaiveDate, keep: Option<i64>) -> AppResult<u64>;

    /// Insert a new election with a generated ID
    async fn create(&self, new: NewElection) -> AppResult<Election>;

    /// Replace all fields; `None` if no election has this ID
    async fn update(&self, id: i64, new: NewElection) -> AppResult<Option<Election>>;

    /// Delete by ID; `false` if no election has this ID
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of ElectionRepository
pub struct ElectionStore {
    db: Arc<DatabaseConnection>,
}

impl ElectionStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ElectionRepository for ElectionStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Election>> {
        let result = ElectionEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Election::from))
    }

    async fn list(&self) -> AppResult<Vec<Election>> {
        let models = ElectionEntity::find()
            .order_by_asc(election::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Election::from).collect())
    }

    async fn list_by_role(&self, role_id: i64) -> AppResult<Vec<Election>> {
        let models = ElectionEntity::find()
            .filter(election::Column::RoleId.eq(role_id))
            .order_by_asc(election::Column::StartDate)
            .order_by_asc(election::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Election::from).collect())
    }

    async fn find_open_by_role(&self, role_id: i64) -> AppResult<Option<Election>> {
        let result = ElectionEntity::find()
            .filter(election::Column::RoleId.eq(role_id))
            .filter(election::Column::EndDate.is_null())
            .order_by_desc(election::Column::StartDate)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Election::from))
    }

    async fn close_open(&self, role_id: i64, on: NaiveDate, keep: Option<i64>) -> AppResult<u64> {
        let mut query = ElectionEntity::update_many()
            .col_expr(election::Column::EndDate, Expr::value(on))
            .filter(election::Column::RoleId.eq(role_id))
            .filter(election::Column::EndDate.is_null())
            .filter(election::Column::StartDate.lte(on));

        if let Some(id) = keep {
            query = query.filter(election::Column::Id.ne(id));
        }

        let result = query.exec(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(result.rows_affected)
    }

    async fn create(&self, new: NewElection) -> AppResult<Election> {
        let model = ActiveModel::from_new(new)
            .insert(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(Election::from(model))
    }

    async fn update(&self, id: i64, new: NewElection) -> AppResult<Option<Election>> {
        match ActiveModel::replace(id, new).update(self.db.as_ref()).await {
            Ok(model) => Ok(Some(Election::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = ElectionEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store(db: MockDatabase) -> ElectionStore {
        ElectionStore::new(Arc::new(db.into_connection()))
    }

    fn executed_sql(store: ElectionStore) -> Vec<String> {
        let db = Arc::try_unwrap(store.db)
            .ok()
            .expect("connection is not shared");
        db.into_transaction_log()
            .into_iter()
            .flat_map(|txn| {
                txn.statements()
                    .iter()
                    .map(|stmt| stmt.sql.clone())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_close_open_skips_kept_and_later_terms() {
        let store = store(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            },
        ]));

        let closed = store.close_open(3, date(2024, 5, 1), Some(7)).await.unwrap();
        assert_eq!(closed, 2);

        let sql = executed_sql(store);
        assert_eq!(sql.len(), 1);
        assert!(sql[0].starts_with(r#"UPDATE "elections" SET "end_date" ="#));
        assert!(sql[0].contains(r#""elections"."role_id" ="#));
        assert!(sql[0].contains(r#""elections"."end_date" IS NULL"#));
        assert!(sql[0].contains(r#""elections"."start_date" <="#));
        assert!(sql[0].contains(r#""elections"."id" <>"#));
    }

    #[tokio::test]
    async fn test_close_open_without_kept_term() {
        let store = store(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]));

        let closed = store.close_open(3, date(2024, 5, 1), None).await.unwrap();
        assert_eq!(closed, 0);

        let sql = executed_sql(store);
        assert!(!sql[0].contains(r#""elections"."id" <>"#));
    }

    #[tokio::test]
    async fn test_find_open_by_role_filters_on_missing_end_date() {
        let store = store(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([
            vec![election::Model {
                id: 4,
                role_id: 3,
                member_id: 9,
                start_date: date(2023, 1, 1),
                end_date: None,
            }],
        ]));

        let open = store.find_open_by_role(3).await.unwrap().unwrap();
        assert_eq!(open.id, 4);
        assert!(open.is_open());

        let sql = executed_sql(store);
        assert!(sql[0].contains(r#""elections"."role_id" ="#));
        assert!(sql[0].contains(r#""elections"."end_date" IS NULL"#));
        assert!(sql[0].contains(r#"ORDER BY "elections"."start_date" DESC"#));
    }

    #[tokio::test]
    async fn test_update_missing_election_returns_none() {
        let store = store(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<election::Model>::new()]),
        );

        let updated = store
            .update(99, NewElection::open(3, 9, date(2024, 1, 1)))
            .await
            .unwrap();
        assert_eq!(updated, None);
    }

    #[tokio::test]
    async fn test_delete_missing_election_returns_false() {
        let store = store(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]));

        assert!(!store.delete(99).await.unwrap());
    }
}
