//! Template service - CRUD use cases for templates.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewTemplate, Template};
use crate::errors::{AppError, AppResult, EntityKind, OptionExt};
use crate::infra::TemplateRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Template service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TemplateService: Send + Sync {
    /// Get template by ID
    async fn get(&self, id: i64) -> AppResult<Template>;

    /// List all templates
    async fn list(&self) -> AppResult<Vec<Template>>;

    /// Create a new template
    async fn create(&self, new: NewTemplate) -> AppResult<Template>;

    /// Replace all fields of a template
    async fn update(&self, id: i64, new: NewTemplate) -> AppResult<Template>;

    /// Delete a template
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of TemplateService.
pub struct TemplateManager {
    templates: Arc<dyn TemplateRepository>,
}

impl TemplateManager {
    /// Create new template service instance
    pub fn new(templates: Arc<dyn TemplateRepository>) -> Self {
        Self { templates }
    }
}

#[async_trait]
impl TemplateService for TemplateManager {
    async fn get(&self, id: i64) -> AppResult<Template> {
        self.templates
            .find_by_id(id)
            .await?
            .ok_or_not_found(EntityKind::Template)
    }

    async fn list(&self) -> AppResult<Vec<Template>> {
        self.templates.list().await
    }

    async fn create(&self, new: NewTemplate) -> AppResult<Template> {
        self.templates.create(new).await
    }

    async fn update(&self, id: i64, new: NewTemplate) -> AppResult<Template> {
        self.templates
            .update(id, new)
            .await?
            .ok_or_not_found(EntityKind::Template)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if self.templates.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(EntityKind::Template))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockTemplateRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_create_returns_generated_id() {
        let mut repo = MockTemplateRepository::new();
        repo.expect_create().times(1).returning(|new| {
            Ok(Template {
                id: 12,
                name: new.name,
                content: new.content,
            })
        });

        let template = TemplateManager::new(Arc::new(repo))
            .create(NewTemplate {
                name: "receipt".to_string(),
                content: "Dear {{name}}".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(template.id, 12);
        assert_eq!(template.content, "Dear {{name}}");
    }

    #[tokio::test]
    async fn test_update_missing_template() {
        let mut repo = MockTemplateRepository::new();
        repo.expect_update()
            .withf(|id, _| *id == 12)
            .returning(|_, _| Ok(None));

        let result = TemplateManager::new(Arc::new(repo))
            .update(
                12,
                NewTemplate {
                    name: "receipt".to_string(),
                    content: String::new(),
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::NotFound(EntityKind::Template))));
    }

    #[tokio::test]
    async fn test_delete_template() {
        let mut repo = MockTemplateRepository::new();
        repo.expect_delete().with(eq(12)).times(1).returning(|_| Ok(true));

        tokio_test::assert_ok!(TemplateManager::new(Arc::new(repo)).delete(12).await);
    }
}
