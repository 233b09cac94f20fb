//! Role service - Club roles mirrored as identity provider realm roles.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewRole, Permission, Role};
use crate::errors::{AppError, AppResult, EntityKind, OptionExt};
use crate::infra::{IdentityProvider, RoleRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleService: Send + Sync {
    /// Get role by ID
    async fn get(&self, id: i64) -> AppResult<Role>;

    /// List all roles
    async fn list(&self) -> AppResult<Vec<Role>>;

    /// Create a role and its realm role
    async fn create(&self, new: NewRole) -> AppResult<Role>;

    /// Replace all fields, renaming the realm role if needed
    async fn update(&self, id: i64, new: NewRole) -> AppResult<Role>;

    /// Delete a role and its realm role
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Permissions attached to a role
    async fn permissions(&self, id: i64) -> AppResult<Vec<Permission>>;

    /// Attach a permission to a role
    async fn attach_permission(&self, id: i64, permission: String) -> AppResult<()>;

    /// Detach a permission from a role
    async fn detach_permission(&self, id: i64, permission: String) -> AppResult<()>;

    /// All permissions known to the identity provider
    async fn available_permissions(&self) -> AppResult<Vec<Permission>>;
}

/// Concrete implementation of RoleService.
pub struct RoleManager {
    roles: Arc<dyn RoleRepository>,
    identity: Arc<dyn IdentityProvider>,
}

impl RoleManager {
    /// Create new role service instance
    pub fn new(roles: Arc<dyn RoleRepository>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { roles, identity }
    }
}

#[async_trait]
impl RoleService for RoleManager {
    async fn get(&self, id: i64) -> AppResult<Role> {
        self.roles
            .find_by_id(id)
            .await?
            .ok_or_not_found(EntityKind::Role)
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        self.roles.list().await
    }

    async fn create(&self, new: NewRole) -> AppResult<Role> {
        self.identity
            .create_role(&new.name, new.description.clone())
            .await?;

        let name = new.name.clone();
        match self.roles.create(new).await {
            Ok(role) => {
                tracing::info!(role_id = role.id, role = %role.name, "Role created");
                Ok(role)
            }
            Err(e) => {
                if let Err(cleanup) = self.identity.delete_role(&name).await {
                    tracing::error!(
                        role = %name,
                        error = %cleanup,
                        "Failed to remove orphaned realm role"
                    );
                }
                Err(e)
            }
        }
    }

    async fn update(&self, id: i64, new: NewRole) -> AppResult<Role> {
        let existing = self.get(id).await?;

        self.identity
            .update_role(&existing.name, &new.name, new.description.clone())
            .await?;

        let name = new.name.clone();
        let result = self
            .roles
            .update(id, new)
            .await
            .and_then(|role| role.ok_or_not_found(EntityKind::Role));

        if result.is_err() {
            if let Err(cleanup) = self
                .identity
                .update_role(&name, &existing.name, existing.description.clone())
                .await
            {
                tracing::error!(
                    role = %name,
                    previous = %existing.name,
                    error = %cleanup,
                    "Failed to restore realm role"
                );
            }
        }

        result
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let role = self.get(id).await?;

        self.identity.delete_role(&role.name).await?;

        if self.roles.delete(id).await? {
            tracing::info!(role_id = id, role = %role.name, "Role deleted");
            Ok(())
        } else {
            Err(AppError::not_found(EntityKind::Role))
        }
    }

    async fn permissions(&self, id: i64) -> AppResult<Vec<Permission>> {
        let role = self.get(id).await?;
        self.identity.role_permissions(&role.name).await
    }

    async fn attach_permission(&self, id: i64, permission: String) -> AppResult<()> {
        let role = self.get(id).await?;
        self.identity.add_permission(&role.name, &permission).await?;

        tracing::info!(role = %role.name, permission = %permission, "Permission attached");
        Ok(())
    }

    async fn detach_permission(&self, id: i64, permission: String) -> AppResult<()> {
        let role = self.get(id).await?;
        self.identity
            .remove_permission(&role.name, &permission)
            .await?;

        tracing::info!(role = %role.name, permission = %permission, "Permission detached");
        Ok(())
    }

    async fn available_permissions(&self) -> AppResult<Vec<Permission>> {
        self.identity.permissions().await
    }
}
