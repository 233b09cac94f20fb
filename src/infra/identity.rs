//! Identity provider integration.
//!
//! Account and role administration against a Keycloak-compatible admin
//! REST API. Club roles are realm roles; permissions are the roles of a
//! dedicated client and get attached to club roles as composites.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::LOCATION, Client, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::config::{IdentityProviderConfig, BEARER_TOKEN_PREFIX};
use crate::domain::{Permission, UserAccount};
use crate::errors::{AppError, AppResult, EntityKind};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Identity provider trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an enabled account, returning its provider-side id
    async fn create_user(&self, account: UserAccount) -> AppResult<String>;

    /// Update email and names of an account
    async fn update_user(&self, user_id: &str, account: UserAccount) -> AppResult<()>;

    /// Delete an account; an unknown id is not an error
    async fn delete_user(&self, user_id: &str) -> AppResult<()>;

    /// Create a realm role
    async fn create_role(&self, name: &str, description: Option<String>) -> AppResult<()>;

    /// Rename and/or re-describe a realm role
    async fn update_role(
        &self,
        current_name: &str,
        name: &str,
        description: Option<String>,
    ) -> AppResult<()>;

    /// Delete a realm role; an unknown name is not an error
    async fn delete_role(&self, name: &str) -> AppResult<()>;

    /// All permissions that can be attached to roles
    async fn permissions(&self) -> AppResult<Vec<Permission>>;

    /// Permissions attached to a realm role
    async fn role_permissions(&self, role: &str) -> AppResult<Vec<Permission>>;

    /// Attach a permission to a realm role
    async fn add_permission(&self, role: &str, permission: &str) -> AppResult<()>;

    /// Detach a permission from a realm role
    async fn remove_permission(&self, role: &str, permission: &str) -> AppResult<()>;
}

/// Token endpoint response (client-credentials grant)
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserRepresentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    email: Option<String>,
    first_name: String,
    last_name: String,
    enabled: bool,
}

impl From<UserAccount> for UserRepresentation {
    fn from(account: UserAccount) -> Self {
        Self {
            username: account.username,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleRepresentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    client_role: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    container_id: Option<String>,
}

impl RoleRepresentation {
    fn realm_role(name: &str, description: Option<String>) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            description,
            client_role: false,
            container_id: None,
        }
    }
}

impl From<RoleRepresentation> for Permission {
    fn from(role: RoleRepresentation) -> Self {
        Permission {
            name: role.name,
            description: role.description,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ClientRepresentation {
    id: String,
}

/// reqwest-backed admin API client
pub struct KeycloakAdmin {
    client: Client,
    config: IdentityProviderConfig,
}

impl KeycloakAdmin {
    /// Create a client for the configured realm.
    pub fn new(config: IdentityProviderConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::identity_provider(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Build `{url}/admin/realms/{realm}/{segments...}` with each segment
    /// percent-encoded.
    fn admin_url(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = Url::parse(&self.config.url).map_err(|e| {
            AppError::identity_provider(format!("Invalid identity provider URL: {}", e))
        })?;

        url.path_segments_mut()
            .map_err(|_| AppError::identity_provider("Identity provider URL cannot be a base"))?
            .pop_if_empty()
            .extend(["admin", "realms", self.config.realm.as_str()])
            .extend(segments);

        Ok(url)
    }

    fn token_url(&self) -> AppResult<Url> {
        let mut url = Url::parse(&self.config.url).map_err(|e| {
            AppError::identity_provider(format!("Invalid identity provider URL: {}", e))
        })?;

        url.path_segments_mut()
            .map_err(|_| AppError::identity_provider("Identity provider URL cannot be a base"))?
            .pop_if_empty()
            .extend([
                "realms",
                self.config.realm.as_str(),
                "protocol",
                "openid-connect",
                "token",
            ]);

        Ok(url)
    }

    /// Obtain an admin access token via the client-credentials grant.
    async fn token(&self) -> AppResult<String> {
        let response = self
            .client
            .post(self.token_url()?)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret()),
            ])
            .send()
            .await?;

        let token: TokenResponse = expect_success(response, "Token request").await?.json().await?;
        Ok(token.access_token)
    }

    /// Send an authorized request.
    async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        let token = self.token().await?;
        let response = request
            .header(
                reqwest::header::AUTHORIZATION,
                format!("{}{}", BEARER_TOKEN_PREFIX, token),
            )
            .send()
            .await?;

        Ok(response)
    }

    /// Internal id of the client whose roles are permissions.
    async fn permissions_client_id(&self) -> AppResult<String> {
        let request = self
            .client
            .get(self.admin_url(&["clients"])?)
            .query(&[("clientId", self.config.permissions_client.as_str())]);

        let clients: Vec<ClientRepresentation> =
            expect_success(self.send(request).await?, "Client lookup")
                .await?
                .json()
                .await?;

        clients.into_iter().next().map(|c| c.id).ok_or_else(|| {
            AppError::identity_provider(format!(
                "Permissions client '{}' does not exist",
                self.config.permissions_client
            ))
        })
    }

    /// Full representation of a permission (needed to attach or detach it).
    async fn permission(&self, client_id: &str, name: &str) -> AppResult<RoleRepresentation> {
        let request = self
            .client
            .get(self.admin_url(&["clients", client_id, "roles", name])?);
        let response = self.send(request).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(EntityKind::Permission));
        }

        Ok(expect_success(response, "Permission lookup")
            .await?
            .json()
            .await?)
    }

    async fn composites(&self, role: &str, permission: &str, add: bool) -> AppResult<()> {
        let client_id = self.permissions_client_id().await?;
        let representation = self.permission(&client_id, permission).await?;
        let url = self.admin_url(&["roles", role, "composites"])?;

        let request = if add {
            self.client.post(url)
        } else {
            self.client.delete(url)
        };
        let response = self.send(request.json(&[representation])).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(EntityKind::Role));
        }
        expect_success(response, "Composite role update").await?;
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for KeycloakAdmin {
    async fn create_user(&self, account: UserAccount) -> AppResult<String> {
        let request = self
            .client
            .post(self.admin_url(&["users"])?)
            .json(&UserRepresentation::from(account));
        let response = expect_success(self.send(request).await?, "User creation").await?;

        let user_id = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(id_from_location)
            .ok_or_else(|| {
                AppError::identity_provider("User creation response lacks a Location header")
            })?;

        tracing::info!(user_id = %user_id, "Identity provider account created");
        Ok(user_id)
    }

    async fn update_user(&self, user_id: &str, account: UserAccount) -> AppResult<()> {
        let request = self
            .client
            .put(self.admin_url(&["users", user_id])?)
            .json(&UserRepresentation::from(account));

        expect_success(self.send(request).await?, "User update").await?;
        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> AppResult<()> {
        let request = self.client.delete(self.admin_url(&["users", user_id])?);
        let response = self.send(request).await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(user_id = %user_id, "Identity provider account already gone");
            return Ok(());
        }

        expect_success(response, "User deletion").await?;
        tracing::info!(user_id = %user_id, "Identity provider account deleted");
        Ok(())
    }

    async fn create_role(&self, name: &str, description: Option<String>) -> AppResult<()> {
        let request = self
            .client
            .post(self.admin_url(&["roles"])?)
            .json(&RoleRepresentation::realm_role(name, description));

        expect_success(self.send(request).await?, "Role creation").await?;
        Ok(())
    }

    async fn update_role(
        &self,
        current_name: &str,
        name: &str,
        description: Option<String>,
    ) -> AppResult<()> {
        let request = self
            .client
            .put(self.admin_url(&["roles", current_name])?)
            .json(&RoleRepresentation::realm_role(name, description));

        expect_success(self.send(request).await?, "Role update").await?;
        Ok(())
    }

    async fn delete_role(&self, name: &str) -> AppResult<()> {
        let request = self.client.delete(self.admin_url(&["roles", name])?);
        let response = self.send(request).await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(role = %name, "Identity provider role already gone");
            return Ok(());
        }

        expect_success(response, "Role deletion").await?;
        Ok(())
    }

    async fn permissions(&self) -> AppResult<Vec<Permission>> {
        let client_id = self.permissions_client_id().await?;
        let request = self
            .client
            .get(self.admin_url(&["clients", &client_id, "roles"])?);

        let roles: Vec<RoleRepresentation> =
            expect_success(self.send(request).await?, "Permission listing")
                .await?
                .json()
                .await?;

        Ok(roles.into_iter().map(Permission::from).collect())
    }

    async fn role_permissions(&self, role: &str) -> AppResult<Vec<Permission>> {
        let client_id = self.permissions_client_id().await?;
        let request = self
            .client
            .get(self.admin_url(&["roles", role, "composites"])?);
        let response = self.send(request).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(EntityKind::Role));
        }

        let roles: Vec<RoleRepresentation> = expect_success(response, "Composite listing")
            .await?
            .json()
            .await?;

        Ok(permissions_of_client(roles, &client_id))
    }

    async fn add_permission(&self, role: &str, permission: &str) -> AppResult<()> {
        self.composites(role, permission, true).await
    }

    async fn remove_permission(&self, role: &str, permission: &str) -> AppResult<()> {
        self.composites(role, permission, false).await
    }
}

/// Turn a non-2xx response into an identity provider error.
async fn expect_success(response: Response, context: &str) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AppError::identity_provider(format!(
        "{} failed with {}: {}",
        context, status, body
    )))
}

/// Last path segment of a `Location` header.
fn id_from_location(location: &str) -> Option<String> {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Keep only the composites that are roles of the permissions client.
fn permissions_of_client(roles: Vec<RoleRepresentation>, client_id: &str) -> Vec<Permission> {
    roles
        .into_iter()
        .filter(|role| role.client_role && role.container_id.as_deref() == Some(client_id))
        .map(Permission::from)
        .collect()
}
