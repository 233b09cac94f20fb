//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_IDP_CLIENT_ID, DEFAULT_IDP_PERMISSIONS_CLIENT,
    DEFAULT_IDP_REALM, DEFAULT_IDP_TIMEOUT_SECONDS, DEFAULT_IDP_URL, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Identity provider (admin REST API) settings
#[derive(Clone)]
pub struct IdentityProviderConfig {
    pub url: String,
    pub realm: String,
    pub client_id: String,
    client_secret: String,
    /// Client whose roles are offered as permissions
    pub permissions_client: String,
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for IdentityProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityProviderConfig")
            .field("url", &self.url)
            .field("realm", &self.realm)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("permissions_client", &self.permissions_client)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl IdentityProviderConfig {
    pub fn new(
        url: impl Into<String>,
        realm: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        permissions_client: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            realm: realm.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            permissions_client: permissions_client.into(),
            timeout_seconds: DEFAULT_IDP_TIMEOUT_SECONDS,
        }
    }

    /// Client secret for the client-credentials grant.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub identity_provider: IdentityProviderConfig,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("identity_provider", &self.identity_provider)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics in release builds if IDP_CLIENT_SECRET is not set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let client_secret = env::var("IDP_CLIENT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("IDP_CLIENT_SECRET not set, using insecure default for development");
                "dev-client-secret".to_string()
            } else {
                panic!("IDP_CLIENT_SECRET environment variable must be set in production");
            }
        });

        let mut identity_provider = IdentityProviderConfig::new(
            env::var("IDP_URL").unwrap_or_else(|_| DEFAULT_IDP_URL.to_string()),
            env::var("IDP_REALM").unwrap_or_else(|_| DEFAULT_IDP_REALM.to_string()),
            env::var("IDP_CLIENT_ID").unwrap_or_else(|_| DEFAULT_IDP_CLIENT_ID.to_string()),
            client_secret,
            env::var("IDP_PERMISSIONS_CLIENT")
                .unwrap_or_else(|_| DEFAULT_IDP_PERMISSIONS_CLIENT.to_string()),
        );
        identity_provider.timeout_seconds = env::var("IDP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_IDP_TIMEOUT_SECONDS);

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            identity_provider,
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config {
            database_url: "postgres://user:secret@db/club".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            identity_provider: IdentityProviderConfig::new(
                "http://idp/",
                "club",
                "club-api",
                "top-secret",
                "club-app",
            ),
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret@db"));
        assert!(!debug.contains("top-secret"));
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert_eq!(config.identity_provider.url, "http://idp");
    }
}
