//! Application settings loaded from environment variables.

use std::env;

use super::constants::DEFAULT_DATABASE_URL;

/// Application configuration
///
/// The listening host and port are handled by the CLI layer (clap,
/// env-backed); this struct carries the secrets.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if ACCESS_TOKEN_SECRET is not set in a release build.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("ACCESS_TOKEN_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: use default but warn
                tracing::warn!("ACCESS_TOKEN_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                // Production mode: panic
                panic!("ACCESS_TOKEN_SECRET environment variable must be set in production");
            }
        });

        Self {
            database_url: database_url_from_env(),
            jwt_secret,
        }
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

/// Resolve the MongoDB connection string.
///
/// DATABASE_URL takes precedence; otherwise the URL is assembled from
/// DB_USER / DB_PASS / DB_HOST (an Atlas-style SRV cluster).
fn database_url_from_env() -> String {
    if let Ok(url) = env::var("DATABASE_URL") {
        return url;
    }

    match (env::var("DB_USER"), env::var("DB_PASS"), env::var("DB_HOST")) {
        (Ok(user), Ok(pass), Ok(host)) => {
            format!("mongodb+srv://{user}:{pass}@{host}/?retryWrites=true&w=majority")
        }
        _ => DEFAULT_DATABASE_URL.to_string(),
    }
}
