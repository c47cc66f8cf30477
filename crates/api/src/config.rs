use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum pooled database connections (default: `5`).
    pub db_max_connections: u32,
    /// Flat directory uploaded images are written to and served from.
    pub upload_dir: PathBuf,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
    /// Seed the default catalog and page copy into empty tables at startup.
    pub seed_default_content: bool,
    /// Bootstrap admin credentials, used only while `admin_users` is empty.
    pub admin_seed: AdminSeedConfig,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

/// Credentials of the account created on first boot.
#[derive(Debug, Clone)]
pub struct AdminSeedConfig {
    pub username: String,
    pub password: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3001`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `5`                        |
    /// | `UPLOAD_DIR`           | `uploads`                  |
    /// | `COOKIE_SECURE`        | `false`                    |
    /// | `SEED_DEFAULT_CONTENT` | `true`                     |
    /// | `ADMIN_USERNAME`       | `admin`                    |
    /// | `ADMIN_PASSWORD`       | `admin123`                 |
    ///
    /// See [`JwtConfig::from_env`] for the token settings.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()));

        let cookie_secure = env_flag("COOKIE_SECURE", false);
        let seed_default_content = env_flag("SEED_DEFAULT_CONTENT", true);

        let admin_seed = AdminSeedConfig {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into()),
        };
        assert!(
            !admin_seed.username.is_empty() && !admin_seed.password.is_empty(),
            "ADMIN_USERNAME and ADMIN_PASSWORD must not be empty"
        );

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            upload_dir,
            cookie_secure,
            seed_default_content,
            admin_seed,
            jwt,
        }
    }
}

/// Parse a boolean env var (`1/0`, `true/false`, `yes/no`).
///
/// # Panics
///
/// Panics on any other value so a typo does not silently flip a flag.
fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Err(_) => default,
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" => false,
            other => panic!("{name} must be a boolean, got '{other}'"),
        },
    }
}
