use haven_db::repositories::ListOrder;

use crate::auth::jwt::JwtConfig;
use crate::auth::password::hash_password;

/// Server configuration loaded from environment variables.
///
/// All fields except secrets have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Origins allowed full-method access to the admin routes, parsed from
    /// comma-separated `ADMIN_CORS_ORIGINS`.
    pub admin_cors_origins: Vec<String>,
    /// Origins allowed GET-only access to the public routes. Empty means
    /// any origin.
    pub public_cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Listing order for `GET /properties` (default: descending by id).
    pub list_order: ListOrder,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Argon2 PHC hash of the shared admin password.
    pub admin_password_hash: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `ADMIN_CORS_ORIGINS`   | `http://localhost:5173` |
    /// | `PUBLIC_CORS_ORIGINS`  | (empty: any origin)     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `PROPERTY_LIST_ORDER`  | `desc`                  |
    /// | `ADMIN_PASSWORD_HASH`  | hash of `ADMIN_PASSWORD`|
    ///
    /// # Panics
    ///
    /// Panics if neither `ADMIN_PASSWORD_HASH` nor `ADMIN_PASSWORD` is set,
    /// or if a numeric variable fails to parse. Misconfiguration fails fast
    /// at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let admin_cors_origins = parse_origins(
            &std::env::var("ADMIN_CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let public_cors_origins =
            parse_origins(&std::env::var("PUBLIC_CORS_ORIGINS").unwrap_or_default());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let list_order = match std::env::var("PROPERTY_LIST_ORDER").as_deref() {
            Ok("asc") => ListOrder::Asc,
            _ => ListOrder::Desc,
        };

        let admin_password_hash = match std::env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) if !hash.is_empty() => hash,
            _ => {
                let plaintext = std::env::var("ADMIN_PASSWORD")
                    .expect("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set");
                assert!(!plaintext.is_empty(), "ADMIN_PASSWORD must not be empty");
                hash_password(&plaintext).expect("Failed to hash ADMIN_PASSWORD")
            }
        };

        Self {
            host,
            port,
            admin_cors_origins,
            public_cors_origins,
            request_timeout_secs,
            list_order,
            jwt: JwtConfig::from_env(),
            admin_password_hash,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
