use crate::auth::jwt::JwtConfig;

/// Credentials for the Admin account created at startup when none exists.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` and `JWT_SECRET` has a default suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// JWT signing configuration.
    pub jwt: JwtConfig,
    /// Present only when both bootstrap email and password are set.
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `DATABASE_URL`             | **required**            |
    /// | `HOST`                     | `0.0.0.0`               |
    /// | `PORT`                     | `3000`                  |
    /// | `CORS_ORIGINS`             | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
    /// | `DB_MAX_CONNECTIONS`       | `20`                    |
    /// | `BOOTSTRAP_ADMIN_EMAIL`    | unset                   |
    /// | `BOOTSTRAP_ADMIN_PASSWORD` | unset                   |
    /// | `BOOTSTRAP_ADMIN_NAME`     | `Administrator`         |
    ///
    /// JWT variables are documented on [`JwtConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics on missing required variables or unparsable values, so that
    /// misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| talentdesk_db::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let bootstrap_admin = match (
            std::env::var("BOOTSTRAP_ADMIN_EMAIL"),
            std::env::var("BOOTSTRAP_ADMIN_PASSWORD"),
        ) {
            (Ok(email), Ok(password)) if !email.is_empty() && !password.is_empty() => {
                Some(BootstrapAdmin {
                    email,
                    password,
                    name: std::env::var("BOOTSTRAP_ADMIN_NAME")
                        .unwrap_or_else(|_| "Administrator".into()),
                })
            }
            _ => None,
        };

        Self {
            database_url,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            jwt: JwtConfig::from_env(),
            bootstrap_admin,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        let origins = parse_origins(" http://a.test ,, http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }
}
