//! JWT bearer-token generation and validation.
//!
//! Tokens are HS256-signed and carry the employee's email (`sub`), role name
//! and display name. There is no refresh flow: clients log in again once a
//! token expires.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audience every token is minted for and checked against.
pub const TOKEN_AUDIENCE: &str = "talentdesk-api";

/// Default token lifetime in minutes.
const DEFAULT_EXPIRY_MINS: i64 = 120;

/// Default `iss` claim.
const DEFAULT_ISSUER: &str = "talentdesk";

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the employee's email address.
    pub sub: String,
    /// Role name, e.g. `"Admin"` or `"Team Lead"`.
    pub role: String,
    /// Display name, stamped into `created_by` / `updated_by`.
    pub name: String,
    pub iss: String,
    pub aud: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    pub issuer: String,
    /// Token lifetime in minutes (default: 120).
    pub expiry_mins: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var           | Required | Default      |
    /// |-------------------|----------|--------------|
    /// | `JWT_SECRET`      | **yes**  | --           |
    /// | `JWT_ISSUER`      | no       | `talentdesk` |
    /// | `JWT_EXPIRY_MINS` | no       | `120`        |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string());

        let expiry_mins: i64 = std::env::var("JWT_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            issuer,
            expiry_mins,
        }
    }

    /// Token lifetime in seconds, as reported in `expires_in`.
    pub fn expires_in_secs(&self) -> i64 {
        self.expiry_mins * 60
    }
}

/// Generate an HS256 token for the given employee.
pub fn generate_token(
    email: &str,
    role: &str,
    name: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: email.to_string(),
        role: role.to_string(),
        name: name.to_string(),
        iss: config.issuer.clone(),
        aud: TOKEN_AUDIENCE.to_string(),
        exp: now + config.expires_in_secs(),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Checks signature, expiry, issuer and audience.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256
    validation.set_issuer(&[config.issuer.as_str()]);
    validation.set_audience(&[TOKEN_AUDIENCE]);
    validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
