//! Environment configuration. `.env` is honored via dotenvy in main.

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub jwt_secret: Option<String>,
    /// Layers the auth middleware over the book routes when true.
    pub protect_books: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/livraria".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
        let jwt_secret = std::env::var("JWT_SECRET").ok();
        let protect_books = match std::env::var("AUTH_PROTECT_BOOKS") {
            Err(_) => false,
            Ok(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
            Ok(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
            Ok(v) => return Err(ConfigError::InvalidVar("AUTH_PROTECT_BOOKS", v)),
        };
        if protect_books && jwt_secret.is_none() {
            return Err(ConfigError::MissingVar("JWT_SECRET"));
        }
        Ok(Self {
            database_url,
            bind_addr,
            jwt_secret,
            protect_books,
        })
    }
}
