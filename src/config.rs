use std::env;

use tracing::info;

use crate::{
    consts::rsvp_const::DEFAULT_CORS_ORIGIN,
    errors::{Error, Result},
};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub cors_origin: CorsOrigin,
}

/// Which origins the browser is allowed to submit from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
    Any,
    List(Vec<String>),
}

impl Config {
    pub fn load() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("invalid PORT value {raw:?}: {e}")))?,
            Err(_) => {
                info!("PORT not set, using default: 8080");
                8080
            }
        };

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| Error::Config("DATABASE_URL must be set".to_string()))?;

        Ok(Self {
            port,
            database_url,
            cors_origin: CorsOrigin::parse(env::var("CORS_ORIGIN").ok().as_deref()),
        })
    }
}

impl CorsOrigin {
    /// Unset falls back to the local dev frontend, `*` opens the endpoint up,
    /// anything else is a comma-separated allow-list.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => CorsOrigin::List(vec![DEFAULT_CORS_ORIGIN.to_string()]),
            Some(value) if value.trim() == "*" => CorsOrigin::Any,
            Some(value) => CorsOrigin::List(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_origin_defaults_to_localhost() {
        assert_eq!(
            CorsOrigin::parse(None),
            CorsOrigin::List(vec![DEFAULT_CORS_ORIGIN.to_string()])
        );
    }

    #[test]
    fn test_wildcard_origin() {
        assert_eq!(CorsOrigin::parse(Some("*")), CorsOrigin::Any);
        assert_eq!(CorsOrigin::parse(Some("  *  ")), CorsOrigin::Any);
    }

    #[test]
    fn test_comma_list_is_trimmed_and_filtered() {
        assert_eq!(
            CorsOrigin::parse(Some(" https://a.example , https://b.example ,, ")),
            CorsOrigin::List(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }
}
