use famous_core::metadata::SiteInfo;
use famous_payments::StripeConfig;

use crate::auth::session::SessionConfig;

/// Default public site URL used for canonical links.
const DEFAULT_SITE_URL: &str = "https://famoussince.com";

/// Default preview image shown in link unfurls.
const DEFAULT_PREVIEW_IMAGE: &str = "/og-image.png";

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines (local development).
    Pretty,
    /// One JSON object per event (log shipping).
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// Optional values have defaults suitable for local development. Secrets
/// (`SESSION_SECRET`, `STRIPE_SECRET_KEY`) are required and the process
/// refuses to start without them.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    /// Session token verification (shared secret with the identity service).
    pub session: SessionConfig,
    /// Payment gateway credentials and checkout currency.
    pub stripe: StripeConfig,
    /// Public site URL and preview image for link metadata.
    pub site: SiteInfo,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `LOG_FORMAT`           | `pretty`                   |
    /// | `SITE_URL`             | `https://famoussince.com`  |
    /// | `SITE_PREVIEW_IMAGE`   | `/og-image.png`            |
    ///
    /// See [`SessionConfig::from_env`] and [`StripeConfig::from_env`] for the
    /// required secrets.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let log_format = LogFormat::parse(&std::env::var("LOG_FORMAT").unwrap_or_default());

        let site_url = std::env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.into());
        let preview_image =
            std::env::var("SITE_PREVIEW_IMAGE").unwrap_or_else(|_| DEFAULT_PREVIEW_IMAGE.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            log_format,
            session: SessionConfig::from_env(),
            stripe: StripeConfig::from_env(),
            site: SiteInfo::new(&site_url, &preview_image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
    }
}
