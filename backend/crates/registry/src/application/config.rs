//! Application Configuration

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::rate_limit::RateLimitConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Registry application configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC token signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL (12 hours)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Trust `X-Forwarded-For` for the rate-limit key. Only enable when a
    /// trusted reverse proxy overwrites the header; otherwise the limit
    /// is trivially bypassable.
    pub trust_forwarded_for: bool,
    /// Limit for mutating/auth endpoints
    pub write_rate_limit: RateLimitConfig,
    /// Limit for read endpoints
    pub read_rate_limit: RateLimitConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "sessao".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(12 * 3600), // 12 hours
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
            trust_forwarded_for: false,
            write_rate_limit: RateLimitConfig::new(10, 60),
            read_rate_limit: RateLimitConfig::new(30, 60),
        }
    }
}

impl RegistryConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Cookie settings for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs() as i64),
        }
    }
}
