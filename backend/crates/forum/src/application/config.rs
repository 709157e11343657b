//! Application Configuration
//!
//! Configuration for the forum application layer.

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Forum application configuration
///
/// Carried in an explicit context object and passed to every handler —
/// there are no ambient singletons.
#[derive(Debug, Clone)]
pub struct ForumConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Shared secret that promotes a member to admin
    pub upgrade_pass: String,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "forum_session".to_string(),
            session_secret: [0u8; 32],
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            upgrade_pass: String::new(),
        }
    }
}

impl ForumConfig {
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

    /// Cookie configuration for the session cookie.
    ///
    /// No Max-Age: the cookie lives for the browser session only.
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}
