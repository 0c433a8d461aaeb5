//! Site Configuration
//!
//! Values baked in at build time. Each one can be overridden with an
//! environment variable when the wasm bundle is compiled.

use std::str::FromStr;

use log::LevelFilter;

pub const DEFAULT_STORAGE_KEY: &str = "mansaj-content";
pub const DEFAULT_SESSION_KEY: &str = "isAdmin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "mansajadmin";
pub const DEFAULT_ADMIN_PATH: &str = "/admin";

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// localStorage key holding the document
    pub storage_key: String,
    /// sessionStorage key of the admin flag
    pub session_key: String,
    /// Shared secret for the admin page. A UI gate, not a security boundary.
    pub admin_password: String,
    /// Paths starting with this render the admin page
    pub admin_path_prefix: String,
    pub log_level: LevelFilter,
    /// Delay before a carousel's first boundary check
    pub carousel_settle_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            admin_path_prefix: DEFAULT_ADMIN_PATH.to_string(),
            log_level: LevelFilter::Info,
            carousel_settle_ms: leptos_carousel::SETTLE_DELAY_MS,
        }
    }
}

impl SiteConfig {
    /// Defaults with the compile-time `MANSAJ_*` overrides applied
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(|name| match name {
            "MANSAJ_STORAGE_KEY" => option_env!("MANSAJ_STORAGE_KEY"),
            "MANSAJ_ADMIN_PASSWORD" => option_env!("MANSAJ_ADMIN_PASSWORD"),
            "MANSAJ_LOG_LEVEL" => option_env!("MANSAJ_LOG_LEVEL"),
            _ => None,
        })
    }

    fn with_overrides<'a>(mut self, lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        if let Some(key) = lookup("MANSAJ_STORAGE_KEY").filter(|v| !v.is_empty()) {
            self.storage_key = key.to_string();
        }
        if let Some(password) = lookup("MANSAJ_ADMIN_PASSWORD").filter(|v| !v.is_empty()) {
            self.admin_password = password.to_string();
        }
        if let Some(level) = lookup("MANSAJ_LOG_LEVEL") {
            match LevelFilter::from_str(level) {
                Ok(level) => self.log_level = level,
                Err(_) => log::warn!("ignoring unknown log level {:?}", level),
            }
        }
        self
    }

    pub fn is_admin_path(&self, pathname: &str) -> bool {
        pathname.starts_with(&self.admin_path_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.storage_key, "mansaj-content");
        assert_eq!(config.session_key, "isAdmin");
        assert_eq!(config.carousel_settle_ms, 100);
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::default().with_overrides(|name| match name {
            "MANSAJ_STORAGE_KEY" => Some("preview-content"),
            "MANSAJ_LOG_LEVEL" => Some("debug"),
            _ => None,
        });
        assert_eq!(config.storage_key, "preview-content");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.admin_password, DEFAULT_ADMIN_PASSWORD);
    }

    #[test]
    fn test_bad_override_is_ignored() {
        let config = SiteConfig::default().with_overrides(|name| match name {
            "MANSAJ_LOG_LEVEL" => Some("loud"),
            "MANSAJ_ADMIN_PASSWORD" => Some(""),
            _ => None,
        });
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.admin_password, DEFAULT_ADMIN_PASSWORD);
    }

    #[test]
    fn test_admin_path() {
        let config = SiteConfig::default();
        assert!(config.is_admin_path("/admin"));
        assert!(config.is_admin_path("/admin/"));
        assert!(!config.is_admin_path("/"));
        assert!(!config.is_admin_path("/about"));
    }
}
