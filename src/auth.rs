//! Admin Gate
//!
//! Password check for the admin page with the result remembered for the
//! tab session. The password ships inside the bundle, so this only keeps
//! visitors from stumbling into the editor.

use std::sync::Arc;

use thiserror::Error;

use crate::config::SiteConfig;
use crate::storage::{BrowserStorage, MemoryBackend, StorageBackend, StoreError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("wrong password")]
    WrongPassword,

    #[error(transparent)]
    Storage(#[from] StoreError),
}

#[derive(Clone)]
pub struct AdminGate {
    session: Arc<dyn StorageBackend>,
    key: String,
    password: String,
}

impl AdminGate {
    pub fn new(session: Arc<dyn StorageBackend>, config: &SiteConfig) -> Self {
        Self {
            session,
            key: config.session_key.clone(),
            password: config.admin_password.clone(),
        }
    }

    /// Backed by `sessionStorage`, falling back to memory
    pub fn browser(config: &SiteConfig) -> Self {
        if BrowserStorage::Session.is_available() {
            Self::new(Arc::new(BrowserStorage::Session), config)
        } else {
            Self::new(Arc::new(MemoryBackend::new()), config)
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.session.read(&self.key), Ok(Some(flag)) if !flag.is_empty())
    }

    pub fn login(&self, password: &str) -> Result<(), AuthError> {
        if password != self.password {
            log::warn!("rejected admin login attempt");
            return Err(AuthError::WrongPassword);
        }
        self.session.write(&self.key, "true")?;
        log::info!("admin logged in");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.remove(&self.key)?;
        log::info!("admin logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AdminGate {
        AdminGate::new(Arc::new(MemoryBackend::new()), &SiteConfig::default())
    }

    #[test]
    fn test_login_and_logout() {
        let gate = gate();
        assert!(!gate.is_authenticated());

        gate.login("mansajadmin").unwrap();
        assert!(gate.is_authenticated());

        gate.logout().unwrap();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let gate = gate();
        assert!(matches!(gate.login("guess"), Err(AuthError::WrongPassword)));
        assert!(matches!(gate.login(""), Err(AuthError::WrongPassword)));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_flag_survives_a_new_gate_on_the_same_session() {
        let session = MemoryBackend::new();
        let config = SiteConfig::default();
        AdminGate::new(Arc::new(session.clone()), &config).login("mansajadmin").unwrap();

        // Page reload within the same tab
        let reloaded = AdminGate::new(Arc::new(session), &config);
        assert!(reloaded.is_authenticated());
    }
}
