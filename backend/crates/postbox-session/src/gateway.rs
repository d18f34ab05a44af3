use crate::{
    Geometry, Result as SessionErrorResult, Session, SessionDriver, SessionError, SessionSettings,
};

use postbox_auth::SendCooldown;
use postbox_core::Identity;
use postbox_db::MessageStore;

use std::sync::Arc;

/// Entry point for new connections. Holds the resources every session shares.
#[derive(Clone)]
pub struct Gateway {
    store: Arc<dyn MessageStore>,
    cooldown: Arc<dyn SendCooldown>,
    settings: SessionSettings,
}

impl Gateway {
    pub fn new(
        store: Arc<dyn MessageStore>,
        cooldown: Arc<dyn SendCooldown>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            store,
            cooldown,
            settings,
        }
    }

    /// Admit a connection and start its session on the main menu.
    ///
    /// A connection without an identity is rejected before any session
    /// exists. The user row is created on first sight, touched otherwise.
    pub async fn open(
        &self,
        identity: Option<Identity>,
        geometry: Geometry,
    ) -> SessionErrorResult<Session> {
        let identity = identity.ok_or_else(|| {
            SessionError::identity("a public key is required to identify the connection")
        })?;

        self.store
            .upsert_user(&identity)
            .await
            .map_err(|e| SessionError::storage("register user", e))?;

        log::info!(
            "Session opened for {} ({}x{})",
            identity,
            geometry.width,
            geometry.height
        );

        Ok(Session::new(identity, geometry, self.settings.clone()))
    }

    pub fn driver(&self) -> SessionDriver {
        SessionDriver::new(Arc::clone(&self.store), Arc::clone(&self.cooldown))
    }
}
