//! Identity provider configuration from environment variables.
//!
//! Authentication itself happens outside this application. The server is
//! told who the user is through the environment (or a `.env` file) and only
//! exposes that identity to the client while the session is signed in.

use std::sync::atomic::{AtomicBool, Ordering};

use store::{UserId, UserIdentity};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("not signed in")]
    SignedOut,
}

static SIGNED_OUT: AtomicBool = AtomicBool::new(false);

/// Identity reported by the configured provider.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub user: UserIdentity,
}

impl IdentityConfig {
    /// Read `NOTES_USER_ID`, `NOTES_USER_EMAIL` and the optional `NOTES_USER_NAME`.
    pub fn from_env() -> Result<Self, IdentityError> {
        crate::state::load_env();

        let id = std::env::var("NOTES_USER_ID").map_err(|_| IdentityError::Missing("NOTES_USER_ID"))?;
        let email =
            std::env::var("NOTES_USER_EMAIL").map_err(|_| IdentityError::Missing("NOTES_USER_EMAIL"))?;
        let name = std::env::var("NOTES_USER_NAME").ok();

        Ok(Self {
            user: UserIdentity {
                id: UserId::new(id),
                name,
                email,
            },
        })
    }
}

/// The signed-in user, unless the session has been signed out.
pub fn current_identity() -> Result<UserIdentity, IdentityError> {
    resolve(IdentityConfig::from_env)
}

fn resolve(load: impl FnOnce() -> Result<IdentityConfig, IdentityError>) -> Result<UserIdentity, IdentityError> {
    if SIGNED_OUT.load(Ordering::Acquire) {
        return Err(IdentityError::SignedOut);
    }
    Ok(load()?.user)
}

pub fn sign_out() {
    SIGNED_OUT.store(true, Ordering::Release);
}

/// Start a new session for the configured identity.
pub fn sign_in() -> Result<UserIdentity, IdentityError> {
    let user = IdentityConfig::from_env()?.user;
    SIGNED_OUT.store(false, Ordering::Release);
    Ok(user)
}
