//! Signed-in session state.
//!
//! Owned by the host application and passed to whatever needs the viewer,
//! instead of living in process-wide storage. Logging out drops the tokens.

use crate::core::{ContributorId, Error, Result, Viewer, ViewerRole};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// The signed-in member, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: ContributorId,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub is_superadmin: bool,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

// Tokens never reach logs.
impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated { user: SessionUser, tokens: TokenPair },
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, user: SessionUser, tokens: TokenPair) {
        info!(user = %user.id, superadmin = user.is_superadmin, "Session started");
        self.state = SessionState::Authenticated { user, tokens };
    }

    pub fn logout(&mut self) {
        if let SessionState::Authenticated { user, .. } = &self.state {
            info!(user = %user.id, "Session ended");
        }
        self.state = SessionState::Anonymous;
    }

    /// Replaces the access token after a refresh round-trip.
    pub fn refresh_access(&mut self, access: impl Into<String>) -> Result<()> {
        match &mut self.state {
            SessionState::Authenticated { tokens, user } => {
                tokens.access = access.into();
                debug!(user = %user.id, "Access token refreshed");
                Ok(())
            }
            SessionState::Anonymous => Err(Error::NotAuthenticated),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match &self.state {
            SessionState::Authenticated { user, .. } => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn tokens(&self) -> Option<&TokenPair> {
        match &self.state {
            SessionState::Authenticated { tokens, .. } => Some(tokens),
            SessionState::Anonymous => None,
        }
    }

    /// Anonymous sessions view as a standard viewer without an id.
    pub fn viewer(&self) -> Viewer {
        match self.user() {
            Some(user) => Viewer::new(Some(user.id), ViewerRole::from_superadmin(user.is_superadmin)),
            None => Viewer::default(),
        }
    }
}
