//! Root client state
//!
//! One [`ClientState`] value holds everything a screen renders: the
//! session, a slice per REST resource, and the reservation planner. All
//! mutation happens inside reducers in response to actions.

use crate::planner::PlannerState;
use crate::slice::ResourceSlice;
use bookstay_api::{AuthResponse, CurrentUser, Hotel, Reservation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated identity, materialized after login or register
///
/// Exactly one session is active process-wide; it lives in
/// [`SessionState`] and mirrors the token installed in the API client's
/// token handle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Account name
    pub username: String,
    /// Roles granted to the account
    pub roles: Vec<String>,
    /// Bearer token carried on every request
    pub token: String,
    /// When this process established the session
    pub issued_at: DateTime<Utc>,
    /// When the token stops being accepted; unknown for restored sessions
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Build a session from a login or register response
    #[must_use]
    pub fn from_auth(response: AuthResponse) -> Self {
        Self {
            username: response.username,
            roles: response.roles,
            token: response.token,
            issued_at: response.issued_at,
            expires_at: Some(response.expires_at),
        }
    }

    /// Build a session from a persisted token and a fresh profile lookup
    ///
    /// The backend does not report the original issue or expiry times for
    /// an existing token, so `issued_at` records when this process
    /// restored it and `expires_at` stays unknown.
    #[must_use]
    pub fn restored(user: CurrentUser, token: String, restored_at: DateTime<Utc>) -> Self {
        Self {
            username: user.username,
            roles: user.roles,
            token,
            issued_at: restored_at,
            expires_at: None,
        }
    }

    /// Whether the account carries the given role
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Authentication slice: the session plus its request lifecycle
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Active session, if signed in
    pub session: Option<Session>,
    /// Whether an auth request is in flight
    pub loading: bool,
    /// Display message from the last rejected auth request
    pub error: Option<String>,
}

impl SessionState {
    /// Pending: an auth request was dispatched
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Fulfilled: a session was established
    pub fn establish(&mut self, session: Session) {
        self.session = Some(session);
        self.loading = false;
        self.error = None;
    }

    /// Rejected: the auth request failed
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Teardown on logout or forced expiry
    pub fn clear(&mut self) {
        self.session = None;
        self.loading = false;
        self.error = None;
    }

    /// Drop the display error (view unmount / navigation)
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Whether a session is active
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Everything the client tracks
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientState {
    /// Session and auth request lifecycle
    pub session: SessionState,
    /// Cached hotels
    pub hotels: ResourceSlice<Hotel>,
    /// Cached reservations
    pub reservations: ResourceSlice<Reservation>,
    /// Reservation planning workflow
    pub planner: PlannerState,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use crate::mocks::sample_auth_response;

    #[test]
    fn test_establish_clears_pending_failure() {
        let mut state = SessionState::default();
        state.begin();
        state.fail("bad credentials");
        state.begin();

        state.establish(Session::from_auth(sample_auth_response("alice")));

        assert!(state.is_authenticated());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_clear_removes_session_and_error() {
        let mut state = SessionState::default();
        state.establish(Session::from_auth(sample_auth_response("alice")));

        state.clear();

        assert!(!state.is_authenticated());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_restored_session_has_no_expiry() {
        let user = CurrentUser {
            username: "bob".to_string(),
            roles: vec!["USER".to_string()],
        };
        let session = Session::restored(user, "tok".to_string(), Utc::now());

        assert_eq!(session.username, "bob");
        assert!(session.expires_at.is_none());
        assert!(session.has_role("USER"));
        assert!(!session.has_role("ADMIN"));
    }
}
