//! Authentication endpoints

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{AuthResponse, CurrentUser, LoginRequest, RefreshResponse, RegisterRequest};
use reqwest::Method;

impl ApiClient {
    /// Authenticate with username and password
    ///
    /// Returns the session payload. The token is not installed
    /// automatically; pass it to [`crate::TokenHandle::install`] once the
    /// caller has decided to keep the session.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, rejected credentials, or
    /// undecodable responses.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        let request = self
            .request(Method::POST, self.endpoint(&["api", "auth", "login"]))
            .await
            .json(credentials);

        self.execute(request).await
    }

    /// Create an account
    ///
    /// The server signs the new account in immediately, so the response
    /// carries the same session payload as [`ApiClient::login`].
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, rejected registrations, or
    /// undecodable responses.
    pub async fn register(&self, details: &RegisterRequest) -> Result<AuthResponse> {
        let request = self
            .request(Method::POST, self.endpoint(&["api", "auth", "register"]))
            .await
            .json(details);

        self.execute(request).await
    }

    /// Invalidate the session on the server
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or non-success responses.
    pub async fn logout(&self) -> Result<()> {
        let request = self
            .request(Method::POST, self.endpoint(&["api", "auth", "logout"]))
            .await;

        self.execute_empty(request).await
    }

    /// Account details for the installed token
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, expired sessions, or
    /// undecodable responses.
    pub async fn current_user(&self) -> Result<CurrentUser> {
        let request = self
            .request(Method::GET, self.endpoint(&["api", "auth", "me"]))
            .await;

        self.execute(request).await
    }

    /// Exchange the installed token for a fresh one
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, expired sessions, or
    /// undecodable responses.
    pub async fn refresh_token(&self) -> Result<RefreshResponse> {
        let request = self
            .request(Method::POST, self.endpoint(&["api", "auth", "refresh"]))
            .await;

        self.execute(request).await
    }
}
