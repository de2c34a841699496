//! Session reducer: login, register, restore, logout, forced expiry

use crate::actions::ClientAction;
use crate::environment::{AuthGateway, ClientEnvironment, HotelGateway, ReservationGateway};
use crate::state::{ClientState, Session};
use bookstay_api::{ApiError, LoginRequest, RegisterRequest};
use bookstay_core::{SmallVec, effect::Effect, smallvec};
use std::sync::Arc;

pub(super) fn reduce<AG, HG, RG>(
    state: &mut ClientState,
    action: ClientAction,
    env: &ClientEnvironment<AG, HG, RG>,
) -> SmallVec<[Effect<ClientAction>; 4]>
where
    AG: AuthGateway + Clone + 'static,
    HG: HotelGateway + Clone,
    RG: ReservationGateway + Clone,
{
    match action {
        ClientAction::LoginRequested { username, password } => {
            state.session.begin();
            let auth = env.auth.clone();
            smallvec![Effect::Future(Box::pin(async move {
                match auth.login(LoginRequest::new(username, password)).await {
                    Ok(response) => {
                        auth.install_token(response.token.clone()).await;
                        Some(ClientAction::SessionEstablished(Session::from_auth(response)))
                    }
                    // 401 here is wrong credentials, not an expired session
                    Err(ApiError::Unauthorized) => Some(ClientAction::AuthFailed {
                        message: "Invalid username or password".to_string(),
                    }),
                    Err(error) => Some(ClientAction::AuthFailed {
                        message: error.user_message("Login failed"),
                    }),
                }
            }))]
        }

        ClientAction::RegisterRequested {
            username,
            email,
            password,
        } => {
            state.session.begin();
            let auth = env.auth.clone();
            smallvec![Effect::Future(Box::pin(async move {
                match auth
                    .register(RegisterRequest::new(username, email, password))
                    .await
                {
                    Ok(response) => {
                        auth.install_token(response.token.clone()).await;
                        Some(ClientAction::SessionEstablished(Session::from_auth(response)))
                    }
                    Err(error) => Some(ClientAction::AuthFailed {
                        message: error.user_message("Registration failed"),
                    }),
                }
            }))]
        }

        ClientAction::SessionRestoreRequested { token } => {
            state.session.begin();
            let auth = env.auth.clone();
            let clock = Arc::clone(&env.clock);
            smallvec![Effect::Future(Box::pin(async move {
                auth.install_token(token.clone()).await;
                match auth.current_user().await {
                    Ok(user) => Some(ClientAction::SessionEstablished(Session::restored(
                        user,
                        token,
                        clock.now(),
                    ))),
                    Err(ApiError::Unauthorized) => Some(ClientAction::SessionExpired),
                    Err(error) => Some(ClientAction::AuthFailed {
                        message: error.user_message("Could not restore the session"),
                    }),
                }
            }))]
        }

        ClientAction::SessionEstablished(session) => {
            tracing::info!(username = %session.username, "Session established");
            state.session.establish(session);
            SmallVec::new()
        }

        ClientAction::AuthFailed { message } => {
            state.session.fail(message);
            SmallVec::new()
        }

        ClientAction::LogoutRequested => {
            tracing::info!("Signing out");
            state.session.clear();
            let auth = env.auth.clone();
            smallvec![Effect::Future(Box::pin(async move {
                // Local teardown never waits on the network: the token goes
                // first, the backend is told best-effort afterwards
                auth.clear_token().await;
                if let Err(error) = auth.logout().await {
                    tracing::debug!(%error, "Backend logout notification failed");
                }
                Some(ClientAction::LogoutCompleted)
            }))]
        }

        ClientAction::LogoutCompleted => SmallVec::new(),

        ClientAction::SessionExpired => {
            tracing::warn!("Unauthorized response, tearing down the session");
            state.session.clear();
            // The 401 resolved an in-flight request; settle whichever
            // slice was waiting on it
            state.hotels.loading = false;
            state.reservations.loading = false;
            state.planner.submitting = false;
            let auth = env.auth.clone();
            smallvec![Effect::Future(Box::pin(async move {
                auth.clear_token().await;
                None
            }))]
        }

        ClientAction::AuthErrorCleared => {
            state.session.clear_error();
            SmallVec::new()
        }

        _ => SmallVec::new(),
    }
}
