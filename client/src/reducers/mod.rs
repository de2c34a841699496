//! Client reducers
//!
//! One root reducer routes every [`ClientAction`] to the concern that
//! owns it: session, hotels, reservations, or planner. Reducers are
//! infallible; request failures travel back as actions, and a single
//! [`resolve`] helper translates an unauthorized result into the
//! session-expired action no matter which operation hit it.

pub mod hotels;
pub mod planner;
pub mod reservations;
pub mod session;

use crate::actions::ClientAction;
use crate::environment::{AuthGateway, ClientEnvironment, HotelGateway, ReservationGateway};
use crate::state::ClientState;
use bookstay_api::ApiError;
use bookstay_core::{SmallVec, effect::Effect, reducer::Reducer};
use std::marker::PhantomData;

/// Root reducer over the whole [`ClientState`]
///
/// Stateless; the gateway types only pin down the environment it runs
/// against.
#[derive(Clone, Debug)]
pub struct ClientReducer<AG, HG, RG> {
    _gateways: PhantomData<fn() -> (AG, HG, RG)>,
}

impl<AG, HG, RG> ClientReducer<AG, HG, RG> {
    /// Create the reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _gateways: PhantomData,
        }
    }
}

impl<AG, HG, RG> Default for ClientReducer<AG, HG, RG> {
    fn default() -> Self {
        Self::new()
    }
}

impl<AG, HG, RG> Reducer for ClientReducer<AG, HG, RG>
where
    AG: AuthGateway + Clone + 'static,
    HG: HotelGateway + Clone + 'static,
    RG: ReservationGateway + Clone + 'static,
{
    type State = ClientState;
    type Action = ClientAction;
    type Environment = ClientEnvironment<AG, HG, RG>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // The create resolution settles the planner AND lands in the
            // reservation slice
            action @ (ClientAction::ReservationCreated(_)
            | ClientAction::ReservationCreateFailed { .. }) => {
                let mut effects = planner::reduce(state, action.clone(), env);
                effects.extend(reservations::reduce(state, action, env));
                effects
            }

            action @ (ClientAction::LoginRequested { .. }
            | ClientAction::RegisterRequested { .. }
            | ClientAction::SessionRestoreRequested { .. }
            | ClientAction::SessionEstablished(_)
            | ClientAction::AuthFailed { .. }
            | ClientAction::LogoutRequested
            | ClientAction::LogoutCompleted
            | ClientAction::SessionExpired
            | ClientAction::AuthErrorCleared) => session::reduce(state, action, env),

            action @ (ClientAction::HotelsRequested
            | ClientAction::HotelSearchRequested { .. }
            | ClientAction::HotelsByCityRequested { .. }
            | ClientAction::HotelsLoaded(_)
            | ClientAction::HotelRequested { .. }
            | ClientAction::HotelLoaded(_)
            | ClientAction::HotelCreateRequested(_)
            | ClientAction::HotelCreated(_)
            | ClientAction::HotelUpdateRequested { .. }
            | ClientAction::HotelUpdated(_)
            | ClientAction::HotelDeleteRequested { .. }
            | ClientAction::HotelDeleted { .. }
            | ClientAction::HotelsFailed { .. }
            | ClientAction::HotelsErrorCleared) => hotels::reduce(state, action, env),

            action @ (ClientAction::ReservationsRequested { .. }
            | ClientAction::MyReservationsRequested
            | ClientAction::ReservationsLoaded(_)
            | ClientAction::ReservationRequested { .. }
            | ClientAction::ReservationLoaded(_)
            | ClientAction::ReservationUpdateRequested { .. }
            | ClientAction::ReservationUpdated(_)
            | ClientAction::ReservationCancelRequested { .. }
            | ClientAction::ReservationCancelled(_)
            | ClientAction::ReservationDeleteRequested { .. }
            | ClientAction::ReservationDeleted { .. }
            | ClientAction::ReservationsFailed { .. }
            | ClientAction::ReservationsErrorCleared) => reservations::reduce(state, action, env),

            action @ (ClientAction::PlannerHotelChosen { .. }
            | ClientAction::PlannerCheckInChosen { .. }
            | ClientAction::PlannerCheckOutChosen { .. }
            | ClientAction::PlannerRoomChosen { .. }
            | ClientAction::AvailabilityLoaded { .. }
            | ClientAction::AvailabilityFailed { .. }
            | ClientAction::PlannerSubmitted
            | ClientAction::PlannerReset) => planner::reduce(state, action, env),
        }
    }
}

/// Translate a request resolution into the action to feed back
///
/// An unauthorized result becomes [`ClientAction::SessionExpired`]
/// regardless of which operation produced it; every other failure becomes
/// the operation's rejection, carrying the server's message when the body
/// had one and the fallback text otherwise.
pub(crate) fn resolve<T>(
    result: Result<T, ApiError>,
    fallback: &str,
    fulfilled: impl FnOnce(T) -> ClientAction,
    rejected: impl FnOnce(String) -> ClientAction,
) -> ClientAction {
    match result {
        Ok(value) => fulfilled(value),
        Err(ApiError::Unauthorized) => ClientAction::SessionExpired,
        Err(error) => rejected(error.user_message(fallback)),
    }
}
