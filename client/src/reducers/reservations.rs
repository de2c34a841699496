//! Reservation reducer: fetches, updates, cancellation, deletion
//!
//! Cancellation is guarded here: only a reservation known to be Pending
//! produces a cancel request. The create path lives in the planner
//! reducer; its resolution lands in this slice.

use super::resolve;
use crate::actions::ClientAction;
use crate::environment::{AuthGateway, ClientEnvironment, HotelGateway, ReservationGateway};
use crate::state::ClientState;
use bookstay_api::ReservationStatus;
use bookstay_core::{SmallVec, effect::Effect, smallvec};

pub(super) fn reduce<AG, HG, RG>(
    state: &mut ClientState,
    action: ClientAction,
    env: &ClientEnvironment<AG, HG, RG>,
) -> SmallVec<[Effect<ClientAction>; 4]>
where
    AG: AuthGateway + Clone,
    HG: HotelGateway + Clone,
    RG: ReservationGateway + Clone + 'static,
{
    match action {
        ClientAction::ReservationsRequested { filter } => {
            state.reservations.begin();
            let reservations = env.reservations.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    reservations.list(filter).await,
                    "Failed to load reservations",
                    ClientAction::ReservationsLoaded,
                    |message| ClientAction::ReservationsFailed { message },
                ))
            }))]
        }

        ClientAction::MyReservationsRequested => {
            state.reservations.begin();
            let reservations = env.reservations.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    reservations.mine().await,
                    "Failed to load reservations",
                    ClientAction::ReservationsLoaded,
                    |message| ClientAction::ReservationsFailed { message },
                ))
            }))]
        }

        ClientAction::ReservationsLoaded(items) => {
            state.reservations.replace_all(items);
            SmallVec::new()
        }

        ClientAction::ReservationRequested { id } => {
            state.reservations.begin();
            let reservations = env.reservations.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    reservations.get(id).await,
                    "Failed to load the reservation",
                    ClientAction::ReservationLoaded,
                    |message| ClientAction::ReservationsFailed { message },
                ))
            }))]
        }

        ClientAction::ReservationLoaded(reservation) => {
            state.reservations.focus(reservation);
            SmallVec::new()
        }

        ClientAction::ReservationUpdateRequested { id, changes } => {
            state.reservations.begin();
            let reservations = env.reservations.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    reservations.update(id, changes).await,
                    "Failed to update the reservation",
                    ClientAction::ReservationUpdated,
                    |message| ClientAction::ReservationsFailed { message },
                ))
            }))]
        }

        ClientAction::ReservationUpdated(reservation)
        | ClientAction::ReservationCancelled(reservation) => {
            state.reservations.apply_update(reservation);
            SmallVec::new()
        }

        ClientAction::ReservationCancelRequested { id } => {
            let status = state
                .reservations
                .items
                .iter()
                .find(|r| r.id == id)
                .or_else(|| state.reservations.selected.as_ref().filter(|r| r.id == id))
                .map(|r| r.status);

            match status {
                Some(ReservationStatus::Pending) => {
                    state.reservations.begin();
                    let reservations = env.reservations.clone();
                    smallvec![Effect::Future(Box::pin(async move {
                        Some(resolve(
                            reservations.cancel(id).await,
                            "Failed to cancel the reservation",
                            ClientAction::ReservationCancelled,
                            |message| ClientAction::ReservationsFailed { message },
                        ))
                    }))]
                }
                Some(status) => {
                    tracing::warn!(
                        id,
                        status = status.as_str(),
                        "Refusing to cancel a non-pending reservation"
                    );
                    SmallVec::new()
                }
                None => {
                    tracing::warn!(id, "Refusing to cancel an unknown reservation");
                    SmallVec::new()
                }
            }
        }

        ClientAction::ReservationDeleteRequested { id } => {
            state.reservations.begin();
            let reservations = env.reservations.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    reservations.delete(id).await,
                    "Failed to delete the reservation",
                    |()| ClientAction::ReservationDeleted { id },
                    |message| ClientAction::ReservationsFailed { message },
                ))
            }))]
        }

        ClientAction::ReservationDeleted { id } => {
            state.reservations.remove(id);
            SmallVec::new()
        }

        // Create resolutions arrive via the root reducer's dual routing
        ClientAction::ReservationCreated(reservation) => {
            state.reservations.upsert(reservation);
            SmallVec::new()
        }

        ClientAction::ReservationCreateFailed { message }
        | ClientAction::ReservationsFailed { message } => {
            state.reservations.reject(message);
            SmallVec::new()
        }

        ClientAction::ReservationsErrorCleared => {
            state.reservations.clear_error();
            SmallVec::new()
        }

        _ => SmallVec::new(),
    }
}
