//! Planner reducer: the reservation-creation workflow
//!
//! Hotel and date choices trigger availability lookups tagged with their
//! parameters; a resolution is applied only while its tag still matches
//! the current query, so a slow response for superseded parameters can
//! never show rooms the user did not ask for.

use super::resolve;
use crate::actions::ClientAction;
use crate::environment::{AuthGateway, ClientEnvironment, HotelGateway, ReservationGateway};
use crate::planner::AvailabilityQuery;
use crate::state::ClientState;
use bookstay_api::ApiError;
use bookstay_core::{SmallVec, effect::Effect, smallvec};

pub(super) fn reduce<AG, HG, RG>(
    state: &mut ClientState,
    action: ClientAction,
    env: &ClientEnvironment<AG, HG, RG>,
) -> SmallVec<[Effect<ClientAction>; 4]>
where
    AG: AuthGateway + Clone,
    HG: HotelGateway + Clone + 'static,
    RG: ReservationGateway + Clone + 'static,
{
    match action {
        ClientAction::PlannerHotelChosen { hotel_id } => {
            let query = state.planner.choose_hotel(hotel_id, env.today());
            query_effects(query, env)
        }

        ClientAction::PlannerCheckInChosen { date } => {
            let query = state.planner.choose_check_in(date, env.today());
            query_effects(query, env)
        }

        ClientAction::PlannerCheckOutChosen { date } => {
            let query = state.planner.choose_check_out(date, env.today());
            query_effects(query, env)
        }

        ClientAction::PlannerRoomChosen { room_id } => {
            if !state.planner.choose_room(room_id) {
                tracing::warn!(room_id, "Ignoring a room outside the current candidates");
            }
            SmallVec::new()
        }

        ClientAction::AvailabilityLoaded { query, rooms } => {
            if !state.planner.apply_availability(&query, rooms) {
                tracing::debug!(?query, "Discarding a stale availability resolution");
            }
            SmallVec::new()
        }

        ClientAction::AvailabilityFailed { query, message } => {
            if state.planner.apply_availability_failure(&query, &message) {
                tracing::warn!(?query, %message, "Availability lookup failed");
            } else {
                tracing::debug!(?query, "Discarding a stale availability failure");
            }
            SmallVec::new()
        }

        ClientAction::PlannerSubmitted => match state.planner.submission(env.today()) {
            Err(error) => {
                state.planner.validation = Some(error);
                SmallVec::new()
            }
            Ok(request) => {
                state.planner.validation = None;
                state.planner.submitting = true;
                let reservations = env.reservations.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    Some(resolve(
                        reservations.create(request).await,
                        "Failed to create the reservation",
                        ClientAction::ReservationCreated,
                        |message| ClientAction::ReservationCreateFailed { message },
                    ))
                }))]
            }
        },

        ClientAction::ReservationCreated(reservation) => {
            tracing::info!(id = reservation.id, "Reservation created");
            state.planner.reset();
            SmallVec::new()
        }

        ClientAction::ReservationCreateFailed { .. } => {
            // Choices stay so the user can adjust and resubmit
            state.planner.submitting = false;
            SmallVec::new()
        }

        ClientAction::PlannerReset => {
            state.planner.reset();
            SmallVec::new()
        }

        _ => SmallVec::new(),
    }
}

/// Issue an availability lookup for a freshly built query
fn query_effects<AG, HG, RG>(
    query: Option<AvailabilityQuery>,
    env: &ClientEnvironment<AG, HG, RG>,
) -> SmallVec<[Effect<ClientAction>; 4]>
where
    AG: AuthGateway + Clone,
    HG: HotelGateway + Clone + 'static,
    RG: ReservationGateway + Clone,
{
    let Some(query) = query else {
        return SmallVec::new();
    };

    let hotels = env.hotels.clone();
    smallvec![Effect::Future(Box::pin(async move {
        let result = hotels
            .available_rooms(query.hotel_id, query.check_in, query.check_out)
            .await;
        Some(match result {
            Ok(rooms) => ClientAction::AvailabilityLoaded { query, rooms },
            Err(ApiError::Unauthorized) => ClientAction::SessionExpired,
            Err(error) => ClientAction::AvailabilityFailed {
                message: error.user_message("Could not load available rooms"),
                query,
            },
        })
    }))]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use crate::actions::ClientAction;
    use crate::error::PlanningError;
    use crate::mocks::{MockAuthGateway, MockHotelGateway, MockReservationGateway, sample_room};
    use crate::planner::AvailabilityQuery;
    use crate::reducers::ClientReducer;
    use crate::state::ClientState;
    use bookstay_testing::{ReducerTest, assertions, test_clock};
    use chrono::NaiveDate;
    use std::sync::Arc;

    type TestEnv = crate::environment::ClientEnvironment<
        MockAuthGateway,
        MockHotelGateway,
        MockReservationGateway,
    >;

    fn test_env() -> TestEnv {
        TestEnv::new(
            MockAuthGateway::new(),
            MockHotelGateway::default(),
            MockReservationGateway::default(),
            // test_clock() pins today to 2025-01-01
            Arc::new(test_clock()),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn query(hotel_id: i64, from: NaiveDate, to: NaiveDate) -> AvailabilityQuery {
        AvailabilityQuery {
            hotel_id,
            check_in: from,
            check_out: to,
        }
    }

    fn planned_state() -> ClientState {
        let mut state = ClientState::default();
        state.planner.hotel_id = Some(1);
        state.planner.check_in = Some(date(2025, 1, 10));
        state.planner.check_out = Some(date(2025, 1, 13));
        state.planner.current_query =
            Some(query(1, date(2025, 1, 10), date(2025, 1, 13)));
        state.planner.rooms = vec![sample_room(5, 1, 100.0)];
        state
    }

    #[test]
    fn test_completing_valid_parameters_issues_availability_lookup() {
        let mut state = ClientState::default();
        state.planner.hotel_id = Some(1);
        state.planner.check_in = Some(date(2025, 1, 10));

        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(ClientAction::PlannerCheckOutChosen {
                date: date(2025, 1, 13),
            })
            .then_state(|state| {
                assert_eq!(
                    state.planner.current_query,
                    Some(AvailabilityQuery {
                        hotel_id: 1,
                        check_in: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                        check_out: NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
                    })
                );
            })
            .then_effects(|effects| {
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_invalid_dates_block_query_and_record_validation() {
        let mut state = ClientState::default();
        state.planner.hotel_id = Some(1);
        state.planner.check_in = Some(date(2025, 1, 10));

        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(ClientAction::PlannerCheckOutChosen {
                date: date(2025, 1, 10),
            })
            .then_state(|state| {
                assert_eq!(
                    state.planner.validation,
                    Some(PlanningError::CheckOutNotAfterCheckIn)
                );
                assert!(state.planner.current_query.is_none());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_stale_availability_resolution_leaves_candidates_alone() {
        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(planned_state())
            .when_action(ClientAction::AvailabilityLoaded {
                query: query(1, date(2025, 2, 1), date(2025, 2, 2)),
                rooms: vec![sample_room(9, 1, 50.0)],
            })
            .then_state(|state| {
                assert_eq!(state.planner.rooms.len(), 1);
                assert_eq!(state.planner.rooms[0].id, 5);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_hotel_change_clears_chosen_room_and_price() {
        let mut state = planned_state();
        state.planner.choose_room(5);

        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(ClientAction::PlannerHotelChosen { hotel_id: 2 })
            .then_state(|state| {
                assert!(state.planner.room_id.is_none());
                assert!(state.planner.total_price().is_none());
                assert!(state.planner.rooms.is_empty());
            })
            .run();
    }

    #[test]
    fn test_submission_without_room_is_rejected_locally() {
        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(planned_state())
            .when_action(ClientAction::PlannerSubmitted)
            .then_state(|state| {
                assert_eq!(state.planner.validation, Some(PlanningError::RoomMissing));
                assert!(!state.planner.submitting);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_valid_submission_issues_create() {
        let mut state = planned_state();
        state.planner.choose_room(5);

        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(ClientAction::PlannerSubmitted)
            .then_state(|state| {
                assert!(state.planner.submitting);
                assert!(state.planner.validation.is_none());
            })
            .then_effects(|effects| {
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_created_resolution_resets_planner_and_fills_slice() {
        let mut state = planned_state();
        state.planner.choose_room(5);
        state.planner.submitting = true;

        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(ClientAction::ReservationCreated(
                crate::mocks::sample_reservation(77, bookstay_api::ReservationStatus::Pending),
            ))
            .then_state(|state| {
                assert!(!state.planner.submitting);
                assert!(state.planner.hotel_id.is_none());
                assert_eq!(state.reservations.items.len(), 1);
                assert_eq!(state.reservations.items[0].id, 77);
            })
            .run();
    }

    #[test]
    fn test_create_failure_keeps_choices_for_retry() {
        let mut state = planned_state();
        state.planner.choose_room(5);
        state.planner.submitting = true;

        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(ClientAction::ReservationCreateFailed {
                message: "Room is not available".to_string(),
            })
            .then_state(|state| {
                assert!(!state.planner.submitting);
                assert_eq!(state.planner.room_id, Some(5));
                assert_eq!(
                    state.reservations.error.as_deref(),
                    Some("Room is not available")
                );
            })
            .run();
    }
}
