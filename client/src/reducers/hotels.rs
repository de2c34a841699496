//! Hotel reducer: catalog fetches and CRUD routed through the hotel slice

use super::resolve;
use crate::actions::ClientAction;
use crate::environment::{AuthGateway, ClientEnvironment, HotelGateway, ReservationGateway};
use crate::state::ClientState;
use bookstay_core::{SmallVec, effect::Effect, smallvec};

pub(super) fn reduce<AG, HG, RG>(
    state: &mut ClientState,
    action: ClientAction,
    env: &ClientEnvironment<AG, HG, RG>,
) -> SmallVec<[Effect<ClientAction>; 4]>
where
    AG: AuthGateway + Clone,
    HG: HotelGateway + Clone + 'static,
    RG: ReservationGateway + Clone,
{
    match action {
        ClientAction::HotelsRequested => {
            state.hotels.begin();
            let hotels = env.hotels.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    hotels.list().await,
                    "Failed to load hotels",
                    ClientAction::HotelsLoaded,
                    |message| ClientAction::HotelsFailed { message },
                ))
            }))]
        }

        ClientAction::HotelSearchRequested { query } => {
            state.hotels.begin();
            let hotels = env.hotels.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    hotels.search(query).await,
                    "Search failed",
                    ClientAction::HotelsLoaded,
                    |message| ClientAction::HotelsFailed { message },
                ))
            }))]
        }

        ClientAction::HotelsByCityRequested { city } => {
            state.hotels.begin();
            let hotels = env.hotels.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    hotels.by_city(city).await,
                    "Failed to load hotels",
                    ClientAction::HotelsLoaded,
                    |message| ClientAction::HotelsFailed { message },
                ))
            }))]
        }

        ClientAction::HotelsLoaded(items) => {
            state.hotels.replace_all(items);
            SmallVec::new()
        }

        ClientAction::HotelRequested { id } => {
            state.hotels.begin();
            let hotels = env.hotels.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    hotels.get(id).await,
                    "Failed to load the hotel",
                    ClientAction::HotelLoaded,
                    |message| ClientAction::HotelsFailed { message },
                ))
            }))]
        }

        ClientAction::HotelLoaded(hotel) => {
            state.hotels.focus(hotel);
            SmallVec::new()
        }

        ClientAction::HotelCreateRequested(request) => {
            state.hotels.begin();
            let hotels = env.hotels.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    hotels.create(request).await,
                    "Failed to create the hotel",
                    ClientAction::HotelCreated,
                    |message| ClientAction::HotelsFailed { message },
                ))
            }))]
        }

        ClientAction::HotelCreated(hotel) => {
            state.hotels.upsert(hotel);
            SmallVec::new()
        }

        ClientAction::HotelUpdateRequested { id, changes } => {
            state.hotels.begin();
            let hotels = env.hotels.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    hotels.update(id, changes).await,
                    "Failed to update the hotel",
                    ClientAction::HotelUpdated,
                    |message| ClientAction::HotelsFailed { message },
                ))
            }))]
        }

        ClientAction::HotelUpdated(hotel) => {
            state.hotels.apply_update(hotel);
            SmallVec::new()
        }

        ClientAction::HotelDeleteRequested { id } => {
            state.hotels.begin();
            let hotels = env.hotels.clone();
            smallvec![Effect::Future(Box::pin(async move {
                Some(resolve(
                    hotels.delete(id).await,
                    "Failed to delete the hotel",
                    |()| ClientAction::HotelDeleted { id },
                    |message| ClientAction::HotelsFailed { message },
                ))
            }))]
        }

        ClientAction::HotelDeleted { id } => {
            state.hotels.remove(id);
            SmallVec::new()
        }

        ClientAction::HotelsFailed { message } => {
            state.hotels.reject(message);
            SmallVec::new()
        }

        ClientAction::HotelsErrorCleared => {
            state.hotels.clear_error();
            SmallVec::new()
        }

        _ => SmallVec::new(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use crate::actions::ClientAction;
    use crate::mocks::{MockAuthGateway, MockHotelGateway, MockReservationGateway, sample_hotel};
    use crate::reducers::ClientReducer;
    use crate::state::ClientState;
    use bookstay_testing::{ReducerTest, assertions, test_clock};
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
            Arc::new(test_clock()),
        )
    }

    #[test]
    fn test_fetch_all_begins_and_issues_effect() {
        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(ClientState::default())
            .when_action(ClientAction::HotelsRequested)
            .then_state(|state| {
                assert!(state.hotels.loading);
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn test_loaded_replaces_list_and_stops_loading() {
        let mut pending = ClientState::default();
        pending.hotels.begin();

        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(pending)
            .when_action(ClientAction::HotelsLoaded(vec![
                sample_hotel(1),
                sample_hotel(2),
            ]))
            .then_state(|state| {
                assert!(!state.hotels.loading);
                assert_eq!(state.hotels.items.len(), 2);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_rejected_fetch_keeps_selection() {
        let mut state = ClientState::default();
        state.hotels.focus(sample_hotel(3));
        state.hotels.begin();

        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(ClientAction::HotelsFailed {
                message: "boom".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.hotels.selected.as_ref().map(|h| h.id), Some(3));
                assert_eq!(state.hotels.error.as_deref(), Some("boom"));
            })
            .run();
    }

    #[test]
    fn test_deleted_clears_matching_selection() {
        let mut state = ClientState::default();
        state.hotels.replace_all(vec![sample_hotel(1), sample_hotel(2)]);
        state.hotels.focus(sample_hotel(2));

        ReducerTest::new(ClientReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(ClientAction::HotelDeleted { id: 2 })
            .then_state(|state| {
                assert!(state.hotels.selected.is_none());
                assert_eq!(state.hotels.items.len(), 1);
            })
            .run();
    }
}
