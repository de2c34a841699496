//! End-to-end store tests over mock gateways
//!
//! These drive the full loop: action in, reducer, effect execution,
//! resolution fed back, state settled. Terminal resolutions are observed
//! through `send_and_wait_for`, the same gate a screen would use before
//! navigating.

#![allow(clippy::unwrap_used)] // Test code

use bookstay_api::ApiError;
use bookstay_client::mocks::{
    MockAuthGateway, MockHotelGateway, MockReservationGateway, sample_hotel, sample_room,
};
use bookstay_client::{ClientAction, ClientEnvironment, ClientReducer, ClientState};
use bookstay_runtime::Store;
use bookstay_testing::{init_test_logging, test_clock};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

type TestEnv = ClientEnvironment<MockAuthGateway, MockHotelGateway, MockReservationGateway>;
type TestStore = Store<
    ClientState,
    ClientAction,
    TestEnv,
    ClientReducer<MockAuthGateway, MockHotelGateway, MockReservationGateway>,
>;

struct Harness {
    store: TestStore,
    auth: MockAuthGateway,
    hotels: MockHotelGateway,
    reservations: MockReservationGateway,
}

fn harness() -> Harness {
    init_test_logging();

    let auth = MockAuthGateway::new();
    let hotels = MockHotelGateway::with_hotels(vec![sample_hotel(1), sample_hotel(2)]);
    let reservations = MockReservationGateway::default();

    let env = TestEnv::new(
        auth.clone(),
        hotels.clone(),
        reservations.clone(),
        // Pins "today" to 2025-01-01
        Arc::new(test_clock()),
    );

    Harness {
        store: Store::new(ClientState::default(), ClientReducer::new(), env),
        auth,
        hotels,
        reservations,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const WAIT: Duration = Duration::from_secs(2);

/// The broadcast fires before the resolution's own reduction lands, so
/// state assertions after `send_and_wait_for` need a short settle.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}

async fn sign_in(harness: &Harness) {
    let resolution = harness
        .store
        .send_and_wait_for(
            ClientAction::LoginRequested {
                username: "alice".to_string(),
                password: "secret".to_string(),
            },
            |a| {
                matches!(
                    a,
                    ClientAction::SessionEstablished(_) | ClientAction::AuthFailed { .. }
                )
            },
            WAIT,
        )
        .await
        .unwrap();
    assert!(matches!(resolution, ClientAction::SessionEstablished(_)));
    settle().await;
}

#[tokio::test]
async fn test_login_establishes_session_and_installs_token() {
    let harness = harness();

    sign_in(&harness).await;

    let signed_in = harness.store.state(|s| s.session.is_authenticated()).await;
    assert!(signed_in);
    assert_eq!(
        harness.auth.installed_token().as_deref(),
        Some("token-alice")
    );
}

#[tokio::test]
async fn test_failed_login_reports_error_and_installs_nothing() {
    let harness = harness();
    harness.auth.stage_login(Err(ApiError::Unauthorized));

    let resolution = harness
        .store
        .send_and_wait_for(
            ClientAction::LoginRequested {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            },
            |a| {
                matches!(
                    a,
                    ClientAction::SessionEstablished(_) | ClientAction::AuthFailed { .. }
                )
            },
            WAIT,
        )
        .await
        .unwrap();
    settle().await;

    assert!(matches!(resolution, ClientAction::AuthFailed { .. }));
    let error = harness.store.state(|s| s.session.error.clone()).await;
    assert_eq!(error.as_deref(), Some("Invalid username or password"));
    assert!(harness.auth.installed_token().is_none());
}

#[tokio::test]
async fn test_unauthorized_fetch_tears_down_the_session() {
    let harness = harness();
    sign_in(&harness).await;

    harness.hotels.stage_list_failure(ApiError::Unauthorized);

    let resolution = harness
        .store
        .send_and_wait_for(
            ClientAction::HotelsRequested,
            |a| matches!(a, ClientAction::SessionExpired),
            WAIT,
        )
        .await
        .unwrap();
    assert!(matches!(resolution, ClientAction::SessionExpired));
    settle().await;

    let (signed_in, loading) = harness
        .store
        .state(|s| (s.session.is_authenticated(), s.hotels.loading))
        .await;
    assert!(!signed_in);
    assert!(!loading);
    assert!(harness.auth.installed_token().is_none());
}

#[tokio::test]
async fn test_logout_clears_token_even_when_backend_call_fails() {
    let harness = harness();
    sign_in(&harness).await;
    harness.auth.fail_logout();

    harness
        .store
        .send_and_wait_for(
            ClientAction::LogoutRequested,
            |a| matches!(a, ClientAction::LogoutCompleted),
            WAIT,
        )
        .await
        .unwrap();
    settle().await;

    let signed_in = harness.store.state(|s| s.session.is_authenticated()).await;
    assert!(!signed_in);
    assert!(harness.auth.installed_token().is_none());
}

#[tokio::test]
async fn test_hotel_fetch_fills_the_slice() {
    let harness = harness();

    let resolution = harness
        .store
        .send_and_wait_for(
            ClientAction::HotelsRequested,
            |a| matches!(a, ClientAction::HotelsLoaded(_) | ClientAction::HotelsFailed { .. }),
            WAIT,
        )
        .await
        .unwrap();
    assert!(matches!(resolution, ClientAction::HotelsLoaded(_)));
    settle().await;

    let (count, loading) = harness
        .store
        .state(|s| (s.hotels.items.len(), s.hotels.loading))
        .await;
    assert_eq!(count, 2);
    assert!(!loading);
}

#[tokio::test]
async fn test_planner_flow_creates_a_reservation() {
    let harness = harness();
    sign_in(&harness).await;
    harness.hotels.set_available(vec![sample_room(5, 1, 100.0)]);

    // Hotel and check-in alone are incomplete parameters, no lookup yet
    harness
        .store
        .send(ClientAction::PlannerHotelChosen { hotel_id: 1 })
        .await
        .unwrap();
    harness
        .store
        .send(ClientAction::PlannerCheckInChosen {
            date: date(2025, 1, 10),
        })
        .await
        .unwrap();

    // Completing the dates resolves availability
    let resolution = harness
        .store
        .send_and_wait_for(
            ClientAction::PlannerCheckOutChosen {
                date: date(2025, 1, 13),
            },
            |a| {
                matches!(
                    a,
                    ClientAction::AvailabilityLoaded { .. } | ClientAction::AvailabilityFailed { .. }
                )
            },
            WAIT,
        )
        .await
        .unwrap();
    assert!(matches!(resolution, ClientAction::AvailabilityLoaded { .. }));
    settle().await;

    assert_eq!(
        harness.hotels.last_availability_query(),
        Some((1, date(2025, 1, 10), date(2025, 1, 13)))
    );
    harness
        .store
        .send(ClientAction::PlannerRoomChosen { room_id: 5 })
        .await
        .unwrap();
    let price = harness.store.state(|s| s.planner.total_price()).await;
    assert_eq!(price, Some(300.0));

    // Submission gates on the create resolution
    let resolution = harness
        .store
        .send_and_wait_for(
            ClientAction::PlannerSubmitted,
            |a| {
                matches!(
                    a,
                    ClientAction::ReservationCreated(_)
                        | ClientAction::ReservationCreateFailed { .. }
                )
            },
            WAIT,
        )
        .await
        .unwrap();
    assert!(matches!(resolution, ClientAction::ReservationCreated(_)));
    settle().await;

    let (reservation_count, hotel_choice, submitting) = harness
        .store
        .state(|s| {
            (
                s.reservations.items.len(),
                s.planner.hotel_id,
                s.planner.submitting,
            )
        })
        .await;
    assert_eq!(reservation_count, 1);
    assert!(hotel_choice.is_none(), "planner resets after a create");
    assert!(!submitting);
    assert_eq!(harness.reservations.reservations().len(), 1);
}

#[tokio::test]
async fn test_rejected_create_keeps_choices_and_reports() {
    let harness = harness();
    sign_in(&harness).await;
    harness.hotels.set_available(vec![sample_room(5, 1, 100.0)]);
    harness.reservations.stage_create(Err(ApiError::Api {
        status: 409,
        message: "Room is not available".to_string(),
    }));

    harness
        .store
        .send(ClientAction::PlannerHotelChosen { hotel_id: 1 })
        .await
        .unwrap();
    harness
        .store
        .send(ClientAction::PlannerCheckInChosen {
            date: date(2025, 1, 10),
        })
        .await
        .unwrap();
    harness
        .store
        .send_and_wait_for(
            ClientAction::PlannerCheckOutChosen {
                date: date(2025, 1, 13),
            },
            |a| matches!(a, ClientAction::AvailabilityLoaded { .. }),
            WAIT,
        )
        .await
        .unwrap();
    settle().await;
    harness
        .store
        .send(ClientAction::PlannerRoomChosen { room_id: 5 })
        .await
        .unwrap();

    let resolution = harness
        .store
        .send_and_wait_for(
            ClientAction::PlannerSubmitted,
            |a| {
                matches!(
                    a,
                    ClientAction::ReservationCreated(_)
                        | ClientAction::ReservationCreateFailed { .. }
                )
            },
            WAIT,
        )
        .await
        .unwrap();
    assert!(matches!(
        resolution,
        ClientAction::ReservationCreateFailed { .. }
    ));
    settle().await;

    let (error, room_choice, submitting) = harness
        .store
        .state(|s| {
            (
                s.reservations.error.clone(),
                s.planner.room_id,
                s.planner.submitting,
            )
        })
        .await;
    assert_eq!(error.as_deref(), Some("Room is not available"));
    assert_eq!(room_choice, Some(5), "choices survive a rejected create");
    assert!(!submitting);
}
