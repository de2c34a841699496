//! Client environment: gateway traits and injected capabilities
//!
//! Reducers reach the network only through these traits. Production code
//! uses the HTTP-backed implementations in [`crate::gateways`]; tests use
//! the in-memory doubles in [`crate::mocks`].

use bookstay_api::{
    AuthResponse, CreateHotelRequest, CreateReservationRequest, CurrentUser, Hotel, LoginRequest,
    RegisterRequest, Reservation, ReservationFilter, Room, UpdateHotelRequest,
    UpdateReservationRequest,
};
use bookstay_core::environment::Clock;
use chrono::NaiveDate;
use std::future::Future;
use std::sync::Arc;

/// Authentication operations plus control of the shared bearer token
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a session payload
    fn login(
        &self,
        credentials: LoginRequest,
    ) -> impl Future<Output = bookstay_api::Result<AuthResponse>> + Send;

    /// Create an account; the backend answers with a session payload
    fn register(
        &self,
        details: RegisterRequest,
    ) -> impl Future<Output = bookstay_api::Result<AuthResponse>> + Send;

    /// Invalidate the session server-side
    fn logout(&self) -> impl Future<Output = bookstay_api::Result<()>> + Send;

    /// Profile for the installed token
    fn current_user(&self) -> impl Future<Output = bookstay_api::Result<CurrentUser>> + Send;

    /// Install the bearer token subsequent requests carry
    fn install_token(&self, token: String) -> impl Future<Output = ()> + Send;

    /// Remove the bearer token; requests until re-login carry none
    fn clear_token(&self) -> impl Future<Output = ()> + Send;
}

/// Hotel catalog operations
pub trait HotelGateway: Send + Sync {
    /// Every hotel
    fn list(&self) -> impl Future<Output = bookstay_api::Result<Vec<Hotel>>> + Send;

    /// One hotel by id
    fn get(&self, id: i64) -> impl Future<Output = bookstay_api::Result<Hotel>> + Send;

    /// Hotels matching a free-text search
    fn search(&self, query: String) -> impl Future<Output = bookstay_api::Result<Vec<Hotel>>> + Send;

    /// Hotels in a city
    fn by_city(&self, city: String) -> impl Future<Output = bookstay_api::Result<Vec<Hotel>>> + Send;

    /// Create a hotel
    fn create(
        &self,
        hotel: CreateHotelRequest,
    ) -> impl Future<Output = bookstay_api::Result<Hotel>> + Send;

    /// Update a hotel
    fn update(
        &self,
        id: i64,
        changes: UpdateHotelRequest,
    ) -> impl Future<Output = bookstay_api::Result<Hotel>> + Send;

    /// Delete a hotel
    fn delete(&self, id: i64) -> impl Future<Output = bookstay_api::Result<()>> + Send;

    /// Rooms free at a hotel across a date range
    fn available_rooms(
        &self,
        hotel_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> impl Future<Output = bookstay_api::Result<Vec<Room>>> + Send;
}

/// Reservation operations
pub trait ReservationGateway: Send + Sync {
    /// Reservations matching a server-side filter
    fn list(
        &self,
        filter: ReservationFilter,
    ) -> impl Future<Output = bookstay_api::Result<Vec<Reservation>>> + Send;

    /// The signed-in account's reservations
    fn mine(&self) -> impl Future<Output = bookstay_api::Result<Vec<Reservation>>> + Send;

    /// One reservation by id
    fn get(&self, id: i64) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send;

    /// Create a reservation
    fn create(
        &self,
        request: CreateReservationRequest,
    ) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send;

    /// Update a reservation's dates or status
    fn update(
        &self,
        id: i64,
        changes: UpdateReservationRequest,
    ) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send;

    /// Cancel a reservation
    fn cancel(&self, id: i64) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send;

    /// Delete a reservation
    fn delete(&self, id: i64) -> impl Future<Output = bookstay_api::Result<()>> + Send;
}

/// Injected dependencies for the client reducer
///
/// # Type Parameters
///
/// - `AG`: auth gateway
/// - `HG`: hotel gateway
/// - `RG`: reservation gateway
#[derive(Clone)]
pub struct ClientEnvironment<AG, HG, RG>
where
    AG: AuthGateway + Clone,
    HG: HotelGateway + Clone,
    RG: ReservationGateway + Clone,
{
    /// Authentication gateway
    pub auth: AG,

    /// Hotel gateway
    pub hotels: HG,

    /// Reservation gateway
    pub reservations: RG,

    /// Clock; "today" for date validation comes from here
    pub clock: Arc<dyn Clock>,
}

impl<AG, HG, RG> ClientEnvironment<AG, HG, RG>
where
    AG: AuthGateway + Clone,
    HG: HotelGateway + Clone,
    RG: ReservationGateway + Clone,
{
    /// Create an environment from its parts
    #[must_use]
    pub fn new(auth: AG, hotels: HG, reservations: RG, clock: Arc<dyn Clock>) -> Self {
        Self {
            auth,
            hotels,
            reservations,
            clock,
        }
    }

    /// Today's calendar date, time-of-day ignored
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }
}
