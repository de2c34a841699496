//! In-memory gateway doubles and sample entities for tests
//!
//! The mocks answer from in-memory data and succeed by default; failures
//! are staged per call with the `stage_*` methods and consumed once.

use crate::environment::{AuthGateway, HotelGateway, ReservationGateway};
use bookstay_api::{
    ApiError, AuthResponse, CreateHotelRequest, CreateReservationRequest, CurrentUser, Hotel,
    LoginRequest, RegisterRequest, Reservation, ReservationFilter, ReservationStatus, Room,
    UpdateHotelRequest, UpdateReservationRequest,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// ═══════════════════════════════════════════════════════════════════════
// Sample entities
// ═══════════════════════════════════════════════════════════════════════

/// A hotel with plausible fields and the given id
#[must_use]
pub fn sample_hotel(id: i64) -> Hotel {
    Hotel {
        id,
        name: format!("Hotel {id}"),
        address: "1 Harbor Street".to_string(),
        city: "Porto".to_string(),
        country: "Portugal".to_string(),
        rating: 4.0,
        description: "Comfortable rooms near the river".to_string(),
        rooms: Vec::new(),
    }
}

/// A room with the given id, hotel, and nightly price
#[must_use]
pub fn sample_room(id: i64, hotel_id: i64, price: f64) -> Room {
    Room {
        id,
        hotel_id,
        room_number: format!("{id}0{hotel_id}"),
        kind: "DOUBLE".to_string(),
        capacity: 2,
        price,
        is_available: true,
    }
}

/// A reservation with the given id and status
#[must_use]
pub fn sample_reservation(id: i64, status: ReservationStatus) -> Reservation {
    Reservation {
        id,
        user_id: 1,
        hotel_id: 1,
        room_id: 5,
        check_in_date: date(2025, 1, 10),
        check_out_date: date(2025, 1, 13),
        total_price: 300.0,
        status,
        created_at: DateTime::<Utc>::default(),
        updated_at: DateTime::<Utc>::default(),
        hotel: None,
        room: None,
    }
}

/// The session payload the mock auth gateway answers with
#[must_use]
pub fn sample_auth_response(username: &str) -> AuthResponse {
    AuthResponse {
        token: format!("token-{username}"),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        username: username.to_string(),
        roles: vec!["USER".to_string()],
        issued_at: DateTime::<Utc>::default(),
        expires_at: DateTime::<Utc>::default() + Duration::hours(1),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn not_found(what: &str) -> ApiError {
    ApiError::Api {
        status: 404,
        message: format!("{what} not found"),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Auth
// ═══════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct AuthScript {
    token: Option<String>,
    login: Option<Result<AuthResponse, ApiError>>,
    register: Option<Result<AuthResponse, ApiError>>,
    current_user: Option<Result<CurrentUser, ApiError>>,
    fail_logout: bool,
}

/// Mock [`AuthGateway`]
///
/// Login and register succeed with [`sample_auth_response`] unless a
/// result is staged; the installed token is observable through
/// [`MockAuthGateway::installed_token`].
#[derive(Clone, Default)]
pub struct MockAuthGateway {
    inner: Arc<Mutex<AuthScript>>,
}

impl MockAuthGateway {
    /// Create a mock with default-success behavior
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, AuthScript> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stage the next login result
    pub fn stage_login(&self, result: Result<AuthResponse, ApiError>) {
        self.lock().login = Some(result);
    }

    /// Stage the next register result
    pub fn stage_register(&self, result: Result<AuthResponse, ApiError>) {
        self.lock().register = Some(result);
    }

    /// Stage the next profile lookup result
    pub fn stage_current_user(&self, result: Result<CurrentUser, ApiError>) {
        self.lock().current_user = Some(result);
    }

    /// Make the backend logout call fail
    pub fn fail_logout(&self) {
        self.lock().fail_logout = true;
    }

    /// Token currently installed, if any
    #[must_use]
    pub fn installed_token(&self) -> Option<String> {
        self.lock().token.clone()
    }

    /// Pre-install a token, as a restored process would have
    pub fn preinstall_token(&self, token: impl Into<String>) {
        self.lock().token = Some(token.into());
    }
}

impl AuthGateway for MockAuthGateway {
    fn login(
        &self,
        credentials: LoginRequest,
    ) -> impl Future<Output = bookstay_api::Result<AuthResponse>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let staged = inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .login
                .take();
            staged.unwrap_or_else(|| Ok(sample_auth_response(&credentials.username)))
        }
    }

    fn register(
        &self,
        details: RegisterRequest,
    ) -> impl Future<Output = bookstay_api::Result<AuthResponse>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let staged = inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .register
                .take();
            staged.unwrap_or_else(|| Ok(sample_auth_response(&details.username)))
        }
    }

    fn logout(&self) -> impl Future<Output = bookstay_api::Result<()>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            if inner.lock().unwrap_or_else(PoisonError::into_inner).fail_logout {
                Err(ApiError::Api {
                    status: 500,
                    message: "logout failed".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn current_user(&self) -> impl Future<Output = bookstay_api::Result<CurrentUser>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let staged = inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .current_user
                .take();
            staged.unwrap_or_else(|| {
                Ok(CurrentUser {
                    username: "alice".to_string(),
                    roles: vec!["USER".to_string()],
                })
            })
        }
    }

    fn install_token(&self, token: String) -> impl Future<Output = ()> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            inner.lock().unwrap_or_else(PoisonError::into_inner).token = Some(token);
        }
    }

    fn clear_token(&self) -> impl Future<Output = ()> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            inner.lock().unwrap_or_else(PoisonError::into_inner).token = None;
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Hotels
// ═══════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct HotelScript {
    hotels: Vec<Hotel>,
    available: Vec<Room>,
    fail_list: Option<ApiError>,
    fail_availability: Option<ApiError>,
    last_availability_query: Option<(i64, NaiveDate, NaiveDate)>,
}

/// Mock [`HotelGateway`] over an in-memory hotel list
#[derive(Clone, Default)]
pub struct MockHotelGateway {
    inner: Arc<Mutex<HotelScript>>,
}

impl MockHotelGateway {
    /// Create a mock serving the given hotels
    #[must_use]
    pub fn with_hotels(hotels: Vec<Hotel>) -> Self {
        let gateway = Self::default();
        gateway.lock().hotels = hotels;
        gateway
    }

    fn lock(&self) -> MutexGuard<'_, HotelScript> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the rooms availability lookups answer with
    pub fn set_available(&self, rooms: Vec<Room>) {
        self.lock().available = rooms;
    }

    /// Fail the next list/search/by-city call
    pub fn stage_list_failure(&self, error: ApiError) {
        self.lock().fail_list = Some(error);
    }

    /// Fail the next availability lookup
    pub fn stage_availability_failure(&self, error: ApiError) {
        self.lock().fail_availability = Some(error);
    }

    /// Parameters of the most recent availability lookup
    #[must_use]
    pub fn last_availability_query(&self) -> Option<(i64, NaiveDate, NaiveDate)> {
        self.lock().last_availability_query
    }
}

impl HotelGateway for MockHotelGateway {
    fn list(&self) -> impl Future<Output = bookstay_api::Result<Vec<Hotel>>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let mut script = inner.lock().unwrap_or_else(PoisonError::into_inner);
            match script.fail_list.take() {
                Some(error) => Err(error),
                None => Ok(script.hotels.clone()),
            }
        }
    }

    fn get(&self, id: i64) -> impl Future<Output = bookstay_api::Result<Hotel>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .hotels
                .iter()
                .find(|h| h.id == id)
                .cloned()
                .ok_or_else(|| not_found("Hotel"))
        }
    }

    fn search(&self, query: String) -> impl Future<Output = bookstay_api::Result<Vec<Hotel>>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let mut script = inner.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(error) = script.fail_list.take() {
                return Err(error);
            }
            let needle = query.to_lowercase();
            Ok(script
                .hotels
                .iter()
                .filter(|h| h.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }
    }

    fn by_city(&self, city: String) -> impl Future<Output = bookstay_api::Result<Vec<Hotel>>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let mut script = inner.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(error) = script.fail_list.take() {
                return Err(error);
            }
            Ok(script
                .hotels
                .iter()
                .filter(|h| h.city.eq_ignore_ascii_case(&city))
                .cloned()
                .collect())
        }
    }

    fn create(
        &self,
        hotel: CreateHotelRequest,
    ) -> impl Future<Output = bookstay_api::Result<Hotel>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let mut script = inner.lock().unwrap_or_else(PoisonError::into_inner);
            let id = script.hotels.iter().map(|h| h.id).max().unwrap_or(0) + 1;
            let created = Hotel {
                id,
                name: hotel.name,
                address: hotel.address,
                city: hotel.city,
                country: hotel.country,
                rating: hotel.rating,
                description: hotel.description,
                rooms: Vec::new(),
            };
            script.hotels.push(created.clone());
            Ok(created)
        }
    }

    fn update(
        &self,
        id: i64,
        changes: UpdateHotelRequest,
    ) -> impl Future<Output = bookstay_api::Result<Hotel>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let mut script = inner.lock().unwrap_or_else(PoisonError::into_inner);
            let hotel = script
                .hotels
                .iter_mut()
                .find(|h| h.id == id)
                .ok_or_else(|| not_found("Hotel"))?;
            if let Some(name) = changes.name {
                hotel.name = name;
            }
            if let Some(address) = changes.address {
                hotel.address = address;
            }
            if let Some(city) = changes.city {
                hotel.city = city;
            }
            if let Some(country) = changes.country {
                hotel.country = country;
            }
            if let Some(rating) = changes.rating {
                hotel.rating = rating;
            }
            if let Some(description) = changes.description {
                hotel.description = description;
            }
            Ok(hotel.clone())
        }
    }

    fn delete(&self, id: i64) -> impl Future<Output = bookstay_api::Result<()>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .hotels
                .retain(|h| h.id != id);
            Ok(())
        }
    }

    fn available_rooms(
        &self,
        hotel_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> impl Future<Output = bookstay_api::Result<Vec<Room>>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let mut script = inner.lock().unwrap_or_else(PoisonError::into_inner);
            script.last_availability_query = Some((hotel_id, check_in, check_out));
            if let Some(error) = script.fail_availability.take() {
                return Err(error);
            }
            Ok(script
                .available
                .iter()
                .filter(|r| r.hotel_id == hotel_id)
                .cloned()
                .collect())
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Reservations
// ═══════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct ReservationScript {
    reservations: Vec<Reservation>,
    create: Option<Result<Reservation, ApiError>>,
    fail_cancel: Option<ApiError>,
}

/// Mock [`ReservationGateway`] over an in-memory reservation list
#[derive(Clone, Default)]
pub struct MockReservationGateway {
    inner: Arc<Mutex<ReservationScript>>,
}

impl MockReservationGateway {
    /// Create a mock serving the given reservations
    #[must_use]
    pub fn with_reservations(reservations: Vec<Reservation>) -> Self {
        let gateway = Self::default();
        gateway.lock().reservations = reservations;
        gateway
    }

    fn lock(&self) -> MutexGuard<'_, ReservationScript> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stage the next create result
    pub fn stage_create(&self, result: Result<Reservation, ApiError>) {
        self.lock().create = Some(result);
    }

    /// Fail the next cancel call
    pub fn stage_cancel_failure(&self, error: ApiError) {
        self.lock().fail_cancel = Some(error);
    }

    /// Snapshot of the stored reservations
    #[must_use]
    pub fn reservations(&self) -> Vec<Reservation> {
        self.lock().reservations.clone()
    }
}

impl ReservationGateway for MockReservationGateway {
    fn list(
        &self,
        filter: ReservationFilter,
    ) -> impl Future<Output = bookstay_api::Result<Vec<Reservation>>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let script = inner.lock().unwrap_or_else(PoisonError::into_inner);
            Ok(script
                .reservations
                .iter()
                .filter(|r| filter.status.is_none_or(|s| r.status == s))
                .filter(|r| filter.hotel_id.is_none_or(|h| r.hotel_id == h))
                .cloned()
                .collect())
        }
    }

    fn mine(&self) -> impl Future<Output = bookstay_api::Result<Vec<Reservation>>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            Ok(inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .reservations
                .clone())
        }
    }

    fn get(&self, id: i64) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .reservations
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| not_found("Reservation"))
        }
    }

    fn create(
        &self,
        request: CreateReservationRequest,
    ) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let mut script = inner.lock().unwrap_or_else(PoisonError::into_inner);
            let result = script.create.take().unwrap_or_else(|| {
                let id = script.reservations.iter().map(|r| r.id).max().unwrap_or(100) + 1;
                Ok(Reservation {
                    id,
                    user_id: 1,
                    hotel_id: request.hotel_id,
                    room_id: request.room_id,
                    check_in_date: request.check_in_date,
                    check_out_date: request.check_out_date,
                    total_price: 0.0,
                    status: ReservationStatus::Pending,
                    created_at: DateTime::<Utc>::default(),
                    updated_at: DateTime::<Utc>::default(),
                    hotel: None,
                    room: None,
                })
            });
            if let Ok(reservation) = &result {
                script.reservations.push(reservation.clone());
            }
            result
        }
    }

    fn update(
        &self,
        id: i64,
        changes: UpdateReservationRequest,
    ) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let mut script = inner.lock().unwrap_or_else(PoisonError::into_inner);
            let reservation = script
                .reservations
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| not_found("Reservation"))?;
            if let Some(check_in) = changes.check_in_date {
                reservation.check_in_date = check_in;
            }
            if let Some(check_out) = changes.check_out_date {
                reservation.check_out_date = check_out;
            }
            if let Some(status) = changes.status {
                reservation.status = status;
            }
            Ok(reservation.clone())
        }
    }

    fn cancel(&self, id: i64) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            let mut script = inner.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(error) = script.fail_cancel.take() {
                return Err(error);
            }
            let reservation = script
                .reservations
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| not_found("Reservation"))?;
            reservation.status = ReservationStatus::Cancelled;
            Ok(reservation.clone())
        }
    }

    fn delete(&self, id: i64) -> impl Future<Output = bookstay_api::Result<()>> + Send {
        let inner = Arc::clone(&self.inner);
        async move {
            inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .reservations
                .retain(|r| r.id != id);
            Ok(())
        }
    }
}
