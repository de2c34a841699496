//! HTTP-backed gateway implementations
//!
//! Thin adapters from the gateway traits to [`bookstay_api::ApiClient`].
//! All three share one client, so they share its connection pool and its
//! token handle.

use crate::environment::{AuthGateway, ClientEnvironment, HotelGateway, ReservationGateway};
use bookstay_api::{
    ApiClient, AuthResponse, CreateHotelRequest, CreateReservationRequest, CurrentUser, Hotel,
    LoginRequest, RegisterRequest, Reservation, ReservationFilter, Room, UpdateHotelRequest,
    UpdateReservationRequest,
};
use bookstay_core::environment::SystemClock;
use chrono::NaiveDate;
use std::future::Future;
use std::sync::Arc;

/// [`AuthGateway`] over the REST API
#[derive(Clone, Debug)]
pub struct HttpAuthGateway {
    client: ApiClient,
}

impl HttpAuthGateway {
    /// Wrap an API client
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl AuthGateway for HttpAuthGateway {
    fn login(
        &self,
        credentials: LoginRequest,
    ) -> impl Future<Output = bookstay_api::Result<AuthResponse>> + Send {
        let client = self.client.clone();
        async move { client.login(&credentials).await }
    }

    fn register(
        &self,
        details: RegisterRequest,
    ) -> impl Future<Output = bookstay_api::Result<AuthResponse>> + Send {
        let client = self.client.clone();
        async move { client.register(&details).await }
    }

    fn logout(&self) -> impl Future<Output = bookstay_api::Result<()>> + Send {
        let client = self.client.clone();
        async move { client.logout().await }
    }

    fn current_user(&self) -> impl Future<Output = bookstay_api::Result<CurrentUser>> + Send {
        let client = self.client.clone();
        async move { client.current_user().await }
    }

    fn install_token(&self, token: String) -> impl Future<Output = ()> + Send {
        let handle = self.client.token();
        async move { handle.install(token).await }
    }

    fn clear_token(&self) -> impl Future<Output = ()> + Send {
        let handle = self.client.token();
        async move { handle.clear().await }
    }
}

/// [`HotelGateway`] over the REST API
#[derive(Clone, Debug)]
pub struct HttpHotelGateway {
    client: ApiClient,
}

impl HttpHotelGateway {
    /// Wrap an API client
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl HotelGateway for HttpHotelGateway {
    fn list(&self) -> impl Future<Output = bookstay_api::Result<Vec<Hotel>>> + Send {
        let client = self.client.clone();
        async move { client.list_hotels().await }
    }

    fn get(&self, id: i64) -> impl Future<Output = bookstay_api::Result<Hotel>> + Send {
        let client = self.client.clone();
        async move { client.get_hotel(id).await }
    }

    fn search(&self, query: String) -> impl Future<Output = bookstay_api::Result<Vec<Hotel>>> + Send {
        let client = self.client.clone();
        async move { client.search_hotels(&query).await }
    }

    fn by_city(&self, city: String) -> impl Future<Output = bookstay_api::Result<Vec<Hotel>>> + Send {
        let client = self.client.clone();
        async move { client.hotels_by_city(&city).await }
    }

    fn create(
        &self,
        hotel: CreateHotelRequest,
    ) -> impl Future<Output = bookstay_api::Result<Hotel>> + Send {
        let client = self.client.clone();
        async move { client.create_hotel(&hotel).await }
    }

    fn update(
        &self,
        id: i64,
        changes: UpdateHotelRequest,
    ) -> impl Future<Output = bookstay_api::Result<Hotel>> + Send {
        let client = self.client.clone();
        async move { client.update_hotel(id, &changes).await }
    }

    fn delete(&self, id: i64) -> impl Future<Output = bookstay_api::Result<()>> + Send {
        let client = self.client.clone();
        async move { client.delete_hotel(id).await }
    }

    fn available_rooms(
        &self,
        hotel_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> impl Future<Output = bookstay_api::Result<Vec<Room>>> + Send {
        let client = self.client.clone();
        async move { client.available_rooms(hotel_id, check_in, check_out).await }
    }
}

/// [`ReservationGateway`] over the REST API
#[derive(Clone, Debug)]
pub struct HttpReservationGateway {
    client: ApiClient,
}

impl HttpReservationGateway {
    /// Wrap an API client
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ReservationGateway for HttpReservationGateway {
    fn list(
        &self,
        filter: ReservationFilter,
    ) -> impl Future<Output = bookstay_api::Result<Vec<Reservation>>> + Send {
        let client = self.client.clone();
        async move { client.list_reservations(&filter).await }
    }

    fn mine(&self) -> impl Future<Output = bookstay_api::Result<Vec<Reservation>>> + Send {
        let client = self.client.clone();
        async move { client.user_reservations().await }
    }

    fn get(&self, id: i64) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send {
        let client = self.client.clone();
        async move { client.get_reservation(id).await }
    }

    fn create(
        &self,
        request: CreateReservationRequest,
    ) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send {
        let client = self.client.clone();
        async move { client.create_reservation(&request).await }
    }

    fn update(
        &self,
        id: i64,
        changes: UpdateReservationRequest,
    ) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send {
        let client = self.client.clone();
        async move { client.update_reservation(id, &changes).await }
    }

    fn cancel(&self, id: i64) -> impl Future<Output = bookstay_api::Result<Reservation>> + Send {
        let client = self.client.clone();
        async move { client.cancel_reservation(id).await }
    }

    fn delete(&self, id: i64) -> impl Future<Output = bookstay_api::Result<()>> + Send {
        let client = self.client.clone();
        async move { client.delete_reservation(id).await }
    }
}

/// Production environment over one API client and the system clock
#[must_use]
pub fn http_environment(
    client: &ApiClient,
) -> ClientEnvironment<HttpAuthGateway, HttpHotelGateway, HttpReservationGateway> {
    ClientEnvironment::new(
        HttpAuthGateway::new(client.clone()),
        HttpHotelGateway::new(client.clone()),
        HttpReservationGateway::new(client.clone()),
        Arc::new(SystemClock),
    )
}
