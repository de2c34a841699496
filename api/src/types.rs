//! Wire types for the bookstay REST API
//!
//! Resource payloads use camelCase field names on the wire; the
//! authentication endpoints answer in snake_case. The serde attributes
//! below pin both conventions down.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Authentication
// ═══════════════════════════════════════════════════════════════════════════

/// Credentials for `POST /api/auth/login`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account name
    pub username: String,
    /// Plain-text password, sent over TLS
    pub password: String,
}

impl LoginRequest {
    /// Create a login request
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Payload for `POST /api/auth/register`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Desired account name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Plain-text password, sent over TLS
    pub password: String,
}

impl RegisterRequest {
    /// Create a registration request
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Session payload returned by login, register, and refresh
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    /// Token scheme, `"Bearer"` in practice
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    /// Authenticated account name
    pub username: String,
    /// Roles granted to the account
    pub roles: Vec<String>,
    /// When the token was issued
    pub issued_at: DateTime<Utc>,
    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Account details from `GET /api/auth/me`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    /// Account name
    pub username: String,
    /// Roles granted to the account
    pub roles: Vec<String>,
}

/// Fresh token from `POST /api/auth/refresh`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    /// Replacement bearer token
    pub token: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Hotels and rooms
// ═══════════════════════════════════════════════════════════════════════════

/// A hotel as served by the API
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Server-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// City the hotel is in
    pub city: String,
    /// Country the hotel is in
    pub country: String,
    /// Star rating
    pub rating: f64,
    /// Free-form description
    pub description: String,
    /// Rooms belonging to the hotel, when the endpoint embeds them
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// A room within a hotel
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Server-assigned identifier
    pub id: i64,
    /// Hotel the room belongs to
    pub hotel_id: i64,
    /// Door number, e.g. `"204"`
    pub room_number: String,
    /// Room category, e.g. `"DOUBLE"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Maximum number of guests
    pub capacity: u32,
    /// Price per night
    pub price: f64,
    /// Whether the room can currently be booked
    pub is_available: bool,
}

/// Payload for `POST /api/hotels`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelRequest {
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// City the hotel is in
    pub city: String,
    /// Country the hotel is in
    pub country: String,
    /// Star rating
    pub rating: f64,
    /// Free-form description
    pub description: String,
}

/// Payload for `PUT /api/hotels/{id}`, fields left `None` are unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotelRequest {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// New city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// New country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// New star rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for `POST /api/hotels/{hotelId}/rooms`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    /// Hotel the room belongs to
    pub hotel_id: i64,
    /// Door number
    pub room_number: String,
    /// Room category
    #[serde(rename = "type")]
    pub kind: String,
    /// Maximum number of guests
    pub capacity: u32,
    /// Price per night
    pub price: f64,
}

/// Payload for `PUT /api/hotels/{hotelId}/rooms/{roomId}`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    /// New owning hotel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<i64>,
    /// New door number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    /// New room category
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// New capacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// New nightly price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Reservations
// ═══════════════════════════════════════════════════════════════════════════

/// Lifecycle state of a reservation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    /// Created but not confirmed yet
    Pending,
    /// Confirmed by the hotel
    Confirmed,
    /// Cancelled by either side
    Cancelled,
}

impl ReservationStatus {
    /// Wire representation of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Hotel summary embedded in a reservation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationHotel {
    /// Hotel identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
}

/// Room summary embedded in a reservation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRoom {
    /// Room identifier
    pub id: i64,
    /// Door number
    pub room_number: String,
    /// Room category
    #[serde(rename = "type")]
    pub kind: String,
    /// Price per night
    pub price: f64,
}

/// A reservation as served by the API
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Server-assigned identifier
    pub id: i64,
    /// Account that made the reservation
    pub user_id: i64,
    /// Reserved hotel
    pub hotel_id: i64,
    /// Reserved room
    pub room_id: i64,
    /// First night
    pub check_in_date: NaiveDate,
    /// Departure day, exclusive
    pub check_out_date: NaiveDate,
    /// Nightly price times number of nights
    pub total_price: f64,
    /// Lifecycle state
    pub status: ReservationStatus,
    /// When the reservation was created
    pub created_at: DateTime<Utc>,
    /// When the reservation last changed
    pub updated_at: DateTime<Utc>,
    /// Hotel summary, when the endpoint embeds it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel: Option<ReservationHotel>,
    /// Room summary, when the endpoint embeds it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<ReservationRoom>,
}

/// Payload for `POST /api/reservations`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    /// Hotel to book
    pub hotel_id: i64,
    /// Room to book
    pub room_id: i64,
    /// First night
    pub check_in_date: NaiveDate,
    /// Departure day, exclusive
    pub check_out_date: NaiveDate,
}

impl CreateReservationRequest {
    /// Create a reservation request
    #[must_use]
    pub const fn new(
        hotel_id: i64,
        room_id: i64,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Self {
        Self {
            hotel_id,
            room_id,
            check_in_date,
            check_out_date,
        }
    }
}

/// Payload for `PUT /api/reservations/{id}`, fields left `None` are unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    /// New first night
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<NaiveDate>,
    /// New departure day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
    /// New lifecycle state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
}

/// Server-side filter for `GET /api/reservations`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationFilter {
    /// Only reservations in this state
    pub status: Option<ReservationStatus>,
    /// Only reservations checking in on this date
    pub check_in_date: Option<NaiveDate>,
    /// Only reservations checking out on this date
    pub check_out_date: Option<NaiveDate>,
    /// Only reservations for this hotel
    pub hotel_id: Option<i64>,
}

/// Aggregate counts from `GET /api/reservations/stats`
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationStats {
    /// All reservations
    pub total: u64,
    /// Reservations awaiting confirmation
    pub pending: u64,
    /// Confirmed reservations
    pub confirmed: u64,
    /// Cancelled reservations
    pub cancelled: u64,
}
