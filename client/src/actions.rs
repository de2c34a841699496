//! Client actions
//!
//! Every input the store accepts, user intents and request resolutions
//! alike. `*Requested` variants start an operation (Pending); the paired
//! result variants are produced by effects when the request resolves
//! (Fulfilled / Rejected). Actions are the only way to change state.

use crate::planner::AvailabilityQuery;
use crate::state::Session;
use bookstay_api::{
    CreateHotelRequest, Hotel, Reservation, ReservationFilter, Room, UpdateHotelRequest,
    UpdateReservationRequest,
};
use chrono::NaiveDate;

/// All inputs to the client reducer
#[derive(Clone, Debug, PartialEq)]
pub enum ClientAction {
    // ═══════════════════════════════════════════════════════════════════
    // Session
    // ═══════════════════════════════════════════════════════════════════
    /// Sign in with credentials
    LoginRequested {
        /// Account name
        username: String,
        /// Plain-text password
        password: String,
    },

    /// Create an account; the backend signs it in immediately
    RegisterRequested {
        /// Desired account name
        username: String,
        /// Contact email
        email: String,
        /// Plain-text password
        password: String,
    },

    /// Re-establish a session from a persisted token at process start
    SessionRestoreRequested {
        /// Previously persisted bearer token
        token: String,
    },

    /// A session was established and its token installed
    SessionEstablished(Session),

    /// An auth request failed
    AuthFailed {
        /// Display message
        message: String,
    },

    /// Sign out: tear down locally, notify the backend best-effort
    LogoutRequested,

    /// The logout side effects finished
    LogoutCompleted,

    /// A 401 resolved somewhere: forced teardown
    SessionExpired,

    /// Drop the auth display error
    AuthErrorCleared,

    // ═══════════════════════════════════════════════════════════════════
    // Hotels
    // ═══════════════════════════════════════════════════════════════════
    /// Fetch every hotel
    HotelsRequested,

    /// Fetch hotels matching a free-text search
    HotelSearchRequested {
        /// Search text
        query: String,
    },

    /// Fetch hotels in a city
    HotelsByCityRequested {
        /// City name
        city: String,
    },

    /// A hotel list arrived; it replaces the cached list
    HotelsLoaded(Vec<Hotel>),

    /// Fetch one hotel
    HotelRequested {
        /// Hotel to fetch
        id: i64,
    },

    /// A hotel detail arrived; it becomes the selection
    HotelLoaded(Hotel),

    /// Create a hotel
    HotelCreateRequested(CreateHotelRequest),

    /// A hotel was created
    HotelCreated(Hotel),

    /// Update a hotel
    HotelUpdateRequested {
        /// Hotel to update
        id: i64,
        /// Fields to change
        changes: UpdateHotelRequest,
    },

    /// A hotel was updated
    HotelUpdated(Hotel),

    /// Delete a hotel
    HotelDeleteRequested {
        /// Hotel to delete
        id: i64,
    },

    /// A hotel was deleted
    HotelDeleted {
        /// Deleted hotel id
        id: i64,
    },

    /// A hotel request failed
    HotelsFailed {
        /// Display message
        message: String,
    },

    /// Drop the hotel display error
    HotelsErrorCleared,

    // ═══════════════════════════════════════════════════════════════════
    // Reservations
    // ═══════════════════════════════════════════════════════════════════
    /// Fetch reservations, optionally filtered server-side
    ReservationsRequested {
        /// Status / hotel / date filters
        filter: ReservationFilter,
    },

    /// Fetch the signed-in account's reservations
    MyReservationsRequested,

    /// A reservation list arrived; it replaces the cached list
    ReservationsLoaded(Vec<Reservation>),

    /// Fetch one reservation
    ReservationRequested {
        /// Reservation to fetch
        id: i64,
    },

    /// A reservation detail arrived; it becomes the selection
    ReservationLoaded(Reservation),

    /// Update a reservation's dates or status
    ReservationUpdateRequested {
        /// Reservation to update
        id: i64,
        /// Fields to change
        changes: UpdateReservationRequest,
    },

    /// A reservation was updated
    ReservationUpdated(Reservation),

    /// Cancel a pending reservation
    ReservationCancelRequested {
        /// Reservation to cancel
        id: i64,
    },

    /// A reservation was cancelled
    ReservationCancelled(Reservation),

    /// Delete a reservation
    ReservationDeleteRequested {
        /// Reservation to delete
        id: i64,
    },

    /// A reservation was deleted
    ReservationDeleted {
        /// Deleted reservation id
        id: i64,
    },

    /// A reservation request failed
    ReservationsFailed {
        /// Display message
        message: String,
    },

    /// Drop the reservation display error
    ReservationsErrorCleared,

    // ═══════════════════════════════════════════════════════════════════
    // Reservation planner
    // ═══════════════════════════════════════════════════════════════════
    /// Choose the hotel to book
    PlannerHotelChosen {
        /// Chosen hotel
        hotel_id: i64,
    },

    /// Choose the first night
    PlannerCheckInChosen {
        /// Check-in date
        date: NaiveDate,
    },

    /// Choose the departure day
    PlannerCheckOutChosen {
        /// Check-out date
        date: NaiveDate,
    },

    /// Choose a room from the current candidates
    PlannerRoomChosen {
        /// Chosen room
        room_id: i64,
    },

    /// An availability lookup resolved
    AvailabilityLoaded {
        /// Parameters that produced this result
        query: AvailabilityQuery,
        /// Rooms free across the queried range
        rooms: Vec<Room>,
    },

    /// An availability lookup failed
    AvailabilityFailed {
        /// Parameters that produced this failure
        query: AvailabilityQuery,
        /// Display message
        message: String,
    },

    /// Submit the planned reservation
    PlannerSubmitted,

    /// The create request resolved; callers gating navigation wait for
    /// this (or [`ClientAction::ReservationCreateFailed`])
    ReservationCreated(Reservation),

    /// The create request failed
    ReservationCreateFailed {
        /// Display message
        message: String,
    },

    /// Discard the planner's choices
    PlannerReset,
}
