//! Client-side validation errors

use thiserror::Error;

/// Validation failures raised by the reservation planner
///
/// These never reach the network: the planner records them in its state
/// and refuses to build a request until they are resolved. Request-level
/// failures travel separately, through a slice's `error` field.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PlanningError {
    /// Check-in is before today
    #[error("Check-in date cannot be in the past")]
    CheckInInPast,

    /// Check-out is on or before check-in
    #[error("Check-out date must be after check-in date")]
    CheckOutNotAfterCheckIn,

    /// No hotel chosen yet
    #[error("Select a hotel first")]
    HotelMissing,

    /// One or both dates missing
    #[error("Select check-in and check-out dates")]
    DatesMissing,

    /// No room chosen yet
    #[error("Select a room first")]
    RoomMissing,
}
