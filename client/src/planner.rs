//! Reservation planning workflow state
//!
//! The planner turns a hotel choice, a date range, and a room choice into
//! a priced reservation request. Submission is gated on local validity;
//! availability lookups are tagged with the parameters that produced them
//! so a stale resolution can be recognized and discarded.

use crate::error::PlanningError;
use bookstay_api::{CreateReservationRequest, Room};
use chrono::NaiveDate;

/// Parameters of one availability lookup
///
/// Equality of two tags is what decides whether a resolution still
/// matches the planner's current parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailabilityQuery {
    /// Hotel the rooms belong to
    pub hotel_id: i64,
    /// First night
    pub check_in: NaiveDate,
    /// Departure day, exclusive
    pub check_out: NaiveDate,
}

impl AvailabilityQuery {
    /// Number of nights covered by the range
    ///
    /// Positive for any query the planner issues; date validation runs
    /// before a query is built.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// State of the reservation planning workflow
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlannerState {
    /// Chosen hotel
    pub hotel_id: Option<i64>,
    /// Chosen first night
    pub check_in: Option<NaiveDate>,
    /// Chosen departure day
    pub check_out: Option<NaiveDate>,
    /// Chosen room, always one of `rooms`
    pub room_id: Option<i64>,
    /// Candidate rooms for the current query
    pub rooms: Vec<Room>,
    /// The query whose resolution is allowed to replace `rooms`
    pub current_query: Option<AvailabilityQuery>,
    /// Why submission is currently blocked, if it is
    pub validation: Option<PlanningError>,
    /// Non-blocking notice from a failed availability lookup
    pub availability_notice: Option<String>,
    /// Whether a create request is in flight
    pub submitting: bool,
}

impl PlannerState {
    /// Record a hotel choice
    ///
    /// Any parameter change invalidates the room choice and the candidate
    /// list. Returns the fresh query to issue when the parameters are
    /// complete and valid.
    pub fn choose_hotel(&mut self, hotel_id: i64, today: NaiveDate) -> Option<AvailabilityQuery> {
        self.hotel_id = Some(hotel_id);
        self.parameters_changed(today)
    }

    /// Record a check-in choice
    pub fn choose_check_in(&mut self, date: NaiveDate, today: NaiveDate) -> Option<AvailabilityQuery> {
        self.check_in = Some(date);
        self.parameters_changed(today)
    }

    /// Record a check-out choice
    pub fn choose_check_out(&mut self, date: NaiveDate, today: NaiveDate) -> Option<AvailabilityQuery> {
        self.check_out = Some(date);
        self.parameters_changed(today)
    }

    /// Record a room choice
    ///
    /// Only rooms from the current candidate list are accepted; returns
    /// whether the choice was taken.
    pub fn choose_room(&mut self, room_id: i64) -> bool {
        if self.rooms.iter().any(|r| r.id == room_id) {
            self.room_id = Some(room_id);
            true
        } else {
            false
        }
    }

    /// Apply an availability resolution
    ///
    /// Returns `false` when the resolution's tag no longer matches the
    /// current query; the candidate list is left untouched in that case.
    pub fn apply_availability(&mut self, query: &AvailabilityQuery, rooms: Vec<Room>) -> bool {
        if self.current_query.as_ref() != Some(query) {
            return false;
        }
        self.rooms = rooms;
        self.availability_notice = None;
        true
    }

    /// Apply an availability failure
    ///
    /// A failure for the current query is recorded as a non-blocking
    /// notice; candidates are left as they were. A stale failure is
    /// ignored entirely. Returns whether the failure was current.
    pub fn apply_availability_failure(
        &mut self,
        query: &AvailabilityQuery,
        message: impl Into<String>,
    ) -> bool {
        if self.current_query.as_ref() != Some(query) {
            return false;
        }
        self.availability_notice = Some(message.into());
        true
    }

    /// The room the planner is pricing, if one is chosen
    #[must_use]
    pub fn chosen_room(&self) -> Option<&Room> {
        let room_id = self.room_id?;
        self.rooms.iter().find(|r| r.id == room_id)
    }

    /// Number of nights in the chosen range
    #[must_use]
    pub fn nights(&self) -> Option<i64> {
        let (check_in, check_out) = self.check_in.zip(self.check_out)?;
        Some((check_out - check_in).num_days())
    }

    /// Nightly price times nights, once a room and valid range are chosen
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // night counts are tiny
    pub fn total_price(&self) -> Option<f64> {
        let room = self.chosen_room()?;
        let nights = self.nights().filter(|n| *n > 0)?;
        Some(room.price * nights as f64)
    }

    /// Build the reservation request, or say why it cannot be built
    ///
    /// # Errors
    ///
    /// Returns the first [`PlanningError`] blocking submission: a missing
    /// field or an invalid date range.
    pub fn submission(&self, today: NaiveDate) -> Result<CreateReservationRequest, PlanningError> {
        let hotel_id = self.hotel_id.ok_or(PlanningError::HotelMissing)?;
        let (check_in, check_out) = self
            .check_in
            .zip(self.check_out)
            .ok_or(PlanningError::DatesMissing)?;
        validate_dates(check_in, check_out, today)?;
        let room_id = self.room_id.ok_or(PlanningError::RoomMissing)?;

        Ok(CreateReservationRequest::new(hotel_id, room_id, check_in, check_out))
    }

    /// Return to a blank planner
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Revalidate after a hotel or date change and build the next query
    ///
    /// The room choice and candidate list always reset; candidates from
    /// the previous parameters must not be submittable against the new
    /// ones.
    fn parameters_changed(&mut self, today: NaiveDate) -> Option<AvailabilityQuery> {
        self.room_id = None;
        self.rooms.clear();
        self.availability_notice = None;
        self.validation = self.date_error(today);

        let query = match (self.validation, self.hotel_id, self.check_in, self.check_out) {
            (None, Some(hotel_id), Some(check_in), Some(check_out)) => Some(AvailabilityQuery {
                hotel_id,
                check_in,
                check_out,
            }),
            _ => None,
        };

        self.current_query.clone_from(&query);
        query
    }

    /// Date rule violated by the current choices, if any
    fn date_error(&self, today: NaiveDate) -> Option<PlanningError> {
        if self.check_in.is_some_and(|d| d < today) {
            return Some(PlanningError::CheckInInPast);
        }
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out <= check_in {
                return Some(PlanningError::CheckOutNotAfterCheckIn);
            }
        }
        None
    }
}

/// Check the date rules: check-in not in the past, check-out strictly after
///
/// # Errors
///
/// Returns the violated [`PlanningError`] rule.
pub fn validate_dates(
    check_in: NaiveDate,
    check_out: NaiveDate,
    today: NaiveDate,
) -> Result<(), PlanningError> {
    if check_in < today {
        return Err(PlanningError::CheckInInPast);
    }
    if check_out <= check_in {
        return Err(PlanningError::CheckOutNotAfterCheckIn);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use crate::mocks::sample_room;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 1, 1)
    }

    fn planner_with_candidates() -> PlannerState {
        let mut planner = PlannerState::default();
        let today = today();
        planner.choose_hotel(1, today);
        planner.choose_check_in(date(2025, 1, 10), today);
        let query = planner.choose_check_out(date(2025, 1, 13), today);
        planner.apply_availability(&query.unwrap(), vec![sample_room(5, 1, 100.0)]);
        planner
    }

    #[test]
    fn test_three_nights_at_hundred_totals_three_hundred() {
        let mut planner = planner_with_candidates();
        assert!(planner.choose_room(5));

        assert_eq!(planner.nights(), Some(3));
        assert_eq!(planner.total_price(), Some(300.0));
    }

    #[test]
    fn test_same_day_checkout_is_invalid() {
        let mut planner = PlannerState::default();
        let today = today();
        planner.choose_hotel(1, today);
        planner.choose_check_in(today, today);
        let query = planner.choose_check_out(today, today);

        assert!(query.is_none());
        assert_eq!(planner.validation, Some(PlanningError::CheckOutNotAfterCheckIn));
    }

    #[test]
    fn test_past_check_in_is_invalid() {
        let mut planner = PlannerState::default();
        let today = today();
        planner.choose_hotel(1, today);
        let query = planner.choose_check_in(date(2024, 12, 31), today);

        assert!(query.is_none());
        assert_eq!(planner.validation, Some(PlanningError::CheckInInPast));
    }

    #[test]
    fn test_complete_valid_parameters_produce_query() {
        let mut planner = PlannerState::default();
        let today = today();
        planner.choose_hotel(2, today);
        planner.choose_check_in(date(2025, 2, 1), today);
        let query = planner.choose_check_out(date(2025, 2, 4), today);

        assert_eq!(
            query,
            Some(AvailabilityQuery {
                hotel_id: 2,
                check_in: date(2025, 2, 1),
                check_out: date(2025, 2, 4),
            })
        );
        assert_eq!(planner.current_query, query);
    }

    #[test]
    fn test_parameter_change_clears_room_and_candidates() {
        let mut planner = planner_with_candidates();
        planner.choose_room(5);

        planner.choose_check_in(date(2025, 1, 11), today());

        assert!(planner.room_id.is_none());
        assert!(planner.rooms.is_empty());
        assert!(planner.total_price().is_none());
    }

    #[test]
    fn test_stale_availability_resolution_is_discarded() {
        let mut planner = planner_with_candidates();
        let stale = AvailabilityQuery {
            hotel_id: 1,
            check_in: date(2025, 1, 2),
            check_out: date(2025, 1, 3),
        };

        let applied = planner.apply_availability(&stale, vec![sample_room(9, 1, 50.0)]);

        assert!(!applied);
        assert_eq!(planner.rooms.len(), 1);
        assert_eq!(planner.rooms[0].id, 5);
    }

    #[test]
    fn test_availability_failure_is_a_notice_not_a_wipe() {
        let mut planner = planner_with_candidates();
        let current = planner.current_query.clone().unwrap();

        let applied = planner.apply_availability_failure(&current, "backend down");

        assert!(applied);
        assert_eq!(planner.availability_notice.as_deref(), Some("backend down"));
        assert_eq!(planner.rooms.len(), 1);
    }

    #[test]
    fn test_room_outside_candidates_is_refused() {
        let mut planner = planner_with_candidates();

        assert!(!planner.choose_room(99));
        assert!(planner.room_id.is_none());
    }

    #[test]
    fn test_submission_requires_every_field() {
        let today = today();
        let mut planner = PlannerState::default();
        assert_eq!(planner.submission(today), Err(PlanningError::HotelMissing));

        planner.choose_hotel(1, today);
        assert_eq!(planner.submission(today), Err(PlanningError::DatesMissing));

        planner.choose_check_in(date(2025, 1, 10), today);
        assert_eq!(planner.submission(today), Err(PlanningError::DatesMissing));

        let query = planner.choose_check_out(date(2025, 1, 13), today).unwrap();
        assert_eq!(planner.submission(today), Err(PlanningError::RoomMissing));

        planner.apply_availability(&query, vec![sample_room(5, 1, 100.0)]);
        planner.choose_room(5);
        let request = planner.submission(today).unwrap();
        assert_eq!(request.hotel_id, 1);
        assert_eq!(request.room_id, 5);
    }

    #[test]
    fn test_validate_dates_accepts_today_checkin() {
        let today = today();
        assert!(validate_dates(today, date(2025, 1, 2), today).is_ok());
    }
}
