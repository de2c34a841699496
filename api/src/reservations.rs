//! Reservation endpoints

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{
    CreateReservationRequest, Reservation, ReservationFilter, ReservationStats,
    UpdateReservationRequest,
};
use chrono::NaiveDate;
use reqwest::Method;

impl ApiClient {
    /// Reservations matching a filter
    ///
    /// An empty filter returns everything the session may see.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or undecodable responses.
    pub async fn list_reservations(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>> {
        let mut query: Vec<(&str, String)> = Vec::new();

        if let Some(status) = filter.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(check_in_date) = filter.check_in_date {
            query.push(("checkInDate", check_in_date.to_string()));
        }
        if let Some(check_out_date) = filter.check_out_date {
            query.push(("checkOutDate", check_out_date.to_string()));
        }
        if let Some(hotel_id) = filter.hotel_id {
            query.push(("hotelId", hotel_id.to_string()));
        }

        let request = self
            .request(Method::GET, self.endpoint(&["api", "reservations"]))
            .await
            .query(&query);

        self.execute(request).await
    }

    /// A single reservation by id
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, unknown ids, or undecodable
    /// responses.
    pub async fn get_reservation(&self, id: i64) -> Result<Reservation> {
        let request = self
            .request(
                Method::GET,
                self.endpoint(&["api", "reservations", &id.to_string()]),
            )
            .await;

        self.execute(request).await
    }

    /// Reservations belonging to the signed-in account
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, expired sessions, or
    /// undecodable responses.
    pub async fn user_reservations(&self) -> Result<Vec<Reservation>> {
        let request = self
            .request(Method::GET, self.endpoint(&["api", "reservations", "user"]))
            .await;

        self.execute(request).await
    }

    /// Book a room
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, rejected bookings, or
    /// undecodable responses.
    pub async fn create_reservation(
        &self,
        reservation: &CreateReservationRequest,
    ) -> Result<Reservation> {
        let request = self
            .request(Method::POST, self.endpoint(&["api", "reservations"]))
            .await
            .json(reservation);

        self.execute(request).await
    }

    /// Change dates or status of a reservation
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, unknown ids, or undecodable
    /// responses.
    pub async fn update_reservation(
        &self,
        id: i64,
        changes: &UpdateReservationRequest,
    ) -> Result<Reservation> {
        let request = self
            .request(
                Method::PUT,
                self.endpoint(&["api", "reservations", &id.to_string()]),
            )
            .await
            .json(changes);

        self.execute(request).await
    }

    /// Cancel a reservation, returning its updated form
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, unknown ids, or undecodable
    /// responses.
    pub async fn cancel_reservation(&self, id: i64) -> Result<Reservation> {
        let request = self
            .request(
                Method::PATCH,
                self.endpoint(&["api", "reservations", &id.to_string(), "cancel"]),
            )
            .await;

        self.execute(request).await
    }

    /// Delete a reservation outright
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or unknown ids.
    pub async fn delete_reservation(&self, id: i64) -> Result<()> {
        let request = self
            .request(
                Method::DELETE,
                self.endpoint(&["api", "reservations", &id.to_string()]),
            )
            .await;

        self.execute_empty(request).await
    }

    /// Whether a room is free for the given date range
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or undecodable responses.
    pub async fn check_availability(
        &self,
        hotel_id: i64,
        room_id: i64,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Result<bool> {
        let request = self
            .request(
                Method::GET,
                self.endpoint(&["api", "reservations", "availability"]),
            )
            .await
            .query(&[
                ("hotelId", hotel_id.to_string()),
                ("roomId", room_id.to_string()),
                ("checkInDate", check_in_date.to_string()),
                ("checkOutDate", check_out_date.to_string()),
            ]);

        self.execute(request).await
    }

    /// Aggregate reservation counts
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or undecodable responses.
    pub async fn reservation_stats(&self) -> Result<ReservationStats> {
        let request = self
            .request(Method::GET, self.endpoint(&["api", "reservations", "stats"]))
            .await;

        self.execute(request).await
    }
}
