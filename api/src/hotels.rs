//! Hotel and room endpoints

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{
    CreateHotelRequest, CreateRoomRequest, Hotel, Room, UpdateHotelRequest, UpdateRoomRequest,
};
use chrono::NaiveDate;
use reqwest::Method;

impl ApiClient {
    /// All hotels
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or undecodable responses.
    pub async fn list_hotels(&self) -> Result<Vec<Hotel>> {
        let request = self
            .request(Method::GET, self.endpoint(&["api", "hotels"]))
            .await;

        self.execute(request).await
    }

    /// A single hotel by id
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, unknown ids, or undecodable
    /// responses.
    pub async fn get_hotel(&self, id: i64) -> Result<Hotel> {
        let request = self
            .request(Method::GET, self.endpoint(&["api", "hotels", &id.to_string()]))
            .await;

        self.execute(request).await
    }

    /// Create a hotel
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, rejected payloads, or
    /// undecodable responses.
    pub async fn create_hotel(&self, hotel: &CreateHotelRequest) -> Result<Hotel> {
        let request = self
            .request(Method::POST, self.endpoint(&["api", "hotels"]))
            .await
            .json(hotel);

        self.execute(request).await
    }

    /// Update a hotel
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, unknown ids, or undecodable
    /// responses.
    pub async fn update_hotel(&self, id: i64, changes: &UpdateHotelRequest) -> Result<Hotel> {
        let request = self
            .request(Method::PUT, self.endpoint(&["api", "hotels", &id.to_string()]))
            .await
            .json(changes);

        self.execute(request).await
    }

    /// Delete a hotel
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or unknown ids.
    pub async fn delete_hotel(&self, id: i64) -> Result<()> {
        let request = self
            .request(
                Method::DELETE,
                self.endpoint(&["api", "hotels", &id.to_string()]),
            )
            .await;

        self.execute_empty(request).await
    }

    /// Hotels matching a free-text query
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or undecodable responses.
    pub async fn search_hotels(&self, query: &str) -> Result<Vec<Hotel>> {
        let request = self
            .request(Method::GET, self.endpoint(&["api", "hotels", "search"]))
            .await
            .query(&[("q", query)]);

        self.execute(request).await
    }

    /// Hotels located in a city
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or undecodable responses.
    pub async fn hotels_by_city(&self, city: &str) -> Result<Vec<Hotel>> {
        let request = self
            .request(Method::GET, self.endpoint(&["api", "hotels", "city", city]))
            .await;

        self.execute(request).await
    }

    /// All rooms of a hotel
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, unknown hotels, or undecodable
    /// responses.
    pub async fn list_rooms(&self, hotel_id: i64) -> Result<Vec<Room>> {
        let request = self
            .request(
                Method::GET,
                self.endpoint(&["api", "hotels", &hotel_id.to_string(), "rooms"]),
            )
            .await;

        self.execute(request).await
    }

    /// A single room by id
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, unknown ids, or undecodable
    /// responses.
    pub async fn get_room(&self, hotel_id: i64, room_id: i64) -> Result<Room> {
        let request = self
            .request(
                Method::GET,
                self.endpoint(&[
                    "api",
                    "hotels",
                    &hotel_id.to_string(),
                    "rooms",
                    &room_id.to_string(),
                ]),
            )
            .await;

        self.execute(request).await
    }

    /// Add a room to a hotel
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, rejected payloads, or
    /// undecodable responses.
    pub async fn create_room(&self, hotel_id: i64, room: &CreateRoomRequest) -> Result<Room> {
        let request = self
            .request(
                Method::POST,
                self.endpoint(&["api", "hotels", &hotel_id.to_string(), "rooms"]),
            )
            .await
            .json(room);

        self.execute(request).await
    }

    /// Update a room
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, unknown ids, or undecodable
    /// responses.
    pub async fn update_room(
        &self,
        hotel_id: i64,
        room_id: i64,
        changes: &UpdateRoomRequest,
    ) -> Result<Room> {
        let request = self
            .request(
                Method::PUT,
                self.endpoint(&[
                    "api",
                    "hotels",
                    &hotel_id.to_string(),
                    "rooms",
                    &room_id.to_string(),
                ]),
            )
            .await
            .json(changes);

        self.execute(request).await
    }

    /// Delete a room
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or unknown ids.
    pub async fn delete_room(&self, hotel_id: i64, room_id: i64) -> Result<()> {
        let request = self
            .request(
                Method::DELETE,
                self.endpoint(&[
                    "api",
                    "hotels",
                    &hotel_id.to_string(),
                    "rooms",
                    &room_id.to_string(),
                ]),
            )
            .await;

        self.execute_empty(request).await
    }

    /// Rooms of a hotel free for the given date range
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, unknown hotels, or undecodable
    /// responses.
    pub async fn available_rooms(
        &self,
        hotel_id: i64,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Result<Vec<Room>> {
        let request = self
            .request(
                Method::GET,
                self.endpoint(&["api", "hotels", &hotel_id.to_string(), "rooms", "available"]),
            )
            .await
            .query(&[
                ("checkInDate", check_in_date.to_string()),
                ("checkOutDate", check_out_date.to_string()),
            ]);

        self.execute(request).await
    }
}
