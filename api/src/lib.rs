//! # Bookstay API Client
//!
//! Rust client library for the bookstay reservation REST API with
//! bearer-token session handling.
//!
//! ## Example
//!
//! ```no_run
//! use bookstay_api::{ApiClient, ApiConfig, LoginRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiConfig::new("http://localhost:8080"))?;
//!
//!     let session = client
//!         .login(&LoginRequest::new("alice", "password"))
//!         .await?;
//!
//!     // Install the token; every request from here on carries it
//!     client.token().install(session.token).await;
//!
//!     let hotels = client.list_hotels().await?;
//!     println!("{} hotels", hotels.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - Hotel, room, and reservation endpoints
//! - Authentication endpoints (login, register, logout, refresh)
//! - Shared [`TokenHandle`] that injects `Authorization: Bearer` headers
//! - Typed errors with the server's error message preserved

pub mod client;
pub mod config;
pub mod error;
pub mod token;
pub mod types;

mod auth;
mod hotels;
mod reservations;

// Re-export main types for convenience
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use token::TokenHandle;
pub use types::{
    AuthResponse, CreateHotelRequest, CreateReservationRequest, CreateRoomRequest, CurrentUser,
    Hotel, LoginRequest, RefreshResponse, RegisterRequest, Reservation, ReservationFilter,
    ReservationHotel, ReservationRoom, ReservationStats, ReservationStatus, Room,
    UpdateHotelRequest, UpdateReservationRequest, UpdateRoomRequest,
};
