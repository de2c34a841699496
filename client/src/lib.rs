//! # Bookstay Client
//!
//! The store model for the bookstay booking client. This crate holds
//! everything a screen observes (slice state) and dispatches (actions):
//!
//! - [`ClientState`]: session, hotel and reservation slices, and the
//!   reservation planner
//! - [`ResourceSlice`]: the generic list/selection/loading/error lifecycle,
//!   implemented once and instantiated per resource
//! - [`PlannerState`]: the reservation planning workflow (date validation,
//!   availability lookup, pricing, gated submission)
//! - [`ClientAction`]: every input the reducer accepts, both user intents
//!   and request resolutions
//! - [`ClientEnvironment`]: gateway traits plus a clock, with HTTP-backed
//!   implementations over [`bookstay_api`]
//! - [`ClientReducer`]: the root reducer that routes actions per concern
//!
//! ## Example
//!
//! ```ignore
//! use bookstay_api::{ApiClient, ApiConfig};
//! use bookstay_client::{ClientAction, ClientReducer, ClientState, http_environment};
//! use bookstay_runtime::Store;
//!
//! let client = ApiClient::new(ApiConfig::new("http://localhost:8080"))?;
//! let store = Store::new(
//!     ClientState::default(),
//!     ClientReducer::new(),
//!     http_environment(&client),
//! );
//!
//! store.send(ClientAction::HotelsRequested).await?;
//! ```

pub mod actions;
pub mod environment;
pub mod error;
pub mod gateways;
pub mod mocks;
pub mod planner;
pub mod reducers;
pub mod slice;
pub mod state;

pub use actions::ClientAction;
pub use environment::{AuthGateway, ClientEnvironment, HotelGateway, ReservationGateway};
pub use error::PlanningError;
pub use gateways::{
    HttpAuthGateway, HttpHotelGateway, HttpReservationGateway, http_environment,
};
pub use planner::{AvailabilityQuery, PlannerState};
pub use reducers::ClientReducer;
pub use slice::{Entity, ResourceSlice};
pub use state::{ClientState, Session, SessionState};

// Re-export the wire entities the state is built from
pub use bookstay_api::{Hotel, Reservation, ReservationStatus, Room};
