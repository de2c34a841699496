//! # Bookstay Testing
//!
//! Testing utilities and helpers for the bookstay client architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use bookstay_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(ClientReducer)
//!     .with_env(test_environment())
//!     .given_state(ClientState::default())
//!     .when_action(ClientAction::HotelsRequested)
//!     .then_state(|state| {
//!         assert!(state.hotels.loading);
//!     })
//!     .then_effects(|effects| {
//!         assertions::assert_has_future_effect(effects);
//!     })
//!     .run();
//! ```

use bookstay_core::environment::Clock;
use chrono::{DateTime, Utc};


/// Mock implementations of Environment traits
///
/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use bookstay_testing::mocks::FixedClock;
    /// use bookstay_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Test helpers and utilities.
pub mod helpers {
    /// Initialize tracing output for a test binary
    ///
    /// Safe to call from every test; only the first call installs the
    /// subscriber. Respects `RUST_LOG` for filtering.
    pub fn init_test_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::init_test_logging;
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
