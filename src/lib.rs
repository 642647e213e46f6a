//! apputil - stateless time, one-time-password and token utilities
//!
//! The [`AppUtil`] service exposes independent operations: reading the
//! current time, generating numeric OTPs and random unique tokens, computing
//! and checking expiry instants, diffing string sequences, parsing RFC 3339
//! timestamps and rendering ordinal dates such as "1st Jan".
//!
//! Clock and entropy are injected through the [`Clock`] and [`RandomSource`]
//! traits; [`SimpleAppUtil::system`] wires in the real ones.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`error`] - Error types
//! * [`logger`] - Logging setup
//! * [`utils`] - The service and its helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types returned by the service
pub mod error;

/// Logging setup for the binary and embedding applications
pub mod logger;

/// Utility service, clock and random source
pub mod utils;

pub use error::{AppUtilError, Result};
pub use utils::app_util::{AppUtil, SimpleAppUtil};
pub use utils::clock::{Clock, MockClock, SystemClock, Timestamp};
pub use utils::random::{OsRandom, RandomSource};
