//! Utility modules for the application.
//!
//! - [`app_util`] - The [`AppUtil`](app_util::AppUtil) service and its default implementation
//! - [`clock`] - Injectable wall clock
//! - [`random`] - Injectable cryptographically secure byte source
//! - [`datetime`] - RFC 3339 parsing, expiry arithmetic and ordinal date formatting
//! - [`slices`] - Order-preserving string sequence difference

pub mod app_util;
pub mod clock;
pub mod datetime;
pub mod random;
pub mod slices;
