//! The utility service.
//!
//! [`AppUtil`] groups the stateless time, OTP and token operations used
//! across an application. [`SimpleAppUtil`] implements it on top of an
//! injected [`Clock`] and [`RandomSource`]; hand it to consumers directly,
//! usually as `Arc<dyn AppUtil>`.

use log::{debug, warn};
use uuid::Builder;

use super::clock::{Clock, SystemClock, Timestamp};
use super::random::{OsRandom, RandomSource};
use super::{datetime, slices};
use crate::constants::{OTP_DIGITS, TOKEN_RANDOM_BYTES};
use crate::error::Result;

/// Time, randomness and comparison helpers.
pub trait AppUtil: Send + Sync {
    /// Current time from the underlying clock.
    fn current_time(&self) -> Timestamp;

    /// Numeric one-time password of exactly `length` digits.
    ///
    /// A non-positive `length` yields an empty string. Fails with
    /// [`AppUtilError::RandomSource`](crate::error::AppUtilError::RandomSource)
    /// when the random source cannot supply `length` bytes; no partial OTP
    /// is ever returned.
    fn generate_otp(&self, length: i32) -> Result<String>;

    /// Random (version 4) UUID in lowercase hyphenated form.
    fn generate_unique_token(&self) -> Result<String>;

    /// Current time shifted by `duration_hours`, which may be negative.
    fn expiry_time(&self, duration_hours: i32) -> Timestamp;

    /// Elements of `a` absent from `b`, in `a`'s order.
    fn difference(&self, a: &[String], b: &[String]) -> Vec<String>;

    /// Parse an RFC 3339 date-time.
    fn parse_time_rfc3339(&self, text: &str) -> Result<Timestamp>;

    /// Whether `t` is strictly before the current time.
    fn is_expired(&self, t: &Timestamp) -> bool;

    /// Render `t` as e.g. "1st Jan".
    fn format_ordinal_date(&self, t: &Timestamp) -> String;
}

/// Map random bytes onto the OTP digit alphabet via `byte % 10`.
///
/// The reduction carries a small bias towards residues 0..=5 since 256 is
/// not a multiple of 10.
pub fn otp_from_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| OTP_DIGITS[usize::from(*b) % OTP_DIGITS.len()] as char)
        .collect()
}

/// [`AppUtil`] over a pluggable clock and random source.
#[derive(Debug)]
pub struct SimpleAppUtil<C = SystemClock, R = OsRandom> {
    clock: C,
    random: R,
}

impl<C: Clock, R: RandomSource> SimpleAppUtil<C, R> {
    pub fn new(clock: C, random: R) -> Self {
        Self { clock, random }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl SimpleAppUtil {
    /// Service backed by the system clock and the OS CSPRNG.
    pub fn system() -> Self {
        Self::new(SystemClock::new(), OsRandom::new())
    }
}

impl Default for SimpleAppUtil {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock, R: RandomSource> AppUtil for SimpleAppUtil<C, R> {
    fn current_time(&self) -> Timestamp {
        self.clock.now()
    }

    fn generate_otp(&self, length: i32) -> Result<String> {
        let length = match usize::try_from(length) {
            Ok(length) if length > 0 => length,
            _ => return Ok(String::new()),
        };

        let mut buffer = vec![0u8; length];
        if let Err(e) = self.random.fill(&mut buffer) {
            warn!("OTP generation of length {} failed: {}", length, e);
            return Err(e);
        }

        debug!("Generated OTP of length {}", length);
        Ok(otp_from_bytes(&buffer))
    }

    fn generate_unique_token(&self) -> Result<String> {
        let mut bytes = [0u8; TOKEN_RANDOM_BYTES];
        if let Err(e) = self.random.fill(&mut bytes) {
            warn!("Unique token generation failed: {}", e);
            return Err(e);
        }

        let token = Builder::from_random_bytes(bytes).into_uuid();
        debug!("Generated unique token");
        Ok(token.hyphenated().to_string())
    }

    fn expiry_time(&self, duration_hours: i32) -> Timestamp {
        datetime::add_hours(self.current_time(), duration_hours)
    }

    fn difference(&self, a: &[String], b: &[String]) -> Vec<String> {
        slices::difference(a, b)
    }

    fn parse_time_rfc3339(&self, text: &str) -> Result<Timestamp> {
        datetime::parse_rfc3339(text)
    }

    fn is_expired(&self, t: &Timestamp) -> bool {
        datetime::is_expired_at(t, &self.current_time())
    }

    fn format_ordinal_date(&self, t: &Timestamp) -> String {
        datetime::format_ordinal_date(t)
    }
}
