//! Constants used throughout the crate
//!
//! This module centralizes magic strings and default values to keep the
//! service, the configuration layer and the binary consistent.

// One-time passwords
/// Digit alphabet indexed by `byte % 10` when mapping random bytes to OTP characters.
pub const OTP_DIGITS: &[u8; 10] = b"1234567890";
/// Default OTP length when none is configured
pub const OTP_DEFAULT_LENGTH: i32 = 6;
/// Smallest configurable OTP length
pub const OTP_MIN_LENGTH: i32 = 1;
/// Largest configurable OTP length
pub const OTP_MAX_LENGTH: i32 = 64;

// Tokens
/// Number of random bytes backing a unique token
pub const TOKEN_RANDOM_BYTES: usize = 16;
/// Default validity window for issued tokens, in hours
pub const TOKEN_DEFAULT_EXPIRY_HOURS: i32 = 24;
/// Bound (in either direction) on the configured token expiry window
pub const TOKEN_MAX_EXPIRY_HOURS: i32 = 24 * 365;

// Date formatting
/// Month abbreviation used by ordinal date rendering, e.g. "Jan"
pub const MONTH_ABBREVIATION_FORMAT: &str = "%b";
/// Date stamp written into generated configuration headers
pub const CONFIG_HEADER_DATE_FORMAT: &str = "%Y-%m-%d";

// Paths
/// Application directory name under the XDG config/data directories
pub const APP_DIR_NAME: &str = "apputil";
/// Configuration file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "apputil.toml";
/// Configuration file name inside the XDG config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "apputil.log";

// Logging
/// Timestamp format used in log lines
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
/// Default log level
pub const LOG_DEFAULT_LEVEL: &str = "info";

// CLI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_OTP_UNAVAILABLE: &str = "❌ Failed to generate one-time password";
pub const ERROR_TOKEN_UNAVAILABLE: &str = "❌ Failed to generate unique token";
