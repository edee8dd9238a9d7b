//! One-time password generation and verification per RFC 4226 (HOTP) and
//! RFC 6238 (TOTP), compatible with standard authenticator apps.

pub mod algorithm;
pub mod clock;
pub mod error;
pub mod hotp;
pub mod secret;
pub mod totp;


pub use crate::algorithm::OTPAlgorithm;
pub use crate::clock::{OTPClock, SystemClock};
pub use crate::error::{OTPError, OTPResult};
pub use crate::hotp::{HOTPConfig, HOTPGenerator, DEFAULT_PASSWORD_LENGTH};
pub use crate::secret::OTPSecret;
pub use crate::totp::{TOTPConfig, TOTPGenerator, DEFAULT_PERIOD};

/// Creates an [`HOTPGenerator`] for a base32-encoded secret with the default
/// password length (6) and algorithm (SHA256).
pub fn hotp(secret: &[u8]) -> OTPResult<HOTPGenerator<'_>> {
  HOTPGenerator::new(secret, HOTPConfig::default())
}

/// Creates a [`TOTPGenerator`] for a base32-encoded secret with the default
/// password length (6), algorithm (SHA256), period (30s) and the system clock.
pub fn totp(secret: &[u8]) -> OTPResult<TOTPGenerator<'_>> {
  TOTPGenerator::new(secret, TOTPConfig::default())
}
