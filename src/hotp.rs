use crate::algorithm::OTPAlgorithm;
use crate::error::{OTPError, OTPResult};
use crate::secret::decode_base32;
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroizing;

pub const DEFAULT_PASSWORD_LENGTH: u8 = 6;

/// Construction parameters for [`HOTPGenerator`] with the documented defaults.
#[derive(Clone, Copy, Debug)]
pub struct HOTPConfig {
  /// Number of code digits, must be in `6..=8`. Default: 6.
  pub password_length: u8,
  /// Keyed-hash variant. Default: SHA256.
  pub algorithm: OTPAlgorithm,
}

impl Default for HOTPConfig {
  fn default() -> Self {
    HOTPConfig {
      password_length: DEFAULT_PASSWORD_LENGTH,
      algorithm: OTPAlgorithm::default(),
    }
  }
}

/// Counter-based one-time password generator (RFC 4226).
///
/// Borrows the base32-encoded secret for its lifetime and decodes it on every
/// `generate` call; a malformed secret surfaces as an error, never as a
/// mismatched code.
#[derive(Debug)]
pub struct HOTPGenerator<'a> {
  secret: &'a [u8],
  password_length: u8,
  algorithm: OTPAlgorithm,
}

impl<'a> HOTPGenerator<'a> {
  pub fn new(secret: &'a [u8], config: HOTPConfig) -> OTPResult<HOTPGenerator<'a>> {
    if secret.is_empty() {
      return Err(OTPError::EmptySecret);
    }
    if !(6..=8).contains(&config.password_length) {
      return Err(OTPError::InvalidPasswordLength(config.password_length));
    }
    Ok(HOTPGenerator {
      secret,
      password_length: config.password_length,
      algorithm: config.algorithm,
    })
  }

  pub fn password_length(&self) -> u8 {
    self.password_length
  }

  pub fn algorithm(&self) -> OTPAlgorithm {
    self.algorithm
  }

  /// Generate the code for `counter`.
  pub fn generate(&self, counter: u64) -> OTPResult<String> {
    let key = Zeroizing::new(decode_base32(self.secret)?);
    let digest = self.algorithm.hmac(&key, &counter.to_be_bytes());

    // RFC 4226 dynamic truncation: the low 4 bits of the last digest byte
    // select a 4 byte big-endian window, the sign bit is masked off
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let base = BigEndian::read_u32(&digest[offset..offset + 4]) & 0x7fff_ffff;

    Ok(format!(
      "{:01$}",
      base % 10_u32.pow(u32::from(self.password_length)),
      usize::from(self.password_length)
    ))
  }

  /// Check `code` against `counter`, accepting any counter within
  /// `delay_window` steps in either direction (clamped at 0).
  pub fn verify(&self, code: &str, counter: u64, delay_window: u64) -> OTPResult<bool> {
    if code.len() != usize::from(self.password_length) {
      return Ok(false);
    }
    let first = counter.saturating_sub(delay_window);
    let last = counter.saturating_add(delay_window);

    for candidate in first..=last {
      if self.generate(candidate)? == code {
        return Ok(true);
      }
    }

    Ok(false)
  }
}
