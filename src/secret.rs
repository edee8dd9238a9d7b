use crate::algorithm::OTPAlgorithm;
use crate::error::{OTPError, OTPResult};
use log::debug;
use rand::{thread_rng, RngCore};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Raw OTP secret bytes, zeroed on drop.
///
/// The textual (base32) form is what callers hand to the generators and to
/// authenticator apps; `Display`/`FromStr` convert between the two.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct OTPSecret(Vec<u8>);

impl OTPSecret {
  /// Generate a fresh secret of `bits / 8` cryptographically secure random
  /// bytes. `bits` should be a multiple of 8 and at least the recommended
  /// length of the algorithm the secret will be used with.
  pub fn generate(bits: u32) -> OTPResult<OTPSecret> {
    if bits == 0 {
      return Err(OTPError::InvalidSecretBits);
    }
    let mut bytes = vec![0u8; (bits / 8) as usize];

    thread_rng().fill_bytes(&mut bytes);
    debug!("generated {} byte otp secret", bytes.len());

    Ok(OTPSecret(bytes))
  }

  /// Generate a secret sized to the recommended length of `algorithm`.
  pub fn generate_for_algorithm(algorithm: OTPAlgorithm) -> OTPResult<OTPSecret> {
    OTPSecret::generate(algorithm.recommended_bits())
  }

  pub fn as_raw(&self) -> &[u8] {
    &self.0
  }
}

impl fmt::Display for OTPSecret {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", data_encoding::BASE32_NOPAD.encode(&self.0))
  }
}

impl FromStr for OTPSecret {
  type Err = OTPError;

  fn from_str(s: &str) -> OTPResult<Self> {
    decode_base32(s.as_bytes()).map(OTPSecret)
  }
}

/// Decode base32 text, tolerating trailing `=` padding.
pub(crate) fn decode_base32(encoded: &[u8]) -> OTPResult<Vec<u8>> {
  let mut end = encoded.len();
  while end > 0 && encoded[end - 1] == b'=' {
    end -= 1;
  }
  data_encoding::BASE32_NOPAD
    .decode(&encoded[..end])
    .map_err(|_| OTPError::InvalidSecret)
}
