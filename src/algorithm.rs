use hmac::digest::block_buffer::Eager;
use hmac::digest::core_api::{BlockSizeUser, BufferKindUser, CoreProxy, FixedOutputCore, UpdateCore};
use hmac::digest::typenum::{IsLess, Le, NonZero};
use hmac::digest::HashMarker;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use std::fmt;
use typenum::consts::U256;

/// Keyed-hash variants supported for code generation.
///
/// The variant selects both the HMAC function and the recommended secret
/// length for that function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OTPAlgorithm {
  /// Legacy variant. Kept for interoperability with RFC 4226/6238 verifiers
  /// and existing authenticator apps; prefer SHA256 for new secrets.
  SHA1,
  SHA224,
  #[default]
  SHA256,
  SHA384,
  SHA512,
}

impl OTPAlgorithm {
  /// Minimum recommended secret length in bits (the native digest size).
  pub fn recommended_bits(self) -> u32 {
    match self {
      OTPAlgorithm::SHA1 => 160,
      OTPAlgorithm::SHA224 => 224,
      OTPAlgorithm::SHA256 => 256,
      OTPAlgorithm::SHA384 => 384,
      OTPAlgorithm::SHA512 => 512,
    }
  }

  pub(crate) fn hmac(self, key: &[u8], message: &[u8]) -> Vec<u8> {
    match self {
      OTPAlgorithm::SHA1 => hmac_digest::<Sha1>(key, message),
      OTPAlgorithm::SHA224 => hmac_digest::<Sha224>(key, message),
      OTPAlgorithm::SHA256 => hmac_digest::<Sha256>(key, message),
      OTPAlgorithm::SHA384 => hmac_digest::<Sha384>(key, message),
      OTPAlgorithm::SHA512 => hmac_digest::<Sha512>(key, message),
    }
  }
}

impl fmt::Display for OTPAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      OTPAlgorithm::SHA1 => write!(f, "SHA1")?,
      OTPAlgorithm::SHA224 => write!(f, "SHA224")?,
      OTPAlgorithm::SHA256 => write!(f, "SHA256")?,
      OTPAlgorithm::SHA384 => write!(f, "SHA384")?,
      OTPAlgorithm::SHA512 => write!(f, "SHA512")?,
    }
    Ok(())
  }
}

fn hmac_digest<D>(key: &[u8], message: &[u8]) -> Vec<u8>
where
  D: CoreProxy,
  D::Core: HashMarker + UpdateCore + FixedOutputCore + BufferKindUser<BufferKind = Eager> + Default + Clone,
  <D::Core as BlockSizeUser>::BlockSize: IsLess<U256>,
  Le<<D::Core as BlockSizeUser>::BlockSize, U256>: NonZero,
{
  // HMAC pads or hashes keys of any length, so this cannot fail
  let mut mac = Hmac::<D>::new_from_slice(key).unwrap();
  mac.update(message);
  mac.finalize().into_bytes().to_vec()
}
