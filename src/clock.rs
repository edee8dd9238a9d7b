use chrono::Utc;

/// Wall-clock collaborator for [`crate::totp::TOTPGenerator`].
///
/// Readings are epoch milliseconds; monotonicity is not assumed.
pub trait OTPClock {
  fn now_millis(&self) -> i64;
}

/// The system wall clock, the default for TOTP generators.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl OTPClock for SystemClock {
  fn now_millis(&self) -> i64 {
    Utc::now().timestamp_millis()
  }
}
