use crate::algorithm::OTPAlgorithm;
use crate::clock::{OTPClock, SystemClock};
use crate::error::{OTPError, OTPResult};
use crate::hotp::{HOTPConfig, HOTPGenerator, DEFAULT_PASSWORD_LENGTH};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use std::time::Duration;

pub const DEFAULT_PERIOD: Duration = Duration::from_secs(30);

/// Construction parameters for [`TOTPGenerator`] with the documented defaults.
#[derive(Clone, Copy, Debug)]
pub struct TOTPConfig {
  /// Number of code digits, must be in `6..=8`. Default: 6.
  pub password_length: u8,
  /// Keyed-hash variant. Default: SHA256.
  pub algorithm: OTPAlgorithm,
  /// Time-window width, must be at least 1 second. Default: 30 seconds.
  pub period: Duration,
}

impl Default for TOTPConfig {
  fn default() -> Self {
    TOTPConfig {
      password_length: DEFAULT_PASSWORD_LENGTH,
      algorithm: OTPAlgorithm::default(),
      period: DEFAULT_PERIOD,
    }
  }
}

/// Time-based one-time password generator (RFC 6238).
///
/// Wraps an [`HOTPGenerator`], deriving the counter as
/// `epoch_millis / period_millis` from its clock collaborator.
#[derive(Debug)]
pub struct TOTPGenerator<'a, C = SystemClock> {
  hotp: HOTPGenerator<'a>,
  period: Duration,
  clock: C,
}

impl<'a> TOTPGenerator<'a> {
  pub fn new(secret: &'a [u8], config: TOTPConfig) -> OTPResult<TOTPGenerator<'a>> {
    TOTPGenerator::with_clock(secret, config, SystemClock)
  }
}

impl<'a, C: OTPClock> TOTPGenerator<'a, C> {
  pub fn with_clock(secret: &'a [u8], config: TOTPConfig, clock: C) -> OTPResult<TOTPGenerator<'a, C>> {
    if config.period.as_secs() < 1 {
      return Err(OTPError::InvalidPeriod);
    }
    let hotp = HOTPGenerator::new(
      secret,
      HOTPConfig {
        password_length: config.password_length,
        algorithm: config.algorithm,
      },
    )?;

    Ok(TOTPGenerator {
      hotp,
      period: config.period,
      clock,
    })
  }

  pub fn period(&self) -> Duration {
    self.period
  }

  pub fn password_length(&self) -> u8 {
    self.hotp.password_length()
  }

  pub fn algorithm(&self) -> OTPAlgorithm {
    self.hotp.algorithm()
  }

  /// Code for the current time window.
  pub fn now(&self) -> OTPResult<String> {
    self.hotp.generate(self.current_counter()?)
  }

  /// Code for the time window containing `instant`.
  pub fn at_instant(&self, instant: DateTime<Utc>) -> OTPResult<String> {
    self.at(instant.timestamp())
  }

  /// Code for the start of the given calendar day in the system time zone.
  pub fn at_date(&self, date: NaiveDate) -> OTPResult<String> {
    let start_of_day = Local
      .from_local_datetime(&date.and_time(NaiveTime::MIN))
      .earliest()
      .ok_or(OTPError::InvalidTime)?;

    self.at(start_of_day.timestamp())
  }

  /// Code for the time window containing `epoch_seconds`.
  pub fn at(&self, epoch_seconds: i64) -> OTPResult<String> {
    if epoch_seconds <= 0 {
      return Err(OTPError::InvalidTime);
    }
    self
      .hotp
      .generate(counter_for_millis(epoch_seconds.saturating_mul(1000), self.period))
  }

  /// Check `code` against the current time window, accepting up to
  /// `delay_window` adjacent windows of clock skew in either direction.
  pub fn verify(&self, code: &str, delay_window: u64) -> OTPResult<bool> {
    self.hotp.verify(code, self.current_counter()?, delay_window)
  }

  /// Time left until the next window starts, always in `(0, period]`: a
  /// reading exactly on a window boundary yields the full period.
  pub fn duration_until_next_time_window(&self) -> Duration {
    let period_millis = self.period.as_millis() as i64;
    let remainder = self.clock.now_millis().rem_euclid(period_millis);

    Duration::from_millis((period_millis - remainder) as u64)
  }

  fn current_counter(&self) -> OTPResult<u64> {
    let now_millis = self.clock.now_millis();
    if now_millis < 0 {
      return Err(OTPError::InvalidTime);
    }
    Ok(counter_for_millis(now_millis, self.period))
  }
}

fn counter_for_millis(millis: i64, period: Duration) -> u64 {
  (millis as u64) / (period.as_millis() as u64)
}
