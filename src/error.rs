use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OTPError {
  #[error("Secret must not be empty")]
  EmptySecret,
  #[error("Secret is not valid base32")]
  InvalidSecret,
  #[error("Password length must be between 6 and 8 digits (got {0})")]
  InvalidPasswordLength(u8),
  #[error("Period must be at least 1 second")]
  InvalidPeriod,
  #[error("Time must be above zero")]
  InvalidTime,
  #[error("Secret length in bits must be greater than 0")]
  InvalidSecretBits,
}

pub type OTPResult<T> = Result<T, OTPError>;
