use thiserror::Error;

/// Describes things that can go wrong when loading key material
#[derive(Debug, Error)]
pub enum LbRenewKeyError {
  /// Error when reading the key file
  #[error("Failed to read key pair from file: {0}")]
  IoError(#[from] std::io::Error),
  /// Error when parsing the PEM-encoded key material
  #[error("Unable to parse PEM-encoded key pair: {0}")]
  InvalidKeyEncoding(#[from] openssl::error::ErrorStack),
}
