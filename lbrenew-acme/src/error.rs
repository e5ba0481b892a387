use thiserror::Error;

#[derive(Error, Debug)]
/// Error type for lbrenew-acme
pub enum LbRenewAcmeError {
  /// Network/protocol/validation failure from the ACME service
  #[error("ACME protocol error: {0}")]
  Protocol(#[from] acme2_eab::Error),
  /// Certificate request rejected, or the order never completed
  #[error("Certificate issuance failed: {0}")]
  Issuance(String),
  /// Error when PEM-encoding the downloaded certificate chain
  #[error("Failed to PEM-encode certificates: {0}")]
  CertificateEncoding(#[from] openssl::error::ErrorStack),
}
