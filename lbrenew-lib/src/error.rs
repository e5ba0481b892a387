use thiserror::Error;

pub type RenewalResult<T> = std::result::Result<T, LbRenewError>;

/// Describes things that can go wrong during one renewal run
#[derive(Debug, Error)]
pub enum LbRenewError {
  /// Key material could not be loaded
  #[error("Key material error: {0}")]
  KeyLoad(#[from] lbrenew_keys::LbRenewKeyError),

  /// ACME account resolution or certificate issuance failed
  #[error("ACME error: {0}")]
  Acme(#[from] lbrenew_acme::LbRenewAcmeError),

  /// Balancer API call failed (transport, decode, or rejected update)
  #[error("Balancer error: {0}")]
  Balancer(#[from] lbrenew_balancer::LbRenewBalancerError),

  // Expected lookup misses, surfaced as run-level aborts with a diagnostic
  // naming which of the two lookups failed
  #[error("Cannot find a balancer with label \"{0}\"")]
  BalancerNotFound(String),
  #[error("Balancer \"{label}\" (id {balancer_id}) has no HTTPS port configured")]
  HttpsConfigNotFound { label: String, balancer_id: u64 },
}
