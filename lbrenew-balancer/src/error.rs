use thiserror::Error;

#[derive(Error, Debug)]
/// Error type for lbrenew-balancer
pub enum LbRenewBalancerError {
  /// Transport-level failure talking to the balancer API
  #[error("Balancer API request failed: {0}")]
  Request(#[from] reqwest::Error),
  /// Response body that could not be interpreted
  #[error("Unexpected balancer API response: {0}")]
  UnexpectedResponse(String),
  /// Error entries returned by the balancer API for a read-only call
  #[error("Balancer API error: {0}")]
  Api(String),
  /// The certificate push was rejected by the remote service
  #[error("Balancer config update rejected: {0}")]
  UpdateRejected(String),
  /// Invalid API endpoint url
  #[error("Invalid balancer API endpoint: {0}")]
  InvalidEndpoint(#[from] url::ParseError),
}
