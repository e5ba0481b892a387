mod account;
mod bundle;
mod constants;
mod error;
mod issuer;

#[allow(unused_imports)]
mod log {
  pub(super) use tracing::{debug, error, info, warn};
}

pub use account::{resolve_account, AccountHandle, AcmeSession, RegistrationOutcome};
pub use bundle::CertificateBundle;
pub use constants::ACME_DIR_URL;
pub use error::LbRenewAcmeError;
pub use issuer::issue_certificate;
