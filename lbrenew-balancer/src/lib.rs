mod api;
mod error;
mod locator;
mod types;
mod updater;

#[allow(unused_imports)]
mod log {
  pub(super) use tracing::{debug, error, info, warn};
}

pub use api::{BalancerApi, NodeBalancerApi, API_ENDPOINT};
pub use error::LbRenewBalancerError;
pub use locator::{locate_https_config, HttpsConfigLookup};
pub use types::{BalancerEntry, ConfigEntry};
pub use updater::push_certificate;
