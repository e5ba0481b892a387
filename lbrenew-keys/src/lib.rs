mod error;
mod key_pair;
mod key_source;

#[allow(unused_imports)]
mod log {
  pub(super) use tracing::{debug, error, info, warn};
}

pub use crate::{
  error::LbRenewKeyError,
  key_pair::KeyPair,
  key_source::{KeyFileSource, KeyFileSourceBuilder, KeyFileSourceBuilderError, KeySource},
};
