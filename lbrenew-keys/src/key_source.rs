use crate::{error::LbRenewKeyError, key_pair::KeyPair, log::*};
use async_trait::async_trait;
use derive_builder::Builder;
use std::{
  fs::File,
  io::Read,
  path::{Path, PathBuf},
};

/* ------------------------------------------------ */
#[async_trait]
// Trait to read a key pair anywhere from KVS, file, sqlite, etc.
pub trait KeySource {
  type Error;

  /// read a key pair from the source
  async fn read(&self) -> Result<KeyPair, Self::Error>;
}

/* ------------------------------------------------ */
#[derive(Builder, Debug, Clone)]
/// Key file reader implementing the `KeySource` trait
pub struct KeyFileSource {
  #[builder(setter(custom))]
  /// Path of the PEM-encoded private key file
  pub key_path: PathBuf,
}

impl KeyFileSourceBuilder {
  pub fn key_path<T: AsRef<Path>>(&mut self, v: T) -> &mut Self {
    self.key_path = Some(v.as_ref().to_path_buf());
    self
  }
}

/* ------------------------------------------------ */
#[async_trait]
impl KeySource for KeyFileSource {
  type Error = LbRenewKeyError;
  /// read a key pair from the file, releasing the handle on every exit path
  async fn read(&self) -> Result<KeyPair, Self::Error> {
    debug!("Read key pair from {}", self.key_path.display());
    let mut encoded = vec![];
    File::open(&self.key_path)
      .map_err(|e| {
        std::io::Error::new(
          e.kind(),
          format!("Unable to load the key pair [{}]: {e}", self.key_path.display()),
        )
      })?
      .read_to_end(&mut encoded)?;
    KeyPair::from_pem(&encoded)
  }
}

/* ------------------------------------------------ */
