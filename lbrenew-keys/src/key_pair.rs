use crate::error::LbRenewKeyError;
use openssl::pkey::{PKey, Private};

/* ------------------------------------------------ */
/// An asymmetric key pair loaded from PEM-encoded key material.
/// Two independent instances exist per run: the ACME account key and the
/// domain key signing the certificate request.
#[derive(Clone)]
pub struct KeyPair {
  inner: PKey<Private>,
}

impl std::fmt::Debug for KeyPair {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("KeyPair").finish_non_exhaustive()
  }
}

impl KeyPair {
  /// Parse a key pair from a PEM-encoded private key
  pub fn from_pem(pem: &[u8]) -> Result<Self, LbRenewKeyError> {
    let inner = PKey::private_key_from_pem(pem)?;
    Ok(Self { inner })
  }

  /// Reference to the underlying private key object
  pub fn pkey(&self) -> &PKey<Private> {
    &self.inner
  }

  /// Serialize the private key to PKCS#8 PEM text
  pub fn to_pem(&self) -> Result<String, LbRenewKeyError> {
    let bytes = self.inner.private_key_to_pem_pkcs8()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
  }

  /// Serialize the public half to PEM, used to check key-pair equivalence
  pub fn public_key_pem(&self) -> Result<Vec<u8>, LbRenewKeyError> {
    Ok(self.inner.public_key_to_pem()?)
  }
}

/* ------------------------------------------------ */
#[cfg(test)]
mod tests {
  use super::*;
  use openssl::rsa::Rsa;

  #[test]
  fn pem_round_trip_preserves_public_key() {
    let rsa = Rsa::generate(2048).unwrap();
    let original = KeyPair {
      inner: PKey::from_rsa(rsa).unwrap(),
    };

    let pem = original.to_pem().unwrap();
    let reloaded = KeyPair::from_pem(pem.as_bytes()).unwrap();

    assert_eq!(
      original.public_key_pem().unwrap(),
      reloaded.public_key_pem().unwrap()
    );
  }

  #[test]
  fn garbage_is_rejected() {
    let res = KeyPair::from_pem(b"not a pem at all");
    assert!(matches!(res, Err(LbRenewKeyError::InvalidKeyEncoding(_))));
  }
}
