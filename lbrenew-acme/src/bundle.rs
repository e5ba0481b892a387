use crate::error::LbRenewAcmeError;
use openssl::x509::X509;

/* ------------------------------------------------ */
/// The issued leaf certificate plus its chain, in the order the ACME service
/// returned them. Immutable once downloaded; never reordered.
#[derive(Clone)]
pub struct CertificateBundle {
  chain: Vec<X509>,
}

impl std::fmt::Debug for CertificateBundle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CertificateBundle").field("len", &self.chain.len()).finish()
  }
}

impl CertificateBundle {
  pub fn new(chain: Vec<X509>) -> Self {
    Self { chain }
  }

  /// Number of certificates in the bundle, leaf included
  pub fn len(&self) -> usize {
    self.chain.len()
  }

  pub fn is_empty(&self) -> bool {
    self.chain.is_empty()
  }

  /// Concatenate the whole bundle into a single PEM block, preserving the
  /// download order
  pub fn to_pem(&self) -> Result<String, LbRenewAcmeError> {
    let mut pem = String::new();
    for cert in &self.chain {
      let encoded = cert.to_pem()?;
      pem.push_str(&String::from_utf8_lossy(&encoded));
    }
    Ok(pem)
  }
}

/* ------------------------------------------------ */
#[cfg(test)]
mod tests {
  use super::*;
  use openssl::{
    asn1::Asn1Time,
    hash::MessageDigest,
    pkey::PKey,
    rsa::Rsa,
    x509::{X509Builder, X509NameBuilder},
  };

  fn self_signed(cn: &str) -> X509 {
    let pkey = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();
    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_text("CN", cn).unwrap();
    let name = name.build();
    let mut builder = X509Builder::new().unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder.set_pubkey(&pkey).unwrap();
    builder.set_not_before(&Asn1Time::days_from_now(0).unwrap()).unwrap();
    builder.set_not_after(&Asn1Time::days_from_now(1).unwrap()).unwrap();
    builder.sign(&pkey, MessageDigest::sha256()).unwrap();
    builder.build()
  }

  #[test]
  fn bundle_concatenates_in_download_order() {
    let leaf = self_signed("leaf.example.com");
    let issuer = self_signed("Test Issuing CA");
    let leaf_pem = String::from_utf8(leaf.to_pem().unwrap()).unwrap();
    let issuer_pem = String::from_utf8(issuer.to_pem().unwrap()).unwrap();

    let bundle = CertificateBundle::new(vec![leaf, issuer]);
    assert_eq!(bundle.len(), 2);

    let pem = bundle.to_pem().unwrap();
    assert_eq!(pem, format!("{leaf_pem}{issuer_pem}"));
    assert_eq!(pem.matches("-----BEGIN CERTIFICATE-----").count(), 2);
  }
}
