use lbrenew_keys::KeySource;
use url::Url;

/* ------------------------------------------------ */
/// Everything one renewal run needs, assembled by the caller. Key material
/// stays behind `KeySource` so the run never touches paths directly.
#[derive(Debug, Clone)]
pub struct RenewalConfig<K>
where
  K: KeySource,
{
  /// Source of the ACME account key pair
  pub account_key: K,
  /// Source of the domain key pair, signing the CSR and terminating TLS
  pub domain_key: K,
  /// Domain names to certify, in the order supplied
  pub domain_names: Vec<String>,
  /// Label of the balancer whose HTTPS slot receives the certificate
  pub balancer_label: String,
  /// ACME directory endpoint
  pub acme_dir_url: Url,
}

/* ------------------------------------------------ */
/// Split a comma-separated domain list, preserving order. No deduplication
/// and no validation; bogus names are rejected downstream by the ACME
/// service.
pub fn parse_domain_names(input: &str) -> Vec<String> {
  input.split(',').map(|v| v.to_string()).collect()
}

/* ------------------------------------------------ */
