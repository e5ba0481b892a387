mod config;
mod error;

#[allow(unused_imports)]
mod log {
  pub(super) use tracing::{debug, error, info, warn};
}

use crate::log::*;
use lbrenew_acme::{issue_certificate, resolve_account, AcmeSession, RegistrationOutcome};
use lbrenew_balancer::{locate_https_config, push_certificate, BalancerApi, HttpsConfigLookup};
use lbrenew_keys::{KeySource, LbRenewKeyError};

pub use crate::{
  config::{parse_domain_names, RenewalConfig},
  error::{LbRenewError, RenewalResult},
};

/* ------------------------------------------------ */
/// Entrypoint that runs one renewal: locate the balancer's HTTPS config
/// slot, resolve the ACME account, issue the certificate and push chain and
/// key to the slot.
///
/// The balancer lookups run before any ACME traffic so that a mistyped
/// label or a missing HTTPS port never consumes rate-limited issuance
/// quota. Everything is sequential; a failure at any step aborts the run,
/// and nothing needs rolling back because the only remote mutation is the
/// final update call.
pub async fn entrypoint<K, A>(config: &RenewalConfig<K>, api: &A) -> RenewalResult<()>
where
  K: KeySource<Error = LbRenewKeyError> + Sync,
  A: BalancerApi + Sync,
{
  let domains = config.domain_names.join(",");
  info!(
    "Start renewal for domain(s) {domains} targeting balancer \"{}\"",
    config.balancer_label
  );

  let config_id = match locate_https_config(api, &config.balancer_label).await? {
    HttpsConfigLookup::Found { balancer_id, config_id } => {
      info!(
        "Balancer \"{}\" (id {balancer_id}) located, HTTPS config id {config_id}",
        config.balancer_label
      );
      config_id
    }
    HttpsConfigLookup::BalancerNotFound => {
      error!("Cannot find a balancer with label \"{}\"", config.balancer_label);
      return Err(LbRenewError::BalancerNotFound(config.balancer_label.clone()));
    }
    HttpsConfigLookup::HttpsConfigNotFound { balancer_id } => {
      error!(
        "Balancer \"{}\" (id {balancer_id}) has no HTTPS port configured",
        config.balancer_label
      );
      return Err(LbRenewError::HttpsConfigNotFound {
        label: config.balancer_label.clone(),
        balancer_id,
      });
    }
  };

  let account_key = config.account_key.read().await?;
  let session = AcmeSession::connect(&config.acme_dir_url, &account_key).await?;
  let (account, outcome) = resolve_account(&session).await?;
  match outcome {
    RegistrationOutcome::Created { terms_of_service } => {
      info!("Registered a new ACME account");
      if let Some(tos) = terms_of_service {
        info!("Terms of service accepted: {tos}");
      }
    }
    RegistrationOutcome::AlreadyExists => {
      info!("ACME account already exists, bound to the existing registration");
    }
  }

  let domain_key = config.domain_key.read().await?;
  let bundle = issue_certificate(&account, &domain_key, &config.domain_names).await?;
  info!("The certificate for domain(s) {domains} has been issued");

  let chain_pem = bundle.to_pem()?;
  let key_pem = domain_key.to_pem()?;
  push_certificate(api, config_id, &chain_pem, &key_pem).await?;
  info!("Everything is done. Balancer config {config_id} now carries the renewed certificate");

  Ok(())
}

/* ------------------------------------------------ */
#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use lbrenew_balancer::{BalancerEntry, ConfigEntry, LbRenewBalancerError};
  use lbrenew_keys::KeyFileSourceBuilder;
  use url::Url;

  struct FixtureApi {
    balancers: Vec<BalancerEntry>,
    configs: Vec<ConfigEntry>,
  }

  #[async_trait]
  impl BalancerApi for FixtureApi {
    async fn list_balancers(&self) -> Result<Vec<BalancerEntry>, LbRenewBalancerError> {
      Ok(self.balancers.clone())
    }
    async fn list_configs(&self, _balancer_id: u64) -> Result<Vec<ConfigEntry>, LbRenewBalancerError> {
      Ok(self.configs.clone())
    }
    async fn update_config(
      &self,
      _config_id: u64,
      _ssl_cert: &str,
      _ssl_key: &str,
    ) -> Result<serde_json::Value, LbRenewBalancerError> {
      panic!("update must not be reached in abort scenarios")
    }
  }

  // The ACME endpoint is a sentinel: any contact with it would fail with an
  // Acme error instead of the lookup diagnostics asserted below.
  fn test_config() -> RenewalConfig<lbrenew_keys::KeyFileSource> {
    RenewalConfig {
      account_key: KeyFileSourceBuilder::default()
        .key_path("/nonexistent/account.key")
        .build()
        .unwrap(),
      domain_key: KeyFileSourceBuilder::default()
        .key_path("/nonexistent/domain.key")
        .build()
        .unwrap(),
      domain_names: parse_domain_names("a.example.com,b.example.com"),
      balancer_label: "prod-lb".to_string(),
      acme_dir_url: Url::parse("http://127.0.0.1:1/directory").unwrap(),
    }
  }

  #[tokio::test]
  async fn missing_balancer_aborts_before_any_acme_traffic() {
    let api = FixtureApi {
      balancers: vec![BalancerEntry {
        label: "other-lb".to_string(),
        id: 1,
      }],
      configs: vec![],
    };
    let res = entrypoint(&test_config(), &api).await;
    assert!(matches!(res, Err(LbRenewError::BalancerNotFound(label)) if label == "prod-lb"));
  }

  #[tokio::test]
  async fn missing_https_slot_aborts_before_any_acme_traffic() {
    let api = FixtureApi {
      balancers: vec![BalancerEntry {
        label: "Prod-LB".to_string(),
        id: 33,
      }],
      configs: vec![ConfigEntry {
        protocol: "http".to_string(),
        id: 1,
      }],
    };
    let res = entrypoint(&test_config(), &api).await;
    assert!(matches!(
      res,
      Err(LbRenewError::HttpsConfigNotFound { balancer_id: 33, .. })
    ));
  }
}
