use crate::{
  error::LbRenewBalancerError,
  log::*,
  types::{ApiEnvelope, BalancerEntry, ConfigEntry},
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

/// Default balancer API endpoint
pub const API_ENDPOINT: &str = "https://api.linode.com/";

/* ------------------------------------------------ */
#[async_trait]
/// Remote balancer API operations consumed by the locator and the updater.
/// Kept as a trait so lookups can be exercised against fixtures.
pub trait BalancerApi {
  /// List all balancers visible to the account, in listing order
  async fn list_balancers(&self) -> Result<Vec<BalancerEntry>, LbRenewBalancerError>;
  /// List the configuration slots of one balancer, in listing order
  async fn list_configs(&self, balancer_id: u64) -> Result<Vec<ConfigEntry>, LbRenewBalancerError>;
  /// Push a PEM certificate chain and private key to one configuration slot,
  /// returning the raw reply for diagnostics
  async fn update_config(
    &self,
    config_id: u64,
    ssl_cert: &str,
    ssl_key: &str,
  ) -> Result<serde_json::Value, LbRenewBalancerError>;
}

/* ------------------------------------------------ */
/// API client for the classic NodeBalancer JSON API, authenticated with a
/// per-account API key
#[derive(Debug, Clone)]
pub struct NodeBalancerApi {
  client: reqwest::Client,
  endpoint: Url,
  api_key: String,
}

impl NodeBalancerApi {
  /// Create a client against the default endpoint
  pub fn new(api_key: &str) -> Result<Self, LbRenewBalancerError> {
    Self::with_endpoint(api_key, Url::parse(API_ENDPOINT)?)
  }

  /// Create a client against a custom endpoint
  pub fn with_endpoint(api_key: &str, endpoint: Url) -> Result<Self, LbRenewBalancerError> {
    Ok(Self {
      client: reqwest::Client::new(),
      endpoint,
      api_key: api_key.to_string(),
    })
  }

  /// Issue one API action as a form POST and decode the reply envelope
  async fn call<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<ApiEnvelope<T>, LbRenewBalancerError> {
    let mut form: Vec<(&str, &str)> = vec![("api_key", self.api_key.as_str())];
    form.extend_from_slice(params);

    let response = self.client.post(self.endpoint.clone()).form(&form).send().await?;
    let status = response.status();
    let body = response.text().await?;
    debug!("Balancer API returned status {status}, body: {body}");

    serde_json::from_str::<ApiEnvelope<T>>(&body)
      .map_err(|e| LbRenewBalancerError::UnexpectedResponse(format!("{e}: {body}")))
  }
}

/* ------------------------------------------------ */
#[async_trait]
impl BalancerApi for NodeBalancerApi {
  async fn list_balancers(&self) -> Result<Vec<BalancerEntry>, LbRenewBalancerError> {
    let envelope: ApiEnvelope<Vec<BalancerEntry>> = self.call(&[("api_action", "nodebalancer.list")]).await?;
    if !envelope.errors.is_empty() {
      return Err(LbRenewBalancerError::Api(envelope.error_summary()));
    }
    Ok(envelope.data.unwrap_or_default())
  }

  async fn list_configs(&self, balancer_id: u64) -> Result<Vec<ConfigEntry>, LbRenewBalancerError> {
    let id = balancer_id.to_string();
    let envelope: ApiEnvelope<Vec<ConfigEntry>> = self
      .call(&[("api_action", "nodebalancer.config.list"), ("NodeBalancerID", &id)])
      .await?;
    if !envelope.errors.is_empty() {
      return Err(LbRenewBalancerError::Api(envelope.error_summary()));
    }
    Ok(envelope.data.unwrap_or_default())
  }

  async fn update_config(
    &self,
    config_id: u64,
    ssl_cert: &str,
    ssl_key: &str,
  ) -> Result<serde_json::Value, LbRenewBalancerError> {
    let id = config_id.to_string();
    let envelope: ApiEnvelope<serde_json::Value> = self
      .call(&[
        ("api_action", "nodebalancer.config.update"),
        ("ConfigID", &id),
        ("ssl_cert", ssl_cert),
        ("ssl_key", ssl_key),
      ])
      .await?;
    if !envelope.errors.is_empty() {
      return Err(LbRenewBalancerError::UpdateRejected(envelope.error_summary()));
    }
    Ok(envelope.data.unwrap_or_default())
  }
}
