use crate::{api::BalancerApi, error::LbRenewBalancerError, log::*};

/// Push the PEM certificate chain and private key to the located
/// configuration slot. One remote call; any non-success reply surfaces the
/// response body as an update rejection.
pub async fn push_certificate<A>(
  api: &A,
  config_id: u64,
  chain_pem: &str,
  key_pem: &str,
) -> Result<serde_json::Value, LbRenewBalancerError>
where
  A: BalancerApi + Sync,
{
  let reply = api.update_config(config_id, chain_pem, key_pem).await?;
  debug!("Balancer config {config_id} updated: {reply}");
  Ok(reply)
}
