use crate::{
  account::AccountHandle, bundle::CertificateBundle, constants::ORDER_POLL_INTERVAL_SECS, error::LbRenewAcmeError, log::*,
};
use acme2_eab::{Csr, OrderBuilder, OrderStatus};
use lbrenew_keys::KeyPair;
use std::time::Duration;

/* ------------------------------------------------ */
/// Request a signed certificate covering every domain name, in the order
/// supplied, and download the leaf plus its chain.
///
/// The account's authorizations are assumed to already cover the domains:
/// no challenge is driven here, and a single attempt either succeeds or the
/// run aborts.
pub async fn issue_certificate(
  account: &AccountHandle,
  domain_key: &KeyPair,
  domain_names: &[String],
) -> Result<CertificateBundle, LbRenewAcmeError> {
  let poll_interval = Duration::from_secs(ORDER_POLL_INTERVAL_SECS);

  let mut builder = OrderBuilder::new(account.clone());
  for name in domain_names {
    builder.add_dns_identifier(name.clone());
  }
  let order = builder
    .build()
    .await
    .map_err(|e| LbRenewAcmeError::Issuance(format!("Order rejected: {e}")))?;

  // With all authorizations already valid the order is ready immediately;
  // anything still pending here means an unauthorized domain.
  let order = order
    .wait_ready(poll_interval, usize::MAX)
    .await
    .map_err(|e| LbRenewAcmeError::Issuance(format!("Order did not become ready: {e}")))?;
  if order.status != OrderStatus::Ready {
    return Err(LbRenewAcmeError::Issuance(format!(
      "Order is {:?}, not ready; are all domains authorized for this account?",
      order.status
    )));
  }

  debug!("Finalize order with a CSR signed by the domain key");
  let order = order
    .finalize(Csr::Automatic(domain_key.pkey().clone()))
    .await
    .map_err(|e| LbRenewAcmeError::Issuance(format!("Finalization rejected: {e}")))?;

  let order = order
    .wait_done(poll_interval, usize::MAX)
    .await
    .map_err(|e| LbRenewAcmeError::Issuance(format!("Order did not complete: {e}")))?;
  if order.status != OrderStatus::Valid {
    return Err(LbRenewAcmeError::Issuance(format!(
      "Order ended in status {:?}",
      order.status
    )));
  }

  let chain = order
    .certificate()
    .await
    .map_err(|e| LbRenewAcmeError::Issuance(format!("Certificate download failed: {e}")))?
    .ok_or_else(|| LbRenewAcmeError::Issuance("Order granted no certificate location".to_string()))?;

  info!("Certificate with a chain of {} certificate(s) downloaded", chain.len());
  Ok(CertificateBundle::new(chain))
}
