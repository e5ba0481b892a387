use crate::{api::BalancerApi, error::LbRenewBalancerError, log::*};

/* ------------------------------------------------ */
#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of the two-step HTTPS config lookup. Absence is a normal result
/// the caller branches on, not an error: an operator may have mistyped the
/// label or never provisioned an HTTPS port.
pub enum HttpsConfigLookup {
  /// Balancer and its HTTPS configuration slot were both found
  Found { balancer_id: u64, config_id: u64 },
  /// No balancer carries the requested label
  BalancerNotFound,
  /// The balancer exists but serves no HTTPS protocol slot
  HttpsConfigNotFound { balancer_id: u64 },
}

/* ------------------------------------------------ */
/// Find the balancer with the given label, then the configuration slot
/// within it that serves HTTPS. Both scans are case-insensitive and select
/// the first match in listing order; neither call is retried.
pub async fn locate_https_config<A>(
  api: &A,
  balancer_label: &str,
) -> Result<HttpsConfigLookup, LbRenewBalancerError>
where
  A: BalancerApi + Sync,
{
  let balancers = api.list_balancers().await?;
  let Some(balancer) = balancers.iter().find(|b| b.label.eq_ignore_ascii_case(balancer_label)) else {
    return Ok(HttpsConfigLookup::BalancerNotFound);
  };
  debug!("Balancer \"{}\" has id {}", balancer.label, balancer.id);

  let configs = api.list_configs(balancer.id).await?;
  let Some(config) = configs.iter().find(|c| c.protocol.eq_ignore_ascii_case("https")) else {
    return Ok(HttpsConfigLookup::HttpsConfigNotFound {
      balancer_id: balancer.id,
    });
  };
  debug!("Balancer config id found: {}", config.id);

  Ok(HttpsConfigLookup::Found {
    balancer_id: balancer.id,
    config_id: config.id,
  })
}

/* ------------------------------------------------ */
#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{BalancerEntry, ConfigEntry};
  use async_trait::async_trait;

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
      panic!("update must not be called during lookup")
    }
  }

  fn balancer(label: &str, id: u64) -> BalancerEntry {
    BalancerEntry {
      label: label.to_string(),
      id,
    }
  }

  fn config(protocol: &str, id: u64) -> ConfigEntry {
    ConfigEntry {
      protocol: protocol.to_string(),
      id,
    }
  }

  #[tokio::test]
  async fn first_case_insensitive_label_match_wins() {
    let api = FixtureApi {
      balancers: vec![balancer("api", 10), balancer("Api", 11), balancer("web", 12)],
      configs: vec![config("https", 7)],
    };
    let res = locate_https_config(&api, "API").await.unwrap();
    assert_eq!(
      res,
      HttpsConfigLookup::Found {
        balancer_id: 10,
        config_id: 7
      }
    );
  }

  #[tokio::test]
  async fn first_https_config_in_listing_order_is_selected() {
    let api = FixtureApi {
      balancers: vec![balancer("prod-lb", 1)],
      configs: vec![config("http", 1), config("https", 2), config("https", 3)],
    };
    let res = locate_https_config(&api, "prod-lb").await.unwrap();
    assert_eq!(
      res,
      HttpsConfigLookup::Found {
        balancer_id: 1,
        config_id: 2
      }
    );
  }

  #[tokio::test]
  async fn uppercase_protocol_is_matched() {
    let api = FixtureApi {
      balancers: vec![balancer("prod-lb", 1)],
      configs: vec![config("HTTPS", 42)],
    };
    let res = locate_https_config(&api, "prod-lb").await.unwrap();
    assert_eq!(
      res,
      HttpsConfigLookup::Found {
        balancer_id: 1,
        config_id: 42
      }
    );
  }

  #[tokio::test]
  async fn missing_balancer_is_reported_as_such() {
    let api = FixtureApi {
      balancers: vec![balancer("web", 12)],
      configs: vec![config("https", 7)],
    };
    let res = locate_https_config(&api, "prod-lb").await.unwrap();
    assert_eq!(res, HttpsConfigLookup::BalancerNotFound);
  }

  #[tokio::test]
  async fn balancer_without_https_slot_is_reported_as_such() {
    let api = FixtureApi {
      balancers: vec![balancer("prod-lb", 33)],
      configs: vec![config("http", 1), config("tcp", 2)],
    };
    let res = locate_https_config(&api, "prod-lb").await.unwrap();
    assert_eq!(res, HttpsConfigLookup::HttpsConfigNotFound { balancer_id: 33 });
  }
}
