use serde::Deserialize;

/* ------------------------------------------------ */
/// Response envelope of the balancer API. Every reply carries an error
/// array (empty on success) and the action-specific payload under `DATA`.
#[derive(Deserialize, Debug)]
pub(crate) struct ApiEnvelope<T> {
  #[serde(rename = "ERRORARRAY", default)]
  pub errors: Vec<ApiErrorEntry>,
  #[serde(rename = "ACTION", default)]
  #[allow(dead_code)]
  pub action: String,
  #[serde(rename = "DATA")]
  pub data: Option<T>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorEntry {
  #[serde(rename = "ERRORCODE")]
  pub code: i64,
  #[serde(rename = "ERRORMESSAGE")]
  pub message: String,
}

impl<T> ApiEnvelope<T> {
  /// Render the error array as a single diagnostic line
  pub fn error_summary(&self) -> String {
    self
      .errors
      .iter()
      .map(|e| format!("[{}] {}", e.code, e.message))
      .collect::<Vec<_>>()
      .join(", ")
  }
}

/* ------------------------------------------------ */
/// One balancer as returned by the listing call
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BalancerEntry {
  #[serde(rename = "LABEL")]
  pub label: String,
  #[serde(rename = "NODEBALANCERID")]
  pub id: u64,
}

/// One per-protocol configuration slot attached to a balancer
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
  #[serde(rename = "PROTOCOL")]
  pub protocol: String,
  #[serde(rename = "CONFIGID")]
  pub id: u64,
}

/* ------------------------------------------------ */
