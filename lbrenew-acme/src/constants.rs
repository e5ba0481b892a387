/// Default ACME directory url
pub const ACME_DIR_URL: &str = "https://acme-v02.api.letsencrypt.org/directory";

/// Interval used when polling an order for readiness and completion
pub(crate) const ORDER_POLL_INTERVAL_SECS: u64 = 5;
