use clap::Arg;
use lbrenew_acme::ACME_DIR_URL;
use lbrenew_balancer::NodeBalancerApi;
use lbrenew_keys::{KeyFileSource, KeyFileSourceBuilder};
use lbrenew_lib::{parse_domain_names, RenewalConfig};
use url::Url;

/// Parsed options
pub struct Opts {
  pub account_key_path: String,
  pub domain_key_path: String,
  pub domain_names: String,
  pub balancer_label: String,
  pub api_key: String,
}

/// Parse arg values passed from cli
pub fn parse_opts() -> Result<Opts, clap::Error> {
  let _ = include_str!("../../Cargo.toml");
  let options = clap::command!()
    .arg(
      Arg::new("account_key")
        .value_name("ACCOUNT_KEY_FILE")
        .required(true)
        .help("Path to the PEM-encoded ACME account private key"),
    )
    .arg(
      Arg::new("domain_key")
        .value_name("DOMAIN_KEY_FILE")
        .required(true)
        .help("Path to the PEM-encoded domain private key"),
    )
    .arg(
      Arg::new("domains")
        .value_name("DOMAINS")
        .required(true)
        .help("Comma-separated domain names to certify, e.g. example.com,www.example.com"),
    )
    .arg(
      Arg::new("balancer_label")
        .value_name("BALANCER_LABEL")
        .required(true)
        .help("Label of the balancer whose HTTPS port receives the certificate"),
    )
    .arg(
      Arg::new("api_key")
        .value_name("API_KEY")
        .required(true)
        .help("Balancer API key"),
    );
  let matches = options.try_get_matches()?;

  ///////////////////////////////////
  let account_key_path = matches.get_one::<String>("account_key").unwrap().to_owned();
  let domain_key_path = matches.get_one::<String>("domain_key").unwrap().to_owned();
  let domain_names = matches.get_one::<String>("domains").unwrap().to_owned();
  let balancer_label = matches.get_one::<String>("balancer_label").unwrap().to_owned();
  let api_key = matches.get_one::<String>("api_key").unwrap().to_owned();

  Ok(Opts {
    account_key_path,
    domain_key_path,
    domain_names,
    balancer_label,
    api_key,
  })
}

/// Build the run configuration and the balancer API client from cli options
pub fn build_settings(opts: &Opts) -> Result<(RenewalConfig<KeyFileSource>, NodeBalancerApi), anyhow::Error> {
  // The directory endpoint is data, not a hard-coded global, so staging
  // directories can be targeted without a rebuild.
  let acme_dir_url = std::env::var("ACME_DIR_URL").unwrap_or_else(|_| ACME_DIR_URL.to_string());
  let acme_dir_url = Url::parse(&acme_dir_url)?;

  let account_key = KeyFileSourceBuilder::default().key_path(&opts.account_key_path).build()?;
  let domain_key = KeyFileSourceBuilder::default().key_path(&opts.domain_key_path).build()?;

  let renewal_config = RenewalConfig {
    account_key,
    domain_key,
    domain_names: parse_domain_names(&opts.domain_names),
    balancer_label: opts.balancer_label.clone(),
    acme_dir_url,
  };
  let api = NodeBalancerApi::new(&opts.api_key)?;

  Ok((renewal_config, api))
}
