mod config;
mod log;

use crate::{
  config::{build_settings, parse_opts},
  log::*,
};

fn main() {
  init_logger();

  let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
  runtime_builder.enable_all();
  runtime_builder.thread_name("lbrenew");
  let runtime = runtime_builder.build().unwrap();

  runtime.block_on(async {
    // Wrong argument shape prints usage and performs no operation.
    let parsed_opts = match parse_opts() {
      Ok(v) => v,
      Err(e) => {
        let _ = e.print();
        return;
      }
    };

    let (renewal_config, api) = match build_settings(&parsed_opts) {
      Ok(v) => v,
      Err(e) => {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
      }
    };

    if let Err(e) = lbrenew_lib::entrypoint(&renewal_config, &api).await {
      error!("Failed updating the balancer certificate: {e}");
      std::process::exit(1);
    }
  });
}
