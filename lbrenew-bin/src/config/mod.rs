mod parse;

pub use parse::{build_settings, parse_opts, Opts};
