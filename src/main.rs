use std::process::ExitCode;

use clap::Parser;

use pokenat::cli::Cli;

fn main() -> ExitCode {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("warn"),
  )
  .init();

  match pokenat::cli::run(Cli::parse()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      log::debug!("{:?}", e);
      eprintln!("{}", e);
      ExitCode::FAILURE
    }
  }
}
