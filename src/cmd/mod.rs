//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`], [`init`], or [`validate`]. Each handler
//! lives in its own submodule.

pub mod init;
pub mod run;
pub mod validate;

use crate::cli::{Cli, Commands};
use crate::error::ProxyError;

pub async fn dispatch(cli: Cli) -> Result<(), ProxyError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(*args).await,
        Some(Commands::Init(ref args)) => init::execute(args),
        Some(Commands::Validate(ref args)) => validate::execute(args),
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  m3-proxy v{version} \u{2014} CORS-enabling edge proxy\n\n  \
         No command provided. To get started:\n\n    \
         m3-proxy run                      Start the proxy (auto-detects ./m3-proxy.yaml)\n    \
         m3-proxy init                     Generate a starter config\n    \
         m3-proxy validate m3-proxy.yaml   Check a config file\n    \
         m3-proxy --help                   See all commands and options\n"
    );
}
