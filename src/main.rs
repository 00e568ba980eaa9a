use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = m3_proxy::cli::Cli::parse();
    if let Err(e) = m3_proxy::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
