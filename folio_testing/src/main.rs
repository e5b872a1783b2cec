use std::net::IpAddr;

use anyhow::Context;
use axum::http::StatusCode;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio_testing::contact;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Contact { host, port, status } => {
            let status = StatusCode::from_u16(status)
                .with_context(|| format!("Invalid status code {status}"))?;
            contact::start_server(host, port, status).await?
        }
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start a fake contact endpoint
    Contact {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8001")]
        port: u16,
        /// Status code to answer every submission with
        #[arg(long, default_value = "200")]
        status: u16,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}
