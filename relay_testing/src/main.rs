use std::{net::IpAddr, time::Duration};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use relay_testing::{ip_echo, telegram};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Telegram {
            host,
            port,
            token,
            chat_id,
            delay_ms,
        } => {
            let config = telegram::TelegramTestConfig {
                token,
                chat_id,
                delay: Duration::from_millis(delay_ms),
            };
            telegram::start_server(host, port, config).await?
        }
        Command::IpEcho { host, port, ip } => ip_echo::start_server(host, port, ip).await?,
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
    /// Start the telegram bot api testing server
    Telegram {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8003")]
        port: u16,
        #[arg(long, default_value = telegram::DEFAULT_TOKEN)]
        token: String,
        /// Only accept messages to this chat
        #[arg(long)]
        chat_id: Option<String>,
        /// Delay every response by this many milliseconds
        #[arg(long, default_value = "0")]
        delay_ms: u64,
    },
    /// Start the ip echo testing server
    IpEcho {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8004")]
        port: u16,
        /// The ip address to report
        #[arg(long, default_value = "203.0.113.7")]
        ip: IpAddr,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}
