use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::error;

use cvvpin::{
    api::OneTimeCode,
    ports::SessionCodeProvider,
    LocalBackend, LocalBackendConfig,
};

#[derive(Parser, Debug)]
#[command(name = "cvvpin")]
#[command(about = "CVV/PIN provisioning key exchange", version)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a key exchange and confirm it with a one-time code
    Exchange {
        /// One-time code for confirmation. Read from stdin if not provided
        #[arg(long)]
        otp: Option<String>,

        #[command(flatten)]
        backend: BackendArgs,
    },

    /// Print a freshly issued processing session code
    SessionCode {
        #[command(flatten)]
        backend: BackendArgs,
    },
}

/// Local processing center settings
#[derive(Args, Debug, Clone)]
pub struct BackendArgs {
    /// One-time code the local processing center accepts
    #[arg(long, default_value = OneTimeCode::DEFAULT)]
    pub expected_otp: String,

    /// Wrong one-time codes tolerated before confirmation locks
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..))]
    pub max_attempts: u8,

    /// Random bytes per session code
    #[arg(long, default_value_t = 16, value_parser = token_bytes_parser())]
    pub session_code_bytes: usize,

    /// Random bytes per key exchange payload
    #[arg(long, default_value_t = 32, value_parser = token_bytes_parser())]
    pub exchange_bytes: usize,
}

fn token_bytes_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(LocalBackendConfig::MIN_TOKEN_BYTES as u64..)
}

impl TryFrom<BackendArgs> for LocalBackendConfig {
    type Error = anyhow::Error;

    fn try_from(args: BackendArgs) -> Result<Self, Self::Error> {
        let otp = OneTimeCode::try_from(args.expected_otp.as_str())
            .map_err(|e| anyhow::anyhow!("Invalid expected one-time code: {}", e))?;
        Ok(Self {
            session_code_bytes: args.session_code_bytes,
            exchange_bytes: args.exchange_bytes,
            otp,
            max_otp_attempts: args.max_attempts,
        })
    }
}

async fn read_otp_line() -> anyhow::Result<String> {
    let mut line = String::new();
    BufReader::new(io::stdin())
        .read_line(&mut line)
        .await
        .context("failed to read one-time code from stdin")?;
    Ok(line)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Exchange { otp, backend } => {
            let config = LocalBackendConfig::try_from(backend)?;
            let mut service =
                cvvpin::local_service(config).context("invalid local backend configuration")?;

            let exchange = service
                .begin_exchange()
                .await
                .context("failed to exchange key")?;
            println!("{}", exchange.to_hex());

            let otp = match otp {
                Some(otp) => otp,
                None => read_otp_line().await?,
            };
            let otp = OneTimeCode::try_from(otp.as_str())
                .map_err(|e| anyhow::anyhow!("Invalid one-time code: {}", e))?;

            match service.confirm_exchange(&otp).await {
                Ok(()) => println!("confirmed"),
                Err(e) => {
                    error!("Failed to confirm key exchange: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::SessionCode { backend } => {
            let config = LocalBackendConfig::try_from(backend)?;
            let code = LocalBackend::new(config)
                .context("invalid local backend configuration")?
                .get()
                .await
                .context("failed to obtain processing session code")?;
            println!("{}", code.as_str());
        }
    }

    Ok(())
}
