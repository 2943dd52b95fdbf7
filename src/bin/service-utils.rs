use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use service_utils::client::server_client::get_access_token;
use service_utils::isc::{has_valid_jwt_bearer_token, sign_service_token};
use service_utils::utils::config_loader;
use service_utils::utils::logging;
use service_utils::utils::logging::LogLevel;
use service_utils::ServerClient;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config; the environment is used when omitted
    #[arg(short, long, env = "CONFIG")]
    config: Option<String>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Authenticate against the token endpoint and print the access token
    AccessToken,
    /// Print the user profile URL of the authentication server
    MeUrl,
    /// Sign an inter-service token for the given service name
    IscToken {
        #[arg(long)]
        service: String,
    },
    /// Check an inter-service token against the configured key
    VerifyIscToken { token: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let service_config = config_loader::run(args.config.as_deref()).await?;
    logging::run(&service_config, args.log_level).await?;

    match args.command {
        Command::AccessToken => {
            let token = get_access_token(&service_config.api_credentials()?).await?;
            println!("{}", token);
        }
        Command::MeUrl => {
            let client = ServerClient::new(service_config.api_credentials()?)?;
            println!("{}", client.me_url()?);
        }
        Command::IscToken { service } => {
            let token = sign_service_token(&service, &service_config.inter_service)?;
            info!(service = %service, "signed inter-service token");
            println!("{}", token);
        }
        Command::VerifyIscToken { token } => {
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
            let (valid, err, claims) =
                has_valid_jwt_bearer_token(&headers, service_config.inter_service.jwt_key());
            match (valid, claims) {
                (true, Some(claims)) => println!("{}", serde_json::to_string_pretty(&claims)?),
                _ => return Err(anyhow!("invalid token: {}", serde_json::to_string(&err)?)),
            }
        }
    }

    Ok(())
}
