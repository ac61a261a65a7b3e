//! Identity verification CLI binary.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use veriface_cli::config::{self, FileConfig, DEFAULT_CONFIG_FILE};
use veriface_cli::error::{AppError, AppResult};
use veriface_cli::{output, pipeline};
use veriface_client::{AliyunClient, AliyunConfig};
use veriface_image::normalize;
use veriface_models::{Credential, ValidationRequest, ValidationResult};

/// Verify that a face photo matches a claimed identity.
#[derive(Debug, Parser)]
#[command(name = "veriface", version, about)]
struct Cli {
    /// Subject's full name as printed on the ID card
    #[arg(long)]
    name: String,

    /// National ID card number
    #[arg(long)]
    id_card: String,

    /// Path to the face photo (JPEG or PNG)
    #[arg(long)]
    photo: PathBuf,

    /// Provider AppCode; falls back to the config file when omitted
    #[arg(long, env = "VERIFACE_APPCODE")]
    appcode: Option<String>,

    /// Credential config file location
    #[arg(long, env = "VERIFACE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Request timeout override in seconds
    #[arg(long, env = "VERIFACE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Print the result as JSON instead of a report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(result) => match render(&cli, &result) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                error!("Failed to render result: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            if let AppError::Client(client_error) = &e {
                // The provider answered; show what came back even though
                // it did not parse.
                if let Some(degraded) = client_error.degraded_result() {
                    println!("{}", output::render_report(&degraded));
                }
                if let Some(hint) = output::hint_for(client_error) {
                    eprintln!("{hint}");
                }
            }
            error!("Validation attempt failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize tracing with colored output for dev, JSON for production.
/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("veriface=info".parse().unwrap())
        .add_directive("veriface_cli=info".parse().unwrap())
        .add_directive("veriface_client=info".parse().unwrap())
        .add_directive("veriface_image=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter)
            .init();
    }
}

async fn run(cli: &Cli) -> AppResult<ValidationResult> {
    let credential = resolve_credential(cli)?;

    let mut provider_config = AliyunConfig::from_env();
    if let Some(secs) = cli.timeout_secs {
        provider_config.timeout = Duration::from_secs(secs);
    }
    let client = AliyunClient::new(provider_config)?;

    info!(photo = %cli.photo.display(), "normalizing photo");
    let photo = normalize(&cli.photo)?;
    debug!(width = photo.width(), height = photo.height(), "photo normalized");

    let request = ValidationRequest::new(cli.name.clone(), cli.id_card.clone(), photo, credential)?;

    pipeline::execute(&client, request).await
}

/// Resolve the credential: `--appcode` (or `VERIFACE_APPCODE`, which clap
/// folds into the same flag) wins and is remembered in the config file;
/// otherwise the config file is consulted.
fn resolve_credential(cli: &Cli) -> AppResult<Credential> {
    if let Some(appcode) = &cli.appcode {
        let credential = Credential::new(appcode.clone())?;
        config::save(
            &cli.config,
            &FileConfig {
                appcode: credential.expose().to_string(),
            },
        );
        return Ok(credential);
    }

    let file = config::load(&cli.config);
    if file.appcode.is_empty() {
        return Err(AppError::MissingCredential);
    }
    Ok(Credential::new(file.appcode)?)
}

fn render(cli: &Cli, result: &ValidationResult) -> AppResult<String> {
    if cli.json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(output::render_report(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn cli_with(config_path: PathBuf, appcode: Option<String>) -> Cli {
        Cli {
            name: "张三".to_string(),
            id_card: "110101199003074258".to_string(),
            photo: PathBuf::from("photo.jpg"),
            appcode,
            config: config_path,
            timeout_secs: None,
            json: false,
        }
    }

    #[test]
    fn test_resolve_credential_prefers_flag_and_persists() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        let cli = cli_with(config_path.clone(), Some("flag-appcode".to_string()));

        let credential = resolve_credential(&cli).unwrap();
        assert_eq!(credential.expose(), "flag-appcode");

        let saved = config::load(&config_path);
        assert_eq!(saved.appcode, "flag-appcode");
    }

    #[test]
    fn test_resolve_credential_falls_back_to_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        config::save(
            &config_path,
            &FileConfig {
                appcode: "saved-appcode".to_string(),
            },
        );

        let cli = cli_with(config_path, None);
        let credential = resolve_credential(&cli).unwrap();
        assert_eq!(credential.expose(), "saved-appcode");
    }

    #[test]
    fn test_resolve_credential_missing_everywhere() {
        let dir = TempDir::new().unwrap();
        let cli = cli_with(dir.path().join("config.json"), None);
        assert!(matches!(
            resolve_credential(&cli),
            Err(AppError::MissingCredential)
        ));
    }

    #[test]
    fn test_resolve_credential_rejects_placeholder_from_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        config::save(
            &config_path,
            &FileConfig {
                appcode: veriface_models::PLACEHOLDER_APPCODE.to_string(),
            },
        );

        let cli = cli_with(config_path, None);
        assert!(matches!(
            resolve_credential(&cli),
            Err(AppError::Credential(_))
        ));
    }
}
