//! nfdqr CLI entrypoint

use clap::Parser;
use nfdqr::{NfdQrConfig, NfdQrGenerator, Outcome, Result, logging};
use serde_json::json;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "nfdqr",
    version,
    about = "Generate a payment QR code for an NFD name"
)]
struct Cli {
    /// Fully-qualified NFD name to resolve (e.g. payments.algo)
    name: String,

    /// Output image path; format is inferred from the extension
    #[arg(long, short, value_name = "PATH", default_value = "nfd_qr.png")]
    output: PathBuf,

    /// Logo image composited at the center of the code
    #[arg(long, value_name = "PATH", default_value = "logo.png")]
    logo: PathBuf,

    /// Optional configuration file (toml/yaml). Defaults to nfdqr.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the corner radius of the output image (takes precedence over config file)
    #[arg(long, value_name = "PIXELS")]
    corner_radius: Option<u32>,

    /// Override the NFD API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Output the result as formatted JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = NfdQrConfig::load(cli.config.as_deref())?;

    if let Some(radius) = cli.corner_radius {
        config.render.corner_radius = radius;
    }

    if let Some(ref base_url) = cli.base_url {
        config.resolver.base_url = base_url.clone();
    }

    logging::init(&config.logging)?;

    let generator = NfdQrGenerator::new(&config)?;

    match generator.generate(&cli.name, &cli.logo, &cli.output).await? {
        Outcome::Saved {
            path,
            deposit_account,
            nfd_account,
        } => {
            if cli.json {
                let payload = json!({
                    "name": cli.name,
                    "depositAccount": deposit_account,
                    "nfdAccount": nfd_account,
                    "output": path,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            info!("QR code saved to {}", path.display());
            Ok(())
        }
        Outcome::Unresolved { descriptor } => {
            if cli.json {
                let payload = json!({
                    "name": cli.name,
                    "error": descriptor,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            error!("Error retrieving deposit account: {descriptor}");
            std::process::exit(1);
        }
    }
}
