use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use shared::{HealthResponse, StatusResponse};

const DEFAULT_URL: &str = "http://localhost:8080";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// CLI
// ============================================================================

#[derive(Parser)]
#[command(name = "mongoflow-cli")]
#[command(about = "Probe CLI for the MongoFlow service")]
struct Cli {
    /// Base URL of the service
    #[arg(long, global = true, env = "MONGOFLOW_URL", default_value = DEFAULT_URL)]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the service's running message
    Status,
    /// Query the health endpoint; fails unless the service is healthy
    Health,
    /// Query every endpoint and print a summary table
    Check,
}

// ============================================================================
// Probing
// ============================================================================

/// Join a base URL and an absolute path without doubling the slash.
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> anyhow::Result<(u16, T)> {
    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("Request to {} failed", url))?;

    let code = resp.status();
    if !code.is_success() {
        anyhow::bail!("{} returned HTTP {}", url, code);
    }

    let body = resp
        .json::<T>()
        .with_context(|| format!("Unexpected response body from {}", url))?;
    Ok((code.as_u16(), body))
}

struct ProbeRow {
    path: &'static str,
    code: Option<u16>,
    status: String,
    healthy: bool,
}

fn probe_status(client: &Client, base: &str) -> ProbeRow {
    match fetch::<StatusResponse>(client, &endpoint(base, "/")) {
        Ok((code, body)) => ProbeRow {
            path: "/",
            code: Some(code),
            healthy: body.is_ok(),
            status: body.status,
        },
        Err(e) => ProbeRow {
            path: "/",
            code: None,
            status: format!("{:#}", e),
            healthy: false,
        },
    }
}

fn probe_health(client: &Client, base: &str) -> ProbeRow {
    match fetch::<HealthResponse>(client, &endpoint(base, "/health")) {
        Ok((code, body)) => ProbeRow {
            path: "/health",
            code: Some(code),
            healthy: body.is_healthy(),
            status: body.status,
        },
        Err(e) => ProbeRow {
            path: "/health",
            code: None,
            status: format!("{:#}", e),
            healthy: false,
        },
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    match cli.command {
        Commands::Status => {
            let (_, body) = fetch::<StatusResponse>(&client, &endpoint(&cli.url, "/"))?;
            println!("{} ({})", body.message, body.status);
        }

        Commands::Health => {
            let (_, body) = fetch::<HealthResponse>(&client, &endpoint(&cli.url, "/health"))?;
            println!("{}", body.status);
            if !body.is_healthy() {
                anyhow::bail!("Service at {} is not healthy", cli.url);
            }
        }

        Commands::Check => {
            let rows = [
                probe_status(&client, &cli.url),
                probe_health(&client, &cli.url),
            ];

            println!("{:<10} {:<6} {}", "Path", "HTTP", "Status");
            println!("{}", "-".repeat(40));
            for row in &rows {
                let code = row.code.map(|c| c.to_string()).unwrap_or_else(|| "-".into());
                println!("{:<10} {:<6} {}", row.path, code, row.status);
            }

            let failed = rows.iter().filter(|r| !r.healthy).count();
            if failed > 0 {
                anyhow::bail!("{} of {} endpoints failed", failed, rows.len());
            }
        }
    }

    Ok(())
}
