use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};

use client::{demo, BankClient, DEFAULT_BASE_URL};

/// Bank API demo client: create, list, get, update and delete one bank
#[derive(Parser)]
#[command(name = "bank-client")]
#[command(version, about, long_about = None)]
struct Args {
    /// Collection URL of the bank API
    #[arg(long, env = "BANK_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Bank to get, update and delete; defaults to the first one listed
    #[arg(long)]
    bank_id: Option<String>,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    let args = Args::parse();
    common::utils::logging::init_logging_default();

    let client = BankClient::new(args.base_url);
    info!(service = "bank-client", base_url = %client.base_url(), "running demo");

    match demo::run(&client, args.bank_id).await {
        Ok(steps) => {
            for step in steps {
                let body = serde_json::to_string_pretty(&step.response.body).unwrap_or_default();
                println!("{} ({}):\n{}", step.label, step.response.status, body);
            }
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "bank-client", error = %e, "demo failed");
            std::process::ExitCode::FAILURE
        }
    }
}
