use std::{env, process::ExitCode, sync::Arc};

use riot_account_tools::{Config, RiotTools, logging, riot::RiotClient};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _log_guard = logging::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match RiotClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };
    let tools = RiotTools::new(client.clone());

    let mut args = env::args().skip(1);
    let Some(tool) = args.next() else {
        for descriptor in RiotTools::descriptors() {
            println!(
                "{}({}): {}",
                descriptor.name,
                descriptor.arguments.join(", "),
                descriptor.description
            );
        }
        return ExitCode::SUCCESS;
    };

    let arguments = match args.next().map(|raw| serde_json::from_str::<Value>(&raw)) {
        Some(Ok(arguments)) => arguments,
        Some(Err(e)) => {
            error!("❌ arguments must be a JSON object: {}", e);
            return ExitCode::FAILURE;
        }
        None => Value::Null,
    };

    info!("🛰️ running {}", tool);
    let code = match tools.call(&tool, arguments).await {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("❌ {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    };

    client.metrics().log_summary();
    code
}
