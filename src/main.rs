//! OpenSASE Order Flow - processes the sample order on the console

use anyhow::Result;
use opensase_order_flow::{sample, telemetry, Config, Console};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init();
    tracing::debug!(currency = %config.currency, "configuration loaded");

    let summary = sample::run(&config, Console::stdout())?;
    tracing::debug!(summary = %serde_json::to_string(&summary)?, "order snapshot");
    Ok(())
}
