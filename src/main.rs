use anyhow::Result;
use tracing::{info, warn};
use valuefmt::config::Config;
use valuefmt::logging::init_logging;
use valuefmt::samples::run_samples;

fn main() -> Result<()> {
    let config = Config::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Logging unavailable: {}", e);
    }

    info!("valuefmt {} starting", env!("APP_VERSION"));

    let report = run_samples(&config);

    // Rejected inputs produce no output line
    for sample in &report.formatted {
        if let Some(kind) = sample.output_kind() {
            println!("{}", kind);
        }
    }

    for record in &report.merged {
        println!("{}", serde_json::to_string(record)?);
    }

    let rejected = report.rejected().count();
    if rejected > 0 {
        warn!("{} sample input(s) were rejected", rejected);
    }

    Ok(())
}
