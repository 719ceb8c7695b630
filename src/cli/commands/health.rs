//! Health Command
//!
//! Report service health: the intent parser is always operational, the
//! template repository is degraded when its directory is missing.

use crate::cli::Output;
use crate::config::{Config, OutputFormat};
use crate::types::{HealthStatus, Result};

pub fn run(config: &Config, format: OutputFormat) -> Result<()> {
    let status = check(config);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
        OutputFormat::Text => {
            let output = Output::new();
            output.header(&format!("uiforge {}", status.version));
            output.field("Status", &status.status);
            output.field("Checked", &status.timestamp.to_rfc3339());
            for (service, state) in &status.services {
                if state == "operational" {
                    output.success(&format!("{}: {}", service, state));
                } else {
                    output.warning(&format!("{}: {}", service, state));
                }
            }
        }
    }

    Ok(())
}

pub fn check(config: &Config) -> HealthStatus {
    HealthStatus::healthy(env!("CARGO_PKG_VERSION"), config.templates.dir.is_dir())
}
