use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use metrics_coverage_audit::cli::Args;
use metrics_coverage_audit::core::config::AuditConfig;
use metrics_coverage_audit::core::logging::init_logging;
use metrics_coverage_audit::domain::audit::service::audit_service::run_audit;
use metrics_coverage_audit::domain::audit::service::reporter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = AuditConfig::default();
    let _guard = init_logging(&config.log_file);

    info!("Starting...");

    match run_audit(&config, &args.start, &args.end).await {
        Ok(report) => {
            reporter::report(&report);
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(e.into())
        }
    }
}
