use tracing::{info, warn};

use crate::core::client::s3_client::{build_s3_client, S3ObjectLister};
use crate::core::config::AuditConfig;
use crate::core::storage::object_lister_trait::ObjectLister;
use crate::domain::audit::model::AuditReport;
use crate::domain::audit::service::prefix_generator::{expand_prefixes, parse_audit_date};
use crate::domain::audit::service::presence_checker::check_prefixes;
use crate::errors::AuditError;

/// Audits the configured bucket for the inclusive `start..=end` date range.
///
/// Dates are validated before the storage client is built.
pub async fn run_audit(config: &AuditConfig, start: &str, end: &str) -> Result<AuditReport, AuditError> {
    parse_audit_date("start", start)?;
    parse_audit_date("end", end)?;

    let lister = S3ObjectLister::new(build_s3_client(config).await);
    run_audit_with_lister(&lister, config, start, end).await
}

pub async fn run_audit_with_lister<L: ObjectLister + ?Sized>(
    lister: &L,
    config: &AuditConfig,
    start: &str,
    end: &str,
) -> Result<AuditReport, AuditError> {
    let start_date = parse_audit_date("start", start)?;
    let end_date = parse_audit_date("end", end)?;

    if start_date > end_date {
        warn!(%start_date, %end_date, "Start date is after end date, nothing to check");
    }

    let prefixes = expand_prefixes(start_date, end_date, &config.metrics);
    info!(
        bucket = %config.bucket,
        prefixes = prefixes.len(),
        clusters = config.clusters.len(),
        "Checking prefixes"
    );

    let missing = check_prefixes(lister, config, &prefixes).await?;

    Ok(AuditReport {
        prefixes_checked: prefixes.len(),
        clusters_checked: config.clusters.len(),
        missing,
    })
}
