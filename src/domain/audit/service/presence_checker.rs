use tracing::debug;

use crate::core::config::AuditConfig;
use crate::core::storage::object_lister_trait::ObjectLister;
use crate::domain::audit::model::{HourPrefix, MissingEntry};
use crate::errors::AuditError;

/// Clusters with no key under `prefix`.
///
/// A cluster counts as present when any key contains its name as a
/// substring; the match is not anchored.
pub fn missing_clusters(prefix: &HourPrefix, keys: &[String], clusters: &[String]) -> Vec<MissingEntry> {
    clusters
        .iter()
        .filter(|cluster| !keys.iter().any(|key| key.contains(cluster.as_str())))
        .map(|cluster| MissingEntry::new(prefix, cluster))
        .collect()
}

/// Lists each prefix in turn and collects missing entries.
///
/// The first listing failure aborts the whole check; nothing after it is
/// listed and the findings so far are dropped.
pub async fn check_prefixes<L: ObjectLister + ?Sized>(
    lister: &L,
    config: &AuditConfig,
    prefixes: &[HourPrefix],
) -> Result<Vec<MissingEntry>, AuditError> {
    let mut missing = Vec::new();

    for prefix in prefixes {
        let prefix_str = prefix.to_string();
        let keys = lister.list_keys(&config.bucket, &prefix_str).await?;
        debug!(prefix = %prefix_str, keys = keys.len(), "Listed objects");

        missing.extend(missing_clusters(prefix, &keys, &config.clusters));
    }

    Ok(missing)
}
