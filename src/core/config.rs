/// Bucket holding the exported metrics.
pub const BUCKET: &str = "kube-metrics-thanos";
pub const REGION: &str = "us-east-1";
/// Shared credentials profile from `~/.aws/config`.
pub const PROFILE: &str = "default";
pub const LOG_FILE: &str = "logrus.log";

/// Metrics expected under every hour, in the order prefixes are generated.
pub const METRICS: &[&str] = &[
    "cpu-limits",
    "cpu-requests",
    "cpu-throttled-percentage",
    "cpu-usage",
];

/// Clusters expected to report every metric every hour.
pub const CLUSTERS: &[&str] = &[
    "use1-eks23-core-job-01",
    "use1-eks23-high-bq-01",
    "use1-eks23-high-bq-02",
    "use1-eks23-high-job-01",
    "use1-eks23-high-job-02",
    "use1-eks23-high-web-01",
    "use1-eks23-ops-gov-01",
    "use1-eks23-prod-bq-01",
    // use1-eks23-prod-bq-02 is decommissioned
    "use1-eks23-prod-bq-03",
    "use1-eks23-prod-bq-04",
    "use1-eks23-prod-bq-05",
    "use1-eks23-prod-bq-06",
    "use1-eks23-prod-bq-07",
    "use1-eks23-prod-bq-08",
    "use1-eks23-prod-bq-09",
    "use1-eks23-prod-job-01",
    "use1-eks23-prod-job-02",
    "use1-eks23-prod-ml-01",
    "use1-eks23-prod-web-01",
    "use1-eks23-prod-web-02",
    "use1-eks23-prod-web-03",
    "use1-eks23-prod-web-04",
    "use1-eks23-prod-web-05",
    "use1-eks23-prod-web-06",
    "use1-eks23-prod-web-07",
    "use1-eks23-prod-web-08",
    "use1-eks23-prod-web-09",
    "use1-eks23-prod-web-10",
    "use1-eks23-test-bq-01",
    "use1-eks23-test-bq-02",
    "use1-eks23-test-job-01",
    "use1-eks23-test-job-02",
    "use1-eks23-test-ml-01",
    "use1-eks23-test-tp-01",
    "use1-eks23-test-web-01",
    "use1-eks23-test-web-02",
    "use1-eks23-test-web-03",
    "use4-gke23-test-web-01",
    "use4-gke23-test-web-02",
    "use4-gke23-test-web-03",
];

/// Everything an audit run needs, passed explicitly through the pipeline.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub bucket: String,
    pub region: String,
    pub profile: String,
    pub log_file: String,
    pub metrics: Vec<String>,
    pub clusters: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            bucket: BUCKET.to_string(),
            region: REGION.to_string(),
            profile: PROFILE.to_string(),
            log_file: LOG_FILE.to_string(),
            metrics: METRICS.iter().map(|m| m.to_string()).collect(),
            clusters: CLUSTERS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_fixed_constants() {
        let config = AuditConfig::default();

        assert_eq!(config.bucket, "kube-metrics-thanos");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.profile, "default");
        assert_eq!(config.log_file, "logrus.log");
        assert_eq!(config.metrics.len(), 4);
        assert_eq!(config.metrics[0], "cpu-limits");
        assert_eq!(config.clusters.len(), 40);
        assert!(!config.clusters.iter().any(|c| c == "use1-eks23-prod-bq-02"));
    }
}
