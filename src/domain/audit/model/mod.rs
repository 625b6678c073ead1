use chrono::NaiveDate;
use std::fmt;

/// One `<metric>/<yyyy>/<mm>/<dd>/<hh>` key prefix in the metrics bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourPrefix {
    pub metric: String,
    pub date: NaiveDate,
    pub hour: u32,
}

impl fmt::Display for HourPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{:02}",
            self.metric,
            self.date.format("%Y/%m/%d"),
            self.hour
        )
    }
}

/// A (metric, date, hour, cluster) combination with no object in the bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingEntry {
    pub metric: String,
    pub date: NaiveDate,
    pub hour: u32,
    pub cluster: String,
}

impl MissingEntry {
    pub fn new(prefix: &HourPrefix, cluster: &str) -> Self {
        Self {
            metric: prefix.metric.clone(),
            date: prefix.date,
            hour: prefix.hour,
            cluster: cluster.to_string(),
        }
    }
}

impl fmt::Display for MissingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missing info for clusters: {} metric: {} at date: {} {:02}:00:00",
            self.cluster,
            self.metric,
            self.date.format("%Y-%m-%d"),
            self.hour
        )
    }
}

/// Outcome of a completed audit run.
#[derive(Debug, Default)]
pub struct AuditReport {
    pub prefixes_checked: usize,
    pub clusters_checked: usize,
    pub missing: Vec<MissingEntry>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }
}
