use tracing::info;

use crate::domain::audit::model::AuditReport;

pub const CLEAN_MESSAGE: &str = "No errors found";

/// Report lines in emission order, one per missing entry.
pub fn report_lines(report: &AuditReport) -> Vec<String> {
    if report.is_clean() {
        return vec![CLEAN_MESSAGE.to_string()];
    }
    report.missing.iter().map(|entry| entry.to_string()).collect()
}

/// Logs every missing entry, or the clean-bill message, followed by a summary.
pub fn report(report: &AuditReport) {
    for line in report_lines(report) {
        info!("{}", line);
    }

    info!(
        prefixes = report.prefixes_checked,
        clusters = report.clusters_checked,
        missing = report.missing.len(),
        "Audit finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audit::model::{HourPrefix, MissingEntry};
    use chrono::NaiveDate;

    #[test]
    fn clean_report_logs_single_message() {
        let report = AuditReport {
            prefixes_checked: 96,
            clusters_checked: 40,
            missing: vec![],
        };

        assert_eq!(report_lines(&report), vec![CLEAN_MESSAGE.to_string()]);
    }

    #[test]
    fn one_line_per_missing_entry() {
        let prefix = HourPrefix {
            metric: "cpu-requests".into(),
            date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            hour: 0,
        };
        let report = AuditReport {
            prefixes_checked: 1,
            clusters_checked: 2,
            missing: vec![
                MissingEntry::new(&prefix, "use1-eks23-test-bq-01"),
                MissingEntry::new(&prefix, "use4-gke23-test-web-03"),
            ],
        };

        let lines = report_lines(&report);

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "Missing info for clusters: use4-gke23-test-web-03 metric: cpu-requests at date: 2023-12-31 00:00:00"
        );
    }
}
