use chrono::NaiveDate;

use crate::domain::audit::model::HourPrefix;
use crate::errors::AuditError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const HOURS_PER_DAY: u32 = 24;

/// Parses a `YYYY-MM-DD` command-line date. `field` names the flag for the error.
pub fn parse_audit_date(field: &'static str, value: &str) -> Result<NaiveDate, AuditError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| AuditError::InvalidDate {
        field,
        value: value.to_string(),
        source,
    })
}

/// Expands an inclusive date range into one prefix per (day, hour, metric),
/// ordered day → hour → metric.
///
/// An inverted range yields no prefixes.
pub fn expand_prefixes(start: NaiveDate, end: NaiveDate, metrics: &[String]) -> Vec<HourPrefix> {
    let mut prefixes = Vec::new();

    for date in start.iter_days().take_while(|d| *d <= end) {
        for hour in 0..HOURS_PER_DAY {
            for metric in metrics {
                prefixes.push(HourPrefix {
                    metric: metric.clone(),
                    date,
                    hour,
                });
            }
        }
    }

    prefixes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuditConfig;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_yields_every_hour_for_every_metric() {
        let metrics = AuditConfig::default().metrics;
        let day = date(2024, 1, 1);

        let prefixes = expand_prefixes(day, day, &metrics);

        assert_eq!(prefixes.len(), 24 * metrics.len());
        for (i, prefix) in prefixes.iter().enumerate() {
            let hour = i / metrics.len();
            let metric = &metrics[i % metrics.len()];
            assert_eq!(prefix.to_string(), format!("{metric}/2024/01/01/{hour:02}"));
        }
    }

    #[test]
    fn range_is_inclusive_and_ordered_by_day_first() {
        let metrics = vec!["cpu-usage".to_string()];

        let prefixes = expand_prefixes(date(2024, 2, 28), date(2024, 3, 1), &metrics);

        assert_eq!(prefixes.len(), 3 * 24);
        assert_eq!(prefixes[0].to_string(), "cpu-usage/2024/02/28/00");
        assert_eq!(prefixes[24].to_string(), "cpu-usage/2024/02/29/00");
        assert_eq!(prefixes[71].to_string(), "cpu-usage/2024/03/01/23");
    }

    #[test]
    fn inverted_range_is_empty() {
        let metrics = vec!["cpu-usage".to_string()];
        assert!(expand_prefixes(date(2024, 1, 2), date(2024, 1, 1), &metrics).is_empty());
    }

    #[test]
    fn parse_rejects_malformed_dates() {
        assert_eq!(parse_audit_date("start", "2024-01-31").unwrap(), date(2024, 1, 31));

        for bad in ["not-a-date", "2024/01/01", "2024-02-30", ""] {
            match parse_audit_date("start", bad) {
                Err(AuditError::InvalidDate { field, value, .. }) => {
                    assert_eq!(field, "start");
                    assert_eq!(value, bad);
                }
                other => panic!("expected InvalidDate for {bad:?}, got {other:?}"),
            }
        }
    }
}
