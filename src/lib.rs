//! Coverage audit for the exported Kubernetes metrics bucket.
//!
//! For every metric, hour and cluster in a date range the audit checks that
//! an object exists under `<metric>/<yyyy>/<mm>/<dd>/<hh>` and reports the
//! combinations that are absent.

pub mod cli;
pub mod core;
pub mod domain;
pub mod errors;
