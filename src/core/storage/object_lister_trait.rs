use async_trait::async_trait;

use crate::errors::AuditError;

/// Storage-facing abstraction: the single listing call an audit needs.
#[async_trait]
pub trait ObjectLister {
    /// Returns the object keys under `prefix` in `bucket`.
    ///
    /// Only the first page of results is returned; there is no pagination.
    async fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, AuditError>;
}
