//! The query-execution collaborator used by catalog lookups.

use async_trait::async_trait;

use crate::error::Result;

/// Executes statements and single-value queries against a live database.
///
/// Dialects never hold a connection; operations that need the catalog take
/// one of these as an argument. Positional `?` placeholders in `sql` are
/// bound to `args` in order.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Executes a statement that returns no rows.
    async fn execute(&self, sql: &str) -> Result<()>;

    /// Runs a query returning one integer column and returns it.
    async fn query_count(&self, sql: &str, args: &[&str]) -> Result<i64>;

    /// Runs a query returning one text column. `None` if the query yields no
    /// row or a NULL value.
    async fn query_string(&self, sql: &str, args: &[&str]) -> Result<Option<String>>;
}
