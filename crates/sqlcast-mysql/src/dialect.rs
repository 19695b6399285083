//! MySQL dialect implementation.

use sqlcast_core::dialect::naming;
use sqlcast_core::{Catalog, Dialect, FieldDescriptor, Result};
use tracing::{debug, warn};

use crate::naming::{shorten, MAX_IDENTIFIER_LENGTH};
use crate::types;

/// Looks up the schema the connection is using.
pub const CURRENT_DATABASE_SQL: &str = "SELECT DATABASE()";

/// Counts foreign key constraints by schema, table and name.
pub const HAS_FOREIGN_KEY_SQL: &str = "\
SELECT Count(*)
FROM   information_schema.table_constraints
WHERE  constraint_schema = ?
       AND table_name = ?
       AND constraint_name = ?
       AND constraint_type = 'FOREIGN KEY'";

/// MySQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MysqlDialect;

impl MysqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the `DROP INDEX` statement for an index on `table_name`.
    #[must_use]
    pub fn drop_index_sql(&self, table_name: &str, index_name: &str) -> String {
        format!(
            "DROP INDEX {} ON {}",
            self.quote_identifier(index_name),
            self.quote_identifier(table_name)
        )
    }

    /// Drops an index from a table.
    pub async fn remove_index<C>(
        &self,
        catalog: &C,
        table_name: &str,
        index_name: &str,
    ) -> Result<()>
    where
        C: Catalog + ?Sized,
    {
        let sql = self.drop_index_sql(table_name, index_name);
        debug!(%sql, "removing index");
        catalog.execute(&sql).await
    }

    /// Returns whether the current database has a foreign key constraint
    /// named `foreign_key_name` on `table_name`.
    ///
    /// A failed lookup is logged and reported as `false`.
    pub async fn has_foreign_key<C>(
        &self,
        catalog: &C,
        table_name: &str,
        foreign_key_name: &str,
    ) -> bool
    where
        C: Catalog + ?Sized,
    {
        let schema = self.current_database(catalog).await;
        match catalog
            .query_count(HAS_FOREIGN_KEY_SQL, &[schema.as_str(), table_name, foreign_key_name])
            .await
        {
            Ok(count) => count > 0,
            Err(err) => {
                warn!(
                    table = table_name,
                    foreign_key = foreign_key_name,
                    error = %err,
                    "foreign key lookup failed"
                );
                false
            }
        }
    }

    /// Returns the name of the database the connection is using.
    ///
    /// A failed lookup, or a connection with no database selected, yields an
    /// empty string; failures are logged.
    pub async fn current_database<C>(&self, catalog: &C) -> String
    where
        C: Catalog + ?Sized,
    {
        match catalog.query_string(CURRENT_DATABASE_SQL, &[]).await {
            Ok(name) => name.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "current database lookup failed");
                String::new()
            }
        }
    }
}

impl Dialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn max_identifier_length(&self) -> usize {
        MAX_IDENTIFIER_LENGTH
    }

    fn data_type_of(&self, field: &mut FieldDescriptor) -> Result<String> {
        types::resolve(field)
    }

    fn build_foreign_key_name(&self, table_name: &str, field: &str, dest: &str) -> String {
        shorten(naming::foreign_key_name(table_name, field, dest), dest)
    }

    fn select_from_dummy_table(&self) -> &'static str {
        "FROM DUAL"
    }
}
