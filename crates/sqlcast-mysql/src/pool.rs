//! [`Catalog`] backed by a sqlx MySQL connection pool.

use async_trait::async_trait;
use sqlcast_core::{Catalog, Error, Result};
use sqlx::mysql::MySqlPool;

/// Runs catalog statements on a [`MySqlPool`].
#[derive(Debug, Clone)]
pub struct PoolCatalog {
    pool: MySqlPool,
}

impl PoolCatalog {
    /// Wraps a connection pool.
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for PoolCatalog {
    async fn execute(&self, sql: &str) -> Result<()> {
        sqlx::query(sql)
            .execute(&self.pool)
            .await
            .map_err(Error::catalog)?;
        Ok(())
    }

    async fn query_count(&self, sql: &str, args: &[&str]) -> Result<i64> {
        let mut query = sqlx::query_as::<_, (i64,)>(sql);
        for arg in args {
            query = query.bind((*arg).to_string());
        }
        let (count,) = query.fetch_one(&self.pool).await.map_err(Error::catalog)?;
        Ok(count)
    }

    async fn query_string(&self, sql: &str, args: &[&str]) -> Result<Option<String>> {
        let mut query = sqlx::query_as::<_, (Option<String>,)>(sql);
        for arg in args {
            query = query.bind((*arg).to_string());
        }
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::catalog)?;
        Ok(row.and_then(|(value,)| value))
    }
}
