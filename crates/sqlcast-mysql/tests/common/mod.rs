#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use sqlcast_core::{Catalog, Error, Result};

/// In-memory [`Catalog`] that records every statement it receives.
#[derive(Default)]
pub struct RecordingCatalog {
    /// Value returned by `SELECT DATABASE()`.
    pub database: Option<String>,
    /// Value returned by count queries.
    pub count: i64,
    /// When set, every call fails.
    pub fail: bool,
    executed: Mutex<Vec<String>>,
    queried: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingCatalog {
    pub fn with_database(name: &str) -> Self {
        Self {
            database: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    pub fn queried(&self) -> Vec<(String, Vec<String>)> {
        self.queried.lock().unwrap().clone()
    }

    fn record(&self, sql: &str, args: &[&str]) -> Result<()> {
        self.queried.lock().unwrap().push((
            sql.to_string(),
            args.iter().map(ToString::to_string).collect(),
        ));
        self.check()
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            Err(Error::catalog("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Catalog for RecordingCatalog {
    async fn execute(&self, sql: &str) -> Result<()> {
        self.executed.lock().unwrap().push(sql.to_string());
        self.check()
    }

    async fn query_count(&self, sql: &str, args: &[&str]) -> Result<i64> {
        self.record(sql, args)?;
        Ok(self.count)
    }

    async fn query_string(&self, sql: &str, args: &[&str]) -> Result<Option<String>> {
        self.record(sql, args)?;
        Ok(self.database.clone())
    }
}
