//! Entry points: [`SparkSession`] and its [`SparkContext`]
//!
//! A session owns nothing global. `get_or_create` always builds a fresh
//! session from the builder settings.

pub mod config;

use std::collections::BTreeMap;
use std::path::Path;

use crate::dataframe::{DataFrame, SchemaSpec};
use crate::error::{Error, Result};
use crate::rdd::{self, Rdd};
use crate::value::Row;

pub use config::SessionConfig;

/// Master URL used when none is configured
pub const DEFAULT_MASTER: &str = "local[*]";

/// Application name used when none is configured
pub const DEFAULT_APP_NAME: &str = "sparkrs";

/// Config key overriding the master-derived default parallelism
pub const DEFAULT_PARALLELISM_KEY: &str = "spark.default.parallelism";

/// Number of worker slots described by a `local` master URL
///
/// `local` is one slot, `local[N]` and `local[N,F]` are `N` slots, and
/// `local[*]` is the number of logical CPUs.
pub fn parse_master(master: &str) -> Result<usize> {
    let invalid = || Error::InvalidMaster(master.to_string());
    if master == "local" {
        return Ok(1);
    }
    let inner = master
        .strip_prefix("local[")
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?;
    let threads = inner.split(',').next().unwrap_or_default().trim();
    if threads == "*" {
        return Ok(num_cpus::get());
    }
    match threads.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(invalid()),
    }
}

/// Builder for [`SparkSession`]
///
/// Explicit builder calls take precedence over a loaded [`SessionConfig`].
#[derive(Debug, Clone, Default)]
pub struct SparkSessionBuilder {
    master: Option<String>,
    app_name: Option<String>,
    conf: BTreeMap<String, String>,
    file: Option<SessionConfig>,
}

impl SparkSessionBuilder {
    pub fn master(mut self, master: &str) -> Self {
        self.master = Some(master.to_string());
        self
    }

    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    pub fn config(mut self, key: &str, value: impl ToString) -> Self {
        self.conf.insert(key.to_string(), value.to_string());
        self
    }

    /// Use `config` for every setting not given explicitly
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.file = Some(config);
        self
    }

    pub fn get_or_create(self) -> Result<SparkSession> {
        let file = self.file.unwrap_or_default();
        let master = self
            .master
            .or(file.session.master)
            .unwrap_or_else(|| DEFAULT_MASTER.to_string());
        let app_name = self
            .app_name
            .or(file.session.app_name)
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let mut conf = file.conf;
        conf.extend(self.conf);

        let mut parallelism = parse_master(&master)?;
        if let Some(value) = conf.get(DEFAULT_PARALLELISM_KEY) {
            parallelism = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(Error::Config(format!(
                        "{} must be a positive integer, got '{}'",
                        DEFAULT_PARALLELISM_KEY, value
                    )))
                }
            };
        }

        log::info!(
            "starting session '{}' on {} (default parallelism {})",
            app_name,
            master,
            parallelism
        );
        Ok(SparkSession {
            app_name,
            conf,
            context: SparkContext {
                master,
                default_parallelism: parallelism,
            },
        })
    }
}

/// Handle for creating DataFrames and RDDs
#[derive(Debug, Clone)]
pub struct SparkSession {
    app_name: String,
    conf: BTreeMap<String, String>,
    context: SparkContext,
}

impl SparkSession {
    pub fn builder() -> SparkSessionBuilder {
        SparkSessionBuilder::default()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn master(&self) -> &str {
        &self.context.master
    }

    /// Value of a config key
    pub fn conf(&self, key: &str) -> Option<&str> {
        self.conf.get(key).map(String::as_str)
    }

    pub fn spark_context(&self) -> &SparkContext {
        &self.context
    }

    /// DataFrame from in-memory rows, see [`DataFrame::from_rows`]
    pub fn create_dataframe<R: Into<Row>>(
        &self,
        rows: Vec<R>,
        schema: impl Into<SchemaSpec>,
    ) -> Result<DataFrame> {
        DataFrame::from_rows(rows, schema)
    }

    /// DataFrame from the elements of an RDD, in partition order
    pub fn create_dataframe_from_rdd<R>(
        &self,
        rdd: &Rdd<R>,
        schema: impl Into<SchemaSpec>,
    ) -> Result<DataFrame>
    where
        R: Clone + Into<Row>,
    {
        DataFrame::from_rows(rdd.collect(), schema)
    }
}

/// Creates partitioned collections
#[derive(Debug, Clone)]
pub struct SparkContext {
    master: String,
    default_parallelism: usize,
}

impl SparkContext {
    /// Partition count used by [`parallelize`](Self::parallelize) by default
    pub fn default_parallelism(&self) -> usize {
        self.default_parallelism
    }

    pub fn master(&self) -> &str {
        &self.master
    }

    /// Distribute `data` over `num_slices` partitions (default parallelism when `None`)
    pub fn parallelize<T>(&self, data: Vec<T>, num_slices: Option<usize>) -> Result<Rdd<T>> {
        let n = num_slices.unwrap_or(self.default_parallelism);
        let partitions = rdd::slice(data, n)?;
        log::debug!("parallelize: {} partition(s)", partitions.len());
        Ok(Rdd::from_partitions(partitions))
    }

    /// Lines of a text file, split into at least `min_partitions` byte ranges
    /// (fewer only when the file has fewer bytes than that)
    pub fn text_file(&self, path: impl AsRef<Path>, min_partitions: usize) -> Result<Rdd<String>> {
        let partitions = rdd::read_text_file(path.as_ref(), min_partitions)?;
        Ok(Rdd::from_partitions(partitions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_master() {
        assert_eq!(parse_master("local").unwrap(), 1);
        assert_eq!(parse_master("local[3]").unwrap(), 3);
        assert_eq!(parse_master("local[4,2]").unwrap(), 4);
        assert_eq!(parse_master("local[*]").unwrap(), num_cpus::get());
        for bad in ["local[0]", "local[x]", "yarn", "local[2"] {
            assert!(matches!(parse_master(bad), Err(Error::InvalidMaster(_))), "{}", bad);
        }
    }

    #[test]
    fn test_builder_wins_over_file() {
        let mut file = SessionConfig::default();
        file.session.master = Some("local[2]".to_string());
        file.session.app_name = Some("from-file".to_string());
        file.conf.insert("k".to_string(), "file".to_string());

        let spark = SparkSession::builder()
            .with_config(file)
            .app_name("explicit")
            .config("k", "builder")
            .get_or_create()
            .unwrap();
        assert_eq!(spark.master(), "local[2]");
        assert_eq!(spark.app_name(), "explicit");
        assert_eq!(spark.conf("k"), Some("builder"));
        assert_eq!(spark.spark_context().default_parallelism(), 2);
    }
}
