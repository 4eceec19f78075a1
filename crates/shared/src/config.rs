//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Verification pipeline configuration.
    #[serde(default)]
    pub verify: VerifyConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How missing converted (cost/price) fields are filled in a flagged
/// transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvertedInference {
    /// The filled elided posting takes the inferred commodity and quantity
    /// for its missing converted fields too.
    #[default]
    SharedFlag,
    /// Every posting of the transaction, stated or elided, takes the inferred
    /// commodity and quantity for its missing converted fields.
    AllPostings,
    /// Converted fields are never inferred and stay absent.
    Never,
}

/// What to do with a transaction that has more than one elided posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElisionPolicy {
    /// Fail the whole verification run.
    #[default]
    Reject,
    /// Infer only for the elided posting with the lowest statement number;
    /// the others are left unresolved.
    FirstOnly,
}

/// Verification pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyConfig {
    /// Treatment of converted fields on elided postings.
    #[serde(default)]
    pub converted_inference: ConvertedInference,
    /// Policy for transactions with several elided postings.
    #[serde(default)]
    pub elision_policy: ElisionPolicy,
    /// Shard the batch by transaction and verify shards in parallel.
    #[serde(default)]
    pub parallel: bool,
    /// Minimum number of postings before the parallel path is taken.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
    /// Separator between account path segments.
    #[serde(default = "default_account_separator")]
    pub account_separator: String,
}

fn default_parallel_threshold() -> usize {
    10_000
}

fn default_account_separator() -> String {
    ":".to_string()
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            converted_inference: ConvertedInference::default(),
            elision_policy: ElisionPolicy::default(),
            parallel: false,
            parallel_threshold: default_parallel_threshold(),
            account_separator: default_account_separator(),
        }
    }
}

impl VerifyConfig {
    /// Returns true if a batch of `postings` should take the parallel path.
    #[must_use]
    pub fn use_parallel(&self, postings: usize) -> bool {
        self.parallel && postings >= self.parallel_threshold
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit structured JSON instead of human-readable lines.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "tally=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("TALLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
