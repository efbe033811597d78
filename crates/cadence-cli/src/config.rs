use cadence_core::timezone::DEFAULT_TIMEZONE;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Business timezone used to resolve "today" (IANA format). Every
    /// deployment-facing date key is derived against this calendar.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Path to the SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default)]
    pub backfill: BackfillSettings,
}

/// Tuning for backfill runs
#[derive(Deserialize, Debug)]
pub struct BackfillSettings {
    /// Cap on instances created per series in one run
    #[serde(default = "default_max_instances_per_series")]
    pub max_instances_per_series: usize,
}

impl Default for BackfillSettings {
    fn default() -> Self {
        Self {
            max_instances_per_series: default_max_instances_per_series(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            database_path: default_database_path(),
            backfill: BackfillSettings::default(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("cadence.toml"))
            .merge(Env::prefixed("CADENCE_"))
            .extract()
    }
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_database_path() -> String {
    "cadence.db".to_string()
}

fn default_max_instances_per_series() -> usize {
    366
}
