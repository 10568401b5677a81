//! Configuration for a generator run.
//!
//! Values come from command-line flags, then an optional TOML file, then the
//! built-in defaults, in that order of precedence.

use clap::Parser;
use serde_derive::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_PATH: &str = "model/";
pub const DEFAULT_NAMESPACE: &str = "App.model";
pub const DEFAULT_BASE_MODEL: &str = "Ext.data.Model";
pub const DEFAULT_EXTENSION: &str = "js";

#[derive(Parser, Debug, Default)]
#[command(name = "model-gen")]
#[command(version, about = "Generate Ext JS data models from a MySQL schema", long_about = None)]
pub struct Cli {
    /// Output directory for generated models
    #[arg(short = 'f', long)]
    pub path: Option<PathBuf>,

    /// Namespace of the generated classes
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Class the base models extend
    #[arg(short = 'b', long)]
    pub base_model: Option<String>,

    /// Dump base models ("true" to enable)
    #[arg(long = "ibm", value_name = "BOOL")]
    pub dump_base_model: Option<String>,

    /// Dump extendable models ("true" to enable)
    #[arg(long = "im", value_name = "BOOL")]
    pub dump_model: Option<String>,

    /// Extension of generated files
    #[arg(short = 'e', long = "ext")]
    pub extension: Option<String>,

    #[arg(short = 'H', long)]
    pub host: Option<String>,

    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    #[arg(short = 'u', long)]
    pub user: Option<String>,

    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Database to introspect
    #[arg(short = 'd', long)]
    pub database: Option<String>,

    /// Label used for the schema in logs (defaults to the database name)
    #[arg(long)]
    pub name: Option<String>,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub database: DatabaseSection,
    pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub path: Option<PathBuf>,
    pub namespace: Option<String>,
    pub base_model: Option<String>,
    pub dump_base_model: Option<bool>,
    pub dump_model: Option<bool>,
    pub extension: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 3306,
            user: "user".into(),
            password: "password".into(),
            database: "database".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpOptions {
    pub path: PathBuf,
    pub namespace: String,
    pub base_model: String,
    pub dump_base_model: bool,
    pub dump_model: bool,
    pub extension: String,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            namespace: DEFAULT_NAMESPACE.into(),
            base_model: DEFAULT_BASE_MODEL.into(),
            dump_base_model: true,
            dump_model: false,
            extension: DEFAULT_EXTENSION.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub schema_name: String,
    pub connection: ConnectionConfig,
    pub dump: DumpOptions,
}

/// Flags are strings; only the literal `true` switches a tier on.
pub fn flag_enabled(value: &str) -> bool {
    value == "true"
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::File {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::File {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        Ok(Self::merge(cli, file))
    }

    pub fn merge(cli: Cli, file: ConfigFile) -> Self {
        let connection_defaults = ConnectionConfig::default();
        let dump_defaults = DumpOptions::default();
        let database = file.database;
        let output = file.output;

        let connection = ConnectionConfig {
            host: cli.host.or(database.host).unwrap_or(connection_defaults.host),
            port: cli.port.or(database.port).unwrap_or(connection_defaults.port),
            user: cli.user.or(database.user).unwrap_or(connection_defaults.user),
            password: cli
                .password
                .or(database.password)
                .unwrap_or(connection_defaults.password),
            database: cli
                .database
                .or(database.name)
                .unwrap_or(connection_defaults.database),
        };

        let dump = DumpOptions {
            path: cli.path.or(output.path).unwrap_or(dump_defaults.path),
            namespace: cli
                .namespace
                .or(output.namespace)
                .unwrap_or(dump_defaults.namespace),
            base_model: cli
                .base_model
                .or(output.base_model)
                .unwrap_or(dump_defaults.base_model),
            dump_base_model: cli
                .dump_base_model
                .map(|value| flag_enabled(&value))
                .or(output.dump_base_model)
                .unwrap_or(dump_defaults.dump_base_model),
            dump_model: cli
                .dump_model
                .map(|value| flag_enabled(&value))
                .or(output.dump_model)
                .unwrap_or(dump_defaults.dump_model),
            extension: cli
                .extension
                .or(output.extension)
                .unwrap_or(dump_defaults.extension),
        };

        let schema_name = cli.name.unwrap_or_else(|| connection.database.clone());

        Self {
            schema_name,
            connection,
            dump,
        }
    }
}
