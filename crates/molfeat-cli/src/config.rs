use crate::cli::{BuildArgs, FeatureKind, TablesArgs};
use crate::error::{CliError, Result};
use anyhow::Context;
use molfeat::workflows::config::FeatureConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default locations of the reference tables, relative to the working
/// directory.
pub const DEFAULT_ELEMENTS_TABLE: &str = "data/elements.csv";
pub const DEFAULT_STATES_TABLE: &str = "data/valence-states.csv";

/// The optional TOML configuration file. Every section may be omitted; CLI
/// arguments override file values, which override the built-in defaults.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub features: Option<FeatureConfig>,
    pub tables: TablesSection,
    pub parameters: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TablesSection {
    pub elements: Option<PathBuf>,
    pub states: Option<PathBuf>,
}

/// Fully resolved settings for one `build` invocation.
#[derive(Debug, PartialEq)]
pub struct ResolvedConfig {
    pub features: FeatureConfig,
    pub elements: PathBuf,
    pub states: PathBuf,
    pub parameters: Option<PathBuf>,
}

pub fn load_file(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file '{}'", path.display()))?;
    toml::from_str(&content).map_err(|e| {
        CliError::Config(format!("in config file '{}': {}", path.display(), e))
    })
}

fn load_optional(path: &Option<PathBuf>) -> Result<FileConfig> {
    match path {
        Some(path) => load_file(path),
        None => Ok(FileConfig::default()),
    }
}

fn features_from_kinds(kinds: &[FeatureKind], type_sensitive: bool) -> FeatureConfig {
    FeatureConfig {
        typed_atoms: kinds.contains(&FeatureKind::Typed),
        adjacency: kinds.contains(&FeatureKind::Adjacency),
        orbital: kinds.contains(&FeatureKind::Orbital),
        type_sensitive,
    }
}

fn resolve_table(
    cli_override: &Option<PathBuf>,
    file_value: Option<PathBuf>,
    default: &str,
) -> PathBuf {
    cli_override
        .clone()
        .or(file_value)
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Layers defaults, the optional config file, and CLI overrides for `build`.
pub fn resolve_build(args: &BuildArgs) -> Result<ResolvedConfig> {
    let file = load_optional(&args.config)?;

    let mut features = if args.features.is_empty() {
        file.features.unwrap_or_default()
    } else {
        features_from_kinds(&args.features, true)
    };
    if args.element_only {
        features.type_sensitive = false;
    }
    if !features.any_builder() {
        return Err(CliError::Config(
            "no feature representation selected".into(),
        ));
    }

    Ok(ResolvedConfig {
        features,
        elements: resolve_table(&args.elements, file.tables.elements, DEFAULT_ELEMENTS_TABLE),
        states: resolve_table(&args.states, file.tables.states, DEFAULT_STATES_TABLE),
        parameters: args.parameters.clone().or(file.parameters),
    })
}

/// Layers defaults, the optional config file, and CLI overrides for `tables`.
pub fn resolve_tables(args: &TablesArgs) -> Result<(PathBuf, PathBuf)> {
    let file = load_optional(&args.config)?;
    Ok((
        resolve_table(&args.elements, file.tables.elements, DEFAULT_ELEMENTS_TABLE),
        resolve_table(&args.states, file.tables.states, DEFAULT_STATES_TABLE),
    ))
}
