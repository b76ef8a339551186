//! Database loading.
//!
//! A database is a directory holding three YAML documents:
//! - `suppliers.yaml`: supplier name → supplier record
//! - `components.yaml`: manufacturer id → component record
//! - `configurations.yaml`: the product configuration
//!
//! Loading only parses and type-tags; all consistency checks live in
//! [`crate::validate`].

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::value::{Record, Value};

pub const SUPPLIERS_FILE: &str = "suppliers.yaml";
pub const COMPONENTS_FILE: &str = "components.yaml";
pub const CONFIGURATIONS_FILE: &str = "configurations.yaml";

/// The three tables of one parts database.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Database {
    pub suppliers: Record,
    pub components: Record,
    pub configuration: Record,
}

impl Database {
    pub fn new(suppliers: Record, components: Record, configuration: Record) -> Self {
        Self {
            suppliers,
            components,
            configuration,
        }
    }

    /// Load a database directory.
    ///
    /// Missing supplier or component files yield empty tables; the
    /// configuration file is required.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            bail!("Nonexistent or invalid project path: {}", dir.display());
        }

        let suppliers = load_table(&dir.join(SUPPLIERS_FILE), false)?;
        let components = load_table(&dir.join(COMPONENTS_FILE), false)?;
        let configuration = load_table(&dir.join(CONFIGURATIONS_FILE), true)?;

        Ok(Self::new(suppliers, components, configuration))
    }

    /// Parse the three documents from strings.
    pub fn parse(suppliers: &str, components: &str, configurations: &str) -> Result<Self> {
        Ok(Self::new(
            parse_table(suppliers).context("Failed to parse suppliers")?,
            parse_table(components).context("Failed to parse components")?,
            parse_table(configurations).context("Failed to parse configurations")?,
        ))
    }
}

fn load_table(path: &Path, required: bool) -> Result<Record> {
    if !path.exists() {
        if required {
            bail!("Missing database file: {}", path.display());
        }
        return Ok(Record::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_table(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse one YAML document that must be a mapping at the top level.
/// An empty document is an empty table.
pub fn parse_table(content: &str) -> Result<Record> {
    if content.trim().is_empty() {
        return Ok(Record::new());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content).context("Invalid YAML")?;
    match Value::from_yaml(yaml)? {
        Value::Map(record) => Ok(record),
        Value::Null => Ok(Record::new()),
        other => bail!("Expected a mapping at the top level, got {}", other.kind()),
    }
}
