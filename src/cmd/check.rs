//! Check command: validate one database or every database in a directory.
//!
//! Databases are validated one after another with no shared state. A fatal
//! inconsistency ends that database's run; whether the remaining databases
//! are still checked is up to `keep_going`.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use bomcheck::config::Settings;
use bomcheck::db::Database;
use bomcheck::error::ValidationError;
use bomcheck::report::{Output, Reporter};
use bomcheck::validate::{ValidationReport, Validator};

/// Outcome of a multi-database run.
#[derive(Debug, Default)]
pub struct CheckSummary {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

impl CheckSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Load and validate the database in `db_dir`.
pub fn run_one(db_dir: &Path, settings: &Settings, output: &Output) -> Result<ValidationReport> {
    let db = Database::load(db_dir)?;
    let report = Validator::new(&db, output)
        .with_settings(settings.clone())
        .run()?;
    Ok(report)
}

/// Validate a single named database under `dbs_dir`.
pub fn cmd_check_one(
    dbs_dir: &Path,
    name: &str,
    settings: &Settings,
    output: &Output,
) -> CheckSummary {
    let mut summary = CheckSummary::default();
    check_into(&mut summary, &dbs_dir.join(name), name, settings, output);
    summary
}

/// Validate every database directory under `dbs_dir`, in name order.
pub fn cmd_check_all(
    dbs_dir: &Path,
    settings: &Settings,
    output: &Output,
    keep_going: bool,
) -> Result<CheckSummary> {
    let mut summary = CheckSummary::default();

    for (name, path) in list_databases(dbs_dir)? {
        output.step(&format!("Validating project database {}..", name));
        if !check_into(&mut summary, &path, &name, settings, output) && !keep_going {
            break;
        }
    }

    Ok(summary)
}

/// Run one database and record the outcome. Returns whether it passed.
fn check_into(
    summary: &mut CheckSummary,
    path: &Path,
    name: &str,
    settings: &Settings,
    output: &Output,
) -> bool {
    match run_one(path, settings, output) {
        Ok(_) => {
            output.success(&format!("Validation of {} completed without errors.", name));
            summary.passed.push(name.to_string());
            true
        }
        Err(err) => {
            // Validation errors were already shown by the validator
            if err.downcast_ref::<ValidationError>().is_none() {
                output.error(&format!("{:#}", err));
            }
            summary.failed.push(name.to_string());
            false
        }
    }
}

/// Non-hidden subdirectories of `dbs_dir`, sorted by name.
pub fn list_databases(dbs_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !dbs_dir.is_dir() {
        bail!("Nonexistent or invalid project path: {}", dbs_dir.display());
    }

    let entries = fs::read_dir(dbs_dir)
        .with_context(|| format!("Failed to read {}", dbs_dir.display()))?;

    let mut databases = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            databases.push((name, path));
        }
    }
    databases.sort();

    Ok(databases)
}
