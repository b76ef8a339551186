use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const SUPPLIERS: &str = r#"
acme:
  title: ACME Electronics
  homepage: https://acme.example.com
  currency: USD
"#;

pub const COMPONENTS: &str = r#"
C1:
  title: Ceramic capacitor 100nF
  description: Decoupling capacitor
"#;

pub const CONFIGURATIONS: &str = r#"
title: Starter kit
description: The smallest possible kit
components:
  - C1
sections: {}
section_order: []
"#;

/// TestHarness provides an isolated dbs directory with one subdirectory per
/// database, and runs the bomcheck binary against it.
pub struct TestHarness {
    pub dir: TempDir,
    pub bomcheck_binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: TempDir::new().expect("Failed to create temp dir"),
            bomcheck_binary: PathBuf::from(env!("CARGO_BIN_EXE_bomcheck")),
        }
    }

    pub fn dbs_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Write a database with the given documents.
    pub fn add_database(
        &self,
        name: &str,
        suppliers: &str,
        components: &str,
        configurations: &str,
    ) -> PathBuf {
        let db_dir = self.dir.path().join(name);
        fs::create_dir_all(&db_dir).expect("Failed to create database dir");
        fs::write(db_dir.join("suppliers.yaml"), suppliers).expect("Failed to write suppliers");
        fs::write(db_dir.join("components.yaml"), components).expect("Failed to write components");
        fs::write(db_dir.join("configurations.yaml"), configurations)
            .expect("Failed to write configurations");
        db_dir
    }

    /// Write the minimal passing database.
    pub fn add_valid_database(&self, name: &str) -> PathBuf {
        self.add_database(name, SUPPLIERS, COMPONENTS, CONFIGURATIONS)
    }

    /// Run bomcheck with `--dbs` pointing at this harness.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.bomcheck_binary)
            .arg("--dbs")
            .arg(self.dbs_dir())
            .args(args)
            .env_remove("BOMCHECK_QUIET")
            .output()
            .expect("Failed to run bomcheck")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
