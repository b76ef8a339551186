//! # bomcheck - parts database validation
//!
//! bomcheck checks the internal consistency of a parts database before it is
//! published: suppliers, components, and the configurable product built from
//! them.
//!
//! ## Overview
//!
//! A database is a directory of YAML documents (see [`db`]). The
//! [`validate::Validator`] borrows its three tables and runs four passes:
//! suppliers, components, the configuration graph, and finally a report of
//! components that the configuration never references. The first fatal
//! inconsistency aborts the run; warnings are reported and the run continues.
//!
//! ## Modules
//!
//! - [`value`] - Type-tagged record values and ordered records
//! - [`db`] - Loading a database directory
//! - [`model`] - Read-only entity views (supplier, component, section, ...)
//! - [`reference`] - Component reference normalization
//! - [`validate`] - The validation passes
//! - [`error`] - Structured fatal errors
//! - [`report`] - Reporter trait and terminal output
//! - [`config`] - Validator settings
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use bomcheck::db::Database;
//! use bomcheck::report::{Output, OutputMode};
//! use bomcheck::validate::Validator;
//!
//! let db = Database::load(Path::new("dbs/synth")).expect("Failed to load database");
//! let output = Output::new(OutputMode::Human);
//!
//! match Validator::new(&db, &output).run() {
//!     Ok(report) => println!("{} warnings", report.warnings.len()),
//!     Err(err) => eprintln!("invalid database: {}", err),
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod reference;
pub mod report;
pub mod validate;
pub mod value;

/// Default directory holding one subdirectory per database.
pub const DEFAULT_DBS_DIR: &str = "dbs";
