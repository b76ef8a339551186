//! The database validation engine.
//!
//! A [`Validator`] borrows the three tables of one database and checks them in
//! four ordered passes:
//!
//! 1. suppliers: every supplier record is well-formed
//! 2. components: titles, supply specs, datasheets, obsolescence and replacements
//! 3. configuration: section ordering, section contents, exclusions and
//!    component references; this pass also builds the usage set
//! 4. unused components: anything the configuration never reaches
//!
//! The first fatal inconsistency aborts the run with a [`ValidationError`].
//! Warnings are reported as they are found and collected in the
//! [`ValidationReport`].

mod components;
mod configuration;
mod suppliers;
mod unused;

use std::collections::BTreeSet;
use std::fmt;

use crate::config::Settings;
use crate::db::Database;
use crate::error::{Entity, ErrorKind, ValidationError, ValidationResult};
use crate::reference::ComponentRef;
use crate::report::Reporter;
use crate::value::{Record, Value};

/// Category of a non-fatal finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Obsolete component that names no replacement
    ObsoleteWithoutReplacement,
    /// Obsolete component referenced from the configuration
    ObsoleteReferenced,
    /// Component without supply information for a known supplier
    SupplyGap,
    /// Section without a `components` list
    MissingSectionComponents,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::ObsoleteWithoutReplacement => write!(f, "obsolete-without-replacement"),
            WarningKind::ObsoleteReferenced => write!(f, "obsolete-referenced"),
            WarningKind::SupplyGap => write!(f, "supply-gap"),
            WarningKind::MissingSectionComponents => write!(f, "missing-section-components"),
        }
    }
}

/// A non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

/// Outcome of a successful validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Warnings in the order they were found
    pub warnings: Vec<Warning>,
    /// Component ids reached from the configuration
    pub used: BTreeSet<String>,
    /// Component ids never reached, in table order
    pub unused: Vec<String>,
}

impl ValidationReport {
    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }
}

/// Validates one database. Built per run and consumed by [`Validator::run`].
pub struct Validator<'a> {
    suppliers: &'a Record,
    components: &'a Record,
    configuration: &'a Record,
    settings: Settings,
    reporter: &'a dyn Reporter,
    used: BTreeSet<String>,
    warnings: Vec<Warning>,
}

impl<'a> Validator<'a> {
    pub fn new(db: &'a Database, reporter: &'a dyn Reporter) -> Self {
        Self {
            suppliers: &db.suppliers,
            components: &db.components,
            configuration: &db.configuration,
            settings: Settings::default(),
            reporter,
            used: BTreeSet::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Run all four passes. A fatal error is reported once, then returned.
    pub fn run(mut self) -> ValidationResult<ValidationReport> {
        if let Err(err) = self.check_all() {
            self.reporter.error(&err.to_string());
            return Err(err);
        }

        let unused = self.check_unused_components();
        self.reporter.log("Validation complete.");

        Ok(ValidationReport {
            warnings: self.warnings,
            used: self.used,
            unused,
        })
    }

    fn check_all(&mut self) -> ValidationResult<()> {
        self.check_suppliers()?;
        self.check_components()?;
        self.check_configuration()
    }

    fn warn(&mut self, kind: WarningKind, message: String) {
        self.reporter.warn(&message);
        self.warnings.push(Warning { kind, message });
    }

    /// Resolve `replacement` of component `id`: it must name another known
    /// component. Replacement chains are not followed.
    fn check_replacement(&self, id: &str, replacement: &Value) -> ValidationResult<()> {
        let entity = Entity::Component(id.to_string());
        let Some(target) = replacement.as_str() else {
            return Err(ValidationError::new(
                ErrorKind::InvalidType,
                entity,
                format!(
                    "invalid type of replacement; expected string, got {}",
                    replacement.kind()
                ),
            ));
        };
        if target == id {
            return Err(ValidationError::new(
                ErrorKind::SelfReplacement,
                entity,
                "a component cannot be its own replacement",
            ));
        }
        if !self.components.contains_key(target) {
            return Err(ValidationError::new(
                ErrorKind::UnresolvedReference,
                entity,
                format!("missing replacement component id: {:?}", target),
            ));
        }
        Ok(())
    }

    /// Resolve a list of component references, recording every reached id in
    /// the usage set. `context` names the list in diagnostics.
    fn resolve_references(
        &mut self,
        owner: &Entity,
        context: &str,
        references: &'a [Value],
    ) -> ValidationResult<()> {
        let components: &'a Record = self.components;
        for value in references {
            let reference = ComponentRef::parse(value, owner)?;
            let Some(component) = components.get(reference.id) else {
                return Err(ValidationError::new(
                    ErrorKind::UnresolvedReference,
                    owner.clone(),
                    format!("undefined component: {}", reference.id),
                ));
            };
            self.used.insert(reference.id.to_string());

            // Shape was checked in the component pass
            let component = component.as_map();
            let obsolete = component
                .and_then(|c| c.get("obsolete"))
                .is_some_and(Value::is_truthy);
            if !obsolete {
                continue;
            }

            match component.and_then(|c| c.get("replacement")) {
                Some(replacement) => {
                    let replacement = replacement.as_str().unwrap_or_default().to_string();
                    self.warn(
                        WarningKind::ObsoleteReferenced,
                        format!(
                            "Obsolete component {} used in the configuration section of {}; replacement: {}",
                            reference.id, context, replacement
                        ),
                    );
                    self.used.insert(replacement);
                }
                None => {
                    return Err(ValidationError::new(
                        ErrorKind::ObsoleteWithoutReplacement,
                        owner.clone(),
                        format!(
                            "obsolete component without replacement defined: {}",
                            reference.id
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Entries of `ordered` that `defined` lacks, in `ordered` order.
pub(crate) fn missing_keys<'k>(ordered: &[&'k str], defined: &Record) -> Vec<&'k str> {
    ordered
        .iter()
        .copied()
        .filter(|key| !defined.contains_key(key))
        .collect()
}

/// Keys of `defined` absent from `ordered`, in `defined` order.
pub(crate) fn extra_keys<'k>(ordered: &[&str], defined: &'k Record) -> Vec<&'k str> {
    defined
        .keys()
        .filter(|key| !ordered.contains(key))
        .collect()
}
