//! Fatal validation errors.

use std::fmt;
use thiserror::Error;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The entity a validation error is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Supplier(String),
    Component(String),
    Configuration,
    Section(String),
    Preset { section: String, index: usize },
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Supplier(name) => write!(f, "supplier {}", name),
            Entity::Component(id) => write!(f, "component {}", id),
            Entity::Configuration => write!(f, "configuration"),
            Entity::Section(name) => write!(f, "section {}", name),
            Entity::Preset { section, index } => {
                write!(f, "preset #{} of section {}", index + 1, section)
            }
        }
    }
}

/// Category of a fatal inconsistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is absent
    MissingField,
    /// A field holds a value of the wrong type
    InvalidType,
    /// Supplier currency outside the allowed set
    InvalidCurrency,
    /// Datasheet is not an http(s) URL
    InvalidUrl,
    /// A replacement or component reference names no known component
    UnresolvedReference,
    /// A component names itself as its replacement
    SelfReplacement,
    /// A component reference is neither an id nor a `[quantity, id]` pair
    MalformedReference,
    /// An obsolete component without replacement is referenced
    ObsoleteWithoutReplacement,
    /// `section_order` names a section that `sections` does not define
    UndefinedSection,
    /// `sections` defines a section missing from `section_order`
    UnorderedSection,
    /// A section lists itself in `excludes`
    SelfExclusion,
    /// A section excludes a section that does not exist
    UndefinedExclusion,
    /// Section `min` is negative
    NegativeMinimum,
    /// Section `min` is greater than `max`
    MinAboveMax,
    /// Section `value` is greater than `max`
    ValueAboveMax,
    /// Section `value` is less than `min`
    ValueBelowMin,
    /// A preset value lies outside the owning section's bounds
    PresetOutOfRange,
}

impl ErrorKind {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ErrorKind::MissingField => 10,
            ErrorKind::InvalidType => 11,
            ErrorKind::InvalidCurrency => 20,
            ErrorKind::InvalidUrl => 21,
            ErrorKind::UnresolvedReference => 30,
            ErrorKind::SelfReplacement => 31,
            ErrorKind::MalformedReference => 32,
            ErrorKind::ObsoleteWithoutReplacement => 33,
            ErrorKind::UndefinedSection => 40,
            ErrorKind::UnorderedSection => 41,
            ErrorKind::SelfExclusion => 42,
            ErrorKind::UndefinedExclusion => 43,
            ErrorKind::NegativeMinimum => 50,
            ErrorKind::MinAboveMax => 51,
            ErrorKind::ValueAboveMax => 52,
            ErrorKind::ValueBelowMin => 53,
            ErrorKind::PresetOutOfRange => 54,
        }
    }
}

/// A fatal inconsistency. The first one found aborts the validation run.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{entity}: {message}")]
pub struct ValidationError {
    kind: ErrorKind,
    entity: Entity,
    message: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, entity: Entity, message: impl Into<String>) -> Self {
        Self {
            kind,
            entity,
            message: message.into(),
        }
    }

    pub fn missing(entity: Entity, field: &str) -> Self {
        Self::new(ErrorKind::MissingField, entity, format!("missing {}", field))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
