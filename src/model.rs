//! Read-only entity views over database records.
//!
//! Each view borrows a [`Record`] from the caller-owned tables and knows which
//! [`Entity`] it stands for, so every failed lookup produces a fully
//! attributed [`ValidationError`].

use crate::error::{Entity, ErrorKind, ValidationError, ValidationResult};
use crate::value::{Kind, Record, Value};

/// A record paired with the entity it describes.
#[derive(Debug, Clone)]
pub struct View<'a> {
    entity: Entity,
    record: &'a Record,
}

impl<'a> View<'a> {
    /// View `value` as a record of `entity`; anything but a mapping is an error.
    pub fn new(entity: Entity, value: &'a Value) -> ValidationResult<Self> {
        match value.as_map() {
            Some(record) => Ok(Self { entity, record }),
            None => Err(ValidationError::new(
                ErrorKind::InvalidType,
                entity,
                format!("expected a mapping, got {}", value.kind()),
            )),
        }
    }

    pub fn from_record(entity: Entity, record: &'a Record) -> Self {
        Self { entity, record }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.record.get(field)
    }

    pub fn has(&self, field: &str) -> bool {
        self.record.contains_key(field)
    }

    pub fn require(&self, field: &str) -> ValidationResult<&'a Value> {
        self.get(field)
            .ok_or_else(|| ValidationError::missing(self.entity.clone(), field))
    }

    /// Require every field in `fields`, failing on the first absent one.
    pub fn require_all(&self, fields: &[&str]) -> ValidationResult<()> {
        for field in fields {
            self.require(field)?;
        }
        Ok(())
    }

    /// Check the type of `field` when it is present.
    pub fn check_kind(&self, field: &str, expected: &[Kind]) -> ValidationResult<()> {
        match self.get(field) {
            Some(value) => check_kind(&self.entity, field, value, expected),
            None => Ok(()),
        }
    }

    /// Required integer field. Callers type-check first; the fallback keeps the
    /// error attributed if they did not.
    pub fn int(&self, field: &str) -> ValidationResult<i64> {
        let value = self.require(field)?;
        check_kind(&self.entity, field, value, &[Kind::Integer])?;
        Ok(value.as_int().unwrap_or_default())
    }

    /// Required list field.
    pub fn list(&self, field: &str) -> ValidationResult<&'a [Value]> {
        let value = self.require(field)?;
        check_kind(&self.entity, field, value, &[Kind::List])?;
        Ok(value.as_list().unwrap_or_default())
    }

    /// Required mapping field.
    pub fn map(&self, field: &str) -> ValidationResult<&'a Record> {
        let value = self.require(field)?;
        check_kind(&self.entity, field, value, &[Kind::Mapping])?;
        value
            .as_map()
            .ok_or_else(|| ValidationError::missing(self.entity.clone(), field))
    }

    pub fn error(&self, kind: ErrorKind, message: impl Into<String>) -> ValidationError {
        ValidationError::new(kind, self.entity.clone(), message)
    }
}

/// Fail with [`ErrorKind::InvalidType`] unless `value` has one of `expected`.
pub fn check_kind(
    entity: &Entity,
    field: &str,
    value: &Value,
    expected: &[Kind],
) -> ValidationResult<()> {
    if expected.contains(&value.kind()) {
        return Ok(());
    }

    let expected = expected
        .iter()
        .map(Kind::to_string)
        .collect::<Vec<_>>()
        .join(" or ");
    Err(ValidationError::new(
        ErrorKind::InvalidType,
        entity.clone(),
        format!(
            "invalid type of {}; expected {}, got {}",
            field,
            expected,
            value.kind()
        ),
    ))
}

/// A supplier entry.
#[derive(Debug, Clone)]
pub struct Supplier<'a> {
    pub name: &'a str,
    pub view: View<'a>,
}

impl<'a> Supplier<'a> {
    pub const REQUIRED: [&'static str; 3] = ["title", "homepage", "currency"];

    pub fn new(name: &'a str, value: &'a Value) -> ValidationResult<Self> {
        Ok(Self {
            name,
            view: View::new(Entity::Supplier(name.to_string()), value)?,
        })
    }

    pub fn currency(&self) -> Option<&'a Value> {
        self.view.get("currency")
    }
}

/// A component entry, keyed by manufacturer id.
#[derive(Debug, Clone)]
pub struct Component<'a> {
    pub id: &'a str,
    pub view: View<'a>,
}

impl<'a> Component<'a> {
    pub fn new(id: &'a str, value: &'a Value) -> ValidationResult<Self> {
        Ok(Self {
            id,
            view: View::new(Entity::Component(id.to_string()), value)?,
        })
    }

    pub fn is_obsolete(&self) -> bool {
        self.view.get("obsolete").is_some_and(Value::is_truthy)
    }

    pub fn replacement(&self) -> Option<&'a Value> {
        self.view.get("replacement")
    }

    pub fn supplies(&self) -> Option<&'a Value> {
        self.view.get("suppliers")
    }

    pub fn datasheet(&self) -> Option<&'a Value> {
        self.view.get("datasheet")
    }
}

/// A configurable section of the product configuration.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub name: &'a str,
    pub view: View<'a>,
}

impl<'a> Section<'a> {
    pub const REQUIRED: [&'static str; 5] = ["title", "description", "value", "min", "max"];

    /// Expected types of the recognized section fields.
    pub const FIELD_KINDS: [(&'static str, &'static [Kind]); 9] = [
        ("title", &[Kind::String]),
        ("description", &[Kind::String]),
        ("value", &[Kind::Integer]),
        ("min", &[Kind::Integer]),
        ("max", &[Kind::Integer]),
        ("presets", &[Kind::List]),
        ("checked", &[Kind::Boolean]),
        ("excludes", &[Kind::List, Kind::String]),
        ("components", &[Kind::List]),
    ];

    pub fn new(name: &'a str, value: &'a Value) -> ValidationResult<Self> {
        Ok(Self {
            name,
            view: View::new(Entity::Section(name.to_string()), value)?,
        })
    }

    /// `excludes` normalized to a list: a bare string names one section.
    pub fn excludes(&self) -> Vec<&'a Value> {
        match self.view.get("excludes") {
            Some(Value::List(items)) => items.iter().collect(),
            Some(single) => vec![single],
            None => Vec::new(),
        }
    }
}

/// The product configuration document.
#[derive(Debug, Clone)]
pub struct Configuration<'a> {
    pub view: View<'a>,
}

impl<'a> Configuration<'a> {
    pub const REQUIRED: [&'static str; 5] =
        ["title", "description", "components", "sections", "section_order"];

    pub fn new(record: &'a Record) -> Self {
        Self {
            view: View::from_record(Entity::Configuration, record),
        }
    }
}
