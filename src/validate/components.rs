//! Component table checks.
//!
//! Only `title` is mandatory for every component. Obsolete components must
//! either name a valid replacement or none at all, and need nothing else.
//! Live components must carry valid supply specs, and a datasheet URL or a
//! description.

use super::{Validator, WarningKind};
use crate::error::{Entity, ErrorKind, ValidationResult};
use crate::model::{check_kind, Component, View};
use crate::value::{Kind, Record, Value};

const MIN_URL_LENGTH: usize = 11;

/// `http://` or `https://` followed by at least a short host name.
/// Length is counted in characters.
pub fn is_valid_url(url: &str) -> bool {
    (url.starts_with("http://") || url.starts_with("https://"))
        && url.chars().count() >= MIN_URL_LENGTH
}

impl<'a> Validator<'a> {
    pub(super) fn check_components(&mut self) -> ValidationResult<()> {
        let components: &'a Record = self.components;
        for (id, value) in components.iter() {
            self.reporter.log(&format!("Checking component: {}", id));
            let component = Component::new(id, value)?;
            component.view.require("title")?;

            if component.is_obsolete() {
                match component.replacement() {
                    Some(replacement) => {
                        self.check_replacement(id, replacement)?;
                        self.reporter
                            .info(&format!("..obsolete, replacement: {}", replacement));
                    }
                    None => self.warn(
                        WarningKind::ObsoleteWithoutReplacement,
                        format!("Obsolete component {} has no replacement", id),
                    ),
                }
                continue;
            }

            self.check_supplies(&component)?;
            self.check_datasheet(&component)?;

            if let Some(replacement) = component.replacement() {
                self.check_replacement(id, replacement)?;
            }
        }
        Ok(())
    }

    /// Every known supplier either has a valid supply spec or is a gap.
    fn check_supplies(&mut self, component: &Component<'a>) -> ValidationResult<()> {
        let empty = Record::new();
        let supplies = match component.supplies() {
            Some(value) => value.as_map().ok_or_else(|| {
                component.view.error(
                    ErrorKind::InvalidType,
                    format!(
                        "invalid component supply specification; expected mapping, got {}",
                        value.kind()
                    ),
                )
            })?,
            None => &empty,
        };

        let suppliers: &'a Record = self.suppliers;
        for supplier in suppliers.keys() {
            match supplies.get(supplier) {
                Some(spec) => validate_supply(component.id, supplier, spec)?,
                None => self.warn(
                    WarningKind::SupplyGap,
                    format!(
                        "Component {} has no supply information for supplier: {}",
                        component.id, supplier
                    ),
                ),
            }
        }
        Ok(())
    }

    fn check_datasheet(&self, component: &Component<'a>) -> ValidationResult<()> {
        match component.datasheet() {
            Some(datasheet) => {
                let Some(url) = datasheet.as_str() else {
                    return Err(component.view.error(
                        ErrorKind::InvalidType,
                        format!(
                            "invalid type of datasheet URL (datasheet); expected string, got {}",
                            datasheet.kind()
                        ),
                    ));
                };
                if !is_valid_url(url) {
                    return Err(component.view.error(
                        ErrorKind::InvalidUrl,
                        format!("invalid format of datasheet URL (datasheet): {:?}", url),
                    ));
                }
                Ok(())
            }
            None if component.view.has("description") => Ok(()),
            None => Err(component.view.error(
                ErrorKind::MissingField,
                "missing datasheet URL (datasheet) or description",
            )),
        }
    }
}

/// A supply spec needs a string part number and a numeric price.
fn validate_supply(component: &str, supplier: &str, spec: &Value) -> ValidationResult<()> {
    let entity = Entity::Component(component.to_string());
    let field = |name: &str| format!("suppliers.{}.{}", supplier, name);

    let spec = View::new(entity.clone(), spec)?;
    let require = |name: &str| {
        spec.get(name)
            .ok_or_else(|| spec.error(ErrorKind::MissingField, format!("missing {}", field(name))))
    };

    let part = require("part")?;
    check_kind(&entity, &field("part"), part, &[Kind::String])?;

    let price = require("price")?;
    check_kind(&entity, &field("price"), price, &[Kind::Integer, Kind::Float])
}
