//! Configuration graph checks: section ordering, section contents,
//! exclusions, presets and component references.

use super::{extra_keys, missing_keys, Validator, WarningKind};
use crate::error::{Entity, ErrorKind, ValidationError, ValidationResult};
use crate::model::{check_kind, Configuration, Section, View};
use crate::value::{Kind, Record, Value};

/// Context label of the configuration's default component list.
pub const DEFAULT_CONTEXT: &str = "Default";

impl<'a> Validator<'a> {
    pub(super) fn check_configuration(&mut self) -> ValidationResult<()> {
        self.reporter.log("Checking configuration validity");
        let config = Configuration::new(self.configuration);
        let view = &config.view;
        view.require_all(&Configuration::REQUIRED)?;

        let section_order = section_names(view)?;
        let sections = view.map("sections")?;
        let defaults = view.list("components")?;

        let undefined = missing_keys(&section_order, sections);
        if !undefined.is_empty() {
            return Err(view.error(
                ErrorKind::UndefinedSection,
                format!(
                    "the section_order list has these undefined sections: {}",
                    undefined.join(", ")
                ),
            ));
        }
        let unordered = extra_keys(&section_order, sections);
        if !unordered.is_empty() {
            return Err(view.error(
                ErrorKind::UnorderedSection,
                format!(
                    "the sections have these unordered sections: {}",
                    unordered.join(", ")
                ),
            ));
        }

        self.resolve_references(&Entity::Configuration, DEFAULT_CONTEXT, defaults)?;

        for name in section_order {
            if let Some(value) = sections.get(name) {
                self.check_section(name, value, sections)?;
            }
        }
        Ok(())
    }

    fn check_section(
        &mut self,
        name: &'a str,
        value: &'a Value,
        sections: &Record,
    ) -> ValidationResult<()> {
        self.reporter
            .log(&format!("Checking configurable section {}", name));
        let section = Section::new(name, value)?;
        let view = &section.view;

        view.require_all(&Section::REQUIRED)?;
        if !view.has("components") {
            self.warn(
                WarningKind::MissingSectionComponents,
                format!("The section {} is missing the components definition", name),
            );
        }
        for (field, kinds) in Section::FIELD_KINDS {
            view.check_kind(field, kinds)?;
        }

        let (min, max) = check_bounds(view)?;
        check_exclusions(&section, sections)?;

        if let Some(presets) = view.get("presets").and_then(Value::as_list) {
            for (index, preset) in presets.iter().enumerate() {
                check_preset(name, index, preset, min, max)?;
            }
        }

        if let Some(references) = view.get("components").and_then(Value::as_list) {
            self.resolve_references(view.entity(), name, references)?;
        }
        Ok(())
    }
}

/// `section_order` as names; every entry must be a string.
fn section_names<'a>(view: &View<'a>) -> ValidationResult<Vec<&'a str>> {
    view.list("section_order")?
        .iter()
        .map(|entry| {
            entry.as_str().ok_or_else(|| {
                view.error(
                    ErrorKind::InvalidType,
                    format!(
                        "section_order entries must be strings, got {}: {}",
                        entry.kind(),
                        entry
                    ),
                )
            })
        })
        .collect()
}

/// Enforce `0 <= min <= value <= max`, one error per violated bound.
fn check_bounds(view: &View<'_>) -> ValidationResult<(i64, i64)> {
    let value = view.int("value")?;
    let min = view.int("min")?;
    let max = view.int("max")?;

    if min < 0 {
        return Err(view.error(
            ErrorKind::NegativeMinimum,
            format!("the minimum value: {} is less than 0", min),
        ));
    }
    if min > max {
        return Err(view.error(
            ErrorKind::MinAboveMax,
            format!("the minimum: {} is greater than the maximum: {}", min, max),
        ));
    }
    if value > max {
        return Err(view.error(
            ErrorKind::ValueAboveMax,
            format!(
                "the value: {} is greater than the maximum allowed: {}",
                value, max
            ),
        ));
    }
    if value < min {
        return Err(view.error(
            ErrorKind::ValueBelowMin,
            format!("the value: {} is less than the minimum allowed: {}", value, min),
        ));
    }
    Ok((min, max))
}

fn check_exclusions(section: &Section<'_>, sections: &Record) -> ValidationResult<()> {
    let view = &section.view;
    for excluded in section.excludes() {
        let Some(excluded) = excluded.as_str() else {
            return Err(view.error(
                ErrorKind::InvalidType,
                format!(
                    "excludes entries must be section names, got {}",
                    excluded.kind()
                ),
            ));
        };
        if excluded == section.name {
            return Err(view.error(
                ErrorKind::SelfExclusion,
                "exclusion of self not supported",
            ));
        }
        if !sections.contains_key(excluded) {
            return Err(view.error(
                ErrorKind::UndefinedExclusion,
                format!("exclusion of undefined section: {}", excluded),
            ));
        }
    }
    Ok(())
}

fn check_preset(
    section: &str,
    index: usize,
    preset: &Value,
    min: i64,
    max: i64,
) -> ValidationResult<()> {
    let entity = Entity::Preset {
        section: section.to_string(),
        index,
    };
    let view = View::new(entity.clone(), preset)?;

    let title = view.require("title")?;
    check_kind(&entity, "title", title, &[Kind::String])?;
    let value = view.require("value")?;
    check_kind(&entity, "value", value, &[Kind::Integer])?;

    let value = value.as_int().unwrap_or_default();
    if value > max {
        return Err(ValidationError::new(
            ErrorKind::PresetOutOfRange,
            entity,
            format!(
                "preset value: {} is larger than the maximum allowed: {}",
                value, max
            ),
        ));
    }
    if value < min {
        return Err(ValidationError::new(
            ErrorKind::PresetOutOfRange,
            entity,
            format!(
                "preset value: {} is less than the minimum allowed: {}",
                value, min
            ),
        ));
    }
    Ok(())
}
