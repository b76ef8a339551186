//! Component references.
//!
//! A configuration lists components either as a bare id (`"LM317"`, quantity
//! one) or as a `[quantity, id]` pair (`[4, "BC547"]`).

use crate::error::{Entity, ErrorKind, ValidationError, ValidationResult};
use crate::value::Value;

/// A normalized `(quantity, component id)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef<'a> {
    pub quantity: i64,
    pub id: &'a str,
}

impl<'a> ComponentRef<'a> {
    /// Normalize a reference, attributing shape errors to `owner`.
    ///
    /// Shape only: whether `id` names a known component is checked by the
    /// caller, which owns the component table.
    pub fn parse(value: &'a Value, owner: &Entity) -> ValidationResult<Self> {
        let malformed = |message: String| {
            ValidationError::new(ErrorKind::MalformedReference, owner.clone(), message)
        };

        match value {
            Value::Str(id) => Ok(Self { quantity: 1, id }),
            Value::List(pair) => {
                let [quantity, id] = pair.as_slice() else {
                    return Err(malformed(format!(
                        "the component should be a [ amount, 'component_id' ] pair, got: {}",
                        value
                    )));
                };
                let quantity = quantity.as_int().ok_or_else(|| {
                    malformed(format!(
                        "expected component amount as an integer, got: {}",
                        quantity.kind()
                    ))
                })?;
                let id = id.as_str().ok_or_else(|| {
                    malformed(format!(
                        "expected component id as a string, got: {}",
                        id.kind()
                    ))
                })?;
                Ok(Self { quantity, id })
            }
            other => Err(malformed(format!(
                "expected the component as a list or a string, got {}",
                other.kind()
            ))),
        }
    }
}
