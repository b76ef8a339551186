//! Supplier table checks.

use super::Validator;
use crate::error::{ErrorKind, ValidationResult};
use crate::model::Supplier;

impl<'a> Validator<'a> {
    pub(super) fn check_suppliers(&mut self) -> ValidationResult<()> {
        let suppliers = self.suppliers;
        for (name, value) in suppliers.iter() {
            self.reporter.log(&format!("Checking supplier: {}", name));
            let supplier = Supplier::new(name, value)?;
            supplier.view.require_all(&Supplier::REQUIRED)?;

            let currency = supplier.currency().and_then(|c| c.as_str());
            if !currency.is_some_and(|c| self.settings.allows_currency(c)) {
                let found = supplier
                    .currency()
                    .map(|c| c.to_string())
                    .unwrap_or_default();
                return Err(supplier.view.error(
                    ErrorKind::InvalidCurrency,
                    format!(
                        "invalid currency: {} (allowed: {})",
                        found,
                        self.settings.currencies.join(", ")
                    ),
                ));
            }
        }
        Ok(())
    }
}
