//! Unused-component report.

use super::Validator;

impl<'a> Validator<'a> {
    /// Components never reached from the configuration, in table order.
    /// Informational only; never fails the run.
    pub(super) fn check_unused_components(&self) -> Vec<String> {
        let unused: Vec<String> = self
            .components
            .keys()
            .filter(|id| !self.used.contains(*id))
            .map(str::to_string)
            .collect();

        if !unused.is_empty() {
            self.reporter.unused(&unused);
        }
        unused
    }
}
