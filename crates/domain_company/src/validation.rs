//! Company validation rules
//!
//! ## New companies
//! - Name and description must not be empty
//! - Head count, if given, must not be negative
//! - Logo URL, if given, must be an absolute `http` or `https` URL
//!
//! ## Updates
//! - At least one field must be supplied
//! - Supplied name and description must not be empty
//! - Same head count and logo rules as creation
//!
//! Handle rules are enforced by [`CompanyHandle`](core_kernel::CompanyHandle)
//! itself, so a `NewCompany` can never carry a malformed handle.

use validator::Validate;

use crate::company::{CompanyUpdate, NewCompany};
use crate::error::CompanyError;

/// Result of company validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Converts a failed result into `CompanyError::ValidationFailed`
    pub fn into_result(self) -> Result<(), CompanyError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(CompanyError::ValidationFailed(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for company requests
pub struct CompanyValidator;

impl CompanyValidator {
    /// Validates a creation request
    pub fn validate_new(company: &NewCompany) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if let Err(errors) = company.validate() {
            let mut messages: Vec<String> = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errs)| {
                    errs.iter().map(move |e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("{} is invalid ({})", field, e.code),
                    })
                })
                .collect();
            // field_errors() iterates a HashMap
            messages.sort();
            for message in messages {
                result.add_error(message);
            }
        }

        if let Some(url) = &company.logo_url {
            Self::check_logo_scheme(url, &mut result);
        }

        result
    }

    /// Validates a partial update
    ///
    /// An empty update is reported as `CompanyError::EmptyUpdate` rather than
    /// a field error, since it carries nothing to validate.
    pub fn validate_update(update: &CompanyUpdate) -> Result<ValidationResult, CompanyError> {
        if update.is_empty() {
            return Err(CompanyError::EmptyUpdate);
        }

        let mut result = ValidationResult::ok();

        if matches!(&update.name, Some(name) if name.is_empty()) {
            result.add_error("name must not be empty");
        }
        if matches!(&update.description, Some(d) if d.is_empty()) {
            result.add_error("description must not be empty");
        }
        if let Some(Some(n)) = update.num_employees {
            if n < 0 {
                result.add_error("numEmployees must not be negative");
            }
        }
        if let Some(Some(url)) = &update.logo_url {
            Self::check_logo_scheme(url, &mut result);
        }

        Ok(result)
    }

    fn check_logo_scheme(url: &str, result: &mut ValidationResult) {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            result.add_error(format!("logoUrl '{}' must use http or https", url));
        }
    }
}
