//! Login and registration drafts.

use campus_connect_backend::{LoginRequest, RegisterRequest, Role};

use crate::error::{CoreError, CoreResult};
use crate::form;

/// Draft for the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl LoginDraft {
    /// Discards all input.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Both fields must be present; credential checking is the backend's.
    pub fn validate(&self) -> CoreResult<()> {
        form::require("email", "Email", &self.email)?;
        form::require("password", "Password", &self.password)?;
        Ok(())
    }

    /// Builds the login request from a validated draft.
    #[must_use]
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Draft for the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterDraft {
    /// Display name
    pub name: String,
    /// Institutional enrollment number (`e` followed by 7 digits)
    pub e_number: String,
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
    /// Password confirmation
    pub confirm_password: String,
    /// Requested role
    pub role: Role,
}

impl Default for RegisterDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            e_number: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::Student,
        }
    }
}

/// Whether the value is `e` followed by exactly 7 digits.
fn is_valid_e_number(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next() == Some('e')
        && value.len() == 8
        && chars.all(|c| c.is_ascii_digit())
}

impl RegisterDraft {
    /// Discards all input, restoring the role default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Runs the rule set in fixed order, stopping at the first failure.
    pub fn validate(&self) -> CoreResult<()> {
        form::require("name", "Name", &self.name)?;
        form::require("eNumber", "E-number", &self.e_number)?;
        form::require("email", "Email", &self.email)?;
        form::require("password", "Password", &self.password)?;
        form::require("confirmPassword", "Password confirmation", &self.confirm_password)?;

        if !is_valid_e_number(self.e_number.trim()) {
            return Err(CoreError::validation(
                "eNumber",
                "E-number must be \"e\" followed by 7 digits",
            ));
        }
        form::email("email", &self.email)?;
        if self.password != self.confirm_password {
            return Err(CoreError::validation(
                "confirmPassword",
                "Passwords do not match",
            ));
        }
        Ok(())
    }

    /// Builds the register request from a validated draft.
    #[must_use]
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_string(),
            e_number: self.e_number.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        }
    }
}
