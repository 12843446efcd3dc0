//! The registration form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use jobboard_client::RegisterRequest;
use jobboard_core::error::AppError;
use jobboard_core::AppResult;
use jobboard_entity::Role;

/// Raw registration input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    /// Email address.
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub password: String,
    /// Account role; job seeker unless chosen otherwise.
    #[serde(default = "default_role")]
    pub role: Role,
    /// Company name, required for employers.
    #[serde(default)]
    pub company_name: String,
}

fn default_role() -> Role {
    Role::JobSeeker
}

impl RegisterForm {
    /// A job seeker registration.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role: Role::JobSeeker,
            company_name: String::new(),
        }
    }

    /// Switch to an employer registration.
    pub fn as_employer(mut self, company_name: impl Into<String>) -> Self {
        self.role = Role::Employer;
        self.company_name = company_name.into();
        self
    }

    /// Validate the form and build the request body.
    ///
    /// Only job seekers and employers may self-register. The company name
    /// is sent for employers only.
    pub fn into_request(self) -> AppResult<RegisterRequest> {
        let form = Self {
            email: self.email.trim().to_string(),
            company_name: self.company_name.trim().to_string(),
            ..self
        };
        form.validate()?;

        let company_name = match form.role {
            Role::JobSeeker => None,
            Role::Employer if form.company_name.is_empty() => {
                return Err(AppError::validation(
                    "Company name is required for employer accounts",
                ));
            }
            Role::Employer => Some(form.company_name),
            Role::Admin => {
                return Err(AppError::validation(
                    "Admin accounts cannot be self-registered",
                ));
            }
        };

        Ok(RegisterRequest {
            email: form.email,
            password: form.password,
            role: form.role.registration_value().to_string(),
            company_name,
        })
    }
}
