//! The post-job form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use jobboard_core::error::AppError;
use jobboard_core::AppResult;
use jobboard_entity::job::{JobStatus, NewExperience, NewJobPosting};

use super::url::normalize_url;

/// Employment types an employer can pick.
pub const POST_EMPLOYMENT_TYPES: [&str; 6] = [
    "Full-time",
    "Part-time",
    "Contract",
    "Internship",
    "Freelance",
    "Temporary",
];

/// Work modes an employer can pick.
pub const WORK_MODES: [&str; 4] = ["Remote", "On-site", "Hybrid", "Work From Office"];

/// Raw post-job form input.
///
/// Numeric fields hold the text as typed; blank or unparseable text counts
/// as `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobPostForm {
    /// Job title.
    #[validate(length(min = 1, message = "Job title is required"))]
    pub title: String,
    /// Hiring company.
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    /// Company logo URL.
    #[serde(default)]
    pub company_logo: String,
    /// Company website as typed.
    #[serde(default)]
    pub company_url: String,
    /// Selected employment types.
    #[serde(default)]
    pub employment_type: Vec<String>,
    /// Selected work modes.
    #[serde(default)]
    pub work_mode: Vec<String>,
    /// Work locations.
    #[serde(default)]
    pub locations: Vec<String>,
    /// Minimum salary (lakhs).
    #[serde(default)]
    pub min_price: String,
    /// Maximum salary (lakhs).
    #[serde(default)]
    pub max_price: String,
    /// Minimum experience (years).
    #[serde(default)]
    pub experience_min: String,
    /// Maximum experience (years).
    #[serde(default)]
    pub experience_max: String,
    /// Description.
    #[validate(length(min = 1, message = "Job description is required"))]
    pub description: String,
    /// Roles and responsibilities.
    #[serde(default)]
    pub responsibilities: String,
}

impl JobPostForm {
    /// Validate the form and build the request payload.
    pub fn into_payload(self) -> AppResult<NewJobPosting> {
        let form = self.trimmed();
        form.validate()?;

        let min_salary = parse_amount(&form.min_price);
        let max_salary = parse_amount(&form.max_price);
        let min_exp = parse_amount(&form.experience_min);
        let max_exp = parse_amount(&form.experience_max);

        if min_salary < 0.0 {
            return Err(AppError::validation("Minimum salary cannot be negative"));
        }
        if max_salary < 0.0 {
            return Err(AppError::validation("Maximum salary cannot be negative"));
        }
        if max_salary < min_salary {
            return Err(AppError::validation(
                "Maximum salary cannot be less than minimum salary",
            ));
        }
        if min_exp < 0.0 {
            return Err(AppError::validation("Minimum experience cannot be negative"));
        }
        if max_exp < 0.0 {
            return Err(AppError::validation("Maximum experience cannot be negative"));
        }
        if max_exp < min_exp {
            return Err(AppError::validation(
                "Maximum experience cannot be less than minimum experience",
            ));
        }
        if form.employment_type.is_empty() {
            return Err(AppError::validation(
                "Please select at least one employment type",
            ));
        }
        if form.work_mode.is_empty() {
            return Err(AppError::validation("Please select at least one work mode"));
        }
        if form.locations.is_empty() {
            return Err(AppError::validation("Please add at least one job location"));
        }
        let employment_type =
            canonical_choices(form.employment_type, &POST_EMPLOYMENT_TYPES, "employment type")?;
        let work_mode = canonical_choices(form.work_mode, &WORK_MODES, "work mode")?;

        let company_url = normalize_url(&form.company_url);
        Ok(NewJobPosting {
            title: form.title,
            employment_type,
            work_mode,
            min_price: min_salary.to_string(),
            max_price: max_salary.to_string(),
            description: form.description,
            responsibilities: form.responsibilities,
            experience: NewExperience {
                min: min_exp.to_string(),
                max: max_exp.to_string(),
            },
            company_name: form.company_name,
            locations: form.locations,
            company_logo: Some(form.company_logo).filter(|l| !l.is_empty()),
            company_url: Some(company_url).filter(|u| !u.is_empty()),
            status: JobStatus::Active,
        })
    }

    fn trimmed(self) -> Self {
        let clean_list = |items: Vec<String>| -> Vec<String> {
            let mut out: Vec<String> = Vec::new();
            for item in items {
                let item = item.trim().to_string();
                if !item.is_empty() && !out.contains(&item) {
                    out.push(item);
                }
            }
            out
        };
        Self {
            title: self.title.trim().to_string(),
            company_name: self.company_name.trim().to_string(),
            company_logo: self.company_logo.trim().to_string(),
            company_url: self.company_url,
            employment_type: clean_list(self.employment_type),
            work_mode: clean_list(self.work_mode),
            locations: clean_list(self.locations),
            min_price: self.min_price,
            max_price: self.max_price,
            experience_min: self.experience_min,
            experience_max: self.experience_max,
            description: self.description.trim().to_string(),
            responsibilities: self.responsibilities.trim().to_string(),
        }
    }
}

/// Map each selection onto its canonical spelling from `allowed`,
/// ignoring case. Anything not in the list is rejected.
fn canonical_choices(selected: Vec<String>, allowed: &[&str], label: &str) -> AppResult<Vec<String>> {
    let mut out: Vec<String> = Vec::with_capacity(selected.len());
    for choice in selected {
        let Some(canonical) = allowed.iter().find(|a| a.eq_ignore_ascii_case(&choice)) else {
            return Err(AppError::validation(format!(
                "Unknown {label} '{choice}'. Choose from: {}",
                allowed.join(", ")
            )));
        };
        if !out.iter().any(|c| c == canonical) {
            out.push((*canonical).to_string());
        }
    }
    Ok(out)
}

fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
