//! Job posting domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::JobStatus;
use crate::wire;

/// An inclusive numeric range (salary in lakhs, experience in years).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound.
    #[serde(default, deserialize_with = "wire::lenient_number")]
    pub min: f64,
    /// Upper bound.
    #[serde(default, deserialize_with = "wire::lenient_number")]
    pub max: f64,
}

impl Range {
    /// Create a new range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// An employer-authored job listing.
///
/// Immutable once fetched; the authoritative copy lives in the backend.
/// Serializes to and from the backend document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "JobPostingRecord", into = "JobPostingRecord")]
pub struct JobPosting {
    /// Backend ID.
    pub id: String,
    /// Job title.
    pub title: String,
    /// Hiring company.
    pub company_name: String,
    /// Company logo URL.
    pub company_logo: Option<String>,
    /// Company website.
    pub company_url: Option<String>,
    /// Employment types (Full-time, Contract, ...).
    pub employment_type: Vec<String>,
    /// Work modes (Remote, Hybrid, ...).
    pub work_mode: Vec<String>,
    /// Work locations, in the order the employer entered them.
    pub locations: Vec<String>,
    /// Salary range in lakhs per annum.
    pub salary_range: Range,
    /// Required experience in years.
    pub experience_range: Range,
    /// Free-form description.
    pub description: Option<String>,
    /// Roles and responsibilities.
    pub responsibilities: Option<String>,
    /// When the posting was created.
    pub posted_at: Option<DateTime<Utc>>,
    /// Publication status.
    pub status: JobStatus,
    /// ID of the employer who owns the posting.
    pub posted_by: Option<String>,
}

impl JobPosting {
    /// Create a posting with only a title; every other field empty.
    pub fn titled(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company_name: String::new(),
            company_logo: None,
            company_url: None,
            employment_type: Vec::new(),
            work_mode: Vec::new(),
            locations: Vec::new(),
            salary_range: Range::default(),
            experience_range: Range::default(),
            description: None,
            responsibilities: None,
            posted_at: None,
            status: JobStatus::Active,
            posted_by: None,
        }
    }

    /// Locations joined for display.
    pub fn location_label(&self) -> String {
        if self.locations.is_empty() {
            "Not specified".to_string()
        } else {
            self.locations.join(", ")
        }
    }

    /// Salary range formatted like the job cards: `₹4L - ₹8L`.
    pub fn salary_label(&self) -> String {
        format!(
            "₹{}L - ₹{}L",
            trim_number(self.salary_range.min),
            trim_number(self.salary_range.max)
        )
    }

    /// Experience range formatted as `2 - 5 years`.
    pub fn experience_label(&self) -> String {
        format!(
            "{} - {} years",
            trim_number(self.experience_range.min),
            trim_number(self.experience_range.max)
        )
    }
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// The backend's job document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JobPostingRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    mongo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "jobTitle", default, skip_serializing_if = "Option::is_none")]
    job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "companyName", default)]
    company_name: Option<String>,
    #[serde(rename = "companyLogo", default, deserialize_with = "wire::non_blank")]
    company_logo: Option<String>,
    #[serde(rename = "companyUrl", default, deserialize_with = "wire::non_blank")]
    company_url: Option<String>,
    #[serde(rename = "employmentType", default, deserialize_with = "wire::string_or_list")]
    employment_type: Vec<String>,
    #[serde(rename = "workMode", default, deserialize_with = "wire::string_or_list")]
    work_mode: Vec<String>,
    #[serde(rename = "jobLocation", default, deserialize_with = "wire::string_or_list")]
    job_location: Vec<String>,
    #[serde(
        rename = "jobLocations",
        default,
        deserialize_with = "wire::string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    job_locations: Vec<String>,
    #[serde(
        default,
        deserialize_with = "wire::string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    locations: Vec<String>,
    #[serde(rename = "minPrice", default, deserialize_with = "wire::lenient_number")]
    min_price: f64,
    #[serde(rename = "maxPrice", default, deserialize_with = "wire::lenient_number")]
    max_price: f64,
    #[serde(default)]
    experience: Option<Range>,
    #[serde(default, deserialize_with = "wire::non_blank")]
    description: Option<String>,
    #[serde(
        rename = "rolesAndResponsibilities",
        default,
        deserialize_with = "wire::non_blank"
    )]
    roles_and_responsibilities: Option<String>,
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "wire::lenient_timestamp"
    )]
    created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "postingDate",
        default,
        deserialize_with = "wire::lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    posting_date: Option<DateTime<Utc>>,
    #[serde(default)]
    status: Option<JobStatus>,
    #[serde(rename = "postedBy", default, skip_serializing_if = "Option::is_none")]
    posted_by: Option<String>,
}

impl From<JobPostingRecord> for JobPosting {
    fn from(r: JobPostingRecord) -> Self {
        let locations = [r.job_location, r.job_locations, r.locations]
            .into_iter()
            .find(|list| !list.is_empty())
            .unwrap_or_default();
        Self {
            id: r.mongo_id.or(r.id).unwrap_or_default(),
            title: r.job_title.or(r.title).unwrap_or_default(),
            company_name: r.company_name.unwrap_or_default(),
            company_logo: r.company_logo,
            company_url: r.company_url,
            employment_type: r.employment_type,
            work_mode: r.work_mode,
            locations,
            salary_range: Range::new(r.min_price, r.max_price),
            experience_range: r.experience.unwrap_or_default(),
            description: r.description,
            responsibilities: r.roles_and_responsibilities,
            posted_at: r.created_at.or(r.posting_date),
            status: r.status.unwrap_or_default(),
            posted_by: r.posted_by,
        }
    }
}

impl From<JobPosting> for JobPostingRecord {
    fn from(j: JobPosting) -> Self {
        Self {
            mongo_id: Some(j.id),
            id: None,
            job_title: Some(j.title),
            title: None,
            company_name: Some(j.company_name),
            company_logo: j.company_logo,
            company_url: j.company_url,
            employment_type: j.employment_type,
            work_mode: j.work_mode,
            job_location: j.locations,
            job_locations: Vec::new(),
            locations: Vec::new(),
            min_price: j.salary_range.min,
            max_price: j.salary_range.max,
            experience: Some(j.experience_range),
            description: j.description,
            roles_and_responsibilities: j.responsibilities,
            created_at: j.posted_at,
            posting_date: None,
            status: Some(j.status),
            posted_by: j.posted_by,
        }
    }
}

/// Payload for `POST /api/jobs`.
///
/// Built by the post-job form after validation; numeric fields are sent as
/// strings, matching what the backend stores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewJobPosting {
    /// Job title.
    #[serde(rename = "jobTitle")]
    pub title: String,
    /// Selected employment types.
    #[serde(rename = "employmentType")]
    pub employment_type: Vec<String>,
    /// Selected work modes.
    #[serde(rename = "workMode")]
    pub work_mode: Vec<String>,
    /// Minimum salary.
    #[serde(rename = "minPrice")]
    pub min_price: String,
    /// Maximum salary.
    #[serde(rename = "maxPrice")]
    pub max_price: String,
    /// Description.
    pub description: String,
    /// Roles and responsibilities.
    #[serde(rename = "rolesAndResponsibilities")]
    pub responsibilities: String,
    /// Experience range.
    pub experience: NewExperience,
    /// Company name.
    #[serde(rename = "companyName")]
    pub company_name: String,
    /// Work locations.
    #[serde(rename = "jobLocation")]
    pub locations: Vec<String>,
    /// Company logo URL.
    #[serde(rename = "companyLogo")]
    pub company_logo: Option<String>,
    /// Normalized company URL.
    #[serde(rename = "companyUrl")]
    pub company_url: Option<String>,
    /// Initial status.
    pub status: JobStatus,
}

/// Experience bounds as sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExperience {
    /// Minimum years.
    pub min: String,
    /// Maximum years.
    pub max: String,
}
