//! Job posting CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tokio::sync::Mutex;

use jobboard_auth::rbac::policies::{JOB_DASHBOARD_ROUTE, POST_JOB_ROUTE};
use jobboard_core::error::AppError;
use jobboard_entity::JobPosting;
use jobboard_service::{JobListing, JobPostForm, SearchCriteria};

use super::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for job commands
#[derive(Debug, Args)]
pub struct JobsArgs {
    /// Jobs subcommand
    #[command(subcommand)]
    pub command: JobsCommand,
}

/// Fields of a new posting
#[derive(Debug, Args)]
pub struct PostArgs {
    /// Job title
    #[arg(long)]
    pub title: String,
    /// Company name (defaults to the employer's company)
    #[arg(long)]
    pub company: Option<String>,
    /// Employment type, repeatable (Full-time, Part-time, Contract, Internship, Freelance, Temporary)
    #[arg(long = "type")]
    pub employment_types: Vec<String>,
    /// Work mode, repeatable (Remote, On-site, Hybrid, Work From Office)
    #[arg(long = "mode")]
    pub work_modes: Vec<String>,
    /// Location, repeatable
    #[arg(long = "location")]
    pub locations: Vec<String>,
    /// Minimum salary in lakhs
    #[arg(long, default_value = "")]
    pub min_salary: String,
    /// Maximum salary in lakhs
    #[arg(long, default_value = "")]
    pub max_salary: String,
    /// Minimum experience in years
    #[arg(long, default_value = "")]
    pub min_experience: String,
    /// Maximum experience in years
    #[arg(long, default_value = "")]
    pub max_experience: String,
    /// Job description
    #[arg(long)]
    pub description: String,
    /// Roles and responsibilities
    #[arg(long, default_value = "")]
    pub responsibilities: String,
    /// Company logo URL
    #[arg(long, default_value = "")]
    pub logo: String,
    /// Company website
    #[arg(long, default_value = "")]
    pub url: String,
}

/// Jobs subcommands
#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// List postings, newest first, with optional filters
    List {
        /// Keyword matched against title or description, repeatable
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,
        /// Location substring, repeatable
        #[arg(short, long = "location")]
        locations: Vec<String>,
        /// Employment type, repeatable
        #[arg(short = 't', long = "type")]
        types: Vec<String>,
    },
    /// Show one posting
    Show {
        /// Job ID
        id: String,
    },
    /// Publish a new posting (employers)
    Post(PostArgs),
    /// Delete one of your postings
    Delete {
        /// Job ID
        id: String,
    },
    /// List your postings (employers)
    Mine,
    /// Bulk-upload postings from a JSON array file
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
}

/// Job display row for table output
#[derive(Debug, Serialize, Tabled)]
struct JobRow {
    /// Job ID
    id: String,
    /// Title
    title: String,
    /// Company
    company: String,
    /// Locations
    location: String,
    /// Employment types
    #[tabled(rename = "type")]
    employment_type: String,
    /// Salary range
    salary: String,
    /// Posted date
    posted: String,
}

impl From<&JobPosting> for JobRow {
    fn from(job: &JobPosting) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company_name.clone(),
            location: job.location_label(),
            employment_type: job.employment_type.join(", "),
            salary: job.salary_label(),
            posted: job
                .posted_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute job commands
pub async fn execute(args: &JobsArgs, ctx: &AppContext, format: OutputFormat) -> Result<(), AppError> {
    let service = ctx.jobs();

    match &args.command {
        JobsCommand::List {
            keywords,
            locations,
            types,
        } => {
            let listing = Mutex::new(JobListing::new());
            {
                let mut listing = listing.lock().await;
                listing.apply_criteria(
                    &SearchCriteria::new()
                        .with_keywords(keywords.iter().map(|k| k.trim()).filter(|k| !k.is_empty()))
                        .with_locations(locations.iter().map(|l| l.trim()).filter(|l| !l.is_empty())),
                );
                for employment_type in types {
                    listing.toggle_employment_type(employment_type);
                }
            }

            service.refresh(&listing).await?;
            let listing = listing.lock().await;
            let rows: Vec<JobRow> = listing.visible().iter().map(JobRow::from).collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                println!("{}", listing.summary());
            }
        }
        JobsCommand::Show { id } => {
            let job = service.get(id).await?;
            match format {
                OutputFormat::Json => output::print_json(&job),
                OutputFormat::Table => print_job(&job),
            }
        }
        JobsCommand::Post(post) => {
            if !ctx.guard(POST_JOB_ROUTE) {
                return Ok(());
            }
            let company = post
                .company
                .clone()
                .or_else(|| ctx.sessions.session().and_then(|s| s.company_name))
                .unwrap_or_default();

            let form = JobPostForm {
                title: post.title.clone(),
                company_name: company,
                company_logo: post.logo.clone(),
                company_url: post.url.clone(),
                employment_type: post.employment_types.clone(),
                work_mode: post.work_modes.clone(),
                locations: post.locations.clone(),
                min_price: post.min_salary.clone(),
                max_price: post.max_salary.clone(),
                experience_min: post.min_experience.clone(),
                experience_max: post.max_experience.clone(),
                description: post.description.clone(),
                responsibilities: post.responsibilities.clone(),
            };

            let created = service.post(form).await?;
            output::print_success("Job Posted Successfully!");
            if let Some(job) = created {
                output::print_kv("ID", &job.id);
            }
        }
        JobsCommand::Delete { id } => {
            if !ctx.guard(JOB_DASHBOARD_ROUTE) {
                return Ok(());
            }
            service.delete(id).await?;
            output::print_success(&format!("Job '{}' deleted", id));
        }
        JobsCommand::Mine => {
            if !ctx.guard(JOB_DASHBOARD_ROUTE) {
                return Ok(());
            }
            let jobs = service.my_jobs().await?;
            let rows: Vec<JobRow> = jobs.iter().map(JobRow::from).collect();
            output::print_list(&rows, format);
        }
        JobsCommand::Import { file } => {
            let raw = tokio::fs::read_to_string(file).await?;
            let reply = service.import(&raw).await?;
            output::print_success("Upload successful");
            output::print_item(&reply, format);
        }
    }

    Ok(())
}

fn print_job(job: &JobPosting) {
    println!("{}", job.title);
    output::print_kv("Company", &job.company_name);
    output::print_kv("Location", &job.location_label());
    output::print_kv("Employment type", &job.employment_type.join(", "));
    output::print_kv("Work mode", &job.work_mode.join(", "));
    output::print_kv("Salary", &job.salary_label());
    output::print_kv("Experience", &job.experience_label());
    if let Some(url) = &job.company_url {
        output::print_kv("Website", url);
    }
    if let Some(description) = &job.description {
        println!("\nDescription\n{}", description);
    }
    if let Some(responsibilities) = &job.responsibilities {
        println!("\nRoles and responsibilities\n{}", responsibilities);
    }
}
