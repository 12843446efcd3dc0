//! Job application CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use jobboard_auth::rbac::policies::JOB_APPLICATIONS_ROUTE;
use jobboard_core::error::AppError;
use jobboard_entity::{Application, ApplicationStatus};
use jobboard_service::ApplicationForm;

use super::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for application commands
#[derive(Debug, Args)]
pub struct ApplicationsArgs {
    /// Applications subcommand
    #[command(subcommand)]
    pub command: ApplicationsCommand,
}

/// Applications subcommands
#[derive(Debug, Subcommand)]
pub enum ApplicationsCommand {
    /// Apply to a job
    Submit {
        /// Job ID
        job_id: String,
        /// Your email
        #[arg(long)]
        email: String,
        /// LinkedIn profile URL
        #[arg(long)]
        linkedin: String,
        /// Resume file (.pdf, .docx, .doc)
        #[arg(long)]
        resume: PathBuf,
    },
    /// List applications for one of your jobs (employer or admin)
    List {
        /// Job ID
        job_id: String,
    },
    /// Change an application's status (employer or admin)
    Status {
        /// Application ID
        id: String,
        /// New status: pending, interviewing, accepted, rejected
        status: ApplicationStatus,
        /// Job the application belongs to
        #[arg(long)]
        job: Option<String>,
    },
    /// View or download a resume (employer or admin)
    Resume(ResumeArgs),
}

/// Arguments for resume commands
#[derive(Debug, Args)]
pub struct ResumeArgs {
    /// Resume subcommand
    #[command(subcommand)]
    pub command: ResumeCommand,
}

/// Resume subcommands
#[derive(Debug, Subcommand)]
pub enum ResumeCommand {
    /// Print the URL that renders the resume inline
    View {
        /// Stored resume path or file name
        filename: String,
    },
    /// Save the resume as `<email>_resume.pdf`
    Download {
        /// Stored resume path or file name
        filename: String,
        /// Applicant email, used for the file name
        #[arg(long)]
        email: String,
        /// Target directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

/// Application display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ApplicationRow {
    /// Application ID
    id: String,
    /// Applicant email
    email: String,
    /// LinkedIn URL
    linkedin: String,
    /// Resume file name
    resume: String,
    /// Review status
    status: String,
    /// Submitted at
    submitted: String,
}

impl From<&Application> for ApplicationRow {
    fn from(a: &Application) -> Self {
        Self {
            id: a.id.clone(),
            email: a.applicant_email.clone(),
            linkedin: a.linkedin_url.clone(),
            resume: a.resume_filename().unwrap_or("-").to_string(),
            status: a.status.to_string(),
            submitted: a
                .submitted_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Route guarding applicant review for a job.
fn applications_route(job_id: Option<&str>) -> String {
    match job_id {
        Some(id) => format!("/jobs/{}/applications", id),
        None => JOB_APPLICATIONS_ROUTE.to_string(),
    }
}

/// Execute application commands
pub async fn execute(
    args: &ApplicationsArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = ctx.applications();

    match &args.command {
        ApplicationsCommand::Submit {
            job_id,
            email,
            linkedin,
            resume,
        } => {
            let mut form = ApplicationForm::new(job_id.clone(), email.clone());
            form.linkedin_url = linkedin.clone();
            form.resume = Some(resume.clone());

            service.submit(form).await?;
            output::print_success("Successfully applied for the job!");
        }
        ApplicationsCommand::List { job_id } => {
            if !ctx.guard(&applications_route(Some(job_id))) {
                return Ok(());
            }
            let applications = service.for_job(job_id).await?;
            let rows: Vec<ApplicationRow> = applications.iter().map(ApplicationRow::from).collect();
            output::print_list(&rows, format);
        }
        ApplicationsCommand::Status { id, status, job } => {
            if !ctx.guard(&applications_route(job.as_deref())) {
                return Ok(());
            }
            service.set_status(id, *status).await?;
            output::print_success(&format!("Application '{}' marked {}", id, status));
        }
        ApplicationsCommand::Resume(resume) => {
            if !ctx.guard(&applications_route(None)) {
                return Ok(());
            }
            match &resume.command {
                ResumeCommand::View { filename } => {
                    println!("{}", service.resume_view_url(filename)?);
                }
                ResumeCommand::Download {
                    filename,
                    email,
                    out,
                } => {
                    let path = service.download_resume(filename, email, out).await?;
                    output::print_success(&format!("Resume saved to {}", path.display()));
                }
            }
        }
    }

    Ok(())
}
