//! Authentication CLI commands.

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

use jobboard_core::error::AppError;
use jobboard_entity::{Credentials, Role, Session};
use jobboard_service::RegisterForm;

use super::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for auth commands
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Auth subcommand
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Account type chosen at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccountType {
    /// Job seeker
    User,
    /// Employer
    Employer,
}

/// Auth subcommands
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Log in and persist the session
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Log out and clear the persisted session
    Logout,
    /// Create an account
    Register {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,
        /// Account type
        #[arg(short, long, value_enum, default_value = "user")]
        role: AccountType,
        /// Company name (employers)
        #[arg(long)]
        company: Option<String>,
    },
    /// Show the current session
    Whoami,
}

/// Session display for `whoami`
#[derive(Debug, Serialize)]
struct SessionView {
    /// User ID
    user_id: String,
    /// Email
    email: String,
    /// Normalized role
    role: Role,
    /// Company name
    company_name: Option<String>,
}

impl From<&Session> for SessionView {
    fn from(s: &Session) -> Self {
        Self {
            user_id: s.user_id.clone(),
            email: s.email.clone(),
            role: s.role(),
            company_name: s.company_name.clone(),
        }
    }
}

/// Execute auth commands
pub async fn execute(args: &AuthArgs, ctx: &AppContext, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        AuthCommand::Login { email, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("Password")?,
            };

            let session = ctx
                .sessions
                .login(&Credentials::new(email.trim(), password))
                .await?;
            output::print_success("Login successful!");
            output::print_item(&SessionView::from(&session), format);
        }
        AuthCommand::Logout => {
            ctx.sessions.logout().await;
            ctx.api.clear_token();
            output::print_success("Logged out");
        }
        AuthCommand::Register {
            email,
            password,
            role,
            company,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("Choose a password")?,
            };

            let mut form = RegisterForm::new(email.clone(), password);
            if *role == AccountType::Employer {
                form = form.as_employer(company.clone().unwrap_or_default());
            }
            let request = form.into_request()?;
            let message = ctx.api.register(&request).await?;
            output::print_success(&message);
        }
        AuthCommand::Whoami => match ctx.sessions.session() {
            Some(session) => output::print_item(&SessionView::from(&session), format),
            None => output::print_warning("Not logged in"),
        },
    }

    Ok(())
}

fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}
