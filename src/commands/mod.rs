//! CLI command definitions and dispatch.

pub mod applications;
pub mod auth;
pub mod config;
pub mod jobs;
pub mod search;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use jobboard_auth::{AccessDecision, AuthorizationGate, FileKeyValueStore, SessionStore};
use jobboard_client::ApiClient;
use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;
use jobboard_core::traits::KeyValueStore;
use jobboard_service::{ApplicationService, JobService};

use crate::output::{self, OutputFormat};

/// JobBoard: browse, search and post jobs from the terminal
#[derive(Debug, Parser)]
#[command(name = "jobboard", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config/local.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, register
    Auth(auth::AuthArgs),
    /// Browse and manage job postings
    Jobs(jobs::JobsArgs),
    /// Interactive keyword and location search
    Search(search::SearchArgs),
    /// Apply to jobs and review applicants
    Applications(applications::ApplicationsArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, &config, &self.config, self.format);
        }

        let ctx = AppContext::init(config).await?;
        match &self.command {
            Commands::Auth(args) => auth::execute(args, &ctx, self.format).await,
            Commands::Jobs(args) => jobs::execute(args, &ctx, self.format).await,
            Commands::Search(args) => search::execute(args, &ctx).await,
            Commands::Applications(args) => applications::execute(args, &ctx, self.format).await,
            Commands::Config(_) => Ok(()),
        }
    }
}

/// Shared state for one command invocation.
pub struct AppContext {
    /// Loaded configuration.
    pub config: AppConfig,
    /// HTTP client.
    pub api: Arc<ApiClient>,
    /// Session store, rehydrated from disk.
    pub sessions: Arc<SessionStore>,
    /// Route authorization.
    pub gate: AuthorizationGate,
}

impl AppContext {
    /// Build the client stack and restore the persisted session.
    pub async fn init(config: AppConfig) -> Result<Self, AppError> {
        let api = Arc::new(ApiClient::new(&config.api)?);
        let storage: Arc<dyn KeyValueStore> =
            Arc::new(FileKeyValueStore::new(config.session.storage_path.clone()));
        let sessions = Arc::new(SessionStore::new(storage, api.clone()));

        sessions.rehydrate().await;
        if let Some(token) = sessions.bearer_token() {
            api.set_token(token);
        }

        Ok(Self {
            config,
            api,
            sessions,
            gate: AuthorizationGate::new(),
        })
    }

    /// Job operations.
    pub fn jobs(&self) -> JobService {
        JobService::new(self.api.clone(), self.sessions.clone())
    }

    /// Application operations.
    pub fn applications(&self) -> ApplicationService {
        ApplicationService::new(self.api.clone(), self.sessions.clone())
    }

    /// Check the session against a protected route.
    ///
    /// Prints the login hint or the access-denied text and returns `false`
    /// when the command must not proceed.
    pub fn guard(&self, path: &str) -> bool {
        let session = self.sessions.session();
        match self.gate.check_path(session.as_ref(), path) {
            AccessDecision::Allow => true,
            AccessDecision::RedirectToLogin { to, from } => {
                output::print_warning(&format!("Please log in to access {from}"));
                println!("  Run `jobboard auth login` ({to}), then retry.");
                false
            }
            AccessDecision::Deny { reason } => {
                output::print_warning("Access Denied");
                println!("  {reason}");
                false
            }
        }
    }
}
