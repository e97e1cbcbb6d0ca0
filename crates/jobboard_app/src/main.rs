mod commands;
mod config;
mod convert;
mod effects;
mod render;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use jobboard_core::{ApplicationStatus, StatusTab};
use jobboard_engine::NewApplication;
use jobboard_logging::{board_error, board_info};
use log::LevelFilter;

use crate::commands::Backend;
use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Search job listings and track applications")]
#[command(version)]
struct Cli {
    /// Path to a jobboard.ron file (default: ./jobboard.ron if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive job search with filters and the AI assistant
    #[command(visible_alias = "b")]
    Browse,

    /// List saved applications
    Applications {
        /// Tab to show: all, applied, interview, offer, rejected
        #[arg(short, long, default_value = "all")]
        status: StatusTab,
    },

    /// Save a job to your applications
    Save {
        #[arg(long)]
        job_id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        apply_url: String,
    },

    /// Move an application to another status
    Status {
        /// Application ID
        id: String,
        /// Applied, Interview, Offer or Rejected
        status: ApplicationStatus,
    },

    /// Delete an application
    #[command(visible_alias = "rm")]
    Remove {
        /// Application ID
        id: String,
    },

    /// List uploaded resumes
    Resumes,

    /// Upload a PDF resume (max 5 MB)
    Upload {
        /// Path to the PDF
        path: Option<PathBuf>,
    },

    /// Score your latest resume against a job
    Match {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            board_error!("{err:#}");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    jobboard_logging::initialize(config.log.into(), level, &config.log_file);
    board_info!("jobboard starting against {}", config.base_url);

    let settings = config.client_settings();
    match cli.command {
        Commands::Browse => session::run(settings),
        Commands::Applications { status } => Backend::new(settings)?.list_applications(status),
        Commands::Save {
            job_id,
            title,
            company,
            location,
            apply_url,
        } => Backend::new(settings)?.save_application(NewApplication {
            job_id,
            title,
            company,
            location,
            apply_url,
        }),
        Commands::Status { id, status } => Backend::new(settings)?.update_status(&id, status),
        Commands::Remove { id } => Backend::new(settings)?.remove_application(&id),
        Commands::Resumes => Backend::new(settings)?.list_resumes(),
        Commands::Upload { path } => Backend::new(settings)?.upload_resume(path.as_deref()),
        Commands::Match { title, description } => {
            Backend::new(settings)?.score_match(&title, &description)
        }
    }
}
