// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sheetwise - turn lecture notes into study sheets, quizzes and a tutor.
//!
//! This is the binary entry point. It loads configuration, installs logging,
//! assembles a [`StudyContext`] and dispatches one subcommand.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;
mod input;
mod offline;
mod quiz;
mod render;
mod status;
mod tutor;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use sheetwise_config::SheetwiseConfig;
use sheetwise_core::types::{AcademicLevel, LearningStyle, MnemonicStyle};
use sheetwise_core::{ContentAdapter, SheetwiseError};
use sheetwise_gemini::GeminiContentService;
use sheetwise_study::StudyContext;
use tracing::warn;

use crate::offline::OfflineContent;

/// Sheetwise - turn lecture notes into study sheets, quizzes and a tutor.
#[derive(Parser, Debug)]
#[command(name = "sheetwise", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in by name, creating the user on first use.
    Login { name: String },
    /// Sign out. Your data stays on disk.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Show or edit your learning profile.
    Profile {
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        level: Option<AcademicLevel>,
        #[arg(long)]
        learning_style: Option<LearningStyle>,
        #[arg(long)]
        mnemonic_style: Option<MnemonicStyle>,
    },
    /// Extract a study sheet from a PDF or image.
    Upload {
        file: PathBuf,
        /// Show the sheet without adding it to your library.
        #[arg(long)]
        no_save: bool,
    },
    /// List the sheets in your library.
    Sheets,
    /// Print a saved sheet.
    Show { sheet_id: String },
    /// Take a quiz on a saved sheet.
    Quiz {
        sheet_id: String,
        /// Timed exam mode.
        #[arg(long)]
        exam: bool,
    },
    /// Ask the tutor about one concept of a sheet.
    Tutor {
        sheet_id: String,
        /// Concept id or term.
        concept: String,
    },
    /// Show mastery and quiz statistics.
    Progress {
        #[arg(long)]
        sheet: Option<String>,
    },
    /// Browse sheets shared by other learners.
    Gallery {
        #[arg(long)]
        subject: Option<String>,
    },
    /// Show configuration, storage and content service state.
    Status {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => sheetwise_config::load_and_validate_path(path),
        None => sheetwise_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            sheetwise_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(exit_code(&e));
    }
}

async fn run(command: Commands, config: &SheetwiseConfig) -> Result<(), SheetwiseError> {
    let context = StudyContext::from_config(config, content_service(config))?;

    match command {
        Commands::Login { name } => commands::login(&context, &name),
        Commands::Logout => commands::logout(&context),
        Commands::Whoami => commands::whoami(&context),
        Commands::Profile {
            subject,
            level,
            learning_style,
            mnemonic_style,
        } => {
            let edit = sheetwise_study::ProfileEdit {
                subject,
                level,
                learning_style,
                mnemonic_style,
            };
            commands::profile(&context, &edit)
        }
        Commands::Upload { file, no_save } => commands::upload(&context, &file, !no_save).await,
        Commands::Sheets => commands::sheets(&context),
        Commands::Show { sheet_id } => commands::show(&context, &sheet_id),
        Commands::Quiz { sheet_id, exam } => quiz::run_quiz(&context, &sheet_id, exam).await,
        Commands::Tutor { sheet_id, concept } => {
            tutor::run_tutor(&context, &sheet_id, &concept).await
        }
        Commands::Progress { sheet } => commands::progress(&context, sheet.as_deref()),
        Commands::Gallery { subject } => commands::gallery(&context, subject.as_deref()),
        Commands::Status { json } => status::run_status(&context, config, json).await,
    }
}

/// The Gemini service, or an offline stand-in when it cannot be configured.
///
/// Commands that never call the content service keep working without an
/// API key.
fn content_service(config: &SheetwiseConfig) -> Arc<dyn ContentAdapter> {
    match GeminiContentService::new(config) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            warn!(error = %e, "content service unavailable, running offline");
            Arc::new(OfflineContent::new(e.to_string()))
        }
    }
}

/// Only configuration and storage failures end the process with an error.
fn exit_code(err: &SheetwiseError) -> i32 {
    match err {
        SheetwiseError::Config(_) | SheetwiseError::Storage { .. } => 1,
        _ => 0,
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sheetwise={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
