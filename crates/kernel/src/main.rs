//! Koperasi navigation CLI
//!
//! Resolves roles, menus and route access for a session.
//!
//! Usage:
//!   koperasi-nav menu --role ketua --format tree
//!   koperasi-nav check --session-file session.json /simpanan/kategori

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use koperasi_kernel::cli;
use koperasi_kernel::{Config, OutputFormat, SessionUser};

/// Role-based navigation for the koperasi shell.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog file (.yml, .yaml or .json) instead of the configured one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the effective role of a session.
    Role(SessionArgs),

    /// Print the menu a session may see.
    Menu {
        #[command(flatten)]
        session: SessionArgs,

        /// Output format: json, yaml or tree.
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Check whether a session may open a path (exit status 1 when denied).
    Check {
        #[command(flatten)]
        session: SessionArgs,

        /// Path to check, e.g. /simpanan/kategori.
        path: String,
    },

    /// Inspect the menu catalog.
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Load and validate a catalog file.
    Validate {
        /// Catalog file; defaults to --catalog or the configured catalog.
        path: Option<PathBuf>,
    },

    /// Print the active catalog.
    Export {
        /// Output format: json or yaml.
        #[arg(long)]
        format: Option<OutputFormat>,
    },
}

/// Where the session comes from. Without any of these there is no session.
#[derive(Args, Debug)]
struct SessionArgs {
    /// Role name assigned to the session user (repeatable).
    #[arg(long = "role", value_name = "NAME")]
    roles: Vec<String>,

    /// Treat the session as authenticated even without roles.
    #[arg(long)]
    authenticated: bool,

    /// JSON session document, e.g. {"roles": [{"name": "ketua"}]}.
    #[arg(long, conflicts_with_all = ["roles", "authenticated"])]
    session_file: Option<PathBuf>,
}

impl SessionArgs {
    fn into_session(self) -> Result<Option<SessionUser>> {
        cli::session_from_args(self.roles, self.authenticated, self.session_file.as_deref())
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let catalog_path = args.catalog.or(config.menu_catalog);

    match args.command {
        Command::Role(session) => {
            cli::cmd_role(session.into_session()?.as_ref())?;
        }
        Command::Menu { session, format } => {
            let catalog = cli::load_catalog(catalog_path.as_deref())?;
            let format = format.unwrap_or(config.output_format);
            cli::cmd_menu(session.into_session()?.as_ref(), &catalog, format)?;
        }
        Command::Check { session, path } => {
            let catalog = cli::load_catalog(catalog_path.as_deref())?;
            if !cli::cmd_check(session.into_session()?.as_ref(), &catalog, &path)? {
                return Ok(ExitCode::from(1));
            }
        }
        Command::Catalog(CatalogCommand::Validate { path }) => {
            cli::cmd_catalog_validate(path.or(catalog_path).as_deref())?;
        }
        Command::Catalog(CatalogCommand::Export { format }) => {
            let catalog = cli::load_catalog(catalog_path.as_deref())?;
            let format = format.unwrap_or(config.output_format);
            cli::cmd_catalog_export(&catalog, format)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
