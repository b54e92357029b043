use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use sphinx_previews::config::{LOG_ENV_VAR, Settings};
use sphinx_previews::generator::generate_page;
use sphinx_previews::preview::Variant;
use sphinx_previews::source::GitHubSource;

#[derive(Parser)]
#[command(name = "sphinx-previews")]
#[command(version, about = "Generate the index page of Sphinx documentation previews")]
struct Cli {
    /// Which metadata the page lists
    #[arg(long, value_enum, default_value_t = Variant::Deployed)]
    variant: Variant,

    /// JSON settings file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    owner: Option<String>,

    #[arg(long)]
    repo: Option<String>,

    /// Site path segment previews are served under
    #[arg(long)]
    deploy_repo: Option<String>,

    #[arg(long)]
    preview_branch: Option<String>,

    #[arg(long)]
    pages_branch: Option<String>,

    #[arg(long)]
    preview_dir: Option<String>,

    #[arg(long)]
    per_page: Option<u32>,

    #[arg(long)]
    api_url: Option<String>,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        if let Some(owner) = &self.owner {
            settings.owner = owner.clone();
        }
        if let Some(repo) = &self.repo {
            settings.repo = repo.clone();
        }
        if let Some(deploy_repo) = &self.deploy_repo {
            settings.deploy_repo = Some(deploy_repo.clone());
        }
        if let Some(branch) = &self.preview_branch {
            settings.preview_branch = branch.clone();
        }
        if let Some(branch) = &self.pages_branch {
            settings.pages_branch = branch.clone();
        }
        if let Some(dir) = &self.preview_dir {
            settings.preview_dir = dir.clone();
        }
        if let Some(per_page) = self.per_page {
            settings.per_page = per_page;
        }
        if let Some(api_url) = &self.api_url {
            settings.api_url = api_url.clone();
        }

        Ok(settings)
    }
}

/// Set up the tracing system; logs never go to stdout
fn configure_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level_filter = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env()
        .with_context(|| format!("Failed to parse filters from {} environment variable", LOG_ENV_VAR))?;

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    match &cli.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path {:?}", path))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder.with_ansi(false).with_writer(writer).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = cli.settings()?;
    let source = GitHubSource::from_settings(&settings);

    let page = generate_page(&source, &settings, cli.variant).await;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, page)
                .with_context(|| format!("Failed to write page to {:?}", path))?;
            info!("Wrote preview page to {:?}", path);
        }
        None => print!("{}", page),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = configure_tracing(&cli)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}
