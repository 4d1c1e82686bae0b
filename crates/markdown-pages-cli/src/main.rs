use anyhow::{Context, Result};
use clap::Parser;
use markdown_pages_config::{Config, DEFAULT_CONFIG_FILE};
use markdown_pages_engine::{io, site};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "markdown-pages")]
#[command(about = "Build a static HTML site from a tree of Markdown pages")]
struct Cli {
    /// URL prefix the site is served under (overrides the config file)
    base_path: Option<String>,

    /// Site config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log each page and file as it is processed
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(base_path) = &cli.base_path {
        config = config.with_base_path(base_path);
    }
    log::debug!("Using config: {config:?}");

    build_site(&config)
}

fn build_site(config: &Config) -> Result<()> {
    if config.static_dir.is_dir() {
        let copied = io::mirror_dir(&config.static_dir, &config.output_dir).with_context(|| {
            format!(
                "copying {} to {}",
                config.static_dir.display(),
                config.output_dir.display()
            )
        })?;
        log::info!(
            "Copied {copied} static files to {}",
            config.output_dir.display()
        );
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            config.static_dir.display()
        );
    }

    let pages = site::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &config.base_path,
    )
    .context("generating pages")?;

    log::info!(
        "Generated {} pages under {} (base path {})",
        pages.len(),
        config.output_dir.display(),
        config.base_path
    );
    Ok(())
}
