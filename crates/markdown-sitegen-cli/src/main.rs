//! markdown-sitegen - builds a static site from a folder of markdown pages

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use markdown_sitegen_config::SiteConfig;
use markdown_sitegen_engine::io;

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(version, about = "Static site generator for markdown content", long_about = None)]
#[command(after_help = "EXAMPLES:
    markdown-sitegen                 Build with ./sitegen.toml or defaults
    markdown-sitegen /repo-name/     Build for hosting under /repo-name/
    markdown-sitegen --output docs   Write pages to ./docs
    markdown-sitegen --content pages --save-config
                                     Remember settings in ./sitegen.toml")]
struct Cli {
    /// Base path for root-relative links
    #[arg(value_name = "BASE_PATH")]
    base: Option<String>,

    /// Config file (defaults to ./sitegen.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base path for root-relative links
    #[arg(long, value_name = "PATH", conflicts_with = "base")]
    base_path: Option<String>,

    /// Directory of markdown sources
    #[arg(long, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Directory of assets copied as-is
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Output directory, emptied before each build
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(SiteConfig::config_path)
    }

    /// Flags win over the config file.
    fn apply_overrides(self, mut config: SiteConfig) -> SiteConfig {
        if let Some(base_path) = self.base_path.or(self.base) {
            config.base_path = base_path;
        }
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(template) = self.template {
            config.template_path = template;
        }
        config
    }
}

#[derive(Debug, PartialEq, Eq)]
struct BuildSummary {
    assets: usize,
    pages: usize,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    match run(Cli::parse()) {
        Ok(Some(summary)) => {
            log::info!(
                "Site built: {} pages, {} static files",
                summary.pages,
                summary.assets
            );
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the site, or only saves the settings when `--save-config` is set.
fn run(cli: Cli) -> Result<Option<BuildSummary>> {
    let save_config = cli.save_config;
    let config_path = cli.config_path();
    let optional = cli.config.is_none() || save_config;
    let config = cli.apply_overrides(load_config(&config_path, optional)?);

    if save_config {
        config
            .save_to_path(&config_path)
            .with_context(|| format!("failed to save config to {}", config_path.display()))?;
        log::info!("Saved config to {}", config_path.display());
        return Ok(None);
    }

    build(&config).map(Some)
}

/// A missing file falls back to defaults only when `optional`.
fn load_config(config_path: &Path, optional: bool) -> Result<SiteConfig> {
    log::info!("Config path: {}", config_path.display());

    match SiteConfig::load_from_path(config_path)? {
        Some(config) => Ok(config),
        None if optional => {
            log::warn!("No config file found, using defaults");
            Ok(SiteConfig::default())
        }
        None => anyhow::bail!("config file not found: {}", config_path.display()),
    }
}

/// Checks inputs before anything is deleted.
fn validate_layout(config: &SiteConfig) -> Result<()> {
    io::validate_content_dir(&config.content_dir)?;
    if !config.template_path.is_file() {
        anyhow::bail!("template not found: {}", config.template_path.display());
    }

    let output = resolve(&config.output_dir)?;
    for (name, dir) in [
        ("content", &config.content_dir),
        ("static", &config.static_dir),
    ] {
        if resolve(dir)?.starts_with(&output) {
            anyhow::bail!(
                "output directory {} would delete the {name} directory {}",
                config.output_dir.display(),
                dir.display()
            );
        }
    }

    Ok(())
}

/// Absolute form of `path`, following symlinks when it exists.
fn resolve(path: &Path) -> Result<PathBuf> {
    let resolved = if path.exists() {
        path.canonicalize()
    } else {
        std::path::absolute(path)
    };
    resolved.with_context(|| format!("failed to resolve {}", path.display()))
}

fn build(config: &SiteConfig) -> Result<BuildSummary> {
    validate_layout(config)?;

    io::clear_dir(&config.output_dir).with_context(|| {
        format!(
            "failed to clear output directory {}",
            config.output_dir.display()
        )
    })?;

    let assets = if config.static_dir.is_dir() {
        io::copy_dir_recursive(&config.static_dir, &config.output_dir).with_context(|| {
            format!(
                "failed to copy static files from {}",
                config.static_dir.display()
            )
        })?
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            config.static_dir.display()
        );
        0
    };

    let pages = io::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &config.base_path,
    )
    .with_context(|| {
        format!(
            "failed to generate pages from {}",
            config.content_dir.display()
        )
    })?;

    Ok(BuildSummary {
        assets,
        pages: pages.len(),
    })
}
