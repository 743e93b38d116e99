mod app;
mod command;
mod config;
mod controller;
mod demo;
mod effects;
mod render;
mod viewer;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use engine_logging::talent_info;
use talent_source::{HttpTalentSource, JobSource, MemoryTalentSource, TalentSource};

use config::AppConfig;
use controller::ListController;
use viewer::{PrintViewer, SystemBrowser, ViewingContext};

#[derive(Debug, Parser)]
#[command(name = "talent", about = "Search, select, preview and archive talent records")]
struct Args {
    /// RON configuration file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Use the built-in data set instead of the HTTP API.
    #[arg(long)]
    offline: bool,
    /// Print detail urls instead of opening a browser.
    #[arg(long)]
    print_urls: bool,
    /// Write the effective configuration to this path and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;

    if let Some(path) = &args.write_config {
        config.save(path)?;
        return Ok(());
    }

    engine_logging::initialize(config.log_destination, config.log_level, &config.log_file);
    talent_info!("Starting with {:?}", config);

    let (talents, jobs) = if args.offline {
        let source = Arc::new(MemoryTalentSource::new(
            demo::records(),
            demo::jobs(),
            config.page_size,
        ));
        share(source)
    } else {
        let source = Arc::new(
            HttpTalentSource::new(config.http_settings()).context("configuring talent api")?,
        );
        share(source)
    };
    let viewer: Arc<dyn ViewingContext> = if args.print_urls {
        Arc::new(PrintViewer::new(std::io::stdout()))
    } else {
        Arc::new(SystemBrowser)
    };

    let controller = ListController::new(config.response_ordering, talents, jobs, viewer);
    app::run(controller)
}

/// One backend serving both the talent search and the job list.
fn share<S>(source: Arc<S>) -> (Arc<dyn TalentSource>, Arc<dyn JobSource>)
where
    S: TalentSource + JobSource + 'static,
{
    (source.clone(), source)
}
