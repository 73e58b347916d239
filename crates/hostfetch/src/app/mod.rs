//! CLI application layer and composition root wiring.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::app::commands::Cli;
use crate::collect;
use crate::collect::SystemHost;
use crate::common::color_init;
use crate::common::telemetry;
use crate::report;

pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<()> {
        let cli = Cli::parse();
        telemetry::init_tracing(if cli.verbose { "debug" } else { "warn" });
        color_init(cli.no_color);

        let snapshot = collect::collect(&SystemHost);
        debug!(os = %snapshot.os, kernel = %snapshot.kernel, "snapshot collected");

        report::print(&snapshot)?;
        Ok(())
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
