mod app;
mod cli;
mod color;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Result};
use app::LaunchDashApp;
use clap::Parser;
use cli::{Cli, Summary};
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = data::loader::load_file(&cli.data)?;
    log::info!(
        "Loaded {} launches from {} with sites {:?}",
        dataset.len(),
        cli.data.display(),
        dataset.sites()
    );

    if cli.summary {
        let (site, range) = cli.selection(&dataset);
        let summary = Summary::compute(&dataset, &site, range);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow!("running dashboard: {e}"))
}
