// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use clap::Parser;
use eframe::egui::ViewportBuilder;
use lot_viewer::{
    config::{options::AppOptions, state::AppState},
    gui,
};

/// Browse the published used-car inventory.
#[derive(Parser, Debug)]
#[command(name = "lot_viewer", version)]
struct Args {
    /// CSV endpoint to poll instead of the built-in sheet
    #[arg(long)]
    url: Option<String>,

    /// Read listings from a local CSV file instead of the network
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Seconds between automatic refreshes
    #[arg(long, value_name = "SECS")]
    refresh_secs: Option<u64>,
}

fn main() {
    lot_viewer::log::init();
    let args = Args::parse();

    let options = AppOptions::default().with_overrides(args.url, args.file, args.refresh_secs);
    let state = AppState::new(options);

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w, state.gui.window_h])
            .with_title("Used Car Inventory"),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
