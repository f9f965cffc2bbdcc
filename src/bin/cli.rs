// src/bin/cli.rs
use lot_viewer::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    lot_viewer::log::init();
    cli::run()
}
