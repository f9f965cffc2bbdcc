// src/cli.rs
//
// Terminal front end: one synchronous load, then print. Same view models as
// the GUI, so a card here reads like a card there.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    config::options::{AppOptions, SourceKind},
    core::csv,
    gallery::Gallery,
    loader::{self, Source},
    view::{CardView, DetailView, cards, detail::main_image},
};

#[derive(Parser, Debug)]
#[command(name = "lot-cli", version, about = "Print the used-car inventory in a terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// One summary block per listing, in sheet order
    List(SourceArgs),
    /// Full detail for the listing at INDEX (0-based, as shown by `list`)
    Show {
        index: usize,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Header names as parsed from the first line
    Columns(SourceArgs),
    /// Parsed records re-written as CSV
    Dump(SourceArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// CSV endpoint instead of the built-in sheet
    #[arg(long)]
    pub url: Option<String>,

    /// Local CSV file instead of the network
    #[arg(long, conflicts_with = "url")]
    pub file: Option<PathBuf>,
}

impl SourceArgs {
    fn source_kind(&self) -> SourceKind {
        AppOptions::default()
            .with_overrides(self.url.clone(), self.file.clone(), None)
            .source
    }

    fn open(&self) -> Result<std::sync::Arc<dyn Source>> {
        let kind = self.source_kind();
        loader::source_for(&kind).wrap_err_with(|| format!("cannot open {}", kind.describe()))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Cmd::List(src) => {
            let records = load(&src)?;
            for card in cards(&records) {
                write_card(&mut out, &card)?;
            }
        }
        Cmd::Show { index, source } => {
            let records = load(&source)?;
            let record = records
                .get(index)
                .ok_or_else(|| eyre!("no listing #{index} (have {})", records.len()))?;
            write_detail(&mut out, &DetailView::from_record(record), &Gallery::new(record.image_urls()))?;
        }
        Cmd::Columns(src) => {
            let source = src.open()?;
            let text = source.fetch().wrap_err("fetching listings")?;
            for h in csv::headers(&text) {
                writeln!(out, "{h}")?;
            }
        }
        Cmd::Dump(src) => {
            let records = load(&src)?;
            csv::write_records(&mut out, &records)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn load(src: &SourceArgs) -> Result<Vec<crate::Record>> {
    let source = src.open()?;
    loader::load(&*source).wrap_err_with(|| format!("loading {}", source.describe()))
}

pub fn write_card<W: Write>(mut w: W, card: &CardView) -> io::Result<()> {
    writeln!(w, "[{}] {}", card.index, card.title)?;
    if !card.price.is_empty() {
        writeln!(w, "    {}", card.price)?;
    }
    if !card.details.is_empty() {
        writeln!(w, "    {}", card.details)?;
    }
    if !card.description.is_empty() {
        writeln!(w, "    {}", card.description)?;
    }
    writeln!(w, "    image: {}", card.image_url)?;
    writeln!(w)
}

pub fn write_detail<W: Write>(mut w: W, view: &DetailView, gallery: &Gallery) -> io::Result<()> {
    writeln!(w, "{}", view.title)?;
    if !view.price.is_empty() {
        writeln!(w, "{}", view.price)?;
    }
    for row in &view.specs {
        writeln!(w, "  {:<13}{}", join!(row.label, ":"), row.value)?;
    }
    writeln!(w, "\nDescription\n  {}", view.description)?;
    writeln!(w, "\nFeatures\n  {}", view.features)?;
    writeln!(w, "\nImages")?;
    writeln!(w, "  main: {}", main_image(gallery.urls()))?;
    for (k, url) in gallery.thumbnails() {
        writeln!(w, "  {k}: {url}")?;
    }
    Ok(())
}
