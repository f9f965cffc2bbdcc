// src/showroom.rs
//
// Session state behind the window: the latest listing snapshot, what the
// grid currently shows, and the modal. Front ends feed it load outcomes and
// commands; it never does I/O itself.

use std::{sync::Arc, time::SystemTime};

use crate::{
    config::consts::FETCH_ERROR_MSG,
    core::Record,
    error::LoadError,
    loader::LoadOutcome,
    modal::{Command, Modal},
    view::{CardView, cards},
};

/// Latest successfully loaded records. Replaced wholesale on refresh.
pub type Listings = Arc<[Record]>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Grid {
    /// Nothing has arrived yet.
    Loading,
    Cards(Vec<CardView>),
    /// Last load failed; shown until the next successful one.
    Error(String),
}

#[derive(Debug)]
pub struct Showroom {
    listings: Listings,
    grid: Grid,
    modal: Modal,
    last_refresh: Option<SystemTime>,
    loads_applied: u64,
}

impl Default for Showroom {
    fn default() -> Self {
        Self {
            listings: Arc::from(Vec::new()),
            grid: Grid::Loading,
            modal: Modal::default(),
            last_refresh: None,
            loads_applied: 0,
        }
    }
}

impl Showroom {
    pub fn new() -> Self { Self::default() }

    pub fn listings(&self) -> &[Record] { &self.listings }
    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn modal(&self) -> &Modal { &self.modal }
    pub fn modal_mut(&mut self) -> &mut Modal { &mut self.modal }
    pub fn last_refresh(&self) -> Option<SystemTime> { self.last_refresh }

    /// Apply a background load outcome.
    pub fn apply(&mut self, outcome: LoadOutcome) {
        let LoadOutcome { seq, result } = outcome;
        self.apply_result(result);
        self.loads_applied += 1;
        logd!("Showroom: applied load #{seq} ({} total)", self.loads_applied);
    }

    pub fn apply_result(&mut self, result: Result<Vec<Record>, LoadError>) {
        match result {
            Ok(records) => self.replace_listings(records),
            Err(e) => {
                loge!("Load failed: {e}");
                self.grid = Grid::Error(s!(FETCH_ERROR_MSG));
            }
        }
    }

    /// Swap in a fresh snapshot. The open modal keeps its own copy of the
    /// record it was opened with and is left alone.
    pub fn replace_listings(&mut self, records: Vec<Record>) {
        logf!("Listings: {} record(s)", records.len());
        self.grid = Grid::Cards(cards(&records));
        self.listings = Arc::from(records);
        self.last_refresh = Some(SystemTime::now());
    }

    pub fn dispatch(&mut self, cmd: Command) -> bool {
        self.modal.dispatch(cmd, &self.listings)
    }

    /// One-line summary for the status bar.
    pub fn status_line(&self) -> String {
        match &self.grid {
            Grid::Loading => s!("Loading…"),
            Grid::Error(_) => s!("Last refresh failed; retrying on schedule"),
            Grid::Cards(c) if c.len() == 1 => s!("1 listing"),
            Grid::Cards(c) => format!("{} listings", c.len()),
        }
    }
}
