// src/loader.rs
//
// Fetch → parse → hand records to whoever is listening.
//
// - Source: where the CSV text comes from (HTTP or a local file).
// - RefreshSchedule: fires on the first poll, then every interval,
//   regardless of how earlier loads ended.
// - Loader: runs each load on its own worker thread and reports back over
//   a channel. Loads are fire-and-forget: nothing is cancelled, and
//   outcomes are delivered in completion order, so a slow stale response
//   may land after a newer one.

use std::{
    path::PathBuf,
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::{Duration, Instant},
};

use reqwest::blocking::Client;

use crate::{
    config::options::SourceKind,
    core::{Record, csv},
    error::LoadError,
    net,
};

/* ---------------- Sources ---------------- */

pub trait Source: Send + Sync {
    /// Raw CSV text.
    fn fetch(&self) -> Result<String, LoadError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, LoadError> {
        Ok(Self { url: url.into(), client: net::client()? })
    }
}

impl Source for HttpSource {
    fn fetch(&self) -> Result<String, LoadError> {
        net::http_get(&self.client, &self.url)
    }
    fn describe(&self) -> String { self.url.clone() }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Source for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path)
            .map_err(|source| LoadError::Io { path: self.path.clone(), source })
    }
    fn describe(&self) -> String { self.path.display().to_string() }
}

pub fn source_for(kind: &SourceKind) -> Result<Arc<dyn Source>, LoadError> {
    let src: Arc<dyn Source> = match kind {
        SourceKind::Url(url) => Arc::new(HttpSource::new(url.as_str())?),
        SourceKind::File(path) => Arc::new(FileSource::new(path.clone())),
    };
    Ok(src)
}

/// One synchronous load: fetch then parse.
pub fn load(source: &dyn Source) -> Result<Vec<Record>, LoadError> {
    let text = source.fetch()?;
    let records = csv::parse_records(&text);
    logd!("Load: {} → {} record(s)", source.describe(), records.len());
    Ok(records)
}

/* ---------------- Schedule ---------------- */

#[derive(Clone, Debug)]
pub struct RefreshSchedule {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RefreshSchedule {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next_due: None }
    }

    /// True when a load should start now. Re-arms for `now + interval`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now < due => false,
            _ => {
                self.next_due = Some(now + self.interval);
                true
            }
        }
    }

    /// Manual refresh: treat `now` as a tick so the next automatic one
    /// is a full interval away.
    pub fn restart(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// How long the UI may sleep before the next tick is due.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }
}

/* ---------------- Background loader ---------------- */

#[derive(Debug)]
pub struct LoadOutcome {
    /// Start order of the load; outcomes may arrive out of this order.
    pub seq: u64,
    pub result: Result<Vec<Record>, LoadError>,
}

type Waker = Arc<dyn Fn() + Send + Sync>;

pub struct Loader {
    source: Arc<dyn Source>,
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
    next_seq: u64,
    waker: Option<Waker>,
}

impl Loader {
    pub fn new(source: Arc<dyn Source>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx, next_seq: 0, waker: None }
    }

    /// Called from the worker after it has sent its outcome
    /// (the GUI uses this to request a repaint).
    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.waker = Some(Arc::new(waker));
        self
    }

    /// Start one load in the background. Returns its sequence number.
    pub fn spawn(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let waker = self.waker.clone();

        logd!("Load: start #{seq} from {}", source.describe());

        let spawned = thread::Builder::new()
            .name(format!("listing-load-{seq}"))
            .spawn(move || {
                let result = load(&*source);
                // receiver gone means the app is shutting down
                let _ = tx.send(LoadOutcome { seq, result });
                if let Some(wake) = waker {
                    wake();
                }
            });

        if let Err(e) = spawned {
            loge!("Load: cannot spawn worker #{seq}: {e}");
            let _ = self.tx.send(LoadOutcome {
                seq,
                result: Err(LoadError::Other(format!("cannot start load: {e}"))),
            });
        }
        seq
    }

    /// Drain every outcome that has arrived, in arrival order.
    pub fn drain(&self) -> Vec<LoadOutcome> {
        self.rx.try_iter().collect()
    }
}
