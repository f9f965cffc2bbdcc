// src/modal.rs
//
// Detail modal + nested fullscreen image viewer, driven by named commands.
//
//   Closed ──OpenDetail(i)──▶ Detail ──OpenImage(k)──▶ Fullscreen
//     ▲                         │  ▲                      │
//     └──CloseDetail / Escape───┘  └──────CloseImage──────┤
//     ▲                                                   │
//     └──────────────────────Escape───────────────────────┘
//
// Navigate(±1) only acts in Fullscreen. Commands that don't apply to the
// current layer are ignored.

use crate::{
    core::Record,
    gallery::Gallery,
    view::DetailView,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Closed,
    Detail,
    Fullscreen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Open the detail view for the card at this position.
    OpenDetail(usize),
    CloseDetail,
    /// Open the fullscreen viewer at this gallery position.
    OpenImage(usize),
    /// Move the fullscreen cursor by ±n, clamped.
    Navigate(isize),
    /// Close only the fullscreen layer.
    CloseImage,
    /// Close every open layer.
    Escape,
}

#[derive(Clone, Debug)]
struct OpenListing {
    view: DetailView,
    gallery: Gallery,
    fullscreen: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Modal {
    open: Option<OpenListing>,
    focus_pending: bool,
}

impl Modal {
    pub fn layer(&self) -> Layer {
        match &self.open {
            None => Layer::Closed,
            Some(o) if o.fullscreen => Layer::Fullscreen,
            Some(_) => Layer::Detail,
        }
    }

    pub fn is_open(&self) -> bool { self.open.is_some() }

    /// Background scrolling is locked while any layer is showing.
    pub fn scroll_locked(&self) -> bool { self.is_open() }

    pub fn detail(&self) -> Option<&DetailView> {
        self.open.as_ref().map(|o| &o.view)
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        self.open.as_ref().map(|o| &o.gallery)
    }

    /// True once after a layer opens; the GUI moves keyboard focus then.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }

    /// Apply one command against the records currently on screen.
    /// Returns true if anything changed.
    pub fn dispatch(&mut self, cmd: Command, records: &[Record]) -> bool {
        let before = self.layer();
        let changed = match cmd {
            Command::OpenDetail(i) => self.open_detail(i, records),

            Command::CloseDetail => {
                let closable = before == Layer::Detail;
                if closable {
                    self.open = None;
                }
                closable
            }

            Command::OpenImage(k) => match self.open.as_mut() {
                Some(o) if !o.fullscreen && !o.gallery.is_empty() => {
                    o.gallery.set(isize::try_from(k).unwrap_or(isize::MAX));
                    o.fullscreen = true;
                    self.focus_pending = true;
                    true
                }
                _ => false,
            },

            Command::Navigate(delta) => match self.open.as_mut() {
                Some(o) if o.fullscreen => o.gallery.step(delta),
                _ => false,
            },

            Command::CloseImage => match self.open.as_mut() {
                Some(o) if o.fullscreen => {
                    o.fullscreen = false;
                    true
                }
                _ => false,
            },

            Command::Escape => self.open.take().is_some(),
        };

        if changed && before != self.layer() {
            logd!("Modal: {:?} → {:?} via {:?}", before, self.layer(), cmd);
        }
        changed
    }

    /// Only from Closed; the card behind an open modal can't be reached.
    fn open_detail(&mut self, i: usize, records: &[Record]) -> bool {
        if self.open.is_some() {
            return false;
        }
        let Some(record) = records.get(i) else {
            logd!("Modal: card #{i} is gone (have {})", records.len());
            return false;
        };
        self.open = Some(OpenListing {
            view: DetailView::from_record(record),
            gallery: Gallery::new(record.image_urls()),
            fullscreen: false,
        });
        self.focus_pending = true;
        true
    }
}
