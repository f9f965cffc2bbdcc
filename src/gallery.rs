// src/gallery.rs
//
// Image cursor for the open listing. Index-based: the URLs are fixed when
// the detail view opens and navigation only ever moves the cursor.

use crate::config::consts::SWIPE_THRESHOLD_PX;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    urls: Vec<String>,
    index: usize,
}

impl Gallery {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls, index: 0 }
    }

    pub fn urls(&self) -> &[String] { &self.urls }
    pub fn len(&self) -> usize { self.urls.len() }
    pub fn is_empty(&self) -> bool { self.urls.is_empty() }
    pub fn index(&self) -> usize { self.index }

    pub fn current(&self) -> Option<&str> {
        self.urls.get(self.index).map(String::as_str)
    }

    /// Everything after the main image, with its gallery position.
    pub fn thumbnails(&self) -> impl Iterator<Item = (usize, &str)> {
        self.urls.iter().enumerate().skip(1).map(|(k, u)| (k, u.as_str()))
    }

    /// Move to `k`, clamped to `[0, len-1]`. No-op on an empty gallery.
    /// Returns true if the cursor moved.
    pub fn set(&mut self, k: isize) -> bool {
        if self.urls.is_empty() {
            return false;
        }
        let last = self.urls.len() - 1;
        let clamped = k.clamp(0, last as isize) as usize;
        let moved = clamped != self.index;
        self.index = clamped;
        moved
    }

    /// Relative move, clamped (no wraparound).
    pub fn step(&mut self, delta: isize) -> bool {
        self.set(self.index as isize + delta)
    }

    /// Previous control is enabled everywhere except the first image.
    pub fn can_prev(&self) -> bool {
        !self.urls.is_empty() && self.index > 0
    }

    /// Next control is enabled everywhere except the last image.
    pub fn can_next(&self) -> bool {
        !self.urls.is_empty() && self.index + 1 < self.urls.len()
    }
}

/// Horizontal swipe detection, judged once at release.
#[derive(Clone, Copy, Debug, Default)]
pub struct Swipe {
    start_x: Option<f32>,
}

impl Swipe {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn is_tracking(&self) -> bool { self.start_x.is_some() }

    /// Finish the gesture. Right swipe → previous (-1), left swipe →
    /// next (+1), anything shorter than the threshold → None.
    pub fn end(&mut self, x: f32) -> Option<isize> {
        let start = self.start_x.take()?;
        let dx = x - start;
        if dx.abs() < SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if dx > 0.0 { -1 } else { 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_ignores_everything() {
        let mut g = Gallery::new(Vec::new());
        assert!(!g.set(3));
        assert!(!g.step(1));
        assert_eq!(g.current(), None);
        assert!(!g.can_prev());
        assert!(!g.can_next());
    }

    #[test]
    fn single_image_has_no_controls() {
        let g = Gallery::new(vec![s!("a")]);
        assert!(!g.can_prev());
        assert!(!g.can_next());
        assert_eq!(g.thumbnails().count(), 0);
    }

    #[test]
    fn swipe_without_begin_is_ignored() {
        let mut s = Swipe::default();
        assert_eq!(s.end(500.0), None);
    }
}
