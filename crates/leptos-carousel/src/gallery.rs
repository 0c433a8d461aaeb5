//! Gallery Viewer State
//!
//! Index paging for a full-screen image viewer. Navigation wraps around
//! and moving to another image puts the viewer back into the loading
//! state until that image reports it has loaded.

/// Viewer position over a list of `len` images
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gallery {
    index: usize,
    len: usize,
    loading: bool,
}

impl Gallery {
    /// Open the viewer on `index` (clamped to the last image)
    pub fn open(index: usize, len: usize) -> Self {
        Self {
            index: index.min(len.saturating_sub(1)),
            len,
            loading: len > 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.show((self.index + 1) % self.len);
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.show((self.index + self.len - 1) % self.len);
    }

    /// Load finished for `index`; stale events for other images are ignored
    pub fn image_loaded(&mut self, index: usize) {
        if index == self.index {
            self.loading = false;
        }
    }

    /// The list changed underneath the viewer
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.index = 0;
            self.loading = false;
        } else if self.index >= len {
            self.show(len - 1);
        }
    }

    /// Staying on the same image keeps its loading state
    fn show(&mut self, index: usize) {
        if index != self.index {
            self.index = index;
            self.loading = true;
        }
    }
}
