use std::collections::VecDeque;

/// Maximum number of entries kept in the history
pub const HISTORY_CAPACITY: usize = 12;

/// Previously displayed image URLs, most recent first.
///
/// Bounded at `HISTORY_CAPACITY`; pushing onto a full history evicts the
/// oldest entry. URLs are stored as given, without validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Insert a URL at the front.
    /// Returns the evicted entry if the history was full.
    pub fn push(&mut self, url: impl Into<String>) -> Option<String> {
        self.entries.push_front(url.into());

        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Read-only view, most recent first
    pub fn list(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|entry| entry == url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
