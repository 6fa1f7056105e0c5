//! Navigation seam.
//!
//! The gate never talks to a browser history directly; it asks a
//! [`Navigator`] to replace the current entry.

/// Minimal router interface.
pub trait Navigator {
    /// Path of the current history entry.
    fn current(&self) -> &str;

    /// Add a new history entry.
    fn push(&mut self, path: &str);

    /// Overwrite the current history entry (no way back to it).
    fn replace(&mut self, path: &str);
}

/// In-memory history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryNavigator {
    entries: Vec<String>,
    replacements: usize,
}

impl HistoryNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            replacements: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// How many times `replace` was called.
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    /// Go one entry back; returns the new current path, or `None` at the start.
    pub fn back(&mut self) -> Option<&str> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop();
        Some(self.current())
    }
}

impl Navigator for HistoryNavigator {
    fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    fn push(&mut self, path: &str) {
        self.entries.push(path.to_string());
    }

    fn replace(&mut self, path: &str) {
        match self.entries.last_mut() {
            Some(last) => *last = path.to_string(),
            None => self.entries.push(path.to_string()),
        }
        self.replacements += 1;
    }
}
