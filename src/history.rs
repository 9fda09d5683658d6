// history.rs

/// Submitted commands plus the recall cursor used by Up/Down.
///
/// `cursor` counts back from the most recent entry: `None` means the input
/// buffer holds live typing, `Some(0)` the newest entry, and so on.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<String>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries, cursor: None }
    }

    /// Append `trimmed` unless it is empty, then stop navigating.
    /// Returns whether an entry was recorded.
    pub fn record_if_nonempty(&mut self, trimmed: &str) -> bool {
        let recorded = !trimmed.is_empty();
        if recorded {
            self.entries.push(trimmed.to_string());
        }
        self.cursor = None;
        recorded
    }

    /// Step toward the oldest entry, clamping there.
    /// Returns the text the input buffer should now hold.
    pub fn navigate_older(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let next = match self.cursor {
            Some(c) if c < last => c + 1,
            Some(_) => last,
            None => 0,
        };
        self.cursor = Some(next);
        self.at_cursor(next)
    }

    /// Step toward live typing. Returns `None` when not navigating,
    /// `Some("")` when the cursor falls back to live input.
    pub fn navigate_newer(&mut self) -> Option<&str> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some("")
            }
            c => {
                self.cursor = Some(c - 1);
                self.at_cursor(c - 1)
            }
        }
    }

    fn at_cursor(&self, cursor: usize) -> Option<&str> {
        self.entries
            .get(self.entries.len() - 1 - cursor)
            .map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The last `n` entries, oldest first.
    pub fn window(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn all(&self) -> &[String] {
        &self.entries
    }
}
