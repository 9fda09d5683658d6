// scrollback.rs

use std::collections::VecDeque;
use std::time::Duration;

/// Lines scheduled by one reveal invocation; line `i` is due at
/// `started + interval * (i + 1)`.
#[derive(Debug)]
struct RevealSequence {
    next_due: Duration,
    interval: Duration,
    pending: VecDeque<String>,
}

/// Displayed lines plus the reveal sequences still draining into them.
///
/// In-flight reveals are never cancelled: they keep appending across
/// later submissions and across `clear`. Reveals started close together
/// interleave in due-time order.
#[derive(Debug)]
pub struct Scrollback {
    lines: Vec<String>,
    reveals: Vec<RevealSequence>,
}

impl Scrollback {
    pub fn new(initial: impl IntoIterator<Item = String>) -> Self {
        Self {
            lines: initial.into_iter().collect(),
            reveals: Vec::new(),
        }
    }

    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Replace every displayed line with `line`.
    pub fn reset_to(&mut self, line: impl Into<String>) {
        self.lines.clear();
        self.lines.push(line.into());
    }

    /// Schedule `lines` to be appended one per `interval`, starting one
    /// interval after `now`. Returns immediately.
    pub fn reveal(&mut self, lines: Vec<String>, now: Duration, interval: Duration) {
        if lines.is_empty() {
            return;
        }
        self.reveals.push(RevealSequence {
            next_due: now + interval,
            interval,
            pending: lines.into(),
        });
    }

    /// Append every scheduled line due at or before `now`, in due order.
    /// Returns the lines appended by this call.
    pub fn tick(&mut self, now: Duration) -> Vec<String> {
        let mut fired = Vec::new();
        loop {
            let next = self
                .reveals
                .iter()
                .enumerate()
                .filter(|(_, r)| r.next_due <= now)
                .min_by_key(|(_, r)| r.next_due)
                .map(|(i, _)| i);
            let Some(i) = next else { break };
            let seq = &mut self.reveals[i];
            if let Some(line) = seq.pending.pop_front() {
                seq.next_due += seq.interval;
                self.lines.push(line.clone());
                fired.push(line);
            }
            if self.reveals[i].pending.is_empty() {
                self.reveals.remove(i);
            }
        }
        fired
    }

    pub fn is_revealing(&self) -> bool {
        !self.reveals.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
