// session.rs

use crate::completion::complete;
use crate::config::Config;
use crate::history::History;
use crate::interpreter::{interpret, Context, Effect, Output};
use crate::opener::Opener;
use crate::parser::ParsedLine;
use crate::registry::{Registry, WELCOME};
use crate::scrollback::Scrollback;
use crate::store::{Store, HISTORY_KEY, THEME_KEY};
use crate::theme::Theme;
use serde_json::Value;
use std::time::Duration;

/// Change notifications for whatever renders the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// `$ <raw>` for a submitted line.
    Echo(String),
    /// An output line appended to the scrollback.
    Line(String),
    /// The scrollback was reset to the welcome line.
    Cleared,
    ThemeChanged(Theme),
}

pub type Listener = Box<dyn FnMut(&SessionEvent) + Send>;

/// All mutable terminal state: scrollback, input buffer, history, theme.
pub struct Session {
    registry: Registry,
    scrollback: Scrollback,
    history: History,
    theme: Theme,
    input: String,
    reveal_interval: Duration,
    store: Box<dyn Store>,
    opener: Box<dyn Opener>,
    listeners: Vec<Listener>,
}

impl Session {
    /// Build a session from previously persisted state. Missing or
    /// malformed values fall back to an empty history and the dark theme.
    pub fn restore(config: &Config, store: Box<dyn Store>, opener: Box<dyn Opener>) -> Self {
        let history = match store.load(HISTORY_KEY).map(serde_json::from_value::<Vec<String>>) {
            Some(Ok(entries)) => History::from_entries(entries),
            Some(Err(e)) => {
                log::warn!("discarding saved history: {e}");
                History::new()
            }
            None => History::new(),
        };
        let theme = match store.load(THEME_KEY).map(serde_json::from_value::<Theme>) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                log::warn!("discarding saved theme: {e}");
                Theme::default()
            }
            None => Theme::default(),
        };
        log::info!(
            "session restored: {} history entries, theme {theme}",
            history.len()
        );
        Self {
            registry: Registry::new(),
            scrollback: Scrollback::new([WELCOME.to_string(), String::new()]),
            history,
            theme,
            input: String::new(),
            reveal_interval: config.reveal_interval,
            store,
            opener,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn notify(&mut self, event: SessionEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    fn append(&mut self, line: String) {
        self.scrollback.append(line.clone());
        self.notify(SessionEvent::Line(line));
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Up arrow: recall an older command into the input buffer.
    pub fn history_older(&mut self) {
        if let Some(entry) = self.history.navigate_older() {
            self.input = entry.to_string();
        }
        log::trace!("history cursor {:?}", self.history.cursor());
    }

    /// Down arrow: recall a newer command, or clear the buffer when
    /// stepping past the most recent one.
    pub fn history_newer(&mut self) {
        if let Some(entry) = self.history.navigate_newer() {
            self.input = entry.to_string();
        }
    }

    /// Tab: replace the buffer with the single command name it prefixes.
    /// Returns whether the buffer changed.
    pub fn complete_input(&mut self) -> bool {
        match complete(&self.input, self.registry.command_names()) {
            Some(name) => {
                self.input = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Interpret the input buffer as a submitted line at time `now`.
    pub fn submit(&mut self, now: Duration) {
        let raw = std::mem::take(&mut self.input);
        let echo = format!("$ {raw}");
        self.scrollback.append(echo.clone());
        self.notify(SessionEvent::Echo(echo));

        let line = ParsedLine::parse(&raw);
        let ctx = Context {
            history: &self.history,
            theme: self.theme,
        };
        let outcome = interpret(&self.registry, &line, &ctx);

        match outcome.effect {
            Some(Effect::SetTheme(theme)) => self.set_theme(theme),
            Some(Effect::OpenUrl(url)) => {
                if let Err(e) = self.opener.open(url) {
                    log::debug!("open {url}: {e}");
                }
            }
            None => {}
        }

        match outcome.output {
            Output::Lines(lines) => {
                for l in lines {
                    self.append(l);
                }
            }
            Output::Reveal(lines) => {
                self.scrollback.reveal(lines, now, self.reveal_interval);
            }
            Output::Clear => {
                self.scrollback.reset_to(WELCOME);
                self.notify(SessionEvent::Cleared);
            }
        }

        if self.history.record_if_nonempty(line.trimmed) {
            self.persist(HISTORY_KEY, Value::from(self.history.all().to_vec()));
        }
    }

    /// Drive the reveal timer; appends every line due by `now`.
    pub fn tick(&mut self, now: Duration) {
        for line in self.scrollback.tick(now) {
            self.notify(SessionEvent::Line(line));
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist(THEME_KEY, Value::from(theme.as_str()));
        self.notify(SessionEvent::ThemeChanged(theme));
    }

    fn persist(&self, key: &str, value: Value) {
        if let Err(e) = self.store.save(key, &value) {
            log::warn!("could not save {key}: {e}");
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn scrollback(&self) -> &[String] {
        self.scrollback.lines()
    }
}

#[cfg(test)]
impl Session {
    fn is_revealing(&self) -> bool {
        self.scrollback.is_revealing()
    }

    fn history(&self) -> &History {
        &self.history
    }
}
