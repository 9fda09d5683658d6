// completion.rs

use crate::session::Session;
use crate::theme::ANSI_RESET;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::borrow::Cow;
use std::sync::{Arc, Mutex};

/// The one name in `names` that `prefix` starts, ignoring case.
/// Zero or several matches yield `None`.
pub fn complete<'n>(prefix: &str, names: impl IntoIterator<Item = &'n str>) -> Option<&'n str> {
    let prefix = prefix.to_lowercase();
    let mut matches = names.into_iter().filter(|n| n.starts_with(&prefix));
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Line-editor glue: Tab completion and the themed prompt.
pub struct SessionHelper {
    session: Arc<Mutex<Session>>,
}

impl SessionHelper {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }
}

impl Completer for SessionHelper {
    type Candidate = Pair;
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        // Only the whole buffer is a completion prefix.
        if pos != line.len() {
            return Ok((pos, vec![]));
        }
        let mut session = self.session.lock().unwrap_or_else(|e| e.into_inner());
        session.set_input(line);
        if !session.complete_input() {
            return Ok((pos, vec![]));
        }
        let name = session.input().to_string();
        Ok((
            0,
            vec![Pair {
                display: name.clone(),
                replacement: name,
            }],
        ))
    }
}

impl Hinter for SessionHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for SessionHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        let theme = self.session.lock().unwrap_or_else(|e| e.into_inner()).theme();
        Cow::Owned(format!(
            "{}{}{}",
            theme.palette().prompt.ansi_fg(),
            prompt,
            ANSI_RESET
        ))
    }
}

impl Validator for SessionHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for SessionHelper {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::opener::SystemOpener;
    use crate::store::MemoryStore;
    use rustyline::history::DefaultHistory;

    fn helper() -> SessionHelper {
        let session = Session::restore(
            &Config::default(),
            Box::new(MemoryStore::new()),
            Box::new(SystemOpener),
        );
        SessionHelper::new(Arc::new(Mutex::new(session)))
    }

    /// Line as the editor would leave it after taking the first candidate.
    fn tab(helper: &SessionHelper, line: &str, pos: usize) -> String {
        let history = DefaultHistory::new();
        let (start, candidates) = helper
            .complete(line, pos, &Context::new(&history))
            .unwrap();
        match candidates.first() {
            Some(pair) => format!("{}{}{}", &line[..start], pair.replacement, &line[pos..]),
            None => line.to_string(),
        }
    }

    const NAMES: &[&str] = &["about", "ascii", "clear", "contact", "history", "skills"];

    #[test]
    fn unique_prefix_completes() {
        assert_eq!(complete("sk", NAMES.iter().copied()), Some("skills"));
        assert_eq!(complete("AB", NAMES.iter().copied()), Some("about"));
        assert_eq!(complete("history", NAMES.iter().copied()), Some("history"));
    }

    #[test]
    fn ambiguous_or_missing_prefix_does_nothing() {
        assert_eq!(complete("a", NAMES.iter().copied()), None);
        assert_eq!(complete("", NAMES.iter().copied()), None);
        assert_eq!(complete("zz", NAMES.iter().copied()), None);
    }

    #[test]
    fn editor_completes_at_end_of_line() {
        let helper = helper();
        assert_eq!(tab(&helper, "sk", 2), "skills");
        assert_eq!(tab(&helper, "c", 1), "c");
    }

    #[test]
    fn editor_leaves_line_alone_with_cursor_mid_line() {
        let helper = helper();
        assert_eq!(tab(&helper, "sk", 1), "sk");
        assert_eq!(tab(&helper, "his", 0), "his");
    }

    #[test]
    fn whole_buffer_is_the_prefix() {
        assert_eq!(complete("skills now", NAMES.iter().copied()), None);
    }
}
