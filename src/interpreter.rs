// interpreter.rs

use crate::builtins::run_builtin;
use crate::history::History;
use crate::parser::ParsedLine;
use crate::registry::{CommandEntry, Registry};
use crate::theme::Theme;

/// How a command's lines reach the scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Appended immediately after the echo line.
    Lines(Vec<String>),
    /// Appended one at a time by the reveal timer.
    Reveal(Vec<String>),
    /// Reset the scrollback to the welcome line.
    Clear,
}

/// Side effects the session applies after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetTheme(Theme),
    OpenUrl(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: Output,
    pub effect: Option<Effect>,
}

impl Outcome {
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output: Output::Lines(lines.into_iter().map(Into::into).collect()),
            effect: None,
        }
    }

    pub fn reveal<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output: Output::Reveal(lines.into_iter().map(Into::into).collect()),
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// Read-only session state visible to handlers.
pub struct Context<'a> {
    pub history: &'a History,
    pub theme: Theme,
}

/// Resolve and dispatch one parsed line. Never fails: unknown input
/// becomes a "Command not found" line.
pub fn interpret(registry: &Registry, line: &ParsedLine<'_>, ctx: &Context<'_>) -> Outcome {
    let Some(word) = line.word else {
        return Outcome::lines(Vec::<String>::new());
    };

    let whole = line.lowered();
    if let Some(key) = registry.multi_word_names().find(|k| *k == whole) {
        if let Some(CommandEntry::Static(lines)) = registry.lookup(key) {
            log::debug!("dispatch multi-word key {key:?}");
            return Outcome::reveal(lines.iter().copied());
        }
    }

    let lowered = word.to_lowercase();
    let resolved = registry.resolve(&lowered);
    match registry.lookup(resolved) {
        Some(CommandEntry::Static(lines)) => {
            log::debug!("dispatch static {resolved:?}");
            Outcome::reveal(lines.iter().copied())
        }
        Some(CommandEntry::Handler(kind)) => {
            log::debug!("dispatch handler {kind:?}");
            run_builtin(kind, &line.args, ctx)
        }
        None => Outcome::lines([format!("Command not found: {word}")]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Outcome {
        run_with(input, &History::new(), Theme::Dark)
    }

    fn run_with(input: &str, history: &History, theme: Theme) -> Outcome {
        let registry = Registry::new();
        let ctx = Context { history, theme };
        interpret(&registry, &ParsedLine::parse(input), &ctx)
    }

    #[test]
    fn static_commands_are_revealed_in_any_case() {
        let expected = run("skills");
        assert!(matches!(&expected.output, Output::Reveal(l) if l.len() == 7));
        assert_eq!(run("  SKILLS  "), expected);
        assert_eq!(run("Skills"), expected);
    }

    #[test]
    fn alias_matches_its_target() {
        assert_eq!(run("ls"), run("projects"));
        assert_eq!(run("WhoAmI"), run("about"));
        assert_eq!(run("info"), run("about"));
    }

    #[test]
    fn unknown_command_names_the_typed_token() {
        assert_eq!(run("foobar"), Outcome::lines(["Command not found: foobar"]));
        assert_eq!(run("FooBar baz"), Outcome::lines(["Command not found: FooBar"]));
    }

    #[test]
    fn blank_input_produces_nothing() {
        assert_eq!(run("   "), Outcome::lines(Vec::<String>::new()));
    }

    #[test]
    fn help_variant_is_matched_on_the_whole_line() {
        let detailed = run("help -a");
        assert!(matches!(&detailed.output, Output::Reveal(l) if l[0] == "Commands:"));
        assert_eq!(run("  HELP -A "), detailed);
        // Extra internal spacing is not the literal key; falls back to plain help.
        assert_eq!(run("help  -a"), run("help"));
    }

    #[test]
    fn clear_is_a_handler() {
        assert_eq!(run("clear").output, Output::Clear);
    }

    #[test]
    fn handlers_see_session_context() {
        let mut history = History::new();
        history.record_if_nonempty("about");
        let out = run_with("history", &history, Theme::Hacker);
        assert_eq!(out, Outcome::lines(["1. about"]));
        let out = run_with("theme", &history, Theme::Hacker);
        assert_eq!(
            out.output,
            Output::Lines(vec![
                "Current theme: hacker".to_string(),
                "Usage: theme <dark|light|hacker>".to_string()
            ])
        );
    }
}
