// builtins.rs

use crate::interpreter::{Context, Effect, Outcome, Output};
use crate::registry::HandlerKind;
use crate::theme::Theme;
use itertools::Itertools;

pub const HISTORY_WINDOW: usize = 20;

pub const OPEN_TARGETS: &[(&str, &str)] = &[
    ("github", "https://github.com/irrivero"),
    ("email", "mailto:irene.rivero.casal@gmail.com"),
];

pub fn run_builtin(kind: HandlerKind, args: &[&str], ctx: &Context<'_>) -> Outcome {
    match kind {
        HandlerKind::Clear => Outcome {
            output: Output::Clear,
            effect: None,
        },
        HandlerKind::Echo => Outcome::lines([args.iter().join(" ")]),
        HandlerKind::Date => {
            let now = chrono::Local::now();
            Outcome::lines([now.format("%c").to_string()])
        }
        HandlerKind::History => history(ctx),
        HandlerKind::Open => open(args.first().copied()),
        HandlerKind::Theme => theme(args.first().copied(), ctx.theme),
    }
}

fn history(ctx: &Context<'_>) -> Outcome {
    if ctx.history.is_empty() {
        return Outcome::lines(["No commands in history."]);
    }
    Outcome::lines(
        ctx.history
            .window(HISTORY_WINDOW)
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{}. {}", i + 1, cmd)),
    )
}

fn open(target: Option<&str>) -> Outcome {
    let found = target.and_then(|t| {
        OPEN_TARGETS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(t))
    });
    match found {
        Some(&(name, url)) => {
            Outcome::reveal([format!("Opening {name}..."), url.to_string()])
                .with_effect(Effect::OpenUrl(url))
        }
        None => Outcome::lines([
            format!("Unknown target: {}", target.unwrap_or("")),
            format!(
                "Usage: open <{}>",
                OPEN_TARGETS.iter().map(|(name, _)| name).join("|")
            ),
        ]),
    }
}

fn theme(arg: Option<&str>, current: Theme) -> Outcome {
    match arg.map(str::parse::<Theme>) {
        Some(Ok(theme)) => Outcome::lines([format!("Theme set to {theme}")])
            .with_effect(Effect::SetTheme(theme)),
        _ => Outcome::lines([
            format!("Current theme: {current}"),
            format!(
                "Usage: theme <{}>",
                Theme::ALL.iter().map(|t| t.as_str()).join("|")
            ),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;

    fn ctx(history: &History) -> Context<'_> {
        Context {
            history,
            theme: Theme::Dark,
        }
    }

    #[test]
    fn echo_collapses_whitespace_and_keeps_case() {
        let h = History::new();
        let out = run_builtin(HandlerKind::Echo, &["Hello", "World"], &ctx(&h));
        assert_eq!(out, Outcome::lines(["Hello World"]));
        let out = run_builtin(HandlerKind::Echo, &[], &ctx(&h));
        assert_eq!(out, Outcome::lines([""]));
    }

    #[test]
    fn date_is_one_line() {
        let h = History::new();
        let out = run_builtin(HandlerKind::Date, &[], &ctx(&h));
        match out.output {
            Output::Lines(lines) => {
                assert_eq!(lines.len(), 1);
                assert!(!lines[0].is_empty());
            }
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn history_placeholder_when_empty() {
        let h = History::new();
        let out = run_builtin(HandlerKind::History, &[], &ctx(&h));
        assert_eq!(out, Outcome::lines(["No commands in history."]));
    }

    #[test]
    fn history_shows_last_twenty_numbered_from_one() {
        let mut h = History::new();
        for i in 0..25 {
            h.record_if_nonempty(&format!("echo {i}"));
        }
        let out = run_builtin(HandlerKind::History, &[], &ctx(&h));
        let Output::Lines(lines) = out.output else {
            panic!("history should not be revealed");
        };
        assert_eq!(lines.len(), HISTORY_WINDOW);
        assert_eq!(lines[0], "1. echo 5");
        assert_eq!(lines[19], "20. echo 24");
    }

    #[test]
    fn open_known_target_requests_url() {
        let h = History::new();
        let out = run_builtin(HandlerKind::Open, &["GitHub"], &ctx(&h));
        assert_eq!(
            out,
            Outcome::reveal(["Opening github...", "https://github.com/irrivero"])
                .with_effect(Effect::OpenUrl("https://github.com/irrivero"))
        );
    }

    #[test]
    fn open_unknown_target_lists_choices() {
        let h = History::new();
        let out = run_builtin(HandlerKind::Open, &["myspace"], &ctx(&h));
        assert_eq!(
            out,
            Outcome::lines(["Unknown target: myspace", "Usage: open <github|email>"])
        );
        assert!(run_builtin(HandlerKind::Open, &[], &ctx(&h)).effect.is_none());
    }

    #[test]
    fn theme_rejects_unknown_without_effect() {
        let h = History::new();
        let out = run_builtin(HandlerKind::Theme, &["purple"], &ctx(&h));
        assert_eq!(
            out,
            Outcome::lines(["Current theme: dark", "Usage: theme <dark|light|hacker>"])
        );
    }

    #[test]
    fn theme_accepts_any_case() {
        let h = History::new();
        let out = run_builtin(HandlerKind::Theme, &["LIGHT"], &ctx(&h));
        assert_eq!(
            out,
            Outcome::lines(["Theme set to light"]).with_effect(Effect::SetTheme(Theme::Light))
        );
    }
}
