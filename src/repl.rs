// repl.rs

use crate::completion::SessionHelper;
use crate::session::{Session, SessionEvent};
use crate::theme::{Theme, ANSI_RESET};
use anyhow::Context as _;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{
    Cmd, CompletionType, ConditionalEventHandler, Config, Editor, Event, EventContext,
    EventHandler, ExternalPrinter, KeyCode, KeyEvent, Modifiers, Movement, RepeatCount,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(5);

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Clone, Copy)]
enum Direction {
    Older,
    Newer,
}

/// Up/Down: walk the session history and replace the edited line.
struct HistoryKey {
    session: Arc<Mutex<Session>>,
    direction: Direction,
}

impl ConditionalEventHandler for HistoryKey {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext,
    ) -> Option<Cmd> {
        let mut session = lock(&self.session);
        session.set_input(ctx.line());
        match self.direction {
            Direction::Older => session.history_older(),
            Direction::Newer => session.history_newer(),
        }
        Some(Cmd::Replace(
            Movement::WholeLine,
            Some(session.input().to_string()),
        ))
    }
}

/// How a session event shows up on the terminal. The echo line is
/// already on screen as the editor's own prompt line.
fn render(event: &SessionEvent, theme: Theme) -> Option<String> {
    match event {
        SessionEvent::Echo(_) => None,
        SessionEvent::Line(line) => Some(theme.paint(line)),
        SessionEvent::Cleared => Some(format!(
            "{}\x1b[2J\x1b[H{}",
            theme.palette().background.ansi_bg(),
            theme.paint(crate::registry::WELCOME)
        )),
        SessionEvent::ThemeChanged(_) => None,
    }
}

/// Ticks the reveal timer and prints queued output above the prompt.
fn spawn_printer<P>(
    session: Arc<Mutex<Session>>,
    events: Receiver<String>,
    mut printer: P,
    started: Instant,
    running: Arc<AtomicBool>,
) -> thread::JoinHandle<()>
where
    P: ExternalPrinter + Send + 'static,
{
    thread::spawn(move || {
        while running.load(Ordering::Relaxed) {
            lock(&session).tick(started.elapsed());
            for text in events.try_iter() {
                if let Err(e) = printer.print(text) {
                    log::debug!("printer closed: {e}");
                    return;
                }
            }
            thread::sleep(TICK);
        }
    })
}

pub fn start_repl(session: Session) -> anyhow::Result<()> {
    let session = Arc::new(Mutex::new(session));
    let started = Instant::now();

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();
    let mut rl: Editor<SessionHelper, DefaultHistory> =
        Editor::with_config(config).context("failed to create line editor")?;
    rl.set_helper(Some(SessionHelper::new(Arc::clone(&session))));
    for (code, direction) in [(KeyCode::Up, Direction::Older), (KeyCode::Down, Direction::Newer)] {
        rl.bind_sequence(
            KeyEvent(code, Modifiers::NONE),
            EventHandler::Conditional(Box::new(HistoryKey {
                session: Arc::clone(&session),
                direction,
            })),
        );
    }

    let (tx, rx) = mpsc::channel();
    {
        let mut s = lock(&session);
        let mut theme = s.theme();
        for line in s.scrollback() {
            println!("{}", theme.paint(line));
        }
        s.subscribe(Box::new(move |event| {
            if let SessionEvent::ThemeChanged(t) = event {
                theme = *t;
            }
            if let Some(text) = render(event, theme) {
                let _ = tx.send(text);
            }
        }));
    }

    let printer = rl
        .create_external_printer()
        .context("failed to create terminal printer")?;
    let running = Arc::new(AtomicBool::new(true));
    let printer_thread = spawn_printer(
        Arc::clone(&session),
        rx,
        printer,
        started,
        Arc::clone(&running),
    );

    let result = loop {
        match rl.readline("$ ") {
            Ok(line) => {
                let mut s = lock(&session);
                s.set_input(line);
                s.submit(started.elapsed());
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break Ok(()),
            Err(err) => break Err(err).context("failed to read input"),
        }
    };

    running.store(false, Ordering::Relaxed);
    let _ = printer_thread.join();
    print!("{ANSI_RESET}");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_and_theme_events_are_not_printed() {
        assert_eq!(render(&SessionEvent::Echo("$ about".into()), Theme::Dark), None);
        assert_eq!(render(&SessionEvent::ThemeChanged(Theme::Light), Theme::Light), None);
    }

    #[test]
    fn lines_use_the_current_theme() {
        let text = render(&SessionEvent::Line("hi".into()), Theme::Hacker);
        assert_eq!(text, Some(Theme::Hacker.paint("hi")));
    }

    #[test]
    fn clear_redraws_welcome() {
        let text = render(&SessionEvent::Cleared, Theme::Dark).unwrap();
        assert!(text.contains("\x1b[2J"));
        assert!(text.ends_with(&Theme::Dark.paint(crate::registry::WELCOME)));
    }
}
