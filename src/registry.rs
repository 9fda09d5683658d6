// registry.rs

use std::collections::{BTreeMap, HashMap};

pub const WELCOME: &str = "Welcome to Irene's Portfolio! Type 'help' to see available commands.";

/// Commands whose output depends on arguments or session state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HandlerKind {
    Clear,
    Echo,
    Date,
    Open,
    Theme,
    History,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommandEntry {
    Static(&'static [&'static str]),
    Handler(HandlerKind),
}

const HELP: &[&str] = &[
    "Available commands:",
    "- about: Learn about Irene",
    "- projects: View project portfolio",
    "- skills: See technical skills",
    "- contact: Get contact information",
    "- ascii: Say hello to the bunny",
    "- echo <text>: Print text back",
    "- date: Show the current date and time",
    "- open <target>: Open github or email",
    "- theme <name>: Switch between dark, light and hacker",
    "- history: List recent commands",
    "- clear: Clear the terminal",
    "Type 'help -a' for usage details and aliases.",
];

const HELP_ALL: &[&str] = &[
    "Commands:",
    "  about              Who Irene is",
    "  projects           Project portfolio",
    "  skills             Technical skills",
    "  contact            Contact information",
    "  ascii              A little bunny hacker",
    "  echo [text...]     Print the arguments joined by single spaces",
    "  date               Current local date and time",
    "  open <target>      Open a link (github, email)",
    "  theme [name]       Show or set the theme (dark, light, hacker)",
    "  history            Last 20 commands",
    "  clear              Reset the screen",
    "Aliases:",
    "  ls, portfolio  -> projects",
    "  whoami, info   -> about",
    "Keys: Up/Down recall history, Tab completes a command name.",
];

const ABOUT: &[&str] = &[
    "Irene Rivero Casal",
    "Role: System Administrator / DevOps Engineer",
    "Passionate about Linux, automation, and infrastructure.",
];

const PROJECTS: &[&str] = &[
    "1. Webserv - HTTP server in C++",
    "2. Minishell - Custom shell in C",
    "3. Inception - Docker & Virtualization setup",
    "Want to know more? Visit github.com/irrivero",
];

const SKILLS: &[&str] = &[
    "Technical Skills:",
    "- Linux",
    "- Docker",
    "- Bash",
    "- Networking",
    "- MariaDB",
    "- Nginx",
];

const CONTACT: &[&str] = &[
    "Contact Information:",
    "Email: irene.rivero.casal@gmail.com",
    "GitHub: github.com/irrivero",
];

const ASCII: &[&str] = &[
    "       (|_|)",
    "       (o.o)  <-- A little bunny hacker!",
    "       (> <)",
];

const ALIASES: &[(&str, &str)] = &[
    ("ls", "projects"),
    ("whoami", "about"),
    ("info", "about"),
    ("portfolio", "projects"),
];

/// Closed table of commands and aliases, fixed at construction.
#[derive(Debug)]
pub struct Registry {
    commands: BTreeMap<&'static str, CommandEntry>,
    aliases: HashMap<&'static str, &'static str>,
}

impl Registry {
    pub fn new() -> Self {
        let commands = BTreeMap::from([
            ("help", CommandEntry::Static(HELP)),
            ("help -a", CommandEntry::Static(HELP_ALL)),
            ("about", CommandEntry::Static(ABOUT)),
            ("projects", CommandEntry::Static(PROJECTS)),
            ("skills", CommandEntry::Static(SKILLS)),
            ("contact", CommandEntry::Static(CONTACT)),
            ("ascii", CommandEntry::Static(ASCII)),
            ("clear", CommandEntry::Handler(HandlerKind::Clear)),
            ("echo", CommandEntry::Handler(HandlerKind::Echo)),
            ("date", CommandEntry::Handler(HandlerKind::Date)),
            ("open", CommandEntry::Handler(HandlerKind::Open)),
            ("theme", CommandEntry::Handler(HandlerKind::Theme)),
            ("history", CommandEntry::Handler(HandlerKind::History)),
        ]);
        Self {
            commands,
            aliases: ALIASES.iter().copied().collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<CommandEntry> {
        self.commands.get(name.to_lowercase().as_str()).copied()
    }

    /// Single-level alias lookup; unknown names resolve to themselves.
    pub fn resolve<'a>(&self, token: &'a str) -> &'a str {
        match self.aliases.get(token) {
            Some(target) => *target,
            None => token,
        }
    }

    /// Keys containing a space, matched against the whole input line.
    pub fn multi_word_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied().filter(|k| k.contains(' '))
    }

    /// Single-token command names, sorted. Aliases are not included.
    pub fn command_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied().filter(|k| !k.contains(' '))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
