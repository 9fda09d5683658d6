// theme.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Hacker,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn ansi_fg(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }
    pub fn ansi_bg(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.0, self.1, self.2)
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub foreground: Rgb,
    pub background: Rgb,
    pub prompt: Rgb,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Hacker];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Hacker => "hacker",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                foreground: Rgb(0xFF, 0xFF, 0xFF),
                background: Rgb(0x00, 0x00, 0x00),
                prompt: Rgb(0xFF, 0xFF, 0xFF),
            },
            Theme::Light => Palette {
                foreground: Rgb(0x1E, 0x1E, 0x1E),
                background: Rgb(0xF5, 0xF5, 0xF5),
                prompt: Rgb(0x00, 0x5F, 0xAF),
            },
            Theme::Hacker => Palette {
                foreground: Rgb(0x33, 0xFF, 0x33),
                background: Rgb(0x00, 0x00, 0x00),
                prompt: Rgb(0x00, 0xFF, 0x00),
            },
        }
    }

    /// Wrap `text` in the theme's foreground colour.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.palette().foreground.ansi_fg(), text, ANSI_RESET)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}
