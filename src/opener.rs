// opener.rs

use std::process::{Command, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("failed to launch {launcher}: {source}")]
    Launch {
        launcher: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Opens a URL outside the terminal. Callers ignore failures.
pub trait Opener: Send {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Hands the URL to the platform launcher without waiting for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> (&'static str, Command) {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            ("open", cmd)
        } else if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            ("cmd", cmd)
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            ("xdg-open", cmd)
        }
    }
}

impl Opener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        let (launcher, mut cmd) = Self::command(url);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| OpenError::Launch { launcher, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_matches_platform() {
        let (launcher, cmd) = SystemOpener::command("https://example.com");
        let program = cmd.get_program().to_string_lossy().into_owned();
        if cfg!(target_os = "macos") {
            assert_eq!(launcher, "open");
        } else if cfg!(windows) {
            assert_eq!(program, "cmd");
        } else {
            assert_eq!(program, "xdg-open");
            let args: Vec<_> = cmd.get_args().collect();
            assert_eq!(args, ["https://example.com"]);
        }
    }

    #[test]
    fn launch_error_names_the_launcher() {
        let err = OpenError::Launch {
            launcher: "xdg-open",
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("failed to launch xdg-open"));
    }
}
