//! User-facing status lines on stderr.
//!
//! Diagnostics go through `tracing`; this is only what a person running the
//! CLI is meant to read.

use console::{Style, Term};

/// Kind of status line, which fixes its prefix and color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tone {
    Note,
    Done,
    Caution,
    Failure,
}

impl Tone {
    fn prefix(self) -> &'static str {
        match self {
            Self::Note | Self::Done => "",
            Self::Caution => "warning: ",
            Self::Failure => "error: ",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Note => Style::new(),
            Self::Done => Style::new().green(),
            Self::Caution => Style::new().yellow(),
            Self::Failure => Style::new().red().bold(),
        }
    }

    fn line(self, msg: &str) -> String {
        format!("{}{msg}", self.prefix())
    }
}

/// Stderr writer for status lines. Write failures are ignored.
pub(crate) struct Output {
    stderr: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stderr: Term::stderr(),
        }
    }

    fn emit(&self, tone: Tone, msg: &str) {
        let styled = tone.style().apply_to(tone.line(msg));
        let _ = self.stderr.write_line(&styled.to_string());
    }

    pub(crate) fn info(&self, msg: &str) {
        self.emit(Tone::Note, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.emit(Tone::Done, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.emit(Tone::Caution, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.emit(Tone::Failure, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_prefixes() {
        assert_eq!(Tone::Note.line("Content: a.json"), "Content: a.json");
        assert_eq!(Tone::Done.line("Wrote page"), "Wrote page");
        assert_eq!(Tone::Caution.line("duplicate id"), "warning: duplicate id");
        assert_eq!(Tone::Failure.line("no config"), "error: no config");
    }
}
