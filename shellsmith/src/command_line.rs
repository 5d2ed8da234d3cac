//! Builder for single-line shell invocations
//!
//! Words are pushed in order and rendered joined by one space. Empty words
//! are skipped, so optional clauses can be pushed unconditionally.

use std::fmt;

/// An ordered list of shell words, possibly spanning a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    words: Vec<String>,
}

impl CommandLine {
    /// Start a command with `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self::default().arg(program)
    }

    /// Start a command with `sudo program`.
    pub fn sudo(program: impl Into<String>) -> Self {
        Self::new("sudo").arg(program)
    }

    /// Start with `sudo` only when `elevated` holds.
    pub fn sudo_if(elevated: bool, program: impl Into<String>) -> Self {
        if elevated {
            Self::sudo(program)
        } else {
            Self::new(program)
        }
    }

    pub fn arg(mut self, word: impl Into<String>) -> Self {
        let word = word.into();
        if !word.is_empty() {
            self.words.push(word);
        }
        self
    }

    pub fn arg_if(self, condition: bool, word: impl Into<String>) -> Self {
        if condition {
            self.arg(word)
        } else {
            self
        }
    }

    pub fn args<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words.into_iter().fold(self, |cmd, w| cmd.arg(w))
    }

    /// Push `flag value`, or nothing when `value` is blank.
    pub fn option(self, flag: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            self
        } else {
            self.arg(flag).arg(value)
        }
    }

    /// Append `| next`.
    pub fn pipe(self, next: CommandLine) -> Self {
        self.arg("|").args(next.words)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn render(&self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<CommandLine> for String {
    fn from(cmd: CommandLine) -> Self {
        cmd.render()
    }
}
