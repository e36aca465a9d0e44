// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line input for the interactive quiz and tutor loops.

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use sheetwise_core::SheetwiseError;

/// Commands that end an interactive loop.
const QUIT_COMMANDS: &[&str] = &["/quit", "/exit"];

/// A source of prompted lines. `None` ends the loop.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Readline-backed terminal input with in-memory history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self, SheetwiseError> {
        let editor = DefaultEditor::new()
            .map_err(|e| SheetwiseError::Internal(format!("failed to initialize readline: {e}")))?;
        Ok(Self { editor })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if QUIT_COMMANDS.contains(&trimmed) {
                    return None;
                }
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Some(line)
            }
            // Ctrl+C / Ctrl+D
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                None
            }
        }
    }
}

/// Scripted input for tests.
#[cfg(test)]
pub struct Scripted(pub std::collections::VecDeque<String>);

#[cfg(test)]
impl Scripted {
    pub fn new(lines: &[&str]) -> Self {
        Self(lines.iter().map(|l| l.to_string()).collect())
    }
}

#[cfg(test)]
impl LineSource for Scripted {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        let line = self.0.pop_front()?;
        if QUIT_COMMANDS.contains(&line.trim()) {
            None
        } else {
            Some(line)
        }
    }
}
