// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Interactive input: a small prompting seam plus the retry loop that sits
//! on top of the field validators.

use anyhow::{Result, bail};
use dialoguer::Input;
use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

pub trait Prompter {
    /// Show `prompt` and return one line of input, without the line ending.
    fn read(&mut self, prompt: &str) -> Result<String>;

    /// Print an informational line (menus, confirmations).
    fn say(&mut self, line: &str) -> Result<()>;

    /// Print a rejection message after bad input.
    fn warn(&mut self, line: &str) -> Result<()>;
}

/// Prompts on a real terminal through dialoguer.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn warn(&mut self, line: &str) -> Result<()> {
        eprintln!("{}", line);
        Ok(())
    }
}

/// Line-oriented prompting over any reader/writer pair. Used when stdin is
/// piped and in tests.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed while waiting for: {}", prompt);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn warn(&mut self, line: &str) -> Result<()> {
        self.say(line)
    }
}

/// Pick the prompter that fits the current stdin.
pub fn stdin_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}

/// Ask until `parse` accepts the answer. Rejections are reported and the
/// question repeated; only I/O failures (including end of input) escape.
pub fn ask<T, E, F>(p: &mut dyn Prompter, prompt: &str, mut parse: F) -> Result<T>
where
    F: FnMut(&str) -> Result<T, E>,
    E: Display,
{
    loop {
        let raw = p.read(prompt)?;
        match parse(&raw) {
            Ok(v) => return Ok(v),
            Err(e) => {
                debug!(input = %raw, error = %e, "rejected input");
                p.warn(&e.to_string())?;
            }
        }
    }
}
