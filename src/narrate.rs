// Lesson narration: every line a lesson prints goes through here.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

use crate::config::OutputConfig;
use crate::error::Result;

pub struct Narrator<W: Write> {
    out: W,
    config: OutputConfig,
}

impl Narrator<io::Stdout> {
    pub fn stdout(config: OutputConfig) -> Self {
        Narrator::new(io::stdout(), config)
    }
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Narrator { out, config }
    }

    /// Lesson title, framed by a rule.
    pub fn heading(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(title.len().max(8));
        if self.config.colors {
            writeln!(self.out, "{}", rule.cyan())?;
            writeln!(self.out, "{}", title.bold().cyan())?;
            writeln!(self.out, "{}", rule.cyan())?;
        } else {
            writeln!(self.out, "{rule}\n{title}\n{rule}")?;
        }
        Ok(())
    }

    pub fn step(&mut self, text: &str) -> Result<()> {
        if self.config.colors {
            writeln!(self.out, "{} {}", "->".green(), text.bold())?;
        } else {
            writeln!(self.out, "-> {text}")?;
        }
        Ok(())
    }

    pub fn show(&mut self, label: &str, value: impl Display) -> Result<()> {
        if self.config.colors {
            writeln!(self.out, "   {}: {}", label.yellow(), value)?;
        } else {
            writeln!(self.out, "   {label}: {value}")?;
        }
        Ok(())
    }

    pub fn note(&mut self, text: &str) -> Result<()> {
        if self.config.colors {
            writeln!(self.out, "   {}", text.dimmed())?;
        } else {
            writeln!(self.out, "   {text}")?;
        }
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
