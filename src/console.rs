//! Console output helpers.
//!
//! Library operations never print directly. They append to a [`Transcript`]
//! and the driver programs print it, which keeps the output assertable.

use colored::Colorize;
use std::fmt;

/// Ordered lines of illustrative output.
///
/// Headings are stored as plain text and only styled when printed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
    headings: Vec<usize>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl fmt::Display) {
        self.lines.push(line.to_string());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// A section heading, preceded by a blank line.
    pub fn banner(&mut self, title: &str) {
        self.blank();
        self.headings.push(self.lines.len());
        self.lines.push(title.to_string());
    }

    pub fn append(&mut self, other: Transcript) {
        let offset = self.lines.len();
        self.headings.extend(other.headings.iter().map(|i| i + offset));
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_heading(&self, index: usize) -> bool {
        self.headings.contains(&index)
    }

    pub fn print(&self) {
        for (i, line) in self.lines.iter().enumerate() {
            if self.is_heading(i) {
                println!("{}", line.bold().cyan());
            } else {
                println!("{}", line);
            }
        }
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Render an amount with whole values keeping one decimal place (`500.0`)
/// and fractions printed in full (`12.25`).
///
/// Always plain notation: `1e7` renders as `10000000.0`, not `1.0E7`.
pub fn amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
