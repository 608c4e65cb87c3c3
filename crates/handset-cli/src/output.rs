//! Output formatting and writing utilities
//!
//! This module renders phone specs and shell messages, with optional
//! colors, to stdout or any other writer.

use colored::Colorize;
use handset_core::MobilePhone;
use std::io::{self, Write};
use tracing::trace;

use crate::error::Result;

/// Output writer that handles colors and the spec listing layout
pub struct OutputWriter {
    use_color: bool,
    separator: String,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(use_color: bool, separator: impl Into<String>) -> Self {
        Self::with_writer(use_color, separator, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        use_color: bool,
        separator: impl Into<String>,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            use_color,
            separator: separator.into(),
            writer,
        }
    }

    /// Write raw output, e.g. a prompt without a line break
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a title banner
    pub fn title(&mut self, title: &str) -> Result<()> {
        let line = format!("=== {} ===", title);
        if self.use_color {
            self.writeln(&line.bright_blue().bold().to_string())
        } else {
            self.writeln(&line)
        }
    }

    /// Write a section header preceded by a blank line
    pub fn section(&mut self, title: &str) -> Result<()> {
        self.writeln("")?;
        if self.use_color {
            self.writeln(&title.bright_blue().to_string())
        } else {
            self.writeln(title)
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        self.writeln("")?;
        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write the five spec lines of a phone followed by the separator
    pub fn phone_specs(&mut self, phone: &MobilePhone) -> Result<()> {
        trace!(phone = ?phone, "Rendering phone specs");
        let formatted = format_phone_specs(phone, &self.separator, self.use_color);
        self.write(&formatted)
    }
}

/// Render a phone as `Label: value` lines plus the separator line
pub fn format_phone_specs(phone: &MobilePhone, separator: &str, use_color: bool) -> String {
    let mut out = String::new();
    for (label, value) in phone.spec_lines() {
        let label = format!("{}:", label);
        if use_color {
            out.push_str(&format!("{} {}\n", label.bold(), value));
        } else {
            out.push_str(&format!("{} {}\n", label, value));
        }
    }
    out.push_str(separator);
    out.push('\n');
    out
}
