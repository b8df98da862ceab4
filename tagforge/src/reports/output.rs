//! Output trait for rendering reports.

use std::{
    fmt,
    io::{self, Write},
};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    fn list_item(&mut self, text: &str);

    /// An added item (e.g., generated file).
    fn added_item(&mut self, text: &str);

    /// A removed item (e.g., deleted file).
    fn removed_item(&mut self, text: &str);

    fn warning(&mut self, msg: &str);

    fn preformatted(&mut self, text: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain text lines, to stdout unless built with [`TerminalOutput::to_writer`].
pub struct TerminalOutput<W: Write = io::Stdout> {
    out: W,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn to_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        // a closed stdout is not worth failing a finished command for
        let _ = writeln!(self.out, "{args}");
    }
}

impl<W: Write> Output for TerminalOutput<W> {
    fn section(&mut self, name: &str) {
        self.line(format_args!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(format_args!("{key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.line(format_args!("  - {text}"));
    }

    fn added_item(&mut self, text: &str) {
        self.line(format_args!("  + {text}"));
    }

    fn removed_item(&mut self, text: &str) {
        self.line(format_args!("  - {text}"));
    }

    fn warning(&mut self, msg: &str) {
        self.line(format_args!("warning: {msg}"));
    }

    fn preformatted(&mut self, text: &str) {
        self.line(format_args!("{text}"));
    }
}

/// Render `report` to a string.
#[cfg(test)]
pub fn render_to_string(report: &dyn Report) -> String {
    let mut out = TerminalOutput::to_writer(Vec::new());
    report.render(&mut out);
    String::from_utf8(out.into_inner()).unwrap()
}
