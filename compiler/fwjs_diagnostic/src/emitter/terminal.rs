//! Human-readable diagnostic output with optional ANSI colors.
//!
//! With a source attached, every label is rendered as
//!
//! ```text
//! error[E6003]: division by zero
//!   --> demo.fwjs:2:7
//!    |
//!  2 | print(x / 0);
//!    |       ^^^^^ divisor is zero
//! ```
//!
//! Without one, labels fall back to raw byte ranges.

use std::io::{self, Write};

use fwjs_ir::Span;

use super::DiagnosticEmitter;
use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const HELP: &str = "\x1b[1;32m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode, as chosen by `--color`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text the diagnostics refer to.
struct SourceFile {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Render labels against `text`, reporting locations as `path:line:col`.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(SourceFile {
            path: path.into(),
            lines: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_label(&mut self, label: &Label) {
        match self.source.take() {
            Some(source) => {
                self.write_snippet(&source, label);
                self.source = Some(source);
            }
            None => {
                let _ = write!(self.writer, "  --> {:?}: ", label.span);
                self.write_colored(&label.message, colors::ERROR);
                let _ = writeln!(self.writer);
            }
        }
    }

    fn write_snippet(&mut self, source: &SourceFile, label: &Label) {
        let (line, col) = source.lines.offset_to_line_col(&source.text, label.span.start);
        let text = source.lines.line_text(&source.text, line).unwrap_or("");
        let line_no = line.to_string();
        let pad = " ".repeat(line_no.len());

        let _ = writeln!(self.writer, "{pad}--> {}:{line}:{col}", source.path);
        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{line_no} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {text}");
        self.write_colored(&format!("{pad} |"), colors::GUTTER);

        let indent = " ".repeat(usize::try_from(col.saturating_sub(1)).unwrap_or(0));
        let width = underline_width(source, label.span, line);
        let _ = write!(self.writer, " {indent}");
        self.write_colored(&"^".repeat(width), colors::ERROR);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, colors::ERROR);
        }
        let _ = writeln!(self.writer);
    }

    fn write_trailer(&mut self, kind: &str, color: &str, text: &str) {
        let _ = write!(self.writer, "  = ");
        self.write_colored(kind, color);
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

/// Characters covered by `span` on `line`, at least one.
fn underline_width(source: &SourceFile, span: Span, line: u32) -> usize {
    let line_end = source
        .lines
        .line_start_offset(line.saturating_add(1))
        .unwrap_or(u32::try_from(source.text.len()).unwrap_or(u32::MAX));
    let end = span.end.min(line_end);
    let covered = source
        .text
        .get(span.to_range().start..usize::try_from(end).unwrap_or(0))
        .map_or(0, |s| s.trim_end_matches(['\n', '\r']).chars().count());
    covered.max(1)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        if self.colors {
            let _ = write!(self.writer, "{}[{}]{}", colors::BOLD, diagnostic.code, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }
        for note in &diagnostic.notes {
            self.write_trailer("note", colors::BOLD, note);
        }
        for suggestion in &diagnostic.suggestions {
            self.write_trailer("help", colors::HELP, suggestion);
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(self.writer, ": aborting due to {error_count} previous errors");
        }
    }
}
