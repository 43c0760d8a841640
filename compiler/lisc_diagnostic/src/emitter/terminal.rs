//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When the source text is attached, labels are rendered as an annotated
//! snippet; otherwise they fall back to raw byte ranges.

use std::io::Write;

use lisc_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode `{other}`; expected auto, always or never"
            )),
        }
    }
}

/// Source text attached to an emitter for snippet rendering.
struct SourceView<'src> {
    text: &'src str,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceView<'src>>,
    file_path: Option<&'src str>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text that diagnostic spans point into.
    #[must_use]
    pub fn with_source(mut self, source: &'src str) -> Self {
        self.source = Some(SourceView {
            text: source,
            lines: LineOffsetTable::build(source),
        });
        self
    }

    /// Name shown in the `-->` location header.
    #[must_use]
    pub fn with_file_path(mut self, path: &'src str) -> Self {
        self.file_path = Some(path);
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn label_color(label: &Label) -> &'static str {
        if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        }
    }

    /// Labels without source: `--> 5..6: message`.
    fn emit_labels_fallback(&mut self, labels: &[Label]) {
        for label in labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_colored(&label.message, Self::label_color(label));
            let _ = writeln!(self.writer);
        }
    }

    /// Labels with source: location header, then each label's line with an
    /// underline beneath it.
    fn emit_snippet(&mut self, diagnostic: &Diagnostic) {
        let Some(view) = self.source.take() else {
            return;
        };

        let primary = diagnostic
            .primary_span()
            .or_else(|| diagnostic.labels.first().map(|l| l.span))
            .unwrap_or_default();
        let (line, col) = view.lines.offset_to_line_col(view.text, primary.start);
        let path = self.file_path.unwrap_or("<input>");

        let max_line = diagnostic
            .labels
            .iter()
            .map(|l| view.lines.line_from_offset(l.span.start))
            .max()
            .unwrap_or(line);
        let gutter = max_line.to_string().len();
        let blank = " ".repeat(gutter);

        let _ = writeln!(self.writer, "{blank}--> {path}:{line}:{col}");
        let _ = writeln!(self.writer, "{blank} |");

        let mut last_line = None;
        for label in &diagnostic.labels {
            let (label_line, label_col) = view.lines.offset_to_line_col(view.text, label.span.start);
            if last_line != Some(label_line) {
                let text = view.lines.line_text(view.text, label_line).unwrap_or("");
                let _ = writeln!(self.writer, "{label_line:>gutter$} | {text}");
                last_line = Some(label_line);
            }

            let indent = " ".repeat((label_col - 1) as usize);
            let mark = if label.is_primary { "^" } else { "-" };
            let underline = mark.repeat(underline_width(view.text, label.span));
            let _ = write!(self.writer, "{blank} | {indent}");
            self.write_colored(&format!("{underline} {}", label.message), Self::label_color(label));
            let _ = writeln!(self.writer);
        }
        let _ = writeln!(self.writer, "{blank} |");

        self.source = Some(view);
    }
}

/// Number of characters a span covers, at least one so point spans stay
/// visible.
fn underline_width(source: &str, span: Span) -> usize {
    source
        .get(span.to_range())
        .map_or(0, |text| text.chars().count())
        .max(1)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if self.source.is_some() && !diagnostic.labels.is_empty() {
            self.emit_snippet(diagnostic);
        } else {
            self.emit_labels_fallback(&diagnostic.labels);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
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
