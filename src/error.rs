//! Error types for reading dashboard documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Character range in source text, as ariadne indexes it
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("invalid dashboard document at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json appends the position to its message; it is kept separately here
        let full = err.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        ContentError::Syntax {
            line: err.line(),
            column: err.column(),
            message,
        }
    }
}

impl ContentError {
    /// Character span of the error within `source`
    ///
    /// serde_json reports byte columns; the offset is moved back to a char
    /// boundary and counted in chars.
    pub fn span(&self, source: &str) -> Span {
        match self {
            ContentError::Syntax { line, column, .. } => {
                let line_start: usize = source
                    .split_inclusive('\n')
                    .take(line.saturating_sub(1))
                    .map(str::len)
                    .sum();
                let mut byte = (line_start + column.saturating_sub(1)).min(source.len());
                while !source.is_char_boundary(byte) {
                    byte -= 1;
                }
                let start = source[..byte].chars().count();
                start..(start + 1).min(source.chars().count())
            }
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span(source);
        let ContentError::Syntax { message, .. } = self;

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid dashboard document")
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
