//! tscheck_diagnostics: Diagnostic values and the message catalog.
//!
//! Every user-facing problem the checker finds becomes a `Diagnostic`
//! appended to a `DiagnosticCollection`. Reporting never unwinds; the
//! collection is the only error channel for user mistakes.

use std::cmp::Ordering;
use std::fmt;
use tscheck_core::text::TextSpan;

pub mod messages;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Suggestion => write!(f, "suggestion"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A message template: code, category and text with `{0}`-style holes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// A realized diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// File name, `None` for global diagnostics.
    pub file: Option<String>,
    /// Program order of `file`, used for presentation sorting.
    pub file_index: Option<u32>,
    pub span: Option<TextSpan>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
    /// Secondary locations explaining the primary one.
    pub related_information: Vec<Diagnostic>,
}

impl Diagnostic {
    /// A diagnostic without location.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            file_index: None,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
            related_information: Vec::new(),
        }
    }

    pub fn with_location(
        file: String,
        file_index: u32,
        span: TextSpan,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            file: Some(file),
            file_index: Some(file_index),
            span: Some(span),
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
            related_information: Vec::new(),
        }
    }

    pub fn with_related(mut self, related: Diagnostic) -> Self {
        self.related_information.push(related);
        self
    }

    pub fn add_related(&mut self, related: Diagnostic) {
        self.related_information.push(related);
    }

    /// Overrides the template's category (errors reported as suggestions).
    pub fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(span) = self.span {
                write!(f, "({})", span.start)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} TS{}: {}", self.category, self.code, self.message_text)
    }
}

/// Replace `{0}`, `{1}`, ... in `template` with `args`.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Diagnostics in the order they were reported.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics whose message has the given code.
    pub fn with_code(&self, code: u32) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    pub fn last_mut(&mut self) -> Option<&mut Diagnostic> {
        self.diagnostics.last_mut()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn extend_from_slice(&mut self, diagnostics: &[Diagnostic]) {
        self.diagnostics.extend_from_slice(diagnostics);
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Sort by program file order, then by start position. Stable, so
    /// diagnostics at one position keep their report order.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(compare_diagnostics);
    }
}

/// Presentation order: file index, then span start. Global diagnostics last.
pub fn compare_diagnostics(a: &Diagnostic, b: &Diagnostic) -> Ordering {
    let file_key = |d: &Diagnostic| d.file_index.unwrap_or(u32::MAX);
    file_key(a)
        .cmp(&file_key(b))
        .then_with(|| {
            let a_pos = a.span.map(|s| s.start).unwrap_or(0);
            let b_pos = b.span.map(|s| s.start).unwrap_or(0);
            a_pos.cmp(&b_pos)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let text = format_message("'{0}' modifier must precede '{1}' modifier.", &["export", "declare"]);
        assert_eq!(text, "'export' modifier must precede 'declare' modifier.");
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::with_location(
            "a.ts".to_string(),
            0,
            TextSpan::new(4, 3),
            &messages::CANNOT_FIND_NAME_0,
            &["foo"],
        );
        assert_eq!(d.to_string(), "a.ts(4): error TS2304: Cannot find name 'foo'.");
    }

    #[test]
    fn test_sort_by_file_index_then_position() {
        let mut c = DiagnosticCollection::new();
        let msg = &messages::DUPLICATE_IDENTIFIER_0;
        c.add(Diagnostic::with_location("b.ts".into(), 1, TextSpan::new(0, 1), msg, &["x"]));
        c.add(Diagnostic::with_location("a.ts".into(), 0, TextSpan::new(9, 1), msg, &["y"]));
        c.add(Diagnostic::with_location("a.ts".into(), 0, TextSpan::new(2, 1), msg, &["z"]));
        c.add(Diagnostic::new(msg, &["g"]));
        c.sort();
        let texts: Vec<_> = c.diagnostics().iter().map(|d| d.message_text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Duplicate identifier 'z'.",
                "Duplicate identifier 'y'.",
                "Duplicate identifier 'x'.",
                "Duplicate identifier 'g'.",
            ]
        );
    }

    #[test]
    fn test_suggestion_category_override() {
        let d = Diagnostic::new(&messages::CANNOT_FIND_NAME_0, &["x"])
            .with_category(DiagnosticCategory::Suggestion);
        assert_ne!(d.category, DiagnosticCategory::Error);
    }
}
