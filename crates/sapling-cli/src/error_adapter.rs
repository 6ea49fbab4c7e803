//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the CLI's standard error types
//! and miette's rich diagnostic formatting. Outline errors are rendered with
//! a snippet of the offending source; every other error is rendered as a
//! plain message with an error code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use crate::{error::CliError, outline::OutlineError};

/// Adapter for an outline error together with its source text.
pub struct OutlineAdapter<'a> {
    /// The wrapped outline error
    error: &'a OutlineError,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> OutlineAdapter<'a> {
    /// Create a new outline adapter.
    pub fn new(error: &'a OutlineError, src: &'a str) -> Self {
        Self { error, src }
    }
}

impl fmt::Debug for OutlineAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineAdapter")
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for OutlineAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.error, f)
    }
}

impl std::error::Error for OutlineAdapter<'_> {}

impl MietteDiagnostic for OutlineAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("sapling::outline"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let primary = self.error.span()?;
        let primary = LabeledSpan::new_primary_with_span(
            Some(self.error.label().to_string()),
            span_to_miette(primary),
        );
        let related = self.error.related_span().map(|(span, message)| {
            LabeledSpan::new_with_span(Some(message.to_string()), span_to_miette(span))
        });

        Some(Box::new(std::iter::once(primary).chain(related)))
    }
}

/// Adapter for [`CliError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Io(_) => "sapling::io",
            CliError::Config(_) => "sapling::config",
            CliError::Outline { .. } => "sapling::outline",
            CliError::Layout(_) => "sapling::layout",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either an outline error with source context or a plain
/// error, providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// An outline error with source location information.
    Outline(OutlineAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Outline(o) => fmt::Display::fmt(o, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Outline(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Outline(o) => o.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Outline(o) => o.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Outline(o) => o.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Outline(o) => o.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a reportable error.
pub fn to_reportable(err: &CliError) -> Reportable<'_> {
    match err {
        CliError::Outline { error, src } => Reportable::Outline(OutlineAdapter::new(error, src)),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

fn span_to_miette(span: std::ops::Range<usize>) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.len())
}
