//! Indented-outline reader.
//!
//! An outline describes a tree one label per line; each level of nesting is
//! one tab or two spaces of indentation:
//!
//! ```text
//! # comment lines and blank lines are ignored
//! bright
//!   sun
//!     dot
//!   moon
//! ```
//!
//! The public entry point is [`parse`], which returns a [`Tree`] whose node
//! payloads are the labels, or an [`OutlineError`] carrying the byte span of
//! the offending text.

use std::ops::Range;

use log::{debug, trace};
use thiserror::Error;
use winnow::{
    Parser as _,
    ascii::line_ending,
    combinator::opt,
    error::{ContextError, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{take_till, take_while},
};

use sapling::{NodeId, Tree};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// Errors found while reading an outline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutlineError {
    #[error("outline contains no entries")]
    Empty,

    #[error("indentation must be made of tabs or pairs of spaces")]
    OddIndent { span: Range<usize> },

    #[error("entry is indented more than one level below the entry above it")]
    SkippedLevel { span: Range<usize> },

    #[error("first entry must not be indented")]
    IndentedRoot { span: Range<usize> },

    #[error("outline has more than one root entry")]
    MultipleRoots {
        span: Range<usize>,
        first: Range<usize>,
    },

    #[error("unreadable outline line")]
    Syntax { span: Range<usize> },
}

impl OutlineError {
    /// Returns the primary span of the error, if it points into the source
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::Empty => None,
            Self::OddIndent { span }
            | Self::SkippedLevel { span }
            | Self::IndentedRoot { span }
            | Self::MultipleRoots { span, .. }
            | Self::Syntax { span } => Some(span.clone()),
        }
    }

    /// Returns a secondary span giving context, if any
    pub fn related_span(&self) -> Option<(Range<usize>, &'static str)> {
        match self {
            Self::MultipleRoots { first, .. } => Some((first.clone(), "first root is here")),
            _ => None,
        }
    }

    /// Returns a short label for the primary span
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty outline",
            Self::OddIndent { .. } => "odd number of spaces",
            Self::SkippedLevel { .. } => "too deep",
            Self::IndentedRoot { .. } => "indented root",
            Self::MultipleRoots { .. } => "second root",
            Self::Syntax { .. } => "here",
        }
    }

    /// Returns a hint on how to fix the outline
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some("add at least one non-comment line"),
            Self::OddIndent { .. } => Some("indent each level with one tab or two spaces"),
            Self::SkippedLevel { .. } => {
                Some("a child may be indented at most one level deeper than its parent")
            }
            Self::IndentedRoot { .. } => Some("remove the indentation of the first entry"),
            Self::MultipleRoots { .. } => {
                Some("indent this entry under another one, or add a common root above both")
            }
            Self::Syntax { .. } => None,
        }
    }
}

/// One physical line of the outline.
#[derive(Debug, PartialEq, Eq)]
struct Line<'a> {
    indent: &'a str,
    indent_span: Range<usize>,
    label: &'a str,
    label_span: Range<usize>,
}

impl Line<'_> {
    /// Returns true for blank and comment lines
    fn is_ignored(&self) -> bool {
        self.label.is_empty() || self.label.starts_with('#')
    }

    /// Converts the indentation into a nesting level
    fn level(&self) -> Result<usize, OutlineError> {
        let tabs = self.indent.chars().filter(|&c| c == '\t').count();
        let spaces = self.indent.len() - tabs;
        if spaces % 2 != 0 {
            return Err(OutlineError::OddIndent {
                span: self.indent_span.clone(),
            });
        }
        Ok(tabs + spaces / 2)
    }
}

/// Parse a single line: indentation, label and the line ending
fn line<'a>(input: &mut Input<'a>) -> IResult<Line<'a>> {
    let (indent, indent_span) = take_while(0.., [' ', '\t'])
        .with_span()
        .parse_next(input)?;
    let (raw_label, label_span) = take_till(0.., ['\r', '\n'])
        .with_span()
        .parse_next(input)?;
    opt(line_ending).parse_next(input)?;

    let label = raw_label.trim_end();
    let label_span = label_span.start..label_span.start + label.len();
    Ok(Line {
        indent,
        indent_span,
        label,
        label_span,
    })
}

/// Parse an indented outline into a tree of labels.
///
/// # Errors
///
/// Returns an [`OutlineError`] if the outline has no entries, more than one
/// unindented entry, or inconsistent indentation.
pub fn parse(source: &str) -> Result<Tree<String>, OutlineError> {
    let mut input = LocatingSlice::new(source);
    let mut tree = Tree::new();
    // Open entries from the root down to the most recent one
    let mut path: Vec<NodeId> = Vec::new();
    let mut root_span: Option<Range<usize>> = None;

    while input.eof_offset() > 0 {
        let start = input.current_token_start();
        let parsed = line.parse_next(&mut input).map_err(|_| OutlineError::Syntax {
            span: start..start + 1,
        })?;
        if input.current_token_start() == start {
            return Err(OutlineError::Syntax {
                span: start..start + 1,
            });
        }
        if parsed.is_ignored() {
            continue;
        }

        let level = parsed.level()?;
        trace!(label = parsed.label, level; "Outline entry");

        let Some(first_root) = root_span.clone() else {
            if level > 0 {
                return Err(OutlineError::IndentedRoot {
                    span: parsed.indent_span,
                });
            }
            tree = Tree::with_root(parsed.label.to_string());
            path.extend(tree.root());
            root_span = Some(parsed.label_span);
            continue;
        };

        if level == 0 {
            return Err(OutlineError::MultipleRoots {
                span: parsed.label_span,
                first: first_root,
            });
        }
        if level > path.len() {
            return Err(OutlineError::SkippedLevel {
                span: parsed.indent_span.start..parsed.label_span.end,
            });
        }

        path.truncate(level);
        let parent = path[level - 1];
        let child = tree
            .add_child(parent, parsed.label.to_string())
            .map_err(|_| OutlineError::Syntax {
                span: parsed.label_span.clone(),
            })?;
        path.push(child);
    }

    if tree.root().is_none() {
        return Err(OutlineError::Empty);
    }

    debug!(entries = tree.len(); "Outline parsed");
    Ok(tree)
}
