//! Selector formatter for different output styles.
//!
//! Simple selectors always render the same way; the style only affects how
//! combinators are joined to their operands.

use crate::selector::{SelectorNode, Stringify};

/// Output format for selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// One space on each side of the combinator token (default).
    /// Example: `ul > li`, and `tr   td` for the descendant token.
    #[default]
    Padded,

    /// Combinator token inserted verbatim.
    /// Example: `ul>li`, and `tr td` for the descendant token.
    Compact,
}

/// Formatted selector output in all styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSelector {
    /// Padded format output.
    pub padded: String,
    /// Compact format output.
    pub compact: String,
}

/// Selector formatter.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    _private: (),
}

impl Formatter {
    /// Format in all styles.
    ///
    /// Padded output keeps the descendant token's three spaces; compact
    /// output collapses it to one.
    pub fn format_all<S: SelectorNode + ?Sized>(node: &S) -> FormattedSelector {
        FormattedSelector {
            padded: node.format(Format::Padded),
            compact: node.format(Format::Compact),
        }
    }
}
