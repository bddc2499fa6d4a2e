//! Error types for selector building.

use thiserror::Error;

use crate::part::PartKind;

/// Errors raised when a part is added to a simple selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id or pseudo-element was set a second time.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    )]
    Duplicate {
        /// Kind of the part that was already set.
        part: PartKind,
    },

    /// A part was added after a part of a later stage.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    Order {
        /// Kind of the rejected part.
        part: PartKind,
        /// Later-stage kind already present in the selector.
        conflicting: PartKind,
    },
}

impl SelectorError {
    /// Kind of the part whose addition was rejected.
    pub fn part(&self) -> PartKind {
        match self {
            SelectorError::Duplicate { part } | SelectorError::Order { part, .. } => *part,
        }
    }

    /// Returns true for [`SelectorError::Duplicate`].
    pub fn is_duplicate(&self) -> bool {
        matches!(self, SelectorError::Duplicate { .. })
    }

    /// Returns true for [`SelectorError::Order`].
    pub fn is_order(&self) -> bool {
        matches!(self, SelectorError::Order { .. })
    }
}

/// Result type for selector operations.
pub type SelectorResult<T> = std::result::Result<T, SelectorError>;
